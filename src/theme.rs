use crate::{
    log::{log_event, LogLevel},
    signal::{Signal, Subscription},
};
use serde_json::json;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} mode")
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
    Default,
}

impl ThemeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::System => "system",
            Self::Default => "default",
        }
    }
}

/// Why a theme is being applied; sinks may animate toggles but not the
/// initial paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeChange {
    Initial,
    Toggle,
}

/// Durable key/value storage for the preference.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, &'static str>;
    fn write(&self, key: &str, value: &str) -> Result<(), &'static str>;
}

/// Applies the global visual flag for a theme.
pub trait ThemeSink {
    fn apply(&self, theme: Theme, change: ThemeChange);
}

/// Stored value wins, then the system signal, then dark.
pub fn resolve_initial_theme(stored: Option<Theme>, system_prefers_dark: Option<bool>) -> (Theme, ThemeSource) {
    if let Some(theme) = stored {
        return (theme, ThemeSource::Stored);
    }

    match system_prefers_dark {
        Some(true) => (Theme::Dark, ThemeSource::System),
        Some(false) => (Theme::Light, ThemeSource::System),
        None => (Theme::Dark, ThemeSource::Default),
    }
}

pub struct ThemeController<S, A> {
    store: S,
    sink: A,
    current: Option<Theme>,
    changes: Signal<Theme>,
    log_level: LogLevel,
}

impl<S: PreferenceStore, A: ThemeSink> ThemeController<S, A> {
    pub fn new(store: S, sink: A, log_level: LogLevel) -> Self {
        Self {
            store,
            sink,
            current: None,
            changes: Signal::new(),
            log_level,
        }
    }

    /// `None` until [`Self::initialize`] has run.
    #[cfg(test)]
    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    pub fn subscribe(&self, handler: impl Fn(&Theme) + 'static) -> Subscription {
        self.changes.subscribe(handler)
    }

    /// Resolves the preference once; later calls return the resolved value
    /// without touching storage or the sink.
    pub fn initialize(&mut self, system_prefers_dark: Option<bool>) -> Theme {
        if let Some(theme) = self.current {
            return theme;
        }

        let (theme, source) = resolve_initial_theme(self.read_stored(), system_prefers_dark);
        self.current = Some(theme);
        self.sink.apply(theme, ThemeChange::Initial);
        log_event(
            self.log_level,
            LogLevel::Info,
            "theme_resolved",
            json!({ "theme": theme.as_str(), "source": source.as_str() }),
        );
        self.changes.emit(&theme);
        theme
    }

    /// Flips the theme. Does nothing before initialization.
    pub fn toggle(&mut self) -> Option<Theme> {
        let next = self.current?.toggled();
        self.set(next);
        Some(next)
    }

    /// Persists and applies `theme` together with the state change.
    pub fn set(&mut self, theme: Theme) {
        self.current = Some(theme);
        if let Err(reason) = self.store.write(THEME_KEY, theme.as_str()) {
            self.log_store_failure("write", reason);
        }
        self.sink.apply(theme, ThemeChange::Toggle);
        log_event(
            self.log_level,
            LogLevel::Info,
            "theme_changed",
            json!({ "theme": theme.as_str() }),
        );
        self.changes.emit(&theme);
    }

    fn read_stored(&self) -> Option<Theme> {
        match self.store.read(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::from_str),
            Err(reason) => {
                self.log_store_failure("read", reason);
                None
            }
        }
    }

    fn log_store_failure(&self, operation: &str, reason: &str) {
        log_event(
            self.log_level,
            LogLevel::Debug,
            "theme_store_unavailable",
            json!({ "operation": operation, "reason": reason }),
        );
    }
}
