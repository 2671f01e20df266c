use crate::{
    config::MotionConfig,
    contact::{simulate_delivery, ContactAction, ContactField, ContactForm, PendingDeliveries},
    content::{self, Project, SocialLink},
    log::{log_event, LogLevel},
    scroll::{
        parallax_transform, pointer_parallax, progress_bar_transform, section_scroll_target, RegionBounds,
        ScrollMetrics, ScrollProgress,
    },
    signal::Signal,
    theme::{PreferenceStore, Theme, ThemeChange, ThemeController, ThemeSink},
    tilt::{Rect, TiltTracker},
};
use futures_util::future::abortable;
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::{Function, Reflect};
use serde_json::json;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Storage,
};
use yew::prelude::*;

const FALLBACK_FRAME_SECONDS: f64 = 1.0 / 60.0;

struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    fn open() -> Self {
        Self {
            storage: window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, &'static str> {
        let storage = self.storage.as_ref().ok_or("local storage unavailable")?;
        storage.get_item(key).map_err(|_| "local storage read failed")
    }

    fn write(&self, key: &str, value: &str) -> Result<(), &'static str> {
        let storage = self.storage.as_ref().ok_or("local storage unavailable")?;
        storage.set_item(key, value).map_err(|_| "local storage write failed")
    }
}

struct DocumentThemeSink;

impl ThemeSink for DocumentThemeSink {
    fn apply(&self, theme: Theme, change: ThemeChange) {
        match change {
            ThemeChange::Initial => apply_theme(theme),
            ThemeChange::Toggle => apply_theme_with_transition(theme),
        }
    }
}

fn media_matches(query: &str) -> Option<bool> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

fn system_prefers_dark() -> Option<bool> {
    media_matches("(prefers-color-scheme: dark)")
}

fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) = Reflect::get(&document_js, &JsValue::from_str("startViewTransition")) else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn read_scroll_metrics() -> ScrollMetrics {
    let Some(win) = window() else {
        return ScrollMetrics::default();
    };

    let (_, viewport_height) = viewport_size();
    let document_height = win
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);

    ScrollMetrics {
        scroll_y: win.scroll_y().unwrap_or(0.0),
        viewport_height,
        document_height,
    }
}

fn scroll_to_section(section_id: &str, nav_offset: f64) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let Some(element) = win.document().and_then(|d| d.get_element_by_id(section_id)) else {
        return false;
    };

    let top = section_scroll_target(
        element.get_bounding_client_rect().top(),
        win.scroll_y().unwrap_or(0.0),
        nav_offset,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    true
}

fn set_style(node: &NodeRef, property: &str, value: &str) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

type FrameStep = Rc<dyn Fn(f64) -> bool>;

/// Drives a step function once per animation frame until it reports rest.
/// Dropping the pending frame (via `cancel`) stops the loop.
#[derive(Clone, Default)]
struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    last_timestamp: Rc<Cell<Option<f64>>>,
}

impl FrameLoop {
    fn ensure_running(&self, step: FrameStep) {
        if self.pending.borrow().is_some() {
            return;
        }
        self.request(step);
    }

    fn request(&self, step: FrameStep) {
        let frame_loop = self.clone();
        let frame = request_animation_frame(move |timestamp| {
            frame_loop.pending.borrow_mut().take();
            let dt = frame_loop
                .last_timestamp
                .replace(Some(timestamp))
                .map(|previous| ((timestamp - previous) / 1000.0).max(0.0))
                .unwrap_or(FALLBACK_FRAME_SECONDS);

            if step(dt) {
                frame_loop.request(step);
            } else {
                frame_loop.last_timestamp.set(None);
            }
        });
        *self.pending.borrow_mut() = Some(frame);
    }

    fn cancel(&self) {
        self.pending.borrow_mut().take();
        self.last_timestamp.set(None);
    }
}

/// Fans one set of window scroll/resize listeners out to every tracked region.
#[derive(Clone, Default, PartialEq)]
struct ScrollHub {
    metrics: Signal<ScrollMetrics>,
}

#[derive(Clone, PartialEq)]
struct ThemeHandle {
    theme: Option<Theme>,
    toggle: Callback<()>,
}

#[hook]
fn use_motion_config() -> Rc<MotionConfig> {
    use_context::<Rc<MotionConfig>>().unwrap_or_default()
}

#[hook]
fn use_pointer_parallax(strength_px: f64) -> (f64, f64) {
    let offset = use_state(|| (0.0, 0.0));

    {
        let offset = offset.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let (width, height) = viewport_size();
                    offset.set(pointer_parallax(
                        f64::from(event.client_x()),
                        f64::from(event.client_y()),
                        width,
                        height,
                        strength_px,
                    ));
                })
            });
            move || drop(listener)
        });
    }

    *offset
}

#[derive(Properties, PartialEq)]
struct ChildrenProps {
    #[prop_or_default]
    children: Html,
}

#[function_component(ThemeProvider)]
fn theme_provider(props: &ChildrenProps) -> Html {
    let log_level = use_motion_config().log_level;
    let controller = use_mut_ref(|| ThemeController::new(LocalStore::open(), DocumentThemeSink, log_level));
    let theme = use_state(|| None::<Theme>);

    {
        let controller = controller.clone();
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let subscription = controller.borrow().subscribe(move |next| theme.set(Some(*next)));
            controller.borrow_mut().initialize(system_prefers_dark());
            move || subscription.unsubscribe()
        });
    }

    let toggle = Callback::from(move |_| {
        controller.borrow_mut().toggle();
    });
    let handle = ThemeHandle { theme: *theme, toggle };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<ThemeHandle>>
    }
}

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let Some(handle) = use_context::<ThemeHandle>() else {
        return Html::default();
    };
    let Some(theme) = handle.theme else {
        return Html::default();
    };

    let onclick = handle.toggle.reform(|_: MouseEvent| ());

    html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={theme.toggle_label()}
            aria-pressed={theme.is_dark().to_string()}
            onclick={onclick}
        >
            <span aria-hidden="true">{theme.icon()}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct TiltCardProps {
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(TiltCard)]
fn tilt_card(props: &TiltCardProps) -> Html {
    let config = use_motion_config();
    let card_ref = use_node_ref();
    let tracker = use_mut_ref(|| TiltTracker::new(config.tilt_max_degrees, config.tilt_spring));
    let frames = (*use_state(FrameLoop::default)).clone();

    {
        let frames = frames.clone();
        use_effect_with((), move |_| move || frames.cancel());
    }

    let step: FrameStep = {
        let tracker = tracker.clone();
        let card_ref = card_ref.clone();
        Rc::new(move |dt| {
            let moving = tracker.borrow_mut().tick(dt);
            set_style(&card_ref, "transform", &tracker.borrow().transform());
            moving
        })
    };

    let onmousemove = {
        let tracker = tracker.clone();
        let card_ref = card_ref.clone();
        let frames = frames.clone();
        let step = step.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = card_ref.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            tracker.borrow_mut().pointer_move(
                Rect::new(rect.left(), rect.top(), rect.width(), rect.height()),
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );
            frames.ensure_running(step.clone());
        })
    };

    let onmouseleave = Callback::from(move |_: MouseEvent| {
        tracker.borrow_mut().pointer_leave();
        frames.ensure_running(step.clone());
    });

    html! {
        <div
            ref={card_ref}
            class={classes!("tilt-card", props.class.clone())}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
        >
            {props.children.clone()}
        </div>
    }
}

#[function_component(ScrollProgressBar)]
fn scroll_progress_bar() -> Html {
    let config = use_motion_config();
    let hub = use_context::<ScrollHub>();
    let bar_ref = use_node_ref();
    let frames = (*use_state(FrameLoop::default)).clone();

    {
        let bar_ref = bar_ref.clone();
        let spring = config.scroll_spring;
        use_effect_with((), move |_| {
            let progress = Rc::new(RefCell::new(ScrollProgress::document(spring)));
            let step: FrameStep = {
                let progress = progress.clone();
                Rc::new(move |dt| {
                    let moving = progress.borrow_mut().tick(dt);
                    set_style(&bar_ref, "transform", &progress_bar_transform(progress.borrow().smoothed()));
                    moving
                })
            };
            let on_metrics = {
                let frames = frames.clone();
                move |metrics: &ScrollMetrics| {
                    progress.borrow_mut().observe(metrics);
                    frames.ensure_running(step.clone());
                }
            };

            on_metrics(&read_scroll_metrics());
            let subscription = hub.map(|hub| hub.metrics.subscribe(on_metrics));
            move || {
                if let Some(subscription) = subscription {
                    subscription.unsubscribe();
                }
                frames.cancel();
            }
        });
    }

    html! { <div class="scroll-progress" ref={bar_ref} aria-hidden="true"></div> }
}

#[derive(Properties, PartialEq)]
struct ParallaxSectionProps {
    id: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(ParallaxSection)]
fn parallax_section(props: &ParallaxSectionProps) -> Html {
    let config = use_motion_config();
    let hub = use_context::<ScrollHub>();
    let section_ref = use_node_ref();
    let backdrop_ref = use_node_ref();
    let frames = (*use_state(FrameLoop::default)).clone();

    {
        let section_ref = section_ref.clone();
        let backdrop_ref = backdrop_ref.clone();
        let spring = config.scroll_spring;
        let range_px = config.parallax_range_px;
        use_effect_with((), move |_| {
            let progress = Rc::new(RefCell::new(ScrollProgress::region(
                RegionBounds { top: 0.0, height: 0.0 },
                spring,
            )));
            let step: FrameStep = {
                let progress = progress.clone();
                Rc::new(move |dt| {
                    let moving = progress.borrow_mut().tick(dt);
                    set_style(
                        &backdrop_ref,
                        "transform",
                        &parallax_transform(progress.borrow().smoothed(), range_px),
                    );
                    moving
                })
            };
            let on_metrics = {
                let frames = frames.clone();
                move |metrics: &ScrollMetrics| {
                    let Some(section) = section_ref.cast::<Element>() else {
                        return;
                    };
                    let rect = section.get_bounding_client_rect();
                    {
                        let mut progress = progress.borrow_mut();
                        progress.retarget_region(RegionBounds::from_viewport(
                            rect.top(),
                            rect.height(),
                            metrics.scroll_y,
                        ));
                        progress.observe(metrics);
                    }
                    frames.ensure_running(step.clone());
                }
            };

            on_metrics(&read_scroll_metrics());
            let subscription = hub.map(|hub| hub.metrics.subscribe(on_metrics));
            move || {
                if let Some(subscription) = subscription {
                    subscription.unsubscribe();
                }
                frames.cancel();
            }
        });
    }

    html! {
        <section ref={section_ref} id={props.id.clone()} class={classes!("section", props.class.clone())}>
            <div ref={backdrop_ref} class="section-backdrop" aria-hidden="true">
                <div class="blob blob-primary"></div>
                <div class="blob blob-purple"></div>
            </div>
            <div class="section-content">{props.children.clone()}</div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionTitleProps {
    text: AttrValue,
}

#[function_component(SectionTitle)]
fn section_title(props: &SectionTitleProps) -> Html {
    html! { <h2 class="section-title gradient-text">{props.text.clone()}</h2> }
}

#[derive(Properties, PartialEq)]
struct FloatingProps {
    #[prop_or_default]
    delay_s: f64,
    #[prop_or_default]
    children: Html,
}

#[function_component(Floating)]
fn floating(props: &FloatingProps) -> Html {
    let style = format!("animation-delay: {:.2}s;", props.delay_s);
    html! { <div class="floating" style={style}>{props.children.clone()}</div> }
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    let config = use_motion_config();
    let menu_open = use_state(|| false);

    let go_to = {
        let menu_open = menu_open.clone();
        let nav_offset = config.nav_offset_px;
        Callback::from(move |section_id: &'static str| {
            if scroll_to_section(section_id, nav_offset) {
                menu_open.set(false);
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = |class: &'static str| -> Html {
        content::NAV_SECTIONS
            .iter()
            .map(|(label, id)| {
                let id = *id;
                html! {
                    <button key={id} class={class} type="button" onclick={go_to.reform(move |_: MouseEvent| id)}>
                        {*label}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class="site-nav">
            <div class="nav-inner">
                <button class="brand gradient-text" type="button" onclick={go_to.reform(|_: MouseEvent| "home")}>
                    {content::OWNER_INITIALS}
                </button>
                <div class="nav-links">
                    {links("nav-link")}
                    <ThemeToggle />
                </div>
                <div class="nav-compact">
                    <ThemeToggle />
                    <button class="menu-toggle" type="button" aria-label="Toggle menu" onclick={toggle_menu}>
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            if *menu_open {
                <div class="nav-menu">{links("nav-menu-link")}</div>
            }
        </nav>
    }
}

fn social_link(link: &SocialLink, class: &'static str) -> Html {
    let (target, rel) = if link.is_external() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    html! {
        <a key={link.label} class={class} href={link.href} target={target} rel={rel} aria-label={link.label}>
            {link.icon}
        </a>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let config = use_motion_config();
    let (pointer_x, pointer_y) = use_pointer_parallax(config.pointer_parallax_px);
    let nav_offset = config.nav_offset_px;
    let view_projects = Callback::from(move |_: MouseEvent| {
        scroll_to_section("projects", nav_offset);
    });
    let portrait_style = format!(
        "transform: translateX({:.2}px) translateY({:.2}px);",
        pointer_x * 0.5,
        pointer_y * 0.5
    );

    html! {
        <section id="home" class="hero">
            <div class="hero-gradient" aria-hidden="true"></div>
            <div class="hero-pulse" aria-hidden="true"></div>
            <div class="hero-shapes" aria-hidden="true">
                {for content::HERO_SHAPES.iter().map(|(class, factor, delay_s)| {
                    let style = format!(
                        "transform: translateX({:.2}px) translateY({:.2}px);",
                        pointer_x * factor,
                        pointer_y * factor
                    );
                    html! {
                        <Floating delay_s={*delay_s}>
                            <div class={*class} style={style}></div>
                        </Floating>
                    }
                })}
            </div>
            <div class="hero-grid">
                <div class="hero-copy">
                    <span class="role-badge">{content::ROLE}</span>
                    <h1 class="hero-name">
                        <span class="gradient-text">{content::OWNER_NAME.0}</span>
                        <br />
                        <span class="gradient-text accent">{content::OWNER_NAME.1}</span>
                    </h1>
                    <p class="hero-tagline">
                        {"Building "}<strong>{"interactive"}</strong>{", "}
                        <strong>{"responsive"}</strong>{", and "}
                        <strong>{"visually engaging"}</strong>
                        {" web applications with modern technologies."}
                    </p>
                    <div class="hero-actions">
                        <button class="button button-primary" type="button" onclick={view_projects}>
                            {"View Projects"}
                        </button>
                        <a class="button button-outline" href={content::RESUME_HREF} download={content::RESUME_FILE_NAME}>
                            {"Download Resume"}
                        </a>
                    </div>
                    <div class="hero-socials">
                        {for content::HERO_SOCIALS.iter().map(|link| social_link(link, "social-link"))}
                    </div>
                </div>
                <div class="hero-portrait">
                    <TiltCard>
                        <div class="portrait-frame" style={portrait_style}>
                            <div class="portrait-glow" aria-hidden="true"></div>
                            <img
                                class="portrait"
                                src={content::PORTRAIT_SRC}
                                alt={format!("{} {} - {}", content::OWNER_NAME.0, content::OWNER_NAME.1, content::ROLE)}
                            />
                            {for content::HERO_CHIPS.iter().map(|chip| html! {
                                <Floating delay_s={chip.delay_s}>
                                    <span class={chip.class}>{chip.label}</span>
                                </Floating>
                            })}
                        </div>
                    </TiltCard>
                </div>
            </div>
        </section>
    }
}

fn badge_list(items: &[&'static str], class: &'static str) -> Html {
    html! {
        <div class="badge-list">
            {for items.iter().map(|item| html! { <span key={*item} class={class}>{*item}</span> })}
        </div>
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <TiltCard key={project.title}>
            <article class={classes!("card", "project-card", project.accent)}>
                <header class="project-header">
                    <h3>{project.title}</h3>
                    if let Some(link) = project.link {
                        <a class="icon-link" href={link} target="_blank" rel="noopener noreferrer" aria-label="View project">
                            {"↗"}
                        </a>
                    }
                </header>
                <p class="muted">{project.description}</p>
                {badge_list(project.tech, "badge badge-primary")}
            </article>
        </TiltCard>
    }
}

#[function_component(MessageForm)]
fn message_form() -> Html {
    let config = use_motion_config();
    let form = use_mut_ref(ContactForm::default);
    let redraw = use_force_update();
    let deliveries = use_mut_ref(PendingDeliveries::default);

    {
        let deliveries = deliveries.clone();
        use_effect_with((), move |_| move || deliveries.borrow_mut().abort_all());
    }

    let oninput = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            let (name, value) = if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                return;
            };

            if let Some(field) = ContactField::from_name(&name) {
                form.borrow_mut().edit(field, value);
                redraw.force_update();
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let config = config.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let submitted = form.borrow_mut().begin_submit();
            let id = match submitted {
                Ok(id) => id,
                Err(error) => {
                    log_event(
                        config.log_level,
                        LogLevel::Info,
                        "contact_rejected",
                        json!({ "reason": error.as_str() }),
                    );
                    return;
                }
            };

            log_event(
                config.log_level,
                LogLevel::Info,
                "contact_submit_started",
                json!({ "submission": id.get() }),
            );
            redraw.force_update();

            let dispatch = {
                let form = form.clone();
                let redraw = redraw.clone();
                let log_level = config.log_level;
                move |action: ContactAction| {
                    if let ContactAction::Delivered(id) = action {
                        log_event(
                            log_level,
                            LogLevel::Info,
                            "contact_delivered",
                            json!({ "submission": id.get() }),
                        );
                    }
                    if form.borrow_mut().apply(action) {
                        redraw.force_update();
                    }
                }
            };

            let (task, handle) = abortable(simulate_delivery(
                id,
                config.delivery_timing(),
                gloo_timers::future::sleep,
                dispatch,
            ));
            deliveries.borrow_mut().track(id, handle);
            let deliveries = deliveries.clone();
            spawn_local(async move {
                let _ = task.await;
                deliveries.borrow_mut().finish(id);
            });
        })
    };

    let current = form.borrow();
    let draft = current.draft();

    html! {
        <form class="card form-card" onsubmit={onsubmit}>
            <h3>{"Send a Message"}</h3>
            if current.is_submitted() {
                <div class="form-success" role="status">
                    <span aria-hidden="true">{"✓"}</span>
                    <span>{"Message sent successfully!"}</span>
                </div>
            }
            <input
                name={ContactField::Name.as_str()}
                value={draft.name.clone()}
                oninput={oninput.clone()}
                placeholder="Your Name"
                required=true
            />
            <input
                type="email"
                name={ContactField::Email.as_str()}
                value={draft.email.clone()}
                oninput={oninput.clone()}
                placeholder="Your Email"
                required=true
            />
            <textarea
                name={ContactField::Message.as_str()}
                value={draft.message.clone()}
                oninput={oninput}
                placeholder="Your Message"
                rows="5"
                required=true
            />
            <button class="button button-primary" type="submit" disabled={!current.can_submit()}>
                {if current.is_submitting() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<MotionConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let hub = (*use_state(ScrollHub::default)).clone();

    {
        let hub = hub.clone();
        let log_level = props.config.log_level;
        use_effect_with((), move |_| {
            log_event(log_level, LogLevel::Info, "app_mounted", json!({}));
            let listeners = window().map(|win| {
                let on_scroll = {
                    let hub = hub.clone();
                    EventListener::new(&win, "scroll", move |_| hub.metrics.emit(&read_scroll_metrics()))
                };
                let on_resize =
                    EventListener::new(&win, "resize", move |_| hub.metrics.emit(&read_scroll_metrics()));
                [on_scroll, on_resize]
            });
            move || drop(listeners)
        });
    }

    html! {
        <ContextProvider<Rc<MotionConfig>> context={props.config.clone()}>
            <ContextProvider<ScrollHub> context={hub}>
                <ThemeProvider>
                    <div class="page">
                        <ScrollProgressBar />
                        <NavBar />
                        <Hero />

                        <ParallaxSection id="about">
                            <SectionTitle text="About Me" />
                            <TiltCard class="narrow">
                                <div class="card about-card">
                                    <p class="lead">{content::ABOUT}</p>
                                </div>
                            </TiltCard>
                        </ParallaxSection>

                        <ParallaxSection id="skills" class="muted-band">
                            <SectionTitle text="Skills & Technologies" />
                            <div class="grid grid-3">
                                {for content::SKILL_CATEGORIES.iter().map(|category| html! {
                                    <TiltCard key={category.title}>
                                        <div class={classes!("card", "skill-card", category.accent)}>
                                            <h3>{category.title}</h3>
                                            {badge_list(category.skills, "badge")}
                                        </div>
                                    </TiltCard>
                                })}
                                <TiltCard class="span-all">
                                    <div class="card">
                                        <h3>{"Tools & Platforms"}</h3>
                                        {badge_list(&content::TOOLS, "badge badge-outline")}
                                    </div>
                                </TiltCard>
                            </div>
                        </ParallaxSection>

                        <ParallaxSection id="projects">
                            <SectionTitle text="Featured Projects" />
                            <h3 class="group-title gradient-text">{"Frontend Projects"}</h3>
                            <div class="grid grid-2">
                                {for content::FRONTEND_PROJECTS.iter().map(project_card)}
                            </div>
                            <h3 class="group-title gradient-text warm">{"Electronics & Hybrid Projects"}</h3>
                            <div class="grid grid-2">
                                {for content::HARDWARE_PROJECTS.iter().map(project_card)}
                            </div>
                        </ParallaxSection>

                        <ParallaxSection id="experience" class="muted-band">
                            <SectionTitle text="Experience" />
                            <div class="stack narrow">
                                {for content::EXPERIENCE.iter().map(|experience| html! {
                                    <TiltCard key={experience.title}>
                                        <div class="card experience-card">
                                            <h3>{experience.title}</h3>
                                            <p class="accent-text">{experience.company}</p>
                                            <ul class="points">
                                                {for experience.points.iter().map(|point| html! { <li>{*point}</li> })}
                                            </ul>
                                        </div>
                                    </TiltCard>
                                })}
                            </div>
                        </ParallaxSection>

                        <ParallaxSection id="education">
                            <SectionTitle text="Education" />
                            <TiltCard class="narrow">
                                <div class="card education-card">
                                    <div>
                                        <h3>{content::EDUCATION.degree}</h3>
                                        <p class="accent-text">{content::EDUCATION.field}</p>
                                        <p class="muted">{content::EDUCATION.grade}</p>
                                    </div>
                                    <div class="education-meta">
                                        <p class="muted">{content::EDUCATION.years}</p>
                                        <p class="muted small">{content::EDUCATION.school}</p>
                                    </div>
                                </div>
                            </TiltCard>
                        </ParallaxSection>

                        <ParallaxSection id="achievements" class="muted-band">
                            <SectionTitle text="Achievements" />
                            <div class="grid grid-2 narrow">
                                {for content::ACHIEVEMENTS.iter().map(|(title, description)| html! {
                                    <TiltCard key={*title}>
                                        <div class="card achievement-card">
                                            <span class="achievement-icon" aria-hidden="true">{"✦"}</span>
                                            <div>
                                                <h3>{*title}</h3>
                                                <p class="muted small">{*description}</p>
                                            </div>
                                        </div>
                                    </TiltCard>
                                })}
                            </div>
                        </ParallaxSection>

                        <ParallaxSection id="contact">
                            <SectionTitle text="Get In Touch" />
                            <div class="grid grid-2 narrow">
                                <TiltCard>
                                    <div class="card">
                                        <h3>{"Contact Information"}</h3>
                                        <ul class="contact-lines">
                                            {for content::CONTACT_LINES.iter().map(|line| html! {
                                                <li key={line.text}>
                                                    <span class="contact-icon" aria-hidden="true">{line.icon}</span>
                                                    if let Some(href) = line.href {
                                                        <a href={href}>{line.text}</a>
                                                    } else {
                                                        <span class="muted">{line.text}</span>
                                                    }
                                                </li>
                                            })}
                                        </ul>
                                        <div class="contact-socials">
                                            {for content::HERO_SOCIALS
                                                .iter()
                                                .filter(|link| link.is_external())
                                                .map(|link| social_link(link, "social-link"))}
                                        </div>
                                    </div>
                                </TiltCard>
                                <TiltCard>
                                    <MessageForm />
                                </TiltCard>
                            </div>
                        </ParallaxSection>

                        <footer class="site-footer">
                            <p class="muted">
                                {"Designed & Built by "}
                                <span class="gradient-text">
                                    {format!("{} {}", content::OWNER_NAME.0, content::OWNER_NAME.1)}
                                </span>
                            </p>
                            <p class="muted small">{format!("© {} All rights reserved", content::FOOTER_YEAR)}</p>
                        </footer>
                    </div>
                </ThemeProvider>
            </ContextProvider<ScrollHub>>
        </ContextProvider<Rc<MotionConfig>>>
    }
}

pub fn run(config: MotionConfig) {
    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
