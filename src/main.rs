// The client is the only consumer of these outside tests.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod contact;
mod log;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod scroll;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod signal;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod spring;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod theme;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod tilt;

#[cfg(target_arch = "wasm32")]
mod content;
#[cfg(target_arch = "wasm32")]
mod frontend;

use config::MotionConfig;
use log::{log_event, LogLevel};

fn load_config() -> MotionConfig {
    let config = MotionConfig::from_build_env();
    log_event(
        config.log_level,
        LogLevel::Info,
        "config_resolved",
        serde_json::to_value(&config).unwrap_or_default(),
    );
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    load_config();
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run(load_config());
}
