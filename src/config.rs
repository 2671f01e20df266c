use crate::{
    contact::{DeliveryTiming, DEFAULT_SEND_DELAY_MS, DEFAULT_SUCCESS_VISIBLE_MS},
    log::LogLevel,
    scroll::{DEFAULT_NAV_OFFSET_PX, DEFAULT_PARALLAX_RANGE_PX, DEFAULT_POINTER_PARALLAX_PX},
    spring::SpringConfig,
    tilt::DEFAULT_TILT_MAX_DEGREES,
};
use serde::Serialize;
use std::time::Duration;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const TILT_MAX_DEGREES_BOUNDS: (f64, f64) = (0.0, 45.0);
const SPRING_STIFFNESS_BOUNDS: (f64, f64) = (1.0, 2_000.0);
const SPRING_DAMPING_BOUNDS: (f64, f64) = (1.0, 500.0);
const PARALLAX_RANGE_PX_BOUNDS: (f64, f64) = (0.0, 400.0);
const POINTER_PARALLAX_PX_BOUNDS: (f64, f64) = (0.0, 200.0);
const NAV_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 256.0);
const SEND_DELAY_MS_BOUNDS: (u64, u64) = (0, 10_000);
const SUCCESS_VISIBLE_MS_BOUNDS: (u64, u64) = (500, 30_000);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MotionConfig {
    pub tilt_max_degrees: f64,
    pub tilt_spring: SpringConfig,
    pub scroll_spring: SpringConfig,
    pub parallax_range_px: f64,
    pub pointer_parallax_px: f64,
    pub nav_offset_px: f64,
    pub send_delay_ms: u64,
    pub success_visible_ms: u64,
    pub log_level: LogLevel,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl MotionConfig {
    /// The client has no runtime environment, so overrides are baked in at
    /// build time.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tilt_max_degrees = parse_f64_with_bounds(
            lookup("SHOWCASE_TILT_MAX_DEGREES"),
            DEFAULT_TILT_MAX_DEGREES,
            TILT_MAX_DEGREES_BOUNDS,
        );
        let tilt_spring = SpringConfig::TILT.with_constants(
            parse_f64_with_bounds(
                lookup("SHOWCASE_TILT_STIFFNESS"),
                SpringConfig::TILT.stiffness,
                SPRING_STIFFNESS_BOUNDS,
            ),
            parse_f64_with_bounds(
                lookup("SHOWCASE_TILT_DAMPING"),
                SpringConfig::TILT.damping,
                SPRING_DAMPING_BOUNDS,
            ),
        );
        let scroll_spring = SpringConfig::SCROLL.with_constants(
            parse_f64_with_bounds(
                lookup("SHOWCASE_SCROLL_STIFFNESS"),
                SpringConfig::SCROLL.stiffness,
                SPRING_STIFFNESS_BOUNDS,
            ),
            parse_f64_with_bounds(
                lookup("SHOWCASE_SCROLL_DAMPING"),
                SpringConfig::SCROLL.damping,
                SPRING_DAMPING_BOUNDS,
            ),
        );
        let parallax_range_px = parse_f64_with_bounds(
            lookup("SHOWCASE_PARALLAX_RANGE_PX"),
            DEFAULT_PARALLAX_RANGE_PX,
            PARALLAX_RANGE_PX_BOUNDS,
        );
        let pointer_parallax_px = parse_f64_with_bounds(
            lookup("SHOWCASE_POINTER_PARALLAX_PX"),
            DEFAULT_POINTER_PARALLAX_PX,
            POINTER_PARALLAX_PX_BOUNDS,
        );
        let nav_offset_px = parse_f64_with_bounds(
            lookup("SHOWCASE_NAV_OFFSET_PX"),
            DEFAULT_NAV_OFFSET_PX,
            NAV_OFFSET_PX_BOUNDS,
        );
        let send_delay_ms = parse_u64_with_bounds(
            lookup("SHOWCASE_SEND_DELAY_MS"),
            DEFAULT_SEND_DELAY_MS,
            SEND_DELAY_MS_BOUNDS,
        );
        let success_visible_ms = parse_u64_with_bounds(
            lookup("SHOWCASE_SUCCESS_VISIBLE_MS"),
            DEFAULT_SUCCESS_VISIBLE_MS,
            SUCCESS_VISIBLE_MS_BOUNDS,
        );
        let log_level = lookup("SHOWCASE_LOG_LEVEL")
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            tilt_max_degrees,
            tilt_spring,
            scroll_spring,
            parallax_range_px,
            pointer_parallax_px,
            nav_offset_px,
            send_delay_ms,
            success_visible_ms,
            log_level,
        }
    }

    pub fn delivery_timing(&self) -> DeliveryTiming {
        DeliveryTiming {
            send_delay: Duration::from_millis(self.send_delay_ms),
            success_visible: Duration::from_millis(self.success_visible_ms),
        }
    }
}

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        "SHOWCASE_TILT_MAX_DEGREES" => option_env!("SHOWCASE_TILT_MAX_DEGREES"),
        "SHOWCASE_TILT_STIFFNESS" => option_env!("SHOWCASE_TILT_STIFFNESS"),
        "SHOWCASE_TILT_DAMPING" => option_env!("SHOWCASE_TILT_DAMPING"),
        "SHOWCASE_SCROLL_STIFFNESS" => option_env!("SHOWCASE_SCROLL_STIFFNESS"),
        "SHOWCASE_SCROLL_DAMPING" => option_env!("SHOWCASE_SCROLL_DAMPING"),
        "SHOWCASE_PARALLAX_RANGE_PX" => option_env!("SHOWCASE_PARALLAX_RANGE_PX"),
        "SHOWCASE_POINTER_PARALLAX_PX" => option_env!("SHOWCASE_POINTER_PARALLAX_PX"),
        "SHOWCASE_NAV_OFFSET_PX" => option_env!("SHOWCASE_NAV_OFFSET_PX"),
        "SHOWCASE_SEND_DELAY_MS" => option_env!("SHOWCASE_SEND_DELAY_MS"),
        "SHOWCASE_SUCCESS_VISIBLE_MS" => option_env!("SHOWCASE_SUCCESS_VISIBLE_MS"),
        "SHOWCASE_LOG_LEVEL" => option_env!("SHOWCASE_LOG_LEVEL"),
        _ => None,
    };

    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_f64_with_bounds(raw: Option<String>, default: f64, bounds: (f64, f64)) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u64_with_bounds(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(pairs: &[(&str, &str)]) -> MotionConfig {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        MotionConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_match_observed_motion() {
        let config = MotionConfig::default();

        assert_eq!(config.tilt_max_degrees, 10.0);
        assert_eq!(config.tilt_spring, SpringConfig::TILT);
        assert_eq!(config.scroll_spring, SpringConfig::SCROLL);
        assert_eq!(config.parallax_range_px, 100.0);
        assert_eq!(config.nav_offset_px, 64.0);
        assert_eq!(config.delivery_timing(), DeliveryTiming::default());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn in_range_overrides_are_applied() {
        let config = config_with(&[
            ("SHOWCASE_TILT_MAX_DEGREES", " 15 "),
            ("SHOWCASE_TILT_DAMPING", "20"),
            ("SHOWCASE_SEND_DELAY_MS", "250"),
            ("SHOWCASE_LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(config.tilt_max_degrees, 15.0);
        assert_eq!(config.tilt_spring.damping, 20.0);
        assert_eq!(config.tilt_spring.stiffness, 300.0);
        assert_eq!(config.send_delay_ms, 250);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_range_or_garbage_falls_back_to_defaults() {
        let config = config_with(&[
            ("SHOWCASE_TILT_MAX_DEGREES", "90"),
            ("SHOWCASE_SCROLL_STIFFNESS", "0"),
            ("SHOWCASE_PARALLAX_RANGE_PX", "NaN"),
            ("SHOWCASE_SUCCESS_VISIBLE_MS", "-3"),
            ("SHOWCASE_LOG_LEVEL", "verbose"),
        ]);

        assert_eq!(config.tilt_max_degrees, DEFAULT_TILT_MAX_DEGREES);
        assert_eq!(config.scroll_spring.stiffness, SpringConfig::SCROLL.stiffness);
        assert_eq!(config.parallax_range_px, DEFAULT_PARALLAX_RANGE_PX);
        assert_eq!(config.success_visible_ms, DEFAULT_SUCCESS_VISIBLE_MS);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_serializes_for_startup_logging() {
        let value = serde_json::to_value(MotionConfig::default()).expect("config serializes");
        assert_eq!(value["log_level"], "info");
        assert_eq!(value["tilt_spring"]["stiffness"], 300.0);
    }
}
