use crate::spring::{Spring, SpringConfig};

pub const DEFAULT_PARALLAX_RANGE_PX: f64 = 100.0;
pub const DEFAULT_POINTER_PARALLAX_PX: f64 = 20.0;
pub const DEFAULT_NAV_OFFSET_PX: f64 = 64.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }
}

/// A tracked element's vertical extent in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBounds {
    pub top: f64,
    pub height: f64,
}

impl RegionBounds {
    /// Converts a viewport-relative top into document coordinates.
    pub fn from_viewport(rect_top: f64, rect_height: f64, scroll_y: f64) -> Self {
        Self {
            top: rect_top + scroll_y,
            height: rect_height.max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    Document,
    Region(RegionBounds),
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// 0 at the top of the page, 1 at the maximum scroll offset.
pub fn document_progress(metrics: &ScrollMetrics) -> f64 {
    let max = metrics.max_scroll();
    if !(max > 0.0 && max.is_finite()) {
        return 0.0;
    }

    finite_or_zero(metrics.scroll_y / max).clamp(0.0, 1.0)
}

/// 0 when the region's top meets the viewport bottom, 1 when its bottom
/// meets the viewport top.
pub fn region_progress(metrics: &ScrollMetrics, region: &RegionBounds) -> f64 {
    let travel = region.height + metrics.viewport_height;
    let entered = metrics.scroll_y + metrics.viewport_height - region.top;

    if !(travel > 0.0 && travel.is_finite()) {
        return if entered > 0.0 { 1.0 } else { 0.0 };
    }

    finite_or_zero(entered / travel).clamp(0.0, 1.0)
}

pub fn progress_for(target: &ScrollTarget, metrics: &ScrollMetrics) -> f64 {
    match target {
        ScrollTarget::Document => document_progress(metrics),
        ScrollTarget::Region(region) => region_progress(metrics, region),
    }
}

/// Linear map from `+range` at progress 0 to `-range` at progress 1.
pub fn parallax_offset(progress: f64, range_px: f64) -> f64 {
    let progress = finite_or_zero(progress).clamp(0.0, 1.0);
    range_px + (-range_px - range_px) * progress
}

pub fn parallax_transform(progress: f64, range_px: f64) -> String {
    format!("translateY({:.2}px)", parallax_offset(progress, range_px))
}

pub fn progress_bar_transform(progress: f64) -> String {
    format!("scaleX({:.4})", finite_or_zero(progress).clamp(0.0, 1.0))
}

/// Pointer offset used by hero decorations: `(client / viewport - 0.5) * strength`.
pub fn pointer_parallax(
    client_x: f64,
    client_y: f64,
    viewport_width: f64,
    viewport_height: f64,
    strength_px: f64,
) -> (f64, f64) {
    fn axis(client: f64, extent: f64, strength: f64) -> f64 {
        if !(extent > 0.0 && extent.is_finite()) {
            return 0.0;
        }
        finite_or_zero((client / extent - 0.5) * strength)
    }

    (
        axis(client_x, viewport_width, strength_px),
        axis(client_y, viewport_height, strength_px),
    )
}

/// Scroll offset that puts a section's top just under the fixed nav.
pub fn section_scroll_target(element_top_in_viewport: f64, page_offset: f64, nav_height: f64) -> f64 {
    finite_or_zero(element_top_in_viewport + page_offset - nav_height).max(0.0)
}

/// Raw and spring-smoothed scroll progress for one target.
#[derive(Clone, Debug)]
pub struct ScrollProgress {
    target: ScrollTarget,
    raw: f64,
    primed: bool,
    spring: Spring,
}

impl ScrollProgress {
    pub fn new(target: ScrollTarget, spring: SpringConfig) -> Self {
        Self {
            target,
            raw: 0.0,
            primed: false,
            spring: Spring::new(0.0, spring),
        }
    }

    pub fn document(spring: SpringConfig) -> Self {
        Self::new(ScrollTarget::Document, spring)
    }

    pub fn region(bounds: RegionBounds, spring: SpringConfig) -> Self {
        Self::new(ScrollTarget::Region(bounds), spring)
    }

    /// Regions move when layout changes; callers refresh bounds before observing.
    pub fn retarget_region(&mut self, bounds: RegionBounds) {
        self.target = ScrollTarget::Region(bounds);
    }

    /// Records a new scroll position. The first observation is applied
    /// without animation.
    pub fn observe(&mut self, metrics: &ScrollMetrics) -> f64 {
        self.raw = progress_for(&self.target, metrics);
        if self.primed {
            self.spring.set_target(self.raw);
        } else {
            self.spring.snap_to(self.raw);
            self.primed = true;
        }
        self.raw
    }

    /// Returns `true` while the smoothed value is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.spring.step(dt)
    }

    #[cfg(test)]
    pub fn raw(&self) -> f64 {
        self.raw
    }

    pub fn smoothed(&self) -> f64 {
        self.spring.value().clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            viewport_height: 800.0,
            document_height: 4_800.0,
        }
    }

    #[test]
    fn document_progress_spans_top_to_bottom() {
        assert_eq!(document_progress(&metrics(0.0)), 0.0);
        assert_eq!(document_progress(&metrics(2_000.0)), 0.5);
        assert_eq!(document_progress(&metrics(4_000.0)), 1.0);
    }

    #[test]
    fn document_progress_is_monotonic_and_clamped() {
        let mut previous = document_progress(&metrics(-50.0));
        assert_eq!(previous, 0.0);

        for step in 0..=90 {
            let current = document_progress(&metrics(f64::from(step) * 50.0));
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn short_document_has_zero_progress() {
        let short = ScrollMetrics {
            scroll_y: 0.0,
            viewport_height: 900.0,
            document_height: 600.0,
        };
        assert_eq!(document_progress(&short), 0.0);
    }

    #[test]
    fn region_progress_tracks_full_transit() {
        let region = RegionBounds {
            top: 2_000.0,
            height: 400.0,
        };

        assert_eq!(region_progress(&metrics(0.0), &region), 0.0);
        assert_eq!(region_progress(&metrics(1_200.0), &region), 0.0);
        assert_eq!(region_progress(&metrics(1_800.0), &region), 0.5);
        assert_eq!(region_progress(&metrics(2_400.0), &region), 1.0);
        assert_eq!(region_progress(&metrics(3_000.0), &region), 1.0);
    }

    #[test]
    fn region_bounds_convert_from_viewport_rect() {
        let bounds = RegionBounds::from_viewport(-150.0, 300.0, 1_000.0);
        assert_eq!(bounds.top, 850.0);
        assert_eq!(bounds.height, 300.0);
    }

    #[test]
    fn parallax_maps_progress_to_pixel_range() {
        assert_eq!(parallax_offset(0.0, DEFAULT_PARALLAX_RANGE_PX), 100.0);
        assert_eq!(parallax_offset(0.5, DEFAULT_PARALLAX_RANGE_PX), 0.0);
        assert_eq!(parallax_offset(1.0, DEFAULT_PARALLAX_RANGE_PX), -100.0);
        assert_eq!(parallax_transform(0.25, DEFAULT_PARALLAX_RANGE_PX), "translateY(50.00px)");
        assert_eq!(progress_bar_transform(1.5), "scaleX(1.0000)");
    }

    #[test]
    fn pointer_parallax_is_centered_on_viewport() {
        assert_eq!(pointer_parallax(640.0, 360.0, 1_280.0, 720.0, 20.0), (0.0, 0.0));
        assert_eq!(pointer_parallax(0.0, 720.0, 1_280.0, 720.0, 20.0), (-10.0, 10.0));
        assert_eq!(pointer_parallax(10.0, 10.0, 0.0, 0.0, 20.0), (0.0, 0.0));
    }

    #[test]
    fn section_target_sits_below_nav() {
        assert_eq!(section_scroll_target(300.0, 1_000.0, DEFAULT_NAV_OFFSET_PX), 1_236.0);
        assert_eq!(section_scroll_target(10.0, 0.0, DEFAULT_NAV_OFFSET_PX), 0.0);
    }

    #[test]
    fn first_observation_primes_without_animation() {
        let mut progress = ScrollProgress::document(SpringConfig::SCROLL);
        progress.observe(&metrics(2_000.0));

        assert_eq!(progress.smoothed(), 0.5);
        assert!(!progress.tick(1.0 / 60.0));
    }

    #[test]
    fn later_observations_are_smoothed() {
        let mut progress = ScrollProgress::document(SpringConfig::SCROLL);
        progress.observe(&metrics(0.0));
        assert_eq!(progress.observe(&metrics(4_000.0)), 1.0);

        assert_eq!(progress.smoothed(), 0.0);
        assert!(progress.tick(1.0 / 60.0));
        let partial = progress.smoothed();
        assert!(partial > 0.0 && partial < 1.0);

        while progress.tick(1.0 / 60.0) {}
        assert_eq!(progress.smoothed(), 1.0);
        assert_eq!(progress.raw(), 1.0);
    }

    #[test]
    fn region_progress_follows_retargeted_bounds() {
        let mut progress = ScrollProgress::region(
            RegionBounds {
                top: 2_000.0,
                height: 400.0,
            },
            SpringConfig::SCROLL,
        );
        assert_eq!(progress.observe(&metrics(1_800.0)), 0.5);

        progress.retarget_region(RegionBounds {
            top: 1_200.0,
            height: 400.0,
        });
        assert_eq!(progress.observe(&metrics(1_800.0)), 1.0);
    }
}
