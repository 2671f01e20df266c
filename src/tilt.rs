use crate::spring::{Spring, SpringConfig};

pub const DEFAULT_TILT_MAX_DEGREES: f64 = 10.0;
const TILT_PERSPECTIVE_PX: f64 = 1000.0;

/// Element bounds in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        (self.left..=self.left + self.width).contains(&x)
            && (self.top..=self.top + self.height).contains(&y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl Rotation {
    pub const ZERO: Self = Self {
        x_deg: 0.0,
        y_deg: 0.0,
    };
}

/// Rotation for a pointer at `(client_x, client_y)` over `rect`.
///
/// Vertical offset drives rotation about the X axis with inverted sign;
/// horizontal offset drives rotation about the Y axis with the same sign.
pub fn rotation_for_pointer(rect: Rect, client_x: f64, client_y: f64, max_degrees: f64) -> Rotation {
    if rect.is_degenerate() || !client_x.is_finite() || !client_y.is_finite() {
        return Rotation::ZERO;
    }

    if !rect.contains(client_x, client_y) {
        return Rotation::ZERO;
    }

    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    let x = client_x - rect.left;
    let y = client_y - rect.top;

    Rotation {
        x_deg: ((y - center_y) / center_y) * -max_degrees,
        y_deg: ((x - center_x) / center_x) * max_degrees,
    }
}

pub fn tilt_transform(rotation: Rotation) -> String {
    format!(
        "perspective({TILT_PERSPECTIVE_PX}px) rotateX({:.3}deg) rotateY({:.3}deg)",
        rotation.x_deg, rotation.y_deg
    )
}

/// Spring-smoothed tilt for one tracked element.
#[derive(Clone, Debug)]
pub struct TiltTracker {
    max_degrees: f64,
    rotate_x: Spring,
    rotate_y: Spring,
}

impl TiltTracker {
    pub fn new(max_degrees: f64, spring: SpringConfig) -> Self {
        Self {
            max_degrees,
            rotate_x: Spring::new(0.0, spring),
            rotate_y: Spring::new(0.0, spring),
        }
    }

    pub fn pointer_move(&mut self, rect: Rect, client_x: f64, client_y: f64) {
        let target = rotation_for_pointer(rect, client_x, client_y, self.max_degrees);
        self.rotate_x.set_target(target.x_deg);
        self.rotate_y.set_target(target.y_deg);
    }

    pub fn pointer_leave(&mut self) {
        self.rotate_x.set_target(0.0);
        self.rotate_y.set_target(0.0);
    }

    /// Returns `true` while either axis is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        let moving_x = self.rotate_x.step(dt);
        let moving_y = self.rotate_y.step(dt);
        moving_x || moving_y
    }

    pub fn rotation(&self) -> Rotation {
        Rotation {
            x_deg: self.rotate_x.value(),
            y_deg: self.rotate_y.value(),
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> Rotation {
        Rotation {
            x_deg: self.rotate_x.target(),
            y_deg: self.rotate_y.target(),
        }
    }

    pub fn transform(&self) -> String {
        tilt_transform(self.rotation())
    }
}

impl Default for TiltTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TILT_MAX_DEGREES, SpringConfig::TILT)
    }
}
