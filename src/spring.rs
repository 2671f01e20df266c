//! Damped spring used to smooth tilt and scroll motion.
//!
//! Each step applies the exact solution of `m·x'' + c·x' + k·x = 0` over the
//! elapsed time, measured relative to the current target. The result is
//! independent of frame rate, and moving the target mid-flight keeps the
//! current value and velocity as the new starting point.

use serde::Serialize;

const CRITICAL_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Critical damping for stiffness 300 at unit mass.
    pub const TILT: Self = Self {
        stiffness: 300.0,
        damping: 34.641_016_151_377_55,
        mass: 1.0,
        rest_delta: 0.01,
        rest_speed: 0.01,
    };

    pub const SCROLL: Self = Self {
        stiffness: 100.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.001,
    };

    pub fn with_constants(self, stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            ..self
        }
    }

    pub fn critical_damping(stiffness: f64, mass: f64) -> f64 {
        2.0 * (stiffness * mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / Self::critical_damping(self.stiffness, self.mass)
    }

    fn angular_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn is_degenerate(&self) -> bool {
        !(self.stiffness > 0.0 && self.mass > 0.0 && self.damping >= 0.0)
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jumps to `value` and stops.
    pub fn snap_to(&mut self, value: f64) {
        if value.is_finite() {
            self.value = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advances by `dt` seconds. Returns `true` while still in motion.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }

        if !dt.is_finite() || dt <= 0.0 {
            return true;
        }

        if self.config.is_degenerate() {
            self.snap_to(self.target);
            return false;
        }

        let (offset, velocity) = self.solve(self.value - self.target, self.velocity, dt);
        self.value = self.target + offset;
        self.velocity = velocity;

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }

        true
    }

    fn solve(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let omega = self.config.angular_frequency();
        let zeta = self.config.damping_ratio();

        if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            let c2 = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let offset = (x0 + c2 * t) * decay;
            let velocity = (c2 - omega * (x0 + c2 * t)) * decay;
            return (offset, velocity);
        }

        if zeta < 1.0 {
            let alpha = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + alpha * x0) / omega_d;
            let decay = (-alpha * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let offset = decay * (x0 * cos + b * sin);
            let velocity = decay * (v0 * cos - (alpha * b + omega_d * x0) * sin);
            return (offset, velocity);
        }

        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c1 = (v0 - r2 * x0) / (r1 - r2);
        let c2 = x0 - c1;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}
