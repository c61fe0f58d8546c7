// SPDX-License-Identifier: MPL-2.0
//! Damped spring used to return the photo card to rest.
//!
//! A [`Spring`] animates one scalar toward a target with a mass-spring-damper
//! model. There is no fixed duration: the spring settles when both the
//! remaining displacement and the velocity fall under their rest thresholds,
//! then snaps exactly onto the target.

use std::time::Duration;

/// Default spring parameters.
pub mod spring_defaults {
    pub const STIFFNESS: f32 = 100.0;
    pub const DAMPING: f32 = 10.0;
    pub const MASS: f32 = 1.0;
    /// Displacement under which the spring may settle.
    pub const REST_DISPLACEMENT: f32 = 0.01;
    /// Speed (units/s) under which the spring may settle.
    pub const REST_SPEED: f32 = 2.0;
    /// Largest integration step, in seconds.
    pub const MAX_STEP_SECS: f32 = 1.0 / 240.0;
    /// Frame deltas longer than this are clamped (e.g. after the window was hidden).
    pub const MAX_FRAME: std::time::Duration = std::time::Duration::from_millis(64);
}

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: spring_defaults::STIFFNESS,
            damping: spring_defaults::DAMPING,
            mass: spring_defaults::MASS,
        }
    }
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    params: SpringParams,
    settled: bool,
}

impl Spring {
    /// Creates a settled spring resting at `value`.
    #[must_use]
    pub fn at_rest(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            params: SpringParams::default(),
            settled: true,
        }
    }

    /// Starts animating from `from` toward `target` with zero initial velocity.
    #[must_use]
    pub fn toward(from: f32, target: f32) -> Self {
        let mut spring = Self::at_rest(from);
        spring.target = target;
        spring.settled = Self::is_within_rest(from - target, 0.0);
        if spring.settled {
            spring.value = target;
        }
        spring
    }

    #[must_use]
    pub fn with_params(mut self, params: SpringParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Jumps to `value` and stops.
    pub fn snap_to(&mut self, value: f32) {
        *self = Self::at_rest(value).with_params(self.params);
    }

    /// Advances the simulation by `dt`. Returns `true` while still moving.
    pub fn step(&mut self, dt: Duration) -> bool {
        if self.settled {
            return false;
        }

        let mut remaining = dt.min(spring_defaults::MAX_FRAME).as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(spring_defaults::MAX_STEP_SECS);
            remaining -= h;

            // Semi-implicit Euler: velocity first, then position with the new velocity.
            let displacement = self.value - self.target;
            let spring_force = -self.params.stiffness * displacement;
            let damping_force = -self.params.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / self.params.mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
        }

        if Self::is_within_rest(self.value - self.target, self.velocity) {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
        !self.settled
    }

    fn is_within_rest(displacement: f32, velocity: f32) -> bool {
        displacement.abs() < spring_defaults::REST_DISPLACEMENT
            && velocity.abs() < spring_defaults::REST_SPEED
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::at_rest(0.0)
    }
}
