//! Damped spring physics
//!
//! Springs are integrated with RK4 in fixed sub-steps so that large frame
//! deltas stay stable. A spring has no fixed end time: it is finished once
//! both its displacement and velocity fall under the rest thresholds.

/// Physical parameters of a spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Spring used by the directional reveal presets (damping fixed at 20)
    pub const fn reveal() -> Self {
        Self::new(100.0, 20.0, 1.0)
    }

    /// Fast spring with little overshoot
    pub const fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Damping at which the spring stops oscillating: 2 * sqrt(k * m)
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::reveal()
    }
}

/// Largest integration step in seconds
const MAX_STEP: f32 = 1.0 / 240.0;

/// A single animated value pulled toward a target
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    rest_delta: f32,
    rest_speed: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget the spring, keeping its current velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.rest_delta && self.velocity.abs() < self.rest_speed
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || self.is_settled() {
            return;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            self.rk4(h);
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        (-stiffness * (x - self.target) - damping * v) / mass
    }

    fn rk4(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);
        let k2x = v + 0.5 * h * k1v;
        let k2v = self.acceleration(x + 0.5 * h * k1x, k2x);
        let k3x = v + 0.5 * h * k2v;
        let k3v = self.acceleration(x + 0.5 * h * k2x, k3x);
        let k4x = v + h * k3v;
        let k4v = self.acceleration(x + h * k3x, k4x);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_spring_is_critically_damped() {
        let config = SpringConfig::reveal();
        assert!((config.critical_damping() - config.damping).abs() < 1e-4);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::reveal(), 0.0);
        spring.set_target(1.0);

        for _ in 0..180 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_critically_damped_spring_does_not_overshoot() {
        let mut spring = Spring::new(SpringConfig::reveal(), 0.0);
        spring.set_target(1.0);

        for _ in 0..240 {
            spring.step(1.0 / 120.0);
            assert!(spring.value() <= 1.0 + 1e-4, "overshot: {}", spring.value());
        }
    }

    #[test]
    fn test_large_frame_delta_is_stable() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);
        spring.step(2.0);
        assert!((spring.value() - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_settled_spring_ignores_steps() {
        let mut spring = Spring::new(SpringConfig::default(), 5.0);
        spring.step(1.0);
        assert_eq!(spring.value(), 5.0);
        assert_eq!(spring.velocity(), 0.0);
    }
}
