//! Damped spring physics
//!
//! A spring pulls `value` toward `target` with acceleration
//! `(-stiffness * (value - target) - damping * velocity) / mass`, integrated
//! with classic fourth-order Runge-Kutta. Large frame deltas are split into
//! sub-steps no longer than [`MAX_SUBSTEP`] seconds.

/// Longest single integration step, in seconds
pub const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Physical parameters of a spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target under which the spring may come to rest
    pub rest_displacement: f32,
    /// Speed under which the spring may come to rest
    pub rest_velocity: f32,
}

impl SpringConfig {
    pub const DEFAULT_REST_DISPLACEMENT: f32 = 0.001;
    pub const DEFAULT_REST_VELOCITY: f32 = 0.001;

    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_displacement: Self::DEFAULT_REST_DISPLACEMENT,
            rest_velocity: Self::DEFAULT_REST_VELOCITY,
        }
    }

    /// Unit-mass spring with exactly critical damping (`2 * sqrt(k * m)`):
    /// the fastest approach that never overshoots.
    pub fn critically_damped(stiffness: f32) -> Self {
        Self::critically_damped_with_mass(stiffness, 1.0)
    }

    pub fn critically_damped_with_mass(stiffness: f32, mass: f32) -> Self {
        Self::new(stiffness, critical_damping(stiffness, mass), mass)
    }

    /// Soft, slow settle
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Quick with a small overshoot
    pub fn snappy() -> Self {
        Self::new(300.0, 20.0, 1.0)
    }

    /// Fast, little overshoot
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Visible bounce
    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    pub fn with_rest_thresholds(mut self, displacement: f32, velocity: f32) -> Self {
        self.rest_displacement = displacement;
        self.rest_velocity = velocity;
        self
    }

    /// `damping / (2 * sqrt(k * m))`; 1.0 is critical, below 1.0 overshoots.
    pub fn damping_ratio(&self) -> f32 {
        let critical = critical_damping(self.stiffness, self.mass);
        if critical > 0.0 {
            self.damping / critical
        } else {
            0.0
        }
    }

    /// Parameters that can be integrated without producing NaN or blowing up.
    pub fn is_valid(&self) -> bool {
        [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_displacement,
            self.rest_velocity,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.stiffness > 0.0
            && self.damping >= 0.0
            && self.mass > 0.0
            && self.rest_displacement > 0.0
            && self.rest_velocity > 0.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::gentle()
    }
}

fn critical_damping(stiffness: f32, mass: f32) -> f32 {
    2.0 * (stiffness * mass).max(0.0).sqrt()
}

/// A single animated scalar
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// A spring at rest at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
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

    /// Move the target. Position and velocity carry over, so an animation
    /// interrupted mid-flight bends toward the new target.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` and stop.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_displacement
            && self.velocity.abs() < self.config.rest_velocity
    }

    /// Advance by `dt` seconds. Once within both rest thresholds the spring
    /// lands exactly on its target with zero velocity.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        if self.value == self.target && self.velocity == 0.0 {
            return;
        }

        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        for _ in 0..substeps {
            self.rk4(h);
            if self.is_settled() {
                break;
            }
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        (-self.config.stiffness * (x - self.target) - self.config.damping * v) / self.config.mass
    }

    fn rk4(&mut self, h: f32) {
        let x = self.value;
        let v = self.velocity;

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
