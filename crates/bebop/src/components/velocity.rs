//! Velocity component with a speed cap

use bebop_engine::foundation::math::{self, Vec2};

/// Linear velocity in arena units per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Current velocity vector
    pub linear: Vec2,
    /// Upper bound on the velocity magnitude
    pub max_speed: f32,
}

impl Velocity {
    /// Create a velocity of `(vx, vy)` capped at `max_speed`
    pub fn new(vx: f32, vy: f32, max_speed: f32) -> Self {
        Self {
            linear: Vec2::new(vx, vy),
            max_speed,
        }
    }

    /// A resting velocity with the given cap
    pub fn at_rest(max_speed: f32) -> Self {
        Self::new(0.0, 0.0, max_speed)
    }

    /// Current speed
    pub fn magnitude(&self) -> f32 {
        self.linear.norm()
    }

    /// Whether the velocity is non-zero
    pub fn is_moving(&self) -> bool {
        self.linear != Vec2::zeros()
    }

    /// Scale the velocity down to `max_speed`, keeping its direction
    pub fn normalize(&mut self) {
        self.linear = math::clamp_length(self.linear, self.max_speed);
    }
}
