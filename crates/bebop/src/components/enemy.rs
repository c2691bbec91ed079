//! Enemy component

/// Adversary pursuing the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    /// Multiplier applied to the velocity cap when steering
    pub speed_factor: f32,
    /// Damage dealt to the player on contact
    pub damage: f32,
    /// Score awarded when killed
    pub points: u32,
}

impl Enemy {
    /// Create an enemy
    pub fn new(speed_factor: f32, damage: f32, points: u32) -> Self {
        Self {
            speed_factor,
            damage,
            points,
        }
    }

    /// Pursuit speed for a velocity cap of `max_speed`
    pub fn pursuit_speed(&self, max_speed: f32) -> f32 {
        max_speed * self.speed_factor
    }
}
