//! Player component

/// Marks the player-controlled entity and carries its shooting state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Minimum seconds between shots
    pub shoot_cooldown: f32,
    /// Seconds since the last shot
    pub time_since_last_shot: f32,
    /// Speed of fired projectiles
    pub shot_speed: f32,
    /// Accumulated score
    pub score: u32,
}

impl Player {
    /// Create a player that may shoot immediately
    pub fn new(shoot_cooldown: f32, shot_speed: f32) -> Self {
        Self {
            shoot_cooldown,
            time_since_last_shot: shoot_cooldown,
            shot_speed,
            score: 0,
        }
    }

    /// Whether the cooldown has elapsed
    pub fn can_shoot(&self) -> bool {
        self.time_since_last_shot >= self.shoot_cooldown
    }

    /// Restart the cooldown after a shot
    pub fn reset_shot_timer(&mut self) {
        self.time_since_last_shot = 0.0;
    }

    /// Add points to the score
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
