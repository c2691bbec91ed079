//! Projectile component
//!
//! Projectiles age every tick and expire once their age reaches the lifetime.

/// Owner tag carried by projectiles the player fires
pub const PLAYER_OWNER: &str = "player";

/// A short-lived damaging shot
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    /// Damage applied on impact
    pub damage: f32,
    /// Total lifetime in seconds
    pub lifetime: f32,
    /// Seconds alive so far
    pub time_alive: f32,
    /// Faction that fired the projectile
    pub owner: String,
}

impl Projectile {
    /// Create a fresh projectile
    pub fn new(damage: f32, lifetime: f32, owner: impl Into<String>) -> Self {
        Self {
            damage,
            lifetime,
            time_alive: 0.0,
            owner: owner.into(),
        }
    }

    /// Advance the projectile's age
    pub fn age(&mut self, delta_time: f32) {
        self.time_alive += delta_time;
    }

    /// Whether the projectile has lived out its lifetime
    pub fn should_despawn(&self) -> bool {
        self.time_alive >= self.lifetime
    }

    /// Whether the player fired this projectile
    pub fn is_from_player(&self) -> bool {
        self.owner == PLAYER_OWNER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_at_boundary() {
        let mut projectile = Projectile::new(10.0, 1.0, PLAYER_OWNER);
        projectile.age(0.5);
        assert!(!projectile.should_despawn());
        projectile.age(0.5);
        assert!(projectile.should_despawn());
    }

    #[test]
    fn test_zero_lifetime_expires_immediately() {
        let projectile = Projectile::new(10.0, 0.0, "enemy");
        assert!(projectile.should_despawn());
        assert!(!projectile.is_from_player());
    }
}
