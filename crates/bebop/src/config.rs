//! Arena configuration
//!
//! Every section falls back to its defaults, so a config file only needs the
//! values it changes.

use bebop_engine::config::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// Complete arena configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Seed for spawn randomness; `None` draws one from entropy
    pub seed: Option<u64>,
    /// Arena bounds
    pub arena: ArenaBounds,
    /// Enemy spawn pacing
    pub spawn: SpawnConfig,
    /// Player stats
    pub player: PlayerConfig,
    /// Player projectile stats
    pub projectile: ProjectileConfig,
    /// Ranges for randomly rolled enemies
    pub random_enemy: RandomEnemyConfig,
}

/// Arena bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaBounds {
    /// Width in arena units
    pub width: f32,
    /// Height in arena units
    pub height: f32,
}

/// Enemy spawn pacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Seconds between spawns at the start of a run
    pub initial_rate: f32,
    /// Factor applied to the rate after every spawn
    pub decay: f32,
    /// Floor for the spawn interval
    pub min_rate: f32,
    /// Total enemies spawned per run
    pub cap: u32,
    /// Relative weight of basic enemies
    pub basic_weight: f32,
    /// Relative weight of speedy enemies
    pub speedy_weight: f32,
    /// Relative weight of tank enemies
    pub tank_weight: f32,
}

impl SpawnConfig {
    /// Variant weights in `[basic, speedy, tank]` order
    pub fn weights(&self) -> [f32; 3] {
        [self.basic_weight, self.speedy_weight, self.tank_weight]
    }
}

/// Player stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Velocity cap
    pub max_speed: f32,
    /// Collision radius
    pub radius: f32,
    /// Starting and maximum health
    pub health: f32,
    /// Seconds between shots
    pub shoot_cooldown: f32,
    /// Projectile speed
    pub shot_speed: f32,
    /// Spawn x; the arena centre when unset
    pub spawn_x: Option<f32>,
    /// Spawn y; the arena centre when unset
    pub spawn_y: Option<f32>,
}

/// Player projectile stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Damage on impact
    pub damage: f32,
    /// Seconds before expiry
    pub lifetime: f32,
    /// Velocity cap
    pub max_speed: f32,
    /// Collision radius
    pub radius: f32,
}

/// Ranges and fixed stats for randomly rolled enemies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomEnemyConfig {
    /// Lowest speed factor (inclusive)
    pub speed_factor_min: f32,
    /// Highest speed factor (inclusive)
    pub speed_factor_max: f32,
    /// Lowest contact damage (inclusive)
    pub damage_min: u32,
    /// Highest contact damage (inclusive)
    pub damage_max: u32,
    /// Lowest score value (inclusive)
    pub points_min: u32,
    /// Highest score value (inclusive)
    pub points_max: u32,
    /// Velocity cap
    pub max_speed: f32,
    /// Collision radius
    pub radius: f32,
    /// Starting health
    pub health: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: None,
            arena: ArenaBounds::default(),
            spawn: SpawnConfig::default(),
            player: PlayerConfig::default(),
            projectile: ProjectileConfig::default(),
            random_enemy: RandomEnemyConfig::default(),
        }
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            initial_rate: 1.0,
            decay: 0.99,
            min_rate: 0.5,
            cap: 100,
            basic_weight: 0.7,
            speedy_weight: 0.2,
            tank_weight: 0.1,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_speed: 200.0,
            radius: 15.0,
            health: 100.0,
            shoot_cooldown: 0.25,
            shot_speed: 400.0,
            spawn_x: None,
            spawn_y: None,
        }
    }
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            damage: 10.0,
            lifetime: 2.0,
            max_speed: 500.0,
            radius: 5.0,
        }
    }
}

impl Default for RandomEnemyConfig {
    fn default() -> Self {
        Self {
            speed_factor_min: 0.5,
            speed_factor_max: 1.0,
            damage_min: 10,
            damage_max: 19,
            points_min: 50,
            points_max: 99,
            max_speed: 100.0,
            radius: 10.0,
            health: 20.0,
        }
    }
}

impl Config for ArenaConfig {}

impl ArenaConfig {
    /// Player spawn point, defaulting to the arena centre
    pub fn player_spawn(&self) -> (f32, f32) {
        (
            self.player.spawn_x.unwrap_or(self.arena.width / 2.0),
            self.player.spawn_y.unwrap_or(self.arena.height / 2.0),
        )
    }

    /// Every float in the config, by its dotted key
    fn float_fields(&self) -> Vec<(&'static str, f32)> {
        let mut fields = vec![
            ("arena.width", self.arena.width),
            ("arena.height", self.arena.height),
            ("spawn.initial_rate", self.spawn.initial_rate),
            ("spawn.decay", self.spawn.decay),
            ("spawn.min_rate", self.spawn.min_rate),
            ("spawn.basic_weight", self.spawn.basic_weight),
            ("spawn.speedy_weight", self.spawn.speedy_weight),
            ("spawn.tank_weight", self.spawn.tank_weight),
            ("player.max_speed", self.player.max_speed),
            ("player.radius", self.player.radius),
            ("player.health", self.player.health),
            ("player.shoot_cooldown", self.player.shoot_cooldown),
            ("player.shot_speed", self.player.shot_speed),
            ("projectile.damage", self.projectile.damage),
            ("projectile.lifetime", self.projectile.lifetime),
            ("projectile.max_speed", self.projectile.max_speed),
            ("projectile.radius", self.projectile.radius),
            ("random_enemy.speed_factor_min", self.random_enemy.speed_factor_min),
            ("random_enemy.speed_factor_max", self.random_enemy.speed_factor_max),
            ("random_enemy.max_speed", self.random_enemy.max_speed),
            ("random_enemy.radius", self.random_enemy.radius),
            ("random_enemy.health", self.random_enemy.health),
        ];
        fields.extend(self.player.spawn_x.map(|x| ("player.spawn_x", x)));
        fields.extend(self.player.spawn_y.map(|y| ("player.spawn_y", y)));
        fields
    }

    /// Check that every value is usable
    ///
    /// Non-finite floats are rejected before the range checks, which NaN
    /// would slip past.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((key, value)) = self.float_fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{} must be a finite number, got {}", key, value)));
        }

        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return Err(invalid(format!(
                "arena must have positive size, got {}x{}",
                self.arena.width, self.arena.height
            )));
        }

        let spawn = &self.spawn;
        if spawn.initial_rate <= 0.0 || spawn.min_rate <= 0.0 {
            return Err(invalid(format!(
                "spawn rates must be positive, got initial {} and min {}",
                spawn.initial_rate, spawn.min_rate
            )));
        }
        if spawn.decay <= 0.0 || spawn.decay > 1.0 {
            return Err(invalid(format!("spawn decay must lie in (0, 1], got {}", spawn.decay)));
        }
        if spawn.weights().iter().any(|w| *w < 0.0) || spawn.weights().iter().all(|w| *w <= 0.0) {
            return Err(invalid(format!(
                "spawn weights must be non-negative with at least one positive, got {:?}",
                spawn.weights()
            )));
        }

        let ranges = &self.random_enemy;
        if ranges.speed_factor_min > ranges.speed_factor_max
            || ranges.damage_min > ranges.damage_max
            || ranges.points_min > ranges.points_max
        {
            return Err(invalid("random enemy ranges must not be inverted".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = ArenaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.player_spawn(), (400.0, 300.0));
        assert_eq!(config.spawn.cap, 100);
        assert_relative_eq!(config.spawn.weights().iter().sum::<f32>(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_bad_arena() {
        let mut config = ArenaConfig::default();
        config.arena.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_spawn_pacing() {
        let mut config = ArenaConfig::default();
        config.spawn.decay = 1.5;
        assert!(config.validate().is_err());

        let mut config = ArenaConfig::default();
        config.spawn.min_rate = 0.0;
        assert!(config.validate().is_err());

        let mut config = ArenaConfig::default();
        config.spawn.basic_weight = 0.0;
        config.spawn.speedy_weight = 0.0;
        config.spawn.tank_weight = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let mut config = ArenaConfig::default();
        config.random_enemy.damage_min = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_from_partial_toml() {
        let config: ArenaConfig = toml::from_str("[arena]\nwidth = nan\n").unwrap();
        assert!(config.arena.width.is_nan());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config: ArenaConfig = toml::from_str("[spawn]\ndecay = nan\n").unwrap();
        assert!(config.validate().is_err());

        let config: ArenaConfig =
            toml::from_str("[random_enemy]\nspeed_factor_min = nan\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_anywhere() {
        let mut config = ArenaConfig::default();
        config.player.shot_speed = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = ArenaConfig::default();
        config.projectile.lifetime = f32::NEG_INFINITY;
        assert!(config.validate().is_err());

        let mut config = ArenaConfig::default();
        config.player.spawn_y = Some(f32::NAN);
        assert!(config.validate().is_err());

        let mut config = ArenaConfig::default();
        config.spawn.tank_weight = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = ArenaConfig::default();
        config.player.spawn_x = Some(12.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ArenaConfig = toml::from_str(
            "seed = 7\n\n[arena]\nwidth = 1024.0\n\n[spawn]\ncap = 5\n",
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_relative_eq!(config.arena.width, 1024.0);
        assert_relative_eq!(config.arena.height, 600.0);
        assert_eq!(config.spawn.cap, 5);
        assert_relative_eq!(config.spawn.decay, 0.99);
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.toml");

        let mut config = ArenaConfig::default();
        config.seed = Some(42);
        config.player.spawn_x = Some(10.0);
        config.save_to_file(&path).unwrap();

        let loaded = ArenaConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_and_load_ron() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.ron");

        let mut config = ArenaConfig::default();
        config.spawn.cap = 12;
        config.save_to_file(&path).unwrap();

        let loaded = ArenaConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
