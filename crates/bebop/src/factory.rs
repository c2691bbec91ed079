//! Entity factory
//!
//! The only place arena entities are assembled. It also owns the seeded random
//! stream used for enemy rolls and spawn positions, so a run is reproducible
//! from its seed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use bebop_engine::ecs::Entity;
use bebop_engine::foundation::math::Vec2;
use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::components::{
    Collision, Enemy, GameWorld, Health, Player, Projectile, Transform, Velocity,
};
use crate::config::ArenaConfig;

/// Factory handle shared by the session and the systems that spawn entities
pub type SharedFactory = Rc<RefCell<EntityFactory>>;

/// Velocity cap shared by every enemy variant
pub const ENEMY_MAX_SPEED: f32 = 100.0;

/// Enemy variants with fixed stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    /// Average pursuer
    Basic,
    /// Fast and fragile
    Speedy,
    /// Slow and tough
    Tank,
}

/// Stats for one enemy variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    /// Multiplier on the velocity cap
    pub speed_factor: f32,
    /// Contact damage
    pub damage: f32,
    /// Starting health
    pub health: f32,
    /// Collision radius
    pub radius: f32,
    /// Score on death
    pub points: u32,
}

impl EnemyKind {
    /// Every variant, in spawn weight order
    pub const ALL: [Self; 3] = [Self::Basic, Self::Speedy, Self::Tank];

    /// Look a variant up by tag; unknown tags fall back to [`EnemyKind::Basic`]
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "speedy" => Self::Speedy,
            "tank" => Self::Tank,
            _ => Self::Basic,
        }
    }

    /// Tag naming this variant
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Speedy => "speedy",
            Self::Tank => "tank",
        }
    }

    /// Fixed stats of this variant
    pub fn stats(self) -> EnemyStats {
        match self {
            Self::Basic => EnemyStats {
                speed_factor: 0.8,
                damage: 10.0,
                health: 20.0,
                radius: 10.0,
                points: 50,
            },
            Self::Speedy => EnemyStats {
                speed_factor: 1.2,
                damage: 5.0,
                health: 15.0,
                radius: 7.5,
                points: 50,
            },
            Self::Tank => EnemyStats {
                speed_factor: 0.6,
                damage: 15.0,
                health: 40.0,
                radius: 12.5,
                points: 50,
            },
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arena edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// y = 0
    Top,
    /// x = width
    Right,
    /// y = height
    Bottom,
    /// x = 0
    Left,
}

/// Builds every kind of arena entity
#[derive(Debug, Clone)]
pub struct EntityFactory {
    config: ArenaConfig,
    rng: ChaCha8Rng,
}

impl EntityFactory {
    /// Create a factory drawing randomness from `seed`
    pub fn new(config: ArenaConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Wrap the factory in a shared handle
    pub fn into_shared(self) -> SharedFactory {
        Rc::new(RefCell::new(self))
    }

    /// Configuration the factory builds from
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Create the player at `(x, y)`
    pub fn create_player(&self, world: &mut GameWorld, x: f32, y: f32) -> Entity {
        let stats = &self.config.player;
        let entity = world.create_entity();
        world.add_component(entity, Transform::new(x, y));
        world.add_component(entity, Velocity::at_rest(stats.max_speed));
        world.add_component(entity, Collision::new(stats.radius, true, "player"));
        world.add_component(entity, Health::new(stats.health));
        world.add_component(entity, Player::new(stats.shoot_cooldown, stats.shot_speed));
        entity
    }

    /// Create an enemy at `(x, y)` with stats rolled from the configured ranges
    pub fn create_enemy(&mut self, world: &mut GameWorld, x: f32, y: f32) -> Entity {
        let ranges = self.config.random_enemy;
        let speed_factor = self.rng.gen_range(ranges.speed_factor_min..=ranges.speed_factor_max);
        let damage = self.rng.gen_range(ranges.damage_min..=ranges.damage_max);
        let points = self.rng.gen_range(ranges.points_min..=ranges.points_max);

        let stats = EnemyStats {
            speed_factor,
            damage: damage as f32,
            health: ranges.health,
            radius: ranges.radius,
            points,
        };
        Self::assemble_enemy(world, x, y, ranges.max_speed, &stats)
    }

    /// Create an enemy of a fixed variant at `(x, y)`
    pub fn create_enemy_of_kind(
        &self,
        world: &mut GameWorld,
        x: f32,
        y: f32,
        kind: EnemyKind,
    ) -> Entity {
        Self::assemble_enemy(world, x, y, ENEMY_MAX_SPEED, &kind.stats())
    }

    /// Create a projectile at `(x, y)` moving with `(vx, vy)`
    pub fn create_projectile(
        &self,
        world: &mut GameWorld,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        owner: &str,
    ) -> Entity {
        let stats = &self.config.projectile;
        let entity = world.create_entity();
        world.add_component(entity, Transform::new(x, y));
        world.add_component(entity, Velocity::new(vx, vy, stats.max_speed));
        world.add_component(entity, Collision::new(stats.radius, false, "projectile"));
        world.add_component(entity, Projectile::new(stats.damage, stats.lifetime, owner));
        entity
    }

    /// Draw a variant using the configured spawn weights
    pub fn roll_enemy_kind(&mut self) -> EnemyKind {
        match WeightedIndex::new(self.config.spawn.weights()) {
            Ok(weights) => EnemyKind::ALL[weights.sample(&mut self.rng)],
            Err(_) => EnemyKind::Basic,
        }
    }

    /// Pick a uniformly random point on a uniformly chosen arena edge
    pub fn roll_edge_position(&mut self, width: f32, height: f32) -> (Edge, Vec2) {
        match self.rng.gen_range(0..4) {
            0 => (Edge::Top, Vec2::new(self.rng.gen_range(0.0..=width), 0.0)),
            1 => (Edge::Right, Vec2::new(width, self.rng.gen_range(0.0..=height))),
            2 => (Edge::Bottom, Vec2::new(self.rng.gen_range(0.0..=width), height)),
            _ => (Edge::Left, Vec2::new(0.0, self.rng.gen_range(0.0..=height))),
        }
    }

    fn assemble_enemy(
        world: &mut GameWorld,
        x: f32,
        y: f32,
        max_speed: f32,
        stats: &EnemyStats,
    ) -> Entity {
        let entity = world.create_entity();
        world.add_component(entity, Transform::new(x, y));
        world.add_component(entity, Velocity::at_rest(max_speed));
        world.add_component(entity, Collision::new(stats.radius, true, "enemy"));
        world.add_component(entity, Health::new(stats.health));
        world.add_component(entity, Enemy::new(stats.speed_factor, stats.damage, stats.points));
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PLAYER_OWNER;
    use approx::assert_relative_eq;

    fn factory() -> EntityFactory {
        EntityFactory::new(ArenaConfig::default(), 7)
    }

    #[test]
    fn test_create_player() {
        let mut world = GameWorld::new();
        let player = factory().create_player(&mut world, 400.0, 300.0);

        assert!(world.contains(player));
        let velocity = world.get_component::<Velocity>(player).unwrap();
        assert_relative_eq!(velocity.max_speed, 200.0);
        let collision = world.get_component::<Collision>(player).unwrap();
        assert_relative_eq!(collision.radius, 15.0);
        assert!(collision.solid);
        assert_eq!(collision.group, "player");
        assert_relative_eq!(world.get_component::<Health>(player).unwrap().current(), 100.0);

        let stats = world.get_component::<Player>(player).unwrap();
        assert_relative_eq!(stats.shoot_cooldown, 0.25);
        assert_relative_eq!(stats.shot_speed, 400.0);
        assert!(stats.can_shoot());
        assert_eq!(stats.score, 0);
    }

    #[test]
    fn test_random_enemy_within_ranges() {
        let mut world = GameWorld::new();
        let mut factory = factory();
        for _ in 0..50 {
            let e = factory.create_enemy(&mut world, 0.0, 0.0);
            let enemy = world.get_component::<Enemy>(e).unwrap();
            assert!((0.5..=1.0).contains(&enemy.speed_factor));
            assert!((10.0..=19.0).contains(&enemy.damage));
            assert!((50..=99).contains(&enemy.points));
            assert_relative_eq!(world.get_component::<Health>(e).unwrap().max(), 20.0);
            assert_relative_eq!(world.get_component::<Collision>(e).unwrap().radius, 10.0);
            assert_relative_eq!(world.get_component::<Velocity>(e).unwrap().max_speed, 100.0);
        }
    }

    #[test]
    fn test_enemy_kind_table() {
        let mut world = GameWorld::new();
        let factory = factory();

        let speedy = factory.create_enemy_of_kind(&mut world, 1.0, 2.0, EnemyKind::Speedy);
        let enemy = world.get_component::<Enemy>(speedy).unwrap();
        assert_relative_eq!(enemy.speed_factor, 1.2);
        assert_relative_eq!(enemy.damage, 5.0);
        assert_relative_eq!(world.get_component::<Health>(speedy).unwrap().current(), 15.0);
        assert_relative_eq!(world.get_component::<Collision>(speedy).unwrap().radius, 7.5);
        assert_eq!(world.get_component::<Collision>(speedy).unwrap().group, "enemy");
    }

    #[test]
    fn test_parse_falls_back_to_basic() {
        assert_eq!(EnemyKind::parse("tank"), EnemyKind::Tank);
        assert_eq!(EnemyKind::parse(" Speedy "), EnemyKind::Speedy);
        assert_eq!(EnemyKind::parse("dragon"), EnemyKind::Basic);
        assert_eq!(EnemyKind::parse(""), EnemyKind::Basic);
        assert_eq!(EnemyKind::Tank.to_string(), "tank");
    }

    #[test]
    fn test_create_projectile() {
        let mut world = GameWorld::new();
        let p = factory().create_projectile(&mut world, 5.0, 6.0, 400.0, 0.0, PLAYER_OWNER);

        let projectile = world.get_component::<Projectile>(p).unwrap();
        assert_relative_eq!(projectile.damage, 10.0);
        assert_relative_eq!(projectile.lifetime, 2.0);
        assert!(projectile.is_from_player());
        assert!(!world.get_component::<Collision>(p).unwrap().solid);
        assert_relative_eq!(world.get_component::<Velocity>(p).unwrap().max_speed, 500.0);
        assert!(!world.has_component::<Health>(p));
    }

    #[test]
    fn test_edge_positions_lie_on_border() {
        let mut factory = factory();
        for _ in 0..100 {
            let (edge, p) = factory.roll_edge_position(800.0, 600.0);
            match edge {
                Edge::Top => assert_relative_eq!(p.y, 0.0),
                Edge::Right => assert_relative_eq!(p.x, 800.0),
                Edge::Bottom => assert_relative_eq!(p.y, 600.0),
                Edge::Left => assert_relative_eq!(p.x, 0.0),
            }
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
        }
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = factory();
        let mut b = factory();
        let rolls_a: Vec<_> = (0..20).map(|_| a.roll_enemy_kind()).collect();
        let rolls_b: Vec<_> = (0..20).map(|_| b.roll_enemy_kind()).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_weights_respected() {
        let mut config = ArenaConfig::default();
        config.spawn.basic_weight = 0.0;
        config.spawn.speedy_weight = 0.0;
        config.spawn.tank_weight = 1.0;
        let mut factory = EntityFactory::new(config, 3);
        assert!((0..20).all(|_| factory.roll_enemy_kind() == EnemyKind::Tank));
    }

    #[test]
    fn test_default_weights_match_frequencies() {
        const ROLLS: usize = 10_000;
        let mut factory = EntityFactory::new(ArenaConfig::default(), 19);
        let mut counts = [0_usize; 3];
        for _ in 0..ROLLS {
            let kind = factory.roll_enemy_kind();
            let slot = EnemyKind::ALL.iter().position(|k| *k == kind).unwrap();
            counts[slot] += 1;
        }

        for (count, expected) in counts.iter().zip([0.7, 0.2, 0.1]) {
            assert_relative_eq!(*count as f32 / ROLLS as f32, expected, epsilon = 0.02);
        }
    }

    #[test]
    fn test_edges_are_equally_likely() {
        const ROLLS: usize = 10_000;
        let mut factory = EntityFactory::new(ArenaConfig::default(), 23);
        let mut counts = [0_usize; 4];
        for _ in 0..ROLLS {
            let slot = match factory.roll_edge_position(800.0, 600.0).0 {
                Edge::Top => 0,
                Edge::Right => 1,
                Edge::Bottom => 2,
                Edge::Left => 3,
            };
            counts[slot] += 1;
        }

        for count in counts {
            assert_relative_eq!(count as f32 / ROLLS as f32, 0.25, epsilon = 0.02);
        }
    }
}
