//! Enemy steering and wave spawning

use bebop_engine::ecs::{Query, System};
use bebop_engine::foundation::math;

use crate::components::{Enemy, GameComponent, GameWorld, Player, Transform, Velocity};
use crate::config::SpawnConfig;
use crate::factory::SharedFactory;

/// Steers every enemy at the player and spawns new ones on a shrinking interval
pub struct EnemySystem {
    factory: SharedFactory,
    width: f32,
    height: f32,
    pacing: SpawnConfig,
    spawn_timer: f32,
    spawn_rate: f32,
    spawned_count: u32,
}

impl EnemySystem {
    /// Create an enemy system for an arena of `width` x `height`
    ///
    /// Both dimensions must be finite and positive. `ArenaConfig::validate`
    /// guarantees this for configured arenas; debug builds assert it.
    pub fn new(factory: SharedFactory, width: f32, height: f32, pacing: SpawnConfig) -> Self {
        debug_assert!(
            width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0,
            "arena size must be finite and positive, got {}x{}",
            width,
            height
        );
        Self {
            factory,
            width,
            height,
            spawn_rate: pacing.initial_rate,
            pacing,
            spawn_timer: 0.0,
            spawned_count: 0,
        }
    }

    /// Seconds currently required between spawns
    pub fn spawn_rate(&self) -> f32 {
        self.spawn_rate
    }

    /// Enemies spawned so far this run
    pub fn spawned_count(&self) -> u32 {
        self.spawned_count
    }

    fn steer(world: &mut GameWorld) {
        let players = Query::new().with::<Player>().with::<Transform>();
        let Some(target) = world
            .query(&players)
            .first()
            .and_then(|&player| world.get_component::<Transform>(player))
            .map(|transform| transform.position)
        else {
            return;
        };

        let chasers = Query::new().with::<Enemy>().with::<Transform>().with::<Velocity>();
        for entity in world.query(&chasers) {
            let (Some(enemy), Some(transform)) = (
                world.get_component::<Enemy>(entity).copied(),
                world.get_component::<Transform>(entity),
            ) else {
                continue;
            };
            let Some(direction) = math::direction_to(transform.position, target) else {
                continue;
            };
            if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
                velocity.linear = direction * enemy.pursuit_speed(velocity.max_speed);
            }
        }
    }

    fn spawn(&mut self, world: &mut GameWorld) {
        let mut factory = self.factory.borrow_mut();
        let (edge, position) = factory.roll_edge_position(self.width, self.height);
        let kind = factory.roll_enemy_kind();
        let entity = factory.create_enemy_of_kind(world, position.x, position.y, kind);

        self.spawn_timer = 0.0;
        self.spawn_rate = (self.spawn_rate * self.pacing.decay).max(self.pacing.min_rate);
        self.spawned_count += 1;

        log::debug!(
            "Spawned {} enemy {} on {:?} edge at ({:.1}, {:.1}); next in {:.3}s",
            kind,
            entity,
            edge,
            position.x,
            position.y,
            self.spawn_rate
        );
        if self.spawned_count == self.pacing.cap {
            log::debug!("Spawn cap of {} reached", self.pacing.cap);
        }
    }
}

impl System<GameComponent> for EnemySystem {
    fn update(&mut self, world: &mut GameWorld, delta_time: f32) {
        Self::steer(world);

        self.spawn_timer += delta_time;
        if self.spawn_timer >= self.spawn_rate && self.spawned_count < self.pacing.cap {
            self.spawn(world);
        }
    }

    fn name(&self) -> &str {
        "EnemySystem"
    }
}
