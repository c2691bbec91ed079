//! Game session
//!
//! One run of the arena: a world, its player and the ordered gameplay systems.
//! Restarting throws all of it away and builds a fresh run from the same config.

use bebop_engine::config::ConfigError;
use bebop_engine::ecs::{Entity, SystemId};
use bebop_engine::input::{KeyCode, SharedInput};

use crate::components::{GameSystem, GameWorld, Health, Player};
use crate::config::ArenaConfig;
use crate::factory::{EntityFactory, SharedFactory};
use crate::systems::{
    CollisionSystem, EnemySystem, FallenPlayers, MovementSystem, PlayerControlSystem,
    ProjectileSystem,
};

/// Values a HUD needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    /// Player health
    pub health: f32,
    /// Player maximum health
    pub max_health: f32,
    /// Player score
    pub score: u32,
    /// Whether the run has ended
    pub game_over: bool,
}

impl HudSnapshot {
    /// Health as a fraction in `[0, 1]`, for bar widths
    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            (self.health / self.max_health).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// A running arena game
pub struct GameSession {
    config: ArenaConfig,
    input: SharedInput,
    base_seed: u64,
    restarts: u64,
    world: GameWorld,
    factory: SharedFactory,
    player: Entity,
    fallen: FallenPlayers,
    render_systems: Vec<SystemId>,
    game_over: bool,
}

impl GameSession {
    /// Validate `config` and start the first run
    pub fn new(config: ArenaConfig, input: SharedInput) -> Result<Self, ConfigError> {
        config.validate()?;
        let base_seed = config.seed.unwrap_or_else(rand::random);
        let fallen = FallenPlayers::default();
        let (world, factory, player) = Self::build_run(&config, &input, base_seed, &fallen);
        log::info!(
            "Session started: {}x{} arena, seed {}",
            config.arena.width,
            config.arena.height,
            base_seed
        );

        Ok(Self {
            config,
            input,
            base_seed,
            restarts: 0,
            world,
            factory,
            player,
            fallen,
            render_systems: Vec::new(),
            game_over: false,
        })
    }

    fn build_run(
        config: &ArenaConfig,
        input: &SharedInput,
        seed: u64,
        fallen: &FallenPlayers,
    ) -> (GameWorld, SharedFactory, Entity) {
        let mut world = GameWorld::new();
        let factory = EntityFactory::new(config.clone(), seed).into_shared();
        let (x, y) = config.player_spawn();
        let player = factory.borrow().create_player(&mut world, x, y);

        let (width, height) = (config.arena.width, config.arena.height);
        world.add_system(Box::new(MovementSystem::new(width, height)));
        world.add_system(Box::new(PlayerControlSystem::new(input.clone(), factory.clone())));
        world.add_system(Box::new(EnemySystem::new(
            factory.clone(),
            width,
            height,
            config.spawn,
        )));
        world.add_system(Box::new(ProjectileSystem::new()));
        world.add_system(Box::new(CollisionSystem::with_fallen_log(fallen.clone())));

        (world, factory, player)
    }

    /// Advance the run by `delta_time` seconds; does nothing once the run is over
    pub fn tick(&mut self, delta_time: f32) {
        if self.game_over {
            return;
        }
        self.world.update(delta_time);

        if self.player_defeated() {
            self.game_over = true;
            log::info!("Game over with a final score of {}", self.final_score());
        }
    }

    /// Player state from the world, or as it was when collision removed it
    fn player_state(&self) -> Option<(Health, Player)> {
        let health = self.world.get_component::<Health>(self.player);
        let player = self.world.get_component::<Player>(self.player);
        if let (Some(health), Some(player)) = (health, player) {
            return Some((*health, *player));
        }
        self.fallen
            .borrow()
            .iter()
            .rev()
            .find(|fallen| fallen.entity == self.player)
            .map(|fallen| (fallen.health, fallen.player))
    }

    fn player_defeated(&self) -> bool {
        !self.world.contains(self.player)
            || self
                .world
                .get_component::<Health>(self.player)
                .map_or(true, Health::is_dead)
    }

    /// Whether the player has died or is gone
    pub fn is_game_over(&self) -> bool {
        self.game_over || self.player_defeated()
    }

    /// Throw the current run away and start a new one
    ///
    /// Each restart reseeds from the base seed and the restart count, so a
    /// seeded session replays the same sequence of runs.
    pub fn restart(&mut self) {
        self.restarts += 1;
        let seed = self.base_seed.wrapping_add(self.restarts);
        let fallen = FallenPlayers::default();
        let (mut world, factory, player) =
            Self::build_run(&self.config, &self.input, seed, &fallen);

        let hooks: Vec<_> = self
            .world
            .take_systems()
            .into_iter()
            .filter(|(id, _)| self.render_systems.contains(id))
            .collect();
        self.render_systems = hooks
            .into_iter()
            .map(|(_, system)| world.add_system(system))
            .collect();

        self.world = world;
        self.factory = factory;
        self.player = player;
        self.fallen = fallen;
        self.game_over = false;
        log::info!("Session restarted (run {}, seed {})", self.restarts + 1, seed);
    }

    /// Restart if the run is over and the restart key is held
    pub fn poll_restart(&mut self) -> bool {
        let requested = self.input.borrow().is_key_pressed(KeyCode::Space);
        if requested && self.is_game_over() {
            self.restart();
            true
        } else {
            false
        }
    }

    /// Append a system that runs after collision resolution, such as a renderer
    ///
    /// The system is carried over into every restarted run.
    pub fn add_render_system(&mut self, system: Box<GameSystem>) -> SystemId {
        let id = self.world.add_system(system);
        self.render_systems.push(id);
        id
    }

    /// Score of the current run
    pub fn final_score(&self) -> u32 {
        self.player_state().map_or(0, |(_, player)| player.score)
    }

    /// Values for the HUD
    pub fn hud(&self) -> HudSnapshot {
        let (health, max_health) = self
            .player_state()
            .map_or((0.0, 0.0), |(h, _)| (h.current(), h.max()));
        HudSnapshot {
            health,
            max_health,
            score: self.final_score(),
            game_over: self.is_game_over(),
        }
    }

    /// World of the current run
    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Mutable world of the current run
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// The current run's player
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Factory of the current run
    pub fn factory(&self) -> &SharedFactory {
        &self.factory
    }

    /// Shared input handle
    pub fn input(&self) -> &SharedInput {
        &self.input
    }

    /// Configuration the session was built from
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Seed of the first run
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Number of restarts so far
    pub fn restarts(&self) -> u64 {
        self.restarts
    }
}
