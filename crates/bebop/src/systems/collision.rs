//! Collision detection and resolution
//!
//! Circle overlap over every unordered pair, followed by one removal pass.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use bebop_engine::ecs::{Entity, Query, System};

use crate::components::{
    Collision, Enemy, GameComponent, GameWorld, Health, Player, Projectile, Transform,
};

/// Last state of a player removed by a collision pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallenPlayer {
    /// The removed entity
    pub entity: Entity,
    /// Health at removal, always dead
    pub health: Health,
    /// Score and shooting state at removal
    pub player: Player,
}

/// Record of removed players, shared with whoever needs the final score
pub type FallenPlayers = Rc<RefCell<Vec<FallenPlayer>>>;

/// Resolves projectile hits and player contact with enemies
#[derive(Debug, Default)]
pub struct CollisionSystem {
    fallen: Option<FallenPlayers>,
}

impl CollisionSystem {
    /// Create a collision system
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collision system that records every player it removes into `fallen`
    pub fn with_fallen_log(fallen: FallenPlayers) -> Self {
        Self {
            fallen: Some(fallen),
        }
    }

    /// Apply both rules to an overlapping pair, in either orientation
    fn resolve(world: &mut GameWorld, a: Entity, b: Entity, doomed: &mut HashSet<Entity>) {
        if let Some((projectile, enemy)) = Self::pair_of::<Projectile, Enemy>(world, a, b) {
            if let Some(shot) = world.get_component::<Projectile>(projectile) {
                if shot.is_from_player() {
                    let damage = shot.damage;
                    Self::apply_damage(world, enemy, damage, doomed);
                    doomed.insert(projectile);
                }
            }
        }

        if let Some((player, enemy)) = Self::pair_of::<Player, Enemy>(world, a, b) {
            if let Some(contact) = world.get_component::<Enemy>(enemy).map(|e| e.damage) {
                log::debug!("{} hit {} for {}", enemy, player, contact);
                Self::apply_damage(world, player, contact, doomed);
                doomed.insert(enemy);
            }
        }
    }

    /// Orders `(a, b)` so the first carries `A` and the second carries `B`
    fn pair_of<A, B>(world: &GameWorld, a: Entity, b: Entity) -> Option<(Entity, Entity)>
    where
        A: bebop_engine::ecs::Component<GameComponent>,
        B: bebop_engine::ecs::Component<GameComponent>,
    {
        if world.has_component::<A>(a) && world.has_component::<B>(b) {
            Some((a, b))
        } else if world.has_component::<A>(b) && world.has_component::<B>(a) {
            Some((b, a))
        } else {
            None
        }
    }

    /// Damage `target`; a target left dead is marked for removal
    fn apply_damage(
        world: &mut GameWorld,
        target: Entity,
        amount: f32,
        doomed: &mut HashSet<Entity>,
    ) {
        let Some(health) = world.get_component_mut::<Health>(target) else {
            return;
        };
        health.damage(amount);
        if !health.is_dead() {
            return;
        }

        if let Some(points) = world.get_component::<Enemy>(target).map(|e| e.points) {
            if let Some(scorer) = world.first_with_component::<Player>() {
                if let Some(player) = world.get_component_mut::<Player>(scorer) {
                    player.add_score(points);
                }
            }
            log::debug!("{} killed, awarding {} points", target, points);
        } else {
            log::debug!("{} killed", target);
        }
        doomed.insert(target);
    }

    fn remove(&self, world: &mut GameWorld, entity: Entity) {
        let Some(bag) = world.remove_entity(entity) else {
            return;
        };
        let (Some(fallen), Some(health), Some(player)) =
            (&self.fallen, bag.get::<Health>(), bag.get::<Player>())
        else {
            return;
        };
        fallen.borrow_mut().push(FallenPlayer {
            entity,
            health: *health,
            player: *player,
        });
    }
}

impl System<GameComponent> for CollisionSystem {
    fn update(&mut self, world: &mut GameWorld, _delta_time: f32) {
        let colliders = Query::new().with::<Collision>().with::<Transform>();
        let bodies: Vec<_> = world
            .query(&colliders)
            .into_iter()
            .filter_map(|entity| {
                let transform = world.get_component::<Transform>(entity)?;
                let collision = world.get_component::<Collision>(entity)?;
                Some((entity, *transform, collision.clone()))
            })
            .collect();

        let mut doomed = HashSet::new();
        for (i, (a, transform_a, collision_a)) in bodies.iter().enumerate() {
            for (b, transform_b, collision_b) in &bodies[i + 1..] {
                if doomed.contains(a) {
                    break;
                }
                if doomed.contains(b) {
                    continue;
                }
                let distance = transform_a.distance_to(transform_b);
                if collision_a.overlaps(collision_b, distance) {
                    Self::resolve(world, *a, *b, &mut doomed);
                }
            }
        }

        for &entity in &doomed {
            self.remove(world, entity);
        }
        if !doomed.is_empty() {
            log::trace!("Collision pass removed {} entities", doomed.len());
        }
    }

    fn name(&self) -> &str {
        "CollisionSystem"
    }
}
