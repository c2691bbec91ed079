//! Projectile aging and expiry

use bebop_engine::ecs::System;

use crate::components::{GameComponent, GameWorld, Projectile};

/// Ages projectiles and removes the ones past their lifetime
#[derive(Debug, Default)]
pub struct ProjectileSystem;

impl ProjectileSystem {
    /// Create a projectile system
    pub fn new() -> Self {
        Self
    }
}

impl System<GameComponent> for ProjectileSystem {
    fn update(&mut self, world: &mut GameWorld, delta_time: f32) {
        let mut expired = Vec::new();
        for entity in world.entities_with_component::<Projectile>() {
            if let Some(projectile) = world.get_component_mut::<Projectile>(entity) {
                projectile.age(delta_time);
                if projectile.should_despawn() {
                    expired.push(entity);
                }
            }
        }

        for &entity in &expired {
            world.remove_entity(entity);
        }
        if !expired.is_empty() {
            log::trace!("Expired {} projectiles", expired.len());
        }
    }

    fn name(&self) -> &str {
        "ProjectileSystem"
    }
}
