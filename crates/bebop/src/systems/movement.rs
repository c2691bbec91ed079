//! Movement integration

use bebop_engine::ecs::{Query, System};
use bebop_engine::foundation::math;

use crate::components::{GameComponent, GameWorld, Transform, Velocity};

/// Integrates velocities into positions and keeps bodies inside the arena
pub struct MovementSystem {
    width: f32,
    height: f32,
}

impl MovementSystem {
    /// Create a movement system for an arena of `width` x `height`
    ///
    /// Both dimensions must be finite and positive; debug builds assert it.
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(
            width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0,
            "arena size must be finite and positive, got {}x{}",
            width,
            height
        );
        Self { width, height }
    }
}

impl System<GameComponent> for MovementSystem {
    fn update(&mut self, world: &mut GameWorld, delta_time: f32) {
        let movers = Query::new().with::<Transform>().with::<Velocity>();
        for entity in world.query(&movers) {
            let Some(velocity) = world.get_component_mut::<Velocity>(entity) else {
                continue;
            };
            velocity.normalize();
            let velocity = *velocity;

            let Some(transform) = world.get_component_mut::<Transform>(entity) else {
                continue;
            };
            let moved = transform.position + velocity.linear * delta_time;
            transform.position = math::clamp_to_bounds(moved, self.width, self.height);
            if velocity.is_moving() {
                transform.rotation = math::heading(velocity.linear);
            }
        }
    }

    fn name(&self) -> &str {
        "MovementSystem"
    }
}
