//! Player control
//!
//! Translates the shared input state into player velocity and shots.

use bebop_engine::ecs::{Query, System};
use bebop_engine::foundation::math::{self, Vec2};
use bebop_engine::input::{KeyCode, MouseButton, SharedInput};

use crate::components::{GameComponent, GameWorld, Player, Transform, Velocity, PLAYER_OWNER};
use crate::factory::SharedFactory;

/// Moves the player with WASD and fires toward the cursor while the left button is held
pub struct PlayerControlSystem {
    input: SharedInput,
    factory: SharedFactory,
}

impl PlayerControlSystem {
    /// Create a control system reading `input` and spawning through `factory`
    pub fn new(input: SharedInput, factory: SharedFactory) -> Self {
        Self { input, factory }
    }

    /// Sum of the unit vectors of the held direction keys
    ///
    /// Opposing keys cancel; diagonals are left unnormalized.
    fn steering(&self) -> Vec2 {
        let input = self.input.borrow();
        let mut direction = Vec2::zeros();
        if input.is_key_pressed(KeyCode::W) {
            direction.y -= 1.0;
        }
        if input.is_key_pressed(KeyCode::S) {
            direction.y += 1.0;
        }
        if input.is_key_pressed(KeyCode::A) {
            direction.x -= 1.0;
        }
        if input.is_key_pressed(KeyCode::D) {
            direction.x += 1.0;
        }
        direction
    }
}

impl System<GameComponent> for PlayerControlSystem {
    fn update(&mut self, world: &mut GameWorld, delta_time: f32) {
        let direction = self.steering();
        let (firing, aim) = {
            let input = self.input.borrow();
            (input.is_mouse_pressed(MouseButton::Left), input.mouse_position())
        };

        let movers = Query::new().with::<Player>().with::<Velocity>();
        for entity in world.query(&movers) {
            if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
                velocity.linear = direction * velocity.max_speed;
            }
        }

        let shooters = Query::new().with::<Player>().with::<Transform>();
        for entity in world.query(&shooters) {
            let Some(origin) = world.get_component::<Transform>(entity).map(|t| t.position) else {
                continue;
            };
            let Some(player) = world.get_component_mut::<Player>(entity) else {
                continue;
            };
            player.time_since_last_shot += delta_time;
            if !firing || !player.can_shoot() {
                continue;
            }
            player.reset_shot_timer();
            let shot_speed = player.shot_speed;

            let heading = math::direction_to(origin, aim).unwrap_or_else(Vec2::zeros);
            let velocity = heading * shot_speed;
            let projectile = self.factory.borrow().create_projectile(
                world,
                origin.x,
                origin.y,
                velocity.x,
                velocity.y,
                PLAYER_OWNER,
            );
            log::debug!("{} fired {} toward ({:.1}, {:.1})", entity, projectile, aim.x, aim.y);
        }
    }

    fn name(&self) -> &str {
        "PlayerControlSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Projectile;
    use crate::config::ArenaConfig;
    use crate::factory::EntityFactory;
    use approx::assert_relative_eq;
    use bebop_engine::ecs::Entity;
    use bebop_engine::input::InputManager;

    struct Rig {
        world: GameWorld,
        input: SharedInput,
        system: PlayerControlSystem,
        player: Entity,
    }

    fn rig() -> Rig {
        let mut world = GameWorld::new();
        let input = InputManager::shared();
        let factory = EntityFactory::new(ArenaConfig::default(), 1).into_shared();
        let player = factory.borrow().create_player(&mut world, 100.0, 100.0);
        let system = PlayerControlSystem::new(input.clone(), factory);
        Rig { world, input, system, player }
    }

    fn projectiles(world: &GameWorld) -> Vec<Entity> {
        world.entities_with_component::<Projectile>()
    }

    #[test]
    fn test_keys_set_velocity() {
        let mut rig = rig();
        rig.input.borrow_mut().handle_key_input(KeyCode::D, true);
        rig.system.update(&mut rig.world, 0.016);
        let velocity = rig.world.get_component::<Velocity>(rig.player).unwrap();
        assert_eq!(velocity.linear, Vec2::new(200.0, 0.0));

        rig.input.borrow_mut().handle_key_input(KeyCode::W, true);
        rig.system.update(&mut rig.world, 0.016);
        let velocity = rig.world.get_component::<Velocity>(rig.player).unwrap();
        assert_eq!(velocity.linear, Vec2::new(200.0, -200.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut rig = rig();
        {
            let mut input = rig.input.borrow_mut();
            input.handle_key_input(KeyCode::A, true);
            input.handle_key_input(KeyCode::D, true);
            input.handle_key_input(KeyCode::S, true);
        }
        rig.system.update(&mut rig.world, 0.016);
        let velocity = rig.world.get_component::<Velocity>(rig.player).unwrap();
        assert_eq!(velocity.linear, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn test_no_keys_stops_player() {
        let mut rig = rig();
        rig.world.get_component_mut::<Velocity>(rig.player).unwrap().linear = Vec2::new(5.0, 5.0);
        rig.system.update(&mut rig.world, 0.016);
        assert!(!rig.world.get_component::<Velocity>(rig.player).unwrap().is_moving());
    }

    #[test]
    fn test_fires_toward_cursor_and_respects_cooldown() {
        let mut rig = rig();
        {
            let mut input = rig.input.borrow_mut();
            input.handle_mouse_button(MouseButton::Left, true);
            input.handle_mouse_move(100.0, 0.0);
        }

        rig.system.update(&mut rig.world, 0.01);
        let shots = projectiles(&rig.world);
        assert_eq!(shots.len(), 1);
        let velocity = rig.world.get_component::<Velocity>(shots[0]).unwrap();
        assert_relative_eq!(velocity.linear.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(velocity.linear.y, -400.0, epsilon = 1e-3);
        assert!(rig.world.get_component::<Projectile>(shots[0]).unwrap().is_from_player());

        rig.system.update(&mut rig.world, 0.1);
        assert_eq!(projectiles(&rig.world).len(), 1);

        rig.system.update(&mut rig.world, 0.2);
        assert_eq!(projectiles(&rig.world).len(), 2);
    }

    #[test]
    fn test_cooldown_ticks_without_firing() {
        let mut rig = rig();
        rig.world.get_component_mut::<Player>(rig.player).unwrap().reset_shot_timer();
        rig.system.update(&mut rig.world, 0.3);
        assert!(projectiles(&rig.world).is_empty());
        assert!(rig.world.get_component::<Player>(rig.player).unwrap().can_shoot());
    }

    #[test]
    fn test_aim_on_player_gives_stationary_shot() {
        let mut rig = rig();
        {
            let mut input = rig.input.borrow_mut();
            input.handle_mouse_button(MouseButton::Left, true);
            input.handle_mouse_move(100.0, 100.0);
        }
        rig.system.update(&mut rig.world, 0.01);
        let shots = projectiles(&rig.world);
        assert_eq!(shots.len(), 1);
        assert!(!rig.world.get_component::<Velocity>(shots[0]).unwrap().is_moving());
    }
}
