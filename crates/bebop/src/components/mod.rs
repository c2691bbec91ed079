//! Game-specific components
//!
//! Every component an arena entity can carry is a member of [`GameComponent`].

pub mod collision;
pub mod enemy;
pub mod health;
pub mod player;
pub mod projectile;
pub mod transform;
pub mod velocity;

pub use collision::Collision;
pub use enemy::Enemy;
pub use health::Health;
pub use player::Player;
pub use projectile::{Projectile, PLAYER_OWNER};
pub use transform::Transform;
pub use velocity::Velocity;

bebop_engine::declare_components! {
    /// Closed set of arena components
    pub enum GameComponent, kind ComponentKind {
        Transform(Transform),
        Velocity(Velocity),
        Collision(Collision),
        Health(Health),
        Player(Player),
        Enemy(Enemy),
        Projectile(Projectile),
    }
}

/// World specialised to the arena's components
pub type GameWorld = bebop_engine::ecs::World<GameComponent>;

/// System trait object type for the arena
pub type GameSystem = dyn bebop_engine::ecs::System<GameComponent>;
