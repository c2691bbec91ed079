//! Gameplay systems, listed in the order a session runs them

pub mod movement;
pub mod player_control;
pub mod enemy;
pub mod projectile;
pub mod collision;

pub use movement::MovementSystem;
pub use player_control::PlayerControlSystem;
pub use enemy::EnemySystem;
pub use projectile::ProjectileSystem;
pub use collision::{CollisionSystem, FallenPlayer, FallenPlayers};
