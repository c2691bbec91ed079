//! # Bebop
//!
//! A top-down arena shooter simulation. The player steers with WASD, fires
//! toward the cursor and survives ever faster waves of pursuing enemies.
//!
//! Rendering and windowing live outside this crate: a front end feeds input
//! into a [`SharedInput`](bebop_engine::input::SharedInput), calls
//! [`GameSession::tick`] once per frame and draws from the world and
//! [`GameSession::hud`].

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod components;
pub mod config;
pub mod factory;
pub mod session;
pub mod systems;

pub use config::ArenaConfig;
pub use factory::{EnemyKind, EntityFactory, SharedFactory};
pub use session::{GameSession, HudSnapshot};
