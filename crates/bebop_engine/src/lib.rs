//! # Bebop Engine
//!
//! A small engine core for 2D simulations driven at a fixed or variable tick.
//!
//! ## Features
//!
//! - **ECS Architecture**: Entities, a closed component set per game, ordered systems
//! - **Configuration**: TOML and RON config files loaded through serde
//! - **Input**: Polled keyboard and mouse state shared with systems
//! - **Logging**: `log` facade backed by `env_logger`
//!
//! ## Quick Start
//!
//! ```rust
//! use bebop_engine::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct Position(pub Vec2);
//!
//! bebop_engine::declare_components! {
//!     /// Components of this demo
//!     pub enum Demo, kind DemoKind {
//!         Position(Position),
//!     }
//! }
//!
//! let mut world: World<Demo> = World::new();
//! let e = world.create_entity();
//! world.add_component(e, Position(Vec2::new(1.0, 2.0)));
//! world.update(1.0 / 60.0);
//! assert!(world.has_component::<Position>(e));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod input;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ConfigFormat},
        ecs::{Component, ComponentBag, ComponentSet, Entity, Query, System, SystemId, World},
        foundation::math::{Point2, Vec2},
        input::{InputManager, KeyCode, MouseButton, SharedInput},
    };
}
