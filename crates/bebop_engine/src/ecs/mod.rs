//! Entity-Component-System implementation
//!
//! Generic over a game's [`ComponentSet`]: the world stores one
//! [`ComponentBag`] per entity and drives an ordered list of [`System`]s.

pub mod world;
pub mod entity;
pub mod component;
pub mod storage;
pub mod system;
pub mod query;

pub use world::World;
pub use entity::Entity;
pub use component::{Component, ComponentSet};
pub use storage::ComponentBag;
pub use system::{System, SystemId};
pub use query::Query;
