//! System trait and implementations

use super::component::ComponentSet;
use super::world::World;

/// Identifier returned when a system is registered with a [`World`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SystemId(pub u64);

/// System trait for processing entities and components
///
/// Systems run once per tick, in registration order, and receive the same
/// `delta_time` (seconds) as every other system in that tick.
pub trait System<S: ComponentSet> {
    /// Run the system for one tick
    fn update(&mut self, world: &mut World<S>, delta_time: f32);

    /// Human-readable name used in diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
