//! ECS World implementation

use slotmap::SlotMap;

use super::component::{Component, ComponentSet};
use super::entity::Entity;
use super::query::Query;
use super::storage::ComponentBag;
use super::system::{System, SystemId};

/// ECS World containing all entities, components and systems
///
/// Entity queries return owned snapshots (`Vec<Entity>`), so a system may add
/// or remove entities while walking a snapshot without disturbing it.
pub struct World<S: ComponentSet> {
    entities: SlotMap<Entity, ComponentBag<S>>,
    systems: Vec<(SystemId, Box<dyn System<S>>)>,
    next_system_id: u64,
    /// Systems detached while `update` runs them
    in_flight: Vec<SystemId>,
    pending_removals: Vec<SystemId>,
}

impl<S: ComponentSet> World<S> {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            systems: Vec::new(),
            next_system_id: 0,
            in_flight: Vec::new(),
            pending_removals: Vec::new(),
        }
    }

    /// Create a new entity
    pub fn create_entity(&mut self) -> Entity {
        self.entities.insert(ComponentBag::new())
    }

    /// Remove an entity together with all of its components
    ///
    /// Removing an entity that is not live is a no-op and returns `None`.
    pub fn remove_entity(&mut self, entity: Entity) -> Option<ComponentBag<S>> {
        self.entities.remove(entity)
    }

    /// Whether the entity is currently live
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Borrow an entity's component bag
    pub fn components(&self, entity: Entity) -> Option<&ComponentBag<S>> {
        self.entities.get(entity)
    }

    /// Mutably borrow an entity's component bag
    pub fn components_mut(&mut self, entity: Entity) -> Option<&mut ComponentBag<S>> {
        self.entities.get_mut(entity)
    }

    /// Add a component to an entity, replacing any component of the same kind
    ///
    /// Returns `false` if the entity is not live.
    pub fn add_component<T: Component<S>>(&mut self, entity: Entity, component: T) -> bool {
        match self.entities.get_mut(entity) {
            Some(bag) => {
                bag.insert(component);
                true
            }
            None => false,
        }
    }

    /// Whether the entity carries a component of type `T`
    pub fn has_component<T: Component<S>>(&self, entity: Entity) -> bool {
        self.entities
            .get(entity)
            .is_some_and(ComponentBag::<S>::contains::<T>)
    }

    /// Get a component from an entity
    pub fn get_component<T: Component<S>>(&self, entity: Entity) -> Option<&T> {
        self.entities.get(entity)?.get::<T>()
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component<S>>(&mut self, entity: Entity) -> Option<&mut T> {
        self.entities.get_mut(entity)?.get_mut::<T>()
    }

    /// Remove a component from an entity; absent components are a no-op
    pub fn remove_component<T: Component<S>>(&mut self, entity: Entity) -> Option<T> {
        self.entities.get_mut(entity)?.remove::<T>()
    }

    /// Snapshot of all live entities
    pub fn entities(&self) -> Vec<Entity> {
        self.entities.keys().collect()
    }

    /// Snapshot of the entities carrying a component of type `T`
    pub fn entities_with_component<T: Component<S>>(&self) -> Vec<Entity> {
        self.entities
            .iter()
            .filter(|(_, bag)| bag.contains::<T>())
            .map(|(entity, _)| entity)
            .collect()
    }

    /// Snapshot of the entities carrying every kind the query requires
    pub fn query(&self, query: &Query<S>) -> Vec<Entity> {
        self.entities
            .iter()
            .filter(|(_, bag)| query.required().iter().all(|&kind| bag.contains_kind(kind)))
            .map(|(entity, _)| entity)
            .collect()
    }

    /// First entity (in storage order) carrying a component of type `T`
    pub fn first_with_component<T: Component<S>>(&self) -> Option<Entity> {
        self.entities
            .iter()
            .find(|(_, bag)| bag.contains::<T>())
            .map(|(entity, _)| entity)
    }

    /// Append a system to the end of the update order
    pub fn add_system(&mut self, system: Box<dyn System<S>>) -> SystemId {
        let id = SystemId(self.next_system_id);
        self.next_system_id += 1;
        log::debug!("Registered system {} as {:?}", system.name(), id);
        self.systems.push((id, system));
        id
    }

    /// Remove a system from the update order
    ///
    /// Returns `false` when no system with that id is registered.
    pub fn remove_system(&mut self, id: SystemId) -> bool {
        if let Some(index) = self.systems.iter().position(|(sid, _)| *sid == id) {
            self.systems.remove(index);
            return true;
        }
        if self.in_flight.contains(&id) && !self.pending_removals.contains(&id) {
            self.pending_removals.push(id);
            return true;
        }
        false
    }

    /// Number of registered systems
    pub fn system_count(&self) -> usize {
        self.systems.len() + self.in_flight.len() - self.pending_removals.len()
    }

    /// Names of the registered systems, in update order
    pub fn system_names(&self) -> Vec<String> {
        self.systems
            .iter()
            .map(|(_, system)| system.name().to_string())
            .collect()
    }

    /// Detach every registered system, leaving the world with none
    ///
    /// Used to carry systems over into a replacement world. Systems running in
    /// the current `update` are not included.
    pub fn take_systems(&mut self) -> Vec<(SystemId, Box<dyn System<S>>)> {
        std::mem::take(&mut self.systems)
    }

    /// Update the world (run systems)
    ///
    /// Every system runs once, in registration order, with the same `delta_time`.
    /// Systems added or removed from inside a system take effect next tick.
    pub fn update(&mut self, delta_time: f32) {
        let mut running = std::mem::take(&mut self.systems);
        self.in_flight = running.iter().map(|(id, _)| *id).collect();

        for (id, system) in &mut running {
            if self.pending_removals.contains(id) {
                continue;
            }
            system.update(self, delta_time);
        }

        let pending = std::mem::take(&mut self.pending_removals);
        running.retain(|(id, _)| !pending.contains(id));
        running.append(&mut self.systems);
        self.systems = running;
        self.in_flight.clear();

        log::trace!(
            "World tick dt={:.4}s: {} entities, {} systems",
            delta_time,
            self.entities.len(),
            self.systems.len()
        );
    }
}

impl<S: ComponentSet> Default for World<S> {
    fn default() -> Self {
        Self::new()
    }
}
