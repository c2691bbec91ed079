//! Query system for component access

use super::component::{Component, ComponentSet};

/// Filter describing which component kinds an entity must carry
///
/// Queries are evaluated by [`World::query`](super::World::query), which
/// returns a snapshot of the matching entities.
pub struct Query<S: ComponentSet> {
    required: Vec<S::Kind>,
}

impl<S: ComponentSet> Query<S> {
    /// Create a query matching every entity
    pub fn new() -> Self {
        Self {
            required: Vec::new(),
        }
    }

    /// Require a component of type `T`
    pub fn with<T: Component<S>>(mut self) -> Self {
        if !self.required.contains(&T::KIND) {
            self.required.push(T::KIND);
        }
        self
    }

    /// Require a component by kind
    pub fn with_kind(mut self, kind: S::Kind) -> Self {
        if !self.required.contains(&kind) {
            self.required.push(kind);
        }
        self
    }

    /// Kinds an entity must carry to match
    pub fn required(&self) -> &[S::Kind] {
        &self.required
    }
}

impl<S: ComponentSet> Default for Query<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ComponentSet> Clone for Query<S> {
    fn clone(&self) -> Self {
        Self {
            required: self.required.clone(),
        }
    }
}
