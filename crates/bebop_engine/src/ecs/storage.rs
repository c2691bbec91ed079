//! Per-entity component storage
//!
//! Each live entity owns one [`ComponentBag`]: a map from component kind to the
//! tagged value, holding at most one component of each kind.

use std::collections::HashMap;

use super::component::{Component, ComponentSet};

/// Heterogeneous component bag owned by a single entity
pub struct ComponentBag<S: ComponentSet> {
    slots: HashMap<S::Kind, S>,
}

impl<S: ComponentSet> ComponentBag<S> {
    /// Create an empty bag
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Insert a component, returning the previous one of the same kind
    pub fn insert<T: Component<S>>(&mut self, component: T) -> Option<T> {
        self.slots
            .insert(T::KIND, component.into_set())
            .and_then(|previous| T::try_from_set(previous).ok())
    }

    /// Insert an already-wrapped value, replacing any value of the same kind
    pub fn insert_value(&mut self, value: S) -> Option<S> {
        self.slots.insert(value.kind(), value)
    }

    /// Whether a component of type `T` is present
    pub fn contains<T: Component<S>>(&self) -> bool {
        self.slots.contains_key(&T::KIND)
    }

    /// Whether a component of the given kind is present
    pub fn contains_kind(&self, kind: S::Kind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Borrow the component of type `T`, if present
    pub fn get<T: Component<S>>(&self) -> Option<&T> {
        self.slots.get(&T::KIND).and_then(T::from_set)
    }

    /// Mutably borrow the component of type `T`, if present
    pub fn get_mut<T: Component<S>>(&mut self) -> Option<&mut T> {
        self.slots.get_mut(&T::KIND).and_then(T::from_set_mut)
    }

    /// Remove and return the component of type `T`; absent components are a no-op
    pub fn remove<T: Component<S>>(&mut self) -> Option<T> {
        self.slots
            .remove(&T::KIND)
            .and_then(|value| T::try_from_set(value).ok())
    }

    /// Kinds currently attached
    pub fn kinds(&self) -> impl Iterator<Item = S::Kind> + '_ {
        self.slots.keys().copied()
    }

    /// Iterate over the wrapped values
    pub fn values(&self) -> impl Iterator<Item = &S> {
        self.slots.values()
    }

    /// Number of attached components
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no components are attached
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<S: ComponentSet> Default for ComponentBag<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ComponentSet + std::fmt::Debug> std::fmt::Debug for ComponentBag<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.slots.values()).finish()
    }
}


#[cfg(test)]
mod tests {
    use super::test_components::*;
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut bag: ComponentBag<TestComponent> = ComponentBag::new();
        assert!(bag.insert(Position(1.0, 2.0)).is_none());

        assert!(bag.contains::<Position>());
        assert!(!bag.contains::<Label>());
        assert_eq!(bag.get::<Position>(), Some(&Position(1.0, 2.0)));
        assert!(bag.get::<Label>().is_none());
    }

    #[test]
    fn test_insert_replaces_same_kind() {
        let mut bag: ComponentBag<TestComponent> = ComponentBag::new();
        bag.insert(Counter(1));
        let previous = bag.insert(Counter(7));

        assert_eq!(previous, Some(Counter(1)));
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get::<Counter>(), Some(&Counter(7)));
    }

    #[test]
    fn test_get_mut_changes_stored_value() {
        let mut bag: ComponentBag<TestComponent> = ComponentBag::new();
        bag.insert(Counter(0));
        if let Some(counter) = bag.get_mut::<Counter>() {
            counter.0 += 5;
        }
        assert_eq!(bag.get::<Counter>(), Some(&Counter(5)));
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut bag: ComponentBag<TestComponent> = ComponentBag::new();
        bag.insert(Label("ship".to_string()));

        assert!(bag.remove::<Position>().is_none());
        assert_eq!(bag.remove::<Label>(), Some(Label("ship".to_string())));
        assert!(bag.remove::<Label>().is_none());
        assert!(bag.is_empty());
    }

    #[test]
    fn test_kinds_reported() {
        let mut bag: ComponentBag<TestComponent> = ComponentBag::new();
        bag.insert_value(TestComponent::Position(Position(0.0, 0.0)));
        bag.insert(Counter(3));

        let mut kinds: Vec<_> = bag.kinds().collect();
        kinds.sort();
        assert_eq!(kinds, vec![TestKind::Position, TestKind::Counter]);
        assert!(bag.contains_kind(TestKind::Counter));
    }
}
