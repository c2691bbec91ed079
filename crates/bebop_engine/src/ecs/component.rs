//! Component traits
//!
//! A game declares its closed set of component types as one tagged union (a
//! [`ComponentSet`]). Every member type implements [`Component`], which gives
//! typed access to its own variant and names its discriminant ([`Component::KIND`]).
//! Storage is keyed by that discriminant, so no runtime type registry is needed.
//!
//! [`declare_components!`](crate::declare_components) generates the union, the
//! kind enum and all trait impls from a list of `Variant(Type)` pairs.

use std::fmt::Debug;
use std::hash::Hash;

/// A closed set of component values, one variant per component type
pub trait ComponentSet: Sized + 'static {
    /// Discriminant identifying which component a value holds
    type Kind: Copy + Eq + Hash + Debug + 'static;

    /// The kind of this value
    fn kind(&self) -> Self::Kind;
}

/// A component type that belongs to the set `S`
pub trait Component<S: ComponentSet>: Sized + 'static {
    /// Discriminant of this component within `S`
    const KIND: S::Kind;

    /// Wrap this component into the set's union type
    fn into_set(self) -> S;

    /// Borrow this component from a union value holding it
    fn from_set(value: &S) -> Option<&Self>;

    /// Mutably borrow this component from a union value holding it
    fn from_set_mut(value: &mut S) -> Option<&mut Self>;

    /// Take the component out of a union value, handing the value back on mismatch
    fn try_from_set(value: S) -> Result<Self, S>;
}

/// Declare a game's component set
///
/// ```ignore
/// declare_components! {
///     /// Every component an arena entity can carry
///     pub enum GameComponent, kind ComponentKind {
///         Transform(Transform),
///         Health(Health),
///     }
/// }
/// ```
#[macro_export]
macro_rules! declare_components {
    (
        $(#[$meta:meta])*
        $vis:vis enum $set:ident, kind $kind:ident {
            $($variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $set {
            $(
                #[allow(missing_docs)]
                $variant($ty),
            )+
        }

        /// Discriminant of each component variant
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $kind {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl $crate::ecs::ComponentSet for $set {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant(_) => $kind::$variant,)+
                }
            }
        }

        $(
            impl $crate::ecs::Component<$set> for $ty {
                const KIND: $kind = $kind::$variant;

                fn into_set(self) -> $set {
                    $set::$variant(self)
                }

                #[allow(unreachable_patterns)]
                fn from_set(value: &$set) -> Option<&Self> {
                    match value {
                        $set::$variant(component) => Some(component),
                        _ => None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn from_set_mut(value: &mut $set) -> Option<&mut Self> {
                    match value {
                        $set::$variant(component) => Some(component),
                        _ => None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn try_from_set(value: $set) -> Result<Self, $set> {
                    match value {
                        $set::$variant(component) => Ok(component),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}
