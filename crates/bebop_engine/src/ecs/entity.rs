//! Entity implementation

use slotmap::{Key, KeyData};
use std::fmt;

slotmap::new_key_type! {
    /// Entity identifier
    ///
    /// A generational slot key: when a slot is reused the version changes, so
    /// an identity handed out once is never equal to a later one.
    pub struct Entity;
}

impl Entity {
    /// Get the entity ID
    ///
    /// Packs slot index and version into one value, unique for the entity's lifetime.
    pub fn id(&self) -> u64 {
        self.data().as_ffi()
    }

    /// Rebuild an entity handle from a value returned by [`Entity::id`]
    pub fn from_id(id: u64) -> Self {
        KeyData::from_ffi(id).into()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.id())
    }
}
