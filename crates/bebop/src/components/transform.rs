//! Transform component
//!
//! Planar position plus a facing angle derived from motion.

use bebop_engine::foundation::math::Vec2;

/// Position and facing of an entity in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in arena units, origin at the top-left corner
    pub position: Vec2,
    /// Facing angle in radians
    pub rotation: f32,
}

impl Transform {
    /// Create a transform at `(x, y)` facing along +x
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            rotation: 0.0,
        }
    }

    /// Euclidean distance to another transform
    pub fn distance_to(&self, other: &Self) -> f32 {
        (other.position - self.position).norm()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
