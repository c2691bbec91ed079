//! Circular collision volume

/// Circle collider attached to an entity's transform
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    /// Radius in arena units
    pub radius: f32,
    /// Whether the body is solid
    pub solid: bool,
    /// Diagnostic label, never consulted during resolution
    pub group: String,
}

impl Collision {
    /// Create a collider
    pub fn new(radius: f32, solid: bool, group: impl Into<String>) -> Self {
        Self {
            radius,
            solid,
            group: group.into(),
        }
    }

    /// Whether two circles at `distance` apart overlap
    ///
    /// Touching circles (distance equal to the radius sum) do not overlap.
    pub fn overlaps(&self, other: &Self, distance: f32) -> bool {
        distance < self.radius + other.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Collision::new(10.0, true, "enemy");
        let b = Collision::new(5.0, false, "projectile");
        assert!(a.overlaps(&b, 14.9));
        assert!(!a.overlaps(&b, 15.0));
        assert!(!b.overlaps(&a, 20.0));
    }
}
