//! Health component
//!
//! `current` stays within `[0, max]` after every mutation.

/// Hit points of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    /// Full health of `max` points
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    /// Current hit points
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Maximum hit points
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Subtract `amount`, clamped at zero
    pub fn damage(&mut self, amount: f32) {
        self.set_current(self.current - amount);
    }

    /// Add `amount`, clamped at the maximum
    pub fn heal(&mut self, amount: f32) {
        self.set_current(self.current + amount);
    }

    /// Set hit points directly, clamped to `[0, max]`
    pub fn set_current(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }

    /// Change the maximum, floored at zero; `current` is clamped to the new maximum
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.current = self.current.min(self.max);
    }

    /// Whether no hit points remain
    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    /// Remaining health as a fraction of the maximum
    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut health = Health::new(20.0);
        health.damage(15.0);
        assert_relative_eq!(health.current(), 5.0);
        assert!(!health.is_dead());

        health.damage(50.0);
        assert_relative_eq!(health.current(), 0.0);
        assert!(health.is_dead());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut health = Health::new(100.0);
        health.damage(30.0);
        health.heal(500.0);
        assert_relative_eq!(health.current(), 100.0);
    }

    #[test]
    fn test_set_current_and_negative_damage() {
        let mut health = Health::new(40.0);
        health.set_current(-3.0);
        assert!(health.is_dead());
        health.set_current(1000.0);
        assert_relative_eq!(health.current(), 40.0);

        health.damage(-10.0);
        assert_relative_eq!(health.current(), 40.0);
        assert_relative_eq!(health.fraction(), 1.0);
    }

    #[test]
    fn test_set_max_reclamps_current() {
        let mut health = Health::new(100.0);
        health.set_max(60.0);
        assert_relative_eq!(health.max(), 60.0);
        assert_relative_eq!(health.current(), 60.0);

        health.set_max(150.0);
        assert_relative_eq!(health.max(), 150.0);
        assert_relative_eq!(health.current(), 60.0);
        health.heal(500.0);
        assert_relative_eq!(health.current(), 150.0);

        health.set_max(-5.0);
        assert_relative_eq!(health.max(), 0.0);
        assert!(health.is_dead());
    }
}
