//! Math utilities and types
//!
//! Provides the planar math used by 2D gameplay code.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Unit vector pointing from `from` toward `to`
///
/// Returns `None` when the two positions coincide, since no direction exists.
pub fn direction_to(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let length = delta.norm();
    if length > 0.0 {
        Some(delta / length)
    } else {
        None
    }
}

/// Scale `v` down so its length does not exceed `max_length`
///
/// Vectors already within the limit are returned unchanged.
pub fn clamp_length(v: Vec2, max_length: f32) -> Vec2 {
    let length = v.norm();
    if length > max_length && length > 0.0 {
        v * (max_length / length)
    } else {
        v
    }
}

/// Clamp a point into the axis-aligned rectangle `[0, width] x [0, height]`
pub fn clamp_to_bounds(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(p.x.clamp(0.0, width), p.y.clamp(0.0, height))
}

/// Heading angle in radians of a direction vector
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
