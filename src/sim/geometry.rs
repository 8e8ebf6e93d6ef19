//! Geometry helpers shared by physics, AI and collision passes

use glam::Vec2;

/// Length of a 2D vector.
///
/// Part of the public geometry API alongside [`circles_overlap`].
#[inline]
pub fn mag(v: Vec2) -> f32 {
    v.length()
}

/// True when two circles overlap or touch.
///
/// `reach` is the combined radius (plus any bonus margin). Compares squared
/// distances so touching counts as a hit.
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, reach: f32) -> bool {
    a.distance_squared(b) <= reach * reach
}
