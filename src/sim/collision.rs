//! Axis-aligned overlap tests
//!
//! Every collider in the game is a box: the paddle, and the ball's bounding
//! box (center ± radius on each axis). Wall checks compare the same box
//! against the window edges directly in the tick.

use glam::Vec2;

/// Axis-aligned bounding box, stored as min/max corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box centered on `center` with the given full extents
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width / 2.0, height / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap test. Boxes that merely touch along an edge do not
    /// count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}
