//! Collision detection between the car and falling obstacles
//!
//! Everything is an axis-aligned rectangle, so one strict overlap test covers
//! the whole game. Edge contact does not count: two boxes that only share a
//! boundary are not colliding.

use glam::DVec2;

use super::state::{Body, GameSession};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

impl From<&Body> for Aabb {
    fn from(body: &Body) -> Self {
        Self::new(body.min(), body.max())
    }
}

/// Check whether two bodies overlap
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    Aabb::from(a).overlaps(&Aabb::from(b))
}

/// First obstacle (in spawn order) touching the car, if any
pub fn first_contact(session: &GameSession) -> Option<&Body> {
    let player = Aabb::from(&session.player);
    session
        .obstacles
        .iter()
        .find(|obstacle| player.overlaps(&Aabb::from(*obstacle)))
}

/// True if the car overlaps any obstacle
pub fn check(session: &GameSession) -> bool {
    first_contact(session).is_some()
}
