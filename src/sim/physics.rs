//! Physics backend seam
//!
//! The controller only needs two things from physics: move the world one
//! step, and report the first contact with the car. A richer backend can
//! implement this trait without touching the session lifecycle.

use super::state::{EntityId, GameSession};
use super::{collision, kinematics};
use crate::config::PlayfieldConfig;

pub trait PhysicsBackend {
    /// Move all obstacles one fixed step, returning how many were dodged
    fn integrate(&mut self, session: &mut GameSession, config: &PlayfieldConfig) -> u32;

    /// ID of the first obstacle (spawn order) touching the car
    fn detect_contact(&self, session: &GameSession) -> Option<EntityId>;
}

/// Constant fall speed plus strict AABB overlap
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcadeKinematics;

impl PhysicsBackend for ArcadeKinematics {
    fn integrate(&mut self, session: &mut GameSession, config: &PlayfieldConfig) -> u32 {
        kinematics::advance(session, config)
    }

    fn detect_contact(&self, session: &GameSession) -> Option<EntityId> {
        collision::first_contact(session).map(|body| body.id)
    }
}
