//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod input;
pub mod kinematics;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::Stepper;
pub use collision::{Aabb, check, first_contact, overlaps};
pub use input::on_drag;
pub use physics::{ArcadeKinematics, PhysicsBackend};
pub use spawner::try_spawn;
pub use state::{
    Body, BodyKind, EntityId, EventQueue, GameEvent, GamePhase, GameSession, MAX_PENDING_EVENTS,
    RngState, Snapshot,
};
pub use tick::{StepOutcome, step};
