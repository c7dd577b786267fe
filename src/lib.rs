//! Lane Dodge - A lane-dodging arcade engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, spawning, kinematics, collisions)
//! - `config`: Playfield configuration and validation
//! - `controller`: Session lifecycle driven by the host's tick/input callbacks
//! - `renderer`: Abstract draw commands built from session snapshots

pub mod config;
pub mod controller;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, PlayfieldConfig};
pub use controller::{SessionController, SharedController, TickReport};

/// Engine configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const STEP_MS: f64 = 1000.0 / 60.0;
    /// Maximum steps per advance to prevent a catch-up stampede
    pub const MAX_STEPS_PER_ADVANCE: u32 = 5;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f64 = 300.0;
    pub const PLAYFIELD_HEIGHT: f64 = 600.0;

    /// Car defaults
    pub const PLAYER_WIDTH: f64 = 50.0;
    pub const PLAYER_HEIGHT: f64 = 30.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f64 = 50.0;
    pub const OBSTACLE_HEIGHT: f64 = 30.0;
    /// Pixels per step (300 px/s at 60 Hz)
    pub const FALL_SPEED_PER_STEP: f64 = 5.0;
    pub const SPAWN_PROBABILITY_PER_STEP: f64 = 0.05;

    /// Period of the painted lane markings
    pub const LANE_DASH_LENGTH: f64 = 40.0;
}

/// Clamp `value` into `[0, max]`, treating a negative `max` as zero
#[inline]
pub fn clamp_to_span(value: f64, max: f64) -> f64 {
    value.clamp(0.0, max.max(0.0))
}
