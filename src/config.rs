//! Playfield configuration
//!
//! Immutable for the lifetime of a session. Validated once at session start so
//! the simulation never has to guard against degenerate sizes or speeds.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("spawn probability must be within [0, 1] (got {0})")]
    ProbabilityOutOfRange(f64),

    #[error("{what} does not fit inside the playfield")]
    DoesNotFit { what: &'static str },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Playfield geometry and tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayfieldConfig {
    // === Playfield ===
    pub width: f64,
    pub height: f64,

    // === Car ===
    pub player_width: f64,
    pub player_height: f64,
    /// Gap between the car's bottom edge and the bottom of the playfield
    pub player_bottom_margin: f64,

    // === Obstacles ===
    pub obstacle_width: f64,
    pub obstacle_height: f64,
    /// Constant fall distance per fixed step
    pub fall_speed_per_step: f64,
    /// Chance of one spawn per fixed step, in [0, 1]
    pub spawn_probability_per_step: f64,

    // === Lane ===
    /// Period of the scrolling lane markings
    pub lane_dash_length: f64,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: 0.0,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            fall_speed_per_step: FALL_SPEED_PER_STEP,
            spawn_probability_per_step: SPAWN_PROBABILITY_PER_STEP,

            lane_dash_length: LANE_DASH_LENGTH,
        }
    }
}

impl PlayfieldConfig {
    /// Build a config from the core playfield parameters; the rest use defaults
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        width: f64,
        height: f64,
        player_width: f64,
        player_height: f64,
        obstacle_width: f64,
        obstacle_height: f64,
        fall_speed_per_step: f64,
        spawn_probability_per_step: f64,
    ) -> Self {
        Self {
            width,
            height,
            player_width,
            player_height,
            obstacle_width,
            obstacle_height,
            fall_speed_per_step,
            spawn_probability_per_step,
            ..Self::default()
        }
    }

    pub fn with_player_bottom_margin(mut self, margin: f64) -> Self {
        self.player_bottom_margin = margin;
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded playfield config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject configs that would produce undefined simulation behavior
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("playerWidth", self.player_width),
            ("playerHeight", self.player_height),
            ("obstacleWidth", self.obstacle_width),
            ("obstacleHeight", self.obstacle_height),
            ("fallSpeedPerStep", self.fall_speed_per_step),
            ("laneDashLength", self.lane_dash_length),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        // NaN fails both comparisons
        if !(0.0..=1.0).contains(&self.spawn_probability_per_step) {
            return Err(ConfigError::ProbabilityOutOfRange(
                self.spawn_probability_per_step,
            ));
        }

        if !self.player_bottom_margin.is_finite() || self.player_bottom_margin < 0.0 {
            return Err(ConfigError::DoesNotFit {
                what: "player bottom margin",
            });
        }
        if self.player_width > self.width {
            return Err(ConfigError::DoesNotFit { what: "player" });
        }
        if self.player_height + self.player_bottom_margin > self.height {
            return Err(ConfigError::DoesNotFit { what: "player" });
        }
        if self.obstacle_width > self.width {
            return Err(ConfigError::DoesNotFit { what: "obstacle" });
        }

        Ok(())
    }

    /// Fixed y of the car's top edge
    #[inline]
    pub fn player_y(&self) -> f64 {
        self.height - self.player_height - self.player_bottom_margin
    }

    /// Rightmost legal x for the car
    #[inline]
    pub fn player_max_x(&self) -> f64 {
        self.width - self.player_width
    }

    /// Rightmost legal spawn x for an obstacle
    #[inline]
    pub fn obstacle_max_x(&self) -> f64 {
        self.width - self.obstacle_width
    }
}
