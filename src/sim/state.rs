//! Game state and core simulation types
//!
//! The session owns every body. Everything needed to reproduce a run lives here.

use std::collections::VecDeque;

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::PlayfieldConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, waiting for an explicit start
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Car hit an obstacle; only a restart leaves this phase
    GameOver,
}

/// Unique per session; never reused
pub type EntityId = u64;

/// Oldest events are dropped beyond this, so hosts that never drain stay bounded
pub const MAX_PENDING_EVENTS: usize = 256;

/// Body kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Player,
    Obstacle,
}

/// An axis-aligned rectangle in playfield coordinates (top-left origin, y down)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: BodyKind,
}

impl Body {
    /// Top-left corner
    #[inline]
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.x + self.width, self.y + self.height)
    }
}

/// Things that happened during a step, for host feedback (sound, haptics)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    ObstacleSpawned { id: EntityId },
    ObstaclePassed { id: EntityId },
    Collision { obstacle_id: EntityId },
}

/// Pending events, capped at `MAX_PENDING_EVENTS`
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: GameEvent) {
        if self.pending.len() == MAX_PENDING_EVENTS {
            self.pending.pop_front();
        }
        self.pending.push_back(event);
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }

    /// Most recent event
    pub fn latest(&self) -> Option<&GameEvent> {
        self.pending.back()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Seed wrapper so a session can rebuild its RNG
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    /// The car
    pub player: Body,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Body>,
    /// Obstacles successfully passed
    pub score: u64,
    /// Fixed steps simulated since start
    pub elapsed_steps: u64,
    /// Scroll phase of the lane markings, in `[0, lane_dash_length)`
    pub lane_offset: f64,
    /// Pending events for the host
    #[serde(skip)]
    pub events: EventQueue,
    /// Next entity ID
    next_id: EntityId,
}

impl GameSession {
    /// Fresh idle session with the car centered at the bottom
    pub fn new(config: &PlayfieldConfig) -> Self {
        let mut session = Self {
            phase: GamePhase::Idle,
            player: Body {
                id: 0,
                x: 0.0,
                y: 0.0,
                width: config.player_width,
                height: config.player_height,
                kind: BodyKind::Player,
            },
            obstacles: Vec::new(),
            score: 0,
            elapsed_steps: 0,
            lane_offset: 0.0,
            events: EventQueue::default(),
            next_id: 1,
        };
        session.player.id = session.next_entity_id();
        session.center_player(config);
        session
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Put the car back at center-bottom
    pub fn center_player(&mut self, config: &PlayfieldConfig) {
        self.player.x = config.player_max_x() / 2.0;
        self.player.y = config.player_y();
    }

    /// Take ownership of a freshly spawned obstacle, assigning its ID.
    /// Appending keeps `obstacles` in spawn order.
    pub fn push_obstacle(&mut self, mut body: Body) -> EntityId {
        debug_assert_eq!(body.kind, BodyKind::Obstacle);
        let id = self.next_entity_id();
        body.id = id;
        self.events.push(GameEvent::ObstacleSpawned { id });
        self.obstacles.push(body);
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Read-only view handed to the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.clone(),
            obstacles: self.obstacles.clone(),
            score: self.score,
            phase: self.phase,
            elapsed_steps: self.elapsed_steps,
            lane_offset: self.lane_offset,
        }
    }
}

/// Per-tick view of a session for rendering and comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: Body,
    pub obstacles: Vec<Body>,
    pub score: u64,
    pub phase: GamePhase,
    pub elapsed_steps: u64,
    pub lane_offset: f64,
}
