//! Session lifecycle
//!
//! The host drives the engine through `start`, `tick`, `on_drag` and `stop`.
//! The controller turns wall-clock ticks into fixed steps and is the only
//! code that mutates the session.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::{ConfigError, PlayfieldConfig};
use crate::renderer::{DrawCommand, Renderer, draw_list};
use crate::sim::{
    ArcadeKinematics, EntityId, GameEvent, GamePhase, GameSession, PhysicsBackend, RngState, Snapshot,
    StepOutcome, Stepper, input, step,
};

/// Summary of one host tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Fixed steps actually simulated
    pub steps: u32,
    /// Phase after the tick
    pub phase: GamePhase,
    /// Obstacle that ended the session during this tick
    pub collision: Option<EntityId>,
}

pub struct SessionController<B = ArcadeKinematics, R = Pcg32> {
    config: PlayfieldConfig,
    session: GameSession,
    stepper: Stepper,
    physics: B,
    rng: R,
    /// Set by `stop`; checked before any mutation
    stopped: bool,
}

impl SessionController {
    /// Validate the config and create an idle session seeded for replay
    pub fn new(config: PlayfieldConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_parts(config, ArcadeKinematics, RngState::new(seed).to_rng())
    }
}

impl<B: PhysicsBackend, R: Rng> SessionController<B, R> {
    /// Build a controller around a custom physics backend and random source
    pub fn with_parts(config: PlayfieldConfig, physics: B, rng: R) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("Rejected playfield config: {}", err);
            return Err(err);
        }

        Ok(Self {
            session: GameSession::new(&config),
            config,
            stepper: Stepper::default(),
            physics,
            rng,
            stopped: false,
        })
    }

    /// Idle -> Running. Also begins a fresh session after `stop`.
    pub fn start(&mut self) {
        if self.stopped {
            self.reset_running();
            return;
        }
        match self.session.phase {
            GamePhase::Idle => self.reset_running(),
            phase => log::debug!("start() ignored in {:?}", phase),
        }
    }

    /// Throw away the current session and run a fresh one, from any phase
    pub fn restart(&mut self) {
        self.reset_running();
    }

    fn reset_running(&mut self) {
        self.session = GameSession::new(&self.config);
        self.session.phase = GamePhase::Running;
        self.session.events.push(GameEvent::Started);
        self.stepper.reset();
        self.stopped = false;
        log::info!("Session started");
    }

    /// Stop the session. Later ticks and drags are no-ops. Idempotent.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            log::info!(
                "Session stopped at step {} with score {}",
                self.session.elapsed_steps,
                self.session.score
            );
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advance by the wall time elapsed since the previous tick.
    ///
    /// Runs every due fixed step in order; a collision ends the session and
    /// skips the rest of the tick's steps. Anything but a running, unstopped
    /// session is left untouched.
    pub fn tick(&mut self, wall_delta_ms: f64) -> TickReport {
        let mut report = TickReport {
            steps: 0,
            phase: self.session.phase,
            collision: None,
        };
        if self.stopped || !self.session.is_running() {
            return report;
        }

        let due = self.stepper.advance(wall_delta_ms);
        for _ in 0..due {
            let outcome = step(
                &mut self.session,
                &self.config,
                &mut self.rng,
                &mut self.physics,
            );
            match outcome {
                StepOutcome::Continue => report.steps += 1,
                StepOutcome::Collision { obstacle_id } => {
                    report.steps += 1;
                    report.collision = Some(obstacle_id);
                    log::info!(
                        "Game over: hit obstacle {} at step {}, score {}",
                        obstacle_id,
                        self.session.elapsed_steps,
                        self.session.score
                    );
                    break;
                }
                StepOutcome::Halted => break,
            }
        }

        report.phase = self.session.phase;
        report
    }

    /// Move the car under the pointer
    pub fn on_drag(&mut self, pointer_x: f64) {
        if self.stopped || !self.session.is_running() {
            return;
        }
        input::on_drag(&mut self.session, &self.config, pointer_x);
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &PlayfieldConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Hand pending events to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.session.events.drain()
    }

    pub fn draw_list(&self) -> Vec<DrawCommand> {
        draw_list(&self.session.snapshot(), &self.config)
    }

    /// Push the current frame to a host renderer
    pub fn render<T: Renderer + ?Sized>(&self, renderer: &mut T) {
        renderer.render(&self.draw_list());
    }
}

/// Controller behind one mutex, for hosts that capture input on a different
/// thread from the one that ticks.
pub struct SharedController<B = ArcadeKinematics, R = Pcg32> {
    inner: Arc<Mutex<SessionController<B, R>>>,
}

impl<B, R> Clone for SharedController<B, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: PhysicsBackend, R: Rng> SharedController<B, R> {
    pub fn new(controller: SessionController<B, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Recovers a poisoned lock. A panic inside a step (e.g. from a custom
    /// backend) can leave that step half applied; the session stays
    /// memory-safe and the host can `restart` it.
    fn lock(&self) -> MutexGuard<'_, SessionController<B, R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start(&self) {
        self.lock().start();
    }

    pub fn restart(&self) {
        self.lock().restart();
    }

    pub fn stop(&self) {
        self.lock().stop();
    }

    pub fn tick(&self, wall_delta_ms: f64) -> TickReport {
        self.lock().tick(wall_delta_ms)
    }

    pub fn on_drag(&self, pointer_x: f64) {
        self.lock().on_drag(pointer_x);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    pub fn drain_events(&self) -> Vec<GameEvent> {
        self.lock().drain_events()
    }

    /// Run `f` with exclusive access to the controller
    pub fn with<T>(&self, f: impl FnOnce(&mut SessionController<B, R>) -> T) -> T {
        f(&mut self.lock())
    }
}
