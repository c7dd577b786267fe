//! Fixed timestep accumulator
//!
//! Converts irregular wall-clock deltas from the host into whole simulation
//! steps, so the step count does not depend on how often the host calls in.

use crate::consts::{MAX_STEPS_PER_ADVANCE, STEP_MS};

#[derive(Debug, Clone)]
pub struct Stepper {
    step_ms: f64,
    max_steps: u32,
    accumulator: f64,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(STEP_MS, MAX_STEPS_PER_ADVANCE)
    }
}

impl Stepper {
    pub fn new(step_ms: f64, max_steps: u32) -> Self {
        Self {
            step_ms,
            max_steps,
            accumulator: 0.0,
        }
    }

    /// Feed elapsed wall time and return how many fixed steps are due.
    ///
    /// The sub-step remainder carries over to the next call. When more than
    /// `max_steps` are due the backlog is dropped instead of replayed later.
    pub fn advance(&mut self, wall_delta_ms: f64) -> u32 {
        if wall_delta_ms.is_finite() && wall_delta_ms > 0.0 {
            self.accumulator += wall_delta_ms;
        }

        let due = (self.accumulator / self.step_ms).floor();
        if due >= self.max_steps as f64 {
            let dropped = due - self.max_steps as f64;
            if dropped > 0.0 {
                log::debug!("Dropping {} steps of backlog", dropped);
            }
            self.accumulator %= self.step_ms;
            return self.max_steps;
        }

        let steps = due as u32;
        self.accumulator -= steps as f64 * self.step_ms;
        steps
    }

    /// Time carried over toward the next step
    #[cfg(test)]
    pub fn remainder_ms(&self) -> f64 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
