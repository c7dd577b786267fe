//! Fixed timestep simulation step
//!
//! One step is spawn, then integrate, then collide, always in that order.

use rand::Rng;

use super::physics::PhysicsBackend;
use super::spawner::try_spawn;
use super::state::{EntityId, GameEvent, GamePhase, GameSession};
use crate::config::PlayfieldConfig;

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing terminal happened
    Continue,
    /// The car hit this obstacle; the session is now over
    Collision { obstacle_id: EntityId },
    /// Session was not running; nothing was touched
    Halted,
}

/// Advance a running session by one fixed step.
///
/// A session that is not `Running` is left untouched, so an extra step after
/// game over is harmless.
pub fn step<R, B>(
    session: &mut GameSession,
    config: &PlayfieldConfig,
    rng: &mut R,
    physics: &mut B,
) -> StepOutcome
where
    R: Rng + ?Sized,
    B: PhysicsBackend + ?Sized,
{
    if session.phase != GamePhase::Running {
        return StepOutcome::Halted;
    }

    session.elapsed_steps += 1;

    if let Some(body) = try_spawn(rng, config) {
        let id = session.push_obstacle(body);
        log::trace!("Spawned obstacle {} at step {}", id, session.elapsed_steps);
    }

    physics.integrate(session, config);

    match physics.detect_contact(session) {
        Some(obstacle_id) => {
            session.phase = GamePhase::GameOver;
            session.events.push(GameEvent::Collision { obstacle_id });
            StepOutcome::Collision { obstacle_id }
        }
        None => StepOutcome::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::physics::ArcadeKinematics;
    use crate::sim::state::{Body, BodyKind};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn running_session(config: &PlayfieldConfig) -> GameSession {
        let mut session = GameSession::new(config);
        session.phase = GamePhase::Running;
        session
    }

    #[test]
    fn test_idle_session_is_not_stepped() {
        let config = PlayfieldConfig::default();
        let mut session = GameSession::new(&config);
        let mut rng = Pcg32::seed_from_u64(1);

        let outcome = step(&mut session, &config, &mut rng, &mut ArcadeKinematics);
        assert_eq!(outcome, StepOutcome::Halted);
        assert_eq!(session.elapsed_steps, 0);
    }

    #[test]
    fn test_spawned_obstacle_moves_in_same_step() {
        let config = PlayfieldConfig {
            spawn_probability_per_step: 1.0,
            ..Default::default()
        };
        let mut session = running_session(&config);
        let mut rng = Pcg32::seed_from_u64(1);

        let outcome = step(&mut session, &config, &mut rng, &mut ArcadeKinematics);
        assert_eq!(outcome, StepOutcome::Continue);
        assert_eq!(session.obstacles.len(), 1);
        assert_eq!(
            session.obstacles[0].y,
            -config.obstacle_height + config.fall_speed_per_step
        );
        assert_eq!(session.elapsed_steps, 1);
    }

    #[test]
    fn test_collision_ends_session() {
        let config = PlayfieldConfig {
            spawn_probability_per_step: 0.0,
            ..Default::default()
        };
        let mut session = running_session(&config);
        let mut rng = Pcg32::seed_from_u64(1);

        // Just above the car, one step away from overlapping
        let id = session.push_obstacle(Body {
            id: 0,
            x: session.player.x,
            y: session.player.y - config.obstacle_height,
            width: config.obstacle_width,
            height: config.obstacle_height,
            kind: BodyKind::Obstacle,
        });

        let outcome = step(&mut session, &config, &mut rng, &mut ArcadeKinematics);
        assert_eq!(outcome, StepOutcome::Collision { obstacle_id: id });
        assert_eq!(session.phase, GamePhase::GameOver);
        assert_eq!(
            session.events.latest(),
            Some(&GameEvent::Collision { obstacle_id: id })
        );

        // Further steps do nothing
        let frozen = session.snapshot();
        assert_eq!(
            step(&mut session, &config, &mut rng, &mut ArcadeKinematics),
            StepOutcome::Halted
        );
        assert_eq!(session.snapshot(), frozen);
    }

    #[test]
    fn test_determinism() {
        let config = PlayfieldConfig {
            spawn_probability_per_step: 0.3,
            ..Default::default()
        };
        let mut a = running_session(&config);
        let mut b = running_session(&config);
        let mut rng_a = Pcg32::seed_from_u64(99999);
        let mut rng_b = Pcg32::seed_from_u64(99999);

        for _ in 0..200 {
            step(&mut a, &config, &mut rng_a, &mut ArcadeKinematics);
            step(&mut b, &config, &mut rng_b, &mut ArcadeKinematics);
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }
}
