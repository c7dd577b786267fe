//! Obstacle spawning at the top edge of the playfield

use rand::Rng;

use super::state::{Body, BodyKind};
use crate::config::PlayfieldConfig;

/// Roll for one spawn this step.
///
/// The returned body carries id 0; the session assigns the real id when it
/// takes ownership.
///
/// Draws one uniform sample in `[0, 1)` and spawns iff it is below the
/// configured probability. The new obstacle sits fully above the visible
/// playfield with `x` uniform over `[0, width - obstacle_width)`. At most one
/// body per call.
pub fn try_spawn<R: Rng + ?Sized>(
    rng: &mut R,
    config: &PlayfieldConfig,
) -> Option<Body> {
    let roll: f64 = rng.random();
    if roll >= config.spawn_probability_per_step {
        return None;
    }

    let x = rng.random::<f64>() * config.obstacle_max_x();
    Some(Body {
        id: 0,
        x,
        y: -config.obstacle_height,
        width: config.obstacle_width,
        height: config.obstacle_height,
        kind: BodyKind::Obstacle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn config_with_probability(p: f64) -> PlayfieldConfig {
        PlayfieldConfig {
            spawn_probability_per_step: p,
            ..Default::default()
        }
    }

    #[test]
    fn test_never_spawns_at_zero_probability() {
        let config = config_with_probability(0.0);
        let mut rng = Pcg32::seed_from_u64(7);
        assert!((0..1000).all(|_| try_spawn(&mut rng, &config).is_none()));
    }

    #[test]
    fn test_always_spawns_at_full_probability() {
        let config = config_with_probability(1.0);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let body = try_spawn(&mut rng, &config).expect("p=1 always spawns");
            assert_eq!(body.kind, BodyKind::Obstacle);
            assert_eq!(body.y, -config.obstacle_height);
            assert!(body.x >= 0.0 && body.x <= config.obstacle_max_x());
            assert_eq!(body.width, config.obstacle_width);
            assert_eq!(body.height, config.obstacle_height);
        }
    }

    #[test]
    fn test_spawn_rate_tracks_probability() {
        let config = config_with_probability(0.25);
        let mut rng = Pcg32::seed_from_u64(42);
        let spawned = (0..10_000)
            .filter(|_| try_spawn(&mut rng, &config).is_some())
            .count();
        assert!((2_200..2_800).contains(&spawned), "spawned {spawned}");
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let config = config_with_probability(0.5);
        let mut a = Pcg32::seed_from_u64(3);
        let mut b = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            assert_eq!(try_spawn(&mut a, &config), try_spawn(&mut b, &config));
        }
    }
}
