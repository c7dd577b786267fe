//! Pointer drag to car position
//!
//! Direct manipulation: the car's center follows the pointer with no
//! smoothing, clamped so the car never leaves the road.

use super::state::GameSession;
use crate::clamp_to_span;
use crate::config::PlayfieldConfig;

/// Car x for a pointer at `pointer_x`, clamped to `[0, width - player_width]`
#[inline]
pub fn target_x(config: &PlayfieldConfig, pointer_x: f64) -> f64 {
    clamp_to_span(pointer_x - config.player_width / 2.0, config.player_max_x())
}

/// Move the car under the pointer. Vertical position never changes.
pub fn on_drag(session: &mut GameSession, config: &PlayfieldConfig, pointer_x: f64) {
    if !pointer_x.is_finite() {
        log::warn!("Ignoring non-finite pointer x: {}", pointer_x);
        return;
    }
    session.player.x = target_x(config, pointer_x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_centers_car_under_pointer() {
        let config = PlayfieldConfig::default();
        let mut session = GameSession::new(&config);
        on_drag(&mut session, &config, 100.0);
        assert_eq!(session.player.x, 75.0);
    }

    #[test]
    fn test_clamps_to_playfield() {
        let config = PlayfieldConfig::default();
        let mut session = GameSession::new(&config);

        on_drag(&mut session, &config, -500.0);
        assert_eq!(session.player.x, 0.0);

        on_drag(&mut session, &config, 10_000.0);
        assert_eq!(session.player.x, config.width - config.player_width);
    }

    #[test]
    fn test_ignores_non_finite_pointer() {
        let config = PlayfieldConfig::default();
        let mut session = GameSession::new(&config);
        on_drag(&mut session, &config, 60.0);
        on_drag(&mut session, &config, f64::NAN);
        assert_eq!(session.player.x, 35.0);
    }

    #[test]
    fn test_vertical_position_fixed() {
        let config = PlayfieldConfig::default();
        let mut session = GameSession::new(&config);
        let y = session.player.y;
        on_drag(&mut session, &config, 12.0);
        assert_eq!(session.player.y, y);
    }

    proptest! {
        #[test]
        fn prop_car_stays_on_road(pointer in -1.0e9..1.0e9f64) {
            let config = PlayfieldConfig::default();
            let mut session = GameSession::new(&config);
            on_drag(&mut session, &config, pointer);
            prop_assert!(session.player.x >= 0.0);
            prop_assert!(session.player.x <= config.width - config.player_width);
        }
    }
}
