//! Constant-velocity integration for falling obstacles

use super::state::{GameEvent, GameSession};
use crate::config::PlayfieldConfig;

/// Advance every obstacle by one step and retire the ones that left the
/// playfield.
///
/// Each retired obstacle was dodged, so it scores one point. Returns how many
/// were retired. The car has no velocity of its own and is untouched here.
pub fn advance(session: &mut GameSession, config: &PlayfieldConfig) -> u32 {
    for obstacle in &mut session.obstacles {
        obstacle.y += config.fall_speed_per_step;
    }

    let mut passed = 0u32;
    let events = &mut session.events;
    session.obstacles.retain(|obstacle| {
        if obstacle.y >= config.height {
            events.push(GameEvent::ObstaclePassed { id: obstacle.id });
            passed += 1;
            false
        } else {
            true
        }
    });
    session.score += u64::from(passed);

    // Road paint scrolls with the traffic
    session.lane_offset =
        (session.lane_offset + config.fall_speed_per_step) % config.lane_dash_length;

    passed
}
