//! Draw command generation
//!
//! Turns a snapshot into a flat, back-to-front list of primitives. The host
//! decides what a road, a car or a banner looks like.

use serde::{Deserialize, Serialize};

use crate::config::PlayfieldConfig;
use crate::sim::{Body, EntityId, GamePhase, Snapshot};

/// Width of the painted center line
const LANE_DASH_WIDTH: f64 = 4.0;
/// Fraction of each dash period that is painted
const LANE_DASH_FILL: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&Body> for Rect {
    fn from(body: &Body) -> Self {
        Self {
            x: body.x,
            y: body.y,
            width: body.width,
            height: body.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Road surface covering the playfield
    Road(Rect),
    /// One dash of the scrolling center line
    LaneDash(Rect),
    Car(Rect),
    Obstacle { id: EntityId, rect: Rect },
    Score(u64),
    /// Shown once the car has crashed
    GameOverBanner { score: u64 },
}

/// Host-side sink for draw commands
pub trait Renderer {
    fn render(&mut self, commands: &[DrawCommand]);
}

/// Build the draw list for one frame
pub fn draw_list(snapshot: &Snapshot, config: &PlayfieldConfig) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(snapshot.obstacles.len() + 16);

    commands.push(DrawCommand::Road(Rect {
        x: 0.0,
        y: 0.0,
        width: config.width,
        height: config.height,
    }));
    lane_dashes(snapshot.lane_offset, config, &mut commands);

    for obstacle in &snapshot.obstacles {
        commands.push(DrawCommand::Obstacle {
            id: obstacle.id,
            rect: Rect::from(obstacle),
        });
    }
    commands.push(DrawCommand::Car(Rect::from(&snapshot.player)));

    commands.push(DrawCommand::Score(snapshot.score));
    if snapshot.phase == GamePhase::GameOver {
        commands.push(DrawCommand::GameOverBanner {
            score: snapshot.score,
        });
    }

    commands
}

/// Center line dashes shifted down by the scroll offset.
/// Starts one period above the top so the first dash slides in smoothly.
fn lane_dashes(offset: f64, config: &PlayfieldConfig, out: &mut Vec<DrawCommand>) {
    let period = config.lane_dash_length;
    let dash = period * LANE_DASH_FILL;
    let x = (config.width - LANE_DASH_WIDTH) / 2.0;

    let mut y = offset - period;
    while y < config.height {
        let top = y.max(0.0);
        let bottom = (y + dash).min(config.height);
        if bottom > top {
            out.push(DrawCommand::LaneDash(Rect {
                x,
                y: top,
                width: LANE_DASH_WIDTH,
                height: bottom - top,
            }));
        }
        y += period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameSession;

    #[test]
    fn test_draw_order() {
        let config = PlayfieldConfig::default();
        let mut session = GameSession::new(&config);
        session.phase = GamePhase::Running;
        let mut body = session.player.clone();
        body.kind = crate::sim::BodyKind::Obstacle;
        body.y = 100.0;
        let id = session.push_obstacle(body);

        let commands = draw_list(&session.snapshot(), &config);
        assert!(matches!(commands.first(), Some(DrawCommand::Road(_))));
        let obstacle_at = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Obstacle { id: i, .. } if *i == id))
            .unwrap();
        let car_at = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Car(_)))
            .unwrap();
        assert!(obstacle_at < car_at);
        assert_eq!(commands.last(), Some(&DrawCommand::Score(0)));
    }

    #[test]
    fn test_game_over_banner() {
        let config = PlayfieldConfig::default();
        let mut session = GameSession::new(&config);
        session.phase = GamePhase::GameOver;
        session.score = 12;

        let commands = draw_list(&session.snapshot(), &config);
        assert_eq!(
            commands.last(),
            Some(&DrawCommand::GameOverBanner { score: 12 })
        );
    }

    #[test]
    fn test_lane_dashes_stay_inside_playfield() {
        let config = PlayfieldConfig::default();
        for offset in [0.0, 5.0, 17.5, 39.0] {
            let mut dashes = Vec::new();
            lane_dashes(offset, &config, &mut dashes);
            // 600 px road, one 20 px dash per 40 px
            assert!(dashes.len() >= 15 && dashes.len() <= 16, "{}", dashes.len());
            for dash in &dashes {
                let DrawCommand::LaneDash(rect) = dash else {
                    panic!("unexpected command {dash:?}");
                };
                assert!(rect.y >= 0.0);
                assert!(rect.y + rect.height <= config.height);
                assert!(rect.height > 0.0);
            }
        }
    }

    #[test]
    fn test_lane_dashes_scroll_with_offset() {
        let config = PlayfieldConfig::default();
        let mut still = Vec::new();
        let mut moved = Vec::new();
        lane_dashes(0.0, &config, &mut still);
        lane_dashes(10.0, &config, &mut moved);

        let first_full = |dashes: &[DrawCommand]| match dashes
            .iter()
            .find(|d| matches!(d, DrawCommand::LaneDash(r) if r.height == 20.0 && r.y > 30.0))
        {
            Some(DrawCommand::LaneDash(rect)) => rect.y,
            _ => panic!("no full dash"),
        };
        assert_eq!(first_full(&moved) - first_full(&still), 10.0);
    }
}
