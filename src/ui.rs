//! HUD model
//!
//! Platform-free view of what the DOM overlay shows. The browser layer copies
//! these strings into the page; nothing here touches the DOM.

use crate::sim::{GamePhase, GameState};

/// Everything the HUD displays for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudModel {
    pub level: String,
    pub timer: String,
    /// Seconds of boost left, `None` when not boosted
    pub boost: Option<String>,
    /// Game-over message, `None` while playing
    pub overlay: Option<&'static str>,
    pub remaining: String,
}

impl HudModel {
    pub fn from_state(state: &GameState, now_ms: f64) -> Self {
        Self {
            level: state.level.to_string(),
            timer: format_timer(state.timer),
            boost: state
                .boost_remaining_ms(now_ms)
                .map(|ms| format!("{:.1}s", ms / 1000.0)),
            overlay: match state.phase {
                GamePhase::Playing => None,
                GamePhase::GameOver(reason) => Some(reason.message()),
            },
            remaining: state.remaining_collectibles().to_string(),
        }
    }
}

/// Whole seconds left, rounded up so the display hits 0 only at game over
pub fn format_timer(secs: f32) -> String {
    format!("{}", secs.max(0.0).ceil() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameOverReason;
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_format_timer() {
        assert_eq!(format_timer(30.0), "30");
        assert_eq!(format_timer(29.99), "30");
        assert_eq!(format_timer(0.01), "1");
        assert_eq!(format_timer(0.0), "0");
        assert_eq!(format_timer(-0.5), "0");
    }

    #[test]
    fn test_playing_hud() {
        let state = GameState::new(1, Vec2::new(800.0, 600.0), Tuning::default());
        let hud = HudModel::from_state(&state, 0.0);
        assert_eq!(hud.level, "1");
        assert_eq!(hud.timer, "30");
        assert_eq!(hud.boost, None);
        assert_eq!(hud.overlay, None);
        assert_eq!(hud.remaining, "5");
    }

    #[test]
    fn test_boost_countdown() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0), Tuning::default());
        state.boost_started_at = Some(2_000.0);
        let hud = HudModel::from_state(&state, 4_500.0);
        assert_eq!(hud.boost.as_deref(), Some("7.5s"));
    }

    #[test]
    fn test_overlay_messages_differ() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0), Tuning::default());
        state.game_over(GameOverReason::TimeUp);
        assert_eq!(HudModel::from_state(&state, 0.0).overlay, Some("Time's up!"));

        state.reset();
        state.game_over(GameOverReason::HazardCollision);
        assert_eq!(HudModel::from_state(&state, 0.0).overlay, Some("Game Over!"));
    }
}
