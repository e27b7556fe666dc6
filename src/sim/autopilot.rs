//! Demo autopilot
//!
//! Steers the player toward the nearest uncollected item and sidesteps
//! hazards that get too close. Used by the headless runner and the browser
//! demo toggle; it only produces `Controls`, the tick does the rest.

use glam::Vec2;

use super::collision::Bounded;
use super::input::{Controls, Direction};
use super::state::GameState;

/// Pick direction flags for the next tick
pub fn steer(state: &GameState) -> Controls {
    let mut controls = Controls::default();
    let me = state.player.bounds().center();
    let dead_zone = state.player.speed.max(1.0);

    let target = state
        .collectibles
        .iter()
        .filter(|c| !c.collected)
        .map(|c| c.bounds().center())
        .chain(
            state
                .boost
                .iter()
                .filter(|b| !b.collected)
                .map(|b| b.bounds().center()),
        )
        .min_by(|a, b| {
            a.distance_squared(me)
                .partial_cmp(&b.distance_squared(me))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut heading = match target {
        Some(t) => t - me,
        None => Vec2::ZERO,
    };

    // Flee on any axis where a hazard is closer than one player size
    let danger = state.player.size;
    for hazard in &state.hazards {
        let away = me - hazard.bounds().center();
        if away.length() < danger + hazard.size / 2.0 {
            heading = away;
            break;
        }
    }

    if heading.x > dead_zone {
        controls.press(Direction::Right);
    } else if heading.x < -dead_zone {
        controls.press(Direction::Left);
    }
    if heading.y > dead_zone {
        controls.press(Direction::Down);
    } else if heading.y < -dead_zone {
        controls.press(Direction::Up);
    }

    controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Collectible, Hazard};
    use crate::sim::{TickInput, tick};
    use crate::tuning::Tuning;

    fn empty_state() -> GameState {
        let mut state = GameState::new(5, Vec2::new(1000.0, 1000.0), Tuning::default());
        state.collectibles.clear();
        state.hazards.clear();
        state.boost = None;
        state.player.pos = Vec2::new(450.0, 450.0);
        state
    }

    #[test]
    fn test_heads_for_nearest_collectible() {
        let mut state = empty_state();
        state.collectibles.push(Collectible {
            pos: Vec2::new(900.0, 475.0),
            size: 50.0,
            collected: false,
        });
        state.collectibles.push(Collectible {
            pos: Vec2::new(100.0, 100.0),
            size: 50.0,
            collected: true,
        });
        let controls = steer(&state);
        assert!(controls.is_held(Direction::Right));
        assert!(!controls.is_held(Direction::Left));
        assert!(!controls.is_held(Direction::Up));
        assert!(!controls.is_held(Direction::Down));
    }

    #[test]
    fn test_flees_close_hazard() {
        let mut state = empty_state();
        state.collectibles.push(Collectible {
            pos: Vec2::new(900.0, 475.0),
            size: 50.0,
            collected: false,
        });
        state.hazards.push(Hazard {
            pos: Vec2::new(560.0, 460.0),
            vel: Vec2::ZERO,
            size: 80.0,
        });
        let controls = steer(&state);
        assert!(controls.is_held(Direction::Left));
        assert!(!controls.is_held(Direction::Right));
    }

    #[test]
    fn test_idle_without_targets() {
        let state = empty_state();
        assert_eq!(steer(&state), Controls::default());
    }

    #[test]
    fn test_clears_a_quiet_level() {
        let mut state = empty_state();
        for i in 0..5 {
            state.collectibles.push(Collectible {
                pos: Vec2::new(100.0 + 150.0 * i as f32, 100.0 + 120.0 * i as f32),
                size: 50.0,
                collected: false,
            });
        }
        for _ in 0..1_000 {
            let input = TickInput {
                controls: steer(&state),
                ..Default::default()
            };
            tick(&mut state, &input);
            if state.level > 1 {
                break;
            }
        }
        assert_eq!(state.level, 2);
    }
}
