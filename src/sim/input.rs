//! Directional controls
//!
//! Four independent held flags. Key presses set and clear them directly; a
//! "tap" force-sets a flag and schedules its release a fixed delay later.

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Held direction flags plus pending tap releases
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controls {
    held: [bool; 4],
    /// Timestamp (ms) at which a tapped direction is released
    tap_release_at: [Option<f64>; 4],
}

impl Controls {
    pub fn press(&mut self, dir: Direction) {
        self.held[dir.index()] = true;
    }

    pub fn release(&mut self, dir: Direction) {
        self.held[dir.index()] = false;
    }

    /// Hold `dir` until `now_ms + delay_ms`
    ///
    /// Every tap owns its own release, so an earlier pending release still
    /// fires on time when the direction is tapped again.
    pub fn tap(&mut self, dir: Direction, now_ms: f64, delay_ms: f64) {
        let i = dir.index();
        let at = now_ms + delay_ms;
        self.held[i] = true;
        let release = match self.tap_release_at[i] {
            Some(pending) => pending.min(at),
            None => at,
        };
        self.tap_release_at[i] = Some(release);
    }

    /// Clear every tapped flag whose release time has passed
    pub fn release_expired(&mut self, now_ms: f64) {
        for i in 0..4 {
            if let Some(at) = self.tap_release_at[i] {
                if now_ms >= at {
                    self.held[i] = false;
                    self.tap_release_at[i] = None;
                }
            }
        }
    }

    #[inline]
    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir.index()]
    }

    /// Drop every flag and pending tap
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut controls = Controls::default();
        controls.press(Direction::Up);
        controls.press(Direction::Left);
        assert!(controls.is_held(Direction::Up));
        assert!(controls.is_held(Direction::Left));
        assert!(!controls.is_held(Direction::Down));

        controls.release(Direction::Up);
        assert!(!controls.is_held(Direction::Up));
        assert!(controls.is_held(Direction::Left));
    }

    #[test]
    fn test_opposite_flags_are_independent() {
        let mut controls = Controls::default();
        controls.press(Direction::Left);
        controls.press(Direction::Right);
        assert!(controls.is_held(Direction::Left));
        assert!(controls.is_held(Direction::Right));
    }

    #[test]
    fn test_tap_releases_after_delay() {
        let mut controls = Controls::default();
        controls.tap(Direction::Right, 1000.0, 100.0);
        assert!(controls.is_held(Direction::Right));

        controls.release_expired(1099.0);
        assert!(controls.is_held(Direction::Right));

        controls.release_expired(1100.0);
        assert!(!controls.is_held(Direction::Right));
    }

    #[test]
    fn test_tap_release_overrides_held_key() {
        let mut controls = Controls::default();
        controls.tap(Direction::Down, 0.0, 100.0);
        controls.press(Direction::Down);
        controls.release_expired(150.0);
        assert!(!controls.is_held(Direction::Down));
    }

    #[test]
    fn test_retap_keeps_first_release() {
        let mut controls = Controls::default();
        controls.tap(Direction::Up, 0.0, 100.0);
        controls.tap(Direction::Up, 80.0, 100.0);
        controls.release_expired(99.0);
        assert!(controls.is_held(Direction::Up));
        controls.release_expired(120.0);
        assert!(!controls.is_held(Direction::Up));
    }

    #[test]
    fn test_tap_after_release_schedules_again() {
        let mut controls = Controls::default();
        controls.tap(Direction::Left, 0.0, 100.0);
        controls.release_expired(100.0);
        controls.tap(Direction::Left, 150.0, 100.0);
        controls.release_expired(200.0);
        assert!(controls.is_held(Direction::Left));
        controls.release_expired(250.0);
        assert!(!controls.is_held(Direction::Left));
    }

    #[test]
    fn test_clear() {
        let mut controls = Controls::default();
        controls.press(Direction::Up);
        controls.tap(Direction::Left, 0.0, 100.0);
        controls.clear();
        assert_eq!(controls, Controls::default());
        controls.release_expired(1_000.0);
        assert!(Direction::ALL.iter().all(|&dir| !controls.is_held(dir)));
    }
}
