//! Fixed-step driver
//!
//! Turns variable frame deltas into a whole number of simulation ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Frame time accumulator
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    /// Feed one frame's elapsed seconds, returning how many ticks to run
    ///
    /// At most `MAX_SUBSTEPS` ticks run per frame. Whatever a slow frame could
    /// not drain is dropped down to a single pending tick, so the game slows
    /// down instead of racing to catch up later.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }

        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        steps
    }

    /// Unsimulated time carried into the next frame (seconds)
    pub fn backlog(&self) -> f32 {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_frame_at_60fps() {
        let mut step = FixedStep::default();
        let total: u32 = (0..600).map(|_| step.advance(SIM_DT)).sum();
        assert!((599..=600).contains(&total), "ran {total} ticks");
        assert!(step.backlog() < SIM_DT);
    }

    #[test]
    fn test_substeps_capped() {
        let mut step = FixedStep::default();
        assert_eq!(step.advance(5.0), MAX_SUBSTEPS);
        assert!(step.backlog() <= SIM_DT);
    }

    #[test]
    fn test_negative_delta_runs_nothing() {
        let mut step = FixedStep::default();
        assert_eq!(step.advance(-0.5), 0);
        assert_eq!(step.backlog(), 0.0);
    }

    #[test]
    fn test_slow_frames_do_not_build_backlog() {
        let mut step = FixedStep::default();
        // Ten seconds at 12 fps
        for _ in 0..120 {
            assert_eq!(step.advance(1.0 / 12.0), MAX_SUBSTEPS);
            assert!(step.backlog() <= SIM_DT);
        }

        // Back at 60 fps: at most one extra tick, then one per frame
        assert!(step.advance(SIM_DT) <= 2);
        let total: u32 = (0..60).map(|_| step.advance(SIM_DT)).sum();
        assert!((59..=61).contains(&total), "ran {total} ticks");
    }
}
