use std::time::Duration;

use super::config::GameConfig;

/// One speed-up step of the difficulty ramp.
///
/// `budget_guard` keeps the spawn-slot penalty one-shot: the penalty only
/// applies while the budget still has its expected value, so a budget already
/// reduced by a missed block is not reduced again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpeedStep {
    pub(crate) trigger_row: usize,
    pub(crate) budget_guard: usize,
    pub(crate) interval: Duration,
}

/// The two fixed speed-up rows, computed from the board height at init.
///
/// Each trigger row is reached at most once per descent, so each step fires
/// at most once per game. The upper (turbo) row is checked first; on boards
/// short enough for both rows to coincide, it wins.
#[derive(Debug, Clone)]
pub(crate) struct SpeedRamp {
    steps: [SpeedStep; 2],
}

impl SpeedRamp {
    pub(crate) fn new(config: &GameConfig) -> Self {
        let last_row = config.rows - 1;
        Self {
            steps: [
                SpeedStep {
                    trigger_row: last_row / 3,
                    budget_guard: 2,
                    interval: config.turbo_interval,
                },
                SpeedStep {
                    trigger_row: last_row * 2 / 3,
                    budget_guard: 3,
                    interval: config.fast_interval,
                },
            ],
        }
    }

    /// The step crossing at `spawn_row`, if any.
    pub(crate) fn step_at(&self, spawn_row: usize) -> Option<SpeedStep> {
        self.steps
            .iter()
            .copied()
            .find(|step| step.trigger_row == spawn_row)
    }
}
