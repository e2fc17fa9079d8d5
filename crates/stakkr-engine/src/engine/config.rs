use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    GameConfigError,
    core::{block::SPAWN_COUNT, board::Board},
};

/// Board dimensions and timer periods for one game.
///
/// The defaults reproduce the classic arcade parameters: a 7x11 board, a
/// 150 ms base tick, speed-ups to 100 ms and 85 ms as the stack climbs, and a
/// 250 ms blink period for the end banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells. Must fit the spawn row and the `u16` bit-rows.
    pub cols: usize,
    /// Board height in cells.
    pub rows: usize,
    /// Tick period at the start of a game.
    pub base_interval: Duration,
    /// Tick period once the stack crosses the lower speed-up row.
    pub fast_interval: Duration,
    /// Tick period once the stack crosses the upper speed-up row.
    pub turbo_interval: Duration,
    /// Toggle period of the end banner.
    pub blink_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: 7,
            rows: 11,
            base_interval: Duration::from_millis(150),
            fast_interval: Duration::from_millis(100),
            turbo_interval: Duration::from_millis(85),
            blink_interval: Duration::from_millis(250),
        }
    }
}

impl GameConfig {
    /// Rejects configurations the engine cannot run: a board with no rows,
    /// a board too narrow to hold a full spawn row, a board wider than the
    /// bit-row representation, or a zero timer period.
    pub fn validate(&self) -> Result<(), GameConfigError> {
        if self.rows == 0 {
            return Err(GameConfigError::NoRows);
        }
        if self.cols < SPAWN_COUNT {
            return Err(GameConfigError::BoardTooNarrow {
                width: self.cols,
                spawn: SPAWN_COUNT,
            });
        }
        if self.cols > Board::MAX_COLS {
            return Err(GameConfigError::BoardTooWide {
                width: self.cols,
                max: Board::MAX_COLS,
            });
        }
        let intervals = [
            self.base_interval,
            self.fast_interval,
            self.turbo_interval,
            self.blink_interval,
        ];
        if intervals.iter().any(Duration::is_zero) {
            return Err(GameConfigError::ZeroInterval);
        }
        Ok(())
    }
}
