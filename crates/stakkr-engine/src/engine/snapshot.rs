use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    core::block::BlockPos,
    engine::game_session::{GamePhase, GameSession},
};

/// Plain-data view of one game state.
///
/// Everything a renderer (or a test) needs, decoupled from the live session:
/// board dimensions, block positions in grid coordinates, phase, banner text,
/// and the current timer period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cols: usize,
    pub rows: usize,
    pub phase: GamePhase,
    pub spawn_budget: usize,
    pub active: Vec<BlockPos>,
    pub inactive: Vec<BlockPos>,
    pub message: String,
    pub tick_interval: Duration,
}

impl Snapshot {
    pub(crate) fn capture(session: &GameSession) -> Self {
        let field = session.field();
        Self {
            cols: field.board().cols(),
            rows: field.board().rows(),
            phase: session.phase(),
            spawn_budget: field.spawn_budget(),
            active: field.active().positions().collect(),
            inactive: field.inactive().to_vec(),
            message: session.display_message().to_owned(),
            tick_interval: session.tick_interval(),
        }
    }
}
