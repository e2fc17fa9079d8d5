pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GameConfigError {
    #[display("board must have at least one row")]
    NoRows,
    #[display("board width {width} is narrower than the spawn row ({spawn} blocks)")]
    BoardTooNarrow { width: usize, spawn: usize },
    #[display("board width {width} exceeds the bit-row capacity ({max} columns)")]
    BoardTooWide { width: usize, max: usize },
    #[display("tick and blink intervals must be non-zero")]
    ZeroInterval,
}
