//! Game engine logic and state management.
//!
//! This module provides the high-level logic that orchestrates the core data
//! structures to implement the stacking gameplay:
//!
//! - [`GameField`] - Board, active row, settled blocks, and the commit rules
//! - [`GameSession`] - Phase tracking, tick dispatch, speed tiers, end banner
//! - [`GameConfig`] - Board dimensions and timer periods, validated at init
//! - [`Snapshot`] - Plain-data view of one game state for rendering or tests
//!
//! # Game Flow
//!
//! A typical game progresses as follows:
//!
//! 1. Initialize [`GameSession`] from a [`GameConfig`]
//! 2. Each tick drifts the active row sideways, bouncing at the board edges
//! 3. The player commits the row; supported blocks settle, unsupported ones
//!    are lost from the spawn budget
//! 4. The working row moves up one cell and a new row spawns, sized by the
//!    remaining budget
//! 5. Repeat until the top row is filled (win) or the budget runs out (loss)
//!
//! The session owns the current tick interval; the presentation layer re-arms
//! its timer from [`GameSession::tick_interval`] after every commit or reset.
//!
//! # Example
//!
//! ```
//! use stakkr_engine::{GameConfig, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::default()).unwrap();
//!
//! // Drift the active row a couple of cells, then lay it down.
//! session.tick();
//! session.tick();
//! session.commit();
//!
//! assert!(session.phase().is_running());
//! assert_eq!(session.field().inactive().len(), 3);
//! ```

pub use self::{config::*, game_field::*, game_session::*, snapshot::*};

mod banner;
mod config;
mod game_field;
mod game_session;
mod snapshot;
mod speed;
