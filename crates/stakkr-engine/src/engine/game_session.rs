use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    GameConfigError,
    core::block::BlockPos,
    engine::{
        banner::{self, ResultBanner},
        config::GameConfig,
        game_field::{CommitOutcome, GameField},
        snapshot::Snapshot,
        speed::SpeedRamp,
    },
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
pub enum GamePhase {
    Running,
    Won,
    Lost,
}

/// One full game, driven as a synchronous reducer.
///
/// The presentation layer feeds in exactly three inputs - [`tick`],
/// [`commit`] and [`reset`] - and reads the resulting state back through the
/// accessors. Every input runs to completion before the next one is applied,
/// so all derived state (board, blocks, phase, banner text, tick interval) is
/// consistent whenever the session is observed.
///
/// The session owns the current [`tick_interval`]; after a commit or reset
/// the caller re-arms its one timer from it. Commits while the game is over
/// are ignored; ticks then blink the end banner instead of drifting.
///
/// [`tick`]: Self::tick
/// [`commit`]: Self::commit
/// [`reset`]: Self::reset
/// [`tick_interval`]: Self::tick_interval
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    field: GameField,
    ramp: SpeedRamp,
    phase: GamePhase,
    banner: ResultBanner,
    tick_interval: Duration,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, GameConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: GameConfig) -> Self {
        Self {
            field: GameField::new(&config),
            ramp: SpeedRamp::new(&config),
            phase: GamePhase::Running,
            banner: ResultBanner::new(),
            tick_interval: config.base_interval,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn field(&self) -> &GameField {
        &self.field
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The period the driving timer should currently be armed with.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Text for the banner line: the title while running, then the blinking
    /// result once the game is over.
    #[must_use]
    pub fn display_message(&self) -> &'static str {
        match self.phase {
            GamePhase::Running => banner::TITLE_TEXT,
            GamePhase::Won => self.banner.text(banner::WIN_TEXT),
            GamePhase::Lost => self.banner.text(banner::LOSS_TEXT),
        }
    }

    /// Every renderable block, active and settled.
    pub fn blocks(&self) -> impl Iterator<Item = BlockPos> + '_ {
        self.field
            .active()
            .positions()
            .chain(self.field.inactive().iter().copied())
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Advances one timer period: drifts the active row while the game runs,
    /// blinks the end banner once it is over.
    pub fn tick(&mut self) {
        match self.phase {
            GamePhase::Running => self.field.drift_active(),
            GamePhase::Won | GamePhase::Lost => self.banner.advance(),
        }
    }

    /// Lays the active row down and resolves everything that follows from it:
    /// support, budget, win/loss, the speed ramp, and the next spawn.
    ///
    /// Ignored unless the game is running.
    pub fn commit(&mut self) {
        if !self.phase.is_running() {
            return;
        }
        match self.field.commit() {
            CommitOutcome::Lost => self.finish(GamePhase::Lost),
            CommitOutcome::Won => self.finish(GamePhase::Won),
            CommitOutcome::Advanced { spawn_row } => {
                if let Some(step) = self.ramp.step_at(spawn_row) {
                    self.field.shed_spawn_slot_if(step.budget_guard);
                    self.tick_interval = step.interval;
                }
                self.field.spawn_row(spawn_row);
            }
        }
    }

    fn finish(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.tick_interval = self.config.blink_interval;
    }

    /// Starts a fresh game with the same configuration: empty board, full
    /// spawn budget, base tick interval.
    pub fn reset(&mut self) {
        *self = Self::with_valid_config(self.config.clone());
    }
}
