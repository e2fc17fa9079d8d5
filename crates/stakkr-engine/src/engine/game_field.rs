use crate::{
    core::{
        block::{ActiveRow, BlockPos, SPAWN_COUNT},
        board::Board,
    },
    engine::config::GameConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Drift {
    Left,
    Right,
}

impl Drift {
    fn step(self) -> isize {
        match self {
            Drift::Left => -1,
            Drift::Right => 1,
        }
    }
}

/// Result of laying down the active row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommitOutcome {
    /// Play continues; the next row spawns at `spawn_row`.
    Advanced { spawn_row: usize },
    /// The working row passed the top of the board.
    Won,
    /// The spawn budget ran out.
    Lost,
}

/// The playing field of one game: the board, the drifting active row, the
/// settled blocks, and the spawn budget.
#[derive(Debug, Clone)]
pub struct GameField {
    board: Board,
    active: ActiveRow,
    inactive: Vec<BlockPos>,
    drift: Drift,
    /// Blocks remaining before defeat. The next spawn row's size and columns
    /// are derived from this value through the spawn table; the budget is the
    /// only stored counter.
    spawn_budget: usize,
}

impl GameField {
    /// `config` must already be validated.
    pub(crate) fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.cols, config.rows),
            active: ActiveRow::spawn(config.rows - 1, SPAWN_COUNT, config.cols),
            inactive: Vec::new(),
            drift: Drift::Right,
            spawn_budget: SPAWN_COUNT,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active(&self) -> &ActiveRow {
        &self.active
    }

    #[must_use]
    pub fn inactive(&self) -> &[BlockPos] {
        &self.inactive
    }

    #[must_use]
    pub fn spawn_budget(&self) -> usize {
        self.spawn_budget
    }

    /// Moves the active row one cell sideways, reversing at the board edges.
    ///
    /// When both edge conditions hold at once, the rightmost check takes
    /// precedence. A row spanning the whole board has nowhere to drift and
    /// stays put.
    pub(crate) fn drift_active(&mut self) {
        let Some((leftmost, rightmost)) = self.active.span() else {
            return;
        };
        let last_col = self.board.cols() - 1;
        if leftmost == 0 && rightmost == last_col {
            return;
        }
        if rightmost == last_col {
            self.drift = Drift::Left;
        } else if leftmost == 0 {
            self.drift = Drift::Right;
        }
        self.active.shift(self.drift.step());
    }

    /// Lays the active row down.
    ///
    /// On the bottommost row every block settles; elsewhere a block settles
    /// only if the cell below it is occupied, and is otherwise discarded,
    /// costing one spawn slot. Running out of slots loses the game and takes
    /// precedence over reaching the top.
    pub(crate) fn commit(&mut self) -> CommitOutcome {
        let row = self.active.row();
        let at_floor = row == self.board.rows() - 1;

        for col in self.active.take_cols() {
            let supported = at_floor || self.board.is_occupied(col, row + 1);
            if supported {
                self.board.occupy(col, row);
                self.inactive.push(BlockPos { col, row });
            } else {
                self.spawn_budget -= 1;
            }
        }
        // The next row always starts out drifting rightward.
        self.drift = Drift::Right;

        if self.spawn_budget == 0 {
            return CommitOutcome::Lost;
        }
        match row.checked_sub(1) {
            Some(spawn_row) => CommitOutcome::Advanced { spawn_row },
            None => CommitOutcome::Won,
        }
    }

    /// Applies the speed-up penalty: drops one spawn slot, but only while the
    /// budget still holds the value the ramp step expects.
    pub(crate) fn shed_spawn_slot_if(&mut self, budget_guard: usize) {
        if self.spawn_budget == budget_guard {
            self.spawn_budget -= 1;
        }
    }

    /// Replaces the active row with a fresh spawn at `row`, sized by the
    /// current budget.
    pub(crate) fn spawn_row(&mut self, row: usize) {
        self.active = ActiveRow::spawn(row, self.spawn_budget, self.board.cols());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> GameField {
        GameField::new(&GameConfig::default())
    }

    mod drifting {
        use super::*;

        #[test]
        fn test_initial_drift_is_rightward() {
            let mut field = field();
            field.drift_active();
            assert_eq!(field.active().cols(), &[3, 4, 5]);
        }

        #[test]
        fn test_reverses_at_the_right_edge_only() {
            let mut field = field();

            // 2,3,4 -> 3,4,5 -> 4,5,6 (rightmost hits column 6)
            field.drift_active();
            field.drift_active();
            assert_eq!(field.active().cols(), &[4, 5, 6]);

            field.drift_active();
            assert_eq!(field.active().cols(), &[3, 4, 5]);
        }

        #[test]
        #[expect(clippy::cast_possible_wrap)]
        fn test_reversal_happens_only_at_the_edges() {
            let mut field = field();
            let last_col = field.board().cols() - 1;

            let mut prev_cols = field.active().cols().to_vec();
            let mut prev_step = 1_isize;
            for _ in 0..40 {
                field.drift_active();
                let cols = field.active().cols().to_vec();
                let step = cols[0] as isize - prev_cols[0] as isize;
                assert!(step == 1 || step == -1);
                if step != prev_step {
                    // A flip is only legal when the previous position
                    // touched an edge.
                    assert!(prev_cols[0] == 0 || *prev_cols.last().unwrap() == last_col);
                }
                assert!(*cols.last().unwrap() <= last_col);
                prev_cols = cols;
                prev_step = step;
            }
        }

        #[test]
        fn test_single_block_bounces_between_both_edges() {
            let mut field = field();
            field.shed_spawn_slot_if(3);
            field.shed_spawn_slot_if(2);
            field.spawn_row(9);
            assert_eq!(field.active().cols(), &[4]);

            let mut visited = Vec::new();
            for _ in 0..12 {
                field.drift_active();
                visited.push(field.active().cols()[0]);
            }
            // 4 -> 5 -> 6 -> bounce -> 5 .. 0 -> bounce -> 1
            assert_eq!(visited, vec![5, 6, 5, 4, 3, 2, 1, 0, 1, 2, 3, 4]);
        }

        #[test]
        fn test_full_width_row_stays_put() {
            let config = GameConfig {
                cols: 3,
                ..GameConfig::default()
            };
            let mut field = GameField::new(&config);
            assert_eq!(field.active().cols(), &[0, 1, 2]);

            field.drift_active();
            assert_eq!(field.active().cols(), &[0, 1, 2]);
        }
    }

    mod committing {
        use super::*;

        #[test]
        fn test_floor_commit_settles_every_block() {
            let mut field = field();

            let outcome = field.commit();

            assert_eq!(outcome, CommitOutcome::Advanced { spawn_row: 9 });
            assert_eq!(field.spawn_budget(), 3);
            assert_eq!(field.inactive().len(), 3);
            for col in [2, 3, 4] {
                assert!(field.board().is_occupied(col, 10));
            }
        }

        #[test]
        fn test_unsupported_blocks_are_discarded() {
            let mut field = field();
            field.commit();
            field.spawn_row(9);

            // Drift one cell right: 3,4 are above settled blocks, 5 is not.
            field.drift_active();
            let outcome = field.commit();

            assert_eq!(outcome, CommitOutcome::Advanced { spawn_row: 8 });
            assert_eq!(field.spawn_budget(), 2);
            assert!(field.board().is_occupied(3, 9));
            assert!(field.board().is_occupied(4, 9));
            assert!(!field.board().is_occupied(5, 9));
            assert_eq!(field.inactive().len(), 5);
        }

        #[test]
        fn test_each_miss_costs_one_spawn_slot() {
            let mut field = field();
            field.commit();
            field.spawn_row(9);

            for _ in 0..2 {
                field.drift_active();
            }
            assert_eq!(field.active().cols(), &[4, 5, 6]);

            // Columns 5 and 6 are unsupported; 4 is supported.
            let outcome = field.commit();
            assert_eq!(outcome, CommitOutcome::Advanced { spawn_row: 8 });
            assert_eq!(field.spawn_budget(), 1);
        }

        #[test]
        fn test_budget_zero_is_a_loss() {
            let mut field = field();
            field.commit();
            field.spawn_row(9);
            field.drift_active();
            field.drift_active();
            field.commit(); // budget 3 -> 1, survivor at column 4
            field.spawn_row(8);
            assert_eq!(field.active().cols(), &[4]);

            // Move the single block off its support and drop it.
            field.drift_active();
            assert_eq!(field.active().cols(), &[5]);
            let outcome = field.commit();

            assert_eq!(outcome, CommitOutcome::Lost);
            assert_eq!(field.spawn_budget(), 0);
        }

        #[test]
        fn test_committing_the_top_row_wins() {
            let config = GameConfig {
                rows: 2,
                ..GameConfig::default()
            };
            let mut field = GameField::new(&config);

            assert_eq!(field.commit(), CommitOutcome::Advanced { spawn_row: 0 });
            field.spawn_row(0);
            assert_eq!(field.commit(), CommitOutcome::Won);
            assert_eq!(field.inactive().len(), 6);
        }

        #[test]
        fn test_drift_resets_rightward_after_a_commit() {
            let mut field = field();

            // Put the row against the right wall so the drift is leftward.
            field.drift_active();
            field.drift_active();
            assert_eq!(field.active().cols(), &[4, 5, 6]);
            field.drift_active();
            assert_eq!(field.active().cols(), &[3, 4, 5]);

            field.commit();
            field.spawn_row(9);
            field.drift_active();
            assert_eq!(field.active().cols(), &[3, 4, 5]);
        }
    }

    mod budget {
        use super::*;

        #[test]
        fn test_shed_spawn_slot_honors_the_guard() {
            let mut field = field();
            field.shed_spawn_slot_if(3);
            assert_eq!(field.spawn_budget(), 2);

            // Guard mismatch: nothing happens.
            field.shed_spawn_slot_if(3);
            assert_eq!(field.spawn_budget(), 2);
        }

        #[test]
        fn test_spawned_row_size_follows_the_budget() {
            let mut field = field();
            field.commit();
            field.shed_spawn_slot_if(3);
            field.spawn_row(9);
            assert_eq!(field.active().cols(), &[3, 4]);

            field.commit();
            field.shed_spawn_slot_if(2);
            field.spawn_row(8);
            assert_eq!(field.active().cols(), &[4]);
        }
    }
}
