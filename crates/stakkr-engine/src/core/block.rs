use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// Number of blocks in a fresh spawn row, and the starting spawn budget.
pub const SPAWN_COUNT: usize = 3;

/// Column offsets around the board midpoint for each spawn size, indexed by
/// `size - 1`.
///
/// The table preserves the arcade game's asymmetric placement: each entry is
/// the *tail* of the three-slot priority list `[mid - 1, mid, mid + 1]`, so a
/// two-block row is the center-and-right pair and a single block sits in the
/// rightmost slot, not the center.
const SPAWN_OFFSETS: [&[isize]; SPAWN_COUNT] = [&[1], &[0, 1], &[-1, 0, 1]];

/// A single block position in grid-cell coordinates.
///
/// Row 0 is the topmost row; rows grow downward toward the spawn row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub col: usize,
    pub row: usize,
}

/// The row of blocks currently under player control.
///
/// All active blocks share one row; only their columns change as the row
/// drifts sideways. Columns are kept in ascending order, so the first entry
/// is the leftmost block and the last the rightmost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRow {
    row: usize,
    cols: ArrayVec<usize, SPAWN_COUNT>,
}

impl ActiveRow {
    /// Builds a fresh row of `size` blocks centered on `board_cols / 2`,
    /// placed according to [`SPAWN_OFFSETS`].
    pub(crate) fn spawn(row: usize, size: usize, board_cols: usize) -> Self {
        debug_assert!((1..=SPAWN_COUNT).contains(&size));
        let mid = board_cols / 2;
        let cols = SPAWN_OFFSETS[size - 1]
            .iter()
            .map(|&offset| {
                mid.checked_add_signed(offset)
                    .expect("spawn column must fit on a validated board")
            })
            .collect();
        Self { row, cols }
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Leftmost and rightmost occupied columns, if the row holds any blocks.
    #[must_use]
    pub fn span(&self) -> Option<(usize, usize)> {
        Some((*self.cols.first()?, *self.cols.last()?))
    }

    /// Shifts every block by one cell. `step` must keep all columns in range;
    /// the caller is responsible for reversing at the board edges first.
    pub(crate) fn shift(&mut self, step: isize) {
        for col in &mut self.cols {
            *col = col
                .checked_add_signed(step)
                .expect("drift must stay inside the board");
        }
    }

    pub(crate) fn take_cols(&mut self) -> ArrayVec<usize, SPAWN_COUNT> {
        std::mem::take(&mut self.cols)
    }

    pub fn positions(&self) -> impl Iterator<Item = BlockPos> + '_ {
        self.cols.iter().map(|&col| BlockPos {
            col,
            row: self.row,
        })
    }
}
