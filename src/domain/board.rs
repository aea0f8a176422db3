use crate::domain::models::{GameResult, Player};
use crate::domain::rules::Rules;

pub const SIDE: usize = 3;

/// The 3x3 grid. A cell is `None` when empty.
///
/// Board does not enforce the alternating-turn ratio between X and O; the
/// search explores hypothetical placements and restores them, so turn
/// discipline belongs to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Player>; SIDE]; SIDE],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[None; SIDE]; SIDE],
        }
    }

    /// Out-of-range coordinates return `None` rather than panicking.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if row < SIDE && col < SIDE {
            self.cells[row][col]
        } else {
            None
        }
    }

    /// In range and currently empty. Never panics on bad coordinates.
    pub fn is_valid_placement(&self, row: usize, col: usize) -> bool {
        row < SIDE && col < SIDE && self.cells[row][col].is_none()
    }

    /// Sets the cell iff the placement is valid; reports via the return
    /// value, never via an error. On `false` the board is unchanged.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        if self.is_valid_placement(row, col) {
            self.cells[row][col] = Some(player);
            true
        } else {
            false
        }
    }

    /// Empties one cell. The search uses this to undo a hypothetical
    /// placement while backtracking.
    pub fn clear(&mut self, row: usize, col: usize) {
        if row < SIDE && col < SIDE {
            self.cells[row][col] = None;
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn winner(&self) -> Option<Player> {
        Rules::winner(self)
    }

    pub fn check_status(&self) -> GameResult {
        if let Some(winner) = self.winner() {
            return GameResult::Win(winner);
        }
        if self.is_full() {
            return GameResult::Draw;
        }
        GameResult::InProgress
    }

    pub fn reset(&mut self) {
        self.cells = [[None; SIDE]; SIDE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
