use crate::domain::board::{Board, SIDE};
use crate::domain::coordinate::Coordinate;
use crate::domain::models::Player;
use smallvec::SmallVec;

/// All 8 winning lines in a fixed order: rows, columns, main diagonal,
/// anti-diagonal. The order is part of the deterministic contract.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub struct Rules;

impl Rules {
    /// Returns the symbol holding a completed line, if any. In a valid game
    /// at most one side can have three-in-a-row, so the scan order cannot
    /// change the answer.
    pub fn winner(board: &Board) -> Option<Player> {
        for line in &LINES {
            let (r0, c0) = line[0];
            if let Some(first) = board.get(r0, c0) {
                if line[1..]
                    .iter()
                    .all(|&(r, c)| board.get(r, c) == Some(first))
                {
                    return Some(first);
                }
            }
        }
        None
    }

    /// Empty cells in row-major order. The search relies on this order for
    /// its stable tie-break.
    pub fn legal_moves(board: &Board) -> SmallVec<[Coordinate; 9]> {
        let mut moves = SmallVec::new();
        for row in 0..SIDE {
            for col in 0..SIDE {
                if board.is_valid_placement(row, col) {
                    moves.push(Coordinate::new(row, col));
                }
            }
        }
        moves
    }
}
