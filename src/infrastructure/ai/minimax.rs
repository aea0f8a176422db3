use crate::domain::board::Board;
use crate::domain::coordinate::Coordinate;
use crate::domain::models::{GameResult, Player};
use crate::domain::rules::Rules;
use crate::domain::services::PlayerStrategy;
use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};

const WIN_SCORE: i32 = 10;

#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_searched: AtomicUsize,
}

/// Exhaustive minimax over the full game tree. Always plays perfectly; the
/// depth term in the score makes it prefer the fastest win and the slowest
/// loss.
pub struct MinimaxBot {
    name: String,
    pub stats: SearchStats,
}

impl MinimaxBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: SearchStats::default(),
        }
    }

    /// Returns the optimal placement for `player`.
    ///
    /// Precondition: the board is in progress with at least one empty cell.
    /// Calling this on a finished board is a turn-management bug upstream,
    /// so it fails fast instead of returning a sentinel.
    ///
    /// Ties are broken by row-major scan order, so the result is stable
    /// across invocations.
    pub fn best_move(&self, board: &Board, player: Player) -> Coordinate {
        assert!(
            board.check_status() == GameResult::InProgress,
            "best_move called on a finished game"
        );

        self.stats.nodes_searched.store(0, Ordering::Relaxed);

        let mut scratch = board.clone();
        let mut best_score = i32::MIN;
        let mut best: Option<Coordinate> = None;

        for mv in Rules::legal_moves(board) {
            scratch.place(mv.row, mv.col, player);
            let score = self.minimax_value(&mut scratch, player, 0, false);
            scratch.clear(mv.row, mv.col);

            if score > best_score {
                best_score = score;
                best = Some(mv);
            }
        }

        let chosen = best.expect("an in-progress board has at least one legal move");
        debug!(
            "minimax: {} plays {:?} (score {}, {} nodes)",
            player,
            chosen,
            best_score,
            self.stats.nodes_searched.load(Ordering::Relaxed)
        );
        chosen
    }

    /// Scores a position from the point of view of the searching side `me`.
    /// Every hypothetical placement is undone before returning, so the board
    /// reference is unchanged net of the call.
    fn minimax_value(&self, board: &mut Board, me: Player, depth: i32, maximizing: bool) -> i32 {
        self.stats.nodes_searched.fetch_add(1, Ordering::Relaxed);

        if let Some(winner) = board.winner() {
            return if winner == me {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
        if board.is_full() {
            return 0;
        }

        let to_place = if maximizing { me } else { me.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in Rules::legal_moves(board) {
            board.place(mv.row, mv.col, to_place);
            let score = self.minimax_value(board, me, depth + 1, !maximizing);
            board.clear(mv.row, mv.col);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

impl PlayerStrategy for MinimaxBot {
    fn get_move(&mut self, board: &Board, player: Player) -> Option<Coordinate> {
        Some(self.best_move(board, player))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
