use crate::domain::board::Board;
use crate::domain::coordinate::Coordinate;
use crate::domain::models::{GameResult, Player};
use crate::domain::services::PlayerStrategy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,
    #[error("strategy produced no move")]
    NoMove,
    #[error("cell {0:?} is occupied or out of range")]
    InvalidMove(Coordinate),
}

/// Owns the board and the two strategies, and enforces turn discipline.
/// X always moves first.
pub struct GameService<'a> {
    board: Board,
    player_x: Box<dyn PlayerStrategy + 'a>,
    player_o: Box<dyn PlayerStrategy + 'a>,
    turn: Player,
}

impl<'a> GameService<'a> {
    pub fn new(
        board: Board,
        player_x: Box<dyn PlayerStrategy + 'a>,
        player_o: Box<dyn PlayerStrategy + 'a>,
    ) -> Self {
        GameService {
            board,
            player_x,
            player_o,
            turn: Player::X,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn current_player_name(&self) -> &str {
        match self.turn {
            Player::X => self.player_x.name(),
            Player::O => self.player_o.name(),
        }
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::X => self.player_x.name(),
            Player::O => self.player_o.name(),
        }
    }

    pub fn is_game_over(&self) -> Option<GameResult> {
        match self.board.check_status() {
            GameResult::InProgress => None,
            result => Some(result),
        }
    }

    /// Asks the side to move for a placement, applies it, and flips the
    /// turn. Returns the status after the move so the caller can detect the
    /// end of the game without re-querying.
    pub fn perform_next_move(&mut self) -> Result<GameResult, GameError> {
        if self.is_game_over().is_some() {
            return Err(GameError::GameOver);
        }

        let strategy = match self.turn {
            Player::X => &mut self.player_x,
            Player::O => &mut self.player_o,
        };

        let mv = strategy
            .get_move(&self.board, self.turn)
            .ok_or(GameError::NoMove)?;

        if !self.board.place(mv.row, mv.col, self.turn) {
            return Err(GameError::InvalidMove(mv));
        }

        self.turn = self.turn.opponent();
        Ok(self.board.check_status())
    }

    /// Clears the board for a rematch. X moves first again.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Player::X;
    }
}
