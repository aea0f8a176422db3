use crate::domain::board::Board;
use crate::domain::coordinate::Coordinate;
use crate::domain::models::Player;

/// The seam between the game loop and a move source. Human input and the
/// minimax bot both live behind this.
pub trait PlayerStrategy {
    fn get_move(&mut self, board: &Board, player: Player) -> Option<Coordinate>;

    /// Name used by the interface when announcing turns and results.
    fn name(&self) -> &str;
}
