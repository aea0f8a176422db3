use crate::domain::board::Board;
use crate::domain::coordinate::Coordinate;
use crate::domain::models::Player;
use crate::domain::services::PlayerStrategy;
use std::io::{self, Write};

pub struct HumanConsolePlayer {
    name: String,
}

impl HumanConsolePlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// "row,col" with optional whitespace, e.g. "0,2" or "1, 1".
    fn parse_move(input: &str) -> Option<Coordinate> {
        let mut parts = input.trim().split(',');
        let row = parts.next()?.trim().parse::<usize>().ok()?;
        let col = parts.next()?.trim().parse::<usize>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Coordinate::new(row, col))
    }
}

impl PlayerStrategy for HumanConsolePlayer {
    /// Re-prompts until the input names an empty in-range cell. Malformed
    /// input is routine here, not an error path. Returns `None` only if
    /// stdin is closed.
    fn get_move(&mut self, board: &Board, player: Player) -> Option<Coordinate> {
        loop {
            print!("{} ({}), enter row,col (e.g. 0,1): ", self.name, player);
            io::stdout().flush().ok();

            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }

            match Self::parse_move(&input) {
                Some(mv) => {
                    if board.is_valid_placement(mv.row, mv.col) {
                        return Some(mv);
                    }
                    println!("Invalid move! Cell occupied or out of bounds.");
                }
                None => println!("Invalid format! Use: row,col (e.g. 0,1)"),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
