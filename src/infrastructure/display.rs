use crate::domain::board::{Board, SIDE};
use crate::domain::models::Player;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_X: &str = "\x1b[37m";
const COLOR_O: &str = "\x1b[31m";
const COLOR_DIM: &str = "\x1b[90m";

/// Renders the grid with row/column indices so moves can be entered as
/// "row,col" without counting cells.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("     0   1   2\n");
    for row in 0..SIDE {
        out.push_str(&format!("  {}  ", row));
        for col in 0..SIDE {
            let cell = match board.get(row, col) {
                Some(Player::X) => format!("{}X{}", COLOR_X, COLOR_RESET),
                Some(Player::O) => format!("{}O{}", COLOR_O, COLOR_RESET),
                None => format!("{}.{}", COLOR_DIM, COLOR_RESET),
            };
            out.push_str(&cell);
            if col < SIDE - 1 {
                out.push_str(&format!(" {}|{} ", COLOR_DIM, COLOR_RESET));
            }
        }
        out.push('\n');
        if row < SIDE - 1 {
            out.push_str(&format!("    {}-----------{}\n", COLOR_DIM, COLOR_RESET));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match c {
                '\x1b' => in_escape = true,
                'm' if in_escape => in_escape = false,
                _ if !in_escape => out.push(c),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn renders_symbols_at_their_cells() {
        let mut board = Board::new();
        board.place(0, 0, Player::X);
        board.place(1, 1, Player::O);

        let plain = strip_ansi(&render_board(&board));
        let lines: Vec<&str> = plain.lines().collect();

        assert_eq!(lines[0], "     0   1   2");
        assert_eq!(lines[1], "  0  X | . | .");
        assert_eq!(lines[3], "  1  . | O | .");
    }
}
