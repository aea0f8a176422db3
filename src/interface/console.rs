use crate::application::game_service::{GameError, GameService};
use crate::config::AppConfig;
use crate::domain::board::Board;
use crate::domain::models::GameResult;
use crate::domain::services::PlayerStrategy;
use crate::infrastructure::ai::MinimaxBot;
use crate::infrastructure::console::HumanConsolePlayer;
use crate::infrastructure::display::render_board;
use crate::infrastructure::persistence::StatsStore;
use log::error;
use std::io::{self, BufRead, Write};

pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn run(config: &AppConfig) {
        let mut stats = StatsStore::load(&config.stats.path);

        println!();
        println!("========================================");
        println!("   WELCOME TO TIC TAC TOE");
        println!("========================================");

        loop {
            // The stdin lock must not be held across play_game; the human
            // strategy reads stdin itself.
            let selection = Self::main_menu(&mut io::stdin().lock(), &stats);

            match selection {
                Some((player_x, player_o)) => {
                    let mut service = GameService::new(Board::new(), player_x, player_o);
                    loop {
                        Self::play_game(&mut service, &mut stats, config);
                        let again = Self::prompt_yes_no(
                            &mut io::stdin().lock(),
                            "\nPlay again? (y/n): ",
                        );
                        if !again {
                            break;
                        }
                        service.reset();
                    }
                }
                None => {
                    Self::print_stats(&stats);
                    println!("Thanks for playing!");
                    return;
                }
            }
        }
    }

    /// Returns the (X, O) strategies for a new game, or `None` on exit.
    /// Viewing statistics loops back to the menu. A closed input stream
    /// counts as exit so the loop cannot spin on an empty prompt.
    fn main_menu(
        input: &mut impl BufRead,
        stats: &StatsStore,
    ) -> Option<(Box<dyn PlayerStrategy>, Box<dyn PlayerStrategy>)> {
        loop {
            println!();
            println!("=== TIC TAC TOE SETUP ===");
            println!("1. Player vs Player");
            println!("2. Player vs AI");
            println!("3. View Statistics");
            println!("4. Exit");

            let choice = Self::prompt(input, "\nSelect option (1-4): ")?;
            match choice.as_str() {
                "1" => {
                    let name1 = Self::prompt_name(input, "Player 1 name: ", "Player 1")?;
                    let name2 = Self::prompt_name(input, "Player 2 name: ", "Player 2")?;
                    return Some((
                        Box::new(HumanConsolePlayer::new(name1)),
                        Box::new(HumanConsolePlayer::new(name2)),
                    ));
                }
                "2" => {
                    let name = Self::prompt_name(input, "Your name: ", "Player")?;
                    return Some((
                        Box::new(HumanConsolePlayer::new(name)),
                        Box::new(MinimaxBot::new("AI")),
                    ));
                }
                "3" => Self::print_stats(stats),
                "4" => return None,
                _ => println!("Invalid choice!"),
            }
        }
    }

    fn play_game(service: &mut GameService<'_>, stats: &mut StatsStore, config: &AppConfig) {
        loop {
            Self::show_board(service.board(), config);

            println!("{}'s turn ({})", service.current_player_name(), service.turn());

            match service.perform_next_move() {
                Ok(GameResult::InProgress) => {}
                Ok(result) => {
                    Self::show_board(service.board(), config);
                    match result {
                        GameResult::Win(player) => {
                            println!("{} WINS!", service.player_name(player));
                        }
                        GameResult::Draw => println!("It's a DRAW!"),
                        GameResult::InProgress => unreachable!(),
                    }
                    if let Err(e) = stats.record(result) {
                        error!("failed to save statistics: {}", e);
                    }
                    return;
                }
                Err(GameError::NoMove) => {
                    // Stdin closed mid-game; nothing to record.
                    println!("\nGame interrupted!");
                    return;
                }
                Err(e) => println!("Invalid move! Try again. ({})", e),
            }
        }
    }

    fn show_board(board: &Board, config: &AppConfig) {
        if config.ui.clear_screen {
            print!("\x1b[2J\x1b[H");
        }
        println!("\n   TIC TAC TOE\n");
        println!("{}", render_board(board));
    }

    fn print_stats(stats: &StatsStore) {
        let s = stats.stats();
        println!();
        println!("=== GAME STATISTICS ===");
        println!("Total Games: {}", s.games);
        println!("X Wins: {}", s.x_wins);
        println!("O Wins: {}", s.o_wins);
        println!("Draws: {}", s.draws);
        println!("========================");
    }

    /// Prints the message and reads one trimmed line. `None` means the
    /// input stream is closed (end of input), which callers treat as exit.
    fn prompt(input: &mut impl BufRead, message: &str) -> Option<String> {
        print!("{}", message);
        io::stdout().flush().ok();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn prompt_name(input: &mut impl BufRead, message: &str, default: &str) -> Option<String> {
        let name = Self::prompt(input, message)?;
        if name.is_empty() {
            Some(default.to_string())
        } else {
            Some(name)
        }
    }

    fn prompt_yes_no(input: &mut impl BufRead, message: &str) -> bool {
        Self::prompt(input, message)
            .map(|answer| answer.eq_ignore_ascii_case("y"))
            .unwrap_or(false)
    }
}
