use noughts::domain::board::Board;
use noughts::domain::coordinate::Coordinate;
use noughts::domain::models::Player;
use noughts::infrastructure::ai::MinimaxBot;

fn board_from(rows: [[char; 3]; 3]) -> Board {
    let mut board = Board::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, &ch) in row.iter().enumerate() {
            match ch {
                'X' => assert!(board.place(r, c, Player::X)),
                'O' => assert!(board.place(r, c, Player::O)),
                _ => {}
            }
        }
    }
    board
}

#[test]
fn completes_own_winning_row() {
    // X at (0,0),(0,1); O at (1,0),(1,1). X to move must take (0,2).
    let board = board_from([['X', 'X', '.'], ['O', 'O', '.'], ['.', '.', '.']]);
    let bot = MinimaxBot::new("AI");

    assert_eq!(bot.best_move(&board, Player::X), Coordinate::new(0, 2));
}

#[test]
fn prefers_immediate_win_over_delayed_win() {
    // O can win on the middle column right now.
    let board = board_from([['X', 'O', 'X'], ['.', 'O', '.'], ['X', '.', '.']]);
    let bot = MinimaxBot::new("AI");

    assert_eq!(bot.best_move(&board, Player::O), Coordinate::new(2, 1));
}

#[test]
fn blocks_opponent_winning_line() {
    // X threatens (0,2); O has no win of its own and must block.
    let board = board_from([['X', 'X', '.'], ['.', 'O', '.'], ['.', '.', '.']]);
    let bot = MinimaxBot::new("AI");

    assert_eq!(bot.best_move(&board, Player::O), Coordinate::new(0, 2));
}

#[test]
fn never_returns_an_occupied_cell() {
    let positions = [
        [['.', '.', '.'], ['.', '.', '.'], ['.', '.', '.']],
        [['X', '.', '.'], ['.', '.', '.'], ['.', '.', '.']],
        [['X', 'O', '.'], ['.', '.', '.'], ['.', '.', '.']],
        [['X', 'O', 'X'], ['O', '.', '.'], ['.', '.', '.']],
        [['O', 'X', 'O'], ['X', 'O', 'X'], ['.', '.', 'X']],
        [['X', '.', 'O'], ['.', 'X', '.'], ['O', '.', '.']],
    ];
    let bot = MinimaxBot::new("AI");

    for rows in positions {
        let board = board_from(rows);
        for player in [Player::X, Player::O] {
            let mv = bot.best_move(&board, player);
            assert!(
                board.is_valid_placement(mv.row, mv.col),
                "{:?} returned for occupied or out-of-range cell on {:?}",
                mv,
                rows
            );
        }
    }
}

#[test]
fn leaves_the_board_untouched() {
    let board = board_from([['X', 'O', '.'], ['.', 'X', '.'], ['.', '.', '.']]);
    let snapshot = board.clone();
    let bot = MinimaxBot::new("AI");

    bot.best_move(&board, Player::O);

    assert_eq!(board, snapshot);
}

#[test]
fn repeated_searches_agree() {
    let board = board_from([['X', '.', '.'], ['.', 'O', '.'], ['.', '.', '.']]);
    let bot = MinimaxBot::new("AI");

    let first = bot.best_move(&board, Player::X);
    for _ in 0..5 {
        assert_eq!(bot.best_move(&board, Player::X), first);
    }
}

#[test]
fn node_counter_tracks_each_search_separately() {
    use std::sync::atomic::Ordering;

    let bot = MinimaxBot::new("AI");

    let late = board_from([['X', 'O', 'X'], ['O', 'O', 'X'], ['.', '.', '.']]);
    bot.best_move(&late, Player::X);
    let late_nodes = bot.stats.nodes_searched.load(Ordering::Relaxed);
    assert!(late_nodes > 0, "search should visit at least one node");

    let early = board_from([['X', '.', '.'], ['.', '.', '.'], ['.', '.', '.']]);
    bot.best_move(&early, Player::O);
    let early_nodes = bot.stats.nodes_searched.load(Ordering::Relaxed);
    assert!(
        early_nodes > late_nodes,
        "a wider position must visit more nodes ({} vs {})",
        early_nodes,
        late_nodes
    );

    // The counter restarts per search, so repeating the smaller one must
    // reproduce its count exactly.
    bot.best_move(&late, Player::X);
    assert_eq!(
        bot.stats.nodes_searched.load(Ordering::Relaxed),
        late_nodes
    );
}

#[test]
#[should_panic(expected = "finished game")]
fn panics_on_a_won_board() {
    let board = board_from([['X', 'X', 'X'], ['O', 'O', '.'], ['.', '.', '.']]);
    let bot = MinimaxBot::new("AI");
    bot.best_move(&board, Player::O);
}

#[test]
#[should_panic(expected = "finished game")]
fn panics_on_a_full_board() {
    let board = board_from([['X', 'O', 'X'], ['O', 'X', 'O'], ['O', 'X', 'O']]);
    let bot = MinimaxBot::new("AI");
    bot.best_move(&board, Player::X);
}
