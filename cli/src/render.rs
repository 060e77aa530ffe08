use engine::PlayerId;
use engine::connect_four::{Cell, GameController, GameStatus, Position};

fn symbol(cell: Cell, winning: bool) -> char {
    match (cell, winning) {
        (Cell::Empty, _) => '.',
        (Cell::OccupiedBy(PlayerId::One), false) => 'x',
        (Cell::OccupiedBy(PlayerId::Two), false) => 'o',
        (Cell::OccupiedBy(PlayerId::One), true) => 'X',
        (Cell::OccupiedBy(PlayerId::Two), true) => 'O',
    }
}

/// Plain-text board with column numbers on top. Cells of a winning run are upper-case.
pub fn render_board(game: &GameController) -> String {
    let snapshot = game.board_snapshot();
    let line = match game.status() {
        GameStatus::Won { line, .. } => Some(line),
        _ => None,
    };

    let mut out = String::new();
    for x in 0..snapshot.width() {
        out.push_str(&format!("{:>3}", x));
    }
    out.push('\n');

    for (y, row) in snapshot.rows().iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let winning = line.is_some_and(|l| l.contains(Position::new(y, x)));
            out.push_str(&format!("{:>3}", symbol(cell, winning)));
        }
        out.push('\n');
    }
    out
}

pub fn describe_status(game: &GameController) -> String {
    match game.status() {
        GameStatus::InProgress(id) => {
            let player = game.player(id);
            format!(
                "{}'s turn ({}, {}). Pick a column 0-{}",
                player.name,
                player.color,
                symbol(Cell::OccupiedBy(id), false),
                game.board().width() - 1
            )
        }
        GameStatus::Won { winner, .. } => format!("{} wins!", game.player(winner).name),
        GameStatus::Tied => "Tie!".to_string(),
    }
}
