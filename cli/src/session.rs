use std::io::{self, BufRead, Write};

use engine::MoveError;
use engine::connect_four::GameController;

use crate::render::{describe_status, render_board};

const HELP: &str = "Type a column number to drop a piece, 'restart' to start over, 'quit' to leave.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Drop(isize),
    Restart,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "r" | "restart" => Ok(Command::Restart),
        "h" | "help" | "?" => Ok(Command::Help),
        other => other
            .parse::<isize>()
            .map(Command::Drop)
            .map_err(|_| format!("Unrecognized input: {}", trimmed)),
    }
}

fn show<W: Write>(game: &GameController, output: &mut W) -> io::Result<()> {
    write!(output, "{}", render_board(game))?;
    writeln!(output, "{}", describe_status(game))
}

fn apply_drop<W: Write>(game: &mut GameController, column: isize, output: &mut W) -> io::Result<bool> {
    match game.drop_piece(column) {
        Ok(_) => Ok(true),
        Err(MoveError::ColumnFull { column }) => {
            writeln!(output, "Column {} is full, pick another one", column)?;
            Ok(false)
        }
        Err(MoveError::GameAlreadyFinished) => {
            writeln!(output, "The game is over. Type 'restart' to play again")?;
            Ok(false)
        }
        Err(e) => {
            writeln!(output, "Move rejected: {}", e)?;
            Ok(false)
        }
    }
}

/// Reads commands line by line until `quit` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    game: &mut GameController,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{}", HELP)?;
    show(game, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(Command::Restart) => {
                game.restart();
                show(game, output)?;
            }
            Ok(Command::Drop(column)) => {
                if apply_drop(game, column, output)? {
                    show(game, output)?;
                }
            }
            Err(message) => writeln!(output, "{}", message)?,
        }
    }
    Ok(())
}

/// Plays `columns` in order, reporting rejected ones, then prints the final board.
pub fn run_scripted<W: Write>(
    game: &mut GameController,
    columns: &[isize],
    output: &mut W,
) -> io::Result<()> {
    for &column in columns {
        apply_drop(game, column, output)?;
    }
    show(game, output)
}
