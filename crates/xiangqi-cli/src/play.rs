//! Interactive game loop: a human against the engine on stdin/stdout.

use crate::report::status_line;
use std::io::{BufRead, Write};
use xiangqi_core::Color;
use xiangqi_engine::{Game, MoveOutcome};

const HELP: &str = "\
Enter moves as file+rank pairs, e.g. h2e2 (red cannon to the center).
Commands:
  moves   list legal moves
  board   show the board
  reset   start a new game
  quit    leave";

/// Settings for an interactive session.
#[derive(Debug, Clone, Copy)]
pub struct PlaySettings {
    /// Search depth of the engine.
    pub depth: u32,
    /// The side the human plays.
    pub human: Color,
}

/// Runs an interactive game until the human quits or input ends.
pub fn run<R: BufRead, W: Write>(
    mut game: Game,
    input: R,
    out: &mut W,
    settings: PlaySettings,
) -> anyhow::Result<()> {
    writeln!(
        out,
        "You play {}. The engine searches {} plies. Type 'help' for commands.",
        settings.human, settings.depth
    )?;
    writeln!(out, "{}", game.board())?;

    let mut lines = input.lines();
    loop {
        if !game.is_game_over() && game.side_to_move() != settings.human {
            engine_turn(&mut game, out, settings.depth)?;
            continue;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(out, "{}", HELP)?,
            "board" => writeln!(out, "{}", game.board())?,
            "moves" => {
                let moves: Vec<String> = game
                    .legal_moves()
                    .as_slice()
                    .iter()
                    .map(|m| m.to_coord())
                    .collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            "reset" => {
                game.reset();
                tracing::info!("game reset");
                writeln!(out, "{}", game.board())?;
            }
            text if game.is_game_over() => {
                tracing::debug!(input = text, "input after game over");
                writeln!(
                    out,
                    "The game is over. Type 'reset' to play again or 'quit' to leave."
                )?;
            }
            text => match game.attempt_move_coord(text) {
                Ok(outcome) => report(&game, out, &outcome)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
        }
    }
    Ok(())
}

fn engine_turn<W: Write>(game: &mut Game, out: &mut W, depth: u32) -> anyhow::Result<()> {
    match game.play_ai_move(depth)? {
        Some(outcome) => {
            writeln!(out, "Engine plays {}", outcome.mv)?;
            report(game, out, &outcome)
        }
        None => {
            // Unreachable while the game is running: a side without moves ends it.
            writeln!(out, "The engine has no move.")?;
            Ok(())
        }
    }
}

fn report<W: Write>(game: &Game, out: &mut W, outcome: &MoveOutcome) -> anyhow::Result<()> {
    writeln!(out, "{}", game.board())?;
    if let Some(captured) = outcome.captured {
        writeln!(out, "{} {} captured.", captured.color, captured.piece)?;
    }
    if let Some(line) = status_line(game) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
