//! Text and JSON reports for the one-shot subcommands.

use serde::Serialize;
use xiangqi_engine::{Game, GameResult, GameStatus, SearchResult};

/// JSON output of `bestmove`.
#[derive(Debug, Serialize)]
pub struct BestMoveReport {
    /// Position searched, in layout notation.
    pub layout: String,
    /// Side the move is for: "red" or "black".
    pub side: String,
    pub depth: u32,
    /// Chosen move, or null when the side has no legal move.
    pub best_move: Option<String>,
    pub score: i32,
    pub nodes: u64,
}

impl BestMoveReport {
    pub fn new(game: &Game, result: &SearchResult) -> Self {
        BestMoveReport {
            layout: game.to_layout().to_notation(),
            side: game.side_to_move().to_string().to_lowercase(),
            depth: result.depth,
            best_move: result.best_move.map(|m| m.to_coord()),
            score: result.score,
            nodes: result.nodes,
        }
    }
}

/// JSON output of `status`.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub layout: String,
    pub side: String,
    /// One of "in progress", "check", "checkmate", "stalemate".
    pub status: String,
    pub legal_moves: usize,
    /// "red wins", "black wins" or "draw" once the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl StatusReport {
    pub fn new(game: &Game) -> Self {
        StatusReport {
            layout: game.to_layout().to_notation(),
            side: game.side_to_move().to_string().to_lowercase(),
            status: game.status().to_string(),
            legal_moves: game.legal_moves().len(),
            result: game.result().map(|r| r.to_string()),
        }
    }
}

/// A human-readable line for the status of the side to move, if there is
/// anything to announce.
pub fn status_line(game: &Game) -> Option<String> {
    let side = game.side_to_move();
    match (game.status(), game.result()) {
        (GameStatus::Checkmate, Some(result)) => Some(format!("Checkmate! {}", announce(result))),
        (GameStatus::Stalemate, _) => Some("Stalemate. The game is drawn.".to_string()),
        (GameStatus::InCheck, _) => Some(format!("{} is in check.", side)),
        _ => None,
    }
}

fn announce(result: GameResult) -> String {
    match result.winner() {
        Some(color) => format!("{} wins.", color),
        None => "The game is drawn.".to_string(),
    }
}
