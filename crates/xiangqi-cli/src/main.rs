//! Xiangqi terminal front end.
//!
//! Play against the search engine, ask it for a move in a given position,
//! check the move generator with perft, or query the status of a position.

mod config;
mod play;
mod report;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::{Config, Difficulty, Side};
use play::PlaySettings;
use report::{BestMoveReport, StatusReport};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use xiangqi_core::{Color, Layout};
use xiangqi_engine::movegen::perft::perft_divide;
use xiangqi_engine::{perft, Game, Searcher};

#[derive(Parser)]
#[command(name = "xiangqi")]
#[command(about = "Play xiangqi against an alpha-beta search engine")]
#[command(version)]
struct Cli {
    /// Path to the configuration file (default: ./xiangqi.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play {
        /// Engine strength
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,
        /// Search depth in plies (overrides difficulty)
        #[arg(long)]
        depth: Option<u32>,
        /// The side you play
        #[arg(long, value_enum)]
        side: Option<Side>,
        /// Start from this layout instead of the initial position
        #[arg(long)]
        layout: Option<String>,
    },
    /// Print the engine's move for the side to move
    Bestmove {
        /// Position in layout notation (default: initial position)
        #[arg(long)]
        layout: Option<String>,
        /// Engine strength
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,
        /// Search depth in plies (overrides difficulty)
        #[arg(long)]
        depth: Option<u32>,
        /// Emit a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        /// Position in layout notation (default: initial position)
        #[arg(long)]
        layout: Option<String>,
        /// Depth in plies
        #[arg(short, long)]
        depth: u32,
        /// Show the count below each root move
        #[arg(long)]
        divide: bool,
    },
    /// Print the status of the side to move
    Status {
        /// Position in layout notation (default: initial position)
        #[arg(long)]
        layout: Option<String>,
        /// Emit a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Play {
            difficulty,
            depth,
            side,
            layout,
        } => {
            let game = load_game(layout.as_deref())?;
            let settings = PlaySettings {
                depth: config.resolve_depth(depth, difficulty),
                human: Color::from(side.unwrap_or(config.human_side)),
            };
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            play::run(game, stdin.lock(), &mut stdout, settings)
        }
        Commands::Bestmove {
            layout,
            difficulty,
            depth,
            json,
        } => {
            let game = load_game(layout.as_deref())?;
            let depth = config.resolve_depth(depth, difficulty);
            bestmove(&game, depth, json)
        }
        Commands::Perft {
            layout,
            depth,
            divide,
        } => {
            let game = load_game(layout.as_deref())?;
            run_perft(&game, depth, divide);
            Ok(())
        }
        Commands::Status { layout, json } => {
            let game = load_game(layout.as_deref())?;
            status(&game, json)
        }
    }
}

/// Logs go to stderr so they never mix with command output. `RUST_LOG`
/// takes precedence over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_game(layout: Option<&str>) -> anyhow::Result<Game> {
    let Some(text) = layout else {
        return Ok(Game::new());
    };
    let layout = Layout::parse(text).with_context(|| format!("Invalid layout {:?}", text))?;
    Game::from_layout(&layout).with_context(|| format!("Unplayable layout {:?}", text))
}

fn bestmove(game: &Game, depth: u32, json: bool) -> anyhow::Result<()> {
    let mut board = game.board().clone();
    let result = Searcher::new().search(&mut board, game.side_to_move(), depth);

    if json {
        let report = BestMoveReport::new(game, &result);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match result.best_move {
        Some(m) => println!(
            "bestmove {} score {} depth {} nodes {}",
            m, result.score, result.depth, result.nodes
        ),
        None => println!("bestmove (none) {}", game.status()),
    }
    Ok(())
}

fn run_perft(game: &Game, depth: u32, divide: bool) {
    let mut board = game.board().clone();
    let side = game.side_to_move();
    let start = Instant::now();

    let nodes: u64 = if divide {
        let results = perft_divide(&mut board, side, depth);
        for (mv, count) in &results {
            println!("{}: {}", mv, count);
        }
        println!();
        results.iter().map(|(_, count)| count).sum()
    } else {
        perft(&mut board, side, depth)
    };

    let elapsed = start.elapsed();
    println!("Nodes: {}", nodes);
    tracing::info!(depth, nodes, elapsed_ms = elapsed.as_millis() as u64, "perft finished");
}

fn status(game: &Game, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&StatusReport::new(game))?);
        return Ok(());
    }

    println!("{}", game.board());
    println!(
        "{} to move: {} ({} legal moves)",
        game.side_to_move(),
        game.status(),
        game.legal_moves().len()
    );
    if let Some(result) = game.result() {
        println!("Result: {}", result);
    }
    Ok(())
}
