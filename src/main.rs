//! Contexto - CLI
//!
//! Semantic word-guessing game with an online ranking backend and an offline
//! demo fallback.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contexto::{
    commands::{run_give_up, run_guess, run_hint, run_play, run_status},
    core::{DEFAULT_COINS, DEFAULT_LEVEL},
    engine::{Bootstrap, Game, select_mode},
    output::print_mode_banner,
    resolver::{DemoResolver, OnlineResolver},
    storage::{FileSlot, ProgressStore, default_progress_path},
    wordlists::{WordList, demo_word_list, loader::load_from_file},
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "contexto",
    about = "Guess the secret word by meaning: every guess is ranked by closeness, #1 wins",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the ranking backend
    #[arg(
        long,
        global = true,
        env = "CONTEXTO_API_BASE",
        default_value = "http://127.0.0.1:8000/api"
    )]
    api_base: String,

    /// Puzzle level
    #[arg(short, long, global = true, default_value_t = DEFAULT_LEVEL)]
    level: u32,

    /// Puzzle date (YYYY-MM-DD, default: today)
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Progress file (default: <data dir>/contexto/progress.json)
    #[arg(long, global = true, env = "CONTEXTO_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Starting coin balance when there is no saved progress
    #[arg(long, global = true, default_value_t = DEFAULT_COINS)]
    coins: u32,

    /// Skip the backend and play in demo mode
    #[arg(long, global = true)]
    offline: bool,

    /// Word list for demo mode, one word per line (default: bundled list)
    #[arg(long, global = true)]
    demo_words: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Submit a single guess
    Guess {
        /// The word to guess
        word: String,
    },

    /// Spend a hint (20 coins)
    Hint,

    /// Reveal the secret word and end the puzzle
    GiveUp,

    /// Show the saved board
    Status,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "contexto=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the demo ranking list: bundled, or from `path`
fn load_demo_words(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load demo words from {}", path.display())),
        None => Ok(demo_word_list()),
    }
}

async fn bootstrap(cli: &Cli) -> Result<Bootstrap> {
    let fallback = DemoResolver::new(load_demo_words(cli.demo_words.as_deref())?)?;

    if cli.offline {
        info!("Offline flag set, using demo mode");
        return Ok(Bootstrap::demo(fallback));
    }

    let backend = OnlineResolver::new(&cli.api_base);
    Ok(select_mode(backend, fallback).await)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let bootstrap = bootstrap(&cli).await?;

    let state_file = cli
        .state_file
        .clone()
        .or_else(default_progress_path)
        .context("no data directory found; pass --state-file")?;
    debug!(path = %state_file.display(), "Using progress file");

    let mut game = Game::new(
        bootstrap,
        ProgressStore::new(FileSlot::new(state_file)),
        cli.coins,
    );
    game.start(cli.level, cli.date.as_deref());

    print_mode_banner(game.mode(), game.known_words().len());

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&mut game).await,
        Commands::Guess { word } => run_guess(&mut game, &word).await.map(drop),
        Commands::Hint => run_hint(&mut game).await.map(drop),
        Commands::GiveUp => run_give_up(&mut game).await.map(drop),
        Commands::Status => {
            run_status(&game);
            Ok(())
        }
    }
}
