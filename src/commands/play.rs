//! Interactive play mode
//!
//! Text-based game loop: every line is a guess unless it starts with `/`.

use crate::core::Mode;
use crate::engine::{Game, GuessOutcome};
use crate::output::{print_board, print_error, print_outcome, print_reveal, print_status};
use crate::storage::StorageSlot;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Guess(String),
    Hint,
    GiveUp,
    Board,
    Level(u32),
    Date(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl PlayCommand {
    /// Parse one line of input
    ///
    /// # Examples
    /// ```
    /// use contexto::commands::play::PlayCommand;
    ///
    /// assert_eq!(PlayCommand::parse("вода"), PlayCommand::Guess("вода".to_string()));
    /// assert_eq!(PlayCommand::parse("/hint"), PlayCommand::Hint);
    /// assert_eq!(PlayCommand::parse("/level 3"), PlayCommand::Level(3));
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(command) = line.strip_prefix('/') else {
            return Self::Guess(line.to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();

        match (name.as_str(), arg) {
            ("hint" | "h", None) => Self::Hint,
            ("giveup" | "give-up" | "reveal", None) => Self::GiveUp,
            ("board" | "b", None) => Self::Board,
            ("level" | "l", Some(level)) => level
                .parse()
                .map_or_else(|_| Self::Unknown(line.to_string()), Self::Level),
            ("date" | "d", Some(date)) => Self::Date(date.to_string()),
            ("help" | "?", None) => Self::Help,
            ("quit" | "q" | "exit", None) => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Run the interactive game loop until the player quits
///
/// Progress is saved after every change and once more on exit.
///
/// # Errors
///
/// Returns an error if reading player input fails.
pub async fn run_play<S: StorageSlot>(game: &mut Game<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Contexto - Interactive                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    print_status(game.session());
    print_board(game.session());

    loop {
        let Some(line) = get_user_input("Слово")? else {
            break;
        };

        match PlayCommand::parse(&line) {
            PlayCommand::Empty => {}
            PlayCommand::Guess(word) => {
                warn_if_unknown(game, &word);
                match game.submit_guess(&word).await {
                    Ok(outcome) => {
                        print_outcome(&outcome, game.session());
                        if outcome.is_win() {
                            println!("  Type /level or /date to play another puzzle.\n");
                        }
                    }
                    Err(e) => print_error(&e.to_string()),
                }
            }
            PlayCommand::Hint => match game.use_hint().await {
                Ok(GuessOutcome::Ignored) => {
                    print_outcome(&GuessOutcome::Ignored, game.session());
                }
                Ok(outcome) => {
                    println!("💡 Hint ({} left on the badge):", game.session().hints_remaining());
                    print_outcome(&outcome, game.session());
                }
                Err(e) => print_error(&e.to_string()),
            },
            PlayCommand::GiveUp => match game.give_up().await {
                Ok(Some(secret)) => {
                    print_reveal(&secret);
                    println!("  Type /level or /date to play another puzzle.\n");
                }
                Ok(None) => print_outcome(&GuessOutcome::Ignored, game.session()),
                Err(e) => print_error(&e.to_string()),
            },
            PlayCommand::Board => {
                print_status(game.session());
                print_board(game.session());
            }
            PlayCommand::Level(level) => {
                game.save();
                let date = game.session().seed_date().to_string();
                start_and_show(game, level, Some(date.as_str()));
            }
            PlayCommand::Date(date) => {
                game.save();
                let level = game.session().level();
                start_and_show(game, level, Some(date.as_str()));
            }
            PlayCommand::Help => print_help(),
            PlayCommand::Quit => break,
            PlayCommand::Unknown(text) => {
                println!("❌ Unknown command {text:?}. Type /help for commands.");
            }
        }
    }

    game.save();
    println!("\n👋 Progress saved. До зустрічі!\n");
    Ok(())
}

fn start_and_show<S: StorageSlot>(game: &mut Game<S>, level: u32, date: Option<&str>) {
    if game.start(level, date) {
        println!("🔄 Resumed saved progress.");
    } else {
        println!("🔄 New puzzle started.");
    }
    print_status(game.session());
    print_board(game.session());
}

/// Flag words missing from the backend's list; the backend still decides
fn warn_if_unknown<S: StorageSlot>(game: &Game<S>, word: &str) {
    let words = game.known_words();
    if game.mode() == Mode::Online && !words.is_empty() && !words.contains(word) {
        println!(
            "{}",
            format!("  ({word} is not in the downloaded word list)").bright_black()
        );
    }
}

fn print_help() {
    println!("Type a word and press Enter to guess. Position 1 is the secret word.");
    println!("Commands:");
    println!("  /hint            reveal a close word (costs 20 coins)");
    println!("  /giveup          reveal the secret word");
    println!("  /board           show all guesses by closeness");
    println!("  /level <N>       switch level");
    println!("  /date <Y-M-D>    play a previous day's puzzle (YYYY-MM-DD)");
    println!("  /quit            save and exit\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
