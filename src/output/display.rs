//! Display functions for game state and results

use super::formatters::{Closeness, proximity_bar};
use crate::core::{Guess, Mode, Session};
use crate::engine::GuessOutcome;
use colored::{ColoredString, Colorize};

const BAR_WIDTH: usize = 24;

fn colorize_band(text: &str, position: u32) -> ColoredString {
    match Closeness::from_position(position) {
        Closeness::Close => text.green(),
        Closeness::Near => text.yellow(),
        Closeness::Far => text.red(),
    }
}

/// One board row: word, proximity bar, position
#[must_use]
pub fn format_guess_row(guess: &Guess, recent: bool) -> String {
    let word = format!("{:<16}", guess.word());
    let word = if recent {
        word.bright_white().bold()
    } else {
        word.normal()
    };
    let bar = colorize_band(&proximity_bar(guess.position(), BAR_WIDTH), guess.position());
    let marker = if guess.is_win() { " 🎯" } else { "" };

    format!("{word} {bar} {:>5}{marker}", guess.position())
}

/// Print the mode banner shown once at startup
pub fn print_mode_banner(mode: Mode, known_words: usize) {
    match mode {
        Mode::Online => println!(
            "{} {}",
            "●".green(),
            format!("Online: ranking backend connected ({known_words} words)").bright_black()
        ),
        Mode::Demo => println!(
            "{} {}",
            "●".yellow(),
            format!("Demo mode: backend unreachable, ranks are approximated from {known_words} words")
                .bright_black()
        ),
    }
}

/// Header line: level, date, coins, hint badge and best rank so far
#[must_use]
pub fn format_status(session: &Session) -> String {
    let best = session.best_position().map_or_else(String::new, |position| {
        format!("   🎯 {}", colorize_band(&format!("#{position}"), position))
    });
    format!(
        "{} {}   {}   💰 {}   💡 {}{best}",
        "CONTEXTO".bright_cyan().bold(),
        format!("Рівень {}", session.level()).bright_yellow(),
        session.seed_date().to_string().bright_black(),
        session.coins().to_string().bright_yellow().bold(),
        session.hints_remaining()
    )
}

/// Print the header line framed by rules
pub fn print_status(session: &Session) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", format_status(session));
    println!("{}", "─".repeat(60).cyan());
}

/// Print the last guess, then every guess ordered by closeness
pub fn print_board(session: &Session) {
    let Some(last) = session.last_guess() else {
        println!("  {}", "No guesses yet.".bright_black());
        return;
    };

    println!("  {}", format_guess_row(last, true));
    println!();

    let ranked = session.ranked_guesses();
    for guess in ranked {
        let recent = std::ptr::eq(guess, last);
        println!("  {}", format_guess_row(guess, recent));
    }
    println!(
        "\n  {} guesses",
        session.guesses().len().to_string().bright_cyan()
    );
}

/// Print what happened to a guess or hint
pub fn print_outcome(outcome: &GuessOutcome, session: &Session) {
    match outcome {
        GuessOutcome::Ignored if session.is_ended() => {
            println!("{}", "This puzzle is finished. Start another one.".bright_black());
        }
        GuessOutcome::Ignored => {}
        GuessOutcome::Recorded(guess) => {
            println!("  {}", format_guess_row(guess, true));
        }
        GuessOutcome::Won(guess) => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                format!("    🎉  {}  🎉", guess.word().to_uppercase())
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "\n  Found in {} {}, +50 coins ({} total)",
                session.guesses().len().to_string().bright_cyan().bold(),
                if session.guesses().len() == 1 {
                    "guess"
                } else {
                    "guesses"
                },
                session.coins().to_string().bright_yellow()
            );
        }
    }
}

/// Print the revealed secret after giving up
pub fn print_reveal(secret: &str) {
    println!(
        "\n  {} {}\n",
        "Secret word:".bright_white(),
        secret.to_uppercase().bright_yellow().bold()
    );
}

/// Print a rejection reported by the ranking backend
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message.red());
}
