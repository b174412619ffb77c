//! One-shot commands: a single action against the saved puzzle

use crate::engine::{Game, GuessOutcome};
use crate::output::{print_board, print_outcome, print_reveal, print_status};
use crate::storage::StorageSlot;
use anyhow::{Result, bail};

/// Submit one guess and show the updated board
///
/// # Errors
///
/// Returns an error if the ranking backend rejects the word or cannot be reached.
pub async fn run_guess<S: StorageSlot>(game: &mut Game<S>, word: &str) -> Result<GuessOutcome> {
    let outcome = game.submit_guess(word).await?;
    print_outcome(&outcome, game.session());
    if !outcome.is_win() {
        print_status(game.session());
        print_board(game.session());
    }
    Ok(outcome)
}

/// Spend one hint and show the revealed word
///
/// # Errors
///
/// Returns an error if the ranking backend fails to produce a hint.
pub async fn run_hint<S: StorageSlot>(game: &mut Game<S>) -> Result<GuessOutcome> {
    let outcome = game.use_hint().await?;
    print_outcome(&outcome, game.session());
    print_status(game.session());
    Ok(outcome)
}

/// Give up and print the secret word
///
/// # Errors
///
/// Returns an error if the puzzle is already finished or the secret cannot be fetched.
pub async fn run_give_up<S: StorageSlot>(game: &mut Game<S>) -> Result<String> {
    let Some(secret) = game.give_up().await? else {
        bail!("puzzle {} is already finished", game.session().puzzle());
    };
    print_reveal(&secret);
    Ok(secret)
}

/// Show the saved board without changing anything
pub fn run_status<S: StorageSlot>(game: &Game<S>) {
    print_status(game.session());
    print_board(game.session());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Bootstrap;
    use crate::resolver::DemoResolver;
    use crate::storage::{MemorySlot, ProgressStore};
    use crate::wordlists::demo_word_list;

    fn game() -> Game<MemorySlot> {
        let resolver = DemoResolver::new(demo_word_list()).expect("bundled list is not empty");
        let mut game = Game::new(
            Bootstrap::demo(resolver),
            ProgressStore::new(MemorySlot::new()),
            650,
        );
        game.start(2, Some("2024-01-15"));
        game
    }

    #[tokio::test]
    async fn guess_records_and_saves() {
        colored::control::set_override(false);
        let mut game = game();

        let outcome = run_guess(&mut game, "вода").await.expect("demo never rejects");

        assert_eq!(outcome.guess().map(|g| g.position()), Some(1110));
        assert!(game.store().slot().read().expect("memory slot").is_some());
    }

    #[tokio::test]
    async fn give_up_twice_fails() {
        colored::control::set_override(false);
        let mut game = game();

        let secret = run_give_up(&mut game).await.expect("first give up");
        assert_eq!(secret, "великий");
        assert!(run_give_up(&mut game).await.is_err());
    }

    #[tokio::test]
    async fn hint_charges_coins() {
        colored::control::set_override(false);
        let mut game = game();

        let outcome = run_hint(&mut game).await.expect("demo hint");

        assert_eq!(outcome.guess().map(|g| g.word()), Some("книга"));
        assert_eq!(game.session().coins(), 630);
    }
}
