//! Online mode against an in-process ranking backend

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use contexto::{
    core::{Guess, Mode, Puzzle},
    engine::{Game, GuessOutcome, select_mode},
    resolver::{DemoResolver, OnlineResolver, ResolveError},
    storage::{MemorySlot, ProgressStore, StorageSlot},
    wordlists::demo_word_list,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

const SECRET: &str = "вогонь";
const DATE: &str = "2024-01-15";

#[derive(Debug, Deserialize)]
struct PuzzleBody {
    level: u32,
    seed_date: String,
}

#[derive(Debug, Deserialize)]
struct GuessBody {
    level: u32,
    seed_date: String,
    word: String,
}

fn rank(word: &str) -> Option<u32> {
    match word {
        "вогонь" => Some(1),
        "полум'я" => Some(3),
        "дим" => Some(42),
        "вода" => Some(57),
        "камінь" => Some(2100),
        _ => None,
    }
}

fn wrong_puzzle() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"detail": "wrong puzzle"})),
    )
        .into_response()
}

async fn guess(Json(body): Json<GuessBody>) -> Response {
    if body.level != 2 || body.seed_date != DATE {
        return wrong_puzzle();
    }
    match body.word.as_str() {
        "дивно" => {
            return Json(json!({"found": false, "error": "Немає в словнику"})).into_response();
        }
        "туман" => return Json(json!({"position": 5})).into_response(),
        "хмара" => return Json(json!({"normalized_word": "  ", "position": 9})).into_response(),
        _ => {}
    }
    match rank(&body.word) {
        Some(position) => {
            Json(json!({"normalized_word": body.word, "position": position})).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Слово не знайдено"})),
        )
            .into_response(),
    }
}

async fn hint(Json(body): Json<PuzzleBody>) -> Response {
    if body.level != 2 || body.seed_date != DATE {
        return wrong_puzzle();
    }
    Json(json!({"word": "Полум'я"})).into_response()
}

async fn reveal(Json(body): Json<PuzzleBody>) -> Response {
    if body.level != 2 || body.seed_date != DATE {
        return wrong_puzzle();
    }
    Json(json!({"word": SECRET})).into_response()
}

/// Health, word list and ranking, without hint or reveal routes
fn ranking_only() -> Router {
    Router::new()
        .route("/api/health", get(|| async { Json(json!({"status": "ok"})) }))
        .route(
            "/api/words",
            get(|| async { Json(json!({"words": ["вогонь", "полум'я", "дим", "вода", "камінь"]})) }),
        )
        .route("/api/guess", post(guess))
}

fn backend() -> Router {
    ranking_only()
        .route("/api/hint", post(hint))
        .route("/api/reveal", post(reveal))
}

/// Ranks guesses but fails every hint and reveal
fn failing_extras_backend() -> Router {
    ranking_only()
        .route(
            "/api/hint",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/reveal",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"detail": "Сервіс недоступний"})),
                )
            }),
        )
}

/// Serve `app` on an ephemeral port and return its API base URL
async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn fallback() -> DemoResolver {
    DemoResolver::new(demo_word_list()).unwrap()
}

async fn online_game() -> Game<MemorySlot> {
    online_game_on(backend()).await
}

async fn online_game_on(app: Router) -> Game<MemorySlot> {
    let base = spawn(app).await;
    let bootstrap = select_mode(OnlineResolver::new(&base), fallback()).await;
    assert_eq!(bootstrap.mode(), Mode::Online);

    let mut game = Game::new(bootstrap, ProgressStore::new(MemorySlot::new()), 650);
    game.start(2, Some(DATE));
    game
}

#[tokio::test]
async fn healthy_backend_selects_online_mode() {
    let base = spawn(backend()).await;

    let bootstrap = select_mode(OnlineResolver::new(&base), fallback()).await;

    assert_eq!(bootstrap.mode(), Mode::Online);
    assert_eq!(bootstrap.words().len(), 5);
    assert!(bootstrap.words().contains("Дим"));
}

#[tokio::test]
async fn failing_health_check_falls_back_to_demo() {
    let app = Router::new().route(
        "/api/health",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = spawn(app).await;

    let bootstrap = select_mode(OnlineResolver::new(&base), fallback()).await;

    assert_eq!(bootstrap.mode(), Mode::Demo);
    assert_eq!(bootstrap.words().len(), 70);
}

#[tokio::test]
async fn malformed_word_list_falls_back_to_demo() {
    let app = Router::new()
        .route("/api/health", get(|| async { "ok" }))
        .route("/api/words", get(|| async { Json(json!({"items": []})) }));
    let base = spawn(app).await;

    let bootstrap = select_mode(OnlineResolver::new(&base), fallback()).await;

    assert_eq!(bootstrap.mode(), Mode::Demo);
}

#[tokio::test]
async fn guesses_are_ranked_by_backend_and_saved() {
    let mut game = online_game().await;

    let outcome = game.submit_guess("  Вода ").await.unwrap();

    assert_eq!(
        outcome.guess().map(|g| (g.word(), g.position())),
        Some(("вода", 57))
    );
    assert_eq!(game.session().guesses().len(), 1);

    let saved = game.store().load(game.session().puzzle()).unwrap();
    assert_eq!(saved.mode, Mode::Online);
    assert_eq!(saved.guesses.len(), 1);
}

#[tokio::test]
async fn rejected_word_leaves_session_unchanged() {
    let mut game = online_game().await;
    game.submit_guess("дим").await.unwrap();

    let err = game.submit_guess("абракадабра").await.unwrap_err();
    assert!(matches!(err, ResolveError::Rejected(_)));
    assert_eq!(err.to_string(), "Слово не знайдено");

    let err = game.submit_guess("дивно").await.unwrap_err();
    assert_eq!(err.to_string(), "Немає в словнику");

    assert_eq!(game.session().guesses().len(), 1);
    assert_eq!(game.session().coins(), 650);
}

#[tokio::test]
async fn hint_is_ranked_recorded_and_charged() {
    let mut game = online_game().await;

    let outcome = game.use_hint().await.unwrap();

    assert_eq!(
        outcome.guess().map(|g| (g.word(), g.position())),
        Some(("полум'я", 3))
    );
    assert_eq!(game.session().hints_used(), 1);
    assert_eq!(game.session().coins(), 630);
}

#[tokio::test]
async fn winning_guess_ends_and_clears_progress() {
    let mut game = online_game().await;
    game.submit_guess("камінь").await.unwrap();

    let outcome = game.submit_guess("вогонь").await.unwrap();

    assert!(outcome.is_win());
    assert!(game.session().is_ended());
    assert_eq!(game.session().coins(), 700);
    assert_eq!(game.session().secret(), Some(SECRET));
    assert!(game.store().slot().read().unwrap().is_none());

    let after = game.submit_guess("дим").await.unwrap();
    assert_eq!(after, GuessOutcome::Ignored);
    assert_eq!(game.session().guesses().len(), 2);
}

#[tokio::test]
async fn give_up_reveals_backend_secret() {
    let mut game = online_game().await;

    let secret = game.give_up().await.unwrap();

    assert_eq!(secret.as_deref(), Some(SECRET));
    assert!(game.session().is_ended());
    assert!(game.session().guesses().is_empty());
    assert_eq!(game.give_up().await.unwrap(), None);
}

#[tokio::test]
async fn other_puzzle_is_not_resumed_from_this_one() {
    let mut game = online_game().await;
    game.submit_guess("дим").await.unwrap();

    let other = Puzzle {
        level: 3,
        seed_date: game.session().seed_date(),
    };
    assert!(game.store().load(other).is_none());
    assert!(!game.start(3, Some(DATE)));
    assert!(game.session().guesses().is_empty());
}

#[tokio::test]
async fn reply_without_word_keeps_submitted_word() {
    let mut game = online_game().await;

    let outcome = game.submit_guess("Туман").await.unwrap();
    assert_eq!(outcome, GuessOutcome::Recorded(Guess::new("туман", 5)));

    let outcome = game.submit_guess("хмара").await.unwrap();
    assert_eq!(outcome, GuessOutcome::Recorded(Guess::new("хмара", 9)));

    assert!(game.session().guesses().iter().all(|g| !g.word().is_empty()));
    let saved = game.store().load(game.session().puzzle()).unwrap();
    assert_eq!(saved.guesses, game.session().guesses());
}

#[tokio::test]
async fn failed_hint_leaves_session_unchanged() {
    let mut game = online_game_on(failing_extras_backend()).await;
    game.submit_guess("дим").await.unwrap();
    let before = game.session().clone();

    let err = game.use_hint().await.unwrap_err();

    assert!(matches!(err, ResolveError::Rejected(_)));
    assert_eq!(game.session(), &before);
    assert_eq!(game.session().hints_used(), 0);
    assert_eq!(game.session().coins(), 650);
    assert_eq!(game.session().guesses().len(), 1);
}

#[tokio::test]
async fn failed_reveal_keeps_session_open() {
    let mut game = online_game_on(failing_extras_backend()).await;
    game.submit_guess("дим").await.unwrap();

    let err = game.give_up().await.unwrap_err();

    assert_eq!(err.to_string(), "Сервіс недоступний");
    assert!(!game.session().is_ended());
    assert_eq!(game.session().secret(), None);
    assert!(game.store().load(game.session().puzzle()).is_some());

    let outcome = game.submit_guess("вогонь").await.unwrap();
    assert!(outcome.is_win());
}
