//! HTTP routes for word lookups and the pronunciation audio proxy.

use axum::extract::{Form, Path, Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use cambridge::audio::AUDIO_MPEG;

/// State shared by all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The dictionary client.
    pub dictionary: cambridge::Client,
}

/// The `word` parameter of a search, from either the query string or a form body.
#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    word: String,
}

/// The body returned when a lookup fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppState {
    /// Creates the handler state around the given dictionary client.
    #[must_use]
    pub const fn new(dictionary: cambridge::Client) -> AppState {
        AppState { dictionary }
    }
}

/// Builds the router with all endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search_query).post(search_form))
        .route("/audio/:word", get(audio))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn search_query(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    search(&state, &params.word).await
}

async fn search_form(State(state): State<AppState>, Form(params): Form<SearchParams>) -> Response {
    search(&state, &params.word).await
}

/// Looks up `word` and renders the entry, or an error body.
async fn search(state: &AppState, word: &str) -> Response {
    let word = word.trim();

    if word.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No word provided".to_string());
    }

    match state.dictionary.lookup(word).await {
        Ok(entry) => {
            debug!(%word, num_definitions = entry.num_definitions(), "lookup succeeded");

            Json(entry).into_response()
        }
        Err(err) => {
            warn!(%word, error = %err, "lookup failed");

            error_response(status_for(&err), err.to_string())
        }
    }
}

/// Proxies the pronunciation of `word`, falling back to the placeholder clip.
async fn audio(State(state): State<AppState>, Path(word): Path<String>) -> Response {
    let audio = state.dictionary.resolve_audio(&word).await;
    let disposition = format!("inline; filename=\"{}.mp3\"", filename(&word));
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("inline"));

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_MPEG)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        audio.bytes,
    )
        .into_response()
}

async fn health() -> &'static str {
    "ok"
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

/// Maps a lookup error to the status code of the response.
const fn status_for(err: &cambridge::Error) -> StatusCode {
    match err {
        cambridge::Error::NoDefinitionsFound => StatusCode::NOT_FOUND,
        cambridge::Error::Parse(_)
        | cambridge::Error::Request(_)
        | cambridge::Error::Status { .. } => StatusCode::BAD_GATEWAY,
        cambridge::Error::BuildClient(_) | cambridge::Error::MissingAudio => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Returns `word` with every character that is unsafe in a quoted header parameter replaced.
fn filename(word: &str) -> String {
    word.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | '\'') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
