//! Request/response layer for hosts that serve boards over HTTP or similar.
//!
//! `handle_query` takes raw query parameters and always returns an envelope;
//! no error escapes as a panic or `Err`.

pub mod request;
pub mod response;

pub use request::{GameRequest, RequestError, COLUMNS_PARAM, ROWS_PARAM};
pub use response::GameResponse;

use log::warn;

use crate::board::{BoardGenerator, GameResult};

/// Generate a game for an already-parsed request.
pub fn create_game(
    request: GameRequest,
    generator: &mut BoardGenerator,
) -> Result<GameResult, RequestError> {
    Ok(generator.create_game(request.rows, request.columns)?)
}

/// Parse `pairs`, generate a game and wrap the outcome in an envelope.
pub fn handle_query<I, K, V>(pairs: I, generator: &mut BoardGenerator) -> GameResponse
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let result = GameRequest::from_query(pairs)
        .inspect_err(|e| warn!("bad game request: {}", e))
        .and_then(|request| create_game(request, generator));
    GameResponse::from(result)
}
