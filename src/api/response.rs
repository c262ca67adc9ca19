//! Status-tagged response envelope.
//!
//! ```json
//! {"status":"ok","rowsCount":2,"columnsCount":2,"uniqueCards":[0,1],"board":[[1,0],[0,1]]}
//! {"status":"error","message":"Either the number of rows or columns must be even."}
//! ```

use serde::{Deserialize, Serialize};

use crate::board::GameResult;

use super::request::RequestError;

/// Response returned to the request layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GameResponse {
    Ok(GameResult),
    Error { message: String },
}

impl GameResponse {
    /// Error envelope carrying `err`'s message.
    #[must_use]
    pub fn error(err: &RequestError) -> Self {
        GameResponse::Error {
            message: err.to_string(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, GameResponse::Ok(_))
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<Result<GameResult, RequestError>> for GameResponse {
    fn from(result: Result<GameResult, RequestError>) -> Self {
        match result {
            Ok(game) => GameResponse::Ok(game),
            Err(err) => GameResponse::error(&err),
        }
    }
}
