//! Reading board dimensions from request parameters.

use thiserror::Error;

use crate::core::BoardError;

/// Query parameter holding the row count.
pub const ROWS_PARAM: &str = "rows";

/// Query parameter holding the column count.
pub const COLUMNS_PARAM: &str = "columns";

/// Failure anywhere between the raw request and a generated game.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("The required {0} query parameter is missing.")]
    MissingParameter(&'static str),

    #[error("The {name} query parameter must be an integer, got {value:?}.")]
    InvalidParameter { name: &'static str, value: String },

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl RequestError {
    /// True unless the error points at a defect in board generation itself.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            RequestError::Board(e) => e.is_user_error(),
            _ => true,
        }
    }
}

/// Requested board dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRequest {
    pub rows: i64,
    pub columns: i64,
}

impl GameRequest {
    #[must_use]
    pub fn new(rows: i64, columns: i64) -> Self {
        Self { rows, columns }
    }

    /// Extract `rows` and `columns` from key/value pairs.
    ///
    /// Rows are looked up first, so a request missing both reports rows.
    /// When a key repeats, the last value wins.
    pub fn from_query<I, K, V>(pairs: I) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut rows = None;
        let mut columns = None;

        for (key, value) in pairs {
            match key.as_ref() {
                ROWS_PARAM => rows = Some(value.as_ref().to_owned()),
                COLUMNS_PARAM => columns = Some(value.as_ref().to_owned()),
                _ => {}
            }
        }

        let rows = parse_param(ROWS_PARAM, rows)?;
        let columns = parse_param(COLUMNS_PARAM, columns)?;
        Ok(Self { rows, columns })
    }
}

fn parse_param(name: &'static str, raw: Option<String>) -> Result<i64, RequestError> {
    let raw = raw.ok_or(RequestError::MissingParameter(name))?;
    raw.trim()
        .parse()
        .map_err(|_| RequestError::InvalidParameter { name, value: raw })
}
