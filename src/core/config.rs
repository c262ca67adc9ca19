//! Board generation configuration.
//!
//! `BoardConfig::default()` carries the standard limits: at most 6 rows and
//! 6 columns, seeded from entropy. Hosts can pin a seed for reproducible
//! boards.

use serde::{Deserialize, Serialize};

/// Largest allowed row count.
pub const MAX_ROWS: i64 = 6;

/// Largest allowed column count.
pub const MAX_COLUMNS: i64 = 6;

/// Configuration for a [`BoardGenerator`](crate::board::BoardGenerator).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Maximum number of rows (inclusive).
    pub max_rows: i64,

    /// Maximum number of columns (inclusive).
    pub max_columns: i64,

    /// Fixed shuffle seed. `None` draws a fresh seed from entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_rows: MAX_ROWS,
            max_columns: MAX_COLUMNS,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum row count.
    #[must_use]
    pub fn with_max_rows(mut self, max: i64) -> Self {
        self.max_rows = max;
        self
    }

    /// Set the maximum column count.
    #[must_use]
    pub fn with_max_columns(mut self, max: i64) -> Self {
        self.max_columns = max;
        self
    }
}
