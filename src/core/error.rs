//! Board generation errors.

use thiserror::Error;

/// Which dimension rule a request broke.
///
/// Rules are checked in declaration order and the first violation wins.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionError {
    #[error("The number of rows must be greater than 0.")]
    RowsTooSmall,

    #[error("The number of rows must be less than or equal to {max}.")]
    RowsTooLarge { max: i64 },

    #[error("The number of columns must be greater than 0.")]
    ColumnsTooSmall,

    #[error("The number of columns must be less than or equal to {max}.")]
    ColumnsTooLarge { max: i64 },

    #[error("Either the number of rows or columns must be even.")]
    BothOdd,

    /// Only reachable with custom limits: the cell count does not fit the card range.
    #[error("A {rows}x{columns} board has too many cells.")]
    TooManyCells { rows: i64, columns: i64 },
}

/// Failure while generating a board.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Requested rows/columns break a range or parity rule.
    #[error(transparent)]
    InvalidDimensions(#[from] DimensionError),

    /// The deck handed to `create_board` does not fill the grid exactly.
    #[error(
        "The number of cards is not equal to the number of rows and columns \
         (expected {expected}, got {actual})."
    )]
    Integrity { expected: usize, actual: usize },
}

impl BoardError {
    /// True for errors caused by caller input rather than a programming defect.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, BoardError::InvalidDimensions(_))
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
