//! The board grid.
//!
//! Cells are stored row-major in a flat vector. Serialized, a board is a list
//! of rows, each row a list of card IDs:
//!
//! ```
//! use memory_board::board::Board;
//! use memory_board::cards::CardId;
//!
//! let board = Board::from_rows(vec![
//!     vec![CardId::new(1), CardId::new(0)],
//!     vec![CardId::new(0), CardId::new(1)],
//! ])
//! .unwrap();
//!
//! assert_eq!(board.get(1, 0), Some(CardId::new(0)));
//! assert_eq!(serde_json::to_string(&board).unwrap(), "[[1,0],[0,1]]");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;

/// Rows that cannot form a rectangular board.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BoardShapeError {
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("{rows} rows have no cells")]
    ZeroWidth { rows: usize },
}

/// A rectangular grid of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<CardId>>", into = "Vec<Vec<CardId>>")]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<CardId>,
}

impl Board {
    /// Build a board from row-major cells.
    ///
    /// Returns `None` if `cells.len() != rows * columns`.
    #[must_use]
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<CardId>) -> Option<Self> {
        if rows.checked_mul(columns)? != cells.len() {
            return None;
        }
        Some(Self { rows, columns, cells })
    }

    /// Build a board from a list of rows.
    ///
    /// Fails if the rows differ in length or are empty. No rows at all is an
    /// empty board.
    pub fn from_rows(rows: Vec<Vec<CardId>>) -> Result<Self, BoardShapeError> {
        let row_count = rows.len();
        let columns = rows.first().map_or(0, Vec::len);

        if columns == 0 && row_count > 0 {
            return Err(BoardShapeError::ZeroWidth { rows: row_count });
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(BoardShapeError::Ragged {
                row: index,
                len: row.len(),
                expected: columns,
            });
        }

        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            columns,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Card at the given position, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<CardId> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }

    /// Cards in one row.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[CardId]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[CardId]> {
        // chunks(0) panics; a zero-width board has no cells anyway
        self.cells.chunks(self.columns.max(1))
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cells.iter().copied()
    }

    /// How many cells hold `card`.
    #[must_use]
    pub fn count_of(&self, card: CardId) -> usize {
        self.cells.iter().filter(|&&c| c == card).count()
    }

    /// `(row, column)` of every cell holding `card`, in row-major order.
    #[must_use]
    pub fn positions_of(&self, card: CardId) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == card)
            .map(|(i, _)| (i / self.columns, i % self.columns))
            .collect()
    }
}

impl TryFrom<Vec<Vec<CardId>>> for Board {
    type Error = BoardShapeError;

    fn try_from(rows: Vec<Vec<CardId>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<CardId>> {
    fn from(board: Board) -> Self {
        board.rows_iter().map(<[CardId]>::to_vec).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|c| c.raw().to_string().len())
            .max()
            .unwrap_or(1);

        for (i, row) in self.rows_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|c| format!("{:>width$}", c.raw(), width = width))
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
