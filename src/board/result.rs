//! Generated game output.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

use super::grid::Board;

/// A freshly generated game: dimensions, the cards in play, and the board.
///
/// Serializes with camelCase keys:
/// `{"rowsCount":2,"columnsCount":2,"uniqueCards":[0,1],"board":[[1,0],[0,1]]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub rows_count: i64,
    pub columns_count: i64,
    /// Every card on the board, once, in ascending order.
    pub unique_cards: Vec<CardId>,
    pub board: Board,
}

impl GameResult {
    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.unique_cards.len()
    }
}
