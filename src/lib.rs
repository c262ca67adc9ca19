//! # memory-board
//!
//! Board generator for memory (pair matching) games.
//!
//! Given a row and column count, produces a grid in which every card appears
//! exactly twice, in uniformly shuffled positions.
//!
//! ```
//! use memory_board::BoardGenerator;
//!
//! let mut generator = BoardGenerator::new(42);
//! let game = generator.create_game(2, 3).unwrap();
//!
//! assert_eq!(game.unique_cards.len(), 3);
//! for &card in &game.unique_cards {
//!     assert_eq!(game.board.count_of(card), 2);
//! }
//! ```
//!
//! ## Rules
//!
//! - Rows and columns must each be between 1 and 6.
//! - At least one of them must be even, so the cells split into pairs.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card identifiers
//! - `board`: Board grid, game result and the generator
//! - `api`: Query parsing and the status-tagged response envelope

pub mod api;
pub mod board;
pub mod cards;
pub mod core;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{BoardConfig, BoardError, DimensionError, GameRng, GameRngState};

pub use crate::cards::CardId;

pub use crate::board::{
    create_board, create_game, get_unique_cards, validate_dimensions, Board, BoardGenerator,
    GameResult,
};

pub use crate::api::{handle_query, GameRequest, GameResponse, RequestError};
