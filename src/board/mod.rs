//! Memory board generation.
//!
//! ## Key Types
//!
//! - `Board`: Rectangular grid of cards, two of each
//! - `GameResult`: Dimensions, unique cards and board for one game
//! - `BoardGenerator`: Validates dimensions and deals shuffled boards
//!
//! The free functions `create_game`, `create_board`, `validate_dimensions`
//! and `get_unique_cards` cover the common case without building a generator.

pub mod generator;
pub mod grid;
pub mod result;

pub use generator::{
    create_board, create_game, get_unique_cards, validate_dimensions, BoardGenerator,
};
pub use grid::{Board, BoardShapeError};
pub use result::GameResult;
