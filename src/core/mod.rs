//! Core types: RNG, configuration, errors.
//!
//! Nothing here knows about boards; the generator in `board` builds on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BoardConfig, MAX_COLUMNS, MAX_ROWS};
pub use error::{BoardError, DimensionError, Result};
pub use rng::{GameRng, GameRngState};
