//! Card identity.
//!
//! Memory cards are opaque: the only thing a card knows is which pair it
//! belongs to.

pub mod card_id;

pub use card_id::CardId;
