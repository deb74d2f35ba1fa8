//! Card system: the card model, the catalog, and deck building.
//!
//! ## Key Types
//!
//! - `Card`: Immutable identity plus face-up / matched flags
//! - `Catalog`: Validated list of distinct face names
//! - `Deck`: Shuffled, fixed-position card sequence for one session

pub mod card;
pub mod catalog;
pub mod deck;

pub use card::Card;
pub use catalog::Catalog;
pub use deck::{build_deck, Deck};
