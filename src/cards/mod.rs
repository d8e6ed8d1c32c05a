//! Card system: definitions, the validated catalog, and drawn cards.
//!
//! ## Key Types
//!
//! - `Card`: Static card data (identity, suit, rank, meanings)
//! - `Catalog`: The validated 78-card collection and lookup
//! - `DrawnCard`: A catalog card plus orientation and spread position
//!
//! Cards are never copied into decks; decks and drawn cards hold
//! references into the catalog.

pub mod catalog;
pub mod definition;
pub mod drawn;

pub use catalog::{validate, Catalog, DECK_SIZE};
pub use definition::{Arcana, Card, Element, Rank, Suit};
pub use drawn::{DrawnCard, Orientation};
