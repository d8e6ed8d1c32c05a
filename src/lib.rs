//! # tarot-deck
//!
//! The data core of a tarot drawing application, independent of any UI.
//!
//! ## Design Principles
//!
//! 1. **Validated Catalog**: The 78 cards are loaded once and checked for
//!    size, unique ids and suit structure before anything else runs.
//!
//! 2. **Injectable Randomness**: Shuffle and draw take their RNG as a
//!    parameter. A seed reproduces an entire session.
//!
//! 3. **Single Owner**: A `DeckSession` is the only writer of deck order
//!    and drawn cards. There is no global deck state.
//!
//! ## Architecture
//!
//! - **Pure engines**: `deck::shuffle` (Fisher-Yates) and `deck::draw`
//!   (without replacement, 50/50 orientation) work on plain slices of
//!   catalog references.
//!
//! - **Two-phase shuffle**: the permutation is instant; a `ShuffleTicket`
//!   lets an animation hold the session in `Shuffling`, and a reset makes
//!   the ticket stale.
//!
//! ## Modules
//!
//! - `core`: RNG, session configuration, errors
//! - `cards`: Card definitions, the catalog, drawn cards
//! - `deck`: Shuffle and draw engines, the session state machine
//! - `spreads`: Named layouts and their position labels
//! - `reading`: Requests for, and records of, interpreted readings

pub mod cards;
pub mod core;
pub mod deck;
pub mod reading;
pub mod spreads;

// Re-export commonly used types
pub use crate::core::{CatalogError, DrawStrategy, SessionConfig, SessionError, TarotRng};

pub use crate::cards::{
    Arcana, Card, Catalog, DrawnCard, Element, Orientation, Rank, Suit, DECK_SIZE,
};

pub use crate::deck::{DeckSession, DrawnHand, SessionState, ShuffleTicket};

pub use crate::spreads::{Spread, ThreeCardVariant};

pub use crate::reading::{
    build_prompt, CardContext, Reading, ReadingError, ReadingRequest, ReadingService, ZodiacSign,
};
