//! Error types for catalog loading and session usage.
//!
//! - `CatalogError` is structural: the dataset is malformed and the rest of
//!   the crate cannot run on it. Treat it as fatal at startup.
//! - `SessionError` is a rejected request. The session is left untouched
//!   and stays usable.
//!
//! Exhaustion (drawing more cards than remain) is not an error; the draw
//! returns what is available.

use thiserror::Error;

use crate::cards::{Rank, Suit};
use crate::deck::SessionState;

/// Structural-integrity failure of a card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The bundled or supplied data could not be parsed.
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog does not hold exactly 78 cards.
    #[error("invalid catalog size: {found}, expected {expected}")]
    WrongSize { found: usize, expected: usize },

    /// Two cards share an id.
    #[error("duplicate card id: {0}")]
    DuplicateId(String),

    /// A suit (or the major arcana) has the wrong number of cards.
    #[error("suit {suit} has {found} cards, expected {expected}")]
    SuitSize {
        suit: Suit,
        found: usize,
        expected: usize,
    },

    /// Two cards of one suit share a rank (or two trumps share a number).
    #[error("suit {suit} holds rank {rank} more than once")]
    DuplicateRank { suit: Suit, rank: Rank },

    /// A card's arcana, suit, rank or element disagree with each other.
    #[error("card {id} is malformed: {reason}")]
    MalformedCard { id: String, reason: &'static str },
}

/// A session request that was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Shuffles and draws are only accepted while idle.
    #[error("session is {state}, request needs an idle session")]
    NotIdle { state: SessionState },

    /// A shuffle was completed with a ticket issued before the last reset
    /// (or already redeemed).
    #[error("shuffle ticket from epoch {ticket_epoch} is stale (session epoch {current_epoch})")]
    StaleShuffle {
        ticket_epoch: u64,
        current_epoch: u64,
    },
}
