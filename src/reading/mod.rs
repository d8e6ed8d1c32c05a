//! Readings: what the core hands to an interpretation service.
//!
//! The service itself (a remote text-generation model in practice) sits
//! outside this crate behind the `ReadingService` trait. This module builds
//! the request from drawn cards, renders the prompt such services use,
//! and records finished readings.
//!
//! ## Example
//!
//! ```
//! use tarot_deck::deck::DeckSession;
//! use tarot_deck::cards::Catalog;
//! use tarot_deck::core::SessionConfig;
//! use tarot_deck::reading::{ReadingError, ReadingRequest};
//!
//! let mut session = DeckSession::new(Catalog::standard(), SessionConfig::new().with_seed(1));
//! session.draw(3).unwrap();
//!
//! let echo = |request: &ReadingRequest| -> Result<String, ReadingError> {
//!     Ok(format!("{} cards considered", request.cards.len()))
//! };
//! let text = session.request_reading(&echo, "What lies ahead?", None).unwrap();
//! assert_eq!(text, "3 cards considered");
//! ```

pub mod prompt;
pub mod request;
pub mod zodiac;

pub use prompt::build_prompt;
pub use request::{CardContext, ReadingRequest, MAX_READING_CARDS};
pub use zodiac::ZodiacSign;

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::cards::DrawnCard;
use crate::spreads::Spread;

/// Failure to produce a reading.
///
/// None of these affect the deck session; the drawn cards stay valid for
/// a retry.
#[derive(Debug, Error)]
pub enum ReadingError {
    #[error("question must not be blank")]
    EmptyQuestion,

    #[error("a reading takes 1 to {max} cards, got {found}")]
    CardCount { found: usize, max: usize },

    #[error("failed to encode reading request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The service could not be reached.
    #[error("reading service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with an error.
    #[error("reading service failed: {detail}")]
    Service { detail: String },

    #[error("reading service returned no text")]
    EmptyReading,
}

/// Something that turns a request into reading text.
pub trait ReadingService {
    fn generate(&self, request: &ReadingRequest) -> Result<String, ReadingError>;
}

impl<F> ReadingService for F
where
    F: Fn(&ReadingRequest) -> Result<String, ReadingError>,
{
    fn generate(&self, request: &ReadingRequest) -> Result<String, ReadingError> {
        self(request)
    }
}

/// Call `service` and normalise its answer.
///
/// Surrounding whitespace is trimmed; an empty answer is an error.
pub fn interpret<S: ReadingService + ?Sized>(
    service: &S,
    request: &ReadingRequest,
) -> Result<String, ReadingError> {
    let text = service.generate(request).map_err(|e| {
        warn!(error = %e, cards = request.cards.len(), "reading service failed");
        e
    })?;

    let text = text.trim();
    if text.is_empty() {
        return Err(ReadingError::EmptyReading);
    }
    Ok(text.to_string())
}

/// A finished reading, kept by the presentation layer.
#[derive(Clone, Debug, Serialize)]
pub struct Reading<'a> {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub spread: Option<Spread>,
    pub question: String,
    pub cards: Vec<DrawnCard<'a>>,
    pub notes: String,
}

impl<'a> Reading<'a> {
    #[must_use]
    pub fn new<R: Rng + ?Sized>(
        question: impl Into<String>,
        cards: &[DrawnCard<'a>],
        spread: Option<Spread>,
        timestamp: u64,
        rng: &mut R,
    ) -> Self {
        Self {
            id: reading_id(timestamp, rng),
            timestamp,
            spread,
            question: question.into(),
            cards: cards.to_vec(),
            notes: String::new(),
        }
    }

    /// Same as [`Reading::new`], stamped with the current time.
    #[must_use]
    pub fn now<R: Rng + ?Sized>(
        question: impl Into<String>,
        cards: &[DrawnCard<'a>],
        spread: Option<Spread>,
        rng: &mut R,
    ) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        Self::new(question, cards, spread, timestamp, rng)
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// `reading-<millis>-<9 base36 chars>`.
fn reading_id<R: Rng + ?Sized>(timestamp: u64, rng: &mut R) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("reading-{timestamp}-{suffix}")
}
