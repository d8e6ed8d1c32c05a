//! The request handed to a reading service.
//!
//! Field names match the JSON body the reading backend accepts:
//!
//! ```json
//! {
//!   "question": "What should I focus on?",
//!   "cards": [
//!     { "card_name": "The Star", "orientation": "upright",
//!       "keywords": ["hope", "faith"], "meaning": "Hope, faith, ..." }
//!   ],
//!   "zodiac_sign": "pisces"
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::{ReadingError, ZodiacSign};
use crate::cards::{DrawnCard, Orientation};

/// Cards a reading service accepts per request.
pub const MAX_READING_CARDS: usize = 3;

/// One drawn card, reduced to what the service needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContext {
    pub card_name: String,
    pub orientation: Orientation,
    pub keywords: Vec<String>,
    /// Meaning for `orientation` only.
    pub meaning: String,
}

impl From<&DrawnCard<'_>> for CardContext {
    fn from(drawn: &DrawnCard<'_>) -> Self {
        Self {
            card_name: drawn.card.name.clone(),
            orientation: drawn.orientation,
            keywords: drawn.card.keywords.clone(),
            meaning: drawn.meaning().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub question: String,
    pub cards: Vec<CardContext>,
    #[serde(default)]
    pub zodiac_sign: Option<ZodiacSign>,
}

impl ReadingRequest {
    /// Build a request from drawn cards, in draw order.
    ///
    /// The question is trimmed and must not be blank; between 1 and
    /// [`MAX_READING_CARDS`] cards are accepted.
    pub fn new(
        question: &str,
        drawn: &[DrawnCard<'_>],
        zodiac_sign: Option<ZodiacSign>,
    ) -> Result<Self, ReadingError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ReadingError::EmptyQuestion);
        }
        if drawn.is_empty() || drawn.len() > MAX_READING_CARDS {
            return Err(ReadingError::CardCount {
                found: drawn.len(),
                max: MAX_READING_CARDS,
            });
        }

        Ok(Self {
            question: question.to_string(),
            cards: drawn.iter().map(CardContext::from).collect(),
            zodiac_sign,
        })
    }

    /// JSON body for the reading backend.
    pub fn to_json(&self) -> Result<String, ReadingError> {
        serde_json::to_string(self).map_err(ReadingError::Encode)
    }
}
