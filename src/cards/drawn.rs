//! Drawn cards - a catalog card plus its draw-time orientation.
//!
//! A `DrawnCard` borrows its `Card` from the catalog; drawing never copies
//! or mutates card data.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::definition::Card;

/// Whether a drawn card landed upright or reversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    /// Fair coin flip between the two orientations.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Orientation::Upright
        } else {
            Orientation::Reversed
        }
    }

    #[must_use]
    pub fn is_reversed(self) -> bool {
        self == Orientation::Reversed
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Upright => write!(f, "upright"),
            Orientation::Reversed => write!(f, "reversed"),
        }
    }
}

/// A card as it came out of the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DrawnCard<'a> {
    pub card: &'a Card,
    pub orientation: Orientation,
    /// Spread position, e.g. "Past". `None` outside a spread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
}

impl<'a> DrawnCard<'a> {
    #[must_use]
    pub fn new(card: &'a Card, orientation: Orientation) -> Self {
        Self {
            card,
            orientation,
            position: None,
        }
    }

    /// Attach a spread position label.
    #[must_use]
    pub fn at_position(mut self, label: &'static str) -> Self {
        self.position = Some(label);
        self
    }

    /// Meaning text for the orientation the card was drawn in.
    #[must_use]
    pub fn meaning(&self) -> &'a str {
        let card = self.card;
        match self.orientation {
            Orientation::Upright => &card.upright_meaning,
            Orientation::Reversed => &card.reversed_meaning,
        }
    }

    #[must_use]
    pub fn id(&self) -> &'a str {
        let card = self.card;
        &card.id
    }
}

impl std::fmt::Display for DrawnCard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(f, "{}: {} ({})", position, self.card.name, self.orientation),
            None => write!(f, "{} ({})", self.card.name, self.orientation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::definition::tests::minor;
    use crate::cards::{Rank, Suit};
    use crate::core::TarotRng;

    #[test]
    fn test_meaning_follows_orientation() {
        let card = minor("cups-ace", Suit::Cups, Rank::Ace);

        let upright = DrawnCard::new(&card, Orientation::Upright);
        let reversed = DrawnCard::new(&card, Orientation::Reversed);

        assert_eq!(upright.meaning(), "cups-ace upright");
        assert_eq!(reversed.meaning(), "cups-ace reversed");
    }

    #[test]
    fn test_display() {
        let card = minor("Six of Swords", Suit::Swords, Rank::Number(6));

        let drawn = DrawnCard::new(&card, Orientation::Reversed);
        assert_eq!(drawn.to_string(), "Six of Swords (reversed)");
        assert_eq!(drawn.at_position("Future").to_string(), "Future: Six of Swords (reversed)");
    }

    #[test]
    fn test_random_orientation_produces_both() {
        let mut rng = TarotRng::new(7);
        let flips: Vec<_> = (0..64).map(|_| Orientation::random(&mut rng)).collect();

        assert!(flips.iter().any(|o| o.is_reversed()));
        assert!(flips.iter().any(|o| !o.is_reversed()));
    }

    #[test]
    fn test_serializes_card_inline() {
        let card = minor("pentacles-king", Suit::Pentacles, Rank::King);
        let drawn = DrawnCard::new(&card, Orientation::Upright).at_position("Present");

        let value = serde_json::to_value(drawn).unwrap();
        assert_eq!(value["card"]["id"], "pentacles-king");
        assert_eq!(value["orientation"], "upright");
        assert_eq!(value["position"], "Present");
    }
}
