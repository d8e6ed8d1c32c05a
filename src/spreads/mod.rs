//! Spreads: named layouts whose positions give each drawn card a role.
//!
//! A spread only supplies ordered labels; the draw engine pairs them with
//! cards in draw order.

use serde::{Deserialize, Serialize};

/// Labelling scheme for the three-card spread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThreeCardVariant {
    #[default]
    PastPresentFuture,
    SituationActionOutcome,
    MindBodySpirit,
}

impl ThreeCardVariant {
    #[must_use]
    pub const fn positions(self) -> &'static [&'static str] {
        match self {
            ThreeCardVariant::PastPresentFuture => &["Past", "Present", "Future"],
            ThreeCardVariant::SituationActionOutcome => &["Situation", "Action", "Outcome"],
            ThreeCardVariant::MindBodySpirit => &["Mind", "Body", "Spirit"],
        }
    }
}

const SINGLE: &[&str] = &["Your Answer"];

const CELTIC_CROSS: &[&str] = &[
    "Present Situation",
    "Challenge",
    "Conscious Goal",
    "Subconscious",
    "Recent Past",
    "Near Future",
    "Your Attitude",
    "External Influences",
    "Hopes and Fears",
    "Final Outcome",
];

/// A layout of positioned cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spread {
    Single,
    ThreeCard(ThreeCardVariant),
    CelticCross,
}

impl Default for Spread {
    fn default() -> Self {
        Spread::ThreeCard(ThreeCardVariant::default())
    }
}

impl Spread {
    /// Position labels in draw order.
    #[must_use]
    pub const fn labels(&self) -> &'static [&'static str] {
        match self {
            Spread::Single => SINGLE,
            Spread::ThreeCard(variant) => variant.positions(),
            Spread::CelticCross => CELTIC_CROSS,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = &'static str> {
        self.labels().iter().copied()
    }

    /// Number of cards the spread lays out.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.labels().len()
    }

    /// Never true; every spread has at least one position.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.labels().is_empty()
    }
}

impl std::fmt::Display for Spread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Spread::Single => write!(f, "Single Card"),
            Spread::ThreeCard(variant) => write!(f, "Three Card ({})", variant.positions().join(" / ")),
            Spread::CelticCross => write!(f, "Celtic Cross"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(Spread::Single.len(), 1);
        assert_eq!(Spread::default().len(), 3);
        assert_eq!(Spread::CelticCross.len(), 10);
        assert!(!Spread::Single.is_empty());
    }

    #[test]
    fn test_three_card_variants() {
        let labels: Vec<_> = Spread::ThreeCard(ThreeCardVariant::MindBodySpirit).positions().collect();
        assert_eq!(labels, vec!["Mind", "Body", "Spirit"]);
        assert_eq!(Spread::default().labels(), &["Past", "Present", "Future"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Spread::default().to_string(), "Three Card (Past / Present / Future)");
        assert_eq!(Spread::CelticCross.to_string(), "Celtic Cross");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Spread::CelticCross).unwrap(), r#""celtic-cross""#);

        let spread: Spread = serde_json::from_str(r#"{"three-card":"situation-action-outcome"}"#).unwrap();
        assert_eq!(spread, Spread::ThreeCard(ThreeCardVariant::SituationActionOutcome));
    }
}
