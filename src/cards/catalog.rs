//! The 78-card catalog.
//!
//! The `Catalog` owns every card record and provides lookup by id,
//! canonical-order iteration, and filtering by suit or arcana. It is
//! validated once at construction; a `Catalog` value that exists is
//! always well-formed.

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info};

use super::definition::{Arcana, Card, Suit};
use crate::core::CatalogError;

/// Number of cards in a complete tarot deck.
pub const DECK_SIZE: usize = 78;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

static STANDARD: OnceLock<Catalog> = OnceLock::new();

/// Immutable, validated collection of tarot cards in canonical order.
///
/// Canonical order is major arcana 0-21, then wands, cups, swords and
/// pentacles, each Ace through King.
///
/// ## Example
///
/// ```
/// use tarot_deck::cards::{Catalog, Suit};
///
/// let catalog = Catalog::standard();
///
/// assert_eq!(catalog.len(), 78);
/// assert_eq!(catalog.by_suit(Suit::Cups).count(), 14);
/// assert_eq!(catalog.get("major-00").unwrap().name, "The Fool");
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    cards: Vec<Card>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// The bundled Rider-Waite catalog, loaded and validated on first use.
    ///
    /// # Panics
    ///
    /// Panics if the bundled dataset fails validation. That is a build
    /// defect, not a runtime condition; use [`Catalog::load_bundled`] to
    /// handle it as a value instead.
    #[must_use]
    pub fn standard() -> &'static Catalog {
        STANDARD.get_or_init(|| match Self::load_bundled() {
            Ok(catalog) => catalog,
            Err(e) => panic!("bundled tarot catalog is invalid: {e}"),
        })
    }

    /// Parse and validate the bundled dataset.
    pub fn load_bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse and validate a JSON array of cards.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// Build a catalog from card records, validating them first.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        validate(&cards)?;

        let index = cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.id.clone(), i))
            .collect();

        info!(cards = cards.len(), "tarot catalog loaded");
        Ok(Self { cards, index })
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Check if an id is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Canonical position of a card.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// All cards in canonical order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards. Always [`DECK_SIZE`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards of one suit, in canonical order.
    pub fn by_suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.suit == suit)
    }

    /// Cards of one arcana, in canonical order.
    pub fn by_arcana(&self, arcana: Arcana) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.arcana == arcana)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Check the structural integrity of a card list.
///
/// Verifies, in order: exactly 78 cards, pairwise distinct ids, each card's
/// arcana/suit/rank/element agree, 22 major arcana plus 14 cards per suit,
/// and no rank repeated within a suit. The first violation found is
/// returned.
pub fn validate(cards: &[Card]) -> Result<(), CatalogError> {
    if cards.len() != DECK_SIZE {
        return Err(CatalogError::WrongSize {
            found: cards.len(),
            expected: DECK_SIZE,
        });
    }

    let mut seen = FxHashSet::default();
    for card in cards {
        if !seen.insert(card.id.as_str()) {
            return Err(CatalogError::DuplicateId(card.id.clone()));
        }
    }

    for card in cards {
        card.check_shape().map_err(|reason| CatalogError::MalformedCard {
            id: card.id.clone(),
            reason,
        })?;
    }

    for suit in [Suit::Major, Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles] {
        let found = cards.iter().filter(|c| c.suit == suit).count();
        if found != suit.expected_len() {
            return Err(CatalogError::SuitSize {
                suit,
                found,
                expected: suit.expected_len(),
            });
        }
    }

    // Ranks are in range per card and counts match per suit, so distinct
    // ranks means each suit holds exactly Ace..King and the trumps 0-21.
    let mut ranks = FxHashSet::default();
    for card in cards {
        if !ranks.insert((card.suit, card.rank)) {
            return Err(CatalogError::DuplicateRank {
                suit: card.suit,
                rank: card.rank,
            });
        }
    }

    debug!("catalog structure validated");
    Ok(())
}
