//! Catalog integrity tests.
//!
//! These tests verify the bundled dataset and the structural validation
//! that guards every other operation:
//! - 78 cards, 22 major + 4 x 14 minor
//! - Unique ids, consistent suit/element/rank
//! - Validation failures for malformed catalogs

use rustc_hash::FxHashSet;
use tarot_deck::cards::{validate, Arcana, Card, Catalog, Element, Rank, Suit, DECK_SIZE};
use tarot_deck::CatalogError;

fn bundled_cards() -> Vec<Card> {
    Catalog::standard().cards().to_vec()
}

// =============================================================================
// Bundled Dataset Tests
// =============================================================================

/// The bundled dataset loads and validates.
#[test]
fn test_bundled_catalog_is_valid() {
    let catalog = Catalog::load_bundled().expect("bundled catalog must validate");

    assert_eq!(catalog.len(), DECK_SIZE);
    assert!(validate(catalog.cards()).is_ok());
}

/// 22 major arcana numbered 0..=21 in order, then the four suits.
#[test]
fn test_canonical_order() {
    let catalog = Catalog::standard();

    for (i, card) in catalog.by_arcana(Arcana::Major).enumerate() {
        assert_eq!(card.rank, Rank::Major(i as u8));
        assert_eq!(card.element, None);
    }

    let suits: Vec<Suit> = catalog.cards()[22..].chunks(14).map(|chunk| chunk[0].suit).collect();
    assert_eq!(suits, Suit::MINOR.to_vec());

    assert_eq!(catalog.cards()[0].name, "The Fool");
    assert_eq!(catalog.cards()[21].name, "The World");
}

/// Each suit runs Ace, 2-10, Page, Knight, Queen, King with its element.
#[test]
fn test_suit_structure() {
    let catalog = Catalog::standard();
    let expected: Vec<Rank> = std::iter::once(Rank::Ace)
        .chain((2..=10).map(Rank::Number))
        .chain([Rank::Page, Rank::Knight, Rank::Queen, Rank::King])
        .collect();

    for (suit, element) in Suit::MINOR
        .into_iter()
        .zip([Element::Fire, Element::Water, Element::Air, Element::Earth])
    {
        let cards: Vec<_> = catalog.by_suit(suit).collect();
        let ranks: Vec<_> = cards.iter().map(|c| c.rank).collect();

        assert_eq!(ranks, expected, "{suit}");
        assert!(cards.iter().all(|c| c.element == Some(element)), "{suit}");
        assert!(cards.iter().all(|c| c.arcana == Arcana::Minor), "{suit}");
    }
}

/// Every card carries the data a reading needs.
#[test]
fn test_cards_are_complete() {
    let mut ids = FxHashSet::default();

    for card in Catalog::standard() {
        assert!(ids.insert(card.id.as_str()), "duplicate {}", card.id);
        assert!(!card.name.is_empty());
        assert!(!card.keywords.is_empty(), "{} has no keywords", card.id);
        assert!(!card.upright_meaning.is_empty());
        assert!(!card.reversed_meaning.is_empty());
        assert_ne!(card.upright_meaning, card.reversed_meaning);
        assert!(!card.image.is_empty());
    }

    assert_eq!(ids.len(), 78);
}

#[test]
fn test_lookup_by_id() {
    let catalog = Catalog::standard();

    let queen = catalog.get("swords-queen").unwrap();
    assert_eq!(queen.name, "Queen of Swords");
    assert_eq!(queen.rank, Rank::Queen);
    assert_eq!(queen.element, Some(Element::Air));

    assert!(catalog.get("swords-15").is_none());
}

// =============================================================================
// Validation Failure Tests
// =============================================================================

/// A duplicate id fails deterministically.
#[test]
fn test_duplicate_id_fails() {
    let mut cards = bundled_cards();
    cards[40].id = cards[10].id.clone();

    for _ in 0..3 {
        let err = Catalog::from_cards(cards.clone()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == &cards[10].id));
    }
}

/// Any count other than 78 fails.
#[test]
fn test_wrong_count_fails() {
    let mut short = bundled_cards();
    short.truncate(77);
    assert!(matches!(
        Catalog::from_cards(short),
        Err(CatalogError::WrongSize { found: 77, expected: 78 })
    ));

    let mut long = bundled_cards();
    let mut extra = long[0].clone();
    extra.id = "major-extra".to_string();
    long.push(extra);
    assert!(matches!(
        Catalog::from_cards(long),
        Err(CatalogError::WrongSize { found: 79, .. })
    ));

    assert!(matches!(
        Catalog::from_json("[]"),
        Err(CatalogError::WrongSize { found: 0, .. })
    ));
}

/// A suit with two Aces and no King, or two trumps numbered 0, is not a
/// tarot deck even though every count is right.
#[test]
fn test_repeated_rank_fails() {
    let mut two_aces = bundled_cards();
    let king = two_aces.iter_mut().find(|c| c.id == "cups-king").unwrap();
    king.rank = Rank::Ace;
    assert!(matches!(
        Catalog::from_cards(two_aces),
        Err(CatalogError::DuplicateRank { suit: Suit::Cups, rank: Rank::Ace })
    ));

    let mut two_fools = bundled_cards();
    let magician = two_fools.iter_mut().find(|c| c.id == "major-01").unwrap();
    magician.rank = Rank::Major(0);
    let err = Catalog::from_cards(two_fools).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::DuplicateRank { suit: Suit::Major, rank: Rank::Major(0) }
    ));
    assert_eq!(err.to_string(), "suit major holds rank 0 more than once");
}

// =============================================================================
// Construction Tests
// =============================================================================

/// Catalogs survive a JSON round trip through `from_json`.
#[test]
fn test_from_json_accepts_serialized_catalog() {
    let json = serde_json::to_string(Catalog::standard().cards()).unwrap();
    let catalog = Catalog::from_json(&json).unwrap();

    assert_eq!(catalog.cards(), Catalog::standard().cards());
}

#[test]
fn test_error_messages() {
    let mut cards = bundled_cards();
    cards.pop();
    let err = Catalog::from_cards(cards).unwrap_err();

    assert_eq!(err.to_string(), "invalid catalog size: 77, expected 78");
}
