//! Card definitions - static card data.
//!
//! `Card` holds the immutable properties of one of the 78 tarot cards:
//! identity, suit and rank, keywords, and both meanings. A card never
//! changes after the catalog is loaded.
//!
//! Draw-time data (orientation, spread position) is stored separately in
//! `DrawnCard`.

use serde::{Deserialize, Serialize};

/// The two card categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

/// Card suit. Major arcana cards use the `Major` sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
    Major,
}

impl Suit {
    /// The four minor arcana suits in catalog order.
    pub const MINOR: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// Element traditionally tied to the suit. `None` for the major arcana.
    #[must_use]
    pub const fn element(self) -> Option<Element> {
        match self {
            Suit::Wands => Some(Element::Fire),
            Suit::Cups => Some(Element::Water),
            Suit::Swords => Some(Element::Air),
            Suit::Pentacles => Some(Element::Earth),
            Suit::Major => None,
        }
    }

    /// Number of cards the catalog holds for this suit.
    #[must_use]
    pub const fn expected_len(self) -> usize {
        match self {
            Suit::Major => 22,
            _ => 14,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Suit::Wands => "wands",
            Suit::Cups => "cups",
            Suit::Swords => "swords",
            Suit::Pentacles => "pentacles",
            Suit::Major => "major",
        };
        write!(f, "{}", s)
    }
}

/// Classical element of a minor arcana suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Fire => write!(f, "Fire"),
            Element::Water => write!(f, "Water"),
            Element::Air => write!(f, "Air"),
            Element::Earth => write!(f, "Earth"),
        }
    }
}

/// Position of a card within its suit.
///
/// Minor arcana run Ace, 2-10, Page, Knight, Queen, King.
/// Major arcana carry their trump number 0 (The Fool) to 21 (The World).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace,
    Number(u8),
    Page,
    Knight,
    Queen,
    King,
    Major(u8),
}

impl Rank {
    /// Whether this rank can appear in a minor arcana suit.
    #[must_use]
    pub const fn is_minor(self) -> bool {
        match self {
            Rank::Number(n) => n >= 2 && n <= 10,
            Rank::Major(_) => false,
            _ => true,
        }
    }

    /// Whether this rank is a valid major arcana number.
    #[must_use]
    pub const fn is_major(self) -> bool {
        matches!(self, Rank::Major(n) if n <= 21)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ace => write!(f, "Ace"),
            Rank::Number(n) | Rank::Major(n) => write!(f, "{}", n),
            Rank::Page => write!(f, "Page"),
            Rank::Knight => write!(f, "Knight"),
            Rank::Queen => write!(f, "Queen"),
            Rank::King => write!(f, "King"),
        }
    }
}

/// Static tarot card.
///
/// ## Example
///
/// ```
/// use tarot_deck::cards::{Arcana, Catalog, Suit};
///
/// let catalog = Catalog::standard();
/// let ace = catalog.get("wands-ace").unwrap();
///
/// assert_eq!(ace.name, "Ace of Wands");
/// assert_eq!(ace.arcana, Arcana::Minor);
/// assert_eq!(ace.suit, Suit::Wands);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique, stable identifier (e.g. `major-00`, `cups-queen`).
    pub id: String,

    /// Display name.
    pub name: String,

    pub arcana: Arcana,

    pub suit: Suit,

    pub rank: Rank,

    /// Present for minor arcana only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,

    /// Short descriptive tags, most significant first.
    pub keywords: Vec<String>,

    pub upright_meaning: String,

    pub reversed_meaning: String,

    /// Opaque reference to the card artwork.
    pub image: String,
}

impl Card {
    /// Check that arcana, suit, rank and element agree.
    ///
    /// Returns a short reason on mismatch.
    pub(crate) fn check_shape(&self) -> Result<(), &'static str> {
        match self.arcana {
            Arcana::Major => {
                if self.suit != Suit::Major {
                    return Err("major arcana card outside the major suit");
                }
                if !self.rank.is_major() {
                    return Err("major arcana card without a trump number 0-21");
                }
            }
            Arcana::Minor => {
                if self.suit == Suit::Major {
                    return Err("minor arcana card in the major suit");
                }
                if !self.rank.is_minor() {
                    return Err("minor arcana card with a non-minor rank");
                }
            }
        }

        if self.element != self.suit.element() {
            return Err("element does not match suit");
        }

        Ok(())
    }

    #[must_use]
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
