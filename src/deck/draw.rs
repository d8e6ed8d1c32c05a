//! Draw engine: take cards out of a deck without replacement.
//!
//! Every drawn card gets an independent 50/50 orientation. Draws never
//! fail: asking for more cards than remain returns what is left, and
//! asking for zero returns nothing.
//!
//! ## Strategies
//!
//! - `RandomIndex`: each step removes a uniformly random remaining card.
//!   The result is a uniform sample whatever order the deck is in.
//! - `TopOfDeck`: removes cards from the front in order. The result is
//!   only as random as the preceding shuffle.

use rand::Rng;
use smallvec::SmallVec;

use crate::cards::{Card, DrawnCard, Orientation};
use crate::core::DrawStrategy;
use crate::spreads::Spread;

/// Drawn cards in draw order. Inline for the common 1- and 3-card readings.
pub type DrawnHand<'a> = SmallVec<[DrawnCard<'a>; 3]>;

/// Assign a random orientation to a single card.
pub fn draw_one<'a, R: Rng + ?Sized>(card: &'a Card, rng: &mut R) -> DrawnCard<'a> {
    DrawnCard::new(card, Orientation::random(rng))
}

/// Remove up to `count` cards from `deck` and orient them.
///
/// Returns `min(count, deck.len())` cards in the order they were drawn;
/// `deck` keeps the rest in their original relative order.
pub fn draw_many<'a, R: Rng + ?Sized>(
    deck: &mut Vec<&'a Card>,
    count: usize,
    strategy: DrawStrategy,
    rng: &mut R,
) -> DrawnHand<'a> {
    let count = count.min(deck.len());
    let mut hand = DrawnHand::with_capacity(count);

    match strategy {
        DrawStrategy::RandomIndex => {
            for _ in 0..count {
                let index = rng.gen_range(0..deck.len());
                let card = deck.remove(index);
                hand.push(draw_one(card, rng));
            }
        }
        DrawStrategy::TopOfDeck => {
            for card in deck.drain(..count) {
                hand.push(draw_one(card, rng));
            }
        }
    }

    hand
}

/// Draw one card per spread position and label them in order.
///
/// If the deck runs short, the leading positions are filled and the rest
/// are left out.
pub fn draw_spread<'a, R: Rng + ?Sized>(
    deck: &mut Vec<&'a Card>,
    spread: &Spread,
    strategy: DrawStrategy,
    rng: &mut R,
) -> DrawnHand<'a> {
    let mut hand = draw_many(deck, spread.len(), strategy, rng);
    for (drawn, label) in hand.iter_mut().zip(spread.positions()) {
        drawn.position = Some(label);
    }
    hand
}
