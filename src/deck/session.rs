//! Deck session: the single owner of deck order and the active reading.
//!
//! ```text
//!            begin_shuffle            complete_shuffle
//!   Idle ─────────────────▶ Shuffling ────────────────▶ Idle
//!    │                          │
//!    │ draw / draw_spread       │ reset (ticket goes stale)
//!    ▼                          ▼
//!  Drawn ──── clear_reading ──▶ Idle ◀──── reset (from any state)
//! ```
//!
//! Every mutation goes through `&mut self`, so there is never more than one
//! writer. The permutation itself is computed instantly in
//! `begin_shuffle`; the session only stays in `Shuffling` until the caller
//! (typically an animation) redeems its `ShuffleTicket`. A reset bumps the
//! epoch, which makes any outstanding ticket stale.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::draw::{draw_many, draw_spread, DrawnHand};
use super::shuffle::shuffle_passes;
use crate::cards::{Card, Catalog, DrawnCard};
use crate::core::{SessionConfig, SessionError, TarotRng};
use crate::reading::{interpret, ReadingError, ReadingRequest, ReadingService, ZodiacSign};
use crate::spreads::Spread;

/// Where the session is in its shuffle/draw cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Deck settled, no active reading.
    Idle,
    /// A shuffle has been computed and awaits completion.
    Shuffling,
    /// Cards have been drawn and are held as the active reading.
    Drawn,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Shuffling => write!(f, "shuffling"),
            SessionState::Drawn => write!(f, "drawn"),
        }
    }
}

/// Proof of an in-flight shuffle. Redeem with [`DeckSession::complete_shuffle`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "the session stays in Shuffling until the ticket is redeemed"]
pub struct ShuffleTicket {
    epoch: u64,
}

impl ShuffleTicket {
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[derive(Debug)]
struct PendingShuffle<'c> {
    epoch: u64,
    order: Vec<&'c Card>,
}

/// A tarot session over a borrowed catalog.
///
/// ## Usage
///
/// ```
/// use tarot_deck::cards::Catalog;
/// use tarot_deck::core::SessionConfig;
/// use tarot_deck::deck::{DeckSession, SessionState};
/// use tarot_deck::spreads::Spread;
///
/// let mut session = DeckSession::new(Catalog::standard(), SessionConfig::new().with_seed(7));
///
/// session.shuffle().unwrap();
/// let reading = session.draw_spread(Spread::default()).unwrap();
///
/// assert_eq!(reading.len(), 3);
/// assert_eq!(session.remaining(), 75);
/// assert_eq!(session.state(), SessionState::Drawn);
///
/// session.reset();
/// assert_eq!(session.remaining(), 78);
/// ```
#[derive(Debug)]
pub struct DeckSession<'c> {
    catalog: &'c Catalog,
    config: SessionConfig,
    state: SessionState,
    deck: Vec<&'c Card>,
    drawn: DrawnHand<'c>,
    spread: Option<Spread>,
    pending: Option<PendingShuffle<'c>>,
    epoch: u64,
    seed: u64,
    shuffle_rng: TarotRng,
    draw_rng: TarotRng,
}

impl<'c> DeckSession<'c> {
    /// Start a session with the full deck in canonical order.
    #[must_use]
    pub fn new(catalog: &'c Catalog, config: SessionConfig) -> Self {
        let root = match config.seed {
            Some(seed) => TarotRng::new(seed),
            None => TarotRng::from_entropy(),
        };
        info!(
            seed = root.seed(),
            strategy = %config.draw_strategy,
            passes = config.effective_passes(),
            "deck session started"
        );

        Self {
            catalog,
            state: SessionState::Idle,
            deck: catalog.iter().collect(),
            drawn: DrawnHand::new(),
            spread: None,
            pending: None,
            epoch: 0,
            seed: root.seed(),
            shuffle_rng: root.for_context("shuffle"),
            draw_rng: root.for_context("draw"),
            config,
        }
    }

    /// Session over the bundled catalog with default configuration.
    #[must_use]
    pub fn standard() -> DeckSession<'static> {
        DeckSession::new(Catalog::standard(), SessionConfig::default())
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_shuffling(&self) -> bool {
        self.state == SessionState::Shuffling
    }

    /// Remaining cards, front first.
    #[must_use]
    pub fn deck(&self) -> &[&'c Card] {
        &self.deck
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// The active reading, in draw order. Empty unless `Drawn`.
    #[must_use]
    pub fn drawn(&self) -> &[DrawnCard<'c>] {
        &self.drawn
    }

    /// Spread of the active reading, if it was drawn as one.
    #[must_use]
    pub fn spread(&self) -> Option<Spread> {
        self.spread
    }

    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Root seed; replaying it reproduces every shuffle and draw.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Incremented on every shuffle start and every reset.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Shuffle and adopt the new order in one step.
    pub fn shuffle(&mut self) -> Result<(), SessionError> {
        let ticket = self.begin_shuffle()?;
        self.complete_shuffle(ticket)
    }

    /// Compute a new ordering and enter `Shuffling`.
    ///
    /// Only accepted while `Idle`. The ordering is not visible through
    /// [`deck`](Self::deck) until the ticket is redeemed.
    pub fn begin_shuffle(&mut self) -> Result<ShuffleTicket, SessionError> {
        self.require_idle()?;
        Ok(self.start_shuffle())
    }

    /// Adopt the ordering computed by `begin_shuffle` and return to `Idle`.
    ///
    /// Fails with `StaleShuffle` if the session was reset after the ticket
    /// was issued; the session is left as it is.
    pub fn complete_shuffle(&mut self, ticket: ShuffleTicket) -> Result<(), SessionError> {
        match self.pending.take() {
            Some(pending) if pending.epoch == ticket.epoch => {
                self.deck = pending.order;
                self.state = SessionState::Idle;
                debug!(epoch = ticket.epoch, "shuffle completed");
                Ok(())
            }
            other => {
                self.pending = other;
                debug!(ticket = ticket.epoch, epoch = self.epoch, "stale shuffle ticket rejected");
                Err(SessionError::StaleShuffle {
                    ticket_epoch: ticket.epoch,
                    current_epoch: self.epoch,
                })
            }
        }
    }

    /// Draw up to `count` cards as the active reading.
    ///
    /// `count == 0` and an empty deck both return an empty hand and leave
    /// the session `Idle`. Otherwise the drawn cards leave the deck and the
    /// session enters `Drawn`.
    pub fn draw(&mut self, count: usize) -> Result<DrawnHand<'c>, SessionError> {
        self.require_idle()?;
        if count == 0 || self.deck.is_empty() {
            debug!(count, remaining = self.deck.len(), "nothing to draw");
            return Ok(DrawnHand::new());
        }

        let hand = draw_many(&mut self.deck, count, self.config.draw_strategy, &mut self.draw_rng);
        Ok(self.hold(hand, None))
    }

    /// Draw one card per spread position as the active reading.
    pub fn draw_spread(&mut self, spread: Spread) -> Result<DrawnHand<'c>, SessionError> {
        self.require_idle()?;
        if self.deck.is_empty() {
            debug!(%spread, "deck empty, nothing to draw");
            return Ok(DrawnHand::new());
        }

        let hand = draw_spread(&mut self.deck, &spread, self.config.draw_strategy, &mut self.draw_rng);
        Ok(self.hold(hand, Some(spread)))
    }

    /// Discard the active reading but keep the depleted deck.
    ///
    /// Returns whether a reading was cleared. Does nothing outside `Drawn`.
    pub fn clear_reading(&mut self) -> bool {
        if self.state != SessionState::Drawn {
            return false;
        }
        self.drawn.clear();
        self.spread = None;
        self.state = SessionState::Idle;
        debug!(remaining = self.deck.len(), "reading cleared");
        true
    }

    /// Restore the full canonical deck and return to `Idle`.
    ///
    /// Accepted in every state. Any in-flight shuffle is discarded and its
    /// ticket becomes stale.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.pending = None;
        self.deck.clear();
        self.deck.extend(self.catalog.iter());
        self.drawn.clear();
        self.spread = None;
        self.state = SessionState::Idle;
        info!(epoch = self.epoch, "deck session reset");
    }

    /// Reset, then immediately begin a shuffle of the full deck.
    pub fn reset_and_shuffle(&mut self) -> ShuffleTicket {
        self.reset();
        self.start_shuffle()
    }

    /// Build the collaborator request for the active reading.
    pub fn reading_request(
        &self,
        question: &str,
        zodiac: Option<ZodiacSign>,
    ) -> Result<ReadingRequest, ReadingError> {
        ReadingRequest::new(question, &self.drawn, zodiac)
    }

    /// Ask `service` to interpret the active reading.
    ///
    /// A failing service leaves the session untouched, so the same reading
    /// can be retried or the session reset.
    pub fn request_reading<S: ReadingService + ?Sized>(
        &self,
        service: &S,
        question: &str,
        zodiac: Option<ZodiacSign>,
    ) -> Result<String, ReadingError> {
        let request = self.reading_request(question, zodiac)?;
        interpret(service, &request)
    }

    fn require_idle(&self) -> Result<(), SessionError> {
        if self.state == SessionState::Idle {
            Ok(())
        } else {
            debug!(state = %self.state, "request rejected");
            Err(SessionError::NotIdle { state: self.state })
        }
    }

    fn start_shuffle(&mut self) -> ShuffleTicket {
        self.epoch += 1;
        let mut order = self.deck.clone();
        shuffle_passes(&mut order, self.config.effective_passes(), &mut self.shuffle_rng);

        self.pending = Some(PendingShuffle {
            epoch: self.epoch,
            order,
        });
        self.state = SessionState::Shuffling;
        debug!(epoch = self.epoch, cards = self.deck.len(), "shuffle started");

        ShuffleTicket { epoch: self.epoch }
    }

    fn hold(&mut self, hand: DrawnHand<'c>, spread: Option<Spread>) -> DrawnHand<'c> {
        self.drawn = hand.clone();
        self.spread = spread;
        self.state = SessionState::Drawn;
        debug!(drawn = hand.len(), remaining = self.deck.len(), "cards drawn");
        hand
    }
}
