//! Deck operations: shuffling, drawing, and the session that owns them.
//!
//! ## Key Types
//!
//! - `DeckSession`: State machine owning deck order and the active reading
//! - `SessionState`: `Idle`, `Shuffling` or `Drawn`
//! - `ShuffleTicket`: Handle for completing a two-phase shuffle
//! - `DrawnHand`: Drawn cards in draw order
//!
//! The `shuffle` and `draw` functions are pure with respect to the catalog
//! and take their randomness as a parameter; the session wires them to its
//! own seeded streams.

pub mod draw;
pub mod session;
pub mod shuffle;

pub use draw::{draw_many, draw_one, draw_spread, DrawnHand};
pub use session::{DeckSession, SessionState, ShuffleTicket};
pub use shuffle::{shuffle, shuffle_passes, shuffled};
