//! Core types shared by every other module: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DrawStrategy, SessionConfig, DEFAULT_SHUFFLE_PASSES};
pub use error::{CatalogError, SessionError};
pub use rng::TarotRng;
