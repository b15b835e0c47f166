//! Core types: seats, configuration, RNG, errors.
//!
//! These are the building blocks shared by the catalog, the session store
//! and the rules engine.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, CHARACTERS, CRITICAL_THRESHOLD, LIFE_CAP, MAX_PLAYERS, STARTING_LIFE};
pub use error::{CatalogError, GameError, SelectionError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
