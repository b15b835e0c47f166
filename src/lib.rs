//! # hotseat-quest
//!
//! Core of a hot-seat narrative quiz game: players pick characters, answer
//! binary-choice questions that cost life and build personality attributes,
//! detour into a reflex mini-game when life runs critically low, and finish
//! with a normalized attribute chart.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: sessions live in an explicit, id-keyed
//!    `SessionStore`; the engine takes the session it acts on.
//!
//! 2. **Rejected means untouched**: every engine check runs before any
//!    mutation, so an invalid answer leaves the session byte-for-byte equal.
//!
//! 3. **Closed vocabularies**: attributes are an enum validated when a
//!    catalog loads; choices are `A`/`B` only.
//!
//! ## Flow
//!
//! ```
//! use hotseat_quest::{GameEngine, Route, SessionStore};
//!
//! let engine = GameEngine::standard();
//! let store = SessionStore::new(engine.config().clone());
//! let id = store.init_session(&["Ana", "Bruno"]).unwrap();
//!
//! let route = store
//!     .with_session(id, |s| engine.apply_answer(s, "Ana", "A"))
//!     .unwrap();
//! assert_eq!(route, Route::Continue("Bruno".to_string()));
//! ```
//!
//! ## Modules
//!
//! - `core`: seats, configuration and constants, RNG, errors
//! - `catalog`: attributes, questions, the validated question catalog
//! - `session`: players, turn order, game sessions, the session store
//! - `rules`: the game engine, life policies, routes, final profiles

pub mod catalog;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, GameConfig, GameError, GameRng, PlayerId, PlayerMap, SelectionError,
    CHARACTERS, CRITICAL_THRESHOLD, LIFE_CAP, MAX_PLAYERS, STARTING_LIFE,
};

pub use crate::catalog::{
    AnswerOption, Attribute, AttributeTotals, Choice, Phase, Question, QuestionCatalog,
};

pub use crate::session::{AnswerRecord, GameSession, Player, SessionId, SessionStore, TurnOrder};

pub use crate::rules::{FinalProfile, GameEngine, LifePolicy, PlayerStatus, Route};
