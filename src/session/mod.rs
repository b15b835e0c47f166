//! Session state: players, turn order, and the store of active games.
//!
//! Holds state only. Scoring and routing live in `rules`.

pub mod player;
pub mod state;
pub mod store;
pub mod turn;

pub use player::{clamp_life, Player};
pub use state::{validate_selection, AnswerRecord, GameSession};
pub use store::{SessionId, SessionStore};
pub use turn::TurnOrder;
