//! Error types for session and engine operations.
//!
//! Every error is recoverable by re-navigating: the host re-prompts the
//! selection, the same question, the mini-game, or shows the summary.

use thiserror::Error;

use crate::session::SessionId;

/// Why a character selection was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no character selected")]
    Empty,

    #[error("character {0} selected more than once")]
    Duplicate(String),

    #[error("unknown character {0}")]
    UnknownCharacter(String),

    #[error("{count} characters selected, at most {max} allowed")]
    TooMany { count: usize, max: usize },
}

/// Why a question catalog failed validation at load time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has {count} questions, at least {min} required")]
    TooFewQuestions { count: usize, min: usize },

    #[error("question {index}: phase {phase} outside 1..=5")]
    InvalidPhase { index: usize, phase: u8 },

    #[error("question {index}: option {choice} has no attribute effect")]
    NoEffects { index: usize, choice: char },

    #[error("question {index}: unknown attribute {name}")]
    UnknownAttribute { index: usize, name: String },

    #[error("malformed catalog: {0}")]
    Malformed(String),
}

/// Unified error type for the game core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Character selection at game start was rejected.
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    /// No such player in the session.
    #[error("unknown player {0}")]
    UnknownPlayer(String),

    /// No such session in the store.
    #[error("unknown session {0}")]
    UnknownSession(SessionId),

    /// The submitted answer is not a key of the current question.
    #[error("invalid choice {0:?}")]
    InvalidChoice(String),

    /// The player has no questions left.
    #[error("player has finished all questions")]
    Finished,

    /// Someone other than the current turn holder tried to answer.
    #[error("{player} answered out of turn, expected {expected}")]
    OutOfTurn { player: String, expected: String },

    /// The player must report a mini-game result before answering again.
    #[error("{0} must play the mini-game first")]
    MinigamePending(String),

    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// A session snapshot could not be encoded or decoded.
    #[error("snapshot: {0}")]
    Snapshot(String),
}

impl GameError {
    /// Create an unknown player error.
    pub fn unknown_player(name: impl Into<String>) -> Self {
        Self::UnknownPlayer(name.into())
    }

    /// True when the host should show the same question again with no
    /// state change.
    #[must_use]
    pub fn is_recoverable_by_reprompt(&self) -> bool {
        matches!(self, Self::InvalidChoice(_))
    }
}

impl From<bincode::Error> for GameError {
    fn from(err: bincode::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}
