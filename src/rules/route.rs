//! Routing outcomes and per-player status.

use serde::{Deserialize, Serialize};

/// Where the host should send the players next.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Show `next` their current question.
    Continue(String),
    /// Send this player to the mini-game.
    Critical(String),
    /// Nobody has questions left: show the summary.
    Finished,
}

impl Route {
    /// Name of the player the route points at, if any.
    #[must_use]
    pub fn player(&self) -> Option<&str> {
        match self {
            Route::Continue(name) | Route::Critical(name) => Some(name),
            Route::Finished => None,
        }
    }
}

/// Per-player state machine position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    InProgress,
    /// Waiting for a mini-game result.
    Critical,
    /// Answered every question. Terminal.
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_player() {
        assert_eq!(Route::Continue("Ana".into()).player(), Some("Ana"));
        assert_eq!(Route::Critical("Bruno".into()).player(), Some("Bruno"));
        assert_eq!(Route::Finished.player(), None);
    }
}
