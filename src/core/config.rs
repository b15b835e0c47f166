//! Game configuration.
//!
//! The host configures the engine at startup with a `GameConfig`:
//! - the character roster players may choose from
//! - seat limit, starting life and the critical-life threshold
//! - the life policy applied to each answer
//!
//! `GameConfig::default()` reproduces the reference game.

use serde::{Deserialize, Serialize};

use crate::rules::LifePolicy;

/// Maximum number of players in one session.
pub const MAX_PLAYERS: usize = 4;

/// Life each player starts a session with.
pub const STARTING_LIFE: u32 = 100;

/// Life at or below which a player is routed to the mini-game.
pub const CRITICAL_THRESHOLD: u32 = 20;

/// Upper bound of a player's life. The lower bound is 0.
pub const LIFE_CAP: u32 = 9999;

/// Characters available for selection in the reference game.
pub const CHARACTERS: [&str; 6] = ["Ana", "Bruno", "Iara", "Lucas", "Mariana", "Thiago"];

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Characters that may be selected when a session starts.
    pub roster: Vec<String>,

    /// Maximum number of selected characters.
    pub max_players: usize,

    /// Life assigned to every player at session start.
    pub starting_life: u32,

    /// Life at or below which an answer routes to the mini-game.
    pub critical_threshold: u32,

    /// How an answer changes life.
    pub life_policy: LifePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roster: CHARACTERS.iter().map(|c| (*c).to_string()).collect(),
            max_players: MAX_PLAYERS,
            starting_life: STARTING_LIFE,
            critical_threshold: CRITICAL_THRESHOLD,
            life_policy: LifePolicy::Delta,
        }
    }
}

impl GameConfig {
    /// Create the reference configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the character roster.
    #[must_use]
    pub fn with_roster<I, S>(mut self, roster: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roster = roster.into_iter().map(Into::into).collect();
        self
    }

    /// Set the seat limit.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        assert!(max > 0, "Must allow at least 1 player");
        assert!(max <= 255, "At most 255 players supported");
        self.max_players = max;
        self
    }

    /// Set the starting life, clamped to [`LIFE_CAP`].
    #[must_use]
    pub fn with_starting_life(mut self, life: u32) -> Self {
        self.starting_life = life.min(LIFE_CAP);
        self
    }

    /// Set the critical-life threshold.
    #[must_use]
    pub fn with_critical_threshold(mut self, threshold: u32) -> Self {
        self.critical_threshold = threshold;
        self
    }

    /// Set the life policy.
    #[must_use]
    pub fn with_life_policy(mut self, policy: LifePolicy) -> Self {
        self.life_policy = policy;
        self
    }

    /// Check if a character name belongs to the roster.
    #[must_use]
    pub fn is_known_character(&self, name: &str) -> bool {
        self.roster.iter().any(|c| c == name)
    }
}
