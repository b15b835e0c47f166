//! Per-player game record.
//!
//! Fields are private so that every mutation goes through a method that
//! keeps the life clamp and the progress bound.

use serde::{Deserialize, Serialize};

use crate::catalog::{AnswerOption, AttributeTotals};
use crate::core::LIFE_CAP;

/// One participant, identified by the chosen character name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    life: u32,
    attributes: AttributeTotals,
    progress: usize,
    awaiting_minigame: bool,
}

/// Clamp a signed life value into `[0, LIFE_CAP]`.
#[must_use]
pub fn clamp_life(value: i64) -> u32 {
    value.clamp(0, i64::from(LIFE_CAP)) as u32
}

impl Player {
    /// Create a player at the start of a game.
    pub fn new(name: impl Into<String>, starting_life: u32) -> Self {
        Self {
            name: name.into(),
            life: starting_life.min(LIFE_CAP),
            attributes: AttributeTotals::new(),
            progress: 0,
            awaiting_minigame: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn life(&self) -> u32 {
        self.life
    }

    #[must_use]
    pub fn attributes(&self) -> &AttributeTotals {
        &self.attributes
    }

    /// Index of the next question to answer.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// True between a critical answer and the mini-game result.
    #[must_use]
    pub fn awaiting_minigame(&self) -> bool {
        self.awaiting_minigame
    }

    /// True while questions remain for this player.
    #[must_use]
    pub fn is_eligible(&self, question_count: usize) -> bool {
        self.progress < question_count
    }

    /// Add a (possibly negative) amount to life, clamped. Any `i64` is
    /// accepted.
    pub fn adjust_life(&mut self, delta: i64) {
        self.life = clamp_life(i64::from(self.life).saturating_add(delta));
    }

    /// Overwrite life, clamped.
    pub fn set_life(&mut self, life: i64) {
        self.life = clamp_life(life);
    }

    /// Add an option's attribute effects. Life is handled by the caller's
    /// life policy.
    pub fn apply_effects(&mut self, option: &AnswerOption) {
        for &(attribute, delta) in &option.effects {
            self.attributes.add(attribute, delta);
        }
    }

    /// Move to the next question, never past `question_count`.
    pub fn advance(&mut self, question_count: usize) {
        self.progress = (self.progress + 1).min(question_count);
    }

    pub(crate) fn set_awaiting_minigame(&mut self, awaiting: bool) {
        self.awaiting_minigame = awaiting;
    }
}
