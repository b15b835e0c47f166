//! Questions, their two answer options, and the choice letter.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::attribute::Attribute;

/// Answer letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    /// The letter as a char.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Choice::A => 'A',
            Choice::B => 'B',
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Choice {
    type Err = String;

    /// Only the exact letters `A` and `B` are keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            other => Err(other.to_string()),
        }
    }
}

/// Narrative difficulty tier, 1 (easiest) to 5 (hardest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Phase(u8);

impl Phase {
    pub const FIRST: Phase = Phase(1);
    pub const LAST: Phase = Phase(5);

    /// Create a phase, or `None` outside 1..=5.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::FIRST.0 && value <= Self::LAST.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw tier.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Effects of picking one option.
///
/// SmallVec keeps the usual one or two effects inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Change to life. Never positive in the reference catalog.
    pub life_delta: i32,

    /// Attribute deltas, at least one.
    pub effects: SmallVec<[(Attribute, i32); 2]>,
}

impl AnswerOption {
    /// Create an option with a life delta and no effects yet.
    #[must_use]
    pub fn new(life_delta: i32) -> Self {
        Self {
            life_delta,
            effects: SmallVec::new(),
        }
    }

    /// Add an attribute effect.
    #[must_use]
    pub fn with_effect(mut self, attribute: Attribute, delta: i32) -> Self {
        self.effects.push((attribute, delta));
        self
    }
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub phase: Phase,
    pub prompt: String,
    pub a: AnswerOption,
    pub b: AnswerOption,
}

impl Question {
    /// Create a question.
    pub fn new(phase: Phase, prompt: impl Into<String>, a: AnswerOption, b: AnswerOption) -> Self {
        Self {
            phase,
            prompt: prompt.into(),
            a,
            b,
        }
    }

    /// Get the option for a choice.
    #[must_use]
    pub fn option(&self, choice: Choice) -> &AnswerOption {
        match choice {
            Choice::A => &self.a,
            Choice::B => &self.b,
        }
    }
}
