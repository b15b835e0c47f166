//! Personality attributes and their per-player accumulation.
//!
//! The attribute set is closed: catalogs are validated against it at load
//! time, so the engine never meets an unknown key.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A personality trait accumulated across a playthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Courage,
    Wisdom,
    Empathy,
    Rationality,
    Greed,
    Creativity,
    Curiosity,
}

impl Attribute {
    /// All attributes, in final chart order.
    pub const ALL: [Attribute; 7] = [
        Attribute::Courage,
        Attribute::Wisdom,
        Attribute::Empathy,
        Attribute::Rationality,
        Attribute::Greed,
        Attribute::Creativity,
        Attribute::Curiosity,
    ];

    /// Stable lowercase key, used as chart label and in catalog files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Attribute::Courage => "courage",
            Attribute::Wisdom => "wisdom",
            Attribute::Empathy => "empathy",
            Attribute::Rationality => "rationality",
            Attribute::Greed => "greed",
            Attribute::Creativity => "creativity",
            Attribute::Curiosity => "curiosity",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Accumulated attribute scores for one player.
///
/// Absent keys read as 0. Only attributes that an answer touched are stored,
/// so a fresh player has an empty map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTotals {
    scores: FxHashMap<Attribute, i32>,
}

impl AttributeTotals {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a score, defaulting to 0.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> i32 {
        self.scores.get(&attribute).copied().unwrap_or(0)
    }

    /// Add a delta to a score.
    pub fn add(&mut self, attribute: Attribute, delta: i32) {
        let score = self.scores.entry(attribute).or_insert(0);
        *score = score.saturating_add(delta);
    }

    /// Check if no attribute has been touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of touched attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Touched attributes in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL
            .into_iter()
            .filter_map(|a| self.scores.get(&a).map(|v| (a, *v)))
    }
}
