//! End-of-game attribute profiles for charting.

use serde::Serialize;

use crate::catalog::{Attribute, AttributeTotals};
use crate::session::Player;

/// Chart data for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FinalProfile {
    pub player: String,
    /// Attribute keys in chart order.
    pub labels: Vec<&'static str>,
    /// Scores scaled so the highest is 100, aligned with `labels`.
    pub values: Vec<i32>,
    /// Touched attributes with their raw totals.
    pub raw: AttributeTotals,
}

impl FinalProfile {
    /// Normalize a player's totals.
    ///
    /// Each value is `round(v / max(1, highest) * 100)`, so a player with
    /// no positive score gets all zeros instead of a division by zero.
    #[must_use]
    pub fn compute(player: &Player) -> Self {
        let totals = player.attributes();
        let raw_values: Vec<i32> = Attribute::ALL.iter().map(|&a| totals.get(a)).collect();
        let denominator = f64::from(raw_values.iter().copied().max().unwrap_or(0).max(1));

        Self {
            player: player.name().to_string(),
            labels: Attribute::ALL.iter().map(|a| a.key()).collect(),
            values: raw_values
                .iter()
                .map(|&v| (f64::from(v) / denominator * 100.0).round() as i32)
                .collect(),
            raw: totals.clone(),
        }
    }
}
