//! How an answer changes life.

use serde::{Deserialize, Serialize};

use crate::catalog::AnswerOption;
use crate::core::GameRng;

/// Life rule applied to every answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LifePolicy {
    /// Apply the option's `life_delta`.
    #[default]
    Delta,

    /// Ignore `life_delta`; lose `loss` life with probability `percent`%.
    Chance { percent: u8, loss: u32 },
}

impl LifePolicy {
    /// Life change for picking `option`. Draws from `rng` only under
    /// `Chance`.
    pub fn life_change(&self, option: &AnswerOption, rng: &mut GameRng) -> i64 {
        match *self {
            LifePolicy::Delta => i64::from(option.life_delta),
            LifePolicy::Chance { percent, loss } => {
                if rng.roll_percent(percent) {
                    -i64::from(loss)
                } else {
                    0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Attribute;

    fn option() -> AnswerOption {
        AnswerOption::new(-12).with_effect(Attribute::Courage, 8)
    }

    #[test]
    fn test_delta_uses_option() {
        let mut rng = GameRng::new(1);
        assert_eq!(LifePolicy::Delta.life_change(&option(), &mut rng), -12);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = GameRng::new(1);
        let always = LifePolicy::Chance { percent: 100, loss: 1 };
        let never = LifePolicy::Chance { percent: 0, loss: 1 };

        for _ in 0..20 {
            assert_eq!(always.life_change(&option(), &mut rng), -1);
            assert_eq!(never.life_change(&option(), &mut rng), 0);
        }
    }

    #[test]
    fn test_chance_is_seeded() {
        let policy = LifePolicy::Chance { percent: 40, loss: 3 };
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);

        let run_a: Vec<_> = (0..30).map(|_| policy.life_change(&option(), &mut a)).collect();
        let run_b: Vec<_> = (0..30).map(|_| policy.life_change(&option(), &mut b)).collect();
        assert_eq!(run_a, run_b);
        assert!(run_a.iter().all(|&c| c == 0 || c == -3));
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&LifePolicy::Chance { percent: 30, loss: 1 }).unwrap();
        assert_eq!(json, r#"{"kind":"chance","percent":30,"loss":1}"#);

        let parsed: LifePolicy = serde_json::from_str(r#"{"kind":"delta"}"#).unwrap();
        assert_eq!(parsed, LifePolicy::Delta);
    }
}
