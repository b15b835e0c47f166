//! Question catalog: validated, immutable, indexed by player progress.
//!
//! The reference catalog is built once per process and shared through an
//! `Arc`. Custom catalogs can be loaded from JSON:
//!
//! ```json
//! [
//!   { "phase": 1, "prompt": "A worn bridge.",
//!     "a": { "life": -8, "effects": { "courage": 6 } },
//!     "b": { "life": -3, "effects": { "wisdom": 6 } } }
//! ]
//! ```

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::attribute::Attribute;
use super::question::{AnswerOption, Choice, Phase, Question};
use super::standard;
use crate::core::CatalogError;

/// Smallest catalog the engine accepts.
pub const MIN_QUESTIONS: usize = 20;

static STANDARD: Lazy<Arc<QuestionCatalog>> = Lazy::new(|| {
    Arc::new(QuestionCatalog {
        questions: standard::questions(),
    })
});

/// Ordered, validated list of questions.
///
/// ## Example
///
/// ```
/// use hotseat_quest::catalog::QuestionCatalog;
///
/// let catalog = QuestionCatalog::standard();
/// assert!(catalog.len() >= 20);
/// assert_eq!(catalog.get(0).unwrap().phase.value(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The process-wide reference catalog.
    #[must_use]
    pub fn standard() -> Arc<QuestionCatalog> {
        Arc::clone(&STANDARD)
    }

    /// Build a catalog, validating every entry.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.len() < MIN_QUESTIONS {
            return Err(CatalogError::TooFewQuestions {
                count: questions.len(),
                min: MIN_QUESTIONS,
            });
        }

        for (index, question) in questions.iter().enumerate() {
            for choice in [Choice::A, Choice::B] {
                if question.option(choice).effects.is_empty() {
                    return Err(CatalogError::NoEffects {
                        index,
                        choice: choice.letter(),
                    });
                }
            }
        }

        Ok(Self { questions })
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawQuestion> =
            serde_json::from_str(text).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        let questions = raw
            .into_iter()
            .enumerate()
            .map(|(index, q)| q.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_questions(questions)
    }

    /// Get the question at a progress index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions (N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate over questions in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[derive(Deserialize)]
struct RawQuestion {
    phase: u8,
    prompt: String,
    a: RawOption,
    b: RawOption,
}

#[derive(Deserialize)]
struct RawOption {
    #[serde(default)]
    life: i32,
    effects: BTreeMap<String, i32>,
}

impl RawQuestion {
    fn validate(self, index: usize) -> Result<Question, CatalogError> {
        let phase = Phase::new(self.phase).ok_or(CatalogError::InvalidPhase {
            index,
            phase: self.phase,
        })?;

        Ok(Question::new(
            phase,
            self.prompt,
            self.a.validate(index)?,
            self.b.validate(index)?,
        ))
    }
}

impl RawOption {
    fn validate(self, index: usize) -> Result<AnswerOption, CatalogError> {
        self.effects
            .into_iter()
            .try_fold(AnswerOption::new(self.life), |option, (name, delta)| {
                let attribute = name
                    .parse::<Attribute>()
                    .map_err(|name| CatalogError::UnknownAttribute { index, name })?;
                Ok(option.with_effect(attribute, delta))
            })
    }
}
