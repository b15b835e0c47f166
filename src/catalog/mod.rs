//! Question catalog.
//!
//! - `Attribute`: closed set of personality traits
//! - `Question` / `AnswerOption` / `Choice`: one binary decision
//! - `QuestionCatalog`: validated, immutable list indexed by progress

pub mod attribute;
pub mod question;
pub mod registry;
mod standard;

pub use attribute::{Attribute, AttributeTotals};
pub use question::{AnswerOption, Choice, Phase, Question};
pub use registry::{QuestionCatalog, MIN_QUESTIONS};
pub use standard::STANDARD_LEN;
