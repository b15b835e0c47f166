//! The reference question set.
//!
//! Fifteen authored questions across five phases, padded with generated
//! "extra decision" entries up to [`STANDARD_LEN`].

use super::attribute::Attribute::{self, *};
use super::question::{AnswerOption, Phase, Question};

/// Number of questions in the reference catalog.
pub const STANDARD_LEN: usize = 22;

type Side = (i32, Attribute, i32);

#[rustfmt::skip]
const AUTHORED: [(u8, &str, Side, Side); 15] = [
    (1, "You find a worn-out bridge. A) run across  B) look for another way",
        (-8, Courage, 6), (-3, Wisdom, 6)),
    (1, "You hear a noise behind a door. A) open it  B) wait and watch",
        (-10, Courage, 8), (-4, Wisdom, 6)),
    (1, "A local asks for help with a load. A) help  B) keep going",
        (-5, Empathy, 7), (-7, Rationality, 5)),
    (2, "The rain gets heavier and the street floods. A) hurry across  B) find shelter",
        (-12, Courage, 8), (-4, Wisdom, 7)),
    (2, "You find a mysterious map. A) follow it  B) ignore it",
        (-6, Curiosity, 6), (-3, Rationality, 6)),
    (2, "A merchant offers a dubious shortcut. A) accept  B) refuse",
        (-14, Greed, 7), (-2, Wisdom, 8)),
    (3, "Someone dares you to race across a rooftop. A) accept  B) refuse",
        (-20, Courage, 12), (-5, Rationality, 8)),
    (3, "You see someone injured on the road. A) stop to help  B) stay on mission",
        (-6, Empathy, 10), (-18, Greed, 6)),
    (3, "The group wants to split the supplies. A) share fairly  B) keep them",
        (-3, Empathy, 6), (-7, Greed, 8)),
    (4, "A boss blocks the passage. A) negotiate  B) fight",
        (-8, Wisdom, 10), (-22, Courage, 15)),
    (4, "A treasure guarded by a trap. A) try to grab it  B) leave it",
        (-26, Greed, 14), (-6, Wisdom, 12)),
    (4, "A child asks to come along. A) accept  B) refuse",
        (-7, Empathy, 12), (-5, Rationality, 10)),
    (5, "The last crossroads: intuition or logic? A) intuition  B) logic",
        (-5, Creativity, 10), (-5, Rationality, 12)),
    (5, "An ally betrays you. A) forgive  B) retaliate",
        (-10, Empathy, 14), (-18, Courage, 10)),
    (5, "Finale: save the city or recover something personal? A) save  B) recover",
        (-20, Empathy, 18), (-15, Greed, 18)),
];

fn option((life, attribute, delta): Side) -> AnswerOption {
    AnswerOption::new(life).with_effect(attribute, delta)
}

fn phase(value: u8) -> Phase {
    Phase::new(value.clamp(Phase::FIRST.value(), Phase::LAST.value())).unwrap_or(Phase::LAST)
}

/// Generated filler entry for 1-based position `n`.
fn extra(n: usize) -> Question {
    let i = n as i32;
    Question::new(
        phase((1 + n / 4).min(5) as u8),
        format!("Extra decision #{n}: choose carefully. A) take the risk  B) hold steady"),
        AnswerOption::new(-6 - (i % 3) * 2).with_effect(Courage, 5 + i % 4),
        AnswerOption::new(-3 - (i % 2) * 2).with_effect(Wisdom, 5 + (i + 1) % 4),
    )
}

/// Build the reference questions in play order.
pub fn questions() -> Vec<Question> {
    let mut questions: Vec<Question> = AUTHORED
        .iter()
        .map(|&(p, prompt, a, b)| Question::new(phase(p), prompt, option(a), option(b)))
        .collect();

    while questions.len() < STANDARD_LEN {
        let n = questions.len() + 1;
        questions.push(extra(n));
    }
    questions
}
