//! Game engine: answer scoring, turn rotation, mini-game routing.
//!
//! The engine owns no session state. Every operation takes the session it
//! acts on, so the host decides where sessions live (see `SessionStore`).
//!
//! ## State machine (per player)
//!
//! ```text
//! InProgress --answer--> Critical    (life <= threshold)
//!            --answer--> InProgress  (questions left)
//!            --answer--> Finished    (no questions left)
//! Critical   --mini-game result--> InProgress
//! ```
//!
//! Checks run before any mutation, so a rejected call leaves the session
//! untouched.

use std::sync::Arc;

use super::policy::LifePolicy;
use super::profile::FinalProfile;
use super::route::{PlayerStatus, Route};
use crate::catalog::{Choice, Question, QuestionCatalog};
use crate::core::{GameConfig, GameError, PlayerId};
use crate::session::{AnswerRecord, GameSession, Player, TurnOrder};

/// Stateless rules over a fixed catalog and configuration.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    catalog: Arc<QuestionCatalog>,
}

impl GameEngine {
    /// Create an engine.
    #[must_use]
    pub fn new(config: GameConfig, catalog: Arc<QuestionCatalog>) -> Self {
        Self { config, catalog }
    }

    /// Reference configuration with the reference catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(GameConfig::default(), QuestionCatalog::standard())
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Number of questions every player answers (N).
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.catalog.len()
    }

    /// State machine position of a player.
    #[must_use]
    pub fn status(&self, player: &Player) -> PlayerStatus {
        if player.awaiting_minigame() {
            PlayerStatus::Critical
        } else if player.is_eligible(self.question_count()) {
            PlayerStatus::InProgress
        } else {
            PlayerStatus::Finished
        }
    }

    /// True when no player has questions left.
    #[must_use]
    pub fn is_complete(&self, session: &GameSession) -> bool {
        let n = self.question_count();
        session.players().all(|p| !p.is_eligible(n))
    }

    /// The question a player answers next.
    pub fn current_question(
        &self,
        session: &GameSession,
        name: &str,
    ) -> Result<&Question, GameError> {
        let player = session.player(name)?;
        self.catalog
            .get(player.progress())
            .ok_or(GameError::Finished)
    }

    /// Next turn order, or `None` when the game is complete.
    ///
    /// Pure: the session's order is not touched.
    #[must_use]
    pub fn next_turn(&self, session: &GameSession) -> Option<TurnOrder> {
        let n = self.question_count();
        session
            .turn_order()
            .next_turn(|id| session.player_at(id).is_eligible(n))
    }

    /// Apply `choice` to the current question of `name`.
    ///
    /// Errors, all without state change:
    /// - `UnknownPlayer`: no such player
    /// - `Finished`: no questions left
    /// - `MinigamePending`: a critical answer has no mini-game result yet
    /// - `OutOfTurn`: someone else holds the turn
    /// - `InvalidChoice`: `choice` is not `A` or `B`
    pub fn apply_answer(
        &self,
        session: &mut GameSession,
        name: &str,
        choice: &str,
    ) -> Result<Route, GameError> {
        let id = session.player_id(name)?;
        let n = self.question_count();
        let index = self.check_turn(session, id).map_err(|err| {
            tracing::warn!(player = name, error = %err, "answer rejected");
            err
        })?;

        let choice: Choice = choice.parse().map_err(|bad: String| {
            tracing::warn!(player = name, choice = bad.as_str(), "invalid choice ignored");
            GameError::InvalidChoice(bad)
        })?;
        let question = self.catalog.get(index).ok_or(GameError::Finished)?;
        let option = question.option(choice);

        let change = self.config.life_policy.life_change(option, &mut session.rng);
        let player = session.player_at_mut(id);
        player.adjust_life(change);
        player.apply_effects(option);
        player.advance(n);
        let life = player.life();

        tracing::debug!(player = name, question = index, choice = %choice, life, "answer applied");
        session.record_answer(AnswerRecord {
            player: id,
            question: index,
            choice,
            life_after: life,
        });

        if life <= self.config.critical_threshold {
            session.player_at_mut(id).set_awaiting_minigame(true);
            tracing::debug!(player = name, life, "critical life, routing to mini-game");
            return Ok(Route::Critical(name.to_string()));
        }

        Ok(self.advance_turn(session))
    }

    /// Add a mini-game score to a player's life and resume question flow.
    ///
    /// The score is trusted as reported; only the life clamp applies. After
    /// a critical detour the same player answers next, unless they have no
    /// questions left, in which case the turn rotates.
    pub fn apply_minigame_result(
        &self,
        session: &mut GameSession,
        name: &str,
        score: i64,
    ) -> Result<Route, GameError> {
        let id = session.player_id(name)?;
        let n = self.question_count();

        let player = session.player_at_mut(id);
        let was_awaiting = player.awaiting_minigame();
        player.adjust_life(score);
        player.set_awaiting_minigame(false);
        let eligible = player.is_eligible(n);

        tracing::debug!(player = name, score, life = player.life(), "mini-game result applied");

        if !was_awaiting {
            return Ok(match session.current_player() {
                Some(current) => Route::Continue(current.name().to_string()),
                None => Route::Finished,
            });
        }

        if eligible {
            session.set_current(Some(id));
            Ok(Route::Continue(name.to_string()))
        } else {
            Ok(self.advance_turn(session))
        }
    }

    /// Decode a client-held snapshot and check it against this engine's
    /// configuration and catalog.
    pub fn restore_session(&self, bytes: &[u8]) -> Result<GameSession, GameError> {
        GameSession::from_bytes(bytes, &self.config, self.question_count()).map_err(|err| {
            tracing::warn!(error = %err, "snapshot rejected");
            err
        })
    }

    /// Chart data for every player, in seat order.
    #[must_use]
    pub fn final_profiles(&self, session: &GameSession) -> Vec<FinalProfile> {
        session.players().map(FinalProfile::compute).collect()
    }

    /// Check that `id` may answer now; returns its progress index.
    fn check_turn(&self, session: &GameSession, id: PlayerId) -> Result<usize, GameError> {
        let player = session.player_at(id);

        if !player.is_eligible(self.question_count()) {
            return Err(GameError::Finished);
        }
        if player.awaiting_minigame() {
            return Err(GameError::MinigamePending(player.name().to_string()));
        }
        match session.current() {
            Some(current) if current == id => Ok(player.progress()),
            Some(current) => Err(GameError::OutOfTurn {
                player: player.name().to_string(),
                expected: session.player_at(current).name().to_string(),
            }),
            None => Err(GameError::Finished),
        }
    }

    /// Commit the next turn, or mark the game complete.
    fn advance_turn(&self, session: &mut GameSession) -> Route {
        match self.next_turn(session) {
            Some(order) => {
                let next = session.player_at(order.front()).name().to_string();
                session.set_turn_order(order);
                Route::Continue(next)
            }
            None => {
                session.set_current(None);
                tracing::info!(players = session.player_count(), "game complete");
                Route::Finished
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<LifePolicy> for GameEngine {
    fn from(policy: LifePolicy) -> Self {
        Self::new(
            GameConfig::default().with_life_policy(policy),
            QuestionCatalog::standard(),
        )
    }
}
