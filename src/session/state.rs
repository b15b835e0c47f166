//! Game session: the aggregate root of one game.
//!
//! ## GameSession
//!
//! - Players in seat order (1 to `max_players`)
//! - Turn order (rotating view of the seats) and the current turn holder
//! - Per-session RNG
//! - Answer history
//!
//! Uses `im::Vector` for the history so that cloning a session for a
//! snapshot stays cheap as the game grows.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::turn::TurnOrder;
use crate::catalog::Choice;
use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap, SelectionError, LIFE_CAP};

/// One applied answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub player: PlayerId,
    /// Catalog index that was answered.
    pub question: usize,
    pub choice: Choice,
    pub life_after: u32,
}

/// State of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    players: PlayerMap<Player>,
    order: TurnOrder,
    current: Option<PlayerId>,
    pub(crate) rng: GameRng,
    history: Vector<AnswerRecord>,
}

/// Check a character selection against the configuration.
pub fn validate_selection<S: AsRef<str>>(
    config: &GameConfig,
    characters: &[S],
) -> Result<(), SelectionError> {
    if characters.is_empty() {
        return Err(SelectionError::Empty);
    }
    if characters.len() > config.max_players {
        return Err(SelectionError::TooMany {
            count: characters.len(),
            max: config.max_players,
        });
    }

    for (i, name) in characters.iter().enumerate() {
        let name = name.as_ref();
        if !config.is_known_character(name) {
            return Err(SelectionError::UnknownCharacter(name.to_string()));
        }
        if characters[..i].iter().any(|n| n.as_ref() == name) {
            return Err(SelectionError::Duplicate(name.to_string()));
        }
    }
    Ok(())
}

impl GameSession {
    /// Start a game with one player per selected character.
    ///
    /// Every player gets `starting_life`, no attributes and progress 0; the
    /// first selected character holds the first turn.
    pub fn new<S: AsRef<str>>(
        config: &GameConfig,
        characters: &[S],
        seed: u64,
    ) -> Result<Self, GameError> {
        validate_selection(config, characters)?;

        let players = PlayerMap::from_vec(
            characters
                .iter()
                .map(|c| Player::new(c.as_ref(), config.starting_life))
                .collect(),
        );
        let order = TurnOrder::new(players.player_count());

        Ok(Self {
            current: Some(order.front()),
            players,
            order,
            rng: GameRng::new(seed),
            history: Vector::new(),
        })
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// All players in seat order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Resolve a character name to its seat.
    pub fn player_id(&self, name: &str) -> Result<PlayerId, GameError> {
        self.players
            .position(|p| p.name() == name)
            .ok_or_else(|| GameError::unknown_player(name))
    }

    /// Borrow a player by name.
    pub fn player(&self, name: &str) -> Result<&Player, GameError> {
        let id = self.player_id(name)?;
        Ok(&self.players[id])
    }

    /// Snapshot of a player by name.
    pub fn get_player(&self, name: &str) -> Result<Player, GameError> {
        self.player(name).cloned()
    }

    /// Borrow a player by seat.
    #[must_use]
    pub fn player_at(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub(crate) fn player_at_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Apply a mutation to one player and keep the result.
    pub fn update_player<R>(
        &mut self,
        name: &str,
        mutator: impl FnOnce(&mut Player) -> R,
    ) -> Result<R, GameError> {
        let id = self.player_id(name)?;
        Ok(mutator(&mut self.players[id]))
    }

    /// The rotating turn order.
    #[must_use]
    pub fn turn_order(&self) -> &TurnOrder {
        &self.order
    }

    pub(crate) fn set_turn_order(&mut self, order: TurnOrder) {
        self.current = Some(order.front());
        self.order = order;
    }

    /// Seat holding the turn, or `None` once the game is complete.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        self.current
    }

    /// Player holding the turn.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current.map(|id| &self.players[id])
    }

    pub(crate) fn set_current(&mut self, current: Option<PlayerId>) {
        self.current = current;
    }

    /// Applied answers, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<AnswerRecord> {
        &self.history
    }

    pub(crate) fn record_answer(&mut self, record: AnswerRecord) {
        self.history.push_back(record);
    }

    /// Encode the whole session.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a session produced by [`GameSession::to_bytes`].
    ///
    /// The bytes may come from an untrusted client, so the decoded session
    /// is checked against the limits it will be played under: `config` and
    /// a catalog of `question_count` questions. Any inconsistency is a
    /// `Snapshot` error.
    pub fn from_bytes(
        bytes: &[u8],
        config: &GameConfig,
        question_count: usize,
    ) -> Result<Self, GameError> {
        let session: Self = bincode::deserialize(bytes)?;
        session.check_consistency(config, question_count)?;
        Ok(session)
    }

    /// Every seat index reachable from the session must be in range.
    fn check_consistency(
        &self,
        config: &GameConfig,
        question_count: usize,
    ) -> Result<(), GameError> {
        let count = self.players.player_count();
        if count == 0 || count > config.max_players {
            return Err(GameError::Snapshot(format!(
                "{count} players, expected 1 to {}",
                config.max_players
            )));
        }
        if !self.order.covers_seats(count) {
            return Err(GameError::Snapshot("turn order does not match the seats".to_string()));
        }
        if let Some(current) = self.current.filter(|id| id.index() >= count) {
            return Err(GameError::Snapshot(format!("turn held by missing {current}")));
        }

        for (id, player) in self.players.iter() {
            if player.life() > LIFE_CAP {
                return Err(GameError::Snapshot(format!("{id}: life {} above cap", player.life())));
            }
            if player.progress() > question_count {
                return Err(GameError::Snapshot(format!(
                    "{id}: progress {} past {question_count} questions",
                    player.progress()
                )));
            }
        }

        if let Some(record) = self
            .history
            .iter()
            .find(|r| r.player.index() >= count || r.question >= question_count)
        {
            return Err(GameError::Snapshot(format!(
                "history entry for {} at question {} out of range",
                record.player, record.question
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(&config(), &["Ana", "Bruno"], 42).unwrap();

        assert_eq!(session.player_count(), 2);
        for p in session.players() {
            assert_eq!(p.life(), 100);
            assert_eq!(p.progress(), 0);
            assert!(p.attributes().is_empty());
        }
        assert_eq!(session.current_player().unwrap().name(), "Ana");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_selection_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(
            validate_selection(&config(), &empty),
            Err(SelectionError::Empty)
        );
        assert_eq!(
            validate_selection(&config(), &["Ana", "Ana"]),
            Err(SelectionError::Duplicate("Ana".into()))
        );
        assert_eq!(
            validate_selection(&config(), &["Ana", "Gandalf"]),
            Err(SelectionError::UnknownCharacter("Gandalf".into()))
        );
        assert_eq!(
            validate_selection(&config(), &["Ana", "Bruno", "Iara", "Lucas", "Thiago"]),
            Err(SelectionError::TooMany { count: 5, max: 4 })
        );
        assert!(validate_selection(&config(), &["Ana", "Bruno", "Iara", "Lucas"]).is_ok());
    }

    #[test]
    fn test_unknown_player() {
        let session = GameSession::new(&config(), &["Ana"], 42).unwrap();

        assert_eq!(
            session.get_player("Bruno"),
            Err(GameError::UnknownPlayer("Bruno".into()))
        );
    }

    #[test]
    fn test_update_player_persists() {
        let mut session = GameSession::new(&config(), &["Ana", "Bruno"], 42).unwrap();

        let life = session
            .update_player("Bruno", |p| {
                p.adjust_life(-30);
                p.life()
            })
            .unwrap();

        assert_eq!(life, 70);
        assert_eq!(session.get_player("Bruno").unwrap().life(), 70);
        assert_eq!(session.get_player("Ana").unwrap().life(), 100);
    }

    #[test]
    fn test_snapshot_bytes() {
        let mut session = GameSession::new(&config(), &["Iara", "Lucas"], 7).unwrap();
        session.update_player("Lucas", |p| p.advance(22)).unwrap();

        let bytes = session.to_bytes().unwrap();
        let restored = GameSession::from_bytes(&bytes, &config(), 22).unwrap();

        assert_eq!(restored.get_player("Lucas").unwrap().progress(), 1);
        assert_eq!(restored.turn_order(), session.turn_order());
        assert_eq!(restored.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        let err = GameSession::from_bytes(&[1, 2, 3], &config(), 22).unwrap_err();
        assert!(matches!(err, GameError::Snapshot(_)));
    }

    fn rejected(session: &GameSession, config: &GameConfig) -> bool {
        let bytes = session.to_bytes().unwrap();
        matches!(GameSession::from_bytes(&bytes, config, 22), Err(GameError::Snapshot(_)))
    }

    #[test]
    fn test_snapshot_rejects_missing_turn_holder() {
        let mut session = GameSession::new(&config(), &["Ana", "Bruno"], 7).unwrap();
        session.current = Some(PlayerId::new(9));

        assert!(rejected(&session, &config()));
    }

    #[test]
    fn test_snapshot_rejects_broken_turn_order() {
        let mut session = GameSession::new(&config(), &["Ana", "Bruno"], 7).unwrap();
        session.order = TurnOrder::new(3);
        assert!(rejected(&session, &config()));

        let mut session = GameSession::new(&config(), &["Ana", "Bruno", "Iara"], 7).unwrap();
        session.players = PlayerMap::from_vec(vec![Player::new("Ana", 100)]);
        assert!(rejected(&session, &config()));
    }

    #[test]
    fn test_snapshot_rejects_too_many_players() {
        let session = GameSession::new(&config(), &["Ana", "Bruno"], 7).unwrap();

        assert!(rejected(&session, &config().with_max_players(1)));
    }

    #[test]
    fn test_snapshot_rejects_progress_past_catalog() {
        let mut session = GameSession::new(&config(), &["Ana"], 7).unwrap();
        session
            .update_player("Ana", |p| {
                for _ in 0..30 {
                    p.advance(100);
                }
            })
            .unwrap();

        assert!(rejected(&session, &config()));
    }

    #[test]
    fn test_snapshot_rejects_life_above_cap() {
        let session = GameSession::new(&config(), &["Ana"], 7).unwrap();
        let mut bytes = session.to_bytes().unwrap();

        // Seat count (u64), name length (u64), "Ana", then life (u32 LE).
        let life_at = 8 + 8 + 3;
        assert_eq!(&bytes[life_at..life_at + 4], &100u32.to_le_bytes());
        bytes[life_at..life_at + 4].copy_from_slice(&20_000u32.to_le_bytes());

        assert!(matches!(
            GameSession::from_bytes(&bytes, &config(), 22),
            Err(GameError::Snapshot(_))
        ));
    }

    #[test]
    fn test_snapshot_rejects_stray_history() {
        let mut session = GameSession::new(&config(), &["Ana"], 7).unwrap();
        session.record_answer(AnswerRecord {
            player: PlayerId::new(3),
            question: 0,
            choice: Choice::A,
            life_after: 92,
        });

        assert!(rejected(&session, &config()));
    }
}
