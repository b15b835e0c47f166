//! Session store: all active games, keyed by session id.
//!
//! Each entry is mutated under its `DashMap` write guard, so requests
//! against the same session are serialized while distinct sessions proceed
//! independently.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::player::Player;
use super::state::GameSession;
use crate::core::{GameConfig, GameError};

/// Identifier of one game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-memory store of game sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    config: GameConfig,
    sessions: DashMap<SessionId, GameSession>,
}

impl SessionStore {
    /// Create an empty store for games using `config`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            sessions: DashMap::new(),
        }
    }

    /// Configuration used for new sessions.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new game and return its id.
    pub fn init_session<S: AsRef<str>>(&self, characters: &[S]) -> Result<SessionId, GameError> {
        let session = GameSession::new(&self.config, characters, rand::random())?;
        let id = SessionId::new();

        tracing::info!(
            session = %id,
            players = session.player_count(),
            "session started"
        );
        self.sessions.insert(id, session);
        Ok(id)
    }

    /// Start a new game under an existing id, discarding the previous one.
    ///
    /// On an invalid selection the previous game is kept.
    pub fn reset_session<S: AsRef<str>>(
        &self,
        id: SessionId,
        characters: &[S],
    ) -> Result<(), GameError> {
        let session = GameSession::new(&self.config, characters, rand::random())?;
        let mut entry = self
            .sessions
            .get_mut(&id)
            .ok_or(GameError::UnknownSession(id))?;

        tracing::info!(session = %id, players = session.player_count(), "session reset");
        *entry = session;
        Ok(())
    }

    /// Run `f` with exclusive access to one session.
    ///
    /// `f` runs while the write lock of the session's shard is held. It must
    /// not call back into this store: touching the same session, or another
    /// session that shares the shard, deadlocks.
    pub fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSession) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let mut entry = self
            .sessions
            .get_mut(&id)
            .ok_or(GameError::UnknownSession(id))?;
        f(entry.value_mut())
    }

    /// Snapshot of one player.
    pub fn get_player(&self, id: SessionId, name: &str) -> Result<Player, GameError> {
        let entry = self
            .sessions
            .get(&id)
            .ok_or(GameError::UnknownSession(id))?;
        entry.get_player(name)
    }

    /// Apply a mutation to one player under the session's lock.
    pub fn update_player<R>(
        &self,
        id: SessionId,
        name: &str,
        mutator: impl FnOnce(&mut Player) -> R,
    ) -> Result<R, GameError> {
        self.with_session(id, |session| session.update_player(name, mutator))
    }

    /// Clone a whole session.
    pub fn snapshot(&self, id: SessionId) -> Result<GameSession, GameError> {
        self.sessions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(GameError::UnknownSession(id))
    }

    /// Drop a session. Returns true if it existed.
    pub fn remove(&self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_and_get() {
        let store = SessionStore::default();
        let id = store.init_session(&["Ana", "Bruno"]).unwrap();

        assert_eq!(store.len(), 1);
        let ana = store.get_player(id, "Ana").unwrap();
        assert_eq!(ana.life(), 100);
        assert_eq!(ana.progress(), 0);
    }

    #[test]
    fn test_invalid_selection_stores_nothing() {
        let store = SessionStore::default();

        assert!(store.init_session(&["Ana", "Ana"]).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_session() {
        let store = SessionStore::default();
        let id = SessionId::new();

        assert_eq!(store.get_player(id, "Ana"), Err(GameError::UnknownSession(id)));
        assert!(!store.remove(id));
    }

    #[test]
    fn test_reset_replaces_players() {
        let store = SessionStore::default();
        let id = store.init_session(&["Ana"]).unwrap();
        store.update_player(id, "Ana", |p| p.adjust_life(-50)).unwrap();

        store.reset_session(id, &["Iara", "Thiago"]).unwrap();

        assert_eq!(
            store.get_player(id, "Ana"),
            Err(GameError::UnknownPlayer("Ana".into()))
        );
        assert_eq!(store.get_player(id, "Thiago").unwrap().life(), 100);
    }

    #[test]
    fn test_failed_reset_keeps_game() {
        let store = SessionStore::default();
        let id = store.init_session(&["Ana"]).unwrap();

        assert!(store.reset_session(id, &["Nobody"]).is_err());
        assert!(store.get_player(id, "Ana").is_ok());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = SessionStore::default();
        let id = store.init_session(&["Lucas"]).unwrap();

        let before = store.snapshot(id).unwrap();
        store.update_player(id, "Lucas", |p| p.adjust_life(-1)).unwrap();

        assert_eq!(before.get_player("Lucas").unwrap().life(), 100);
        assert_eq!(store.get_player(id, "Lucas").unwrap().life(), 99);
    }
}
