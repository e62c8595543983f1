//! Per-conversation session storage.
//!
//! A session exists only while the conversation is active; a missing session means [`State::Start`].
//! Storage is injected into the handler so tests and other backends can replace the in-memory map.

use async_trait::async_trait;
use dbot_core::{Message, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::state::State;

/// Identifies a conversation: one user in one chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub chat_id: i64,
    pub user_id: i64,
}

impl SessionKey {
    pub fn new(chat_id: i64, user_id: i64) -> Self {
        Self { chat_id, user_id }
    }
}

impl From<&Message> for SessionKey {
    fn from(message: &Message) -> Self {
        Self::new(message.chat.id, message.user.id)
    }
}

/// Key-value scope holding the active state of each conversation.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &SessionKey) -> Result<Option<State>>;

    async fn set(&self, key: SessionKey, state: State) -> Result<()>;

    async fn remove(&self, key: &SessionKey) -> Result<()>;
}

/// In-memory [`SessionStore`]. Sessions are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionKey, State>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active conversations.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &SessionKey) -> Result<Option<State>> {
        Ok(self.sessions.read().await.get(key).cloned())
    }

    async fn set(&self, key: SessionKey, state: State) -> Result<()> {
        self.sessions.write().await.insert(key, state);
        Ok(())
    }

    async fn remove(&self, key: &SessionKey) -> Result<()> {
        self.sessions.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = InMemorySessionStore::new();
        let key = SessionKey::new(10, 20);

        assert!(store.get(&key).await.unwrap().is_none());

        store.set(key, State::StationsSelection).await.unwrap();
        assert_eq!(store.get(&key).await.unwrap(), Some(State::StationsSelection));
        assert_eq!(store.len().await, 1);

        store.remove(&key).await.unwrap();
        assert!(store.get(&key).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated_per_user_and_chat() {
        let store = InMemorySessionStore::new();
        let a = SessionKey::new(1, 100);
        let b = SessionKey::new(1, 200);
        let c = SessionKey::new(2, 100);

        store.set(a, State::StationsSelection).await.unwrap();
        store
            .set(
                b,
                State::FinalStationSelection {
                    stations: vec!["Забойщик".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(store.get(&a).await.unwrap(), Some(State::StationsSelection));
        assert!(matches!(
            store.get(&b).await.unwrap(),
            Some(State::FinalStationSelection { .. })
        ));
        assert!(store.get(&c).await.unwrap().is_none());
    }
}
