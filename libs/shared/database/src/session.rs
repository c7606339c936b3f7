use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use shared_models::auth::Session;

/// Server-side home of the session record, keyed by bearer token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: Session);

    /// Returns the live session for `token`; expired sessions read as absent.
    async fn get(&self, token: &str) -> Option<Session>;

    async fn remove(&self, token: &str) -> Option<Session>;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) {
        debug!("Storing session for user {}", session.user.id);
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_expired_at(now));
        if sessions.len() < before {
            debug!("Swept {} expired sessions", before - sessions.len());
        }

        sessions.insert(session.token.clone(), session);
    }

    async fn get(&self, token: &str) -> Option<Session> {
        let now = Utc::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                None => return None,
                Some(session) if !session.is_expired_at(now) => return Some(session.clone()),
                Some(_) => {}
            }
        }

        debug!("Evicting expired session");
        self.sessions.write().await.remove(token);
        None
    }

    async fn remove(&self, token: &str) -> Option<Session> {
        self.sessions.write().await.remove(token)
    }
}
