use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use shared_config::AppConfig;
use shared_database::{InMemorySessionStore, SessionStore};
use shared_models::auth::{Credentials, Session};

use crate::models::AuthError;
use crate::services::authenticator::{Authenticator, StaticCredentialAuthenticator};

/// Login/logout on top of a pluggable authenticator and session store.
pub struct AuthService {
    authenticator: Arc<dyn Authenticator>,
    sessions: Arc<dyn SessionStore>,
    login_delay: Duration,
}

impl AuthService {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        sessions: Arc<dyn SessionStore>,
        login_delay: Duration,
    ) -> Self {
        Self {
            authenticator,
            sessions,
            login_delay,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(StaticCredentialAuthenticator::from_config(config)),
            Arc::new(InMemorySessionStore::new()),
            Duration::from_millis(config.login_delay_ms),
        )
    }

    pub fn sessions(&self) -> Arc<dyn SessionStore> {
        self.sessions.clone()
    }

    /// Waits the simulated latency, then authenticates. Nothing is stored on failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        let session = match self.authenticator.authenticate(credentials).await {
            Ok(session) => session,
            Err(err) => {
                warn!("Rejected login for {}", credentials.email);
                return Err(err);
            }
        };

        self.sessions.insert(session.clone()).await;
        info!("User {} logged in", session.user.email);
        Ok(session)
    }

    pub async fn logout(&self, token: &str) -> bool {
        match self.sessions.remove(token).await {
            Some(session) => {
                info!("User {} logged out", session.user.email);
                true
            }
            None => false,
        }
    }

    pub async fn current(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).await
    }
}
