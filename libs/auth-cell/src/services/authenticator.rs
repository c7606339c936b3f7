use async_trait::async_trait;
use chrono::Duration;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::{Credentials, Session, SessionUser};

use crate::models::AuthError;

/// Identity provider seam. Implementations only verify and mint; storing the
/// session is the caller's job.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Accepts exactly one configured email/password pair. Not a security boundary.
pub struct StaticCredentialAuthenticator {
    email: String,
    password: String,
    user: SessionUser,
    ttl: Duration,
}

impl StaticCredentialAuthenticator {
    pub fn new(email: &str, password: &str, user: SessionUser, ttl: Duration) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            user,
            ttl,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let user = SessionUser {
            id: "1".to_string(),
            email: config.admin_email.clone(),
            name: config.admin_name.clone(),
            role: "admin".to_string(),
        };

        Self::new(
            &config.admin_email,
            &config.admin_password,
            user,
            Duration::minutes(config.session_ttl_minutes),
        )
    }
}

#[async_trait]
impl Authenticator for StaticCredentialAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if credentials.email != self.email || credentials.password != self.password {
            debug!("Credential check failed for {}", credentials.email);
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Session::issue(self.user.clone(), self.ttl))
    }
}
