use std::sync::Arc;

use chrono::Duration;

use shared_config::AppConfig;
use shared_database::{InMemorySessionStore, SessionStore};
use shared_models::auth::{Session, SessionUser};

pub struct TestConfig {
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@clinic.ru".to_string(),
            admin_password: "password".to_string(),
        }
    }
}

impl TestConfig {
    /// Same as the demo defaults but without the artificial login delay.
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            admin_email: self.admin_email.clone(),
            admin_password: self.admin_password.clone(),
            login_delay_ms: 0,
            ..AppConfig::default()
        }
    }
}

pub struct TestUser;

impl TestUser {
    pub fn admin() -> SessionUser {
        Self::with_role("admin")
    }

    pub fn with_role(role: &str) -> SessionUser {
        SessionUser {
            id: "1".to_string(),
            email: "admin@clinic.ru".to_string(),
            name: "Администратор".to_string(),
            role: role.to_string(),
        }
    }
}

pub struct TestSessions;

impl TestSessions {
    /// A store holding one live admin session; returns the store and its token.
    pub async fn with_admin() -> (Arc<dyn SessionStore>, String) {
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let session = Session::issue(TestUser::admin(), Duration::minutes(30));
        let token = session.token.clone();
        store.insert(session).await;
        (store, token)
    }

    pub fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }
}
