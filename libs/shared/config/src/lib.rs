use std::env;
use std::str::FromStr;
use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ADMIN_EMAIL: &str = "admin@clinic.ru";
const DEFAULT_ADMIN_PASSWORD: &str = "password";
const DEFAULT_ADMIN_NAME: &str = "Администратор";
const DEFAULT_SESSION_TTL_MINUTES: i64 = 480;
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_name: String,
    pub session_ttl_minutes: i64,
    pub login_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            admin_name: DEFAULT_ADMIN_NAME.to_string(),
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| {
                warn!("BIND_ADDR not set, using {}", defaults.bind_addr);
                defaults.bind_addr.clone()
            }),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| {
                warn!("ADMIN_EMAIL not set, using demo account");
                defaults.admin_email.clone()
            }),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
                warn!("ADMIN_PASSWORD not set, using demo password");
                defaults.admin_password.clone()
            }),
            admin_name: env::var("ADMIN_NAME").unwrap_or_else(|_| defaults.admin_name.clone()),
            session_ttl_minutes: parse_var("SESSION_TTL_MINUTES", defaults.session_ttl_minutes),
            login_delay_ms: parse_var("LOGIN_DELAY_MS", defaults.login_delay_ms),
        };

        if !config.is_valid() {
            warn!("Application not fully configured - session TTL must be positive");
        }

        config
    }

    pub fn is_valid(&self) -> bool {
        !self.admin_email.is_empty()
            && !self.admin_password.is_empty()
            && self.session_ttl_minutes > 0
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", name, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a_valid_demo_config() {
        let config = AppConfig::default();

        assert!(config.is_valid());
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.session_ttl_minutes, 480);
        assert_eq!(config.login_delay_ms, 1000);
    }

    #[test]
    fn non_positive_ttl_is_invalid() {
        let config = AppConfig {
            session_ttl_minutes: 0,
            ..AppConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn parse_var_reads_or_falls_back() {
        env::set_var("MIS_CONFIG_TEST_DELAY", "250");
        assert_eq!(parse_var("MIS_CONFIG_TEST_DELAY", 7u64), 250);

        env::set_var("MIS_CONFIG_TEST_TTL", "soon");
        assert_eq!(parse_var("MIS_CONFIG_TEST_TTL", 15i64), 15);

        assert_eq!(parse_var("MIS_CONFIG_TEST_UNSET", 3u64), 3);
    }
}
