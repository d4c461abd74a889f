use common::model::user::{Role, UserProfile};
use std::env;

/// Runtime configuration, read once at startup from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// External AI matcher endpoint. Matching is disabled when unset.
    pub matcher_url: Option<String>,
    /// Session identity normally supplied by the external identity
    /// provider; stubbed from the environment in this deployment.
    pub session: UserProfile,
}

impl Config {
    pub fn from_env() -> Self {
        let role = match env::var("BLOODLINK_SESSION_ROLE").as_deref() {
            Ok("admin") => Role::Admin,
            _ => Role::User,
        };
        Self {
            host: env::var("BLOODLINK_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("BLOODLINK_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            matcher_url: env::var("BLOODLINK_MATCHER_URL").ok(),
            session: UserProfile {
                uid: env::var("BLOODLINK_SESSION_UID").unwrap_or_else(|_| "local-user".to_string()),
                email: env::var("BLOODLINK_SESSION_EMAIL").ok(),
                display_name: env::var("BLOODLINK_SESSION_NAME").ok(),
                role,
            },
        }
    }
}
