use dotenvy::dotenv;
use log::{info, warn};
use std::env;
use url::Url;

/// Endpoint the users collection lives under.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Read on its own so the logger can be installed before the rest of the
    /// configuration is parsed.
    pub fn log_level_from_env() -> String {
        // Carica il file .env (opzionale)
        dotenv().ok();
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
    }

    pub fn from_env() -> Self {
        let log_level = Self::log_level_from_env();
        let base_url = env::var("USERS_API_BASE_URL").ok();
        Self::from_values(base_url.as_deref(), log_level)
    }

    /// An unparsable base URL falls back to [`DEFAULT_API_BASE_URL`] with a warning.
    pub fn from_values(base_url: Option<&str>, log_level: String) -> Self {
        let api_base_url = match base_url {
            Some(raw) => Url::parse(raw).unwrap_or_else(|e| {
                warn!("Invalid USERS_API_BASE_URL '{}': {}, using {}", raw, e, DEFAULT_API_BASE_URL);
                default_base_url()
            }),
            None => default_base_url(),
        };

        Self { api_base_url, log_level }
    }

    pub fn log_summary(&self) {
        info!("Client configuration loaded:");
        info!("  Users API: {}", self.api_base_url);
        info!("  Log level: {}", self.log_level);
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_API_BASE_URL).expect("default base URL is valid")
}
