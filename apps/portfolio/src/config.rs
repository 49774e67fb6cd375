use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub site_owner: String,
    pub contact_email: String,
    /// External submission endpoint. `None` switches the contact form to the mailto fallback.
    pub contact_endpoint: Option<String>,
    pub contact_timeout_secs: u64,
    pub booking_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            content_dir: PathBuf::from(env_or("CONTENT_DIR", "content")),
            static_dir: PathBuf::from(env_or("STATIC_DIR", "public")),
            site_owner: env_or("SITE_OWNER", "Sirisha Ganji"),
            contact_email: env_or("CONTACT_EMAIL", "sirishaganji@gmail.com"),
            contact_endpoint: optional_env("CONTACT_ENDPOINT"),
            contact_timeout_secs: env_or("CONTACT_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("CONTACT_TIMEOUT_SECS must be a whole number of seconds")?,
            booking_url: optional_env("BOOKING_URL"),
        })
    }
}

#[cfg(test)]
impl Config {
    /// Defaults without touching the process environment.
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            content_dir: PathBuf::from("does-not-exist"),
            static_dir: PathBuf::from("does-not-exist"),
            site_owner: "Sirisha Ganji".to_string(),
            contact_email: "sirishaganji@gmail.com".to_string(),
            contact_endpoint: None,
            contact_timeout_secs: 5,
            booking_url: None,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
