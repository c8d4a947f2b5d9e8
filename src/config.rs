use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_DATABASE: &str = "company";
pub const DEFAULT_COLLECTION: &str = "employee";
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub server_address: String,
    pub connect_timeout_seconds: u64,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so parsing can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_uri = lookup("MONGO_URI")
            .filter(|s| !s.trim().is_empty())
            .context("MONGO_URI must be set (environment or .env file)")?;

        Ok(Config {
            mongo_uri,
            database_name: lookup("MONGO_DATABASE")
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            collection_name: lookup("MONGO_COLLECTION")
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            server_address: lookup("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            connect_timeout_seconds: lookup("CONNECT_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECONDS),
        })
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}
