//! Server configuration loaded from the environment (and `.env`, if present).

use anyhow::{Context, Result};

/// Runtime configuration for the backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Category applied to parsed questions when the request has none.
    pub default_category: String,
    /// Difficulty applied to parsed questions when the request has none.
    pub default_difficulty: String,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {value}"))?,
            None => 10,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid PORT: {value}"))?,
            None => 3000,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            default_category: lookup("DEFAULT_CATEGORY").unwrap_or_else(|| "Math".to_string()),
            default_difficulty: lookup("DEFAULT_DIFFICULTY")
                .unwrap_or_else(|| "Medium".to_string()),
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
