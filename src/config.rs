use std::env;

use anyhow::Context;

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/favorites.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("APP_PORT").or_else(|| lookup("PORT")) {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("invalid port `{p}`"))?,
            None => 3000,
        };
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(n) => n
                .parse::<u32>()
                .with_context(|| format!("invalid DB_MAX_CONNECTIONS `{n}`"))?,
            None => 10,
        };
        Ok(Self {
            port,
            database_url,
            host,
            db_max_connections,
        })
    }
}
