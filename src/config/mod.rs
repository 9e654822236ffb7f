//! Application configuration loaded from environment.

use std::net::SocketAddr;

use sqlx::mysql::MySqlConnectOptions;

/// Default landing page after a successful login.
pub const DEFAULT_REDIRECT_URL: &str = "/home.html";

/// MySQL connection settings (`DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`).
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Read the `DB_*` variables, falling back to [`DatabaseConfig::default`].
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let defaults = Self::default();
        let port = match std::env::var("DB_PORT") {
            Ok(p) => p.parse::<u16>().map_err(|_| ConfigLoadError::InvalidPort(p))?,
            Err(_) => defaults.port,
        };
        Ok(Self {
            host: env_or("DB_HOST", &defaults.host),
            port,
            user: env_or("DB_USER", &defaults.user),
            password: env_or("DB_PASSWORD", &defaults.password),
            name: env_or("DB_NAME", &defaults.name),
        })
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: "Root".to_string(),
            name: "textai_db".to_string(),
        }
    }
}

/// Application configuration loaded from `.env` and environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address, built from `HOST` and `PORT`.
    pub server_addr: SocketAddr,
    pub database: DatabaseConfig,
    /// Where the client is sent after a successful login.
    pub login_redirect_url: String,
    /// Log level: `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment. Call `dotenvy::dotenv().ok()` before this.
    ///
    /// `default_port` is used when `PORT` is unset; each binary has its own.
    pub fn from_env(default_port: u16) -> Result<Self, ConfigLoadError> {
        let host = env_or("HOST", "0.0.0.0");
        let port = match std::env::var("PORT") {
            Ok(p) => p.parse::<u16>().map_err(|_| ConfigLoadError::InvalidPort(p))?,
            Err(_) => default_port,
        };
        let server_addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigLoadError::InvalidServerAddr(host))?;

        let database = DatabaseConfig::from_env()?;

        let login_redirect_url = env_or("LOGIN_REDIRECT_URL", DEFAULT_REDIRECT_URL);
        let log_level = env_or("LOG_LEVEL", "info");

        Ok(Self {
            server_addr,
            database,
            login_redirect_url,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Invalid HOST: {0}")]
    InvalidServerAddr(String),
    #[error("Invalid port: {0}")]
    InvalidPort(String),
}
