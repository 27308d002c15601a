use std::env;

use derive_more::Display;

use crate::utils::password::PasswordScheme;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";

#[derive(Debug, Display)]
pub enum ConfigError {
    #[display(fmt = "PORT must be a port number, got {:?}", _0)]
    InvalidPort(String),
    #[display(fmt = "PASSWORD_SCHEME must be `plain` or `bcrypt`, got {:?}", _0)]
    UnknownPasswordScheme(String),
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub password_scheme: PasswordScheme,
}

impl Settings {
    /// Read settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let password_scheme = match lookup("PASSWORD_SCHEME") {
            Some(raw) => raw.parse()?,
            None => PasswordScheme::default(),
        };

        Ok(Settings {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            password_scheme,
        })
    }
}
