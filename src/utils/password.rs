use std::fmt;
use std::str::FromStr;

use actix_web::web;

use crate::config::ConfigError;
use crate::message::AppError;

/// How photographer passwords are stored and compared.
///
/// `Plain` keeps the stored value byte-for-byte equal to what was submitted.
/// It is the default for compatibility with existing data and is unsafe for
/// any real deployment; prefer `Bcrypt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    #[default]
    Plain,
    Bcrypt,
}

impl PasswordScheme {
    /// Value to persist for a submitted password.
    pub fn seal(&self, password: &str) -> Result<String, bcrypt::BcryptError> {
        match self {
            PasswordScheme::Plain => Ok(password.to_string()),
            PasswordScheme::Bcrypt => bcrypt::hash(password, bcrypt::DEFAULT_COST),
        }
    }

    pub fn verify(&self, supplied: &str, stored: &str) -> bool {
        match self {
            PasswordScheme::Plain => supplied == stored,
            // A stored value that is not a bcrypt hash never matches.
            PasswordScheme::Bcrypt => bcrypt::verify(supplied, stored).unwrap_or(false),
        }
    }

    /// `seal` for request handlers. Bcrypt runs on the blocking thread pool
    /// so it never stalls a worker.
    pub async fn seal_off_thread(self, password: String) -> Result<String, AppError> {
        match self {
            PasswordScheme::Plain => Ok(self.seal(&password)?),
            PasswordScheme::Bcrypt => Ok(web::block(move || self.seal(&password)).await??),
        }
    }

    /// `verify` for request handlers, see `seal_off_thread`.
    pub async fn verify_off_thread(
        self,
        supplied: String,
        stored: String,
    ) -> Result<bool, AppError> {
        match self {
            PasswordScheme::Plain => Ok(self.verify(&supplied, &stored)),
            PasswordScheme::Bcrypt => Ok(web::block(move || self.verify(&supplied, &stored)).await?),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordScheme::Plain => write!(f, "plain"),
            PasswordScheme::Bcrypt => write!(f, "bcrypt"),
        }
    }
}

impl FromStr for PasswordScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(PasswordScheme::Plain),
            "bcrypt" => Ok(PasswordScheme::Bcrypt),
            _ => Err(ConfigError::UnknownPasswordScheme(s.to_string())),
        }
    }
}
