use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),
}

/// Named configuration profiles selected by SWATCHBOOK_ENV
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Database file used when DATABASE_PATH is not set
    pub fn default_database_path(&self) -> PathBuf {
        match self {
            Environment::Development => PathBuf::from("swatchbook-dev.db"),
            Environment::Test => PathBuf::from("swatchbook-test.db"),
            Environment::Production => PathBuf::from("swatchbook.db"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub environment: Environment,
    pub port: u16,
    pub database_path: PathBuf,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("SWATCHBOOK_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse::<Environment>()?;

        let port_str = env::var("PORT").unwrap_or_else(|_| "3001".to_string());

        let port = port_str.parse::<u16>()?;

        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| environment.default_database_path());

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        Ok(Config {
            environment,
            port,
            database_path,
            cors_origin,
        })
    }
}
