use std::net::{AddrParseError, SocketAddr};

use strum::{Display, EnumString};
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_MONGODB_DATABASE: &str = "rooms";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum StorageKind {
    Mongo,
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub storage: StorageKind,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Invalid ROOMS_BIND_ADDRESS '{value}': {source}")]
    BindAddress { value: String, source: AddrParseError },
    #[error("Unknown ROOMS_STORAGE '{0}', expected 'mongo' or 'memory'")]
    Storage(String),
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e.into());
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_address = get("ROOMS_BIND_ADDRESS", DEFAULT_BIND_ADDRESS);
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddress {
                value: bind_address.clone(),
                source,
            })?;

        let storage = get("ROOMS_STORAGE", &StorageKind::Mongo.to_string());
        let storage = storage
            .to_lowercase()
            .parse::<StorageKind>()
            .map_err(|_| ConfigError::Storage(storage.clone()))?;

        Ok(Self {
            bind_address,
            storage,
            mongodb_uri: get("MONGODB_URI", DEFAULT_MONGODB_URI),
            mongodb_database: get("MONGODB_DATABASE", DEFAULT_MONGODB_DATABASE),
            log_filter: get("ROOMS_LOG", DEFAULT_LOG_FILTER),
        })
    }
}
