//! Runtime configuration, read from the environment at startup.

use crate::catalog::loader::DEFAULT_CATALOG_FILE;
use crate::error::{MovieLinksError, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ENV: &str = "MOVIE_LINKS_BIND";
pub const CATALOG_ENV: &str = "MOVIE_LINKS_FILE";
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub catalog_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup. Unset or blank variables fall back to
    /// the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind = var(BIND_ENV).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .map_err(|source| MovieLinksError::InvalidBind {
                value: bind.clone(),
                source,
            })?;

        let catalog_path = var(CATALOG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE));

        Ok(Self {
            bind_addr,
            catalog_path,
        })
    }
}
