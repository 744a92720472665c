//! Shared configuration structures.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable naming the storage file
pub const STORAGE_PATH_ENV: &str = "DOMAIN_STORAGE_PATH";

/// Storage file used when nothing else is configured, relative to the working directory
pub const DEFAULT_STORAGE_FILE: &str = ".domain-storage.json";

/// JSON storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Location of the JSON document
    pub path: PathBuf,
}

impl StorageConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            path: env::var(STORAGE_PATH_ENV)
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_FILE)),
        }
    }

    /// Replace the storage location.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORAGE_FILE),
        }
    }
}
