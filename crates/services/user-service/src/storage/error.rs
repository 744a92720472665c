//! Storage errors.
//!
//! I/O and parse failures are logged and absorbed by [`super::JsonStorage`];
//! they only surface to callers through strict reads.

use std::path::PathBuf;

use common::AppError;
use thiserror::Error;

use super::audit::{Collection, RejectedRecord};

/// Errors raised while reading or writing the JSON document.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("could not access storage file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {collection} record #{index} ({key}): {reason}")]
    InvalidRecord {
        collection: Collection,
        index: usize,
        key: String,
        reason: String,
    },
}

impl From<RejectedRecord> for StorageError {
    fn from(record: RejectedRecord) -> Self {
        StorageError::InvalidRecord {
            collection: record.collection,
            index: record.index,
            key: record.key,
            reason: record.reason,
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::storage(err.to_string())
    }
}
