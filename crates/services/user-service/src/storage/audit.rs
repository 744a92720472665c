//! Reconstruction of domain objects from stored primitives.
//!
//! Every read revalidates records through the domain constructors. Records
//! that no longer pass are either dropped ([`ReadMode::Lenient`], the default)
//! or turn the whole read into an error ([`ReadMode::Strict`]). Either way
//! the rejected entries are reported in [`Reconstructed::rejected`].

use domain::{DomainResult, PASSWORD_MASK};

use super::error::StorageError;

/// One of the four persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Emails,
    Names,
    Passwords,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Emails => "emails",
            Collection::Names => "names",
            Collection::Passwords => "passwords",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How reads treat records that fail revalidation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// Drop invalid records silently
    #[default]
    Lenient,
    /// Fail on the first invalid record
    Strict,
}

/// A stored record that did not survive revalidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub collection: Collection,
    /// Position inside the collection
    pub index: usize,
    /// User id or stored value; passwords are masked
    pub key: String,
    /// Validation message of the first failing rule
    pub reason: String,
}

/// Outcome of rebuilding one collection.
#[derive(Debug, Clone)]
pub struct Reconstructed<T> {
    pub items: Vec<T>,
    pub rejected: Vec<RejectedRecord>,
}

impl<T> Reconstructed<T> {
    /// Rebuild every record, keeping the valid ones in their stored order.
    pub fn rebuild<R>(
        collection: Collection,
        records: &[R],
        key: impl Fn(&R) -> String,
        build: impl Fn(&R) -> DomainResult<T>,
    ) -> Self {
        let mut items = Vec::with_capacity(records.len());
        let mut rejected = Vec::new();

        for (index, record) in records.iter().enumerate() {
            match build(record) {
                Ok(item) => items.push(item),
                Err(err) => rejected.push(RejectedRecord {
                    collection,
                    index,
                    key: key(record),
                    reason: err.to_string(),
                }),
            }
        }

        Self { items, rejected }
    }

    /// Rebuild a collection of plain strings.
    pub fn rebuild_values(
        collection: Collection,
        values: &[String],
        build: impl Fn(&str) -> DomainResult<T>,
    ) -> Self {
        Self::rebuild(
            collection,
            values,
            |value| match collection {
                Collection::Passwords => PASSWORD_MASK.to_string(),
                _ => value.clone(),
            },
            |value| build(value.as_str()),
        )
    }

    /// True when nothing was rejected
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Valid items only, logging what was dropped.
    pub fn into_items(self) -> Vec<T> {
        for record in &self.rejected {
            tracing::debug!(
                collection = %record.collection,
                index = record.index,
                key = %record.key,
                reason = %record.reason,
                "dropping stored record that failed revalidation"
            );
        }
        self.items
    }

    /// Valid items, or an error naming the first rejected record.
    pub fn into_strict(self) -> Result<Vec<T>, StorageError> {
        match self.rejected.into_iter().next() {
            Some(record) => Err(record.into()),
            None => Ok(self.items),
        }
    }

    /// Apply a read mode.
    pub fn into_mode(self, mode: ReadMode) -> Result<Vec<T>, StorageError> {
        match mode {
            ReadMode::Lenient => Ok(self.into_items()),
            ReadMode::Strict => self.into_strict(),
        }
    }
}
