//! JSON file backed storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use common::StorageConfig;
use domain::{Email, Name, Password, User};

use super::audit::{Collection, ReadMode, Reconstructed};
use super::error::StorageError;
use super::records::{StorageData, UserRecord};

/// Durable store for users and standalone value objects.
///
/// The document is read once in [`JsonStorage::open`] and rewritten in full
/// after every mutation. Mutations hold the lock for the whole
/// read-modify-write cycle. Write failures are logged and absorbed, so the
/// in-memory state may run ahead of the file until the next successful write.
#[derive(Debug)]
pub struct JsonStorage {
    path: PathBuf,
    data: Mutex<StorageData>,
}

impl JsonStorage {
    /// Open the storage file, starting empty when it is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let data = match Self::load(&path) {
            Ok(data) => {
                debug!(
                    path = %path.display(),
                    users = data.users.len(),
                    "storage loaded"
                );
                data
            }
            Err(e) => {
                warn!(error = %e, "could not load storage file, starting fresh");
                StorageData::default()
            }
        };

        Self {
            path,
            data: Mutex::new(data),
        }
    }

    /// Open the storage file named by the configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::open(config.path.clone())
    }

    /// Location of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Write path
    // =========================================================================

    /// Append a user. No deduplication happens at this layer.
    pub fn add_user(&self, user: &User) {
        let mut data = self.lock();
        data.users.push(UserRecord::from(user));
        self.persist(&data);
        info!(user_id = %user.id(), "user stored");
    }

    /// Store an email unless the same normalized value is already present.
    ///
    /// Returns `true` when the value was inserted.
    pub fn add_email(&self, email: &Email) -> bool {
        self.add_value(Collection::Emails, email.as_str())
    }

    /// Store a name unless it is already present.
    pub fn add_name(&self, name: &Name) -> bool {
        self.add_value(Collection::Names, name.as_str())
    }

    /// Store a password unless it is already present.
    pub fn add_password(&self, password: &Password) -> bool {
        self.add_value(Collection::Passwords, password.as_str())
    }

    /// Reset every collection and persist the empty document.
    pub fn clear(&self) {
        let mut data = self.lock();
        *data = StorageData::default();
        self.persist(&data);
        info!("storage cleared");
    }

    fn add_value(&self, collection: Collection, value: &str) -> bool {
        let mut data = self.lock();
        let values = match collection {
            Collection::Emails => &mut data.emails,
            Collection::Names => &mut data.names,
            Collection::Passwords => &mut data.passwords,
            Collection::Users => return false,
        };

        if values.iter().any(|v| v == value) {
            debug!(%collection, "value already stored");
            return false;
        }

        values.push(value.to_string());
        self.persist(&data);
        info!(%collection, "value stored");
        true
    }

    // =========================================================================
    // Read path
    // =========================================================================

    /// All users that still pass validation.
    pub fn all_users(&self) -> Vec<User> {
        self.audit_users().into_items()
    }

    /// All stored emails that still pass validation.
    pub fn all_emails(&self) -> Vec<Email> {
        self.audit_emails().into_items()
    }

    /// All stored names that still pass validation.
    pub fn all_names(&self) -> Vec<Name> {
        self.audit_names().into_items()
    }

    /// All stored passwords that still pass validation.
    pub fn all_passwords(&self) -> Vec<Password> {
        self.audit_passwords().into_items()
    }

    /// Users under an explicit read mode.
    pub fn users(&self, mode: ReadMode) -> Result<Vec<User>, StorageError> {
        self.audit_users().into_mode(mode)
    }

    pub fn emails(&self, mode: ReadMode) -> Result<Vec<Email>, StorageError> {
        self.audit_emails().into_mode(mode)
    }

    pub fn names(&self, mode: ReadMode) -> Result<Vec<Name>, StorageError> {
        self.audit_names().into_mode(mode)
    }

    pub fn passwords(&self, mode: ReadMode) -> Result<Vec<Password>, StorageError> {
        self.audit_passwords().into_mode(mode)
    }

    /// Rebuild users and report every record that was rejected.
    pub fn audit_users(&self) -> Reconstructed<User> {
        let data = self.lock();
        Reconstructed::rebuild(
            Collection::Users,
            &data.users,
            |record| record.id.clone(),
            UserRecord::to_user,
        )
    }

    pub fn audit_emails(&self) -> Reconstructed<Email> {
        let data = self.lock();
        Reconstructed::rebuild_values(Collection::Emails, &data.emails, Email::new)
    }

    pub fn audit_names(&self) -> Reconstructed<Name> {
        let data = self.lock();
        Reconstructed::rebuild_values(Collection::Names, &data.names, Name::new)
    }

    pub fn audit_passwords(&self) -> Reconstructed<Password> {
        let data = self.lock();
        Reconstructed::rebuild_values(Collection::Passwords, &data.passwords, Password::new)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn load(path: &Path) -> Result<StorageData, StorageError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StorageData::default()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    fn persist(&self, data: &StorageData) {
        if let Err(e) = self.write(data) {
            error!(error = %e, "error saving storage file");
        }
    }

    fn write(&self, data: &StorageData) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(data).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;

        let io_err = |source: std::io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        fs::write(&self.path, json).map_err(io_err)
    }

    // The data is plain values, so a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, StorageData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
