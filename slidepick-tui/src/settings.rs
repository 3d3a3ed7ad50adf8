//! Typed key-value settings stored as one file per key.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::warn;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(bincode::Error),
    #[error("deserialization error: {0}")]
    Deserialization(bincode::Error),
    #[error("invalid settings key: {0:?}")]
    InvalidKey(String),
}

/// Backend trait for settings storage.
///
/// Implementations handle raw byte storage and retrieval; the
/// `SettingsProvider` wraps this with typed serialization.
pub trait SettingsBackend {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError>;
    fn set_bytes(&self, key: &str, value: &[u8]) -> Result<(), SettingsError>;
    fn delete(&self, key: &str) -> Result<(), SettingsError>;
}

/// Stores each key as `<dir>/<key>.bin`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (and create if needed) a settings directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> Result<PathBuf, SettingsError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid || key.starts_with('.') {
            return Err(SettingsError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.bin")))
    }
}

impl SettingsBackend for FileBackend {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        match fs::read(self.path(key)?) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_bytes(&self, key: &str, value: &[u8]) -> Result<(), SettingsError> {
        let path = self.path(key)?;
        let tmp = path.with_extension("bin.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SettingsError> {
        match fs::remove_file(self.path(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Typed settings provider.
///
/// Wraps a `SettingsBackend` with typed serialization via bincode.
pub struct SettingsProvider {
    backend: Box<dyn SettingsBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Get a typed value for a key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_bytes(key)? {
            Some(bytes) => Ok(Some(
                bincode::deserialize(&bytes).map_err(SettingsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, returning a default if not found.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, SettingsError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Like `get_or`, but a stored value that no longer decodes is deleted
    /// and `default` is returned in its place.
    pub fn get_or_discard<T: DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, SettingsError> {
        match self.get(key) {
            Ok(value) => Ok(value.unwrap_or(default)),
            Err(SettingsError::Deserialization(e)) => {
                warn!("discarding unreadable setting {key:?}: {e}");
                self.delete(key)?;
                Ok(default)
            }
            Err(e) => Err(e),
        }
    }

    /// Set a typed value for a key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(SettingsError::Serialization)?;
        self.backend.set_bytes(key, &bytes)
    }

    pub fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.delete(key)
    }
}
