//! Session persistence in a small JSON file, one entry per storage key.
//!
//! The file holds bearer and refresh tokens, so it is written owner-only and
//! replaced atomically through a sibling temp file.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use contract::{AuthError, SessionStorage};
use serde_json::{Map, Value};

#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Map<String, Value>, AuthError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(storage_error(&self.path, &e)),
        };
        match serde_json::from_str(&raw) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) | Err(_) => {
                tracing::warn!(path = %self.path.display(), "session file is not a JSON object; ignoring it");
                Ok(Map::new())
            }
        }
    }

    fn write(&self, entries: &Map<String, Value>) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| storage_error(parent, &e))?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(|e| AuthError::Storage(e.to_string()))?;

        let temp = self.temp_path();
        match std::fs::remove_file(&temp) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(storage_error(&temp, &e)),
        }
        let mut file = create_private(&temp).map_err(|e| storage_error(&temp, &e))?;
        file.write_all(raw.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| storage_error(&temp, &e))?;
        drop(file);
        std::fs::rename(&temp, &self.path).map_err(|e| storage_error(&self.path, &e))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(ToOwned::to_owned).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(unix)]
fn create_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new().write(true).create_new(true).mode(0o600).open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

fn storage_error(path: &Path, error: &std::io::Error) -> AuthError {
    AuthError::Storage(format!("{}: {error}", path.display()))
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.read()?.get(key).and_then(Value::as_str).map(str::to_owned))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let mut entries = self.read()?;
        entries.insert(key.to_owned(), Value::String(value.to_owned()));
        self.write(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let mut entries = self.read()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write(&entries)
    }
}
