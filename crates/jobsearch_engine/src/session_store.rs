use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use jobsearch_core::{Session, User};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session directory missing or not writable: {0}")]
    Directory(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode session: {0}")]
    Encode(String),
    #[error("failed to decode session: {0}")]
    Decode(String),
}

/// On-disk form. The user stays a JSON string so unknown fields survive untouched.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    user: String,
    #[serde(default)]
    access_token: Option<String>,
}

/// Keeps the signed-in user between runs.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nobody has signed in yet.
    pub fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let persisted: PersistedSession =
            ron::from_str(&text).map_err(|err| SessionStoreError::Decode(err.to_string()))?;
        let user: User = serde_json::from_str(&persisted.user)
            .map_err(|err| SessionStoreError::Decode(err.to_string()))?;
        Ok(Some(Session {
            user,
            access_token: persisted.access_token,
        }))
    }

    /// Writes to a temp file in the same directory, then renames over the target.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let user = serde_json::to_string(&session.user)
            .map_err(|err| SessionStoreError::Encode(err.to_string()))?;
        let persisted = PersistedSession {
            user,
            access_token: session.access_token.clone(),
        };
        let text = ron::ser::to_string_pretty(&persisted, ron::ser::PrettyConfig::default())
            .map_err(|err| SessionStoreError::Encode(err.to_string()))?;

        let dir = self.directory()?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|e| SessionStoreError::Io(e.error))?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn directory(&self) -> Result<PathBuf, SessionStoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if dir.exists() {
            if !dir.is_dir() {
                return Err(SessionStoreError::Directory("path is not a directory".into()));
            }
        } else {
            fs::create_dir_all(&dir).map_err(|e| SessionStoreError::Directory(e.to_string()))?;
        }
        Ok(dir)
    }
}
