//! File-backed persistence for the signed-in session.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::analysis::User;

/// Filename of the persisted session under the gradetty home.
pub const AUTH_FILE: &str = "auth.json";

/// Session written after a successful login and read back on startup.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StoredSession {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Reads and writes the session file at a fixed path.
#[derive(Clone)]
pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the persisted session, if one exists.
    ///
    /// A missing file means signed out. A malformed or unreadable file is
    /// treated the same so a damaged session never blocks startup.
    pub fn load(&self) -> Option<StoredSession> {
        let content = fs::read_to_string(&self.path).ok()?;

        serde_json::from_str(&content).ok()
    }

    /// Persists the session, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error if the session cannot be serialized or written.
    pub fn save(&self, session: &StoredSession) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| format!("Failed to create auth directory: {err}"))?;
        }

        let content = serde_json::to_string_pretty(session)
            .map_err(|err| format!("Failed to serialize auth session: {err}"))?;
        fs::write(&self.path, content)
            .map_err(|err| format!("Failed to write auth session: {err}"))?;

        Ok(())
    }

    /// Removes the persisted session. Removing an absent session is a no-op.
    ///
    /// # Errors
    /// Returns an error if an existing session file cannot be removed.
    pub fn clear(&self) -> Result<(), String> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(format!("Failed to remove auth session: {err}")),
        }
    }
}
