use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use crate::errors::{RevostayError, RevostayResult};
use crate::structs::session::Session;
use crate::traits::session_persistence::SessionPersistence;

/// Keeps the session as a JSON file, the console's equivalent of browser
/// local storage.
pub struct FileSessionPersistence {
    path: PathBuf,
}

impl FileSessionPersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionPersistence for FileSessionPersistence {
    fn load(&self) -> RevostayResult<Session> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Session::default()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                RevostayError::session_error("reading session", &format!("{}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Session::default()),
            Err(e) => Err(RevostayError::session_error("reading session", &e.to_string())),
        }
    }

    fn save(&self, session: &Session) -> RevostayResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(session)?;
        let temp_path = self.temp_path();

        // rename is atomic, so readers never see half a session
        fs::write(&temp_path, content)
            .and_then(|_| fs::rename(&temp_path, &self.path))
            .map_err(|e| RevostayError::session_error("saving session", &e.to_string()))
    }

    fn clear(&self) -> RevostayResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RevostayError::session_error("clearing session", &e.to_string())),
        }
    }
}
