use std::sync::{Mutex, MutexGuard, PoisonError};
use crate::errors::RevostayResult;
use crate::services::memory_session_persistence::MemorySessionPersistence;
use crate::structs::session::Session;
use crate::traits::session_persistence::SessionPersistence;

/// Process-wide session shared by every gated view.
///
/// All writes replace the whole session at once, so no caller can observe a
/// token without its role or a role left behind after logout.
pub struct SessionStore {
    current: Mutex<Session>,
    persistence: Box<dyn SessionPersistence>,
}

impl SessionStore {
    pub fn open(persistence: Box<dyn SessionPersistence>) -> RevostayResult<Self> {
        let session = persistence.load()?;
        Ok(Self {
            current: Mutex::new(session),
            persistence,
        })
    }

    pub fn in_memory(session: Session) -> Self {
        Self {
            current: Mutex::new(session.clone()),
            persistence: Box::new(MemorySessionPersistence::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self) -> Session {
        self.lock().clone()
    }

    pub fn display_name(&self) -> Option<String> {
        self.lock().display_name().map(str::to_string)
    }

    pub fn login(&self, session: Session) -> RevostayResult<()> {
        let mut current = self.lock();
        self.persistence.save(&session)?;
        *current = session;
        log::debug!("🔑 Session stored for {}", current.display_name().unwrap_or("unknown user"));
        Ok(())
    }

    pub fn logout(&self) -> RevostayResult<()> {
        self.clear()?;
        log::debug!("👋 Session cleared by logout");
        Ok(())
    }

    /// Called when the backend answers 403: the credentials are no longer
    /// valid, so the session goes exactly as it would on logout.
    pub fn expire(&self) -> RevostayResult<()> {
        self.clear()?;
        log::warn!("⌛ Session expired, cleared stored credentials");
        Ok(())
    }

    fn clear(&self) -> RevostayResult<()> {
        let mut current = self.lock();
        // Memory is cleared even when the file cannot be removed.
        *current = Session::default();
        self.persistence.clear()
    }
}
