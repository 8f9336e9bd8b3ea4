use std::sync::{Mutex, PoisonError};
use crate::errors::RevostayResult;
use crate::structs::session::Session;
use crate::traits::session_persistence::SessionPersistence;

#[derive(Default)]
pub struct MemorySessionPersistence {
    stored: Mutex<Session>,
}

impl MemorySessionPersistence {
    pub fn new(session: Session) -> Self {
        Self { stored: Mutex::new(session) }
    }
}

impl SessionPersistence for MemorySessionPersistence {
    fn load(&self) -> RevostayResult<Session> {
        Ok(self.stored.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, session: &Session) -> RevostayResult<()> {
        *self.stored.lock().unwrap_or_else(PoisonError::into_inner) = session.clone();
        Ok(())
    }

    fn clear(&self) -> RevostayResult<()> {
        *self.stored.lock().unwrap_or_else(PoisonError::into_inner) = Session::default();
        Ok(())
    }
}
