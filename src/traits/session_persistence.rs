use crate::errors::RevostayResult;
use crate::structs::session::Session;

/// Durable backing for the session store.
///
/// `save` and `clear` must be all-or-nothing: a later `load` sees either the
/// previous session or the new one, never a mix of fields.
pub trait SessionPersistence: Send + Sync {
    fn load(&self) -> RevostayResult<Session>;

    fn save(&self, session: &Session) -> RevostayResult<()>;

    fn clear(&self) -> RevostayResult<()>;
}
