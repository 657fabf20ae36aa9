use std::sync::Arc;

use service::notes::{NoteService, NoteStore};
use service::storage::MemoryNoteStore;

/// Shared handler state. Each instance owns its own note collection.
#[derive(Clone)]
pub struct ServerState {
    pub notes: Arc<NoteService<dyn NoteStore>>,
}

impl ServerState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { notes: Arc::new(NoteService::new(store)) }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryNoteStore::new()))
    }
}
