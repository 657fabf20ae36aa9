use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use super::domain::{NewNote, Note, NoteChanges};
use super::id::generate_note_id;
use super::repository::NoteStore;
use crate::errors::ServiceError;

/// Note operations independent of web framework.
///
/// Holds its store explicitly so each server (or test) gets its own collection.
pub struct NoteService<S: NoteStore + ?Sized> {
    store: Arc<S>,
}

impl<S: NoteStore + ?Sized> NoteService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Create a note with a fresh id; a missing title becomes `"untitled"`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::notes::{NewNote, NoteService};
    /// use service::storage::MemoryNoteStore;
    ///
    /// let svc = NoteService::new(Arc::new(MemoryNoteStore::new()));
    /// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// let note = rt.block_on(svc.create(NewNote::default())).unwrap();
    /// assert_eq!(note.title.as_ref().and_then(|t| t.as_str()), Some("untitled"));
    /// assert_eq!(note.created_at, note.updated_at);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewNote) -> Result<Note, ServiceError> {
        let note = Note::from_new(generate_note_id(), input, Utc::now());
        let note = self.store.insert(note).await?;
        info!(note_id = %note.id, "note_created");
        Ok(note)
    }

    /// All notes in creation order.
    pub async fn list(&self) -> Vec<Note> {
        self.store.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Note, ServiceError> {
        self.store.find(id).await.ok_or_else(|| ServiceError::not_found("note", id))
    }

    /// Overwrite title, tags and body; `id` and `created_at` are preserved.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: &str, changes: NoteChanges) -> Result<Note, ServiceError> {
        // stamped inside the store lock
        let note = self.store.replace(id, Box::new(move |note| note.apply(changes, Utc::now()))).await?;
        info!(note_id = %note.id, "note_updated");
        Ok(note)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Note, ServiceError> {
        let note = self.store.remove(id).await?;
        info!(note_id = %note.id, "note_deleted");
        Ok(note)
    }
}
