use async_trait::async_trait;

use super::domain::Note;
use crate::errors::ServiceError;

/// In-place edit run by the store while it holds the note exclusively.
pub type NoteEdit = Box<dyn FnOnce(&mut Note) + Send>;

/// Storage contract for notes. Enumeration order is insertion order.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Append a note. Fails with `CreationFailure` if its id is already held.
    async fn insert(&self, note: Note) -> Result<Note, ServiceError>;
    async fn find(&self, id: &str) -> Option<Note>;
    /// Apply `edit` to the stored note in place and return the result.
    /// No other mutation can interleave with the edit.
    async fn replace(&self, id: &str, edit: NoteEdit) -> Result<Note, ServiceError>;
    async fn remove(&self, id: &str) -> Result<Note, ServiceError>;
    async fn list(&self) -> Vec<Note>;
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
