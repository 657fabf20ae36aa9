use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::notes::{Note, NoteEdit, NoteStore};

/// In-process note store.
///
/// Keeps notes in an ordered `Vec` for listing plus an id -> position index for
/// lookups. Both live behind one `RwLock` and are updated together.
#[derive(Default)]
pub struct MemoryNoteStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    notes: Vec<Note>,
    index: HashMap<String, usize>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn insert(&self, note: Note) -> Result<Note, ServiceError> {
        let mut inner = self.inner.write().await;
        if inner.index.contains_key(&note.id) {
            return Err(ServiceError::CreationFailure(format!("duplicate note id {}", note.id)));
        }
        let pos = inner.notes.len();
        inner.index.insert(note.id.clone(), pos);
        inner.notes.push(note.clone());
        Ok(note)
    }

    async fn find(&self, id: &str) -> Option<Note> {
        let inner = self.inner.read().await;
        inner.index.get(id).map(|&pos| inner.notes[pos].clone())
    }

    async fn replace(&self, id: &str, edit: NoteEdit) -> Result<Note, ServiceError> {
        let mut inner = self.inner.write().await;
        let pos = *inner.index.get(id).ok_or_else(|| ServiceError::not_found("note", id))?;
        let note = &mut inner.notes[pos];
        edit(note);
        Ok(note.clone())
    }

    async fn remove(&self, id: &str) -> Result<Note, ServiceError> {
        let mut inner = self.inner.write().await;
        let pos = inner.index.remove(id).ok_or_else(|| ServiceError::not_found("note", id))?;
        let removed = inner.notes.remove(pos);
        for p in inner.index.values_mut() {
            if *p > pos {
                *p -= 1;
            }
        }
        Ok(removed)
    }

    async fn list(&self) -> Vec<Note> {
        self.inner.read().await.notes.clone()
    }

    async fn len(&self) -> usize {
        self.inner.read().await.notes.len()
    }
}
