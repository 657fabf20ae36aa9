//! Notes domain: record types, identifier generation, the store contract and
//! the operations the HTTP layer binds to.

pub mod domain;
pub mod id;
pub mod repository;
pub mod service;

pub use domain::{NewNote, Note, NoteChanges, DEFAULT_TITLE};
pub use repository::{NoteEdit, NoteStore};
pub use service::NoteService;
