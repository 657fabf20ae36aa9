//! Storage backends for the service layer.
//!
//! Only an in-process store exists; notes live as long as the process does.

pub mod memory_note_store;

pub use memory_note_store::MemoryNoteStore;
