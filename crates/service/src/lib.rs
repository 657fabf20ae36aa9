//! Service layer for the notes API.
//! - Owns the in-memory note collection and the five note operations.
//! - Independent of the HTTP framework; `server` maps outcomes to responses.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod notes;
pub mod storage;
pub mod time_serde;
