use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::json;
use service::errors::ServiceError;
use service::notes::{NewNote, NoteChanges};

use crate::errors::ApiError;
use crate::response::ApiResponse;
use crate::state::ServerState;

pub const NOTE_ADDED: &str = "Note added successfully";
pub const NOTE_ADD_FAILED: &str = "Note failed to be added";
pub const NOTE_NOT_FOUND: &str = "Note not found";
pub const NOTE_UPDATED: &str = "Note updated successfully";
pub const NOTE_UPDATE_MISSING: &str = "Failed to update note. Id not found";
pub const NOTE_DELETED: &str = "Note deleted successfully";
pub const NOTE_DELETE_MISSING: &str = "Failed to delete note. Id not found";

// Not-found gets the operation's own message; anything else is a 500.
fn map_miss(e: ServiceError, missing: &str) -> ApiError {
    match e {
        ServiceError::NotFound(_) => ApiError::not_found(missing),
        other => ApiError::internal(other.to_string()),
    }
}

/// POST /notes
pub async fn create_note(
    State(state): State<ServerState>,
    payload: Result<Json<NewNote>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(input) = payload?;
    let note = state.notes.create(input).await.map_err(|e| {
        tracing::error!(error = %e, "note creation failed");
        ApiError::internal(NOTE_ADD_FAILED)
    })?;
    Ok(ApiResponse::created(NOTE_ADDED, json!({ "noteId": note.id })))
}

/// GET /notes
pub async fn list_notes(State(state): State<ServerState>) -> ApiResponse {
    let notes = state.notes.list().await;
    ApiResponse::ok(json!({ "notes": notes }))
}

/// GET /notes/:id
pub async fn get_note(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<ApiResponse, ApiError> {
    let note = state.notes.get(&id).await.map_err(|e| map_miss(e, NOTE_NOT_FOUND))?;
    Ok(ApiResponse::ok(json!({ "note": note })))
}

/// PUT /notes/:id
pub async fn update_note(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<NoteChanges>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(changes) = payload?;
    state.notes.update(&id, changes).await.map_err(|e| map_miss(e, NOTE_UPDATE_MISSING))?;
    Ok(ApiResponse::ok_message(NOTE_UPDATED))
}

/// DELETE /notes/:id
pub async fn delete_note(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<ApiResponse, ApiError> {
    state.notes.delete(&id).await.map_err(|e| map_miss(e, NOTE_DELETE_MISSING))?;
    Ok(ApiResponse::ok_message(NOTE_DELETED))
}
