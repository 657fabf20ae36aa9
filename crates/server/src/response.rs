use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ResponseStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body shared by every notes endpoint.
/// Success bodies may carry `data`; failure bodies always carry `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn fail(message: impl Into<String>) -> Self {
        Self { status: ResponseStatus::Fail, message: Some(message.into()), data: None }
    }
}

/// A successful outcome: status code plus envelope.
#[derive(Debug)]
pub struct ApiResponse {
    pub code: StatusCode,
    pub body: Envelope,
}

impl ApiResponse {
    pub fn ok(data: Value) -> Self {
        Self { code: StatusCode::OK, body: Envelope { status: ResponseStatus::Success, message: None, data: Some(data) } }
    }

    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::OK,
            body: Envelope { status: ResponseStatus::Success, message: Some(message.into()), data: None },
        }
    }

    pub fn created(message: impl Into<String>, data: Value) -> Self {
        Self {
            code: StatusCode::CREATED,
            body: Envelope { status: ResponseStatus::Success, message: Some(message.into()), data: Some(data) },
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.code, Json(self.body)).into_response()
    }
}
