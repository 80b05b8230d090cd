use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status tag carried by every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResponseMessage {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "failure")]
    Failure,
    #[serde(rename = "validation failure")]
    ValidationFailure,
}

/// Envelope wrapping every JSON response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: ResponseMessage,
    pub payload: T,
}

impl<T> ApiResponse<T> {
    pub fn success(payload: T) -> Self {
        Self {
            message: ResponseMessage::Success,
            payload,
        }
    }

    pub fn failure(payload: T) -> Self {
        Self {
            message: ResponseMessage::Failure,
            payload,
        }
    }

    pub fn validation_failure(payload: T) -> Self {
        Self {
            message: ResponseMessage::ValidationFailure,
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Where a rejected value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViolationLocation {
    Body,
    Path,
}

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ViolationDto {
    pub location: ViolationLocation,
    pub field: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
