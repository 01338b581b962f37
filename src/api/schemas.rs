// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Route-level error body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Topic not found")]
    pub error: String,
}

/// Body produced when the request JSON cannot be parsed
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Json deserialize error: expected value at line 1 column 1")]
    pub message: String,
}
