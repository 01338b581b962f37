use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::{
        domain::{
            entities::{AssignedTo, Subtopic, Topic, TopicStatus},
            validation::validate_new_topic,
        },
        ports::incoming::use_cases::CreateTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO (documentation only; bodies are validated from raw JSON)
// ──────────────────────────────────────────────────────────
//

#[allow(dead_code)]
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    /// Must not be empty
    #[schema(example = "Rust")]
    pub title: String,
    /// Defaults to an empty string
    pub description: Option<String>,
    pub subtopics: Vec<Subtopic>,
    pub status: TopicStatus,
    pub assigned_to: AssignedTo,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a topic
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = Topic),
        (
            status = 400,
            description = "Validation error or unparsable body",
            body = ErrorResponse,
            example = json!({ "error": "Validation error: Required at \"title\"" })
        ),
        (
            status = 500,
            description = "Storage failure",
            body = ErrorResponse,
            example = json!({ "error": "Failed to create topic" })
        ),
    )
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    data: web::Data<AppState>,
    payload: web::Json<serde_json::Value>,
) -> impl Responder {
    // 1️⃣ Validate before touching storage
    let new_topic = match validate_new_topic(&payload) {
        Ok(topic) => topic,
        Err(errors) => {
            warn!(error = %errors, "Rejected topic creation");
            return ApiResponse::bad_request(&errors.to_string());
        }
    };

    // 2️⃣ Execute use case
    match data.topic.create.execute(new_topic).await {
        Ok(topic) => ApiResponse::created(topic),
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to create topic");
            ApiResponse::internal_error("Failed to create topic")
        }
    }
}
