use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::{
        domain::{
            entities::{AssignedTo, Subtopic, Topic, TopicStatus},
            validation::validate_topic_patch,
        },
        ports::incoming::use_cases::UpdateTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO (documentation only)
// ──────────────────────────────────────────────────────────
//

/// Any subset of the topic fields. Absent fields stay unchanged.
#[allow(dead_code)]
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Replaces the whole list
    pub subtopics: Option<Vec<Subtopic>>,
    /// Stored as sent; never recomputed from subtopics
    pub status: Option<TopicStatus>,
    pub assigned_to: Option<AssignedTo>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Partially update a topic
#[utoipa::path(
    put,
    path = "/api/topics/{id}",
    tag = "topics",
    params(("id" = String, Path, description = "Topic id")),
    request_body = UpdateTopicRequest,
    responses(
        (status = 200, description = "Updated topic", body = Topic),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "error": "Validation error: Invalid enum value. Expected 'not_started' | 'in_progress' | 'completed', received 'done' at \"status\""
            })
        ),
        (
            status = 404,
            description = "No topic with this id",
            body = ErrorResponse,
            example = json!({ "error": "Topic not found" })
        ),
        (
            status = 500,
            description = "Storage failure",
            body = ErrorResponse,
            example = json!({ "error": "Failed to update topic" })
        ),
    )
)]
#[put("/api/topics/{id}")]
pub async fn update_topic_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
    payload: web::Json<serde_json::Value>,
) -> impl Responder {
    let topic_id = path.into_inner();

    // Validation comes first, so a bad body on an unknown id is still a 400
    let patch = match validate_topic_patch(&payload) {
        Ok(patch) => patch,
        Err(errors) => {
            warn!(topic_id = %topic_id, error = %errors, "Rejected topic update");
            return ApiResponse::bad_request(&errors.to_string());
        }
    };

    match data.topic.update.execute(topic_id, patch).await {
        Ok(topic) => ApiResponse::success(topic),
        Err(err) => map_update_topic_error(err),
    }
}

fn map_update_topic_error(err: UpdateTopicError) -> HttpResponse {
    match err {
        UpdateTopicError::NotFound => ApiResponse::not_found("Topic not found"),
        UpdateTopicError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to update topic");
            ApiResponse::internal_error("Failed to update topic")
        }
    }
}
