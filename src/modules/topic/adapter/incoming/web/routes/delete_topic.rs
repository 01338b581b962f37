use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::{
    api::schemas::ErrorResponse, shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::DeleteTopicError, AppState,
};

/// Delete a topic permanently
#[utoipa::path(
    delete,
    path = "/api/topics/{id}",
    tag = "topics",
    params(("id" = String, Path, description = "Topic id")),
    responses(
        (status = 204, description = "Topic deleted"),
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
            example = json!({ "error": "Failed to delete topic" })
        ),
    )
)]
#[delete("/api/topics/{id}")]
pub async fn delete_topic_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.delete.execute(topic_id.clone()).await {
        Ok(()) => {
            info!(topic_id = %topic_id, "Topic deleted");
            ApiResponse::no_content()
        }
        Err(err) => map_delete_topic_error(err),
    }
}

fn map_delete_topic_error(err: DeleteTopicError) -> HttpResponse {
    match err {
        DeleteTopicError::NotFound => ApiResponse::not_found("Topic not found"),
        DeleteTopicError::DatabaseError(msg) => {
            error!(error = %msg, "Failed to delete topic");
            ApiResponse::internal_error("Failed to delete topic")
        }
    }
}
