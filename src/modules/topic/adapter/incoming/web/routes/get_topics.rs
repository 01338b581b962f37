use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::{
        domain::entities::Topic, ports::incoming::use_cases::GetTopicsError,
    },
    AppState,
};

/// List every topic
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    responses(
        (status = 200, description = "All topics", body = Vec<Topic>),
        (
            status = 500,
            description = "Storage failure",
            body = ErrorResponse,
            example = json!({ "error": "Failed to fetch topics" })
        ),
    )
)]
#[get("/api/topics")]
pub async fn get_topics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topic.get_list.execute().await {
        Ok(topics) => ApiResponse::success(topics),
        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> HttpResponse {
    match err {
        GetTopicsError::QueryFailed(msg) => {
            error!(error = %msg, "Failed to fetch topics");
            ApiResponse::internal_error("Failed to fetch topics")
        }
    }
}
