use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::{
        domain::progress::ProgressBoard, ports::incoming::use_cases::GetProgressError,
    },
    AppState,
};

/// Per-assignee completion stats
///
/// Groups every topic by `assignedTo` (`none` is reported as `common`) and
/// counts completed and in-progress topics per group.
#[utoipa::path(
    get,
    path = "/api/progress",
    tag = "progress",
    responses(
        (
            status = 200,
            description = "Progress board",
            body = ProgressBoard,
            example = json!({
                "common": { "total": 0, "completed": 0, "inProgress": 0, "percent": 0 },
                "chayan": { "total": 3, "completed": 1, "inProgress": 1, "percent": 33 },
                "divyam": { "total": 1, "completed": 1, "inProgress": 0, "percent": 100 }
            })
        ),
        (
            status = 500,
            description = "Storage failure",
            body = ErrorResponse,
            example = json!({ "error": "Failed to compute progress" })
        ),
    )
)]
#[get("/api/progress")]
pub async fn get_progress_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topic.progress.execute().await {
        Ok(board) => ApiResponse::success(board),
        Err(err) => map_get_progress_error(err),
    }
}

fn map_get_progress_error(err: GetProgressError) -> HttpResponse {
    match err {
        GetProgressError::QueryFailed(msg) => {
            error!(error = %msg, "Failed to compute progress");
            ApiResponse::internal_error("Failed to compute progress")
        }
    }
}
