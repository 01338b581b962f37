use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::{
        domain::entities::Topic, ports::incoming::use_cases::GetSingleTopicError,
    },
    AppState,
};

/// Fetch one topic by id
#[utoipa::path(
    get,
    path = "/api/topics/{id}",
    tag = "topics",
    params(("id" = String, Path, description = "Topic id")),
    responses(
        (status = 200, description = "The topic", body = Topic),
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
            example = json!({ "error": "Failed to fetch topic" })
        ),
    )
)]
#[get("/api/topics/{id}")]
pub async fn get_single_topic_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.get_single.execute(topic_id).await {
        Ok(topic) => ApiResponse::success(topic),
        Err(err) => map_get_single_topic_error(err),
    }
}

fn map_get_single_topic_error(err: GetSingleTopicError) -> HttpResponse {
    match err {
        GetSingleTopicError::NotFound => ApiResponse::not_found("Topic not found"),
        GetSingleTopicError::QueryFailed(msg) => {
            error!(error = %msg, "Failed to fetch topic");
            ApiResponse::internal_error("Failed to fetch topic")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        stubs::StubGetSingleTopicUseCase,
        topic_fixtures::{read_json, sample_subtopic, sample_topic},
    };

    #[actix_web::test]
    async fn get_single_topic_success() {
        let mut topic = sample_topic("t-1", "Rust");
        topic.subtopics = vec![sample_subtopic("s1", true)];

        let state = TestAppStateBuilder::default()
            .with_get_single_topic(StubGetSingleTopicUseCase::found(topic))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_single_topic_handler)).await;

        let req = test::TestRequest::get().uri("/api/topics/t-1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["id"], "t-1");
        assert_eq!(json["subtopics"][0]["completed"], true);
    }

    #[actix_web::test]
    async fn get_single_topic_not_found() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(get_single_topic_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/topics/does-not-exist")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            read_json(resp).await,
            serde_json::json!({ "error": "Topic not found" })
        );
    }

    #[actix_web::test]
    async fn get_single_topic_failure() {
        let state = TestAppStateBuilder::default()
            .with_get_single_topic(StubGetSingleTopicUseCase::failure("boom"))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_single_topic_handler)).await;

        let req = test::TestRequest::get().uri("/api/topics/t-1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_json(resp).await["error"], "Failed to fetch topic");
    }
}
