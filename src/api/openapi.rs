use crate::api::schemas::{ErrorResponse, MessageResponse};
use utoipa::OpenApi;

// Topics
use crate::topic::adapter::incoming::web::routes::{CreateTopicRequest, UpdateTopicRequest};
use crate::topic::application::domain::{
    entities::{AssignedTo, Subtopic, Topic, TopicStatus},
    progress::{AssigneeStats, ProgressBoard},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Progress Tracker API",
        version = "1.0.0",
        description = "Shared learning-topic tracker: topics, subtopic checklists and per-assignee progress"
    ),
    paths(
        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_single_topic_handler,
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,

        // Progress
        crate::topic::adapter::incoming::web::routes::get_progress_handler,
    ),
    components(
        schemas(
            // Error bodies
            ErrorResponse,
            MessageResponse,

            // Topic DTOs
            Topic,
            Subtopic,
            TopicStatus,
            AssignedTo,
            CreateTopicRequest,
            UpdateTopicRequest,

            // Progress
            ProgressBoard,
            AssigneeStats
        )
    ),
    tags(
        (name = "topics", description = "Topic management endpoints"),
        (name = "progress", description = "Derived progress statistics"),
    )
)]
pub struct ApiDoc;
