use async_trait::async_trait;

use crate::topic::application::domain::entities::{Topic, TopicPatch};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: String, patch: TopicPatch)
        -> Result<Topic, UpdateTopicError>;
}
