use async_trait::async_trait;

use crate::topic::application::domain::entities::{NewTopic, Topic};

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Takes an already validated payload; see `validate_new_topic`.
#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, data: NewTopic) -> Result<Topic, CreateTopicError>;
}
