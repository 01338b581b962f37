use async_trait::async_trait;

use crate::topic::application::domain::entities::{NewTopic, Topic, TopicPatch};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, topics table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Inserts with a freshly generated id and returns the stored row.
    async fn create_topic(&self, data: NewTopic) -> Result<Topic, TopicRepositoryError>;

    /// Writes only the fields present in `patch`. `Ok(None)` when no row has
    /// `topic_id`. Status is stored as given, never re-derived.
    async fn update_topic(
        &self,
        topic_id: &str,
        patch: TopicPatch,
    ) -> Result<Option<Topic>, TopicRepositoryError>;

    /// Hard delete. `Ok(false)` when nothing was removed.
    async fn delete_topic(&self, topic_id: &str) -> Result<bool, TopicRepositoryError>;
}
