use async_trait::async_trait;

use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored row could not be decoded into a `Topic`.
    #[error("Corrupt topic row {id}: {reason}")]
    CorruptRow { id: String, reason: String },
}

/// Read side of the topics table.
#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Every topic, in no particular order.
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError>;

    async fn get_topic(&self, topic_id: &str) -> Result<Option<Topic>, TopicQueryError>;
}
