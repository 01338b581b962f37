use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::{Topic, TopicPatch},
    ports::incoming::use_cases::{UpdateTopicError, UpdateTopicUseCase},
    ports::outgoing::TopicRepository,
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateTopicUseCase for UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, topic_id: String, patch: TopicPatch) -> Result<Topic, UpdateTopicError> {
        // Partial write; status is stored exactly as sent
        self.repository
            .update_topic(&topic_id, patch)
            .await
            .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTopicError::NotFound)
    }
}
