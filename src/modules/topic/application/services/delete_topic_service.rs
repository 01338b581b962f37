use async_trait::async_trait;

use crate::topic::application::{
    ports::incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
    ports::outgoing::TopicRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<R>
where
    R: TopicRepository,
{
    repository: R,
}

impl<R> DeleteTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTopicUseCase for DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, topic_id: String) -> Result<(), DeleteTopicError> {
        let removed = self
            .repository
            .delete_topic(&topic_id)
            .await
            .map_err(|e| DeleteTopicError::DatabaseError(e.to_string()))?;

        if !removed {
            return Err(DeleteTopicError::NotFound);
        }

        Ok(())
    }
}
