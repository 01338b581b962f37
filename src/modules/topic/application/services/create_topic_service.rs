use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::{NewTopic, Topic},
    ports::incoming::use_cases::{CreateTopicError, CreateTopicUseCase},
    ports::outgoing::TopicRepository,
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, data: NewTopic) -> Result<Topic, CreateTopicError> {
        self.repository
            .create_topic(data)
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))
    }
}
