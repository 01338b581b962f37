use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::{NewTopic, Topic, TopicPatch};
use crate::modules::topic::application::ports::outgoing::{
    TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
};

/// Process-local topic table. Serves both the read and the write port; clones
/// share the same rows. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTopicStore {
    topics: Arc<RwLock<Vec<Topic>>>,
}

impl InMemoryTopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topics(topics: Vec<Topic>) -> Self {
        Self {
            topics: Arc::new(RwLock::new(topics)),
        }
    }
}

#[async_trait]
impl TopicQuery for InMemoryTopicStore {
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
        Ok(self.topics.read().await.clone())
    }

    async fn get_topic(&self, topic_id: &str) -> Result<Option<Topic>, TopicQueryError> {
        Ok(self
            .topics
            .read()
            .await
            .iter()
            .find(|t| t.id == topic_id)
            .cloned())
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicStore {
    async fn create_topic(&self, data: NewTopic) -> Result<Topic, TopicRepositoryError> {
        let topic = data.into_topic(Uuid::new_v4().to_string());
        self.topics.write().await.push(topic.clone());
        Ok(topic)
    }

    async fn update_topic(
        &self,
        topic_id: &str,
        patch: TopicPatch,
    ) -> Result<Option<Topic>, TopicRepositoryError> {
        let mut topics = self.topics.write().await;

        Ok(topics.iter_mut().find(|t| t.id == topic_id).map(|topic| {
            patch.apply_to(topic);
            topic.clone()
        }))
    }

    async fn delete_topic(&self, topic_id: &str) -> Result<bool, TopicRepositoryError> {
        let mut topics = self.topics.write().await;
        let before = topics.len();
        topics.retain(|t| t.id != topic_id);
        Ok(topics.len() < before)
    }
}
