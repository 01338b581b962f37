use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::Topic,
    ports::incoming::use_cases::{GetSingleTopicError, GetSingleTopicUseCase},
    ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct GetSingleTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleTopicUseCase for GetSingleTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, topic_id: String) -> Result<Topic, GetSingleTopicError> {
        self.query
            .get_topic(&topic_id)
            .await
            .map_err(|e| GetSingleTopicError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleTopicError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::topic::application::{
        domain::entities::{AssignedTo, TopicStatus},
        ports::outgoing::TopicQueryError,
    };

    #[derive(Clone)]
    struct MockTopicQuery {
        result: Result<Option<Topic>, TopicQueryError>,
    }

    #[async_trait]
    impl TopicQuery for MockTopicQuery {
        async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
            unimplemented!("not needed for get_single_topic tests")
        }

        async fn get_topic(&self, topic_id: &str) -> Result<Option<Topic>, TopicQueryError> {
            Ok(self
                .result
                .clone()?
                .filter(|topic| topic.id == topic_id))
        }
    }

    fn sample_topic(id: &str) -> Topic {
        Topic {
            id: id.to_string(),
            title: "Rust".to_string(),
            description: String::new(),
            subtopics: vec![],
            status: TopicStatus::InProgress,
            assigned_to: AssignedTo::Divyam,
        }
    }

    #[tokio::test]
    async fn test_execute_returns_topic() {
        let service = GetSingleTopicService::new(MockTopicQuery {
            result: Ok(Some(sample_topic("t-1"))),
        });

        let topic = service.execute("t-1".to_string()).await.unwrap();

        assert_eq!(topic.id, "t-1");
        assert_eq!(topic.assigned_to, AssignedTo::Divyam);
    }

    #[tokio::test]
    async fn test_execute_maps_absent_row_to_not_found() {
        let service = GetSingleTopicService::new(MockTopicQuery {
            result: Ok(Some(sample_topic("t-1"))),
        });

        let result = service.execute("other".to_string()).await;

        assert!(matches!(result, Err(GetSingleTopicError::NotFound)));
    }

    #[tokio::test]
    async fn test_execute_maps_query_error() {
        let service = GetSingleTopicService::new(MockTopicQuery {
            result: Err(TopicQueryError::CorruptRow {
                id: "t-1".to_string(),
                reason: "bad status".to_string(),
            }),
        });

        let result = service.execute("t-1".to_string()).await;

        assert!(matches!(
            result,
            Err(GetSingleTopicError::QueryFailed(msg)) if msg.contains("bad status")
        ));
    }
}
