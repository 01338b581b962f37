use async_trait::async_trait;

use crate::topic::application::{
    domain::progress::ProgressBoard,
    ports::incoming::use_cases::{GetProgressError, GetProgressUseCase},
    ports::outgoing::TopicQuery,
};

/// Builds the per-assignee dashboard from the full topic list.
#[derive(Debug, Clone)]
pub struct GetProgressService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProgressService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProgressUseCase for GetProgressService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self) -> Result<ProgressBoard, GetProgressError> {
        let topics = self
            .query
            .get_topics()
            .await
            .map_err(|e| GetProgressError::QueryFailed(e.to_string()))?;

        Ok(ProgressBoard::from_topics(&topics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::topic::application::{
        domain::{
            entities::{AssignedTo, NewTopic, Topic, TopicStatus},
            progress::AssigneeStats,
        },
        ports::outgoing::TopicQueryError,
    };

    struct FixedTopics(Result<Vec<Topic>, TopicQueryError>);

    #[async_trait]
    impl TopicQuery for FixedTopics {
        async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
            self.0.clone()
        }

        async fn get_topic(&self, _topic_id: &str) -> Result<Option<Topic>, TopicQueryError> {
            unimplemented!()
        }
    }

    fn topic(id: &str, status: TopicStatus, assigned_to: AssignedTo) -> Topic {
        NewTopic {
            status,
            assigned_to,
            ..NewTopic::titled(id)
        }
        .into_topic(id.to_string())
    }

    #[tokio::test]
    async fn progress_groups_topics_per_assignee() {
        let service = GetProgressService::new(FixedTopics(Ok(vec![
            topic("a", TopicStatus::Completed, AssignedTo::Chayan),
            topic("b", TopicStatus::InProgress, AssignedTo::Chayan),
            topic("c", TopicStatus::NotStarted, AssignedTo::Chayan),
            topic("d", TopicStatus::Completed, AssignedTo::Divyam),
            topic("e", TopicStatus::NotStarted, AssignedTo::None),
        ])));

        let board = service.execute().await.unwrap();

        assert_eq!(
            board.chayan,
            AssigneeStats {
                total: 3,
                completed: 1,
                in_progress: 1,
                percent: 33,
            }
        );
        assert_eq!(board.divyam.percent, 100);
        assert_eq!(board.common.total, 1);
        assert_eq!(board.common.percent, 0);
    }

    #[tokio::test]
    async fn progress_of_empty_board_is_zero() {
        let service = GetProgressService::new(FixedTopics(Ok(vec![])));

        let board = service.execute().await.unwrap();

        assert_eq!(board, ProgressBoard::default());
    }

    #[tokio::test]
    async fn progress_query_failure() {
        let service = GetProgressService::new(FixedTopics(Err(TopicQueryError::DatabaseError(
            "pool closed".to_string(),
        ))));

        let result = service.execute().await;

        assert!(matches!(result, Err(GetProgressError::QueryFailed(_))));
    }
}
