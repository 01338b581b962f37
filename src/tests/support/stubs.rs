use async_trait::async_trait;

use crate::topic::application::domain::entities::{NewTopic, Topic, TopicPatch};
use crate::topic::application::domain::progress::ProgressBoard;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicError, CreateTopicUseCase, DeleteTopicError, DeleteTopicUseCase, GetProgressError,
    GetProgressUseCase, GetSingleTopicError, GetSingleTopicUseCase, GetTopicsError,
    GetTopicsUseCase, UpdateTopicError, UpdateTopicUseCase,
};

// ============================================================
// List
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<Topic>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(data: Vec<Topic>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.into())),
        }
    }
}

impl Default for StubGetTopicsUseCase {
    fn default() -> Self {
        Self::success(vec![])
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self) -> Result<Vec<Topic>, GetTopicsError> {
        self.result.clone()
    }
}

// ============================================================
// Get one
// ============================================================

#[derive(Clone)]
pub struct StubGetSingleTopicUseCase {
    result: Result<Topic, GetSingleTopicError>,
}

impl StubGetSingleTopicUseCase {
    pub fn found(topic: Topic) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleTopicError::NotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetSingleTopicError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetSingleTopicUseCase for StubGetSingleTopicUseCase {
    async fn execute(&self, _topic_id: String) -> Result<Topic, GetSingleTopicError> {
        self.result.clone()
    }
}

// ============================================================
// Create
// ============================================================

/// Echoes the validated payload back with a fixed id.
#[derive(Default, Clone)]
pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, data: NewTopic) -> Result<Topic, CreateTopicError> {
        Ok(data.into_topic("stub-topic-id".to_string()))
    }
}

// ============================================================
// Update
// ============================================================

#[derive(Clone)]
pub struct StubUpdateTopicUseCase {
    existing: Option<Topic>,
}

impl StubUpdateTopicUseCase {
    /// Applies every patch onto `topic`.
    pub fn over(topic: Topic) -> Self {
        Self {
            existing: Some(topic),
        }
    }

    pub fn not_found() -> Self {
        Self { existing: None }
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, topic_id: String, patch: TopicPatch) -> Result<Topic, UpdateTopicError> {
        match &self.existing {
            Some(topic) if topic.id == topic_id => {
                let mut updated = topic.clone();
                patch.apply_to(&mut updated);
                Ok(updated)
            }
            _ => Err(UpdateTopicError::NotFound),
        }
    }
}

// ============================================================
// Delete
// ============================================================

#[derive(Default, Clone)]
pub struct StubDeleteTopicUseCase;

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_id: String) -> Result<(), DeleteTopicError> {
        Ok(())
    }
}

// ============================================================
// Progress
// ============================================================

#[derive(Clone)]
pub struct StubGetProgressUseCase {
    result: Result<ProgressBoard, GetProgressError>,
}

impl StubGetProgressUseCase {
    pub fn success(board: ProgressBoard) -> Self {
        Self { result: Ok(board) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetProgressError::QueryFailed(msg.into())),
        }
    }
}

impl Default for StubGetProgressUseCase {
    fn default() -> Self {
        Self::success(ProgressBoard::default())
    }
}

#[async_trait]
impl GetProgressUseCase for StubGetProgressUseCase {
    async fn execute(&self) -> Result<ProgressBoard, GetProgressError> {
        self.result.clone()
    }
}
