use async_trait::async_trait;

use crate::topic::application::domain::progress::ProgressBoard;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProgressError {
    #[error("Failed to compute progress: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProgressUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProgressBoard, GetProgressError>;
}
