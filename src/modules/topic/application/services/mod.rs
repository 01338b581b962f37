mod create_topic_service;
mod delete_topic_service;
mod get_progress_service;
mod get_single_topic_service;
mod get_topics_service;
mod update_topic_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use get_progress_service::GetProgressService;
pub use get_single_topic_service::GetSingleTopicService;
pub use get_topics_service::GetTopicsService;
pub use update_topic_service::UpdateTopicService;
