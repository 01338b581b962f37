mod create_topic;
mod delete_topic;
mod get_progress;
mod get_single_topic;
mod get_topics;
mod update_topic;

pub use create_topic::*;
pub use delete_topic::*;
pub use get_progress::*;
pub use get_single_topic::*;
pub use get_topics::*;
pub use update_topic::*;
