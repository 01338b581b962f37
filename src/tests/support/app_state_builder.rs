use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetProgressUseCase, GetSingleTopicUseCase,
    GetTopicsUseCase, UpdateTopicUseCase,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case starts as a stub; tests swap in the one under test.
pub struct TestAppStateBuilder {
    topic: TopicUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: TopicUseCases {
                get_list: Arc::new(StubGetTopicsUseCase::default()),
                get_single: Arc::new(StubGetSingleTopicUseCase::not_found()),
                create: Arc::new(StubCreateTopicUseCase),
                update: Arc::new(StubUpdateTopicUseCase::not_found()),
                delete: Arc::new(StubDeleteTopicUseCase),
                progress: Arc::new(StubGetProgressUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_topic_use_cases(mut self, topic: TopicUseCases) -> Self {
        self.topic = topic;
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.topic.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_topic(
        mut self,
        uc: impl GetSingleTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_update_topic(
        mut self,
        uc: impl UpdateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.update = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.delete = Arc::new(uc);
        self
    }

    pub fn with_get_progress(
        mut self,
        uc: impl GetProgressUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.progress = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { topic: self.topic })
    }
}
