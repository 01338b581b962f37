use std::sync::Arc;

use crate::topic::application::{
    ports::incoming::use_cases::{
        CreateTopicUseCase, DeleteTopicUseCase, GetProgressUseCase, GetSingleTopicUseCase,
        GetTopicsUseCase, UpdateTopicUseCase,
    },
    ports::outgoing::{TopicQuery, TopicRepository},
    services::{
        CreateTopicService, DeleteTopicService, GetProgressService, GetSingleTopicService,
        GetTopicsService, UpdateTopicService,
    },
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleTopicUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub progress: Arc<dyn GetProgressUseCase + Send + Sync>,
}

impl TopicUseCases {
    /// Wires every topic use case over one read port and one write port.
    pub fn wire<Q, R>(query: Q, repository: R) -> Self
    where
        Q: TopicQuery + Clone + 'static,
        R: TopicRepository + Clone + 'static,
    {
        Self {
            get_list: Arc::new(GetTopicsService::new(query.clone())),
            get_single: Arc::new(GetSingleTopicService::new(query.clone())),
            create: Arc::new(CreateTopicService::new(repository.clone())),
            update: Arc::new(UpdateTopicService::new(repository.clone())),
            delete: Arc::new(DeleteTopicService::new(repository)),
            progress: Arc::new(GetProgressService::new(query)),
        }
    }
}
