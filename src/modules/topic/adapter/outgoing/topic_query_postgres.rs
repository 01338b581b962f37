use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::modules::topic::application::domain::entities::Topic;
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};

// SeaORM entity
use super::sea_orm_entity::{Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn decode(model: &TopicModel) -> Result<Topic, TopicQueryError> {
    model.to_topic().map_err(|reason| TopicQueryError::CorruptRow {
        id: model.id.clone(),
        reason,
    })
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
        let models: Vec<TopicModel> = TopicEntity::find()
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        models.iter().map(decode).collect()
    }

    async fn get_topic(&self, topic_id: &str) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id.to_string())
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        model.as_ref().map(decode).transpose()
    }
}
