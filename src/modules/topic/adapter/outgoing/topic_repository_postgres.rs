use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::{NewTopic, Topic, TopicPatch};
use crate::modules::topic::application::ports::outgoing::{TopicRepository, TopicRepositoryError};

// SeaORM entity imports
use super::sea_orm_entity::{
    subtopics_to_json, ActiveModel as TopicActiveModel, Column as TopicColumn,
    Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: NewTopic) -> Result<Topic, TopicRepositoryError> {
        let row = TopicModel::from_new_topic(Uuid::new_v4().to_string(), &data)
            .map_err(TopicRepositoryError::SerializationError)?;

        let active = TopicActiveModel {
            id: Set(row.id),
            title: Set(row.title),
            description: Set(row.description),
            subtopics: Set(row.subtopics),
            status: Set(row.status),
            assigned_to: Set(row.assigned_to),
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_topic(inserted)
    }

    async fn update_topic(
        &self,
        topic_id: &str,
        patch: TopicPatch,
    ) -> Result<Option<Topic>, TopicRepositoryError> {
        let mut model = <TopicActiveModel as Default>::default();

        if let Some(title) = patch.title {
            model.title = Set(title);
        }

        if let Some(description) = patch.description {
            model.description = Set(description);
        }

        if let Some(subtopics) = patch.subtopics {
            model.subtopics =
                Set(subtopics_to_json(&subtopics).map_err(TopicRepositoryError::SerializationError)?);
        }

        if let Some(status) = patch.status {
            model.status = Set(status.as_str().to_string());
        }

        if let Some(assigned_to) = patch.assigned_to {
            model.assigned_to = Set(assigned_to.as_str().to_string());
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.subtopics.is_set()
            || model.status.is_set()
            || model.assigned_to.is_set();

        if !has_changes {
            return TopicEntity::find_by_id(topic_id.to_string())
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(model_to_topic)
                .transpose();
        }

        let results = TopicEntity::update_many()
            .set(model)
            .filter(TopicColumn::Id.eq(topic_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results.into_iter().next().map(model_to_topic).transpose()
    }

    async fn delete_topic(&self, topic_id: &str) -> Result<bool, TopicRepositoryError> {
        let res = TopicEntity::delete_by_id(topic_id.to_string())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected > 0)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_topic(model: TopicModel) -> Result<Topic, TopicRepositoryError> {
    model
        .to_topic()
        .map_err(TopicRepositoryError::SerializationError)
}

fn map_db_err(e: DbErr) -> TopicRepositoryError {
    TopicRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
