use sea_orm::entity::prelude::*;

use crate::modules::topic::application::domain::entities::{
    AssignedTo, NewTopic, Subtopic, Topic, TopicStatus,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // Array of {id, title, completed}
    #[sea_orm(column_type = "JsonBinary")]
    pub subtopics: Json,

    #[sea_orm(column_type = "Text")]
    pub status: String,

    #[sea_orm(column_type = "Text")]
    pub assigned_to: String,
}

impl Model {
    pub fn from_new_topic(id: String, data: &NewTopic) -> Result<Self, String> {
        Ok(Self {
            id,
            title: data.title.clone(),
            description: data.description.clone(),
            subtopics: subtopics_to_json(&data.subtopics)?,
            status: data.status.as_str().to_string(),
            assigned_to: data.assigned_to.as_str().to_string(),
        })
    }

    /// Decodes the row. Fails on unknown enum text or malformed subtopics.
    pub fn to_topic(&self) -> Result<Topic, String> {
        let subtopics: Vec<Subtopic> =
            serde_json::from_value(self.subtopics.clone()).map_err(|e| e.to_string())?;

        Ok(Topic {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            subtopics,
            status: self
                .status
                .parse::<TopicStatus>()
                .map_err(|e| e.to_string())?,
            assigned_to: self
                .assigned_to
                .parse::<AssignedTo>()
                .map_err(|e| e.to_string())?,
        })
    }
}

pub fn subtopics_to_json(subtopics: &[Subtopic]) -> Result<Json, String> {
    serde_json::to_value(subtopics).map_err(|e| e.to_string())
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
