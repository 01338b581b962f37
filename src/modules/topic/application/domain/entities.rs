use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

//
// ──────────────────────────────────────────────────────────
// Topic Status
// ──────────────────────────────────────────────────────────
//

#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TopicStatus {
    pub const ALL: [TopicStatus; 3] = [
        TopicStatus::NotStarted,
        TopicStatus::InProgress,
        TopicStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::NotStarted => "not_started",
            TopicStatus::InProgress => "in_progress",
            TopicStatus::Completed => "completed",
        }
    }

    /// Roll-up of subtopic completion: every subtopic done => completed,
    /// some done => in_progress, none (or no subtopics) => not_started.
    pub fn derive_from(subtopics: &[Subtopic]) -> Self {
        let done = subtopics.iter().filter(|s| s.completed).count();

        if done == 0 {
            TopicStatus::NotStarted
        } else if done == subtopics.len() {
            TopicStatus::Completed
        } else {
            TopicStatus::InProgress
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TopicStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopicStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "status",
                value: s.to_string(),
            })
    }
}

//
// ──────────────────────────────────────────────────────────
// Assignee
// ──────────────────────────────────────────────────────────
//

/// Owner tag of a topic. `None` is the shared pool both learners see.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AssignedTo {
    #[default]
    None,
    Chayan,
    Divyam,
}

impl AssignedTo {
    pub const ALL: [AssignedTo; 3] = [AssignedTo::None, AssignedTo::Chayan, AssignedTo::Divyam];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignedTo::None => "none",
            AssignedTo::Chayan => "chayan",
            AssignedTo::Divyam => "divyam",
        }
    }
}

impl fmt::Display for AssignedTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssignedTo {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssignedTo::ALL
            .into_iter()
            .find(|assignee| assignee.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "assignedTo",
                value: s.to_string(),
            })
    }
}

//
// ──────────────────────────────────────────────────────────
// Topic + Subtopic
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Subtopic {
    #[schema(example = "1718000000000")]
    pub id: String,
    #[schema(example = "Ownership and borrowing")]
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[schema(example = "3f1c2a9e-6f41-4c55-9a36-0d3b1f1e2c7a")]
    pub id: String,
    #[schema(example = "Rust")]
    pub title: String,
    pub description: String,
    pub subtopics: Vec<Subtopic>,
    pub status: TopicStatus,
    pub assigned_to: AssignedTo,
}

impl Topic {
    pub fn completed_subtopics(&self) -> usize {
        self.subtopics.iter().filter(|s| s.completed).count()
    }
}

/// Validated creation payload: every field resolved, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTopic {
    pub title: String,
    pub description: String,
    pub subtopics: Vec<Subtopic>,
    pub status: TopicStatus,
    pub assigned_to: AssignedTo,
}

impl NewTopic {
    /// Only the title set; every other field holds its column default.
    #[cfg(test)]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            subtopics: Vec::new(),
            status: TopicStatus::default(),
            assigned_to: AssignedTo::default(),
        }
    }

    pub fn into_topic(self, id: String) -> Topic {
        Topic {
            id,
            title: self.title,
            description: self.description,
            subtopics: self.subtopics,
            status: self.status,
            assigned_to: self.assigned_to,
        }
    }
}

/// Partial set of changes for an existing topic. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtopics: Option<Vec<Subtopic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TopicStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<AssignedTo>,
}

impl TopicPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.subtopics.is_none()
            && self.status.is_none()
            && self.assigned_to.is_none()
    }

    /// Applies the present fields onto `topic`. The id never changes.
    pub fn apply_to(self, topic: &mut Topic) {
        if let Some(title) = self.title {
            topic.title = title;
        }
        if let Some(description) = self.description {
            topic.description = description;
        }
        if let Some(subtopics) = self.subtopics {
            topic.subtopics = subtopics;
        }
        if let Some(status) = self.status {
            topic.status = status;
        }
        if let Some(assigned_to) = self.assigned_to {
            topic.assigned_to = assigned_to;
        }
    }
}
