// src/modules/topic/application/domain/progress.rs
//
// Dashboard derivations. Everything here is computed from the full topic
// list; nothing is persisted.

use serde::Serialize;
use utoipa::ToSchema;

use super::entities::{AssignedTo, Topic, TopicPatch, TopicStatus};

/// round(part / whole * 100), half rounds up, 0 for an empty whole.
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}

//
// ──────────────────────────────────────────────────────────
// Grouping
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicGroups {
    pub common: Vec<Topic>,
    pub chayan: Vec<Topic>,
    pub divyam: Vec<Topic>,
}

impl TopicGroups {
    pub fn partition(topics: impl IntoIterator<Item = Topic>) -> Self {
        let mut groups = Self::default();
        for topic in topics {
            match topic.assigned_to {
                AssignedTo::None => groups.common.push(topic),
                AssignedTo::Chayan => groups.chayan.push(topic),
                AssignedTo::Divyam => groups.divyam.push(topic),
            }
        }
        groups
    }

    pub fn get(&self, assignee: AssignedTo) -> &[Topic] {
        match assignee {
            AssignedTo::None => &self.common,
            AssignedTo::Chayan => &self.chayan,
            AssignedTo::Divyam => &self.divyam,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Stats
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub percent: u32,
}

impl AssigneeStats {
    pub fn from_topics<'a>(topics: impl IntoIterator<Item = &'a Topic>) -> Self {
        let mut stats = Self::default();
        for topic in topics {
            stats.total += 1;
            match topic.status {
                TopicStatus::Completed => stats.completed += 1,
                TopicStatus::InProgress => stats.in_progress += 1,
                TopicStatus::NotStarted => {}
            }
        }
        stats.percent = percent(stats.completed, stats.total);
        stats
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProgressBoard {
    pub common: AssigneeStats,
    pub chayan: AssigneeStats,
    pub divyam: AssigneeStats,
}

impl ProgressBoard {
    pub fn from_topics(topics: &[Topic]) -> Self {
        let stats_for = |assignee: AssignedTo| {
            AssigneeStats::from_topics(topics.iter().filter(|t| t.assigned_to == assignee))
        };

        Self {
            common: stats_for(AssignedTo::None),
            chayan: stats_for(AssignedTo::Chayan),
            divyam: stats_for(AssignedTo::Divyam),
        }
    }
}

/// Share of a topic's subtopics that are checked off.
pub fn subtopic_percent(topic: &Topic) -> u32 {
    percent(topic.completed_subtopics(), topic.subtopics.len())
}

//
// ──────────────────────────────────────────────────────────
// Client-side updates
// ──────────────────────────────────────────────────────────
//

/// Flips one subtopic and re-derives the topic status. The patch carries the
/// whole subtopic list plus the new status; `None` if the subtopic is unknown.
pub fn toggle_subtopic(topic: &Topic, subtopic_id: &str) -> Option<TopicPatch> {
    if !topic.subtopics.iter().any(|s| s.id == subtopic_id) {
        return None;
    }

    let subtopics: Vec<_> = topic
        .subtopics
        .iter()
        .cloned()
        .map(|mut s| {
            if s.id == subtopic_id {
                s.completed = !s.completed;
            }
            s
        })
        .collect();

    let status = TopicStatus::derive_from(&subtopics);

    Some(TopicPatch {
        subtopics: Some(subtopics),
        status: Some(status),
        ..Default::default()
    })
}

pub fn move_topic(assignee: AssignedTo) -> TopicPatch {
    TopicPatch {
        assigned_to: Some(assignee),
        ..Default::default()
    }
}

pub fn change_status(status: TopicStatus) -> TopicPatch {
    TopicPatch {
        status: Some(status),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::application::domain::entities::Subtopic;

    fn topic(id: &str, status: TopicStatus, assigned_to: AssignedTo) -> Topic {
        Topic {
            id: id.to_string(),
            title: format!("Topic {id}"),
            description: String::new(),
            subtopics: vec![],
            status,
            assigned_to,
        }
    }

    fn with_subtopics(flags: &[bool]) -> Topic {
        let mut t = topic("t", TopicStatus::NotStarted, AssignedTo::None);
        t.subtopics = flags
            .iter()
            .enumerate()
            .map(|(i, done)| Subtopic {
                id: format!("s{i}"),
                title: format!("Subtopic {i}"),
                completed: *done,
            })
            .collect();
        t
    }

    #[test]
    fn percent_rounds_like_the_dashboard() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(4, 4), 100);
    }

    #[test]
    fn chayan_stats_from_mixed_statuses() {
        let topics = vec![
            topic("1", TopicStatus::Completed, AssignedTo::Chayan),
            topic("2", TopicStatus::InProgress, AssignedTo::Chayan),
            topic("3", TopicStatus::NotStarted, AssignedTo::Chayan),
        ];

        let board = ProgressBoard::from_topics(&topics);

        assert_eq!(
            board.chayan,
            AssigneeStats {
                total: 3,
                completed: 1,
                in_progress: 1,
                percent: 33,
            }
        );
        assert_eq!(board.divyam, AssigneeStats::default());
        assert_eq!(board.common.total, 0);
    }

    #[test]
    fn partition_splits_by_assignee() {
        let groups = TopicGroups::partition(vec![
            topic("1", TopicStatus::NotStarted, AssignedTo::None),
            topic("2", TopicStatus::NotStarted, AssignedTo::Divyam),
            topic("3", TopicStatus::NotStarted, AssignedTo::None),
        ]);

        assert_eq!(groups.get(AssignedTo::None).len(), 2);
        assert_eq!(groups.get(AssignedTo::Divyam)[0].id, "2");
        assert!(groups.chayan.is_empty());
    }

    #[test]
    fn stats_serialize_in_camel_case() {
        let stats = AssigneeStats {
            total: 2,
            completed: 1,
            in_progress: 1,
            percent: 50,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["inProgress"], 1);
        assert_eq!(json["percent"], 50);
    }

    #[test]
    fn toggling_last_open_subtopic_completes_topic() {
        let t = with_subtopics(&[true, false]);

        let patch = toggle_subtopic(&t, "s1").unwrap();

        assert_eq!(patch.status, Some(TopicStatus::Completed));
        assert!(patch.subtopics.unwrap().iter().all(|s| s.completed));
        assert!(patch.title.is_none());
        assert!(patch.assigned_to.is_none());
    }

    #[test]
    fn toggling_one_of_two_is_in_progress() {
        let t = with_subtopics(&[false, false]);
        let patch = toggle_subtopic(&t, "s0").unwrap();
        assert_eq!(patch.status, Some(TopicStatus::InProgress));
    }

    #[test]
    fn untoggling_only_completed_subtopic_resets_status() {
        let t = with_subtopics(&[true, false]);
        let patch = toggle_subtopic(&t, "s0").unwrap();
        assert_eq!(patch.status, Some(TopicStatus::NotStarted));
    }

    #[test]
    fn toggling_unknown_subtopic_yields_nothing() {
        let t = with_subtopics(&[false]);
        assert!(toggle_subtopic(&t, "missing").is_none());
    }

    #[test]
    fn move_and_status_patches_carry_one_field() {
        let moved = move_topic(AssignedTo::Chayan);
        assert_eq!(
            serde_json::to_value(&moved).unwrap(),
            serde_json::json!({ "assignedTo": "chayan" })
        );

        let status = change_status(TopicStatus::InProgress);
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            serde_json::json!({ "status": "in_progress" })
        );
    }

    #[test]
    fn subtopic_percent_of_topic() {
        assert_eq!(subtopic_percent(&with_subtopics(&[])), 0);
        assert_eq!(subtopic_percent(&with_subtopics(&[true, false, false])), 33);
    }
}
