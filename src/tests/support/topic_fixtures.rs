use crate::topic::application::domain::entities::{AssignedTo, Subtopic, Topic, TopicStatus};

pub fn sample_topic(id: &str, title: &str) -> Topic {
    Topic {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("About {title}"),
        subtopics: vec![],
        status: TopicStatus::NotStarted,
        assigned_to: AssignedTo::None,
    }
}

pub fn sample_subtopic(id: &str, completed: bool) -> Subtopic {
    Subtopic {
        id: id.to_string(),
        title: format!("Subtopic {id}"),
        completed,
    }
}

pub async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
    let body = actix_web::test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}
