// src/modules/topic/application/domain/validation.rs
//
// Request bodies arrive as raw JSON so that every offending field can be
// reported at once instead of stopping at the first serde failure.

use serde_json::{Map, Value};
use std::fmt;

use super::entities::{AssignedTo, NewTopic, Subtopic, TopicPatch, TopicStatus};

//
// ──────────────────────────────────────────────────────────
// Field Errors
// ──────────────────────────────────────────────────────────
//

/// Field path (`title`, `subtopics[0].completed`, ...) to human-readable
/// message, in the order the fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(field, message);
        errors
    }

    /// Keeps the first message recorded for a field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if !self.contains(&field) {
            self.0.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|(f, _)| f == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error: ")?;
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{message} at \"{field}\"")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

//
// ──────────────────────────────────────────────────────────
// Entry points
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Partial,
}

/// Full create-mode validation. Only `description` may be left out; it
/// defaults to an empty string.
pub fn validate_new_topic(raw: &Value) -> Result<NewTopic, FieldErrors> {
    let obj = expect_object(raw)?;
    let mut errors = FieldErrors::default();
    let fields = read_fields(obj, Mode::Create, &mut errors);

    match fields {
        TopicPatch {
            title: Some(title),
            description,
            subtopics: Some(subtopics),
            status: Some(status),
            assigned_to: Some(assigned_to),
        } if errors.is_empty() => Ok(NewTopic {
            title,
            description: description.unwrap_or_default(),
            subtopics,
            status,
            assigned_to,
        }),
        _ => Err(errors),
    }
}

/// Partial-mode validation used for updates: any subset of fields, each
/// checked with the create-mode rule. `{}` is a valid empty patch.
pub fn validate_topic_patch(raw: &Value) -> Result<TopicPatch, FieldErrors> {
    let obj = expect_object(raw)?;
    let mut errors = FieldErrors::default();
    let patch = read_fields(obj, Mode::Partial, &mut errors);

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}

//
// ──────────────────────────────────────────────────────────
// Field rules
// ──────────────────────────────────────────────────────────
//

fn read_fields(obj: &Map<String, Value>, mode: Mode, errors: &mut FieldErrors) -> TopicPatch {
    TopicPatch {
        title: field(obj, mode, "title", errors).and_then(|v| title(v, errors)),
        description: obj
            .get("description")
            .and_then(|v| string(v, "description", errors)),
        subtopics: field(obj, mode, "subtopics", errors).and_then(|v| subtopics(v, errors)),
        status: field(obj, mode, "status", errors)
            .and_then(|v| enum_value::<TopicStatus>(v, "status", &status_options(), errors)),
        assigned_to: field(obj, mode, "assignedTo", errors)
            .and_then(|v| enum_value::<AssignedTo>(v, "assignedTo", &assignee_options(), errors)),
    }
}

/// Create mode records a missing key as `Required`; partial mode lets it be.
fn field<'a>(
    obj: &'a Map<String, Value>,
    mode: Mode,
    key: &str,
    errors: &mut FieldErrors,
) -> Option<&'a Value> {
    match mode {
        Mode::Create => required(obj, None, key, errors),
        Mode::Partial => obj.get(key),
    }
}

fn expect_object(raw: &Value) -> Result<&Map<String, Value>, FieldErrors> {
    raw.as_object().ok_or_else(|| {
        FieldErrors::single(
            "body",
            format!("Expected object, received {}", type_name(raw)),
        )
    })
}

fn string(value: &Value, field: &str, errors: &mut FieldErrors) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => {
            errors.insert(
                field,
                format!("Expected string, received {}", type_name(other)),
            );
            None
        }
    }
}

fn title(value: &Value, errors: &mut FieldErrors) -> Option<String> {
    let s = string(value, "title", errors)?;
    if s.is_empty() {
        errors.insert("title", "Title cannot be empty");
        return None;
    }
    Some(s)
}

fn boolean(value: &Value, field: &str, errors: &mut FieldErrors) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        other => {
            errors.insert(
                field,
                format!("Expected boolean, received {}", type_name(other)),
            );
            None
        }
    }
}

fn subtopics(value: &Value, errors: &mut FieldErrors) -> Option<Vec<Subtopic>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            errors.insert(
                "subtopics",
                format!("Expected array, received {}", type_name(other)),
            );
            return None;
        }
    };

    let before = errors.len();
    let mut parsed = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let path = format!("subtopics[{i}]");

        let Some(obj) = item.as_object() else {
            errors.insert(
                path,
                format!("Expected object, received {}", type_name(item)),
            );
            continue;
        };

        let id = required(obj, Some(path.as_str()), "id", errors)
            .and_then(|v| string(v, &format!("{path}.id"), errors));
        let title = required(obj, Some(path.as_str()), "title", errors)
            .and_then(|v| string(v, &format!("{path}.title"), errors));
        let completed = required(obj, Some(path.as_str()), "completed", errors)
            .and_then(|v| boolean(v, &format!("{path}.completed"), errors));

        if let (Some(id), Some(title), Some(completed)) = (id, title, completed) {
            parsed.push(Subtopic {
                id,
                title,
                completed,
            });
        }
    }

    (errors.len() == before).then_some(parsed)
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    parent: Option<&str>,
    key: &str,
    errors: &mut FieldErrors,
) -> Option<&'a Value> {
    let value = obj.get(key);
    if value.is_none() {
        let path = match parent {
            Some(parent) => format!("{parent}.{key}"),
            None => key.to_string(),
        };
        errors.insert(path, "Required");
    }
    value
}

fn enum_value<T: std::str::FromStr>(
    value: &Value,
    field: &str,
    options: &str,
    errors: &mut FieldErrors,
) -> Option<T> {
    match value {
        Value::String(s) => match s.parse::<T>() {
            Ok(v) => Some(v),
            Err(_) => {
                errors.insert(
                    field,
                    format!("Invalid enum value. Expected {options}, received '{s}'"),
                );
                None
            }
        },
        other => {
            errors.insert(
                field,
                format!("Expected {options}, received {}", type_name(other)),
            );
            None
        }
    }
}

fn status_options() -> String {
    quoted_options(TopicStatus::ALL.iter().map(TopicStatus::as_str))
}

fn assignee_options() -> String {
    quoted_options(AssignedTo::ALL.iter().map(AssignedTo::as_str))
}

fn quoted_options<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
