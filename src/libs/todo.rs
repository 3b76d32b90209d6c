//! Task records, categories and request bodies exchanged with the task API.
//!
//! Field names follow the API's JSON (`modifiedAt`, upper snake-case category
//! labels). Identifiers and timestamps are assigned by the server; the client
//! never generates either.

use crate::libs::messages::Message;
use chrono::{DateTime, Local, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of task categories.
///
/// Serialized as the upper snake-case label (`READING_DOCS`). Ordering follows
/// declaration order, which keeps filter sets and their query parameters
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    Study,
    Project,
    ReadingDocs,
    CodingPractice,
    InterviewPrep,
    Networking,
    Life,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Study,
        Category::Project,
        Category::ReadingDocs,
        Category::CodingPractice,
        Category::InterviewPrep,
        Category::Networking,
        Category::Life,
    ];

    /// Wire label, as sent in bodies and `category` query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Study => "STUDY",
            Category::Project => "PROJECT",
            Category::ReadingDocs => "READING_DOCS",
            Category::CodingPractice => "CODING_PRACTICE",
            Category::InterviewPrep => "INTERVIEW_PREP",
            Category::Networking => "NETWORKING",
            Category::Life => "LIFE",
        }
    }

    /// Human-readable label: underscores become spaces, words are title-cased.
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let lower = word.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display label for an optional category, with a fallback for unset ones.
pub fn format_category(category: Option<Category>) -> String {
    match category {
        Some(category) => category.label(),
        None => Message::Unclassified.to_string(),
    }
}

/// Formats a server timestamp in local time.
///
/// The timestamp is opaque to the client: RFC 3339 and zone-less ISO values
/// are reformatted, anything else is shown verbatim.
pub fn format_modified(modified_at: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(modified_at) {
        return timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(modified_at, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.format("%Y-%m-%d %H:%M").to_string();
    }
    modified_at.to_string()
}

/// A task record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub completed: bool,
    #[serde(default)]
    pub category: Option<Category>,
    pub modified_at: String,
}

/// Body of `POST /{base}`. All fields are required by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTodoRequest {
    pub description: String,
    pub completed: bool,
    pub category: Category,
}

impl CreateTodoRequest {
    pub fn new(description: &str, category: Category) -> Self {
        Self {
            description: description.to_string(),
            completed: false,
            category,
        }
    }
}

/// Body of `PATCH /{base}/{id}`. Absent fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTodoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl UpdateTodoRequest {
    pub fn description(description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            ..Default::default()
        }
    }
}
