use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActivityType;
use crate::timestamp;

/// An immutable, timestamped event recorded against a task.
///
/// On the wire every activity carries the shared envelope fields plus a
/// `type` tag and a `metadata` object whose shape is selected by the tag:
///
/// ```json
/// {
///   "id": "act-1",
///   "type": "COMMENT_LEFT",
///   "projectId": "p1",
///   "taskId": "t1",
///   "userId": "u1",
///   "occurredAt": "2025-01-01T00:00:00Z",
///   "metadata": { "authorId": "u1", "commentText": "looks good" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub project_id: String,
    pub task_id: String,
    pub user_id: String,
    /// ISO-8601 text as sent by the server.
    pub occurred_at: String,
    #[serde(flatten)]
    pub event: ActivityEvent,
}

impl Activity {
    /// The discriminant of this activity's event.
    #[must_use]
    pub const fn kind(&self) -> ActivityType {
        self.event.kind()
    }

    /// `occurred_at` as a UTC instant, if the server's text parses.
    #[must_use]
    pub fn occurred_at_utc(&self) -> Option<DateTime<Utc>> {
        timestamp::parse(&self.occurred_at)
    }
}

/// Variant-specific payload of an [`Activity`], keyed by its `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", content = "metadata", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityEvent {
    CommentLeft(CommentLeftMetadata),
    DescriptionUpdated(DescriptionUpdatedMetadata),
    FinishedWork(WorkMetadata),
    StartedWork(WorkMetadata),
    TaskCreated(TaskCreatedMetadata),
    TitleUpdated(TitleUpdatedMetadata),
}

impl ActivityEvent {
    #[must_use]
    pub const fn kind(&self) -> ActivityType {
        match self {
            Self::CommentLeft(_) => ActivityType::CommentLeft,
            Self::DescriptionUpdated(_) => ActivityType::DescriptionUpdated,
            Self::FinishedWork(_) => ActivityType::FinishedWork,
            Self::StartedWork(_) => ActivityType::StartedWork,
            Self::TaskCreated(_) => ActivityType::TaskCreated,
            Self::TitleUpdated(_) => ActivityType::TitleUpdated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentLeftMetadata {
    pub author_id: String,
    pub comment_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionUpdatedMetadata {
    pub message: String,
    pub old_description: String,
    pub new_description: String,
}

/// Payload shared by `STARTED_WORK` and `FINISHED_WORK`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkMetadata {
    pub worker_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreatedMetadata {
    pub message: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TitleUpdatedMetadata {
    pub message: String,
    pub old_title: String,
    pub new_title: String,
}
