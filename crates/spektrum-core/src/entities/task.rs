use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Activity;
use crate::enums::TaskStatus;
use crate::timestamp;

/// A unit of work within a project, with status and an activity history.
///
/// `activities` is append-only on the server and arrives in chronological
/// order; the client preserves that order as received. Timestamps are kept
/// as the ISO-8601 text the server sent; see [`Task::created_at`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub project_id: String,
    pub created: String,
    /// `None` until the task is first modified.
    pub updated: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Task {
    /// The most recent activity, if any.
    #[must_use]
    pub fn latest_activity(&self) -> Option<&Activity> {
        self.activities.last()
    }

    /// `created` as a UTC instant, if the server's text parses.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        timestamp::parse(&self.created)
    }

    /// `updated` as a UTC instant. `None` when unset or unparseable.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated.as_deref().and_then(timestamp::parse)
    }
}
