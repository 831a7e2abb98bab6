//! Status and discriminant enums for the Spektrum planning API.
//!
//! Unlike most enums in the workspace these do not follow a single casing
//! rule: task statuses travel as human-readable labels (`"Work in progress"`)
//! while activity types are SCREAMING_SNAKE_CASE tags. `as_str()` always
//! returns the exact wire string.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task as reported by the planning service.
///
/// The client never transitions a task itself; the server owns the
/// lifecycle and the SDK only reports what it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TaskStatus {
    #[serde(rename = "Todo")]
    Todo,
    #[serde(rename = "Work in progress")]
    WorkInProgress,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::WorkInProgress => "Work in progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityType
// ---------------------------------------------------------------------------

/// Discriminant of an [`Activity`](crate::entities::Activity) record.
///
/// Serialized under the `type` key of every activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    CommentLeft,
    DescriptionUpdated,
    FinishedWork,
    StartedWork,
    TaskCreated,
    TitleUpdated,
}

impl ActivityType {
    /// All activity types, in wire-tag order.
    pub const ALL: [Self; 6] = [
        Self::CommentLeft,
        Self::DescriptionUpdated,
        Self::FinishedWork,
        Self::StartedWork,
        Self::TaskCreated,
        Self::TitleUpdated,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CommentLeft => "COMMENT_LEFT",
            Self::DescriptionUpdated => "DESCRIPTION_UPDATED",
            Self::FinishedWork => "FINISHED_WORK",
            Self::StartedWork => "STARTED_WORK",
            Self::TaskCreated => "TASK_CREATED",
            Self::TitleUpdated => "TITLE_UPDATED",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(task_todo, TaskStatus, TaskStatus::Todo, "Todo");
    test_serde_roundtrip!(
        task_work_in_progress,
        TaskStatus,
        TaskStatus::WorkInProgress,
        "Work in progress"
    );
    test_serde_roundtrip!(task_done, TaskStatus, TaskStatus::Done, "Done");

    test_serde_roundtrip!(
        activity_comment_left,
        ActivityType,
        ActivityType::CommentLeft,
        "COMMENT_LEFT"
    );
    test_serde_roundtrip!(
        activity_description_updated,
        ActivityType,
        ActivityType::DescriptionUpdated,
        "DESCRIPTION_UPDATED"
    );
    test_serde_roundtrip!(
        activity_title_updated,
        ActivityType,
        ActivityType::TitleUpdated,
        "TITLE_UPDATED"
    );

    #[test]
    fn display_matches_wire_string() {
        for status in [TaskStatus::Todo, TaskStatus::WorkInProgress, TaskStatus::Done] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
        for kind in ActivityType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn unknown_task_status_is_rejected() {
        let result = serde_json::from_str::<TaskStatus>("\"In review\"");
        assert!(result.is_err());
    }

    #[test]
    fn task_status_is_case_sensitive() {
        assert!(serde_json::from_str::<TaskStatus>("\"todo\"").is_err());
        assert!(serde_json::from_str::<TaskStatus>("\"WORK_IN_PROGRESS\"").is_err());
    }
}
