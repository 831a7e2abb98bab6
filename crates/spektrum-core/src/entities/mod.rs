//! Entity structs for the Spektrum planning domain.
//!
//! These are transfer shapes only: the server is the source of truth and the
//! client never stores them. All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema` for JSON roundtrip and schema validation.

mod activity;
mod deployment;
mod project;
mod task;

pub use activity::{
    Activity, ActivityEvent, CommentLeftMetadata, DescriptionUpdatedMetadata, TaskCreatedMetadata,
    TitleUpdatedMetadata, WorkMetadata,
};
pub use deployment::AppEntryPoint;
pub use project::Project;
pub use task::Task;
