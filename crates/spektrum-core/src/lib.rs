//! # spektrum-core
//!
//! Wire data model for the Spektrum planning API.
//!
//! This crate provides the types shared by the SDK and the CLI:
//! - Entity structs for projects, tasks, and task activities
//! - The task status enumeration and the activity discriminant
//! - The deployment entry-point response
//! - Parsing of the server's timestamp strings
//!
//! Every type mirrors the server's camelCase JSON and derives `JsonSchema`
//! so the shapes can be checked against real payloads.

pub mod entities;
pub mod enums;
pub mod timestamp;

pub use entities::{
    Activity, ActivityEvent, AppEntryPoint, CommentLeftMetadata, DescriptionUpdatedMetadata,
    Project, Task, TaskCreatedMetadata, TitleUpdatedMetadata, WorkMetadata,
};
pub use enums::{ActivityType, TaskStatus};
