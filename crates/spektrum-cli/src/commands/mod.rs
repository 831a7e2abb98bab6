pub mod deployment;
pub mod dispatch;
pub mod project;
pub mod task;
