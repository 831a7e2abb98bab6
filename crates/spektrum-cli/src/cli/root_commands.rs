use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a project.
    CreateProject(CreateProjectArgs),
    /// Create a task in a project.
    CreateTask(CreateTaskArgs),
    /// Leave a comment on a task.
    Comment(CommentArgs),
    /// Print the public URL of a project's DEV deployment.
    AppUrl(AppUrlArgs),
    /// Send a task to the AI module to implement and deploy.
    Deploy(DeployArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CreateProjectArgs {
    /// Owning user ID.
    pub owner: String,
}

#[derive(Clone, Debug, Args)]
pub struct CreateTaskArgs {
    pub project_id: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
}

#[derive(Clone, Debug, Args)]
pub struct CommentArgs {
    pub task_id: String,
    #[arg(long)]
    pub text: String,
    /// Author user ID.
    #[arg(long)]
    pub author: String,
}

#[derive(Clone, Debug, Args)]
pub struct AppUrlArgs {
    pub project_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct DeployArgs {
    /// Path to a task JSON document, or `-` for stdin.
    pub task: PathBuf,
}
