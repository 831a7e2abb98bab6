//! Project and task planning operations.

use serde::Serialize;
use spektrum_core::{Project, Task};

use crate::client::{ApiRequest, SpektrumClient};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct CreateProjectRequest<'a> {
    owner: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskRequest<'a> {
    project_id: &'a str,
    title: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LeaveCommentRequest<'a> {
    task_id: &'a str,
    comment_text: &'a str,
    author_id: &'a str,
}

impl SpektrumClient {
    /// Create a project owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError`](crate::SpektrumError) if the request fails,
    /// the API returns a non-success status, or the body is not a project.
    pub async fn create_project(&self, owner: &str) -> Result<Project> {
        let request = ApiRequest::post("/planning/project").json(&CreateProjectRequest { owner })?;
        self.execute_as(request).await
    }

    /// Create a task in `project_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError`](crate::SpektrumError) if the request fails,
    /// the API returns a non-success status, or the body is not a task.
    pub async fn create_task(
        &self,
        project_id: &str,
        title: &str,
        description: &str,
    ) -> Result<Task> {
        let request = ApiRequest::post("/planning/task").json(&CreateTaskRequest {
            project_id,
            title,
            description,
        })?;
        self.execute_as(request).await
    }

    /// Leave a comment on a task. Returns the task with the new
    /// `COMMENT_LEFT` activity appended.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError`](crate::SpektrumError) if the request fails,
    /// the API returns a non-success status, or the body is not a task.
    pub async fn leave_comment(
        &self,
        task_id: &str,
        comment_text: &str,
        author_id: &str,
    ) -> Result<Task> {
        let request = ApiRequest::post("/planning/task/leave-comment").json(&LeaveCommentRequest {
            task_id,
            comment_text,
            author_id,
        })?;
        self.execute_as(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn create_task_body_is_camel_case() {
        let body = CreateTaskRequest {
            project_id: "p1",
            title: "T",
            description: "D",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "projectId": "p1", "title": "T", "description": "D" })
        );
    }

    #[test]
    fn leave_comment_body_is_camel_case() {
        let body = LeaveCommentRequest {
            task_id: "t1",
            comment_text: "nice",
            author_id: "u1",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "taskId": "t1", "commentText": "nice", "authorId": "u1" })
        );
    }
}
