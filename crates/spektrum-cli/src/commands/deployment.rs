use std::io::Read;
use std::path::Path;

use anyhow::Context;
use spektrum_core::Task;
use spektrum_sdk::SpektrumClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AppUrlArgs, DeployArgs};

/// Handle `spk app-url`. Prints the bare URL so it can be piped.
pub async fn handle_app_url(args: &AppUrlArgs, client: &SpektrumClient) -> anyhow::Result<()> {
    let url = client.get_app_url(&args.project_id).await?;
    println!("{url}");
    Ok(())
}

/// Handle `spk deploy`.
pub async fn handle_deploy(
    args: &DeployArgs,
    client: &SpektrumClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = read_task(&args.task)?;
    client.code_and_deploy(&task).await?;

    if !flags.quiet {
        eprintln!("Submitted task {} for development.", task.id);
    }
    Ok(())
}

fn read_task(source: &Path) -> anyhow::Result<Task> {
    let raw = if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read task JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read task JSON from {}", source.display()))?
    };

    parse_task(&raw)
}

fn parse_task(raw: &str) -> anyhow::Result<Task> {
    serde_json::from_str(raw).context("task JSON does not match the Task shape")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_task_accepts_server_shape() {
        let task = parse_task(
            r#"{
                "id": "t1",
                "title": "T",
                "description": "D",
                "projectId": "p1",
                "created": "2025-03-01T09:00:00Z",
                "updated": null,
                "status": "Todo",
                "activities": []
            }"#,
        )
        .unwrap();
        assert_eq!(task.id, "t1");
    }

    #[test]
    fn parse_task_rejects_unknown_status() {
        let err = parse_task(
            r#"{
                "id": "t1",
                "title": "T",
                "description": "D",
                "projectId": "p1",
                "created": "2025-03-01T09:00:00Z",
                "updated": null,
                "status": "Blocked",
                "activities": []
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Task shape"));
    }
}
