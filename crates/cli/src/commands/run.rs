//! `planshot run` - extract, parse and sync one image

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use inquire::{Confirm, InquireError};
use planshot_core::PipelineOutcome;
use planshot_domain::{PipelineMode, SyncResult, TaskRecord};

use crate::context::AppContext;
use crate::observer::ConsoleObserver;

pub async fn execute(
    ctx: &AppContext,
    image: &Path,
    mode: PipelineMode,
    assume_yes: bool,
) -> anyhow::Result<()> {
    let image = super::read_image(image)?;
    super::print_banner(ctx);
    let observer = ConsoleObserver;

    match ctx.pipeline.execute(&image, mode, &observer).await? {
        PipelineOutcome::Synced(result) => report(&result),
        PipelineOutcome::AwaitingConfirmation(pending) => {
            print!("{}", task_table(pending.tasks()));

            if !confirmed(pending.tasks().len(), assume_yes).await? {
                let skipped = pending.into_tasks().len();
                tracing::info!(skipped, "review declined");
                println!("Nothing was added to your calendar.");
                return Ok(());
            }

            let result = ctx.pipeline.confirm(pending, &observer).await?;
            report(&result);
        }
    }
    Ok(())
}

async fn confirmed(task_count: usize, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    let prompt = format!("Add {task_count} task(s) to your calendar?");
    // inquire blocks on the terminal
    let answer = tokio::task::spawn_blocking(move || Confirm::new(&prompt).with_default(true).prompt())
        .await
        .context("confirmation prompt task failed")?;

    match answer {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(err) => Err(err).context("confirmation prompt failed (pass --yes to skip it)"),
    }
}

fn report(result: &SyncResult) {
    println!("Added {} task(s) to your calendar.", result.count());
}

/// Numbered table of the parsed tasks, one line each.
fn task_table(tasks: &[TaskRecord]) -> String {
    if tasks.is_empty() {
        return "No tasks found in the image.\n".to_string();
    }

    let width = tasks.iter().map(|t| t.summary().chars().count()).max().unwrap_or(0).max(4);
    let mut out = format!("  #  {:<width$}  {:<19}  {:<19}\n", "Task", "Start", "End");
    for (index, task) in tasks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:<19}  {:<19}",
            index + 1,
            task.summary(),
            task.start(),
            task.end()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_tasks_in_order() {
        let tasks = vec![
            TaskRecord::new("Gym", "2025-06-01T07:00:00", "2025-06-01T08:00:00"),
            TaskRecord::new("Team sync", "2025-06-01T10:00:00", "2025-06-01T10:30:00"),
        ];

        let table = task_table(&tasks);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Task"));
        assert!(lines[1].starts_with("  1  Gym"));
        assert!(lines[2].starts_with("  2  Team sync"));
        assert!(lines[2].contains("2025-06-01T10:30:00"));
    }

    #[tokio::test]
    async fn assume_yes_skips_the_prompt() {
        assert!(confirmed(3, true).await.expect("no prompt"));
    }

    #[test]
    fn empty_table_says_so() {
        assert_eq!(task_table(&[]), "No tasks found in the image.\n");
    }
}
