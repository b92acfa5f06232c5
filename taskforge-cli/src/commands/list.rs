//! `taskforge list` — catalog enumeration.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use taskforge_core::shim::{ManifestAction, TaskManifest};

use super::super::RegistryOpts;

/// Arguments for `taskforge list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub registry: RegistryOpts,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct TaskTableRow {
    #[tabled(rename = "task")]
    task: String,
    #[tabled(rename = "actions")]
    actions: String,
    #[tabled(rename = "after")]
    after: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let registry = self.registry.registry();
        let manifest = TaskManifest::from_registry(&registry);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&manifest).context("failed to serialize catalog JSON")?
            );
            return Ok(());
        }

        print_table(&manifest);
        Ok(())
    }
}

fn print_table(manifest: &TaskManifest) {
    println!(
        "Taskforge v{} | project {} | {} tasks",
        env!("CARGO_PKG_VERSION"),
        manifest.project.bold(),
        manifest.tasks.len(),
    );

    let rows: Vec<TaskTableRow> = manifest
        .tasks
        .iter()
        .map(|task| TaskTableRow {
            task: task.name.clone(),
            actions: summarize_actions(&task.actions),
            after: if task.setup.is_empty() {
                "-".to_string()
            } else {
                task.setup.join(", ")
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("Run 'taskforge show <task>' for the full command lines.");
}

fn summarize_actions(actions: &[ManifestAction]) -> String {
    let shell = actions
        .iter()
        .filter(|a| matches!(a, ManifestAction::Shell { .. }))
        .count();
    let local = actions.len() - shell;
    match (shell, local) {
        (s, 0) => format!("{s} shell"),
        (0, l) => format!("{l} local"),
        (s, l) => format!("{s} shell + {l} local"),
    }
}
