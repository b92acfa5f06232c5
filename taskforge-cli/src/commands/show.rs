//! `taskforge show <task>` — single-descriptor inspection.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use taskforge_core::types::Action;

use super::super::RegistryOpts;

/// Arguments for `taskforge show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Task name (e.g. "test", "make-distribution").
    pub task: String,

    #[command(flatten)]
    pub registry: RegistryOpts,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let registry = self.registry.registry();
        let task = registry
            .get(&self.task)
            .with_context(|| format!("cannot show task '{}'", self.task))?;

        println!("{} (verbosity {})", task.name.to_string().bold(), task.verbosity);
        if !task.setup.is_empty() {
            let after: Vec<String> = task.setup.iter().map(|d| d.0.clone()).collect();
            println!("  after: {}", after.join(", "));
        }
        for action in &task.actions {
            match action {
                Action::Shell(command) => println!("  $ {command}"),
                Action::Local(local) => println!("  {} {}", "(local)".dimmed(), local.label()),
            }
        }
        Ok(())
    }
}
