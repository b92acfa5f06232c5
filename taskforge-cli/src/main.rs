//! Taskforge — task-catalog adapter for host build tools.
//!
//! # Usage
//!
//! ```text
//! taskforge list --project <name> [--python-version <v>] [--json]
//! taskforge show <task> --project <name> [--python-version <v>]
//! taskforge export --project <name> [--python-version <v>] [-o <file>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use commands::{export::ExportArgs, list::ListArgs, show::ShowArgs};
use taskforge_core::{HostOs, TaskRegistry};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "taskforge",
    version,
    about = "Produce build/test/lint/doc task descriptors for a Python project",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enumerate the task catalog.
    List(ListArgs),

    /// Show one task's actions and prerequisites.
    Show(ShowArgs),

    /// Emit the full catalog as a YAML task manifest.
    Export(ExportArgs),
}

// ---------------------------------------------------------------------------
// Shared registry arguments
// ---------------------------------------------------------------------------

/// Project identity shared by every subcommand.
#[derive(Args, Debug)]
pub struct RegistryOpts {
    /// Project display name (e.g. "my-doit-project").
    #[arg(long, short = 'p')]
    pub project: String,

    /// Python version selector for the environment interpreter
    /// (e.g. "3.11"). Empty means the default `python`.
    #[arg(long, default_value = "")]
    pub python_version: String,
}

impl RegistryOpts {
    pub fn registry(&self) -> TaskRegistry {
        TaskRegistry::new(&self.project, &self.python_version, HostOs::current())
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::List(args) => args.run(),
        Commands::Show(args) => args.run(),
        Commands::Export(args) => args.run(),
    }
}
