//! `taskforge export` — YAML task manifest for host consumption.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use taskforge_core::shim::TaskManifest;

use super::super::RegistryOpts;

/// Arguments for `taskforge export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub registry: RegistryOpts,

    /// Write the manifest to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    pub fn run(self) -> Result<()> {
        let registry = self.registry.registry();
        let manifest = TaskManifest::from_registry(&registry);
        let yaml = manifest.to_yaml().context("failed to serialize task manifest")?;

        match self.output {
            Some(path) => {
                fs::write(&path, yaml)
                    .with_context(|| format!("failed to write manifest to {}", path.display()))?;
                println!("✓ Wrote task manifest to {}", path.display());
            }
            None => print!("{yaml}"),
        }
        Ok(())
    }
}
