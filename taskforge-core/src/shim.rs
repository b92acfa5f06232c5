//! Host-facing registration surface.
//!
//! The host build tool discovers tasks by walking a namespace of
//! `task_<ident>` entries. Rather than mutating any global table, the shim
//! stays a pure function: [`export_tasks`] returns the full export map and
//! the program's entry point decides how to expose it.
//!
//! [`TaskManifest`] is the serializable view of the same catalog: shell
//! actions carry their command string, local actions are represented by
//! their label.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::registry::TaskRegistry;
use crate::types::{Action, HostOs, TaskDescriptor};

/// Prefix the host tool's discovery recognizes.
pub const TASK_PREFIX: &str = "task_";

/// The identifier a descriptor is exposed under: `task_` + the task name
/// with `-` normalized to `_` (e.g. `make-distribution` →
/// `task_make_distribution`).
pub fn host_task_name(task_name: &str) -> String {
    format!("{TASK_PREFIX}{}", task_name.replace('-', "_"))
}

/// Build the full export map for a project: host identifier → descriptor.
///
/// Pure function of its inputs; callers wire the result into whatever
/// namespace their host tool walks.
pub fn export_tasks(
    project_name: &str,
    python_version: &str,
    os: HostOs,
) -> BTreeMap<String, TaskDescriptor> {
    let registry = TaskRegistry::new(project_name, python_version, os);
    registry
        .tasks()
        .into_iter()
        .map(|task| (host_task_name(&task.name.0), task))
        .collect()
}

// ---------------------------------------------------------------------------
// Serializable manifest
// ---------------------------------------------------------------------------

/// Serializable view of one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManifestAction {
    Shell { command: String },
    Local { label: String },
}

impl From<&Action> for ManifestAction {
    fn from(action: &Action) -> Self {
        match action {
            Action::Shell(command) => ManifestAction::Shell {
                command: command.clone(),
            },
            Action::Local(local) => ManifestAction::Local {
                label: local.label().to_string(),
            },
        }
    }
}

/// Serializable view of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestTask {
    pub name: String,
    pub actions: Vec<ManifestAction>,
    pub verbosity: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub setup: Vec<String>,
}

impl From<&TaskDescriptor> for ManifestTask {
    fn from(task: &TaskDescriptor) -> Self {
        Self {
            name: task.name.0.clone(),
            actions: task.actions.iter().map(ManifestAction::from).collect(),
            verbosity: task.verbosity,
            setup: task.setup.iter().map(|dep| dep.0.clone()).collect(),
        }
    }
}

/// Serializable view of the whole catalog for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskManifest {
    pub project: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub python_version: String,
    pub tasks: Vec<ManifestTask>,
}

impl TaskManifest {
    /// Snapshot the registry's catalog in enumeration order.
    pub fn from_registry(registry: &TaskRegistry) -> Self {
        Self {
            project: registry.project_name().to_string(),
            python_version: registry.python_version().to_string(),
            tasks: registry.tasks().iter().map(ManifestTask::from).collect(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, RegistryError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
