//! Domain types for the taskforge catalog.
//!
//! A [`TaskDescriptor`] is purely declarative: it bundles a name, an ordered
//! action list, a verbosity level, and prerequisite task names. Shell actions
//! are command strings the host tool runs; local actions are in-process
//! closures that report success as a `bool` (the host tool's truthy/falsy
//! contract — local actions never raise).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed task name, unique within a catalog (e.g. `"setup"`,
/// `"make-distribution"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskName(pub String);

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TaskName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Host OS
// ---------------------------------------------------------------------------

/// OS family of the machine that will execute the generated commands.
///
/// Injected at registry construction rather than read from a load-time
/// global, so either layout can be exercised from a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Posix,
    Windows,
}

impl HostOs {
    /// The OS family of the running process.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Posix
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostOs::Posix => write!(f, "posix"),
            HostOs::Windows => write!(f, "windows"),
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// An in-process action: a labeled closure returning `true` on success.
///
/// Failures inside the closure must be absorbed, not propagated — the host
/// tool expects a truthy/falsy result, never a typed error.
#[derive(Clone)]
pub struct LocalAction {
    label: String,
    run: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl LocalAction {
    pub fn new(label: impl Into<String>, run: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            run: Arc::new(run),
        }
    }

    /// Human-readable description of what the closure does.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Execute the closure, reporting success.
    pub fn run(&self) -> bool {
        (self.run)()
    }
}

impl fmt::Debug for LocalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// One step of a task: either a shell command string for the host tool to
/// execute, or a local in-process operation.
#[derive(Debug, Clone)]
pub enum Action {
    Shell(String),
    Local(LocalAction),
}

impl Action {
    pub fn shell(command: impl Into<String>) -> Self {
        Action::Shell(command.into())
    }

    pub fn local(label: impl Into<String>, run: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Action::Local(LocalAction::new(label, run))
    }

    /// The command string, if this is a shell action.
    pub fn as_shell(&self) -> Option<&str> {
        match self {
            Action::Shell(cmd) => Some(cmd),
            Action::Local(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Task descriptor
// ---------------------------------------------------------------------------

/// A declarative task for the host build tool.
#[derive(Debug, Clone)]
pub struct TaskDescriptor {
    pub name: TaskName,
    /// Ordered steps; every step must succeed for the task to succeed.
    pub actions: Vec<Action>,
    /// Host-tool verbosity; 2 passes tool output through unfiltered.
    pub verbosity: u8,
    /// Names of tasks the host tool must run first. May only reference
    /// names present in the same catalog.
    pub setup: Vec<TaskName>,
}

impl TaskDescriptor {
    /// Command strings of all shell actions, in order.
    pub fn shell_commands(&self) -> Vec<&str> {
        self.actions.iter().filter_map(Action::as_shell).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
