//! Taskforge core library — task descriptors, tool paths, registry, shim.
//!
//! Public API surface:
//! - [`types`] — newtypes, the `Action` variant, and [`TaskDescriptor`]
//! - [`error`] — [`RegistryError`]
//! - [`paths`] — virtualenv tool-path resolution
//! - [`fsops`] — best-effort local filesystem actions
//! - [`registry`] — the 8-operation task catalog
//! - [`shim`] — host-facing export map and serializable manifest

pub mod error;
pub mod fsops;
pub mod paths;
pub mod registry;
pub mod shim;
pub mod types;

pub use error::RegistryError;
pub use registry::TaskRegistry;
pub use shim::{export_tasks, TaskManifest};
pub use types::{Action, HostOs, LocalAction, TaskDescriptor, TaskName};
