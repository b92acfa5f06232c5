//! Virtualenv tool-path resolution.
//!
//! Every generated command addresses tool binaries inside the project-local
//! virtual environment rather than whatever is on `$PATH`:
//!
//! ```text
//! .env/
//!   bin/       (POSIX)        pip, python, py.test, pylint, flake8, sphinx-*
//!   Scripts/   (Windows)
//! ```
//!
//! The bin subdirectory is a pure function of the OS family, computed once at
//! construction from an injected [`HostOs`] — never re-read per call.

use std::path::PathBuf;

use crate::types::HostOs;

/// Root directory of the project-local virtual environment.
pub const VENV_DIR: &str = ".env";

/// Resolves tool binary paths inside the virtual environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    bin_dir: PathBuf,
}

impl ToolPaths {
    pub fn new(os: HostOs) -> Self {
        let subdir = match os {
            HostOs::Posix => "bin",
            HostOs::Windows => "Scripts",
        };
        Self {
            bin_dir: PathBuf::from(VENV_DIR).join(subdir),
        }
    }

    /// `.env/bin` or `.env/Scripts`.
    pub fn bin_dir(&self) -> &PathBuf {
        &self.bin_dir
    }

    /// `<venv root>/<bin subdir>/<tool>` — pure path composition, no I/O.
    pub fn tool(&self, tool: &str) -> PathBuf {
        self.bin_dir.join(tool)
    }

    pub fn pip(&self) -> PathBuf {
        self.tool("pip")
    }

    pub fn python(&self) -> PathBuf {
        self.tool("python")
    }

    pub fn pytest(&self) -> PathBuf {
        self.tool("py.test")
    }

    pub fn pylint(&self) -> PathBuf {
        self.tool("pylint")
    }

    pub fn flake8(&self) -> PathBuf {
        self.tool("flake8")
    }

    /// Base path for the sphinx family; callers append `-apidoc` / `-build`.
    pub fn sphinx(&self) -> PathBuf {
        self.tool("sphinx")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
