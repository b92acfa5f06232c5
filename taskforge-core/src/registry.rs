//! The fixed 8-operation task catalog.
//!
//! # Catalog
//!
//! ```text
//! create-environment   python -m venv, prompt = display name
//! doc                  sphinx-apidoc + sphinx-build into build/doc/
//! install              pip install the built wheel          (after make-distribution)
//! lint                 flake8 + pylint, tee'd to build/lint/
//! make-distribution    sdist + wheel                        (after setup)
//! reset                best-effort cleanup of generated state
//! setup                pip upgrade + install .[dev]         (after create-environment)
//! test                 py.test with coverage + html/xml reports
//! ```
//!
//! # API pattern
//!
//! `TaskRegistry::new(…)` anchors local actions at the current directory;
//! `TaskRegistry::new_at(root, …)` takes an explicit root and is what tests
//! use with a `TempDir`. Shell command strings are always relative to the
//! host tool's working directory and do not embed the root.
//!
//! Descriptors are recomputed fresh on every query; the registry itself is
//! immutable after construction.

use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::fsops::{
    copy_tree, create_dir, remove_bytecode_dirs, remove_bytecode_files, remove_directories,
    remove_files,
};
use crate::paths::{ToolPaths, VENV_DIR};
use crate::types::{Action, HostOs, TaskDescriptor, TaskName};

// ---------------------------------------------------------------------------
// Task names
// ---------------------------------------------------------------------------

pub const CREATE_ENVIRONMENT: &str = "create-environment";
pub const DOC: &str = "doc";
pub const INSTALL: &str = "install";
pub const LINT: &str = "lint";
pub const MAKE_DISTRIBUTION: &str = "make-distribution";
pub const RESET: &str = "reset";
pub const SETUP: &str = "setup";
pub const TEST: &str = "test";

/// All task names in stable enumeration order.
pub const CATALOG: [&str; 8] = [
    CREATE_ENVIRONMENT,
    DOC,
    INSTALL,
    LINT,
    MAKE_DISTRIBUTION,
    RESET,
    SETUP,
    TEST,
];

/// Every descriptor passes tool output through unfiltered.
const VERBOSITY: u8 = 2;

/// State files removed by `reset`, relative to the registry root.
pub const STATE_FILES: [&str; 5] = [".coverage", ".doit.db", ".doit.bak", ".doit.dat", ".doit.dir"];

/// Cache and output directories removed by `reset`, on top of the
/// `<project>.egg-info` directory derived from the normalized identifier.
pub const CACHE_DIRS: [&str; 9] = [
    VENV_DIR,
    ".eggs",
    ".pytest_cache",
    "build",
    "dist",
    ".cache",
    ".benchmark",
    ".tox",
    ".vagrant",
];

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Produces the fixed task catalog for one project.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    project_name: String,
    project_ident: String,
    python_version: String,
    paths: ToolPaths,
    root: PathBuf,
}

impl TaskRegistry {
    /// Registry anchored at the current directory (the host tool's cwd).
    ///
    /// `python_version` selects the interpreter used to create the
    /// environment (`"3.11"` → `python3.11`); empty means the default
    /// `python` found on `$PATH`.
    pub fn new(project_name: impl Into<String>, python_version: impl Into<String>, os: HostOs) -> Self {
        Self::new_at(Path::new("."), project_name, python_version, os)
    }

    /// Registry with an explicit root for local actions; used in tests.
    pub fn new_at(
        root: &Path,
        project_name: impl Into<String>,
        python_version: impl Into<String>,
        os: HostOs,
    ) -> Self {
        let project_name = project_name.into();
        // Hyphens are fine in display strings but not in module/coverage/
        // distribution references.
        let project_ident = project_name.replace('-', "_");
        Self {
            project_name,
            project_ident,
            python_version: python_version.into(),
            paths: ToolPaths::new(os),
            root: root.to_path_buf(),
        }
    }

    /// Human-facing project name, as supplied.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Filesystem/module-safe identifier (`-` normalized to `_`).
    pub fn project_ident(&self) -> &str {
        &self.project_ident
    }

    pub fn python_version(&self) -> &str {
        &self.python_version
    }

    pub fn paths(&self) -> &ToolPaths {
        &self.paths
    }

    // -----------------------------------------------------------------------
    // Catalog
    // -----------------------------------------------------------------------

    /// All 8 descriptors, in [`CATALOG`] order.
    pub fn tasks(&self) -> Vec<TaskDescriptor> {
        vec![
            self.create_environment(),
            self.doc(),
            self.install(),
            self.lint(),
            self.make_distribution(),
            self.reset(),
            self.setup(),
            self.test(),
        ]
    }

    /// Resolve a single descriptor by name.
    pub fn get(&self, name: &str) -> Result<TaskDescriptor, RegistryError> {
        match name {
            CREATE_ENVIRONMENT => Ok(self.create_environment()),
            DOC => Ok(self.doc()),
            INSTALL => Ok(self.install()),
            LINT => Ok(self.lint()),
            MAKE_DISTRIBUTION => Ok(self.make_distribution()),
            RESET => Ok(self.reset()),
            SETUP => Ok(self.setup()),
            TEST => Ok(self.test()),
            other => Err(RegistryError::UnknownTask {
                name: other.to_string(),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Task constructors
    // -----------------------------------------------------------------------

    /// Create the project-local virtual environment, labeled with the
    /// display name. An empty version selector falls back to plain `python`.
    pub fn create_environment(&self) -> TaskDescriptor {
        let cmd = format!(
            "python{} -m venv --prompt \"{}\" {}",
            self.python_version, self.project_name, VENV_DIR
        );
        TaskDescriptor {
            name: TaskName::from(CREATE_ENVIRONMENT),
            actions: vec![Action::shell(cmd)],
            verbosity: VERBOSITY,
            setup: vec![],
        }
    }

    /// Upgrade the install tooling inside the environment, then install the
    /// project with its development extras.
    pub fn setup(&self) -> TaskDescriptor {
        let pip = self.paths.pip();
        TaskDescriptor {
            name: TaskName::from(SETUP),
            actions: vec![
                Action::shell(format!("{} install --upgrade pip setuptools", pip.display())),
                Action::shell(format!("{} install .[dev]", pip.display())),
            ],
            verbosity: VERBOSITY,
            setup: vec![TaskName::from(CREATE_ENVIRONMENT)],
        }
    }

    /// Build a source distribution and a wheel.
    pub fn make_distribution(&self) -> TaskDescriptor {
        TaskDescriptor {
            name: TaskName::from(MAKE_DISTRIBUTION),
            actions: vec![Action::shell(format!(
                "{} setup.py sdist bdist_wheel",
                self.paths.python().display()
            ))],
            verbosity: VERBOSITY,
            setup: vec![TaskName::from(SETUP)],
        }
    }

    /// Install the freshly built wheel into the environment, overwriting any
    /// previous install.
    pub fn install(&self) -> TaskDescriptor {
        TaskDescriptor {
            name: TaskName::from(INSTALL),
            actions: vec![Action::shell(format!(
                "{} install --upgrade dist/*.whl",
                self.paths.pip().display()
            ))],
            verbosity: VERBOSITY,
            setup: vec![TaskName::from(MAKE_DISTRIBUTION)],
        }
    }

    /// Run the test suite with coverage and html/xml reporting. Independent
    /// of the install chain.
    pub fn test(&self) -> TaskDescriptor {
        let options = "-vv \
                       -n auto \
                       --ignore=tests/experiments/ \
                       --html=build/tests/html/tests.html \
                       --junitxml=build/tests/xml/tests.xml";
        let coverage = format!(
            "--cov {} \
             --cov-report term \
             --cov-report html:build/tests/coverage/html \
             --cov-report xml:build/tests/coverage/xml/coverage.xml",
            self.project_ident
        );
        TaskDescriptor {
            name: TaskName::from(TEST),
            actions: vec![Action::shell(format!(
                "{} {options} {coverage}",
                self.paths.pytest().display()
            ))],
            verbosity: VERBOSITY,
            setup: vec![],
        }
    }

    /// Static analysis with flake8 and pylint, tee'd to `build/lint/`.
    pub fn lint(&self) -> TaskDescriptor {
        let lint_dir = self.root.join("build").join("lint");
        TaskDescriptor {
            name: TaskName::from(LINT),
            actions: vec![
                Action::local("create directory build/lint", move || {
                    create_dir(&lint_dir)
                }),
                Action::shell(format!(
                    "{} {} | tee build/lint/flake8.log",
                    self.paths.flake8().display(),
                    self.project_ident
                )),
                Action::shell(format!(
                    "{} --output-format=parseable --reports=no {} | tee build/lint/pylint.log",
                    self.paths.pylint().display(),
                    self.project_ident
                )),
            ],
            verbosity: VERBOSITY,
            setup: vec![],
        }
    }

    /// Generate API documentation and build the html site under `build/doc/`.
    pub fn doc(&self) -> TaskDescriptor {
        let source_dir = self.root.join("build").join("doc").join("source");
        let copy_dst = source_dir.clone();
        let docs_src = self.root.join("docs");
        let sphinx = self.paths.sphinx();
        TaskDescriptor {
            name: TaskName::from(DOC),
            actions: vec![
                Action::local("create directory build/doc/source", move || {
                    create_dir(&source_dir)
                }),
                // The host tool needs a truthy result; a missing or empty
                // docs/ tree is not a doc-build failure.
                Action::local("copy docs/ into build/doc/source", move || {
                    let _ = copy_tree(&docs_src, &copy_dst);
                    true
                }),
                Action::shell(format!(
                    "{}-apidoc -o build/doc/source --force --separate --module-first {}",
                    sphinx.display(),
                    self.project_ident
                )),
                Action::shell(format!(
                    "{}-build -j auto -n build/doc/source build/doc/html",
                    sphinx.display()
                )),
            ],
            verbosity: VERBOSITY,
            setup: vec![],
        }
    }

    /// Best-effort removal of everything the other tasks generate: bytecode,
    /// caches, build outputs, the virtual environment, and the host tool's
    /// incremental-state files. Missing targets are not failures.
    pub fn reset(&self) -> TaskDescriptor {
        let bytecode_root = self.root.clone();
        let cache_root = self.root.clone();

        let mut dirs: Vec<PathBuf> = vec![self.root.join(format!("{}.egg-info", self.project_ident))];
        dirs.extend(CACHE_DIRS.iter().map(|d| self.root.join(d)));
        let files: Vec<PathBuf> = STATE_FILES.iter().map(|f| self.root.join(f)).collect();

        TaskDescriptor {
            name: TaskName::from(RESET),
            actions: vec![
                Action::local("delete compiled bytecode files", move || {
                    remove_bytecode_files(&bytecode_root);
                    true
                }),
                Action::local("delete bytecode cache directories", move || {
                    remove_bytecode_dirs(&cache_root);
                    true
                }),
                Action::local("remove auxiliary directories and state files", move || {
                    remove_directories(&dirs);
                    remove_files(&files);
                    true
                }),
            ],
            verbosity: VERBOSITY,
            setup: vec![],
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TaskRegistry {
        TaskRegistry::new("my-doit-project", "3.6", HostOs::Posix)
    }

    #[test]
    fn project_name_is_normalized_for_references() {
        let reg = registry();
        assert_eq!(reg.project_name(), "my-doit-project");
        assert_eq!(reg.project_ident(), "my_doit_project");
    }

    #[test]
    fn catalog_has_eight_tasks_in_stable_order() {
        let tasks = registry().tasks();
        let names: Vec<&str> = tasks.iter().map(|t| t.name.0.as_str()).collect();
        assert_eq!(names, CATALOG);
    }

    #[test]
    fn every_task_has_verbosity_two() {
        assert!(registry().tasks().iter().all(|t| t.verbosity == 2));
    }

    #[test]
    fn prerequisites_form_the_install_chain() {
        let reg = registry();
        assert_eq!(reg.setup().setup, vec![TaskName::from(CREATE_ENVIRONMENT)]);
        assert_eq!(reg.make_distribution().setup, vec![TaskName::from(SETUP)]);
        assert_eq!(reg.install().setup, vec![TaskName::from(MAKE_DISTRIBUTION)]);
        for name in [CREATE_ENVIRONMENT, DOC, LINT, RESET, TEST] {
            assert!(reg.get(name).unwrap().setup.is_empty(), "{name} must have no prerequisites");
        }
    }

    #[test]
    fn prerequisites_reference_catalog_names_only() {
        for task in registry().tasks() {
            for dep in &task.setup {
                assert!(CATALOG.contains(&dep.0.as_str()), "dangling prerequisite {dep}");
            }
        }
    }

    #[test]
    fn create_environment_embeds_version_in_interpreter() {
        let cmd = registry().create_environment();
        let shell = cmd.shell_commands();
        assert_eq!(shell.len(), 1);
        assert!(shell[0].starts_with("python3.6 -m venv"));
        assert!(shell[0].contains("--prompt \"my-doit-project\""));
        assert!(shell[0].ends_with(".env"));
    }

    #[test]
    fn empty_version_means_default_interpreter() {
        let reg = TaskRegistry::new("demo", "", HostOs::Posix);
        let shell = reg.create_environment().shell_commands()[0].to_string();
        assert!(shell.starts_with("python -m venv"));
        assert!(shell.contains("--prompt \"demo\""));
        assert!(shell.contains(".env"));
    }

    #[test]
    fn test_command_scopes_coverage_to_ident() {
        let shell = registry().test().shell_commands()[0].to_string();
        assert!(shell.contains("-vv"));
        assert!(shell.contains("-n auto"));
        assert!(shell.contains("--ignore=tests/experiments/"));
        assert!(shell.contains("--cov my_doit_project"));
        assert!(shell.contains("--cov-report xml:build/tests/coverage/xml/coverage.xml"));
    }

    #[test]
    fn lint_commands_tee_to_fixed_logs() {
        let shell: Vec<String> = registry()
            .lint()
            .shell_commands()
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(shell.len(), 2);
        assert!(shell[0].ends_with("| tee build/lint/flake8.log"));
        assert!(shell[1].ends_with("| tee build/lint/pylint.log"));
        assert!(shell[1].contains("--output-format=parseable --reports=no"));
    }

    #[test]
    fn windows_registry_uses_scripts_layout() {
        let reg = TaskRegistry::new("demo", "", HostOs::Windows);
        let shell = reg.setup().shell_commands()[0].to_string();
        assert!(shell.contains("Scripts"));
        assert!(!shell.contains(".env/bin"));
    }

    #[test]
    fn get_unknown_task_errors() {
        let err = registry().get("deploy").unwrap_err();
        assert!(err.to_string().contains("unknown task 'deploy'"));
    }
}
