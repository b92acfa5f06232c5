//! Catalog-shape and command-surface integration tests.

use std::path::PathBuf;

use rstest::rstest;

use taskforge_core::paths::VENV_DIR;
use taskforge_core::registry::{self, TaskRegistry};
use taskforge_core::types::HostOs;

fn registry() -> TaskRegistry {
    TaskRegistry::new("my-doit-project", "3.6", HostOs::Posix)
}

// ---------------------------------------------------------------------------
// 1. Path resolver (as exposed by the registry)
// ---------------------------------------------------------------------------

#[test]
fn venv_root_is_dot_env() {
    assert_eq!(VENV_DIR, ".env");
}

#[test]
fn posix_registry_resolves_env_bin() {
    let reg = TaskRegistry::new("demo", "", HostOs::Posix);
    assert_eq!(reg.paths().bin_dir().file_name().unwrap(), "bin");
}

#[test]
fn windows_registry_resolves_env_scripts() {
    let reg = TaskRegistry::new("demo", "", HostOs::Windows);
    assert_eq!(reg.paths().bin_dir().file_name().unwrap(), "Scripts");
}

#[rstest]
#[case(HostOs::Posix, "pip")]
#[case(HostOs::Posix, "python")]
#[case(HostOs::Posix, "py.test")]
#[case(HostOs::Posix, "pylint")]
#[case(HostOs::Posix, "flake8")]
#[case(HostOs::Posix, "sphinx")]
#[case(HostOs::Windows, "pip")]
#[case(HostOs::Windows, "python")]
fn tool_paths_compose_root_bin_and_name(#[case] os: HostOs, #[case] tool: &str) {
    let paths = TaskRegistry::new("demo", "", os).paths().clone();
    let path = paths.tool(tool);
    assert_eq!(path.file_name().unwrap(), tool);
    assert_eq!(path.parent().unwrap(), paths.bin_dir());
    assert_eq!(
        paths.bin_dir().parent().unwrap(),
        &PathBuf::from(VENV_DIR)
    );
}

// ---------------------------------------------------------------------------
// 2. Catalog shape
// ---------------------------------------------------------------------------

#[test]
fn catalog_is_exactly_eight_tasks() {
    let tasks = registry().tasks();
    assert_eq!(tasks.len(), 8);

    let mut names: Vec<String> = tasks.iter().map(|t| t.name.0.clone()).collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "create-environment",
            "doc",
            "install",
            "lint",
            "make-distribution",
            "reset",
            "setup",
            "test",
        ]
    );
}

#[test]
fn catalog_shape_is_independent_of_inputs() {
    let a = TaskRegistry::new("demo", "", HostOs::Posix);
    let b = TaskRegistry::new("an-entirely different name!", "3.12", HostOs::Windows);
    let names = |reg: &TaskRegistry| -> Vec<String> {
        reg.tasks().iter().map(|t| t.name.0.clone()).collect()
    };
    assert_eq!(names(&a), names(&b));
}

#[test]
fn display_name_preserved_ident_normalized() {
    let reg = registry();
    assert_eq!(reg.project_name(), "my-doit-project");
    assert_eq!(reg.project_ident(), "my_doit_project");
}

// ---------------------------------------------------------------------------
// 3. Command surface
// ---------------------------------------------------------------------------

#[test]
fn default_interpreter_when_version_empty() {
    let reg = TaskRegistry::new("demo", "", HostOs::Posix);
    let cmd = reg.create_environment().shell_commands()[0].to_string();
    // No version suffix: "python" directly followed by the venv invocation.
    assert!(cmd.starts_with("python -m venv"), "got: {cmd}");
    assert!(cmd.contains("--prompt \"demo\""));
    assert!(cmd.ends_with(VENV_DIR));
}

#[test]
fn versioned_interpreter_when_version_given() {
    let reg = TaskRegistry::new("demo", "3.11", HostOs::Posix);
    let cmd = reg.create_environment().shell_commands()[0].to_string();
    assert!(cmd.starts_with("python3.11 -m venv"), "got: {cmd}");
}

#[test]
fn setup_upgrades_tooling_then_installs_dev_extras() {
    let shell: Vec<String> = registry()
        .setup()
        .shell_commands()
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(shell.len(), 2);
    assert!(shell[0].ends_with("pip install --upgrade pip setuptools"));
    assert!(shell[1].ends_with("pip install .[dev]"));
}

#[test]
fn make_distribution_builds_sdist_and_wheel() {
    let cmd = registry().make_distribution().shell_commands()[0].to_string();
    assert!(cmd.ends_with("python setup.py sdist bdist_wheel"));
}

#[test]
fn install_upgrades_from_built_wheel() {
    let cmd = registry().install().shell_commands()[0].to_string();
    assert!(cmd.ends_with("pip install --upgrade dist/*.whl"));
}

#[test]
fn test_command_carries_the_full_flag_surface() {
    let cmd = registry().test().shell_commands()[0].to_string();
    for flag in [
        "-vv",
        "-n auto",
        "--ignore=tests/experiments/",
        "--html=build/tests/html/tests.html",
        "--junitxml=build/tests/xml/tests.xml",
        "--cov my_doit_project",
        "--cov-report term",
        "--cov-report html:build/tests/coverage/html",
        "--cov-report xml:build/tests/coverage/xml/coverage.xml",
    ] {
        assert!(cmd.contains(flag), "missing `{flag}` in: {cmd}");
    }
}

#[test]
fn doc_runs_apidoc_then_site_build() {
    let shell: Vec<String> = registry()
        .doc()
        .shell_commands()
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(shell.len(), 2);
    assert!(shell[0].contains("sphinx-apidoc -o build/doc/source"));
    assert!(shell[0].contains("--force --separate --module-first my_doit_project"));
    assert!(shell[1].contains("sphinx-build -j auto -n build/doc/source build/doc/html"));
}

// ---------------------------------------------------------------------------
// 4. Prerequisite chain
// ---------------------------------------------------------------------------

#[test]
fn install_chain_is_linear_and_everything_else_independent() {
    let reg = registry();
    let deps = |name: &str| -> Vec<String> {
        reg.get(name)
            .unwrap()
            .setup
            .iter()
            .map(|d| d.0.clone())
            .collect()
    };
    assert_eq!(deps("setup"), vec!["create-environment"]);
    assert_eq!(deps("make-distribution"), vec!["setup"]);
    assert_eq!(deps("install"), vec!["make-distribution"]);
    for independent in ["create-environment", "doc", "lint", "reset", "test"] {
        assert!(deps(independent).is_empty());
    }
}

#[test]
fn no_dangling_prerequisites() {
    let reg = registry();
    for task in reg.tasks() {
        for dep in &task.setup {
            assert!(
                registry::CATALOG.contains(&dep.0.as_str()),
                "task {} references unknown prerequisite {dep}",
                task.name
            );
        }
    }
}
