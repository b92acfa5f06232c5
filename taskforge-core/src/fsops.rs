//! Best-effort local filesystem actions.
//!
//! These back the non-shell steps of `lint`, `doc`, and `reset`. The host
//! tool expects truthy/falsy results from in-process actions, so everything
//! here reports a `bool` or silently absorbs failures; a missing target
//! during cleanup is not an error.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

/// Create `dir` and any missing parents. An already-existing directory
/// counts as success.
pub fn create_dir(dir: &Path) -> bool {
    fs::create_dir_all(dir).is_ok()
}

/// Recursively copy the tree rooted at `src` into `dst`, creating `dst` and
/// intermediate directories as needed. Returns `false` if `src` is not a
/// directory or any entry fails to copy.
pub fn copy_tree(src: &Path, dst: &Path) -> bool {
    if !src.is_dir() {
        return false;
    }
    for entry in WalkDir::new(src) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => return false,
        };
        let rel = match entry.path().strip_prefix(src) {
            Ok(r) => r,
            Err(_) => return false,
        };
        let target = dst.join(rel);
        let ok = if entry.file_type().is_dir() {
            fs::create_dir_all(&target).is_ok()
        } else {
            fs::copy(entry.path(), &target).is_ok()
        };
        if !ok {
            return false;
        }
    }
    true
}

/// Remove every directory in `dirs`, recursively. Missing directories and
/// removal failures are ignored.
pub fn remove_directories<P: AsRef<Path>>(dirs: &[P]) {
    for dir in dirs {
        let _ = fs::remove_dir_all(dir.as_ref());
    }
}

/// Remove every file in `files`. Missing files and removal failures are
/// ignored.
pub fn remove_files<P: AsRef<Path>>(files: &[P]) {
    for file in files {
        let _ = fs::remove_file(file.as_ref());
    }
}

/// Delete all compiled bytecode files (`*.pyc`, `*.pyo`) anywhere under
/// `root`. Unreadable entries are skipped.
pub fn remove_bytecode_files(root: &Path) {
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let is_bytecode = entry
            .path()
            .extension()
            .map(|ext| ext == "pyc" || ext == "pyo")
            .unwrap_or(false);
        if is_bytecode {
            let _ = fs::remove_file(entry.path());
        }
    }
}

/// Delete all `__pycache__` directories anywhere under `root`.
pub fn remove_bytecode_dirs(root: &Path) {
    // Collect first: removing while walking would invalidate the iterator.
    let caches: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir() && e.file_name() == "__pycache__")
        .map(|e| e.into_path())
        .collect();
    for cache in caches {
        let _ = fs::remove_dir_all(&cache);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
