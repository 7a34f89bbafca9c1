use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read a file as UTF-8. Fails with the underlying IO error when absent;
/// callers that treat absence as "no config" check `file_exists` first.
pub fn read_file_content(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Write a file, creating parent directories as needed.
pub fn write_file_content(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

/// List files with the given extension directly inside `dir`, sorted by
/// path so downstream output order is deterministic. A missing directory
/// yields an empty list.
pub fn find_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|e| e == extension))
        .collect();
    files.sort();
    files
}

// Paths that must never be deleted even if a misconfigured output path
// points at them.
const PROTECTED_PATHS: &[&str] = &["", ".", "/", "~", "src", "node_modules", "target"];

/// Remove a directory tree. Protected paths are skipped with a warning
/// instead of deleted.
pub fn remove_directory(path: &Path) -> Result<()> {
    let display = path.to_string_lossy();
    if PROTECTED_PATHS.contains(&display.as_ref()) {
        eprintln!("Skipping deletion of protected path: {}", display);
        return Ok(());
    }

    if path.is_dir() {
        std::fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Remove a single file if it exists. Absence is not an error.
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
