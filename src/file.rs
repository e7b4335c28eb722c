// src/file.rs

use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Write the finished calendar, creating parent directories as needed.
/// An existing file is overwritten.
pub fn write_calendar(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Config(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// `-o some/dir/` (or an existing directory) means `some/dir/<default_filename>`.
pub fn resolve_out_path(p: &Path, default_filename: &str) -> std::path::PathBuf {
    if looks_like_dir_hint(p) || p.is_dir() {
        p.join(default_filename)
    } else {
        p.to_path_buf()
    }
}
