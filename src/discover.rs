//! Source file discovery: plain files, recursive directories and globs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand `patterns` into a sorted, de-duplicated list of files.
///
/// A pattern naming a file is taken as-is whatever its extension. A
/// directory is walked recursively for files ending in `.{ext}`. Anything
/// else is tried as a glob.
pub fn expand(patterns: &[String], ext: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            walk(path, ext, &mut files)?;
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            log::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn walk(dir: &Path, ext: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry =
            entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        let p = entry.path();
        if entry.file_type().is_file() && has_extension(p, ext) {
            files.push(p.to_path_buf());
        }
    }
    Ok(())
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}
