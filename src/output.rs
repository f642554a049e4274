//! Idempotent output writes.
//!
//! A page is only rewritten when its fingerprint differs from the file on
//! disk, so regenerating unchanged documentation leaves mtimes alone.

use anyhow::{Context, Result};
use sha2::digest::Output;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What [`write_if_changed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

/// SHA-256 of `bytes`.
pub fn fingerprint(bytes: &[u8]) -> Output<Sha256> {
    Sha256::digest(bytes)
}

/// Write `content` to `path` unless the file already holds the same bytes.
///
/// `overwrite` forces the write.
pub fn write_if_changed(path: &Path, content: &str, overwrite: bool) -> Result<WriteOutcome> {
    let existing = match fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    let outcome = match existing {
        None => WriteOutcome::Created,
        Some(old) if overwrite || fingerprint(&old) != fingerprint(content.as_bytes()) => {
            WriteOutcome::Updated
        }
        Some(_) => return Ok(WriteOutcome::Unchanged),
    };

    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("A.html");
        assert_eq!(write_if_changed(&p, "x", false).unwrap(), WriteOutcome::Created);
        assert_eq!(fs::read_to_string(&p).unwrap(), "x");
    }

    #[test]
    fn same_content_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("A.html");
        fs::write(&p, "same").unwrap();
        assert_eq!(write_if_changed(&p, "same", false).unwrap(), WriteOutcome::Unchanged);
    }

    #[test]
    fn changed_content_is_written() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("A.html");
        fs::write(&p, "old").unwrap();
        assert_eq!(write_if_changed(&p, "new", false).unwrap(), WriteOutcome::Updated);
        assert_eq!(fs::read_to_string(&p).unwrap(), "new");
    }

    #[test]
    fn overwrite_forces_write() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("A.html");
        fs::write(&p, "same").unwrap();
        assert_eq!(write_if_changed(&p, "same", true).unwrap(), WriteOutcome::Updated);
    }

    #[test]
    fn fingerprint_distinguishes_content() {
        assert_eq!(fingerprint(b"a"), fingerprint(b"a"));
        assert_ne!(fingerprint(b"a"), fingerprint(b"b"));
    }
}
