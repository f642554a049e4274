//! Parser module — comment blocks to documentation tree.
//!
//! Leaf-first: [`extract`] finds blocks, [`tokenize`] splits them into
//! tokens, [`interpret`] decodes records, [`assemble`] builds the per-file
//! tree and [`order`] sorts it.

pub mod assemble;
pub mod extract;
pub mod interpret;
pub mod order;
pub mod tokenize;

use crate::error::{MalformedPolicy, Result};
use crate::model::{DocumentModel, SourceUnit};
use std::path::Path;

/// Parse one source file. `Ok(None)` means the file has nothing to document.
pub fn parse_file(
    path: &Path,
    content: &str,
    policy: MalformedPolicy,
) -> Result<Option<DocumentModel>> {
    let unit = SourceUnit::new(path.to_string_lossy(), content);
    assemble::assemble(&unit, policy)
}
