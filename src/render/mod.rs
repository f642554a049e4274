//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;

use crate::model::{ClassRecord, DocumentModel, MemberRecord, Members};
use anyhow::{anyhow, Result};
use std::path::Path;

/// One output file: a class, or the top-level members of a source file.
#[derive(Debug)]
pub struct Page<'a> {
    /// Output file stem: `Namespace.Class`, `Class`, or the source stem
    pub name: String,
    pub source: &'a str,
    pub class: Option<&'a ClassRecord>,
    pub members: &'a Members,
}

/// Split a document into its output pages.
///
/// Classes come first in file order; top-level members get one extra page
/// named after the source file when there are any.
pub fn pages(doc: &DocumentModel) -> Vec<Page<'_>> {
    let mut pages: Vec<Page> = doc
        .classes
        .iter()
        .map(|class| Page {
            name: class.qualified_name(),
            source: &doc.source,
            class: Some(class),
            members: &class.members,
        })
        .collect();

    if !doc.globals.is_empty() {
        let stem = Path::new(&doc.source)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| doc.source.clone());
        pages.push(Page {
            name: stem,
            source: &doc.source,
            class: None,
            members: &doc.globals,
        });
    }

    pages
}

/// Trait for rendering a page into a specific output format.
pub trait Renderer {
    fn render(&self, page: &Page) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, html, or json",
            format
        )),
    }
}

/// Split a property/event into `(name, type, text)` for display.
///
/// `text` is whatever follows the name in the tag, then the block's own
/// description.
pub(crate) fn member_parts(member: &MemberRecord) -> (&str, Option<&str>, String) {
    let name = member.name().unwrap_or("");
    let type_name = member.type_name();
    let tail: Vec<&str> = member
        .raw
        .split_whitespace()
        .skip_while(|w| *w != name)
        .skip(1)
        .collect();
    let mut text = tail.join(" ");
    if !member.description.is_empty() {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&member.description);
    }
    (name, type_name, text)
}
