//! JSON renderer — structured output for tooling integration.
//!
//! A class page serializes the whole class record; a top-level page
//! serializes its members under `globals`.

use crate::render::{Page, Renderer};
use anyhow::{Context, Result};
use serde_json::json;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let value = match page.class {
            Some(class) => json!({ "name": page.name, "source": page.source, "class": class }),
            None => json!({ "name": page.name, "source": page.source, "globals": page.members }),
        };
        let mut out = serde_json::to_string_pretty(&value)
            .with_context(|| format!("failed to serialize {}", page.name))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
