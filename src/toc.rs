//! Anchors and links for rendered pages.
//!
//! Function headings get GitHub-style anchor slugs; `@see` references are
//! turned into links: URLs and relative paths link out, anything else is
//! taken as the name of a member on the same page.

use std::collections::HashSet;

/// Markdown link for a `@see` reference.
pub fn render_link(text: &str) -> String {
    if is_relative_path(text) {
        return format!("[{}]({})", text, text);
    }
    if contains_markdown_link(text) {
        return text.to_string();
    }
    if let Some(url) = find_url(text) {
        return text.replacen(url, &format!("[{}]({})", url, url), 1);
    }
    format!("[{}](#{})", text, slug(text))
}

/// Index list item linking `name` to its heading anchor.
pub fn render_index_item(name: &str, anchor: &str) -> String {
    format!("* [{}](#{})", name, anchor)
}

/// Link target for a `@see` reference, for formats that build their own
/// markup: the URL or path itself, or `#slug` for a member name.
pub fn link_target(text: &str) -> String {
    if is_relative_path(text) {
        return text.to_string();
    }
    match find_url(text) {
        Some(url) => url.to_string(),
        None => format!("#{}", slug(text)),
    }
}

/// GitHub heading anchor slug.
///
/// Lowercase, keep alphanumerics, spaces and hyphens, then spaces become
/// hyphens. `.`, `_` and `:` are dropped, so `Swell.Core.add` → `swellcoreadd`.
pub fn slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

/// Slugs for a page's headings, in order, with repeats made unique by a
/// `-1`, `-2`, ... suffix the way GitHub numbers duplicate headings.
/// `onDrag` and `_onDrag` → `ondrag`, `ondrag-1`.
pub fn unique_slugs<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    texts
        .into_iter()
        .map(|text| {
            let base = slug(text);
            let mut anchor = base.clone();
            let mut n = 0;
            while !used.insert(anchor.clone()) {
                n += 1;
                anchor = format!("{}-{}", base, n);
            }
            anchor
        })
        .collect()
}

fn is_relative_path(text: &str) -> bool {
    text.starts_with('/') || text.starts_with("./") || text.starts_with("../")
}

/// `[...](...)` anywhere in `text`.
fn contains_markdown_link(text: &str) -> bool {
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        match after_open.find(']') {
            Some(close) if after_open[close + 1..].starts_with('(') => return true,
            Some(close) => rest = &after_open[close + 1..],
            None => return false,
        }
    }
    false
}

/// First `scheme://...` run in `text`, up to whitespace.
fn find_url(text: &str) -> Option<&str> {
    ["http://", "https://", "ftp://"]
        .iter()
        .filter_map(|scheme| text.find(scheme))
        .min()
        .map(|start| {
            let tail = &text[start..];
            let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
            &tail[..end]
        })
}
