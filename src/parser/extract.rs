//! Comment extractor — finds `/** ... */` documentation blocks.

use crate::model::CommentBlock;
use regex::Regex;
use std::sync::LazyLock;

// Bodies containing any other character (`;`, `!`, `$`, tabs, ...) are not
// documentation blocks and never match.
static RE_DOC_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"/\*\*([\w\n()\[\].*'"\-#|,@{}<>=:/ ]+?)\*/"#).unwrap()
});

/// Iterate over the documentation blocks of `text`, in file order.
///
/// The iterator is lazy and borrows `text`; call again to restart.
pub fn blocks(text: &str) -> impl Iterator<Item = CommentBlock<'_>> + '_ {
    RE_DOC_BLOCK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .enumerate()
        .map(|(ordinal, m)| CommentBlock {
            ordinal,
            body: m.as_str(),
        })
}
