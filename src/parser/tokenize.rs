//! Tag tokenizer — splits a comment block body into text and tag tokens.
//!
//! Both token shapes are matched by one alternation in a single
//! left-to-right scan:
//!
//! - `* some text` → [`Token::Text`] (only the run of permitted characters)
//! - ` @name rest of line` → [`Token::Tag`], decoded through [`Tag::decode`]

use crate::model::{Tag, Token};
use regex::Regex;
use std::sync::LazyLock;

static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?m)^[ \t]*\* ([\w(),.'"\-:#|/ ]+)"#,
        r"|@(\w+)(?: (.+))?"
    ))
    .unwrap()
});

/// Tokenize one comment block body.
pub fn tokenize(body: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(caps) = RE_TOKEN.captures_at(body, pos) {
        let Some(whole) = caps.get(0) else { break };
        pos = whole.end();

        if let Some(text) = caps.get(1) {
            let text = text.as_str().trim();
            if !text.is_empty() {
                tokens.push(Token::Text(text.to_string()));
            }
            continue;
        }

        let Some(name) = caps.get(2) else { continue };
        // `@` must follow whitespace; `user@host` is not a tag. Resume the
        // scan right after the rejected name so a later tag on the same
        // line is still found.
        let preceded_by_space = body[..name.start() - 1]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        if !preceded_by_space {
            pos = name.end();
            continue;
        }

        let rest = caps
            .get(3)
            .map(|m| m.as_str().trim())
            .filter(|r| !r.is_empty());
        tokens.push(Token::Tag(Tag::decode(name.as_str(), rest)));
    }

    tokens
}
