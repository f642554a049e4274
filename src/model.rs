//! Data model for extracted documentation — format-agnostic.

use serde::Serialize;

/// One input file handed to the pipeline.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Opaque identifier carried through to the output.
    pub path: String,
    /// File content with line endings normalized to `\n`
    pub text: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>, text: &str) -> Self {
        let text = if text.contains('\r') {
            text.replace("\r\n", "\n")
        } else {
            text.to_string()
        };
        Self {
            path: path.into(),
            text,
        }
    }
}

/// Raw body of a `/** ... */` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock<'a> {
    /// Zero-based position among the recognized blocks of the file
    pub ordinal: usize,
    pub body: &'a str,
}

/// A single lexical unit of a comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Free-form description text
    Text(String),
    Tag(Tag),
}

/// An `@tag` decoded once at tokenization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// @class Name
    Class(String),
    /// @namespace Name
    Namespace(String),
    /// @augments Name
    Augments(String),
    /// @inherits Name
    Inherits(String),
    /// @function name
    Function(String),
    /// @param {type} name desc... (undecoded; empty when bare)
    Param(String),
    /// @return {type} desc... (undecoded; empty when bare)
    Return(String),
    /// @see reference
    See(String),
    /// @property ... (raw)
    Property(String),
    /// @event ... (raw)
    Event(String),
    /// Any other bare tag: @static, @private, ...
    Modifier(String),
    /// Anything else. Never contributes to a record.
    Unrecognized { name: String, rest: Option<String> },
}

impl Tag {
    /// Decode a tag name and its optional remainder.
    pub fn decode(name: &str, rest: Option<&str>) -> Tag {
        let owned = rest.map(str::to_string);
        match (name, owned) {
            ("class", Some(r)) => Tag::Class(r),
            ("namespace", Some(r)) => Tag::Namespace(r),
            ("augments", Some(r)) => Tag::Augments(r),
            ("inherits", Some(r)) => Tag::Inherits(r),
            ("function", Some(r)) => Tag::Function(r),
            ("see", Some(r)) => Tag::See(r),
            ("param", r) => Tag::Param(r.unwrap_or_default()),
            ("return", r) => Tag::Return(r.unwrap_or_default()),
            ("property", r) => Tag::Property(r.unwrap_or_default()),
            ("event", r) => Tag::Event(r.unwrap_or_default()),
            // Named tags above need a value; bare they carry no meaning.
            ("class" | "namespace" | "augments" | "inherits" | "function" | "see", None) => {
                Tag::Unrecognized {
                    name: name.to_string(),
                    rest: None,
                }
            }
            (_, None) => Tag::Modifier(name.to_string()),
            (_, Some(r)) => Tag::Unrecognized {
                name: name.to_string(),
                rest: Some(r),
            },
        }
    }

    /// The tag name as written in the source, without `@`.
    pub fn name(&self) -> &str {
        match self {
            Tag::Class(_) => "class",
            Tag::Namespace(_) => "namespace",
            Tag::Augments(_) => "augments",
            Tag::Inherits(_) => "inherits",
            Tag::Function(_) => "function",
            Tag::Param(_) => "param",
            Tag::Return(_) => "return",
            Tag::See(_) => "see",
            Tag::Property(_) => "property",
            Tag::Event(_) => "event",
            Tag::Modifier(name) => name.as_str(),
            Tag::Unrecognized { name, .. } => name.as_str(),
        }
    }
}

/// Members attached to a scope (a class or the file's top level).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Members {
    pub functions: Vec<FunctionRecord>,
    pub properties: Vec<MemberRecord>,
    pub events: Vec<MemberRecord>,
}

impl Members {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.properties.is_empty() && self.events.is_empty()
    }
}

/// A documented class opened by `@class`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub description: String,
    /// Ordered set of modifiers (@static, @private, ...)
    pub attributes: Vec<String>,
    pub augments: Vec<String>,
    pub inherits: Vec<String>,
    #[serde(flatten)]
    pub members: Members,
}

impl ClassRecord {
    /// Qualified name used for output files: `Namespace.Class` or `Class`.
    pub fn qualified_name(&self) -> String {
        match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name),
            _ => self.name.clone(),
        }
    }
}

/// A documented function opened by `@function`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    pub description: String,
    /// Declaration order
    pub params: Vec<ParamRecord>,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnRecord>,
    pub see: Vec<String>,
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

/// A `@property` or `@event` entry, kept close to its source form.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    /// Remainder after the tag name, e.g. `dragleave Fires when ...`
    pub raw: String,
    /// Free text of the enclosing block
    pub description: String,
    pub attributes: Vec<String>,
}

impl MemberRecord {
    /// First word of the remainder that is not a `{type}`.
    pub fn name(&self) -> Option<&str> {
        self.raw
            .split_whitespace()
            .find(|w| !(w.starts_with('{') && w.ends_with('}')))
    }

    /// Type written as `{Type}` in the remainder, braces stripped.
    pub fn type_name(&self) -> Option<&str> {
        self.raw
            .split_whitespace()
            .find(|w| w.starts_with('{') && w.ends_with('}'))
            .map(|w| w.trim_start_matches('{').trim_end_matches('}'))
    }
}

/// Complete documentation tree for a single source file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentModel {
    pub source: String,
    pub classes: Vec<ClassRecord>,
    /// Members seen before any `@class`
    pub globals: Members,
}

/// Records that can be ordered by name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for FunctionRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Push `value` unless already present; keeps first-seen order.
pub(crate) fn push_unique(set: &mut Vec<String>, value: &str) {
    if !set.iter().any(|v| v == value) {
        set.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_named_tags() {
        assert_eq!(Tag::decode("class", Some("Carousel")), Tag::Class("Carousel".into()));
        assert_eq!(
            Tag::decode("param", Some("{String} id the id")),
            Tag::Param("{String} id the id".into())
        );
        assert_eq!(Tag::decode("return", None), Tag::Return(String::new()));
    }

    #[test]
    fn decode_bare_tag_is_modifier() {
        assert_eq!(Tag::decode("static", None), Tag::Modifier("static".into()));
        assert_eq!(Tag::decode("static", None).name(), "static");
    }

    #[test]
    fn decode_bare_class_is_unrecognized() {
        assert!(matches!(
            Tag::decode("class", None),
            Tag::Unrecognized { ref name, rest: None } if name == "class"
        ));
    }

    #[test]
    fn decode_unknown_with_value() {
        assert_eq!(
            Tag::decode("author", Some("someone")),
            Tag::Unrecognized {
                name: "author".into(),
                rest: Some("someone".into())
            }
        );
    }

    #[test]
    fn member_name_skips_type() {
        let m = MemberRecord {
            raw: "{Boolean} isDroppable indicates a droppable".into(),
            ..Default::default()
        };
        assert_eq!(m.name(), Some("isDroppable"));
        assert_eq!(m.type_name(), Some("Boolean"));
    }

    #[test]
    fn qualified_name_with_namespace() {
        let class = ClassRecord {
            name: "Carousel".into(),
            namespace: Some("Swell.Widget".into()),
            ..Default::default()
        };
        assert_eq!(class.qualified_name(), "Swell.Widget.Carousel");
    }

    #[test]
    fn source_unit_normalizes_crlf() {
        let unit = SourceUnit::new("a.js", "/**\r\n * x\r\n */");
        assert_eq!(unit.text, "/**\n * x\n */");
    }

    #[test]
    fn push_unique_keeps_order() {
        let mut set = Vec::new();
        push_unique(&mut set, "static");
        push_unique(&mut set, "private");
        push_unique(&mut set, "static");
        assert_eq!(set, vec!["static", "private"]);
    }
}
