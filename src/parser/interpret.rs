//! Tag interpreter — turns a block's tokens into class or function records.

use crate::error::{DocError, MalformedPolicy, Result};
use crate::model::*;

/// Where a block comes from, for diagnostics and the malformed-tag policy.
#[derive(Debug, Clone, Copy)]
pub struct BlockContext<'a> {
    pub source: &'a str,
    pub block: usize,
    pub policy: MalformedPolicy,
}

impl BlockContext<'_> {
    /// Apply the malformed-tag policy: `Ok(())` means drop the tag and go on.
    fn malformed(&self, tag: &str, rest: &str) -> Result<()> {
        match self.policy {
            MalformedPolicy::Skip => {
                log::warn!(
                    "{}: comment block #{}: skipping malformed @{} {:?}",
                    self.source,
                    self.block,
                    tag,
                    rest
                );
                Ok(())
            }
            MalformedPolicy::Fail => Err(DocError::MalformedTag {
                source_path: self.source.to_string(),
                block: self.block,
                tag: tag.to_string(),
                rest: rest.to_string(),
            }),
        }
    }
}

/// Interpret a block as a class declaration.
pub fn interpret_class(tokens: &[Token]) -> ClassRecord {
    let mut class = ClassRecord::default();

    for token in tokens {
        match token {
            Token::Text(text) => append_description(&mut class.description, text),
            Token::Tag(Tag::Class(name)) => class.name = name.clone(),
            Token::Tag(Tag::Namespace(ns)) => class.namespace = Some(ns.clone()),
            Token::Tag(Tag::Augments(name)) => class.augments.push(name.clone()),
            Token::Tag(Tag::Inherits(name)) => class.inherits.push(name.clone()),
            Token::Tag(Tag::Modifier(name)) => push_unique(&mut class.attributes, name),
            Token::Tag(_) => {}
        }
    }

    class
}

/// Interpret a block as a function declaration.
pub fn interpret_function(tokens: &[Token], ctx: &BlockContext<'_>) -> Result<FunctionRecord> {
    let mut func = FunctionRecord::default();

    for token in tokens {
        match token {
            Token::Text(text) => append_description(&mut func.description, text),
            Token::Tag(Tag::Function(name)) => func.name = name.clone(),
            Token::Tag(Tag::Param(rest)) => match parse_param(rest) {
                Some(param) => func.params.push(param),
                None => ctx.malformed("param", rest)?,
            },
            Token::Tag(Tag::Return(rest)) => match parse_return(rest) {
                Some(ret) => func.returns = Some(ret),
                None => ctx.malformed("return", rest)?,
            },
            Token::Tag(Tag::See(reference)) => func.see.push(reference.clone()),
            Token::Tag(Tag::Modifier(name)) => push_unique(&mut func.attributes, name),
            Token::Tag(_) => {}
        }
    }

    Ok(func)
}

/// Which member tag [`interpret_members`] collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Property,
    Event,
}

impl MemberKind {
    fn select(self, tag: &Tag) -> Option<&str> {
        match (self, tag) {
            (MemberKind::Property, Tag::Property(raw)) | (MemberKind::Event, Tag::Event(raw)) => {
                Some(raw.as_str())
            }
            _ => None,
        }
    }
}

/// Interpret every `@property` or `@event` tag of a block, one record each.
pub fn interpret_members(tokens: &[Token], kind: MemberKind) -> Vec<MemberRecord> {
    let mut description = String::new();
    let mut attributes = Vec::new();
    for token in tokens {
        match token {
            Token::Text(text) => append_description(&mut description, text),
            Token::Tag(Tag::Modifier(name)) => push_unique(&mut attributes, name),
            Token::Tag(_) => {}
        }
    }

    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Tag(tag) => kind.select(tag),
            Token::Text(_) => None,
        })
        .map(|raw| MemberRecord {
            raw: raw.to_string(),
            description: description.clone(),
            attributes: attributes.clone(),
        })
        .collect()
}

/// `{type} name [desc...]`; `None` when the type or name is missing.
fn parse_param(rest: &str) -> Option<ParamRecord> {
    let mut words = rest.split_whitespace();
    let type_name = strip_type_braces(words.next()?);
    let name = words.next()?.to_string();
    Some(ParamRecord {
        name,
        type_name,
        description: words.collect::<Vec<_>>().join(" "),
    })
}

/// `{type} [desc...]`; `None` when the type is missing.
fn parse_return(rest: &str) -> Option<ReturnRecord> {
    let mut words = rest.split_whitespace();
    let type_name = strip_type_braces(words.next()?);
    Some(ReturnRecord {
        type_name,
        description: words.collect::<Vec<_>>().join(" "),
    })
}

fn strip_type_braces(spec: &str) -> String {
    let inner = spec.strip_prefix('{').unwrap_or(spec);
    inner.strip_suffix('}').unwrap_or(inner).to_string()
}

/// Join description fragments with a single space.
fn append_description(desc: &mut String, text: &str) {
    if !desc.is_empty() {
        desc.push(' ');
    }
    desc.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize::tokenize;

    fn ctx(policy: MalformedPolicy) -> BlockContext<'static> {
        BlockContext {
            source: "test.js",
            block: 0,
            policy,
        }
    }

    fn function(body: &str) -> FunctionRecord {
        interpret_function(&tokenize(body), &ctx(MalformedPolicy::Skip)).unwrap()
    }

    #[test]
    fn bare_function() {
        let func = function("\n * @function foo\n ");
        assert_eq!(func.name, "foo");
        assert!(func.params.is_empty());
        assert!(func.returns.is_none());
    }

    #[test]
    fn add_example() {
        let func = function(
            "\n * Adds two numbers.\n * @function add\n * @param {number} a first operand\n * @param {number} b second operand\n * @return {number} the sum\n ",
        );
        assert_eq!(func.name, "add");
        assert_eq!(func.description, "Adds two numbers.");
        assert_eq!(
            func.params,
            vec![
                ParamRecord {
                    name: "a".into(),
                    type_name: "number".into(),
                    description: "first operand".into(),
                },
                ParamRecord {
                    name: "b".into(),
                    type_name: "number".into(),
                    description: "second operand".into(),
                },
            ]
        );
        assert_eq!(
            func.returns,
            Some(ReturnRecord {
                type_name: "number".into(),
                description: "the sum".into(),
            })
        );
    }

    #[test]
    fn param_without_description() {
        let func = function("\n * @function f\n * @param String id\n ");
        assert_eq!(func.params[0].type_name, "String");
        assert_eq!(func.params[0].name, "id");
        assert_eq!(func.params[0].description, "");
    }

    #[test]
    fn see_and_attributes() {
        let func = function(
            "\n * @function f\n * @see http://example.com/docs\n * @static\n * @private\n * @static\n ",
        );
        assert_eq!(func.see, vec!["http://example.com/docs"]);
        assert_eq!(func.attributes, vec!["static", "private"]);
    }

    #[test]
    fn description_fragments_join_with_space() {
        let func = function("\n * First line\n * second line\n * @function f\n ");
        assert_eq!(func.description, "First line second line");
    }

    #[test]
    fn unrecognized_tags_leave_others_intact() {
        let func = function(
            "\n * @function f\n * @bogus value here\n * @param {int} n count\n ",
        );
        assert_eq!(func.name, "f");
        assert_eq!(func.params.len(), 1);
        assert!(func.attributes.is_empty());
    }

    #[test]
    fn malformed_param_skipped() {
        let func = function("\n * @function f\n * @param {int}\n * @param {int} n\n ");
        assert_eq!(func.params.len(), 1);
        assert_eq!(func.params[0].name, "n");
    }

    #[test]
    fn malformed_return_fails_in_strict_mode() {
        let tokens = tokenize("\n * @function f\n * @return\n ");
        let err = interpret_function(&tokens, &ctx(MalformedPolicy::Fail)).unwrap_err();
        assert_eq!(
            err,
            DocError::MalformedTag {
                source_path: "test.js".into(),
                block: 0,
                tag: "return".into(),
                rest: String::new(),
            }
        );
    }

    #[test]
    fn class_fields() {
        let tokens = tokenize(
            "\n * Rotating image strip.\n * @class Carousel\n * @namespace Swell.Widget\n * @augments Swell.Core.CustomEvent\n * @inherits Swell.Core.Base\n * @constructor\n * @function ignored\n ",
        );
        let class = interpret_class(&tokens);
        assert_eq!(class.name, "Carousel");
        assert_eq!(class.namespace.as_deref(), Some("Swell.Widget"));
        assert_eq!(class.description, "Rotating image strip.");
        assert_eq!(class.augments, vec!["Swell.Core.CustomEvent"]);
        assert_eq!(class.inherits, vec!["Swell.Core.Base"]);
        assert_eq!(class.attributes, vec!["constructor"]);
        assert!(class.members.is_empty());
    }

    #[test]
    fn class_without_namespace() {
        let class = interpret_class(&tokenize("\n * @class Fx\n "));
        assert_eq!(class.namespace, None);
    }

    #[test]
    fn members_one_record_per_tag() {
        let tokens = tokenize(
            "\n * @event dragenter Fires on enter\n * @event dragover Fires on over\n * @public\n",
        );
        let events = interpret_members(&tokens, MemberKind::Event);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name(), Some("dragenter"));
        assert_eq!(events[1].raw, "dragover Fires on over");
        assert_eq!(events[1].attributes, vec!["public"]);
        assert!(interpret_members(&tokens, MemberKind::Property).is_empty());
    }
}
