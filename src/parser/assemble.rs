//! Model assembler — folds a file's comment blocks into a [`DocumentModel`].
//!
//! The only state carried from block to block is the current scope: the
//! top level until the first `@class`, then the most recently opened class.
//! It lives in the fold accumulator and never outlives one file.

use crate::error::{MalformedPolicy, Result};
use crate::model::*;
use crate::parser::extract;
use crate::parser::interpret::{self, BlockContext, MemberKind};
use crate::parser::order::sort_by_name;
use crate::parser::tokenize::tokenize;

/// Scope that members are currently attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Globals,
    /// Index into `DocumentModel::classes`
    Class(usize),
}

/// Fold accumulator.
#[derive(Debug)]
struct Assembly {
    model: DocumentModel,
    current: Scope,
}

impl Assembly {
    fn new(source: &str) -> Self {
        Self {
            model: DocumentModel {
                source: source.to_string(),
                ..Default::default()
            },
            current: Scope::Globals,
        }
    }

    fn members_mut(&mut self) -> &mut Members {
        match self.current {
            Scope::Globals => &mut self.model.globals,
            Scope::Class(i) => &mut self.model.classes[i].members,
        }
    }

    /// Process one block and hand the accumulator on.
    fn absorb(mut self, block: CommentBlock<'_>, policy: MalformedPolicy) -> Result<Self> {
        let tokens = tokenize(block.body);
        if tokens.is_empty() {
            log::trace!("{}: block #{} has no tokens", self.model.source, block.ordinal);
            return Ok(self);
        }

        let has = |pred: fn(&Tag) -> bool| {
            tokens
                .iter()
                .any(|t| matches!(t, Token::Tag(tag) if pred(tag)))
        };

        if has(|t| matches!(t, Tag::Class(_))) {
            let class = interpret::interpret_class(&tokens);
            log::debug!("{}: class {}", self.model.source, class.qualified_name());
            self.model.classes.push(class);
            self.current = Scope::Class(self.model.classes.len() - 1);
        } else if has(|t| matches!(t, Tag::Function(_))) {
            let ctx = BlockContext {
                source: &self.model.source,
                block: block.ordinal,
                policy,
            };
            let func = interpret::interpret_function(&tokens, &ctx)?;
            self.members_mut().functions.push(func);
        } else {
            let properties = interpret::interpret_members(&tokens, MemberKind::Property);
            let events = interpret::interpret_members(&tokens, MemberKind::Event);
            if properties.is_empty() && events.is_empty() {
                log::trace!(
                    "{}: block #{} declares nothing",
                    self.model.source,
                    block.ordinal
                );
            }
            let members = self.members_mut();
            members.properties.extend(properties);
            members.events.extend(events);
        }

        Ok(self)
    }

    /// Replace every scope's function list with its name-ordered view.
    fn finish(mut self) -> DocumentModel {
        self.model.globals.functions = sort_by_name(&self.model.globals.functions);
        for class in &mut self.model.classes {
            class.members.functions = sort_by_name(&class.members.functions);
        }
        self.model
    }
}

/// Build the documentation tree of one source file.
///
/// Returns `Ok(None)` when the file has no documentation block at all; the
/// caller should skip it. Under [`MalformedPolicy::Fail`] a malformed
/// `@param`/`@return` fails the whole file.
pub fn assemble(unit: &SourceUnit, policy: MalformedPolicy) -> Result<Option<DocumentModel>> {
    let mut blocks = extract::blocks(&unit.text).peekable();
    if blocks.peek().is_none() {
        log::debug!("{}: no documentation blocks", unit.path);
        return Ok(None);
    }

    let assembly = blocks.try_fold(Assembly::new(&unit.path), |acc, block| {
        acc.absorb(block, policy)
    })?;
    Ok(Some(assembly.finish()))
}
