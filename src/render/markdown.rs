//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::render::{member_parts, Page, Renderer};
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {}\n", page.name));

        if let Some(class) = page.class {
            render_class_header(&mut lines, class);
        }
        lines.push(format!("_Source: `{}`_\n", page.source));

        let functions = &page.members.functions;
        if !functions.is_empty() {
            lines.push("## Index\n".to_string());
            let anchors = toc::unique_slugs(functions.iter().map(|f| f.name.as_str()));
            for (func, anchor) in functions.iter().zip(&anchors) {
                if !func.name.is_empty() {
                    lines.push(toc::render_index_item(&func.name, anchor));
                }
            }
            lines.push(String::new());
        }

        if !page.members.properties.is_empty() {
            lines.push("## Properties\n".to_string());
            for prop in &page.members.properties {
                lines.push(render_member(prop));
            }
            lines.push(String::new());
        }

        if !page.members.events.is_empty() {
            lines.push("## Events\n".to_string());
            for event in &page.members.events {
                lines.push(render_member(event));
            }
            lines.push(String::new());
        }

        if !functions.is_empty() {
            lines.push("## Functions\n".to_string());
            for func in functions {
                lines.push(render_function(func));
            }
        }

        let mut out = lines.join("\n");
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_class_header(lines: &mut Vec<String>, class: &ClassRecord) {
    let badges = render_badges(&class.attributes);
    if !badges.is_empty() {
        lines.push(badges);
        lines.push(String::new());
    }
    if !class.description.is_empty() {
        lines.push(class.description.clone());
        lines.push(String::new());
    }
    if !class.augments.is_empty() {
        lines.push(format!("**Extends:** {}\n", class.augments.join(", ")));
    }
    if !class.inherits.is_empty() {
        lines.push(format!("**Inherits:** {}\n", class.inherits.join(", ")));
    }
}

/// Render a single function's documentation block.
fn render_function(func: &FunctionRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", func.name));

    let badges = render_badges(&func.attributes);
    if !badges.is_empty() {
        lines.push(badges);
        lines.push(String::new());
    }

    if !func.description.is_empty() {
        lines.push(func.description.clone());
        lines.push(String::new());
    }

    if !func.params.is_empty() {
        lines.push("#### Parameters\n".to_string());
        for param in &func.params {
            lines.push(render_param(param));
        }
        lines.push(String::new());
    }

    if let Some(ref ret) = func.returns {
        lines.push("#### Returns\n".to_string());
        lines.push(render_typed("", &ret.type_name, &ret.description));
        lines.push(String::new());
    }

    if !func.see.is_empty() {
        lines.push("#### See also\n".to_string());
        for see in &func.see {
            lines.push(format!("* {}", toc::render_link(see)));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `{number} a first operand` → `* **a** (number): first operand`
fn render_param(param: &ParamRecord) -> String {
    render_typed(&param.name, &param.type_name, &param.description)
}

fn render_member(member: &MemberRecord) -> String {
    let (name, type_name, text) = member_parts(member);
    let mut line = render_typed(name, type_name.unwrap_or(""), &text);
    let badges = render_badges(&member.attributes);
    if !badges.is_empty() {
        line.push(' ');
        line.push_str(badges.trim_start_matches("> "));
    }
    line
}

fn render_typed(name: &str, type_name: &str, desc: &str) -> String {
    let mut line = String::from("*");
    if !name.is_empty() {
        line.push_str(&format!(" **{}**", name));
    }
    if !type_name.is_empty() {
        line.push_str(&format!(" ({})", escape(type_name)));
    }
    if !desc.is_empty() {
        if line.len() > 1 {
            line.push(':');
        }
        line.push(' ');
        line.push_str(&escape(desc));
    }
    line
}

/// `> `static` `private``, or empty when there are no attributes.
fn render_badges(attributes: &[String]) -> String {
    if attributes.is_empty() {
        return String::new();
    }
    let badges: Vec<String> = attributes.iter().map(|a| format!("`{}`", a)).collect();
    format!("> {}", badges.join(" "))
}

/// Escape `<` and `>` so type unions like `Array<String>` survive.
fn escape(text: &str) -> String {
    text.replace('<', "\\<").replace('>', "\\>")
}
