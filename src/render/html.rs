//! HTML renderer — standalone HTML page with semantic markup.

use crate::model::*;
use crate::render::{member_parts, Page, Renderer};
use crate::toc;
use anyhow::Result;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&page.name)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("dt { font-weight: bold; margin-top: 0.5em; }\n");
        out.push_str("dd { margin-left: 1.5em; }\n");
        out.push_str(".attr { display: inline-block; font-size: 0.75em; padding: 0.1em 0.4em; border-radius: 3px; margin-left: 0.5em; background: #e8e8e8; }\n");
        out.push_str(".source { color: #666; font-size: 0.9em; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        out.push_str(&format!("<h1>{}", html_escape(&page.name)));
        if let Some(class) = page.class {
            out.push_str(&render_attributes(&class.attributes));
        }
        out.push_str("</h1>\n");

        if let Some(class) = page.class {
            if !class.description.is_empty() {
                out.push_str(&format!("<p>{}</p>\n", html_escape(&class.description)));
            }
            if !class.augments.is_empty() {
                out.push_str(&format!(
                    "<p>Extends: {}</p>\n",
                    html_escape(&class.augments.join(", "))
                ));
            }
            if !class.inherits.is_empty() {
                out.push_str(&format!(
                    "<p>Inherits: {}</p>\n",
                    html_escape(&class.inherits.join(", "))
                ));
            }
        }
        out.push_str(&format!(
            "<p class=\"source\">Source: <code>{}</code></p>\n",
            html_escape(page.source)
        ));

        let functions = &page.members.functions;
        let anchors = toc::unique_slugs(functions.iter().map(|f| f.name.as_str()));
        if !functions.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for (func, anchor) in functions.iter().zip(&anchors) {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(anchor),
                    html_escape(&func.name)
                ));
            }
            out.push_str("</ul>\n");
        }

        render_member_list(&mut out, "Properties", &page.members.properties);
        render_member_list(&mut out, "Events", &page.members.events);

        if !functions.is_empty() {
            out.push_str("<h2>Functions</h2>\n");
            for (func, anchor) in functions.iter().zip(&anchors) {
                out.push_str(&render_function_html(func, anchor));
            }
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_function_html(func: &FunctionRecord, anchor: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<h3 id=\"{}\">{}",
        html_escape(anchor),
        html_escape(&func.name)
    ));
    out.push_str(&render_attributes(&func.attributes));
    out.push_str("</h3>\n");

    if !func.description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", html_escape(&func.description)));
    }

    if !func.params.is_empty() {
        out.push_str("<h4>Parameters</h4>\n<dl>\n");
        for param in &func.params {
            out.push_str(&format!(
                "  <dt><code>{}</code> <em>{}</em></dt>\n",
                html_escape(&param.name),
                html_escape(&param.type_name)
            ));
            if !param.description.is_empty() {
                out.push_str(&format!("  <dd>{}</dd>\n", html_escape(&param.description)));
            }
        }
        out.push_str("</dl>\n");
    }

    if let Some(ref ret) = func.returns {
        out.push_str("<h4>Returns</h4>\n<dl>\n");
        out.push_str(&format!("  <dt><em>{}</em></dt>\n", html_escape(&ret.type_name)));
        if !ret.description.is_empty() {
            out.push_str(&format!("  <dd>{}</dd>\n", html_escape(&ret.description)));
        }
        out.push_str("</dl>\n");
    }

    if !func.see.is_empty() {
        out.push_str("<h4>See also</h4>\n<ul>\n");
        for see in &func.see {
            out.push_str(&format!(
                "  <li><a href=\"{}\">{}</a></li>\n",
                html_escape(&toc::link_target(see)),
                html_escape(see)
            ));
        }
        out.push_str("</ul>\n");
    }

    out
}

fn render_member_list(out: &mut String, title: &str, members: &[MemberRecord]) {
    if members.is_empty() {
        return;
    }
    out.push_str(&format!("<h2>{}</h2>\n<dl>\n", title));
    for member in members {
        let (name, type_name, text) = member_parts(member);
        out.push_str(&format!("  <dt><code>{}</code>", html_escape(name)));
        if let Some(ty) = type_name {
            out.push_str(&format!(" <em>{}</em>", html_escape(ty)));
        }
        out.push_str(&render_attributes(&member.attributes));
        out.push_str("</dt>\n");
        if !text.is_empty() {
            out.push_str(&format!("  <dd>{}</dd>\n", html_escape(&text)));
        }
    }
    out.push_str("</dl>\n");
}

fn render_attributes(attributes: &[String]) -> String {
    attributes
        .iter()
        .map(|a| format!(" <span class=\"attr\">{}</span>", html_escape(a)))
        .collect()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn function_with_anchor_and_see_link() {
        let func = FunctionRecord {
            name: "getStyle".into(),
            see: vec!["http://example.com/css".into(), "setStyle".into()],
            attributes: vec!["static".into()],
            ..Default::default()
        };
        let out = render_function_html(&func, "getstyle");
        assert!(out.starts_with("<h3 id=\"getstyle\">getStyle <span class=\"attr\">static</span></h3>\n"));
        assert!(out.contains("<a href=\"http://example.com/css\">"));
        assert!(out.contains("<a href=\"#setstyle\">setStyle</a>"));
    }

    #[test]
    fn globals_page() {
        let members = Members {
            functions: vec![FunctionRecord {
                name: "$".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let page = Page {
            name: "Core".into(),
            source: "src/Core/Core.js",
            class: None,
            members: &members,
        };
        let out = HtmlRenderer.render(&page).unwrap();
        assert!(out.contains("<!DOCTYPE html>"));
        assert!(out.contains("<title>Core</title>"));
        assert!(out.contains("<h2>Functions</h2>"));
        assert!(out.ends_with("</html>\n"));
    }

    #[test]
    fn colliding_names_get_distinct_ids() {
        let members = Members {
            functions: vec![
                FunctionRecord {
                    name: "_onDrag".into(),
                    ..Default::default()
                },
                FunctionRecord {
                    name: "onDrag".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let page = Page {
            name: "DragDrop".into(),
            source: "src/DragDrop.js",
            class: None,
            members: &members,
        };
        let out = HtmlRenderer.render(&page).unwrap();
        assert!(out.contains("<li><a href=\"#ondrag\">_onDrag</a></li>"));
        assert!(out.contains("<li><a href=\"#ondrag-1\">onDrag</a></li>"));
        assert!(out.contains("<h3 id=\"ondrag\">_onDrag</h3>"));
        assert!(out.contains("<h3 id=\"ondrag-1\">onDrag</h3>"));
    }
}
