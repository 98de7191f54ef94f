//! Rich-text post bodies.
//!
//! Post content is a ProseMirror document as produced by the admin editor
//! (TipTap with the starter kit, underline, link and text-align extensions),
//! stored verbatim as JSON. This module checks that a document only uses the
//! nodes and marks the site knows how to render, and renders it to HTML.

use serde_json::Value;

use crate::error::CoreError;

/// Headings the editor is configured to produce.
pub const MAX_HEADING_LEVEL: u64 = 3;

const BLOCK_NODES: &[&str] = &[
    "paragraph",
    "heading",
    "bulletList",
    "orderedList",
    "listItem",
    "blockquote",
    "codeBlock",
    "horizontalRule",
    "hardBreak",
    "text",
];

const MARKS: &[&str] = &["bold", "italic", "underline", "strike", "code", "link"];

const ALIGNMENTS: &[&str] = &["left", "center", "right", "justify"];

/// Whether `value` means "no content" (absent, `null` or `{}`).
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Validate a stored document.
///
/// Empty documents are accepted. Anything else must be a `doc` node whose
/// descendants are all supported.
pub fn validate(value: &Value) -> Result<(), CoreError> {
    if is_empty(value) {
        return Ok(());
    }
    if node_type(value) != Some("doc") {
        return Err(CoreError::Validation(
            "Rich text content must be a document with type 'doc'".to_string(),
        ));
    }
    for child in children(value) {
        validate_node(child)?;
    }
    Ok(())
}

fn validate_node(node: &Value) -> Result<(), CoreError> {
    let kind = node_type(node)
        .ok_or_else(|| CoreError::Validation("Rich text node is missing 'type'".to_string()))?;

    if !BLOCK_NODES.contains(&kind) {
        return Err(CoreError::Validation(format!(
            "Unsupported rich text node: '{kind}'"
        )));
    }

    if kind == "heading" {
        let level = heading_level(node);
        if !(1..=MAX_HEADING_LEVEL).contains(&level) {
            return Err(CoreError::Validation(format!(
                "Heading level must be between 1 and {MAX_HEADING_LEVEL} (got {level})"
            )));
        }
    }

    if let Some(align) = text_align(node) {
        if !ALIGNMENTS.contains(&align) {
            return Err(CoreError::Validation(format!(
                "Unsupported text alignment: '{align}'"
            )));
        }
    }

    if let Some(marks) = node.get("marks").and_then(Value::as_array) {
        for mark in marks {
            let mark_type = node_type(mark).unwrap_or("");
            if !MARKS.contains(&mark_type) {
                return Err(CoreError::Validation(format!(
                    "Unsupported rich text mark: '{mark_type}'"
                )));
            }
            if mark_type == "link" {
                let href = mark_attr(mark, "href").unwrap_or("");
                if !is_allowed_href(href) {
                    return Err(CoreError::Validation(format!(
                        "Link target not allowed: '{href}'"
                    )));
                }
            }
        }
    }

    for child in children(node) {
        validate_node(child)?;
    }
    Ok(())
}

/// Only web, mail and site-relative links survive.
pub fn is_allowed_href(href: &str) -> bool {
    let lower = href.trim().to_ascii_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || (lower.starts_with('/') && !lower.starts_with("//"))
        || lower.starts_with('#')
}

/* --------------------------------------------------------------------------
Rendering
-------------------------------------------------------------------------- */

/// Render a document to HTML. Invalid or empty documents render as "".
pub fn render_html(value: &Value) -> String {
    if is_empty(value) || validate(value).is_err() {
        return String::new();
    }
    let mut out = String::new();
    for child in children(value) {
        render_node(child, &mut out);
    }
    out
}

fn render_node(node: &Value, out: &mut String) {
    match node_type(node).unwrap_or("") {
        "text" => render_text(node, out),
        "hardBreak" => out.push_str("<br>"),
        "horizontalRule" => out.push_str("<hr>"),
        "paragraph" => wrap(node, "p", out),
        "heading" => {
            let tag = format!("h{}", heading_level(node));
            wrap(node, &tag, out);
        }
        "bulletList" => wrap(node, "ul", out),
        "orderedList" => wrap(node, "ol", out),
        "listItem" => wrap(node, "li", out),
        "blockquote" => wrap(node, "blockquote", out),
        "codeBlock" => {
            out.push_str("<pre><code>");
            render_children(node, out);
            out.push_str("</code></pre>");
        }
        _ => {}
    }
}

fn wrap(node: &Value, tag: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if let Some(align) = text_align(node).filter(|a| *a != "left") {
        out.push_str(" style=\"text-align: ");
        out.push_str(align);
        out.push('"');
    }
    out.push('>');
    render_children(node, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn render_children(node: &Value, out: &mut String) {
    for child in children(node) {
        render_node(child, out);
    }
}

fn render_text(node: &Value, out: &mut String) {
    let text = node.get("text").and_then(Value::as_str).unwrap_or("");
    let marks: Vec<&Value> = node
        .get("marks")
        .and_then(Value::as_array)
        .map(|m| m.iter().collect())
        .unwrap_or_default();

    let mut closing = Vec::with_capacity(marks.len());
    for mark in &marks {
        match node_type(mark).unwrap_or("") {
            "bold" => open_tag("strong", out, &mut closing),
            "italic" => open_tag("em", out, &mut closing),
            "underline" => open_tag("u", out, &mut closing),
            "strike" => open_tag("s", out, &mut closing),
            "code" => open_tag("code", out, &mut closing),
            "link" => {
                let href = mark_attr(mark, "href").unwrap_or("#");
                out.push_str("<a href=\"");
                out.push_str(&escape_html(href));
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                closing.push("a");
            }
            _ => {}
        }
    }

    out.push_str(&escape_html(text));

    for tag in closing.iter().rev() {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn open_tag(tag: &'static str, out: &mut String, closing: &mut Vec<&'static str>) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    closing.push(tag);
}

/// Concatenated text of a document, blocks separated by single spaces.
pub fn plain_text(value: &Value) -> String {
    let mut out = String::new();
    collect_text(value, &mut out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain-text excerpt of at most `max_chars` characters, cut on a word
/// boundary with a trailing ellipsis. `None` for documents without text.
pub fn excerpt(value: &Value, max_chars: usize) -> Option<String> {
    let text = plain_text(value);
    if text.is_empty() {
        return None;
    }
    if text.chars().count() <= max_chars {
        return Some(text);
    }
    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(' ') {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    Some(format!("{}…", trimmed.trim_end()))
}

/// Inline text runs are appended as-is; every other node is fenced with
/// spaces so adjacent blocks do not run together.
fn collect_text(node: &Value, out: &mut String) {
    if let Some(text) = node.get("text").and_then(Value::as_str) {
        out.push_str(text);
        return;
    }
    out.push(' ');
    for child in children(node) {
        collect_text(child, out);
    }
    out.push(' ');
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/* --------------------------------------------------------------------------
Node accessors
-------------------------------------------------------------------------- */

fn node_type(node: &Value) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}

fn children(node: &Value) -> impl Iterator<Item = &Value> {
    node.get("content")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn heading_level(node: &Value) -> u64 {
    node.get("attrs")
        .and_then(|a| a.get("level"))
        .and_then(Value::as_u64)
        .unwrap_or(1)
}

fn text_align(node: &Value) -> Option<&str> {
    node.get("attrs")
        .and_then(|a| a.get("textAlign"))
        .and_then(Value::as_str)
}

fn mark_attr<'a>(mark: &'a Value, name: &str) -> Option<&'a str> {
    mark.get("attrs")
        .and_then(|a| a.get(name))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_doc() -> Value {
        json!({
            "type": "doc",
            "content": [
                {
                    "type": "heading",
                    "attrs": { "level": 2, "textAlign": "center" },
                    "content": [{ "type": "text", "text": "Project <Alpha>" }]
                },
                {
                    "type": "paragraph",
                    "content": [
                        { "type": "text", "text": "Built with " },
                        {
                            "type": "text",
                            "text": "Rust",
                            "marks": [
                                { "type": "bold" },
                                { "type": "link", "attrs": { "href": "https://rust-lang.org" } }
                            ]
                        }
                    ]
                },
                {
                    "type": "bulletList",
                    "content": [
                        {
                            "type": "listItem",
                            "content": [
                                { "type": "paragraph", "content": [{ "type": "text", "text": "fast" }] }
                            ]
                        }
                    ]
                }
            ]
        })
    }

    #[test]
    fn empty_documents_are_valid() {
        assert!(validate(&Value::Null).is_ok());
        assert!(validate(&json!({})).is_ok());
        assert_eq!(render_html(&json!({})), "");
    }

    #[test]
    fn sample_document_validates() {
        assert!(validate(&sample_doc()).is_ok());
    }

    #[test]
    fn rejects_non_doc_root() {
        assert!(validate(&json!({ "type": "paragraph" })).is_err());
        assert!(validate(&json!("plain string")).is_err());
    }

    #[test]
    fn rejects_heading_level_four() {
        let doc = json!({
            "type": "doc",
            "content": [{ "type": "heading", "attrs": { "level": 4 } }]
        });
        assert!(validate(&doc).is_err());
    }

    #[test]
    fn rejects_unknown_nodes_and_marks() {
        let image = json!({ "type": "doc", "content": [{ "type": "image" }] });
        assert!(validate(&image).is_err());

        let highlight = json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [{ "type": "text", "text": "x", "marks": [{ "type": "highlight" }] }]
            }]
        });
        assert!(validate(&highlight).is_err());
    }

    #[test]
    fn rejects_javascript_links() {
        let doc = json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [{
                    "type": "text",
                    "text": "click",
                    "marks": [{ "type": "link", "attrs": { "href": "javascript:alert(1)" } }]
                }]
            }]
        });
        assert!(validate(&doc).is_err());
    }

    #[test]
    fn renders_html_with_escaping_and_marks() {
        let html = render_html(&sample_doc());
        assert!(html.starts_with("<h2 style=\"text-align: center\">Project &lt;Alpha&gt;</h2>"));
        assert!(html.contains(
            "<strong><a href=\"https://rust-lang.org\" target=\"_blank\" rel=\"noopener noreferrer\">Rust</a></strong>"
        ));
        assert!(html.ends_with("<ul><li><p>fast</p></li></ul>"));
    }

    #[test]
    fn excerpt_cuts_on_word_boundary() {
        assert_eq!(excerpt(&sample_doc(), 20).as_deref(), Some("Project <Alpha>…"));
        assert_eq!(excerpt(&json!({}), 20), None);
        assert_eq!(
            excerpt(&sample_doc(), 200).as_deref(),
            Some("Project <Alpha> Built with Rust fast")
        );
    }

    #[test]
    fn plain_text_joins_blocks() {
        assert_eq!(
            plain_text(&sample_doc()),
            "Project <Alpha> Built with Rust fast"
        );
    }

    #[test]
    fn plain_text_keeps_marked_word_parts_together() {
        let doc = json!({
            "type": "doc",
            "content": [
                {
                    "type": "paragraph",
                    "content": [
                        { "type": "text", "text": "Ru", "marks": [{ "type": "bold" }] },
                        { "type": "text", "text": "st is fast" }
                    ]
                },
                {
                    "type": "paragraph",
                    "content": [
                        { "type": "text", "text": "line" },
                        { "type": "hardBreak" },
                        { "type": "text", "text": "break" }
                    ]
                }
            ]
        });
        assert_eq!(plain_text(&doc), "Rust is fast line break");
        assert_eq!(excerpt(&doc, 8).as_deref(), Some("Rust is…"));
    }
}
