//! Markup serialisation of element trees.
//!
//! Produces an indented, HTML-like dump used for debugging output and
//! snapshot-style assertions.

use std::fmt::Write;

use crate::element::{Content, Element};
use crate::types::Position;

#[derive(Debug, Clone, Copy)]
pub struct MarkupOptions {
    /// Emit `id` attributes. Generated IDs are process-unique, so snapshot
    /// comparisons usually leave them out.
    pub include_ids: bool,
    pub indent: usize,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            include_ids: false,
            indent: 2,
        }
    }
}

/// Serialise `root` and its descendants.
pub fn to_markup(root: &Element, options: MarkupOptions) -> String {
    let mut out = String::new();
    write_element(&mut out, root, 0, options);
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize, options: MarkupOptions) {
    let pad = " ".repeat(depth * options.indent);
    let _ = write!(out, "{pad}<{}", element.tag);

    if options.include_ids {
        let _ = write!(out, " id=\"{}\"", escape(&element.id));
    }
    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&element.classes.to_string()));
    }
    if let Some(role) = element.role {
        let _ = write!(out, " role=\"{}\"", role.as_str());
    }
    for (key, value) in &element.attrs {
        let _ = write!(out, " {key}=\"{}\"", escape(value));
    }
    match element.position {
        Position::Static => {}
        Position::Relative => out.push_str(" position=\"relative\""),
        Position::Absolute => out.push_str(" position=\"absolute\""),
    }
    if element.disabled {
        out.push_str(" disabled");
    }

    match &element.content {
        Content::None => out.push_str(" />\n"),
        Content::Text(text) => {
            let _ = writeln!(out, ">{}</{}>", escape(text), element.tag);
        }
        Content::Children(children) if children.is_empty() => out.push_str(" />\n"),
        Content::Children(children) => {
            out.push_str(">\n");
            for child in children {
                write_element(out, child, depth + 1, options);
            }
            let _ = writeln!(out, "{pad}</{}>", element.tag);
        }
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
