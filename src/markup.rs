/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module contains the low-level XML helpers: parsing, rendering a node as plain text or as
//! markup, and the text accounting primitives (direct text and tail text) the extractor relies on.
//!
//! Elements are rendered by their local name. Namespaced attributes keep their prefix, and the
//! prefixes they use are declared on the element, so attributes that only differ in namespace stay apart.

use roxmltree::{Attribute, Document, Node, ParsingOptions};

use crate::error::TempEvalError;

/// Parses a string as XML. Any well-formedness error is reported as [`TempEvalError::MalformedInputError`].
pub(crate) fn parse_xml<'input>(
    xml: &'input str,
    contextmsg: &'static str,
) -> Result<Document<'input>, TempEvalError> {
    Document::parse_with_options(
        xml,
        ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        },
    )
    .map_err(|e| TempEvalError::MalformedInputError(e.to_string(), contextmsg))
}

/// Renders the node as plain text: all descendant text in document order, tags removed.
/// Text following the node itself (its tail) is not included.
pub fn to_text(node: Node) -> String {
    let mut s = String::new();
    for descendant in node.descendants() {
        if descendant.is_text() {
            s += descendant.text().unwrap_or_default();
        }
    }
    s
}

/// Renders the node as XML markup. Comments and processing instructions are dropped, so stripping
/// the tags from the output yields exactly [`to_text()`] for the same node.
pub fn to_markup(node: Node) -> String {
    let mut s = String::new();
    write_markup(node, &mut s);
    s
}

fn write_markup(node: Node, out: &mut String) {
    if node.is_text() {
        escape_text(node.text().unwrap_or_default(), out);
    } else if node.is_element() {
        let name = node.tag_name().name();
        out.push('<');
        out.push_str(name);
        let mut declared: Vec<&str> = Vec::new();
        for attribute in node.attributes() {
            if let Some(uri) = attribute.namespace() {
                match node.lookup_prefix(uri) {
                    Some(prefix) if prefix != "xml" && !declared.contains(&prefix) => {
                        declared.push(prefix);
                        out.push_str(" xmlns:");
                        out.push_str(prefix);
                        out.push_str("=\"");
                        escape_attribute(uri, out);
                        out.push('"');
                    }
                    _ => {}
                }
            }
        }
        for attribute in node.attributes() {
            out.push(' ');
            out.push_str(&attribute_name(node, &attribute));
            out.push_str("=\"");
            escape_attribute(attribute.value(), out);
            out.push('"');
        }
        if node.has_children() {
            out.push('>');
            for child in node.children() {
                write_markup(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        } else {
            out.push_str("/>");
        }
    }
}

/// Returns the name of an attribute as written in the source, `prefix:name` if it is in a namespace
pub(crate) fn attribute_name(node: Node, attribute: &Attribute) -> String {
    match attribute.namespace().and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) => format!("{}:{}", prefix, attribute.name()),
        None => attribute.name().to_string(),
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            //a literal carriage return would be normalized away by the next parser
            '\r' => out.push_str("&#13;"),
            c => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            c => out.push(c),
        }
    }
}

/// Parses markup and returns its plain text. This is the inverse view of [`to_markup()`].
pub fn strip_tags(markup: &str) -> Result<String, TempEvalError> {
    let doc = parse_xml(markup, "strip_tags(): parsing markup")?;
    Ok(to_text(doc.root_element()))
}

/// Returns the direct text of an element: the text before its first child element.
/// Comments and processing instructions in between do not interrupt it.
pub(crate) fn direct_text(node: Node) -> String {
    let mut s = String::new();
    for child in node.children() {
        if child.is_element() {
            break;
        } else if child.is_text() {
            s += child.text().unwrap_or_default();
        }
    }
    s
}

/// Returns the tail text of an element: the text that follows its closing tag, up to the next
/// sibling element or the end of the parent.
pub(crate) fn tail_text(node: Node) -> String {
    let mut s = String::new();
    let mut next = node.next_sibling();
    while let Some(sibling) = next {
        if sibling.is_element() {
            break;
        } else if sibling.is_text() {
            s += sibling.text().unwrap_or_default();
        }
        next = sibling.next_sibling();
    }
    s
}
