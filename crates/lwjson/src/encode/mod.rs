use crate::node::{Node, ScalarKind};
use crate::options::Options;

/// Render a node as compact single-line JSON. Total: a well-formed
/// tree always serializes.
pub fn to_string(node: &Node, options: &Options) -> String {
    let mut out = String::new();
    write_node(node, options, &mut out);
    out
}

fn write_node(node: &Node, options: &Options, out: &mut String) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Scalar(s) => match s.kind() {
            ScalarKind::String => write_quoted(s.text(), options, out),
            // Booleans and numbers are stored as canonical text already.
            _ => out.push_str(s.text()),
        },
        Node::Object(object) => {
            out.push('{');
            for (idx, (key, value)) in object.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_quoted(key, options, out);
                out.push(':');
                write_node(value, options, out);
            }
            out.push('}');
        }
        Node::Array(array) => {
            out.push('[');
            for (idx, value) in array.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_node(value, options, out);
            }
            out.push(']');
        }
    }
}

/// Wrap text in the configured quote character, re-escaping the quote
/// itself, backslashes, and control characters so output re-parses.
fn write_quoted(text: &str, options: &Options, out: &mut String) {
    let quote = options.quote_style.quote_char();
    out.push(quote);
    for ch in text.chars() {
        match ch {
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c => out.push(c),
        }
    }
    out.push(quote);
}
