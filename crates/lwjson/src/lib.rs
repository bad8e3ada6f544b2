#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod node;
pub mod options;

mod number;

#[cfg(feature = "serde")]
mod interop;

pub use crate::error::{Error, Result};
pub use crate::node::{ArrayNode, Node, ObjectNode, Scalar, ScalarKind};
pub use crate::options::{FailureMode, Options, QuoteStyle};

/// Parse a JSON document with default options. The root must be an
/// object or an array.
pub fn parse(input: &str) -> Result<Node> {
    parse_with_options(input, &Options::default())
}

pub fn parse_with_options(input: &str, options: &Options) -> Result<Node> {
    crate::decode::parser::parse_document(input, options)
}

/// Parse with a trace observer: the callback receives one line per
/// parsed value, the value rendered as compact JSON and indented by
/// nesting depth. It never affects the result.
pub fn parse_with_observer(
    input: &str,
    options: &Options,
    mut observer: impl FnMut(&str),
) -> Result<Node> {
    crate::decode::parser::parse_document_with_observer(input, options, &mut observer)
}

/// Render a node as compact JSON with default options.
pub fn to_string(node: &Node) -> String {
    crate::encode::to_string(node, &Options::default())
}

pub fn to_string_with_options(node: &Node, options: &Options) -> String {
    crate::encode::to_string(node, options)
}
