use crate::decode::chunker::{self, is_string_quote};
use crate::error::{Error, Result};
use crate::node::{ArrayNode, Node, ObjectNode, Scalar};
use crate::number::{is_double_literal, is_integer_literal};
use crate::options::{FailureMode, Options};

/// Indentation added to trace lines per nesting level.
const TRACE_SPACER: &str = "   ";

pub struct Parser<'a, 'o> {
    options: &'a Options,
    observer: Option<&'o mut dyn FnMut(&str)>,
}

impl<'a, 'o> Parser<'a, 'o> {
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            observer: None,
        }
    }

    pub fn with_observer(options: &'a Options, observer: &'o mut dyn FnMut(&str)) -> Self {
        Self {
            options,
            observer: Some(observer),
        }
    }

    /// Parse a complete document. The root must be an object or an
    /// array; bare top-level scalars are not accepted.
    pub fn parse_root(&mut self, input: &str) -> Result<Node> {
        let text = input.trim();
        let first = text.chars().next();
        if !matches!(first, Some('{') | Some('[')) {
            return Err(Error::InvalidRoot { found: first });
        }
        let chunk = chunker::chunk(text, 0, self.options)?;
        // `text` is trimmed, so anything past the root chunk is garbage.
        if chunk.len() != text.len() {
            return Err(Error::TrailingContent {
                at: chunk.len(),
                context: snippet(text, chunk.len()),
            });
        }
        if first == Some('{') {
            self.parse_object(chunk, 0)
        } else {
            self.parse_array(chunk, 0)
        }
    }

    /// Object body state machine: key, colon, value, separator-or-end.
    /// `chunk` is known to start with `{` and end with the matching `}`.
    fn parse_object(&mut self, chunk: &str, depth: usize) -> Result<Node> {
        let bytes = chunk.as_bytes();
        let end = bytes.len() - 1;
        let mut object = ObjectNode::new();

        let mut i = 1;
        skip_whitespace(bytes, &mut i);
        while i != end {
            if !is_string_quote(bytes[i]) {
                return Err(trailing(chunk, i));
            }
            let key_chunk = chunker::chunk(chunk, i, self.options)?;
            let key = unescape(&key_chunk[1..key_chunk.len() - 1]);
            i += key_chunk.len();

            skip_whitespace(bytes, &mut i);
            if bytes[i] != b':' {
                return Err(trailing(chunk, i));
            }
            i += 1;

            skip_whitespace(bytes, &mut i);
            if matches!(bytes[i], b',' | b'}' | b']' | b':') {
                return Err(trailing(chunk, i));
            }
            let value_chunk = chunker::chunk(chunk, i, self.options)?;
            let value = self.dispatch(value_chunk, depth + 1)?;
            i += value_chunk.len();

            // Duplicate keys: the first insertion wins.
            object.add(key, value);

            skip_whitespace(bytes, &mut i);
            if bytes[i] == b',' {
                i += 1;
                skip_whitespace(bytes, &mut i);
                if i == end {
                    return Err(trailing(chunk, i));
                }
            } else {
                break;
            }
        }
        if i != end {
            return Err(trailing(chunk, i));
        }
        let node = Node::Object(object);
        self.trace(depth, &node);
        Ok(node)
    }

    /// Array body: the object machine minus the key and colon states.
    fn parse_array(&mut self, chunk: &str, depth: usize) -> Result<Node> {
        let bytes = chunk.as_bytes();
        let end = bytes.len() - 1;
        let mut array = ArrayNode::new();

        let mut i = 1;
        skip_whitespace(bytes, &mut i);
        while i != end {
            if matches!(bytes[i], b',' | b']' | b'}' | b':') {
                return Err(trailing(chunk, i));
            }
            let value_chunk = chunker::chunk(chunk, i, self.options)?;
            let value = self.dispatch(value_chunk, depth + 1)?;
            i += value_chunk.len();
            array.add(value);

            skip_whitespace(bytes, &mut i);
            if bytes[i] == b',' {
                i += 1;
                skip_whitespace(bytes, &mut i);
                if i == end {
                    return Err(trailing(chunk, i));
                }
            } else {
                break;
            }
        }
        if i != end {
            return Err(trailing(chunk, i));
        }
        let node = Node::Array(array);
        self.trace(depth, &node);
        Ok(node)
    }

    /// Classify a carved-out value span and build the matching node.
    fn dispatch(&mut self, value_chunk: &str, depth: usize) -> Result<Node> {
        match value_chunk.as_bytes()[0] {
            b'{' => self.parse_object(value_chunk, depth),
            b'[' => self.parse_array(value_chunk, depth),
            _ if value_chunk == "null" => {
                self.trace(depth, &Node::Null);
                Ok(Node::Null)
            }
            _ => {
                let node = self.classify_scalar(value_chunk)?;
                self.trace(depth, &node);
                Ok(node)
            }
        }
    }

    /// Scalar type inference: quoted text is a string; otherwise try
    /// boolean, then integer, then double. Anything left over goes
    /// through the configured failure mode.
    fn classify_scalar(&self, raw: &str) -> Result<Node> {
        let bytes = raw.as_bytes();
        if raw.len() >= 2 && is_string_quote(bytes[0]) && bytes[raw.len() - 1] == bytes[0] {
            let inner = unescape(&raw[1..raw.len() - 1]);
            return Ok(Node::Scalar(Scalar::string(inner)));
        }
        match raw {
            "true" => return Ok(Node::Scalar(Scalar::boolean(true))),
            "false" => return Ok(Node::Scalar(Scalar::boolean(false))),
            _ => {}
        }
        if is_integer_literal(raw) {
            if let Ok(i) = raw.parse::<i64>() {
                return Ok(Node::Scalar(Scalar::integer(i)));
            }
            // Out of i64 range: fall through to the double attempt.
        }
        if is_double_literal(raw) {
            if let Ok(f) = raw.parse::<f64>() {
                if f.is_finite() {
                    return Ok(Node::Scalar(Scalar::double(f)));
                }
            }
        }
        match self.options.failure_mode {
            FailureMode::Silent => Ok(Node::Scalar(Scalar::string(raw))),
            FailureMode::Verbose => Ok(Node::Scalar(Scalar::string(format!(
                "<parsing-failure:{raw}>"
            )))),
            FailureMode::Nullify => Ok(Node::Null),
            FailureMode::Exception => Err(Error::ScalarParseFailure {
                text: raw.to_string(),
            }),
        }
    }

    /// One line per parsed value: the nesting spacer followed by the
    /// value rendered as compact JSON with the active options.
    fn trace(&mut self, depth: usize, node: &Node) {
        if let Some(observer) = self.observer.as_mut() {
            let rendered = crate::encode::to_string(node, self.options);
            observer(&format!("{}{}", TRACE_SPACER.repeat(depth), rendered));
        }
    }
}

fn skip_whitespace(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && bytes[*i].is_ascii_whitespace() {
        *i += 1;
    }
}

fn trailing(chunk: &str, at: usize) -> Error {
    Error::TrailingContent {
        at,
        context: snippet(chunk, at),
    }
}

fn snippet(text: &str, start: usize) -> String {
    text[start..].chars().take(24).collect()
}

/// Convert two-character escape sequences to their single-character
/// equivalents. Unrecognized sequences are kept verbatim.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

pub fn parse_document(input: &str, options: &Options) -> Result<Node> {
    Parser::new(options).parse_root(input)
}

pub fn parse_document_with_observer(
    input: &str,
    options: &Options,
    observer: &mut dyn FnMut(&str),
) -> Result<Node> {
    Parser::with_observer(options, observer).parse_root(input)
}
