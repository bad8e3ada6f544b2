use crate::error::{Error, Result};
use crate::number::format_double;

/// The scalar kinds a leaf value can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Boolean,
    Integer,
    Double,
}

/// A leaf value stored in canonical text form: quotes stripped for
/// strings, lowercase `true`/`false`, digits/sign for integers, and
/// `.`-separated decimal text for doubles. Kind and text are kept
/// consistent by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    kind: ScalarKind,
    text: String,
}

impl Scalar {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            kind: ScalarKind::String,
            text: value.into(),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            kind: ScalarKind::Boolean,
            text: if value { "true" } else { "false" }.into(),
        }
    }

    pub fn integer(value: i64) -> Self {
        Self {
            kind: ScalarKind::Integer,
            text: value.to_string(),
        }
    }

    /// Canonical double. Callers hand non-finite values to
    /// `Node::from(f64)` instead, which maps them to null.
    pub fn double(value: f64) -> Self {
        Self {
            kind: ScalarKind::Double,
            text: format_double(value),
        }
    }

    pub(crate) fn from_parts(kind: ScalarKind, text: String) -> Self {
        Self { kind, text }
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// The canonical text, without enclosing quotes for strings.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One element of a JSON tree. Exactly one variant is active; every
/// projection is checked and returns a `Result` instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Scalar(Scalar),
    Object(ObjectNode),
    Array(ArrayNode),
}

impl Node {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Scalar(s) => match s.kind {
                ScalarKind::String => "string",
                ScalarKind::Boolean => "boolean",
                ScalarKind::Integer => "integer",
                ScalarKind::Double => "double",
            },
            Node::Object(_) => "object",
            Node::Array(_) => "array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Node::Scalar(s) if s.kind == ScalarKind::String)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Node::Scalar(s) if s.kind == ScalarKind::Boolean)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Node::Scalar(s) if s.kind == ScalarKind::Integer)
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Node::Scalar(s) if s.kind == ScalarKind::Double)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// True only for scalar leaves, not for null or containers.
    pub fn is_value(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.kind_name(),
        }
    }

    pub fn as_string(&self) -> Result<&str> {
        match self {
            Node::Scalar(s) if s.kind == ScalarKind::String => Ok(&s.text),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Node::Scalar(s) if s.kind == ScalarKind::Boolean => Ok(s.text == "true"),
            other => Err(other.mismatch("boolean")),
        }
    }

    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Node::Scalar(s) if s.kind == ScalarKind::Integer => {
                s.text.parse().map_err(|_| Error::ScalarParseFailure {
                    text: s.text.clone(),
                })
            }
            other => Err(other.mismatch("integer")),
        }
    }

    pub fn as_double(&self) -> Result<f64> {
        match self {
            Node::Scalar(s) if s.kind == ScalarKind::Double => {
                s.text.parse().map_err(|_| Error::ScalarParseFailure {
                    text: s.text.clone(),
                })
            }
            other => Err(other.mismatch("double")),
        }
    }

    pub fn as_object(&self) -> Result<&ObjectNode> {
        match self {
            Node::Object(o) => Ok(o),
            other => Err(other.mismatch("object")),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut ObjectNode> {
        match self {
            Node::Object(o) => Ok(o),
            other => Err(other.mismatch("object")),
        }
    }

    pub fn as_array(&self) -> Result<&ArrayNode> {
        match self {
            Node::Array(a) => Ok(a),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut ArrayNode> {
        match self {
            Node::Array(a) => Ok(a),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_value(&self) -> Result<&Scalar> {
        match self {
            Node::Scalar(s) => Ok(s),
            other => Err(other.mismatch("value")),
        }
    }

    /// Positional indexing, valid only on arrays.
    pub fn at(&self, index: usize) -> Result<&Node> {
        match self {
            Node::Array(a) => a.items.get(index).ok_or(Error::IndexOutOfRange {
                index,
                len: a.items.len(),
            }),
            other => Err(Error::InvalidIndexer {
                kind: other.kind_name(),
                indexer: "a position",
            }),
        }
    }

    /// Key indexing, valid only on objects.
    pub fn key(&self, key: &str) -> Result<&Node> {
        match self {
            Node::Object(o) => o.get(key).ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
            }),
            other => Err(Error::InvalidIndexer {
                kind: other.kind_name(),
                indexer: "a string key",
            }),
        }
    }
}

impl core::fmt::Display for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::encode::to_string(self, &crate::Options::default()))
    }
}

/// Key/value members of an object. Keys are unique; the first
/// insertion of a key wins and later duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectNode {
    members: Vec<(String, Node)>,
}

impl ObjectNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member, returning `self` for chaining. A duplicate
    /// key is a no-op.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Node>) -> &mut Self {
        let key = key.into();
        if !self.contains(&key) {
            self.members.push((key, value.into()));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.members
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.members
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.members.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Node> {
        let pos = self.members.iter().position(|(k, _)| k == key)?;
        Some(self.members.remove(pos).1)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Ordered, heterogeneous sequence of nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayNode {
    items: Vec<Node>,
}

impl ArrayNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: impl Into<Node>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.items.get_mut(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Node> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.items.iter()
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Node::Scalar(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::string(s))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::string(s))
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::boolean(b))
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Scalar(Scalar::integer(i))
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Scalar(Scalar::integer(i64::from(i)))
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        // JSON has no lexical form for NaN or infinities.
        if f.is_finite() {
            Node::Scalar(Scalar::double(f))
        } else {
            Node::Null
        }
    }
}

impl From<ObjectNode> for Node {
    fn from(o: ObjectNode) -> Self {
        Node::Object(o)
    }
}

impl From<ArrayNode> for Node {
    fn from(a: ArrayNode) -> Self {
        Node::Array(a)
    }
}
