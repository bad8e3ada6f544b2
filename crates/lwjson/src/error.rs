use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid root character {found:?}: a JSON document must start with '{{' or '['")]
    InvalidRoot { found: Option<char> },

    #[error("unterminated '{opening}' block starting at byte {start}")]
    UnterminatedBlock { start: usize, opening: char },

    #[error("unterminated value starting at byte {start}: {context:?}")]
    UnterminatedValue { start: usize, context: String },

    #[error("unexpected content at byte {at} of {context:?}")]
    TrailingContent { at: usize, context: String },

    #[error("cannot classify scalar literal {text:?}")]
    ScalarParseFailure { text: String },

    #[error("expected a {expected} node, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{kind} nodes cannot be indexed by {indexer}")]
    InvalidIndexer {
        kind: &'static str,
        indexer: &'static str,
    },

    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("key {key:?} not found")]
    KeyNotFound { key: String },
}

pub type Result<T> = core::result::Result<T, Error>;
