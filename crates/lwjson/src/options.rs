/// Quote character used when rendering keys and string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    Single,
    #[default]
    Double,
}

impl QuoteStyle {
    pub fn quote_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Response to a bare literal that cannot be classified as
/// boolean, integer, or double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Keep the raw text, tagged as a string.
    Silent,
    /// Replace the text with a diagnostic placeholder, tagged as a string.
    #[default]
    Verbose,
    /// Drop the value and produce the null node.
    Nullify,
    /// Abort the whole parse with `ScalarParseFailure`.
    Exception,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub quote_style: QuoteStyle,
    pub failure_mode: FailureMode,
    /// When true, a closing quote preceded by a backslash does not
    /// terminate the string being chunked.
    pub check_escaped: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::default(),
            failure_mode: FailureMode::default(),
            check_escaped: true,
        }
    }
}
