use crate::error::{Error, Result};
use crate::options::Options;

pub(crate) fn is_string_quote(b: u8) -> bool {
    b == b'\'' || b == b'"'
}

fn is_literal_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-')
}

fn snippet(text: &str, start: usize) -> String {
    text[start..].chars().take(24).collect()
}

/// Extract the minimal substring beginning at `start` that spans one
/// complete syntactic unit: an object, an array, a quoted string, or a
/// bare literal. No child semantics are examined; brackets are matched
/// by family only and every scan is bounded by the input length.
pub fn chunk<'a>(text: &'a str, start: usize, options: &Options) -> Result<&'a str> {
    let bytes = text.as_bytes();
    if start >= bytes.len() {
        return Err(Error::UnterminatedValue {
            start,
            context: String::new(),
        });
    }
    match bytes[start] {
        b'{' | b'[' => chunk_block(text, start),
        b if is_string_quote(b) => chunk_string(text, start, options),
        _ => chunk_literal(text, start),
    }
}

/// Object/array chunk: count the opening bracket as +1 and its matching
/// closer as -1, ignoring the other bracket family. Call sites only
/// enter here for the family that started the chunk, so the count
/// cannot be fooled by siblings of the other family. Brackets inside
/// quoted strings do not participate; the in-string bookkeeping always
/// honors backslash escapes regardless of `check_escaped`, which only
/// governs how string values themselves are chunked.
fn chunk_block(text: &str, start: usize) -> Result<&str> {
    let bytes = text.as_bytes();
    let opening = bytes[start];
    let closing = if opening == b'{' { b'}' } else { b']' };

    let mut open_tags = 0usize;
    let mut in_string: Option<u8> = None;
    let mut escape = false;
    let mut i = start;
    while i < bytes.len() {
        let b = bytes[i];
        if let Some(quote) = in_string {
            if escape {
                escape = false;
            } else if b == b'\\' {
                escape = true;
            } else if b == quote {
                in_string = None;
            }
        } else if is_string_quote(b) {
            in_string = Some(b);
        } else if b == opening {
            open_tags += 1;
        } else if b == closing {
            open_tags -= 1;
            if open_tags == 0 {
                return Ok(&text[start..=i]);
            }
        }
        i += 1;
    }
    Err(Error::UnterminatedBlock {
        start,
        opening: opening as char,
    })
}

/// Quoted string chunk, both quotes included. With escaped-quote
/// checking on, a backslash escapes the following character, so an
/// escaped closing quote does not terminate the string.
fn chunk_string<'a>(text: &'a str, start: usize, options: &Options) -> Result<&'a str> {
    let bytes = text.as_bytes();
    let quote = bytes[start];
    let mut escape = false;
    let mut i = start + 1;
    while i < bytes.len() {
        let b = bytes[i];
        if escape {
            escape = false;
        } else if b == b'\\' && options.check_escaped {
            escape = true;
        } else if b == quote {
            return Ok(&text[start..=i]);
        }
        i += 1;
    }
    Err(Error::UnterminatedValue {
        start,
        context: snippet(text, start),
    })
}

/// Bare literal chunk (number, boolean, or `null`): alphanumerics plus
/// `.`, `+`, `-`, up to but excluding the first byte that fails the
/// test. A literal that runs to the end of input has no terminator and
/// is an error.
fn chunk_literal(text: &str, start: usize) -> Result<&str> {
    let bytes = text.as_bytes();
    let mut i = start + 1;
    while i < bytes.len() {
        if !is_literal_byte(bytes[i]) {
            return Ok(&text[start..i]);
        }
        i += 1;
    }
    Err(Error::UnterminatedValue {
        start,
        context: snippet(text, start),
    })
}
