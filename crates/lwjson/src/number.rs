/// Format a finite f64 as canonical double text.
/// Requirements:
/// - no exponent notation
/// - `.` is always the decimal separator, independent of host locale
/// - a fractional part is always present, so double text never re-reads
///   as an integer literal
/// - -0 normalized to 0
pub(crate) fn format_double(value: f64) -> String {
    if !value.is_finite() {
        debug_assert!(false, "format_double called with non-finite value");
        return String::from("0.0");
    }
    if value == 0.0 {
        return String::from("0.0");
    }

    let mut sign_prefix = "";
    let mut magnitude = value;
    if magnitude < 0.0 {
        sign_prefix = "-";
        magnitude = -magnitude;
    }

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(magnitude);
    let body = if let Some(exp_index) = raw.find(['e', 'E']) {
        let mantissa = &raw[..exp_index];
        let exp: i32 = raw[exp_index + 1..].parse().unwrap_or(0);
        expand_exponent(mantissa, exp)
    } else {
        String::from(raw)
    };
    let mut out = String::with_capacity(sign_prefix.len() + body.len() + 2);
    out.push_str(sign_prefix);
    out.push_str(&trim_fraction(body));
    if !out.contains('.') {
        out.push_str(".0");
    }
    out
}

/// Optional sign followed by ASCII digits only: the integer lexical form.
pub(crate) fn is_integer_literal(s: &str) -> bool {
    let digits = match s.as_bytes() {
        [b'+' | b'-', rest @ ..] => rest,
        rest => rest,
    };
    !digits.is_empty() && digits.iter().all(|b| b.is_ascii_digit())
}

/// Optional sign, digits with at most one decimal point, optional
/// exponent marker with its own optional sign. Rejects the textual
/// forms `f64::from_str` would accept but JSON does not (inf, NaN).
pub(crate) fn is_double_literal(s: &str) -> bool {
    let bytes = match s.as_bytes() {
        [b'+' | b'-', rest @ ..] => rest,
        rest => rest,
    };
    if bytes.is_empty() {
        return false;
    }
    let mut mantissa_digits = false;
    let mut exponent_digits = false;
    let mut seen_dot = false;
    let mut seen_exp = false;
    let mut prev_was_exp = false;
    for &b in bytes {
        match b {
            b'0'..=b'9' => {
                if seen_exp {
                    exponent_digits = true;
                } else {
                    mantissa_digits = true;
                }
                prev_was_exp = false;
            }
            b'.' => {
                if seen_dot || seen_exp {
                    return false;
                }
                seen_dot = true;
                prev_was_exp = false;
            }
            b'e' | b'E' => {
                if seen_exp || !mantissa_digits {
                    return false;
                }
                seen_exp = true;
                prev_was_exp = true;
            }
            b'+' | b'-' => {
                // A sign is only valid directly after the exponent marker.
                if !prev_was_exp {
                    return false;
                }
                prev_was_exp = false;
            }
            _ => return false,
        }
    }
    mantissa_digits && (!seen_exp || exponent_digits)
}

/// Rewrite an exponent-form mantissa as positional decimal text.
/// `mantissa` is a non-negative ryu mantissa ("1.5", "1"); the decimal
/// point lands `exp` places to the right of where it started.
fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int_part}{frac_part}");
    let point = int_part.len() as i64 + i64::from(exp);

    if point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else if point as usize >= digits.len() {
        format!("{digits}{}", "0".repeat(point as usize - digits.len()))
    } else {
        let (head, tail) = digits.split_at(point as usize);
        format!("{head}.{tail}")
    }
}

fn trim_fraction(mut s: String) -> String {
    if let Some(dot_pos) = s.find('.') {
        // Keep one fractional digit so the double marker survives.
        let mut end = s.len();
        while end > dot_pos + 2 && s.as_bytes()[end - 1] == b'0' {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}
