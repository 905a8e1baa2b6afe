//! Canonical numeric literals.
//!
//! A string is only turned into a number when it is already the exact text a
//! JSON client would have produced for that number. "Exact text" means the
//! ECMAScript `Number::toString` rendering: shortest round-trip digits, plain
//! decimal notation for magnitudes in `[1e-6, 1e21)`, exponent notation with
//! an explicit sign (`1e+21`, `1.5e-7`) otherwise.

use serde_json::Number;

/// Largest integer an `f64` holds exactly (`2^53 - 1`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Exponent bounds (as the decimal point position `n`) for plain notation.
const MAX_PLAIN_POINT: i32 = 21;
const MIN_PLAIN_POINT: i32 = -6;

/// Parse `text` into a JSON number if it is a clean canonical literal.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that does
/// not parse, is not finite, or whose canonical rendering differs from the
/// trimmed input (`"1e3"`, `"1.50"`, `"007"`, `"-0"`, `"+5"`, ...).
pub fn parse_canonical_number(text: &str) -> Option<Number> {
    // JS whitespace: Unicode White_Space plus U+FEFF, minus U+0085.
    let trimmed = text.trim_matches(|c: char| {
        (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
    });
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || canonical_text(value) != trimmed {
        return None;
    }
    to_json_number(value)
}

/// Render `value` the way ECMAScript `String(value)` does.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn canonical_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", canonical_text(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3", "5e-324".
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    if k <= n && n <= MAX_PLAIN_POINT {
        // 1000, 100000000000000000000
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_POINT {
        // 12.5
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if MIN_PLAIN_POINT < n && n <= 0 {
        // 0.000125
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", e.unsigned_abs())
        } else {
            format!("{first}.{rest}e{sign}{}", e.unsigned_abs())
        }
    }
}

/// Integral values inside the safe range become JSON integers.
fn to_json_number(value: f64) -> Option<Number> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        #[allow(clippy::cast_possible_truncation)]
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}
