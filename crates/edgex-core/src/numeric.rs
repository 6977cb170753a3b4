//! # Numeric Literal Scanning
//!
//! Device services apply profile transforms after scanning the coefficient
//! strings with the C library (`strtold` for floats, `strtoll` with base 0
//! for integers). A coefficient is only acceptable if that scan consumes the
//! whole string without a range error, so the scanners here reproduce the C
//! acceptance rules rather than Rust's `str::parse`:
//!
//! - leading whitespace is skipped, trailing whitespace is not
//! - floats accept `1.`, `.5`, `1e5`, hex floats (`0x1.8p3`), `inf`,
//!   `infinity` and `nan(...)`; a dangling exponent marker is left unconsumed
//! - integers detect the radix from the prefix: `0x` hex, leading `0` octal,
//!   otherwise decimal
//!
//! Float range errors follow the x87 `long double` bounds `strtold` works
//! in; integer range errors follow `i64`.

use crate::error::NumericError;

fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn skip_space(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| is_c_space(**b)).count()
}

fn count_while(bytes: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes[from.min(bytes.len())..]
        .iter()
        .take_while(|b| pred(**b))
        .count()
}

fn has_prefix_ignore_case(bytes: &[u8], prefix: &str) -> bool {
    bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn trailing(input: &str, end: usize) -> Result<(), NumericError> {
    if end < input.len() {
        Err(NumericError::Trailing {
            rest: input[end..].to_string(),
        })
    } else {
        Ok(())
    }
}

/// Length of an `inf`, `infinity` or `nan[(chars)]` token at the start of `bytes`.
fn special_len(bytes: &[u8]) -> Option<(usize, f64)> {
    if has_prefix_ignore_case(bytes, "infinity") {
        return Some((8, f64::INFINITY));
    }
    if has_prefix_ignore_case(bytes, "inf") {
        return Some((3, f64::INFINITY));
    }
    if has_prefix_ignore_case(bytes, "nan") {
        let payload = count_while(bytes, 4, |b| b.is_ascii_alphanumeric() || b == b'_');
        if bytes.get(3) == Some(&b'(') && bytes.get(4 + payload) == Some(&b')') {
            return Some((5 + payload, f64::NAN));
        }
        return Some((3, f64::NAN));
    }
    None
}

/// Length of an exponent suffix (`e5`, `E-3`, `p+2`) at `at`, or 0 when the
/// marker is absent or not followed by digits.
fn exponent_len(bytes: &[u8], at: usize, markers: [u8; 2]) -> usize {
    match bytes.get(at) {
        Some(b) if markers.contains(b) => {}
        _ => return 0,
    }
    let mut len = 1;
    if matches!(bytes.get(at + 1), Some(b'+' | b'-')) {
        len += 1;
    }
    let digits = count_while(bytes, at + len, |b| b.is_ascii_digit());
    if digits == 0 {
        0
    } else {
        len + digits
    }
}

/// Decimal exponent bounds of x87 `long double`, the type `strtold` returns.
const LDBL_MAX_EXP10: i64 = 4932;
const LDBL_MAX_SIGNIFICAND: f64 = 1.189_731_495_357_231_8;
const LDBL_MIN_EXP10: i64 = -4932;
const LDBL_MIN_SIGNIFICAND: f64 = 3.362_103_143_112_093_5;

/// Binary exponent bounds of the leading bit of a normal `long double`.
const LDBL_MAX_EXP2: i64 = 16383;
const LDBL_MIN_EXP2: i64 = -16382;

/// Hex digits kept for the `f64` approximation; more cannot change it.
const HEX_SIGNIFICANT_DIGITS: usize = 15;

/// Scan a floating-point literal with `strtold` acceptance rules.
///
/// Range errors follow `long double` bounds, so `1e400` is accepted while
/// `1e5000` is not. The returned value is the nearest `f64`, saturating to
/// infinity or zero beyond its range.
pub fn scan_float(input: &str) -> Result<f64, NumericError> {
    let bytes = input.as_bytes();
    let mut i = skip_space(bytes);
    let negative = bytes.get(i) == Some(&b'-');
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    let sign = if negative { -1.0 } else { 1.0 };

    if let Some((len, value)) = special_len(&bytes[i..]) {
        trailing(input, i + len)?;
        return Ok(sign * value);
    }

    if let Some((len, value)) = scan_hex_float(&bytes[i..]) {
        trailing(input, i + len)?;
        return Ok(sign * value?);
    }

    let literal_start = i;
    let int_digits = count_while(bytes, i, |b| b.is_ascii_digit());
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_while(bytes, i + 1, |b| b.is_ascii_digit());
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return Err(NumericError::NoDigits);
    }
    let mantissa_end = i;
    let exp_len = exponent_len(bytes, i, [b'e', b'E']);
    let exponent = if exp_len > 0 {
        parse_exponent(&bytes[i + 1..i + exp_len])
    } else {
        0
    };
    i += exp_len;
    trailing(input, i)?;

    if let Some((exp10, significand)) =
        decimal_magnitude(&bytes[literal_start..mantissa_end], exponent)
    {
        let overflow = exp10 > LDBL_MAX_EXP10
            || (exp10 == LDBL_MAX_EXP10 && significand > LDBL_MAX_SIGNIFICAND);
        let underflow = exp10 < LDBL_MIN_EXP10
            || (exp10 == LDBL_MIN_EXP10 && significand < LDBL_MIN_SIGNIFICAND);
        if overflow || underflow {
            return Err(NumericError::OutOfRange);
        }
    }

    let value: f64 = input[literal_start..i]
        .parse()
        .map_err(|_| NumericError::NoDigits)?;
    Ok(sign * value)
}

/// Signed exponent digits, saturating at the `i64` bounds.
fn parse_exponent(text: &[u8]) -> i64 {
    let (negative, digits) = match text.first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = digits.iter().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Decimal exponent and significand in `[1, 10)` of a mantissa such as
/// `12.5` scaled by `10^exponent`, or `None` when every digit is zero.
fn decimal_magnitude(mantissa: &[u8], exponent: i64) -> Option<(i64, f64)> {
    let point = mantissa
        .iter()
        .position(|&b| b == b'.')
        .unwrap_or(mantissa.len());
    let first = mantissa.iter().position(|b| (b'1'..=b'9').contains(b))?;
    let place = if first < point {
        (point - first - 1) as i64
    } else {
        -((first - point) as i64)
    };
    let lead: Vec<u8> = mantissa[first..]
        .iter()
        .copied()
        .filter(u8::is_ascii_digit)
        .take(17)
        .collect();
    let significand = lead[1..]
        .iter()
        .rev()
        .fold(0.0, |acc, &b| (acc + f64::from(b - b'0')) / 10.0)
        + f64::from(lead[0] - b'0');
    Some((exponent.saturating_add(place), significand))
}

/// Scan `0x` hex-float syntax. Returns the consumed length and the value
/// (or its range error), or `None` if `bytes` does not start a hex literal.
fn scan_hex_float(bytes: &[u8]) -> Option<(usize, Result<f64, NumericError>)> {
    if !has_prefix_ignore_case(bytes, "0x") {
        return None;
    }
    let mut i = 2;
    let int_digits = count_while(bytes, i, |b| b.is_ascii_hexdigit());
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_while(bytes, i + 1, |b| b.is_ascii_hexdigit());
    }
    if int_digits + frac_digits == 0 {
        // "0x" with no hex digits: only the leading zero is a literal.
        return None;
    }
    let mut digits: Vec<u32> = bytes[2..2 + int_digits]
        .iter()
        .filter_map(|&b| (b as char).to_digit(16))
        .collect();
    if bytes.get(i) == Some(&b'.') {
        digits.extend(
            bytes[i + 1..i + 1 + frac_digits]
                .iter()
                .filter_map(|&b| (b as char).to_digit(16)),
        );
        i += 1 + frac_digits;
    }
    let exp_len = exponent_len(bytes, i, [b'p', b'P']);
    let exponent = if exp_len > 0 {
        parse_exponent(&bytes[i + 1..i + exp_len])
    } else {
        0
    };
    i += exp_len;

    let Some(first) = digits.iter().position(|&d| d != 0) else {
        return Some((i, Ok(0.0)));
    };
    let significant = &digits[first..];
    let kept = significant.len().min(HEX_SIGNIFICANT_DIGITS);
    let mantissa = significant[..kept]
        .iter()
        .fold(0_u64, |acc, &d| (acc << 4) | u64::from(d));
    // Exponent of the lowest kept digit, then of the leading bit.
    let scale = exponent
        .saturating_sub(4 * frac_digits as i64)
        .saturating_add(4 * (significant.len() - kept) as i64);
    let leading_bits = 32 - significant[0].leading_zeros() as i64;
    let exp2 = scale.saturating_add(4 * (kept as i64 - 1) + leading_bits - 1);
    if !(LDBL_MIN_EXP2..=LDBL_MAX_EXP2).contains(&exp2) {
        return Some((i, Err(NumericError::OutOfRange)));
    }

    let shift = scale.clamp(-4400, 4400) as i32;
    // Two half-steps keep 2^shift itself from overflowing or flushing to zero.
    let value = mantissa as f64 * 2f64.powi(shift / 2) * 2f64.powi(shift - shift / 2);
    Some((i, Ok(value)))
}

/// Scan an integer literal with `strtoll(s, &end, 0)` acceptance rules.
pub fn scan_int(input: &str) -> Result<i64, NumericError> {
    let bytes = input.as_bytes();
    let mut i = skip_space(bytes);
    let negative = bytes.get(i) == Some(&b'-');
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }

    let hex = bytes.get(i) == Some(&b'0')
        && matches!(bytes.get(i + 1), Some(b'x' | b'X'))
        && bytes.get(i + 2).is_some_and(|b| b.is_ascii_hexdigit());
    let radix: u32 = if hex {
        i += 2;
        16
    } else if bytes.get(i) == Some(&b'0') {
        8
    } else {
        10
    };

    let digits = count_while(bytes, i, |b| (b as char).is_digit(radix));
    if digits == 0 {
        return Err(NumericError::NoDigits);
    }
    let end = i + digits;
    trailing(input, end)?;

    let mut magnitude: u64 = 0;
    for &b in &bytes[i..end] {
        let d = u64::from((b as char).to_digit(radix).unwrap_or(0));
        magnitude = magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(d))
            .ok_or(NumericError::OutOfRange)?;
    }

    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            return Err(NumericError::OutOfRange);
        }
        Ok((magnitude as i128).wrapping_neg() as i64)
    } else {
        i64::try_from(magnitude).map_err(|_| NumericError::OutOfRange)
    }
}
