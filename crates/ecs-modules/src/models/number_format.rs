//! Number rendering for simulator output.
//!
//! `fixed` rounds the exact binary value half away from zero, so `2.5` shows as
//! `3` and `1.005` (stored as 1.00499...) shows as `1.00`. Non-finite values
//! render as `NaN`, `inf` or `-inf`.

/// Enough fraction digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// `value` with exactly `digits` fraction digits.
pub fn fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let (int_digits, frac_digits) = kept.split_at(split);
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(int_digits.iter().map(|d| char::from(*d)));
    if digits > 0 {
        out.push('.');
        out.extend(frac_digits.iter().map(|d| char::from(*d)));
    }
    out
}

/// Shortest text that reads back as `value` (`1000`, `12.5`, `0.30000000000000004`).
pub fn plain(value: f64) -> String {
    value.to_string()
}
