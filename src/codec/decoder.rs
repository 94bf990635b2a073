use crate::codec::types::{FIRST_BAND_DIGIT_OFFSET, MAX_MULTIPLIER_BAND};

/// Reconstruct the canonical value string for a three-band color code.
///
/// Band ranges (first and second in 0..=9, multiplier in 0..=7) are a caller
/// contract, checked only with debug assertions; the first band index is
/// offset by one because its color alphabet starts at digit 1.
pub fn decode(first_band: u8, second_band: u8, multiplier_band: u8) -> String {
    debug_assert!(first_band <= 9, "first band out of range: {}", first_band);
    debug_assert!(second_band <= 9, "second band out of range: {}", second_band);
    debug_assert!(
        multiplier_band <= MAX_MULTIPLIER_BAND,
        "multiplier band out of range: {}",
        multiplier_band
    );

    let first_digit = (first_band + FIRST_BAND_DIGIT_OFFSET) as u64;
    let ohms = (first_digit * 10 + second_band as u64) * 10u64.pow(multiplier_band as u32);
    simplify(&ohms.to_string())
}

/// Rewrite a decimal digit string into magnitude-suffix notation.
///
/// Expects an ASCII digit string, optionally already carrying a stray "K" or
/// "m" marker from an earlier pass. The rules run in a fixed order and each
/// one sees the string as rewritten by the rules before it, so a value can
/// shorten in steps ("1000000" becomes "1000k" and then "1M").
pub fn simplify(digits: &str) -> String {
    let mut value = digits.to_string();

    if value.ends_with('K') {
        value.truncate(value.len() - 1);
        value.push('k');
    }

    if value.ends_with('m') {
        value.truncate(value.len() - 1);
        value.push('M');
    }

    if value.ends_with("000") {
        value.truncate(value.len() - 3);
        value.push('k');
    }

    if value.ends_with("000k") {
        value.truncate(value.len() - 4);
        value.push('M');
    }

    if value.ends_with("00k") && value.as_bytes()[1] != b'0' {
        value = format!("{}.{}M", &value[..1], &value[1..2]);
    }

    if value.ends_with("00") && value.as_bytes()[1] != b'0' {
        value = format!("{}.{}k", &value[..1], &value[1..2]);
    }

    value
}
