use lazy_static::lazy_static;
use regex::Regex;

use crate::codec::error::ValidationError;

lazy_static! {
    /// Shape of a decimal-form value: exactly one character before the
    /// point and exactly two after it (the significant digit plus the
    /// one-letter magnitude suffix), e.g. "4.7k".
    static ref DECIMAL_SHAPE: Regex = Regex::new(r"^.\...$").unwrap();
}

/// Check a raw value string against the resistor-value grammar, stopping at
/// the first failing rule.
///
/// The rules run in a fixed order so the reported reason is deterministic;
/// the accept/reject outcome does not depend on the order.
pub fn validate(raw: &str) -> Result<(), ValidationError> {
    // Least valid resistor value is ten (10), so anything shorter than two
    // characters is out.
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }
    if raw.starts_with('0') {
        return Err(ValidationError::LeadingZero);
    }
    if raw.starts_with('-') {
        return Err(ValidationError::Negative);
    }
    if raw.chars().count() < 2 {
        return Err(ValidationError::TooShort);
    }
    // A trailing "f" would otherwise slip through as a float literal.
    if raw.ends_with('f') || raw.ends_with('F') {
        return Err(ValidationError::FloatSuffix);
    }
    if raw.ends_with('.') {
        return Err(ValidationError::TrailingPoint);
    }

    let mut non_zero_digits = 0;
    let mut decimal_points = 0;
    for c in raw.chars() {
        if c.is_ascii_digit() && c != '0' {
            non_zero_digits += 1;
            // The two digit bands can only hold two significant digits.
            if non_zero_digits > 2 {
                return Err(ValidationError::TooManySignificantDigits);
            }
        }
        if c == '.' {
            decimal_points += 1;
            if decimal_points > 1 {
                return Err(ValidationError::MultipleDecimalPoints);
            }
        }
    }

    if non_zero_digits == 0 {
        return Err(ValidationError::NoSignificantDigits);
    }

    if decimal_points == 1 {
        // Decimal values are only meaningful with a magnitude suffix:
        // "4.7" alone cannot name a whole-ohm resistor value.
        if !raw.ends_with(['k', 'K', 'm', 'M']) {
            return Err(ValidationError::MissingMagnitudeSuffix);
        }

        let point = raw.find('.').unwrap_or(0);
        if raw[point + 1..].starts_with('0') {
            return Err(ValidationError::ZeroAfterPoint);
        }

        if !DECIMAL_SHAPE.is_match(raw) {
            return Err(ValidationError::MalformedDecimal);
        }
    }

    Ok(())
}

/// Whether a raw string is an acceptable resistor-value expression.
pub fn is_valid_input(raw: &str) -> bool {
    validate(raw).is_ok()
}
