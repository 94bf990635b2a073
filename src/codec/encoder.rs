use crate::codec::error::EncodeError;
use crate::codec::types::{
    BandTriple, FIRST_BAND_DIGIT_OFFSET, MAX_MULTIPLIER_BAND, VALUE_OF_K, VALUE_OF_M,
};
use crate::codec::validator::validate;

/// Strip a trailing magnitude suffix, returning the remainder and the
/// multiplier it stands for.
///
/// The "k" check runs before the "m" check and the second strips from the
/// result of the first, so a doubled suffix like "1mk" loses both letters
/// and keeps the mega multiplier.
fn strip_magnitude_suffix(raw: &str) -> (&str, u32) {
    let mut rest = raw;
    let mut multiplier = 1;
    if let Some(stripped) = rest.strip_suffix('k').or_else(|| rest.strip_suffix('K')) {
        multiplier = VALUE_OF_K;
        rest = stripped;
    }
    if let Some(stripped) = rest.strip_suffix('m').or_else(|| rest.strip_suffix('M')) {
        multiplier = VALUE_OF_M;
        rest = stripped;
    }
    (rest, multiplier)
}

/// Count trailing decimal zero digits of `n`. Zero itself has none.
pub fn count_trailing_zeros(mut n: u64) -> u32 {
    let mut count = 0;
    while n != 0 && n % 10 == 0 {
        n /= 10;
        count += 1;
    }
    count
}

/// Parse a resistor value string into its three-band color code.
///
/// The value goes through a double-precision float so every decimal form the
/// decoder can emit survives the multiply exactly; single precision puts
/// 8.1 x 1e6 on a half-ulp boundary and rounds it to 8100001. The product is
/// rounded to the nearest ohm before the digits are split into bands.
pub fn encode(raw: &str) -> Result<BandTriple, EncodeError> {
    validate(raw).map_err(EncodeError::InvalidInput)?;

    let (number, multiplier) = strip_magnitude_suffix(raw);
    let parsed: f64 = number
        .parse()
        .map_err(|_| EncodeError::UnparsableNumber(raw.to_string()))?;
    let ohms = (parsed * multiplier as f64).round() as u64;

    let digits = ohms.to_string();
    let trailing_zeros = count_trailing_zeros(ohms) as usize;

    let mut significant = digits[..digits.len() - trailing_zeros].to_string();
    let mut multiplier_band = trailing_zeros as i64;
    if significant.len() == 1 {
        // A lone significant digit borrows one zero back: 50 encodes as
        // "5","0" with multiplier x1, not "5" with multiplier x10.
        significant.push('0');
        multiplier_band -= 1;
    } else if significant.len() > 2 {
        return Err(EncodeError::TooManySignificantDigits(raw.to_string()));
    }

    if multiplier_band < 0 || multiplier_band > MAX_MULTIPLIER_BAND as i64 {
        return Err(EncodeError::MultiplierOutOfRange(multiplier_band));
    }

    let first_digit = significant.as_bytes()[0] - b'0';
    let second_digit = significant.as_bytes()[1] - b'0';

    Ok(BandTriple::new(
        first_digit - FIRST_BAND_DIGIT_OFFSET,
        second_digit,
        multiplier_band as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::error::ValidationError;

    #[test]
    fn test_encode_plain_value() {
        assert_eq!(encode("10"), Ok(BandTriple::new(0, 0, 0)));
        assert_eq!(encode("47"), Ok(BandTriple::new(3, 7, 0)));
        assert_eq!(encode("220"), Ok(BandTriple::new(1, 2, 1)));
    }

    #[test]
    fn test_encode_suffixed_value() {
        assert_eq!(encode("4.7k"), Ok(BandTriple::new(3, 7, 2)));
        assert_eq!(encode("1k"), Ok(BandTriple::new(0, 0, 2)));
        assert_eq!(encode("2.2M"), Ok(BandTriple::new(1, 2, 5)));
        assert_eq!(encode("990M"), Ok(BandTriple::new(8, 9, 7)));
    }

    #[test]
    fn test_encode_survives_half_ulp_products() {
        // 8.1 x 1e6 is 8100000.5 in single precision and would round up to
        // 8100001, three significant digits; the wide intermediate keeps it
        // on the nominal value
        assert_eq!(encode("8.1M"), Ok(BandTriple::new(7, 1, 5)));
        assert_eq!(encode("8.1k"), Ok(BandTriple::new(7, 1, 2)));
    }

    #[test]
    fn test_encode_is_case_insensitive_about_suffixes() {
        assert_eq!(encode("4.7K"), encode("4.7k"));
        assert_eq!(encode("10m"), encode("10M"));
    }

    #[test]
    fn test_encode_rejects_invalid_input() {
        assert_eq!(
            encode(""),
            Err(EncodeError::InvalidInput(ValidationError::Empty))
        );
        assert_eq!(
            encode("-5"),
            Err(EncodeError::InvalidInput(ValidationError::Negative))
        );
        assert_eq!(
            encode("123"),
            Err(EncodeError::InvalidInput(
                ValidationError::TooManySignificantDigits
            ))
        );
    }

    #[test]
    fn test_encode_rejects_unparsable_remainder() {
        // Both pass the grammar but leave no numeric literal behind
        assert_eq!(
            encode("k1"),
            Err(EncodeError::UnparsableNumber("k1".to_string()))
        );
        assert_eq!(
            encode("1x2"),
            Err(EncodeError::UnparsableNumber("1x2".to_string()))
        );
    }

    #[test]
    fn test_encode_rejects_oversized_multiplier() {
        // 1e9 ohms needs a x10^8 band, one past Violet
        assert_eq!(encode("1e9"), Err(EncodeError::MultiplierOutOfRange(8)));
    }

    #[test]
    fn test_encode_rejects_vanishing_magnitude() {
        // 1e-9 k rounds to zero ohms, which no band triple can carry
        assert_eq!(encode("1e-9k"), Err(EncodeError::MultiplierOutOfRange(-1)));
    }

    #[test]
    fn test_encode_accepts_scientific_notation() {
        assert_eq!(encode("1e5"), Ok(BandTriple::new(0, 0, 4)));
    }

    #[test]
    fn test_doubled_suffix_strips_both_letters() {
        // Sequential suffix stripping: "1mk" drops the k, then the m, and
        // ends up mega-scaled
        assert_eq!(encode("1mk"), Ok(BandTriple::new(0, 0, 5)));
    }

    #[test]
    fn test_count_trailing_zeros() {
        assert_eq!(count_trailing_zeros(1000), 3);
        assert_eq!(count_trailing_zeros(0), 0);
        assert_eq!(count_trailing_zeros(10), 1);
        assert_eq!(count_trailing_zeros(7), 0);
        assert_eq!(count_trailing_zeros(4700), 2);
    }
}
