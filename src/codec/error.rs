use std::fmt;

/// Reason a raw value string fails the resistor-value grammar.
///
/// Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Empty,
    LeadingZero,
    Negative,
    TooShort,
    FloatSuffix,
    TrailingPoint,
    TooManySignificantDigits,
    MultipleDecimalPoints,
    NoSignificantDigits,
    MissingMagnitudeSuffix,
    ZeroAfterPoint,
    MalformedDecimal,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "value is empty"),
            ValidationError::LeadingZero => write!(f, "value starts with a zero"),
            ValidationError::Negative => write!(f, "value is negative"),
            ValidationError::TooShort => {
                write!(f, "value is shorter than two characters")
            }
            ValidationError::FloatSuffix => {
                write!(f, "value ends with a float literal suffix")
            }
            ValidationError::TrailingPoint => {
                write!(f, "value ends with a decimal point")
            }
            ValidationError::TooManySignificantDigits => {
                write!(f, "value has more than two significant digits")
            }
            ValidationError::MultipleDecimalPoints => {
                write!(f, "value has more than one decimal point")
            }
            ValidationError::NoSignificantDigits => {
                write!(f, "value has no non-zero digit")
            }
            ValidationError::MissingMagnitudeSuffix => {
                write!(f, "decimal value is missing a magnitude suffix")
            }
            ValidationError::ZeroAfterPoint => {
                write!(f, "digit after the decimal point is zero")
            }
            ValidationError::MalformedDecimal => {
                write!(f, "decimal value is not of the form d.dX")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why a raw value string cannot be turned into a band triple. All failure
/// paths of the encoder funnel here; callers only need "cannot encode".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    InvalidInput(ValidationError),
    UnparsableNumber(String),
    TooManySignificantDigits(String),
    MultiplierOutOfRange(i64),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            EncodeError::UnparsableNumber(raw) => {
                write!(f, "cannot parse '{}' as a number", raw)
            }
            EncodeError::TooManySignificantDigits(raw) => {
                write!(f, "'{}' has more than two significant digits", raw)
            }
            EncodeError::MultiplierOutOfRange(band) => {
                write!(f, "multiplier band {} is outside 0..=7", band)
            }
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::InvalidInput(reason) => Some(reason),
            _ => None,
        }
    }
}
