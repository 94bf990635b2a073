use serde::{Deserialize, Serialize};

use crate::codec::color::Color;
use crate::codec::decoder::decode;

/// Multiplier encoded by a "k" suffix.
pub const VALUE_OF_K: u32 = 1_000;
/// Multiplier encoded by an "M" suffix.
pub const VALUE_OF_M: u32 = 1_000_000;

/// The first band's color alphabet starts at Brown: color index 0 stands for
/// digit 1, not digit 0. Leading zeros are unrepresentable, so Black never
/// appears in the first position.
pub const FIRST_BAND_DIGIT_OFFSET: u8 = 1;

/// Highest valid multiplier band. The multiplier alphabet stops at Violet;
/// Grey and White carry no power-of-ten meaning.
pub const MAX_MULTIPLIER_BAND: u8 = 7;

/// One resistor's three-band color code.
///
/// `first_band` and `second_band` are color indices in 0..=9; the first band
/// carries the +1 digit offset (index 0 means digit 1). `multiplier_band` is
/// the power-of-ten exponent, 0..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BandTriple {
    pub first_band: u8,
    pub second_band: u8,
    pub multiplier_band: u8,
}

impl BandTriple {
    pub fn new(first_band: u8, second_band: u8, multiplier_band: u8) -> Self {
        Self {
            first_band,
            second_band,
            multiplier_band,
        }
    }

    /// Canonical value string for this triple, e.g. "4.7k".
    pub fn value_string(&self) -> String {
        decode(self.first_band, self.second_band, self.multiplier_band)
    }

    /// Colors for the three bands, or None when a band index falls outside
    /// its position's color alphabet.
    pub fn colors(&self) -> Option<(Color, Color, Color)> {
        let first = Color::from_index(self.first_band + FIRST_BAND_DIGIT_OFFSET)?;
        let second = Color::from_index(self.second_band)?;
        if self.multiplier_band > MAX_MULTIPLIER_BAND {
            return None;
        }
        let multiplier = Color::from_index(self.multiplier_band)?;
        Some((first, second, multiplier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_for_valid_triple() {
        // 4.7k: digit 4 = Yellow, digit 7 = Violet, x100 = Red
        let triple = BandTriple::new(3, 7, 2);
        assert_eq!(
            triple.colors(),
            Some((Color::Yellow, Color::Violet, Color::Red))
        );
    }

    #[test]
    fn test_colors_rejects_out_of_alphabet_bands() {
        // First band index 9 would need a tenth digit color past White
        assert_eq!(BandTriple::new(9, 0, 0).colors().map(|c| c.0), None);
        // Multiplier 8 would be Grey, which the third band excludes
        assert_eq!(BandTriple::new(0, 0, 8).colors(), None);
    }

    #[test]
    fn test_value_string_matches_decode() {
        let triple = BandTriple::new(0, 0, 0);
        assert_eq!(triple.value_string(), "10");
    }
}
