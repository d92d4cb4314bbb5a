//! Luminance to character lookup
//!
//! A ramp is an ordered run of characters, darkest first. Every possible 8-bit
//! luminance is resolved to a ramp position once, so rendering is a table lookup
//! per sample.

use crate::config::DEFAULT_RAMP;

/// Ramp position for a luminance value
///
/// `min(luminance / interval, len - 1)` with `interval = 255 / (len - 1)` in
/// integer arithmetic. The truncation bias is intentional and kept for output
/// compatibility. Single-character ramps always resolve to 0, and ramps longer
/// than 256 characters use an interval of 1.
pub fn ramp_index(luminance: u8, ramp_len: usize) -> usize {
    if ramp_len <= 1 {
        return 0;
    }

    let interval = (255 / (ramp_len - 1)).max(1);
    (luminance as usize / interval).min(ramp_len - 1)
}

/// Precomputed character for each of the 256 luminance levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceLut {
    table: [char; 256],
}

impl LuminanceLut {
    /// Build the table for `ramp`, substituting [`DEFAULT_RAMP`] when it is empty
    pub fn new(ramp: &[char]) -> Self {
        let default: Vec<char>;
        let ramp = if ramp.is_empty() {
            default = DEFAULT_RAMP.chars().collect();
            &default[..]
        } else {
            ramp
        };

        let table = std::array::from_fn(|lum| ramp[ramp_index(lum as u8, ramp.len())]);
        Self { table }
    }

    #[inline]
    pub fn map(&self, luminance: u8) -> char {
        self.table[luminance as usize]
    }
}

impl Default for LuminanceLut {
    fn default() -> Self {
        Self::new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_two_char_ramp_boundary() {
        let lut = LuminanceLut::new(&chars("AB"));
        for lum in 0..=254u8 {
            assert_eq!(lut.map(lum), 'A', "luminance {}", lum);
        }
        assert_eq!(lut.map(255), 'B');
    }

    #[test]
    fn test_single_char_ramp() {
        let lut = LuminanceLut::new(&chars("#"));
        assert_eq!(lut.map(0), '#');
        assert_eq!(lut.map(128), '#');
        assert_eq!(lut.map(255), '#');
    }

    #[test]
    fn test_default_ramp_ends() {
        let lut = LuminanceLut::default();
        assert_eq!(lut.map(0), '@');
        assert_eq!(lut.map(255), ' ');
    }

    #[test]
    fn test_default_ramp_interval() {
        // interval = 255 / 9 = 28
        assert_eq!(ramp_index(27, 10), 0);
        assert_eq!(ramp_index(28, 10), 1);
        assert_eq!(ramp_index(251, 10), 8);
        assert_eq!(ramp_index(252, 10), 9);
    }

    #[test]
    fn test_index_is_clamped_to_last() {
        // interval = 255 / 3 = 85, 255 / 85 = 3
        assert_eq!(ramp_index(255, 4), 3);
        // interval = 255 / 4 = 63, 255 / 63 = 4
        assert_eq!(ramp_index(255, 5), 4);
        // interval = 255 / 6 = 42, 255 / 42 = 6
        assert_eq!(ramp_index(255, 7), 6);
        // interval = 255 / 100 = 2, 255 / 2 = 127 -> clamped to 100
        assert_eq!(ramp_index(255, 101), 100);
        assert_eq!(ramp_index(254, 101), 100);
    }

    #[test]
    fn test_long_ramp_does_not_divide_by_zero() {
        let ramp: Vec<char> = (0..300u32).map(|i| char::from_u32(0x4E00 + i).unwrap()).collect();
        let lut = LuminanceLut::new(&ramp);
        assert_eq!(lut.map(0), ramp[0]);
        assert_eq!(lut.map(255), ramp[255]);
    }

    #[test]
    fn test_empty_ramp_matches_default() {
        assert_eq!(LuminanceLut::new(&[]), LuminanceLut::new(&chars(DEFAULT_RAMP)));
    }

    #[test]
    fn test_unicode_ramp() {
        let lut = LuminanceLut::new(&chars("█▓▒░ "));
        assert_eq!(lut.map(0), '█');
        assert_eq!(lut.map(255), ' ');
    }
}
