/*
    ModFox
    https://github.com/dbalsom/modfox

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    src/math.rs

    Shared modulo arithmetic for the generators. Every remainder taken in the
    library is Euclidean, so negative coordinates extrapolate backward
    predictably instead of inheriting platform-defined truncation behavior.
*/

/// Floor `value` down to the nearest multiple of `modulus` (Euclidean).
/// `modulus` must be positive; callers clamp before reaching here.
#[inline]
pub(crate) fn floor_to_multiple(value: i64, modulus: i64) -> i64 {
    value - value.rem_euclid(modulus)
}

/// True if `value` falls in the low half of its `duration`-length cycle.
/// The half-period boundary uses integer division, matching the generator
/// contract: `value mod duration < duration / 2`.
#[inline]
pub(crate) fn in_low_half(value: i64, duration: i64) -> bool {
    value.rem_euclid(duration) < duration / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_to_multiple_positive() {
        assert_eq!(floor_to_multiple(100, 9), 99);
        assert_eq!(floor_to_multiple(99, 9), 99);
        assert_eq!(floor_to_multiple(0, 9), 0);
        assert_eq!(floor_to_multiple(8, 9), 0);
    }

    #[test]
    fn test_floor_to_multiple_negative() {
        // Euclidean: always floors downward, never toward zero
        assert_eq!(floor_to_multiple(-1, 9), -9);
        assert_eq!(floor_to_multiple(-9, 9), -9);
        assert_eq!(floor_to_multiple(-10, 9), -18);
    }

    #[test]
    fn test_floor_to_multiple_unit_modulus() {
        for v in -5..5 {
            assert_eq!(floor_to_multiple(v, 1), v);
        }
    }

    #[test]
    fn test_in_low_half() {
        // duration 10: low half is residues 0..4
        for v in 0..5 {
            assert!(in_low_half(v, 10));
        }
        for v in 5..10 {
            assert!(!in_low_half(v, 10));
        }
        // negative values take the Euclidean residue
        assert!(in_low_half(-10, 10)); // residue 0
        assert!(!in_low_half(-1, 10)); // residue 9
    }

    #[test]
    fn test_in_low_half_unit_duration() {
        // duration 1 has an empty low half (1 / 2 == 0)
        for v in -3..3 {
            assert!(!in_low_half(v, 1));
        }
    }
}
