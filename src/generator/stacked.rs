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
*/

//! The Stacked Modulo (SM) generator.
//!
//! SM layers two modulo cycles. An inner cycle, advancing once per
//! `reseed_interval` coordinates, draws a random hold duration between
//! `min_hold` and `max_hold`. An outer cycle then floors the (offset)
//! coordinate to a multiple of that duration, producing a block identifier
//! that stays constant for the whole hold span. Hashing the block identifier
//! yields the output, so the output holds while the block holds and jumps
//! when the block changes.
//!
//! Because the hold duration is redrawn on a fixed interval while block
//! boundaries move with the duration itself, a duration change can truncate
//! a hold span mid-stream. The two cycles beating against each other is what
//! keeps hold lengths from feeling metronomic; the truncation is part of the
//! algorithm, not a defect to correct.

use crate::{hash::sin_hash, math::floor_to_multiple};

/// Parameters for the Stacked Modulo generator.
///
/// `min_hold` and `max_hold` bound the drawn hold duration in coordinates.
/// `reseed_interval` is the period of the duration redraw. `seed_inner`
/// offsets the duration draw and `seed_outer` offsets the block derivation,
/// decorrelating otherwise-identical parameter sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmParams {
    pub min_hold: i64,
    pub max_hold: i64,
    pub reseed_interval: i64,
    pub seed_inner: i64,
    pub seed_outer: i64,
}

impl Default for SmParams {
    fn default() -> Self {
        Self {
            min_hold: 16,
            max_hold: 24,
            reseed_interval: 9,
            seed_inner: -41,
            seed_outer: 23,
        }
    }
}

impl SmParams {
    /// Evaluate at `coordinate`. See [sm].
    #[inline]
    pub fn eval(&self, coordinate: i64) -> f64 {
        sm(
            coordinate,
            self.min_hold,
            self.max_hold,
            self.reseed_interval,
            self.seed_inner,
            self.seed_outer,
        )
    }

    /// True if the value at `coordinate` differs from the value one
    /// coordinate earlier, i.e. a block boundary lies between them.
    pub fn changed_at(&self, coordinate: i64) -> bool {
        self.eval(coordinate) != self.eval(coordinate - 1)
    }
}

/// Generate a persistent random value that holds for a derived duration.
///
/// The value is a pure function of the arguments: no state is read or
/// written, and any coordinate may be evaluated in any order. Output is
/// always in [0, 1).
///
/// A `reseed_interval` below 1 is clamped to 1, as is a derived hold
/// duration below 1. These clamps are part of the algorithm (self-healing,
/// not errors). `min_hold` and `max_hold` are accepted as given.
///
/// All remainders are Euclidean, so negative coordinates extrapolate the
/// sequence backward consistently.
pub fn sm(
    coordinate: i64,
    min_hold: i64,
    max_hold: i64,
    reseed_interval: i64,
    seed_inner: i64,
    seed_outer: i64,
) -> f64 {
    let reseed_interval = reseed_interval.max(1);

    // The anchor is constant for `reseed_interval` consecutive coordinates,
    // so the duration draw below only moves once per interval.
    let anchor = floor_to_multiple(coordinate, reseed_interval);
    let t = sin_hash(seed_inner + anchor);

    let hold_duration = (min_hold as f64 + t * (max_hold - min_hold) as f64).floor() as i64;
    let hold_duration = hold_duration.max(1);

    // Constant across the hold span; changes only at block boundaries.
    let block = floor_to_multiple(seed_outer + coordinate, hold_duration);

    sin_hash(block)
}
