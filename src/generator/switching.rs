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

//! The Quantised Switching (QS) generator.
//!
//! QS builds two sine waves, quantises each into a staircase whose level
//! count itself toggles on a modulo cycle, and switches between the two
//! staircases on a third modulo cycle. The selected stepped value is scaled
//! to an integer and hashed, so the output looks unrelated to the underlying
//! sine phase while still changing only at step boundaries or stream
//! switches. Like SM, the whole pipeline is recomputed from the coordinate
//! on every call; the apparent state machine is never stored.

use crate::{
    hash::sin_hash,
    math::in_low_half,
    ModulationError,
};

/// Default frequency multiplier for the second stream.
pub const DEFAULT_STREAM2_FREQ_MULT: f64 = 3.7;

// Ratios applied to the base wave period when a duration is left unset.
const SWITCH_DUR_RATIO: f64 = 0.76;
const STREAM1_QUANT_DUR_RATIO: f64 = 1.2;
const STREAM2_QUANT_DUR_RATIO: f64 = 0.9;

// The second stream's quantisation levels are scaled copies of the base
// levels, giving it a different staircase character than stream 1.
const STREAM2_LEVEL_RATIO_LOW: f64 = 1.24;
const STREAM2_LEVEL_RATIO_HIGH: f64 = 0.66;

// The selected stepped value is scaled by this before the final hash.
const HASH_INPUT_SCALE: f64 = 100_000.0;

/// Parameters for the Quantised Switching generator.
///
/// `base_wave_freq` must be positive; it drives both sine streams and the
/// derivation of any unset duration. The three durations and the frequency
/// multiplier are optional - `None` (or a provided value below the valid
/// range) selects the documented default derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QsParams {
    pub base_wave_freq: f64,
    pub stream2_freq_mult: Option<f64>,
    /// Minimum and maximum quantisation level for the two streams.
    pub quant_levels: [i64; 2],
    /// Per-stream coordinate offsets, decorrelating the two streams.
    pub streams_offset: [i64; 2],
    pub stream_switch_dur: Option<i64>,
    pub stream1_quant_dur: Option<i64>,
    pub stream2_quant_dur: Option<i64>,
}

impl Default for QsParams {
    fn default() -> Self {
        Self {
            base_wave_freq: 0.012,
            stream2_freq_mult: None,
            quant_levels: [12, 22],
            streams_offset: [0, 76],
            stream_switch_dur: None,
            stream1_quant_dur: None,
            stream2_quant_dur: None,
        }
    }
}

impl QsParams {
    /// Check the domain constraint on `base_wave_freq` without evaluating.
    pub fn validate(&self) -> Result<(), ModulationError> {
        if !self.base_wave_freq.is_finite() || self.base_wave_freq <= 0.0 {
            return Err(ModulationError::Parameter {
                field: "base_wave_freq",
                value: self.base_wave_freq,
            });
        }
        Ok(())
    }

    /// Evaluate at `coordinate`. See [qs].
    #[inline]
    pub fn eval(&self, coordinate: i64) -> Result<f64, ModulationError> {
        qs(
            coordinate,
            self.base_wave_freq,
            self.stream2_freq_mult,
            self.quant_levels,
            self.streams_offset,
            self.stream_switch_dur,
            self.stream1_quant_dur,
            self.stream2_quant_dur,
        )
    }

    /// True if the value at `coordinate` differs from the value one
    /// coordinate earlier, i.e. the selector toggled or the selected
    /// stream's quantised step changed between them.
    pub fn changed_at(&self, coordinate: i64) -> Result<bool, ModulationError> {
        Ok(self.eval(coordinate)? != self.eval(coordinate - 1)?)
    }
}

/// Resolve an optional duration: a provided value of at least 1 wins,
/// anything else derives from the base wave period, and the result is
/// clamped to at least 1 coordinate.
#[inline]
fn resolve_duration(provided: Option<i64>, period: f64, ratio: f64) -> i64 {
    let duration = match provided {
        Some(d) if d >= 1 => d,
        _ => (period * ratio).floor() as i64,
    };
    duration.max(1)
}

/// Generate a flickering, quantised value by switching between two stepped
/// sine streams.
///
/// Pure function of the arguments; output is always in [0, 1). Returns a
/// domain error carrying the offending field and value if `base_wave_freq`
/// is zero, negative, or non-finite - the default-duration derivation
/// divides by it, and no sane fallback frequency exists.
///
/// Quantisation levels below 1 clamp to 1 (silent, part of the algorithm).
/// The final stepped value is scaled by 100000 and truncated toward zero
/// before hashing; the truncation direction is part of the library's
/// reproducibility contract.
pub fn qs(
    coordinate: i64,
    base_wave_freq: f64,
    stream2_freq_mult: Option<f64>,
    quant_levels: [i64; 2],
    streams_offset: [i64; 2],
    stream_switch_dur: Option<i64>,
    stream1_quant_dur: Option<i64>,
    stream2_quant_dur: Option<i64>,
) -> Result<f64, ModulationError> {
    if !base_wave_freq.is_finite() || base_wave_freq <= 0.0 {
        log::error!("qs(): rejecting base_wave_freq of {}", base_wave_freq);
        return Err(ModulationError::Parameter {
            field: "base_wave_freq",
            value: base_wave_freq,
        });
    }

    let period = 1.0 / base_wave_freq;
    let switch_dur = resolve_duration(stream_switch_dur, period, SWITCH_DUR_RATIO);
    let quant1_dur = resolve_duration(stream1_quant_dur, period, STREAM1_QUANT_DUR_RATIO);
    let quant2_dur = resolve_duration(stream2_quant_dur, period, STREAM2_QUANT_DUR_RATIO);

    let freq_mult = match stream2_freq_mult {
        Some(m) if m >= 0.0 => m,
        _ => DEFAULT_STREAM2_FREQ_MULT,
    };

    // Each stream's quantisation level toggles halfway through its own
    // duration cycle. Stream 2 scales the base levels rather than using
    // them directly.
    let level1 = if in_low_half(streams_offset[0] + coordinate, quant1_dur) {
        quant_levels[0]
    }
    else {
        quant_levels[1]
    };
    let level1 = level1.max(1);

    let level2 = if in_low_half(streams_offset[1] + coordinate, quant2_dur) {
        (quant_levels[0] as f64 * STREAM2_LEVEL_RATIO_LOW).floor() as i64
    }
    else {
        (quant_levels[1] as f64 * STREAM2_LEVEL_RATIO_HIGH).floor() as i64
    };
    let level2 = level2.max(1);

    let stream1 =
        (((streams_offset[0] + coordinate) as f64 * base_wave_freq).sin() * level1 as f64).floor() / level1 as f64;
    let stream2 = (((streams_offset[1] + coordinate) as f64 * base_wave_freq * freq_mult).sin() * level2 as f64)
        .floor()
        / level2 as f64;

    let selected = if in_low_half(coordinate, switch_dur) {
        stream1
    }
    else {
        stream2
    };

    let output = sin_hash((selected * HASH_INPUT_SCALE) as i64);
    Ok(output)
}
