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

    tests/common/mod.rs

    Common support routines for tests
*/
#![allow(dead_code)]

use modfox::prelude::*;

/// The reference SM parameter set used by the regression fixtures.
pub fn reference_sm_params() -> SmParams {
    SmParams {
        min_hold: 16,
        max_hold: 24,
        reseed_interval: 9,
        seed_inner: -41,
        seed_outer: 23,
    }
}

/// The reference QS parameter set used by the regression fixtures.
pub fn reference_qs_params() -> QsParams {
    QsParams {
        base_wave_freq: 0.012,
        stream2_freq_mult: Some(3.1),
        quant_levels: [12, 22],
        streams_offset: [0, 76],
        stream_switch_dur: Some(24),
        stream1_quant_dur: Some(16),
        stream2_quant_dur: Some(20),
    }
}

/// Build a capsule with the given type code and clip window, with the
/// preview trace recorded from its own settings.
pub fn build_recorded_capsule(type_code: i64, clip: ClipTime) -> Capsule {
    let mut capsule = Capsule {
        name: format!("test capsule type {}", type_code),
        author: "test harness".to_string(),
        url: "https://example.com/capsules/test".to_string(),
        created: "2025-06-01T12:00:00Z".to_string(),
        description: Some("generated by the integration test harness".to_string()),
        tags: vec!["test".to_string()],
        platforms: vec!["any".to_string()],
        preview_trace: Vec::new(),
        settings: CapsuleSettings {
            type_code,
            seed: 23,
            inner_mod_dur: 9,
            outer_mod_dur: 24,
            clip_time: Some(clip),
        },
    };
    capsule.preview_trace = capsule.regenerate_trace().expect("regeneration failed");
    capsule
}
