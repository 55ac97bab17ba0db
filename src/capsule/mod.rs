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

//! Capsules are persisted, named parameter bundles that make a generator
//! stream shareable and replayable. A capsule never participates in
//! generation - the codec reconstructs generator parameters at load/save
//! boundaries only.
//!
//! A capsule may carry a `preview_trace`, a cached recording of the
//! generator's output over the capsule's `clip_time` window. The recording
//! is not authoritative: regenerating from `settings` must reproduce it
//! within [crate::DEFAULT_TRACE_TOLERANCE], and a mismatch is surfaced as a
//! reproducibility failure rather than silently accepted.

mod codec;

pub use codec::{extensions, load_capsule, read_capsule_file, save_capsule, write_capsule_file};

use serde::{Deserialize, Serialize};

use crate::{
    generator::{Generator, GeneratorKind, QsParams, SmParams},
    trace::{first_divergence, render_trace},
    ModulationError,
};

/// Coordinate offset applied to the second QS stream when reconstructing
/// parameters from capsule settings.
const QS_STREAM2_OFFSET: i64 = 76;
/// Quantisation levels used when reconstructing QS parameters from capsule
/// settings, which do not carry levels of their own.
const QS_CAPSULE_LEVELS: [i64; 2] = [12, 22];

/// An inclusive coordinate window, serialized as a `[start, end]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct ClipTime {
    pub start: i64,
    pub end:   i64,
}

impl From<[i64; 2]> for ClipTime {
    fn from(pair: [i64; 2]) -> Self {
        Self {
            start: pair[0],
            end:   pair[1],
        }
    }
}

impl From<ClipTime> for [i64; 2] {
    fn from(clip: ClipTime) -> Self {
        [clip.start, clip.end]
    }
}

impl ClipTime {
    /// Number of coordinates in the window. Only meaningful once the window
    /// has been validated as non-inverted.
    pub fn span(&self) -> usize {
        (self.end - self.start + 1) as usize
    }
}

/// The generator-facing portion of a capsule: everything needed to
/// reconstruct SM or QS parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapsuleSettings {
    /// Generator type code: 0 for SM, 1 for QS.
    #[serde(rename = "type")]
    pub type_code: i64,
    pub seed: i64,
    pub inner_mod_dur: i64,
    pub outer_mod_dur: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_time: Option<ClipTime>,
}

impl CapsuleSettings {
    /// Resolve the type code to a [GeneratorKind].
    pub fn kind(&self) -> Result<GeneratorKind, ModulationError> {
        GeneratorKind::try_from(self.type_code)
    }

    /// Reconstruct a [Generator] from these settings.
    ///
    /// The capsule schema is deliberately small, so the durations map onto
    /// the wider parameter surface by convention: `inner_mod_dur` drives the
    /// inner cycle (SM reseed interval, QS stream switch), `outer_mod_dur`
    /// drives the outer one (SM maximum hold, QS base wave period), and the
    /// single seed decorrelates both seed slots. Both durations must be at
    /// least 1.
    pub fn to_generator(&self) -> Result<Generator, ModulationError> {
        if self.inner_mod_dur < 1 {
            return Err(ModulationError::Parameter {
                field: "inner_mod_dur",
                value: self.inner_mod_dur as f64,
            });
        }
        if self.outer_mod_dur < 1 {
            return Err(ModulationError::Parameter {
                field: "outer_mod_dur",
                value: self.outer_mod_dur as f64,
            });
        }

        match self.kind()? {
            GeneratorKind::StackedModulo => Ok(Generator::StackedModulo(SmParams {
                min_hold: (self.outer_mod_dur * 2 / 3).max(1),
                max_hold: self.outer_mod_dur,
                reseed_interval: self.inner_mod_dur,
                seed_inner: self.seed,
                seed_outer: self.seed,
            })),
            GeneratorKind::QuantisedSwitching => Ok(Generator::QuantisedSwitching(QsParams {
                base_wave_freq: 1.0 / self.outer_mod_dur as f64,
                stream2_freq_mult: None,
                quant_levels: QS_CAPSULE_LEVELS,
                streams_offset: [self.seed, self.seed + QS_STREAM2_OFFSET],
                stream_switch_dur: Some(self.inner_mod_dur),
                stream1_quant_dur: None,
                stream2_quant_dur: None,
            })),
        }
    }
}

/// A persisted, named bundle of generator parameters, optionally carrying a
/// recorded output window for reproducibility checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Capsule {
    pub name: String,
    pub author: String,
    #[serde(rename = "URL")]
    pub url: String,
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preview_trace: Vec<f64>,
    pub settings: CapsuleSettings,
}

impl Capsule {
    /// Validate the capsule's structure: a known generator type, settings
    /// that map onto valid parameters, a well-ordered clip window, and a
    /// preview trace length matching that window.
    pub fn validate(&self) -> Result<(), ModulationError> {
        self.settings.to_generator()?;

        if let Some(clip) = self.settings.clip_time {
            if clip.start > clip.end {
                return Err(ModulationError::ClipTime {
                    start: clip.start,
                    end:   clip.end,
                });
            }
        }

        if !self.preview_trace.is_empty() {
            match self.settings.clip_time {
                Some(clip) => {
                    if self.preview_trace.len() != clip.span() {
                        return Err(ModulationError::TraceLength {
                            expected: clip.span(),
                            found:    self.preview_trace.len(),
                        });
                    }
                }
                None => {
                    // A recording with no window can never be verified.
                    return Err(ModulationError::TraceLength {
                        expected: 0,
                        found:    self.preview_trace.len(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Reconstruct this capsule's generator. See
    /// [CapsuleSettings::to_generator].
    pub fn to_generator(&self) -> Result<Generator, ModulationError> {
        self.settings.to_generator()
    }

    /// Regenerate the output trace over the capsule's clip window. A capsule
    /// without a window is a parameter preset only and regenerates an empty
    /// trace.
    pub fn regenerate_trace(&self) -> Result<Vec<f64>, ModulationError> {
        match self.settings.clip_time {
            Some(clip) => render_trace(&self.settings.to_generator()?, clip.start, clip.end),
            None => Ok(Vec::new()),
        }
    }

    /// Check that the stored `preview_trace` is reproducible from `settings`
    /// within `tolerance`. A capsule without a recording passes trivially.
    /// A divergence is reported with the offending coordinate and both
    /// values; it is never corrected in place.
    pub fn verify_trace(&self, tolerance: f64) -> Result<(), ModulationError> {
        self.validate()?;

        if self.preview_trace.is_empty() {
            return Ok(());
        }

        // validate() guarantees clip_time is present and the lengths match.
        let clip = self.settings.clip_time.ok_or(ModulationError::TraceLength {
            expected: 0,
            found:    self.preview_trace.len(),
        })?;
        let regenerated = self.regenerate_trace()?;

        if let Some(index) = first_divergence(&self.preview_trace, &regenerated, tolerance) {
            let coordinate = clip.start + index as i64;
            log::error!(
                "verify_trace(): capsule '{}' diverges at coordinate {}",
                self.name,
                coordinate
            );
            return Err(ModulationError::TraceDrift {
                coordinate,
                stored: self.preview_trace[index],
                regenerated: regenerated[index],
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset_capsule(type_code: i64) -> Capsule {
        Capsule {
            name: "test preset".to_string(),
            author: "tester".to_string(),
            url: "https://example.com".to_string(),
            created: "2025-06-01".to_string(),
            description: None,
            tags: Vec::new(),
            platforms: Vec::new(),
            preview_trace: Vec::new(),
            settings: CapsuleSettings {
                type_code,
                seed: 23,
                inner_mod_dur: 9,
                outer_mod_dur: 24,
                clip_time: None,
            },
        }
    }

    #[test]
    fn test_valid_presets_pass() {
        preset_capsule(0).validate().unwrap();
        preset_capsule(1).validate().unwrap();
    }

    #[test]
    fn test_unknown_type_rejected() {
        let capsule = preset_capsule(2);
        assert!(matches!(
            capsule.validate(),
            Err(ModulationError::UnknownGeneratorType { value: 2 })
        ));
    }

    #[test]
    fn test_inverted_clip_time_rejected() {
        let mut capsule = preset_capsule(0);
        capsule.settings.clip_time = Some(ClipTime { start: 10, end: 5 });
        assert!(matches!(
            capsule.validate(),
            Err(ModulationError::ClipTime { start: 10, end: 5 })
        ));
    }

    #[test]
    fn test_sub_unit_durations_rejected() {
        let mut capsule = preset_capsule(0);
        capsule.settings.inner_mod_dur = 0;
        assert!(matches!(
            capsule.validate(),
            Err(ModulationError::Parameter {
                field: "inner_mod_dur",
                ..
            })
        ));
    }

    #[test]
    fn test_trace_without_window_rejected() {
        let mut capsule = preset_capsule(0);
        capsule.preview_trace = vec![0.5; 4];
        assert!(matches!(
            capsule.validate(),
            Err(ModulationError::TraceLength { expected: 0, found: 4 })
        ));
    }

    #[test]
    fn test_trace_length_mismatch_rejected() {
        let mut capsule = preset_capsule(0);
        capsule.settings.clip_time = Some(ClipTime { start: 0, end: 9 });
        capsule.preview_trace = vec![0.5; 4];
        assert!(matches!(
            capsule.validate(),
            Err(ModulationError::TraceLength { expected: 10, found: 4 })
        ));
    }

    #[test]
    fn test_recorded_capsule_verifies() {
        let mut capsule = preset_capsule(0);
        capsule.settings.clip_time = Some(ClipTime { start: 90, end: 110 });
        capsule.preview_trace = capsule.regenerate_trace().unwrap();
        capsule.verify_trace(crate::DEFAULT_TRACE_TOLERANCE).unwrap();
    }

    #[test]
    fn test_drift_reported_with_coordinate() {
        let mut capsule = preset_capsule(0);
        capsule.settings.clip_time = Some(ClipTime { start: 90, end: 110 });
        capsule.preview_trace = capsule.regenerate_trace().unwrap();
        capsule.preview_trace[3] += 0.25;
        assert!(matches!(
            capsule.verify_trace(crate::DEFAULT_TRACE_TOLERANCE),
            Err(ModulationError::TraceDrift { coordinate: 93, .. })
        ));
    }
}
