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

//! ModFox is a deterministic, stateless signal-modulation library. Given an
//! integer coordinate (an animation frame, a spatial index) and a handful of
//! tunable parameters, it produces a pseudo-random value in [0,1) that holds
//! constant over a derived span of coordinates and then jumps to a new value.
//! No state is carried between calls - the same coordinate and parameters
//! always reproduce the same output, from any thread, in any order.
//!
//! Two generation algorithms are provided:
//! - [Stacked Modulo](generator::stacked) - a periodically reseeded hold
//!   duration feeding a stable block identifier.
//! - [Quantised Switching](generator::switching) - two independently
//!   quantised, stepped sine streams with a modulo-driven selector.
//!
//! Parameter presets can be persisted and replayed through the
//! [capsule](capsule) codec, a thin JSON boundary that reconstructs generator
//! parameters and can verify a capsule's recorded trace against regeneration.

pub mod capsule;
pub mod generator;
pub mod hash;
mod math;
pub mod mean_ring;
pub mod prelude;
pub mod trace;

use thiserror::Error;

/// Absolute tolerance applied when comparing a stored capsule trace against a
/// regenerated one.
pub const DEFAULT_TRACE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error)]
pub enum ModulationError {
    #[error("An IO error occurred reading or writing a capsule: {0}")]
    Io(#[from] std::io::Error),
    #[error("A capsule could not be read or written as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {value}")]
    Parameter { field: &'static str, value: f64 },
    #[error("Unknown generator type: {value}")]
    UnknownGeneratorType { value: i64 },
    #[error("Malformed clip time: start {start} exceeds end {end}")]
    ClipTime { start: i64, end: i64 },
    #[error("Preview trace length {found} does not match clip window of {expected}")]
    TraceLength { expected: usize, found: usize },
    #[error("Preview trace diverges at coordinate {coordinate}: stored {stored}, regenerated {regenerated}")]
    TraceDrift {
        coordinate: i64,
        stored: f64,
        regenerated: f64,
    },
}

pub use crate::{
    capsule::{Capsule, CapsuleSettings, ClipTime},
    generator::{qs, sm, Generator, GeneratorKind, QsParams, SmParams},
    hash::sin_hash,
    mean_ring::MeanRing,
};
