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

//! The two generation algorithms and their shared dispatch types.
//!
//! A [Generator] bundles a parameter set with its algorithm and evaluates any
//! coordinate through enum dispatch. Both algorithms are pure functions of
//! `(coordinate, parameters)` - evaluation never touches shared state, so a
//! [Generator] may be shared freely across threads.

pub mod stacked;
pub mod switching;

pub use stacked::{sm, SmParams};
pub use switching::{qs, QsParams};

use std::fmt::{self, Display, Formatter};

use crate::ModulationError;

/// Identifies a generation algorithm. The numeric codes are the capsule
/// format's `settings.type` values and must not be renumbered.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, strum::EnumIter)]
pub enum GeneratorKind {
    /// Stacked Modulo: reseeded hold duration + stable block identifier.
    StackedModulo,
    /// Quantised Switching: two stepped sine streams behind a selector.
    QuantisedSwitching,
}

impl GeneratorKind {
    /// The capsule `settings.type` code for this kind.
    pub fn type_code(&self) -> i64 {
        match self {
            GeneratorKind::StackedModulo => 0,
            GeneratorKind::QuantisedSwitching => 1,
        }
    }
}

impl TryFrom<i64> for GeneratorKind {
    type Error = ModulationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GeneratorKind::StackedModulo),
            1 => Ok(GeneratorKind::QuantisedSwitching),
            _ => Err(ModulationError::UnknownGeneratorType { value }),
        }
    }
}

impl Display for GeneratorKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            GeneratorKind::StackedModulo => write!(f, "SM"),
            GeneratorKind::QuantisedSwitching => write!(f, "QS"),
        }
    }
}

/// A parameter bundle paired with its algorithm.
///
/// Evaluation dispatches to [sm] or [qs]. Stacked Modulo evaluation cannot
/// fail; the `Result` exists because Quantised Switching rejects a
/// non-positive base frequency as a domain error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Generator {
    StackedModulo(SmParams),
    QuantisedSwitching(QsParams),
}

impl Generator {
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::StackedModulo(_) => GeneratorKind::StackedModulo,
            Generator::QuantisedSwitching(_) => GeneratorKind::QuantisedSwitching,
        }
    }

    /// Evaluate the generator at `coordinate`, producing a value in [0, 1).
    pub fn eval(&self, coordinate: i64) -> Result<f64, ModulationError> {
        match self {
            Generator::StackedModulo(params) => Ok(params.eval(coordinate)),
            Generator::QuantisedSwitching(params) => params.eval(coordinate),
        }
    }

    /// True if the value at `coordinate` differs from the value at the
    /// preceding coordinate. A change indicates a block boundary (SM) or a
    /// selector/quantisation-step transition (QS) was crossed.
    pub fn changed_at(&self, coordinate: i64) -> Result<bool, ModulationError> {
        Ok(self.eval(coordinate)? != self.eval(coordinate - 1)?)
    }
}
