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

    src/trace.rs

    Render a generator over a coordinate window, and compare traces under a
    floating tolerance. Used by capsule verification and the CLI.
*/

use crate::{generator::Generator, ModulationError};

/// Evaluate `generator` over the inclusive window `[start, end]`.
/// Fails with a clip-time error if `start > end`.
pub fn render_trace(generator: &Generator, start: i64, end: i64) -> Result<Vec<f64>, ModulationError> {
    if start > end {
        return Err(ModulationError::ClipTime { start, end });
    }
    (start..=end).map(|coordinate| generator.eval(coordinate)).collect()
}

/// Return the index of the first pair of samples differing by more than
/// `tolerance`, or `None` if the traces agree. Only the overlapping prefix
/// is compared; length validation is the caller's concern.
pub fn first_divergence(a: &[f64], b: &[f64], tolerance: f64) -> Option<usize> {
    a.iter()
        .zip(b.iter())
        .position(|(x, y)| (x - y).abs() > tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SmParams;

    #[test]
    fn test_render_window_is_inclusive() {
        let generator = Generator::StackedModulo(SmParams::default());
        let trace = render_trace(&generator, -3, 3).unwrap();
        assert_eq!(trace.len(), 7);
        assert_eq!(trace[0], generator.eval(-3).unwrap());
        assert_eq!(trace[6], generator.eval(3).unwrap());
    }

    #[test]
    fn test_single_coordinate_window() {
        let generator = Generator::StackedModulo(SmParams::default());
        let trace = render_trace(&generator, 100, 100).unwrap();
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let generator = Generator::StackedModulo(SmParams::default());
        assert!(matches!(
            render_trace(&generator, 10, 9),
            Err(ModulationError::ClipTime { start: 10, end: 9 })
        ));
    }

    #[test]
    fn test_first_divergence() {
        let a = [0.1, 0.2, 0.3];
        let mut b = a;
        assert_eq!(first_divergence(&a, &b, 1e-6), None);

        b[1] += 1e-3;
        assert_eq!(first_divergence(&a, &b, 1e-6), Some(1));
        // Differences within tolerance are not divergence
        assert_eq!(first_divergence(&a, &b, 1e-2), None);
    }
}
