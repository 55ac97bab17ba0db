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

//! A [MeanRing] is a fixed-capacity ring buffer with a rolling average,
//! intended for display-side smoothing of generator output - for example,
//! steadying an on-screen label against a stream that jumps every few
//! coordinates. It is a plain value owned by the caller: the generators
//! themselves never hold one, keeping the core memory-free.

/// Window length used for label smoothing in the demo consumers.
pub const DEFAULT_LABEL_WINDOW: usize = 15;

/// A fixed-capacity ring buffer over `f64` samples with a rolling mean.
///
/// Pushing beyond capacity overwrites the oldest sample. The mean is taken
/// over however many samples are currently held, so the window warms up
/// smoothly from the first push.
#[derive(Clone, Debug)]
pub struct MeanRing {
    samples: Vec<f64>,
    capacity: usize,
    cursor: usize,
}

impl Default for MeanRing {
    fn default() -> Self {
        MeanRing::new(DEFAULT_LABEL_WINDOW)
    }
}

impl MeanRing {
    /// Create a ring holding at most `capacity` samples.
    /// A capacity of 0 is clamped to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    /// Append a sample, evicting the oldest once the ring is full.
    pub fn push(&mut self, value: f64) {
        if self.samples.len() < self.capacity {
            self.samples.push(value);
        }
        else {
            self.samples[self.cursor] = value;
        }
        self.cursor = (self.cursor + 1) % self.capacity;
    }

    /// The rolling mean of the held samples. An empty ring reports 0.0.
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Number of samples currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples the ring will hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all held samples, keeping the capacity.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.cursor = 0;
    }
}
