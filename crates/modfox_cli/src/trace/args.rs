/*
    mftool
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
use crate::args::{capsule_file_parser, end_parser, generator_parser, start_parser, GeneratorArg};
use bpaf::{construct, long, Parser};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub(crate) struct TraceParams {
    /// Replay this capsule instead of synthesizing a generator.
    pub(crate) capsule: Option<PathBuf>,
    pub(crate) generator: GeneratorArg,
    pub(crate) start: i64,
    pub(crate) end: i64,
    pub(crate) smooth: Option<usize>,
}

fn smooth_parser() -> impl Parser<Option<usize>> {
    long("smooth")
        .argument::<usize>("WINDOW")
        .help("Append a rolling mean column over the given window length")
        .optional()
}

pub(crate) fn trace_parser() -> impl Parser<TraceParams> {
    let capsule = capsule_file_parser().optional();
    let generator = generator_parser();
    let start = start_parser();
    let end = end_parser();
    let smooth = smooth_parser();

    construct!(TraceParams {
        capsule,
        generator,
        start,
        end,
        smooth,
    })
}
