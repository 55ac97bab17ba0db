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

pub mod args;

use crate::args::GlobalOptions;
use anyhow::{bail, Error};
use modfox::prelude::*;

pub(crate) fn run(global: &GlobalOptions, params: &args::TraceParams) -> Result<(), Error> {
    let (generator, start, end) = match &params.capsule {
        Some(path) => {
            let capsule = match read_capsule_file(path) {
                Ok(capsule) => capsule,
                Err(e) => bail!("Error reading capsule {}: {}", path.display(), e),
            };
            let kind = capsule.settings.kind()?;
            global.loud(|| println!("Replaying capsule '{}' [{}]", capsule.name, kind));

            // A capsule with a captured window replays that window unless the
            // caller asked for a specific one.
            let (start, end) = match capsule.settings.clip_time {
                Some(clip) => (clip.start, clip.end),
                None => (params.start, params.end),
            };
            (capsule.to_generator()?, start, end)
        }
        None => {
            let generator = Generator::from(params.generator);
            global.loud(|| println!("Synthesizing {} stream with default parameters", generator.kind()));
            (generator, params.start, params.end)
        }
    };

    if start > end {
        bail!("Invalid window: start {} exceeds end {}", start, end);
    }

    let trace = render_trace(&generator, start, end)?;
    let mut ring = params.smooth.map(MeanRing::new);

    for (index, value) in trace.iter().enumerate() {
        let coordinate = start + index as i64;
        // Mark coordinates where the stream jumped to a new value.
        let changed = if generator.changed_at(coordinate)? { '*' } else { ' ' };

        match ring.as_mut() {
            Some(ring) => {
                ring.push(*value);
                println!("{:>10} {:.8} {} {:.8}", coordinate, value, changed, ring.mean());
            }
            None => {
                println!("{:>10} {:.8} {}", coordinate, value, changed);
            }
        }
    }

    Ok(())
}
