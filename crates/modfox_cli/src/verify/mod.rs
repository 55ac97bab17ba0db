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

pub(crate) fn run(global: &GlobalOptions, params: &args::VerifyParams) -> Result<(), Error> {
    let capsule = match read_capsule_file(&params.capsule) {
        Ok(capsule) => capsule,
        Err(e) => bail!("Error reading capsule {}: {}", params.capsule.display(), e),
    };

    if capsule.preview_trace.is_empty() {
        global.loud(|| println!("Capsule '{}' carries no recorded trace; nothing to verify.", capsule.name));
        return Ok(());
    }

    let tolerance = params.tolerance.unwrap_or(DEFAULT_TRACE_TOLERANCE);
    match capsule.verify_trace(tolerance) {
        Ok(()) => {
            global.loud(|| {
                println!(
                    "Capsule '{}' verified: {} samples reproduced within {:e}.",
                    capsule.name,
                    capsule.preview_trace.len(),
                    tolerance
                )
            });
            Ok(())
        }
        Err(e) => bail!("Capsule '{}' failed verification: {}", capsule.name, e),
    }
}
