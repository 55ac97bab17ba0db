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

pub(crate) fn run(_global: &GlobalOptions, params: &args::InfoParams) -> Result<(), Error> {
    let capsule = match read_capsule_file(&params.capsule) {
        Ok(capsule) => capsule,
        Err(e) => bail!("Error reading capsule {}: {}", params.capsule.display(), e),
    };

    println!("Capsule:     {}", capsule.name);
    println!("Author:      {}", capsule.author);
    println!("URL:         {}", capsule.url);
    println!("Created:     {}", capsule.created);
    if let Some(description) = &capsule.description {
        println!("Description: {}", description);
    }
    if !capsule.tags.is_empty() {
        println!("Tags:        {}", capsule.tags.join(", "));
    }
    if !capsule.platforms.is_empty() {
        println!("Platforms:   {}", capsule.platforms.join(", "));
    }

    let settings = &capsule.settings;
    println!("Generator:   {}", settings.kind()?);
    println!("Seed:        {}", settings.seed);
    println!("Inner dur:   {}", settings.inner_mod_dur);
    println!("Outer dur:   {}", settings.outer_mod_dur);

    match settings.clip_time {
        Some(clip) => {
            println!("Clip window: [{}, {}] ({} coordinates)", clip.start, clip.end, clip.span());
            if capsule.preview_trace.is_empty() {
                println!("Trace:       none captured");
            }
            else {
                println!("Trace:       {} samples", capsule.preview_trace.len());
            }
        }
        None => println!("Clip window: none (parameter preset only)"),
    }

    Ok(())
}
