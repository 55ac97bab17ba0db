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

    src/capsule/codec.rs

    Read and write capsules as UTF-8 JSON. Capsule I/O happens strictly at
    load/save boundaries, never inside the per-coordinate hot path.
*/

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use crate::{capsule::Capsule, ModulationError};

/// Advertised file extensions for capsule files. Detection is by content,
/// not extension; this is a convenience for file dialogs.
pub fn extensions() -> Vec<&'static str> {
    vec!["cap.json", "json"]
}

/// Read and validate a capsule from a reader.
pub fn load_capsule<R: Read>(mut reader: R) -> Result<Capsule, ModulationError> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;

    let capsule: Capsule = serde_json::from_str(&json)?;
    capsule.validate()?;

    log::debug!(
        "load_capsule(): loaded '{}' ({} settings, {} trace samples)",
        capsule.name,
        capsule.settings.kind().map_or_else(|_| "?".to_string(), |k| k.to_string()),
        capsule.preview_trace.len()
    );
    Ok(capsule)
}

/// Validate and write a capsule to a writer as pretty-printed JSON.
pub fn save_capsule<W: Write>(mut writer: W, capsule: &Capsule) -> Result<(), ModulationError> {
    capsule.validate()?;

    let json = serde_json::to_string_pretty(capsule)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Open, parse, and release a capsule file.
pub fn read_capsule_file<P: AsRef<Path>>(path: P) -> Result<Capsule, ModulationError> {
    let file = File::open(path.as_ref())?;
    load_capsule(file)
}

/// Create or truncate a capsule file and write the capsule to it.
pub fn write_capsule_file<P: AsRef<Path>>(path: P, capsule: &Capsule) -> Result<(), ModulationError> {
    let file = File::create(path.as_ref())?;
    save_capsule(file, capsule)
}
