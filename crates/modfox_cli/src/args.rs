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

use std::{
    fmt::{Display, Formatter},
    io::Write,
    path::PathBuf,
    str::FromStr,
};

use crate::{
    info::args::{info_parser, InfoParams},
    trace::args::{trace_parser, TraceParams},
    verify::args::{verify_parser, VerifyParams},
};
use bpaf::*;
use modfox::prelude::*;

/// Generator selection for commands that synthesize a stream without a
/// capsule file.
#[derive(Debug, Clone, Copy)]
pub enum GeneratorArg {
    Sm,
    Qs,
}

impl FromStr for GeneratorArg {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "sm" => Ok(GeneratorArg::Sm),
            "qs" => Ok(GeneratorArg::Qs),
            _ => Err("Invalid generator; expected 'sm' or 'qs'"),
        }
    }
}

impl From<GeneratorArg> for Generator {
    fn from(arg: GeneratorArg) -> Generator {
        match arg {
            GeneratorArg::Sm => Generator::StackedModulo(SmParams::default()),
            GeneratorArg::Qs => Generator::QuantisedSwitching(QsParams::default()),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Command {
    Version,
    Trace(TraceParams),
    Info(InfoParams),
    Verify(VerifyParams),
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Version => write!(f, "version"),
            Command::Trace(_) => write!(f, "trace"),
            Command::Info(_) => write!(f, "info"),
            Command::Verify(_) => write!(f, "verify"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct AppParams {
    pub global:  GlobalOptions,
    pub command: Command,
}

#[derive(Debug)]
pub struct GlobalOptions {
    pub silent: bool,
}

impl GlobalOptions {
    pub fn loud<F: FnMut()>(&self, mut f: F) {
        if !self.silent {
            f();
            std::io::stdout().flush().unwrap();
        }
    }
}

pub fn global_options_parser() -> impl Parser<GlobalOptions> {
    let silent = long("silent")
        .help("Suppress all output except required output")
        .switch(); // Switch returns a bool, true if the flag is present

    construct!(GlobalOptions { silent })
}

pub(crate) fn capsule_file_parser() -> impl Parser<PathBuf> {
    long("capsule")
        .short('c')
        .argument::<PathBuf>("CAPSULE_FILE")
        .help("Path to a capsule file (*.cap.json)")
}

pub(crate) fn generator_parser() -> impl Parser<GeneratorArg> {
    long("generator")
        .short('g')
        .argument::<GeneratorArg>("GENERATOR")
        .help("Generator to synthesize: 'sm' or 'qs'")
        .fallback(GeneratorArg::Sm)
}

pub(crate) fn start_parser() -> impl Parser<i64> {
    long("start")
        .argument::<i64>("START")
        .help("First coordinate of the window (may be negative)")
        .fallback(0)
}

pub(crate) fn end_parser() -> impl Parser<i64> {
    long("end")
        .argument::<i64>("END")
        .help("Last coordinate of the window, inclusive")
        .fallback(119)
}

pub(crate) fn command_parser() -> impl Parser<AppParams> {
    let global = global_options_parser();

    let version = pure(Command::Version)
        .to_options()
        .command("version")
        .help("Display version information and exit");

    let trace = construct!(Command::Trace(trace_parser()))
        .to_options()
        .command("trace")
        .help("Render a generator stream over a coordinate window");

    let info = construct!(Command::Info(info_parser()))
        .to_options()
        .command("info")
        .help("Display information about a capsule file");

    let verify = construct!(Command::Verify(verify_parser()))
        .to_options()
        .command("verify")
        .help("Verify that a capsule's recorded trace is reproducible");

    let command = construct!([version, trace, info, verify]);

    construct!(AppParams { global, command })
}
