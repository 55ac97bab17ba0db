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

mod args;
mod info;
mod trace;
mod verify;

use anyhow::Error;
use bpaf::Parser;

use crate::args::Command;

fn main() -> Result<(), Error> {
    env_logger::init();

    let params = args::command_parser()
        .to_options()
        .descr("mftool: inspect and replay deterministic modulation streams")
        .run();

    log::debug!("running command: {}", params.command);

    match &params.command {
        Command::Version => {
            println!("mftool {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Trace(trace_params) => trace::run(&params.global, trace_params),
        Command::Info(info_params) => info::run(&params.global, info_params),
        Command::Verify(verify_params) => verify::run(&params.global, verify_params),
    }
}
