// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod error;
mod formatter;
mod ui;

use log::debug;

fn main() {
    env_logger::init();

    // Parse CLI arguments (usage errors exit with status 1)
    let args = cli::CliArgs::parse_args();
    let output = args.output_path();

    debug!("Formatting {:?} into {:?}", args.input, output);

    // Runtime failures are reported, not turned into a failing exit status
    match formatter::format_tickets(&args.input, &output) {
        Ok(summary) => ui::status(&summary.to_string()),
        Err(e) => {
            debug!("{:?} failure: {:?}", e.kind(), e);
            ui::print_error(&e.to_string());
        }
    }
}
