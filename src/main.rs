/*
main.rs

Copyright 2025 The Wordgrid authors

This file is part of Wordgrid.

Wordgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

mod cli_options;

use std::io;
use std::process::ExitCode;

use wordgrid::application;

fn main() -> ExitCode {
    let args: cli_options::Args = cli_options::parse();
    wordgrid::logger::init_logger(args.debug);

    let mut out = io::stdout().lock();

    match application::run(&args.run_options(), &mut out) {
        Ok(summary) => {
            log::debug!(
                "{} of {} words placed, seed {}",
                summary.placed,
                summary.words.len(),
                summary.seed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
