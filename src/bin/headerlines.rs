// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  headerlines.rs - Generate a Python module from C header lines.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use headerlines::naming::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Identifiers to extract, in output order.
    #[arg(default_values = DEFAULT_IDENTIFIERS)]
    identifiers: Vec<String>,

    /// Prefix of each header filename.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Suffix of each header filename.
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Directory containing the headers.
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// The module to write.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up logging: {}", e);
    }

    let naming = HeaderNaming {
        prefix: args.prefix,
        suffix: args.suffix,
        input_dir: args.input_dir,
    };

    match headerlines::run(args.identifiers.as_slice(), &naming, &args.output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error generating {:?}: {}", &args.output, error);
            ExitCode::FAILURE
        }
    }
}
