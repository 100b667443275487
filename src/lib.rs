// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Header line extractor and Python module generator.
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

/*!
 * # `headerlines` Crate
 *
 * A library for copying the lines of a set of C header files into a
 * generated Python module, so the module can be imported instead of
 * searching the headers again.
 *
 * This crate provides the pipeline in stages:
 *
 * 1. [naming]: Maps each short identifier (e.g. `cblas`) to a header path
 *    (e.g. `all_cblas.h`).
 * 2. [extractor]: Reads each header and strips the whitespace around its
 *    lines.
 * 3. [emitter]: Renders the lines as `<identifier>_lines = [...]`
 *    assignments and writes the module.
 *
 * ## Usage Example
 *
 * ```no_run
 * use headerlines::naming::{DEFAULT_IDENTIFIERS, DEFAULT_OUTPUT, HeaderNaming};
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let module = headerlines::run(&DEFAULT_IDENTIFIERS, &HeaderNaming::default(), DEFAULT_OUTPUT)?;
 *
 *     for assignment in &module.assignments {
 *         println!("{}: {} lines", assignment.name(), assignment.lines.len());
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use std::path::Path;

pub mod emitter;
pub mod error;
pub mod extractor;
pub mod naming;

use emitter::GeneratedModule;
use error::Result;
use extractor::ExtractedHeaders;
use naming::HeaderNaming;

/// Extracts the header of every identifier and writes the generated module
/// to `output`.
///
/// All headers are read before `output` is touched. If any of them cannot
/// be read, the run fails and `output` is left as it was.
///
/// # Returns
///
/// A `Result` containing the module that was written, or the first error.
pub fn run<S: AsRef<str>>(
    identifiers: &[S],
    naming: &HeaderNaming,
    output: impl AsRef<Path>,
) -> Result<GeneratedModule> {
    let extracted = ExtractedHeaders::from_naming(identifiers, naming)?;
    let module = GeneratedModule::from_extracted(&extracted);
    module.write_to(output)?;

    Ok(module)
}
