// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error types for the header line extractor.
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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// An input header could not be opened or read as text.
    #[error("Cannot read input file {}: {source}", path.display())]
    InputUnavailable {
        /// The input path that failed.
        path: PathBuf,
        source: io::Error,
    },

    /// An identifier that cannot be used to name a generated list.
    #[error("Invalid identifier {0:?}")]
    InvalidIdentifier(String),

    /// The generated module could not be written.
    #[error("Cannot write output file {}: {source}", path.display())]
    OutputUnwritable {
        /// The output path that failed.
        path: PathBuf,
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
