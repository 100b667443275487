// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/naming.rs - Input naming convention for the header line extractor.
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
 * # `naming` Module
 *
 * The identifier list and the convention that maps each identifier to the
 * header file it is extracted from.
 */

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Identifiers extracted when none are given, in output order.
pub const DEFAULT_IDENTIFIERS: [&str; 6] = ["sm", "cblas", "vml", "ipps", "rng", "rngi"];

/// Prefix of every input header filename.
pub const DEFAULT_PREFIX: &str = "all_";

/// Suffix of every input header filename.
pub const DEFAULT_SUFFIX: &str = ".h";

/// Filename of the generated module.
pub const DEFAULT_OUTPUT: &str = "mkl_funcs.py";

/// Maps identifiers to input header paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderNaming {
    /// Prepended to the identifier.
    pub prefix: String,
    /// Appended to the identifier.
    pub suffix: String,
    /// Directory the headers live in. `None` means the working directory.
    pub input_dir: Option<PathBuf>,
}

impl Default for HeaderNaming {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            input_dir: None,
        }
    }
}

impl HeaderNaming {
    /// Returns the path of the header for `identifier`.
    ///
    /// No check is made that the file exists.
    pub fn input_path(&self, identifier: &str) -> PathBuf {
        let filename = format!("{}{}{}", self.prefix, identifier, self.suffix);
        match &self.input_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }
}

/// Checks that `identifier` can name a generated `<identifier>_lines` list.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    let valid = !identifier.is_empty()
        && identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier(identifier.to_string()))
    }
}
