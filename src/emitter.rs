// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/emitter.rs - Python module emitter for extracted header lines.
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
 * # `emitter` Module
 *
 * This module renders extracted header lines as a generated Python module.
 *
 * The generated module starts with a banner comment and a blank line,
 * followed by one `<identifier>_lines = [...]` assignment per header.
 * Strings are double-quoted and escaped with JSON rules, so the right-hand
 * side of every assignment is both a Python list literal and a JSON array.
 *
 * ## Usage Example
 *
 * ```no_run
 * use headerlines::emitter::GeneratedModule;
 * use headerlines::extractor::ExtractedHeaders;
 * use headerlines::naming::{DEFAULT_IDENTIFIERS, DEFAULT_OUTPUT, HeaderNaming};
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let extracted = ExtractedHeaders::from_naming(&DEFAULT_IDENTIFIERS, &HeaderNaming::default())?;
 *     let module = GeneratedModule::from_extracted(&extracted);
 *     module.write_to(DEFAULT_OUTPUT)?;
 *
 *     Ok(())
 * }
 * ```
 */

use std::io;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Error, Result};
use crate::extractor::ExtractedHeaders;

/// First line of every generated module.
pub const BANNER: &str = "### AUTO-GENERATED BY headerlines. DO NOT EDIT. ###";

/// Renders `s` as a double-quoted string literal.
pub fn render_string_literal(s: &str) -> String {
    Value::from(s).to_string()
}

/// Renders `lines` as a bracketed, comma-separated list literal.
pub fn render_sequence<S: AsRef<str>>(lines: &[S]) -> String {
    let literals = lines
        .iter()
        .map(|line| render_string_literal(line.as_ref()))
        .collect::<Vec<_>>();
    format!("[{}]", literals.join(", "))
}

/// One `<identifier>_lines` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub identifier: String,
    pub lines: Vec<String>,
}

impl Assignment {
    /// The name the lines are bound to.
    pub fn name(&self) -> String {
        format!("{}_lines", self.identifier)
    }

    /// Renders `<identifier>_lines = [...]`, without a trailing newline.
    pub fn render(&self) -> String {
        format!("{} = {}", self.name(), render_sequence(&self.lines))
    }
}

/// A generated module, one assignment per extracted header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub assignments: Vec<Assignment>,
}

impl GeneratedModule {
    /// Builds the module for `extracted`, keeping its order.
    pub fn from_extracted(extracted: &ExtractedHeaders) -> Self {
        let assignments = extracted
            .headers
            .iter()
            .map(|header| Assignment {
                identifier: header.identifier.clone(),
                lines: header.lines.clone(),
            })
            .collect();

        Self { assignments }
    }

    /// Renders the full module text, ending in a newline.
    pub fn render(&self) -> String {
        let mut content = String::new();

        content.push_str(BANNER);
        content.push_str("\n\n");

        for assignment in &self.assignments {
            content.push_str(&assignment.render());
            content.push('\n');
        }

        content
    }

    /// Writes the module to `path`, replacing any existing file.
    ///
    /// The text goes to a temporary file next to `path` which is then
    /// renamed over it, so `path` is never left partially written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let unwritable = |source: io::Error| Error::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(unwritable)?;
        file.write_all(self.render().as_bytes())
            .map_err(unwritable)?;
        file.flush().map_err(unwritable)?;
        file.persist(path).map_err(|e| unwritable(e.error))?;

        info!(
            "Wrote {} assignments to {}",
            self.assignments.len(),
            path.display()
        );

        Ok(())
    }
}
