// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/extractor.rs - Line extractor for C header files.
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
 * # `extractor` Module
 *
 * This module reads header files and strips the surrounding whitespace from
 * each of their lines. Header contents are treated as opaque text.
 *
 * ## Usage Example
 *
 * ```no_run
 * use headerlines::extractor::ExtractedHeaders;
 * use headerlines::naming::{DEFAULT_IDENTIFIERS, HeaderNaming};
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let extracted = ExtractedHeaders::from_naming(&DEFAULT_IDENTIFIERS, &HeaderNaming::default())?;
 *
 *     for header in &extracted.headers {
 *         println!("{}: {} lines", header.identifier, header.lines.len());
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::naming::{HeaderNaming, validate_identifier};

/// Characters stripped from both ends of a line: Unicode whitespace plus the
/// ASCII file, group, record and unit separators.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Reads `path` and returns its lines with leading and trailing whitespace
/// removed.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`. Empty lines are kept as empty
/// strings. An empty file has no lines.
pub fn extract_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    Ok(text
        .lines()
        .map(|line| line.trim_matches(is_strippable).to_string())
        .collect())
}

/// The stripped lines of a single header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedHeader {
    /// The identifier the header was located by.
    pub identifier: String,
    /// The header's path.
    pub path: PathBuf,
    /// The header's lines, in file order.
    pub lines: Vec<String>,
}

/// Every header named by an identifier list, in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedHeaders {
    pub headers: Vec<ExtractedHeader>,
}

impl ExtractedHeaders {
    /// Extracts the header of each identifier, in order.
    ///
    /// # Arguments
    ///
    /// * `identifiers` - The identifiers to extract.
    /// * `naming` - Maps each identifier to its header path.
    ///
    /// # Returns
    ///
    /// A `Result` containing the extracted headers, or the first error.
    pub fn from_naming<S: AsRef<str>>(identifiers: &[S], naming: &HeaderNaming) -> Result<Self> {
        let mut headers = Vec::with_capacity(identifiers.len());

        for identifier in identifiers {
            let identifier = identifier.as_ref();
            validate_identifier(identifier)?;

            let path = naming.input_path(identifier);
            let lines = extract_lines(&path)?;
            let header = ExtractedHeader {
                identifier: identifier.to_string(),
                path,
                lines,
            };
            debug!(
                "Extracted {} lines for {:?} from {}",
                header.lines.len(),
                header.identifier,
                header.path.display()
            );

            headers.push(header);
        }

        Ok(Self { headers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn lines_are_stripped_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_a.h");
        fs::write(&path, "  foo  \nbar\n\t\n  void f(int x);\t\r\nfoo\n").unwrap();

        let lines = extract_lines(&path).unwrap();
        assert_eq!(lines, vec!["foo", "bar", "", "void f(int x);", "foo"]);
        for line in &lines {
            assert_eq!(line.trim(), line);
        }
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_b.h");
        fs::write(&path, "baz\nqux").unwrap();

        assert_eq!(extract_lines(&path).unwrap(), vec!["baz", "qux"]);
    }

    #[test]
    fn bare_carriage_return_ends_a_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_a.h");
        fs::write(&path, "foo\rbar\n").unwrap();

        assert_eq!(extract_lines(&path).unwrap(), vec!["foo", "bar"]);
    }

    #[test]
    fn mixed_line_endings_are_split_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_a.h");
        fs::write(&path, "a\r\nb\rc\n\r\nd\r").unwrap();

        assert_eq!(extract_lines(&path).unwrap(), vec!["a", "b", "c", "", "d"]);
    }

    #[test]
    fn ascii_separators_are_stripped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_a.h");
        fs::write(&path, "\x1cfoo\x1f\n\x1d \x1e\n").unwrap();

        assert_eq!(extract_lines(&path).unwrap(), vec!["foo", ""]);
    }

    #[test]
    fn empty_file_has_no_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_empty.h");
        fs::write(&path, "").unwrap();

        assert!(extract_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_missing.h");

        let err = extract_lines(&path).unwrap_err();
        match &err {
            Error::InputUnavailable { path: p, .. } => assert_eq!(p, &path),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("all_missing.h"));
    }

    #[test]
    fn non_utf8_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_bin.h");
        fs::write(&path, [0x66, 0xff, 0xfe, 0x0a]).unwrap();

        assert!(matches!(
            extract_lines(&path),
            Err(Error::InputUnavailable { .. })
        ));
    }

    #[test]
    fn headers_follow_identifier_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("all_a.h"), "  foo  \nbar\n").unwrap();
        fs::write(dir.path().join("all_b.h"), "baz\n").unwrap();
        let naming = HeaderNaming {
            input_dir: Some(dir.path().to_path_buf()),
            ..HeaderNaming::default()
        };

        let extracted = ExtractedHeaders::from_naming(&["b", "a"], &naming).unwrap();
        let ids: Vec<_> = extracted
            .headers
            .iter()
            .map(|h| h.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(extracted.headers[0].lines, vec!["baz"]);
        assert_eq!(extracted.headers[1].lines, vec!["foo", "bar"]);
        assert_eq!(extracted.headers[1].path, dir.path().join("all_a.h"));
    }

    #[test]
    fn missing_header_fails_the_whole_extraction() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("all_a.h"), "foo\n").unwrap();
        let naming = HeaderNaming {
            input_dir: Some(dir.path().to_path_buf()),
            ..HeaderNaming::default()
        };

        let err = ExtractedHeaders::from_naming(&["a", "b"], &naming).unwrap_err();
        assert!(err.to_string().contains("all_b.h"));
    }

    #[test]
    fn invalid_identifier_is_rejected_before_reading() {
        let naming = HeaderNaming::default();
        assert!(matches!(
            ExtractedHeaders::from_naming(&["../etc/passwd"], &naming),
            Err(Error::InvalidIdentifier(_))
        ));
    }
}
