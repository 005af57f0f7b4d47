//! Addon manifest reading.
//!
//! A manifest is plain text, one entry per line. Lines starting with `#` or
//! `;` are comments and blank lines are skipped. Every other line is a file
//! reference relative to the manifest; only references ending in `.lua` are
//! loaded, the rest are ignored without error.

use super::path::is_lua_file;
use std::io::{self, BufRead, Read};

/// Line buffer size. Content beyond `MAX_LINE_LEN - 1` bytes is dropped.
pub const MAX_LINE_LEN: usize = 1024;

/// Classification of a single manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLine {
    /// Empty line.
    Blank,
    /// Full-line comment.
    Comment,
    /// A Lua file to load, relative to the manifest.
    Entry(String),
    /// A reference that is not a Lua file.
    Ignored,
}

impl ManifestLine {
    /// Classify a line with its terminator already removed.
    pub fn classify(line: &str) -> Self {
        match line.as_bytes().first() {
            None | Some(b'\r') => ManifestLine::Blank,
            Some(b'#' | b';') => ManifestLine::Comment,
            Some(_) if is_lua_file(line) => ManifestLine::Entry(line.to_string()),
            Some(_) => ManifestLine::Ignored,
        }
    }

    /// The file reference if this line is loadable.
    pub fn entry(&self) -> Option<&str> {
        match self {
            ManifestLine::Entry(reference) => Some(reference),
            _ => None,
        }
    }
}

/// Iterator over the classified lines of a manifest.
///
/// Yields `(line_number, line)` pairs, numbering from 1.
pub struct ManifestLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
}

/// Read manifest lines lazily from `reader`.
pub fn read_manifest_lines<R: BufRead>(reader: R) -> ManifestLines<R> {
    ManifestLines {
        reader,
        buf: Vec::with_capacity(MAX_LINE_LEN),
        line_number: 0,
    }
}

impl<R: BufRead> Iterator for ManifestLines<R> {
    type Item = io::Result<(usize, ManifestLine)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let mut line_reader = self.reader.by_ref().take(MAX_LINE_LEN as u64);
        let read = match line_reader.read_until(b'\n', &mut self.buf) {
            Ok(n) if self.buf.len() == MAX_LINE_LEN && self.buf.last() != Some(&b'\n') => {
                skip_rest_of_line(&mut self.reader).map(|()| n)
            }
            other => other,
        };

        match read {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                let line = String::from_utf8_lossy(strip_terminator(&self.buf));
                Some(Ok((self.line_number, ManifestLine::classify(&line))))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

fn skip_rest_of_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(index) => {
                reader.consume(index + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line
        .strip_suffix(b"\r\n")
        .or_else(|| line.strip_suffix(b"\n"))
        .unwrap_or(line);
    &line[..line.len().min(MAX_LINE_LEN - 1)]
}
