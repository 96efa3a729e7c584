//! Newline-stripping line reader shared by both parser passes

use crate::{Error, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads lines from an apt.dat source one at a time
///
/// Trailing `\n` and `\r` are removed and invalid UTF-8 is decoded lossily, so
/// files written on Windows or with Latin-1 names read the same as clean ones.
/// Line numbers are 1-based.
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
}

impl LineReader<BufReader<File>> {
    /// Open a file for line-by-line reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(256),
            line_number: 0,
        }
    }

    /// Next line with its number, or `None` at end of input
    pub fn next_line(&mut self) -> io::Result<Option<(usize, Cow<'_, str>)>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut end = self.buffer.len();
        while end > 0 && matches!(self.buffer[end - 1], b'\n' | b'\r') {
            end -= 1;
        }

        Ok(Some((
            self.line_number,
            String::from_utf8_lossy(&self.buffer[..end]),
        )))
    }

    /// Number of lines returned so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &[u8]) -> Vec<(usize, String)> {
        let mut reader = LineReader::new(Cursor::new(input));
        let mut lines = Vec::new();
        while let Some((number, line)) = reader.next_line().unwrap() {
            lines.push((number, line.into_owned()));
        }
        lines
    }

    #[test]
    fn test_strips_unix_and_windows_newlines() {
        let lines = collect(b"I\r\n1000 Version\n\n99");
        assert_eq!(
            lines,
            vec![
                (1, "I".to_string()),
                (2, "1000 Version".to_string()),
                (3, String::new()),
                (4, "99".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let lines = collect(b"1 0 0 0 LFPG Charles de Gaulle \xe9\n");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].1.starts_with("1 0 0 0 LFPG Charles de Gaulle"));
        assert!(lines[0].1.contains('\u{FFFD}'));
    }

    #[test]
    fn test_empty_input() {
        let mut reader = LineReader::new(Cursor::new(Vec::<u8>::new()));
        assert!(reader.next_line().unwrap().is_none());
        assert_eq!(reader.lines_read(), 0);
    }
}
