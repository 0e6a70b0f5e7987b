//! Sequential line reader for render log files.
//!
//! Lines are handed out with their terminator so that section titles and
//! diagnostic lines keep the text exactly as it appeared in the file.
//! Line endings follow universal-newline rules: `\r\n` and a lone `\r`
//! both end a line and are handed out as `\n`.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::error::ReportError;

/// Buffer size for reading log files (8KB).
const BUFFER_SIZE: usize = 8 * 1024;

/// Line reader over any buffered source, remembering where it reads from.
pub struct LogLoader<R> {
    reader: R,
    source: PathBuf,
    line_buffer: String,
    pending: VecDeque<String>,
    lines_read: usize,
}

impl LogLoader<BufReader<File>> {
    /// Open a log file for reading.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to the log file
    ///
    /// # Returns
    ///
    /// `Ok(LogLoader)` if the file opens, `Err(NotFound | Io)` otherwise.
    pub fn open(path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path).map_err(|e| ReportError::from_io(path, e))?;
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);
        Ok(Self::from_reader(reader, path))
    }
}

impl<R: BufRead> LogLoader<R> {
    /// Wrap an already buffered reader. `source` is only used in error messages.
    pub fn from_reader(reader: R, source: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            source: source.into(),
            line_buffer: String::with_capacity(512),
            pending: VecDeque::new(),
            lines_read: 0,
        }
    }

    /// Read the next line, terminator included.
    ///
    /// # Returns
    ///
    /// `Ok(Some(line))` while lines remain, `Ok(None)` at end of file.
    pub fn next_line(&mut self) -> Result<Option<String>, ReportError> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                self.lines_read += 1;
                return Ok(Some(line));
            }

            // `read_line` stops at `\n` only, so a chunk may hold several `\r`-terminated lines
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return Ok(None),
                Ok(_) => self.pending.extend(split_universal_lines(&self.line_buffer)),
                Err(e) => {
                    log::warn!("Error reading {} after line {}: {}", self.source.display(), self.lines_read, e);
                    return Err(ReportError::from_io(&self.source, e));
                }
            }
        }
    }

    /// Number of lines handed out so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Split text into lines ending in `\n`, treating `\r\n` and a lone `\r` as `\n`.
///
/// The last line keeps no terminator if the text does not end with one.
pub fn split_universal_lines(text: &str) -> Vec<String> {
    let folded = text.replace("\r\n", "\n");
    folded
        .split_inclusive(['\r', '\n'])
        .map(|piece| match piece.strip_suffix('\r') {
            Some(stripped) => format!("{}\n", stripped),
            None => piece.to_string(),
        })
        .collect()
}
