//! Turn render log lines into a `LogReport`.
//!
//! Every line is checked independently against four patterns:
//! - *Elapsed*: `Elapsed: 0:01:23.45` on a line of its own, last one wins
//! - *Memory*: the first `NNNMB` token of the line (ASCII digits)
//! - *Warning* / *Error*: `warning:` / `error |` markers, case-insensitive
//!
//! On top of that, lines containing `========` or `--------` split the file
//! into sections. The first line after a separator is the section title and
//! the text after the first `|` of every following line is its body.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::error::ReportError;
use super::log_loader::{LogLoader, split_universal_lines};
use super::types::{LogReport, LogSummary, ReportOverview, Section};

static ELAPSED_TIME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Elapsed:\s*(\d+:\d+:\d+\.\d+)$").expect("elapsed time pattern"));
static MEMORY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)MB").expect("memory pattern"));
static WARNING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)warning(?::|\s+\|)").expect("warning pattern"));
static ERROR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)error(?::|\s+\|)").expect("error pattern"));

const SEPARATORS: [&str; 2] = ["========", "--------"];

/// Parse a render log file.
///
/// # Parameters
///
/// * `path` - Path to the log file
///
/// # Returns
///
/// The parsed report, or `NotFound`/`Io` if the file cannot be read.
pub fn parse_log(path: &Path) -> Result<LogReport, ReportError> {
    let mut loader = LogLoader::open(path)?;
    let report = LogParser::parse_loader(&mut loader)?;
    log::debug!(
        "Parsed {} ({} lines): {} memory samples, {} diagnostics, {} sections",
        loader.source().display(),
        loader.lines_read(),
        report.summary.memory_samples.len(),
        report.diagnostics.len(),
        report.sections.len()
    );
    Ok(report)
}

/// A parsed log together with the figures derived from it.
#[derive(Debug, Clone)]
pub struct LoadedReport {
    pub path: PathBuf,
    pub report: LogReport,
    pub overview: ReportOverview,
}

impl LoadedReport {
    /// Parse `path` and compute its overview.
    ///
    /// Fails with `EmptyMemorySamples` when the log has nothing to chart.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let report = parse_log(path)?;
        let overview = report.overview()?;
        Ok(Self {
            path: path.to_path_buf(),
            report,
            overview,
        })
    }
}

/// Single-pass accumulator over log lines.
#[derive(Debug, Default)]
pub struct LogParser {
    summary: LogSummary,
    diagnostics: Vec<String>,
    sections: Vec<Section>,
    section_title: String,
    section_lines: Vec<String>,
    lines_since_separator: usize,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse in-memory log text.
    pub fn parse_str(text: &str) -> LogReport {
        let mut parser = Self::new();
        for line in split_universal_lines(text) {
            parser.feed_line(&line);
        }
        parser.finish()
    }

    /// Drain a loader until end of file.
    pub fn parse_loader<R: BufRead>(loader: &mut LogLoader<R>) -> Result<LogReport, ReportError> {
        let mut parser = Self::new();
        while let Some(line) = loader.next_line()? {
            parser.feed_line(&line);
        }
        Ok(parser.finish())
    }

    /// Process one line, terminator included.
    pub fn feed_line(&mut self, line: &str) {
        let content = line.strip_suffix('\n').unwrap_or(line);

        if let Some(caps) = ELAPSED_TIME.captures(content) {
            self.summary.elapsed_time = caps[1].to_string();
        }

        if let Some(caps) = MEMORY.captures(line) {
            let megabytes = caps[1].parse::<u64>().unwrap_or_else(|e| {
                log::warn!("Memory value {}MB out of range ({}), recorded as {}MB", &caps[1], e, u64::MAX);
                u64::MAX
            });
            self.summary.memory_samples.push(megabytes);
        }

        // A line carrying both markers is still a single diagnostic.
        if WARNING.is_match(line) || ERROR.is_match(line) {
            self.diagnostics.push(line.to_string());
        }

        if SEPARATORS.iter().any(|sep| line.contains(sep)) {
            self.close_section();
        } else {
            if self.lines_since_separator == 0 {
                self.section_title = line.to_string();
            } else if let Some((_, fragment)) = content.split_once('|') {
                self.section_lines.push(fragment.to_string());
            }
            self.lines_since_separator += 1;
        }
    }

    /// Emit the open section, if it captured anything, and start a new one.
    fn close_section(&mut self) {
        if !self.section_lines.is_empty() {
            self.sections.push(Section {
                title: std::mem::take(&mut self.section_title),
                lines: std::mem::take(&mut self.section_lines),
            });
        }
        self.section_title.clear();
        self.lines_since_separator = 0;
    }

    /// Finish the pass and hand out the report.
    pub fn finish(mut self) -> LogReport {
        self.close_section();
        LogReport {
            summary: self.summary,
            diagnostics: self.diagnostics,
            sections: self.sections,
        }
    }
}
