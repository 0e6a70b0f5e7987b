//! Type definitions for parsed render logs.

use serde::Serialize;

use super::error::ReportError;

/// Elapsed time and memory samples collected from the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    /// Value of the last `Elapsed: H:MM:SS.f` line, empty if there was none.
    pub elapsed_time: String,
    /// Every `NNNMB` value, in file order.
    pub memory_samples: Vec<u64>,
}

impl LogSummary {
    /// Minimum and maximum of the memory samples.
    ///
    /// # Returns
    ///
    /// `Err(ReportError::EmptyMemorySamples)` if the log had no memory tokens.
    pub fn memory_range(&self) -> Result<MemoryRange, ReportError> {
        let min = self.memory_samples.iter().copied().min().ok_or(ReportError::EmptyMemorySamples)?;
        let max = self.memory_samples.iter().copied().max().ok_or(ReportError::EmptyMemorySamples)?;
        Ok(MemoryRange { min, max })
    }
}

/// A titled block of log text between two separator lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// First line after the separator, verbatim (trailing newline included).
    pub title: String,
    /// Text after the first `|` of each following line, without line terminator.
    pub lines: Vec<String>,
}

impl Section {
    /// Concatenation of all captured fragments.
    pub fn body(&self) -> String {
        self.lines.concat()
    }

    /// Fragments one per line, as shown in the subsections tab.
    pub fn display_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Everything extracted from one log file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogReport {
    pub summary: LogSummary,
    /// Raw warning/error lines, in file order.
    pub diagnostics: Vec<String>,
    pub sections: Vec<Section>,
}

impl LogReport {
    /// Compute the figures shown next to the raw data.
    pub fn overview(&self) -> Result<ReportOverview, ReportError> {
        Ok(ReportOverview {
            elapsed_time: self.summary.elapsed_time.clone(),
            memory: self.summary.memory_range()?,
            diagnostics: DiagnosticCounts::from_lines(&self.diagnostics),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryRange {
    pub min: u64,
    pub max: u64,
}

/// Warning and error tallies of the diagnostic lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticCounts {
    pub warnings: usize,
    pub errors: usize,
}

impl DiagnosticCounts {
    /// Count each line once: a warning if it mentions "warning", an error otherwise.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut counts = Self::default();
        for line in lines {
            if is_warning(line.as_ref()) {
                counts.warnings += 1;
            } else {
                counts.errors += 1;
            }
        }
        counts
    }
}

/// Whether a diagnostic line is reported as a warning rather than an error.
pub fn is_warning(line: &str) -> bool {
    line.to_lowercase().contains("warning")
}

/// Figures derived from a `LogReport` before the window opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportOverview {
    pub elapsed_time: String,
    pub memory: MemoryRange,
    pub diagnostics: DiagnosticCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_range() {
        let summary = LogSummary {
            elapsed_time: String::new(),
            memory_samples: vec![100, 250, 50],
        };
        assert_eq!(summary.memory_range().unwrap(), MemoryRange { min: 50, max: 250 });
    }

    #[test]
    fn test_memory_range_empty_fails() {
        let summary = LogSummary::default();
        assert!(matches!(summary.memory_range(), Err(ReportError::EmptyMemorySamples)));
    }

    #[test]
    fn test_diagnostic_counts_partition() {
        let lines = ["WARNING: low disk\n", "error: bad input\n", "Error | warning count exceeded\n", "render error: x\n"];
        let counts = DiagnosticCounts::from_lines(&lines);
        assert_eq!(counts, DiagnosticCounts { warnings: 2, errors: 2 });
        assert_eq!(counts.warnings + counts.errors, lines.len());
    }

    #[test]
    fn test_section_body_concatenates() {
        let section = Section {
            title: "Title B\n".to_string(),
            lines: vec!["keep this B".to_string(), "more B".to_string()],
        };
        assert_eq!(section.body(), "keep this Bmore B");
    }

    #[test]
    fn test_section_display_text_keeps_line_breaks() {
        let section = Section {
            title: "Stats\n".to_string(),
            lines: vec!["line one".to_string(), "line two".to_string()],
        };
        assert_eq!(section.display_text(), "line one\nline two");
    }

    #[test]
    fn test_overview_propagates_empty_memory() {
        let report = LogReport {
            diagnostics: vec!["warning: x\n".to_string()],
            ..Default::default()
        };
        assert!(matches!(report.overview(), Err(ReportError::EmptyMemorySamples)));
    }
}
