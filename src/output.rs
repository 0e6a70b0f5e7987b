//! Headless rendering of a report to stdout.

use serde::Serialize;
use std::fmt::Write;

use crate::report::types::{LogSummary, Section};
use crate::report::{LogReport, ReportOverview};

#[derive(Serialize)]
struct JsonReport<'a> {
    overview: &'a ReportOverview,
    report: JsonLog<'a>,
}

#[derive(Serialize)]
struct JsonLog<'a> {
    summary: &'a LogSummary,
    diagnostics: &'a [String],
    sections: Vec<JsonSection<'a>>,
}

/// A section with its fragments and their concatenation.
#[derive(Serialize)]
struct JsonSection<'a> {
    title: &'a str,
    lines: &'a [String],
    body: String,
}

impl<'a> From<&'a Section> for JsonSection<'a> {
    fn from(section: &'a Section) -> Self {
        Self {
            title: &section.title,
            lines: &section.lines,
            body: section.body(),
        }
    }
}

/// Pretty JSON document holding the overview and the raw report.
pub fn render_json(report: &LogReport, overview: &ReportOverview) -> Result<String, serde_json::Error> {
    let report = JsonLog {
        summary: &report.summary,
        diagnostics: &report.diagnostics,
        sections: report.sections.iter().map(JsonSection::from).collect(),
    };
    serde_json::to_string_pretty(&JsonReport { overview, report })
}

/// Plain-text layout mirroring the three tabs of the window.
pub fn render_human(report: &LogReport, overview: &ReportOverview) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Total Render Time:   {}", overview.elapsed_time);
    let _ = writeln!(out, "Maximum Memory Used: {}MB", overview.memory.max);
    let _ = writeln!(out, "Minimum Memory Used: {}MB", overview.memory.min);
    let _ = writeln!(out, "Memory samples:      {}", report.summary.memory_samples.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "Total No. of Warnings: {}", overview.diagnostics.warnings);
    let _ = writeln!(out, "Total No. of Errors:   {}", overview.diagnostics.errors);
    for line in &report.diagnostics {
        let _ = writeln!(out, "  {}", line.trim_end());
    }
    for section in &report.sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "== {}", section.title.trim_end());
        for line in &section.lines {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::log_parser::LogParser;

    const SAMPLE: &str = "Elapsed: 0:01:02.50\nload 120MB\nWarning: slow BVH\n========\nStats\nrays|1000\n";

    #[test]
    fn test_human_output() {
        let report = LogParser::parse_str(SAMPLE);
        let overview = report.overview().unwrap();
        let text = render_human(&report, &overview);
        assert!(text.contains("Total Render Time:   0:01:02.50"));
        assert!(text.contains("Maximum Memory Used: 120MB"));
        assert!(text.contains("Total No. of Warnings: 1"));
        assert!(text.contains("  Warning: slow BVH\n"));
        assert!(text.contains("== Stats\n  1000\n"));
    }

    #[test]
    fn test_json_output() {
        let report = LogParser::parse_str(SAMPLE);
        let overview = report.overview().unwrap();
        let value: serde_json::Value = serde_json::from_str(&render_json(&report, &overview).unwrap()).unwrap();
        assert_eq!(value["overview"]["memory"]["max"], 120);
        assert_eq!(value["report"]["summary"]["memory_samples"][0], 120);
        assert_eq!(value["report"]["sections"][0]["title"], "Stats\n");
        assert_eq!(value["report"]["sections"][0]["body"], "1000");
    }
}
