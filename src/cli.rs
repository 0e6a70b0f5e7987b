//! CLI argument parsing via `clap`.

use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "render-log-report",
    version,
    about = "Summarise a render log: elapsed time, memory usage, warnings/errors and subsections",
    after_help = "Examples:\n  render-log-report render.log\n  render-log-report render.log --output json\n  render-log-report --config log-report.toml"
)]
/// Top-level CLI options.
pub struct Cli {
    /// Render log to open (prompted for when omitted)
    pub log_file: Option<PathBuf>,
    #[arg(long, help = "Path to a TOML config file (default: ./log-report.toml if present)")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, help = "Print the report instead of opening a window")]
    pub output: Option<OutputMode>,
}

/// Headless output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Human,
    Json,
}

/// Ask for the log file name on the terminal.
///
/// # Returns
///
/// The trimmed answer, or `None` if it was empty.
pub fn prompt_for_log_file<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<Option<PathBuf>> {
    write!(output, "Please specify log file name: ")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() { Ok(None) } else { Ok(Some(PathBuf::from(answer))) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_single_log_file() {
        let cli = Cli::try_parse_from(["render-log-report", "render.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("render.log")));
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_no_arguments_allowed() {
        let cli = Cli::try_parse_from(["render-log-report"]).unwrap();
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_two_log_files_rejected() {
        let err = Cli::try_parse_from(["render-log-report", "a.log", "b.log"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
        assert!(err.to_string().contains("b.log"));
    }

    #[test]
    fn test_output_json() {
        let cli = Cli::try_parse_from(["render-log-report", "r.log", "--output", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputMode::Json));
    }

    #[test]
    fn test_prompt_reads_answer() {
        let mut input = Cursor::new("  scene.log \n");
        let mut output = Vec::new();
        let path = prompt_for_log_file(&mut input, &mut output).unwrap();
        assert_eq!(path, Some(PathBuf::from("scene.log")));
        assert_eq!(String::from_utf8(output).unwrap(), "Please specify log file name: ");
    }

    #[test]
    fn test_prompt_empty_answer() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        assert_eq!(prompt_for_log_file(&mut input, &mut output).unwrap(), None);
    }
}
