//! Report module for render log parsing.
//!
//! Provides functionality for:
//! - Line-by-line reading of a render log file
//! - Extraction of elapsed time, memory samples, warnings/errors and sections
//! - Derived statistics shown by the report window and the headless output
//!
//! Everything here runs before the GUI starts, so a failure aborts startup.

pub mod error;
pub mod log_loader;
pub mod log_parser;
pub mod types;

pub use log_parser::LoadedReport;
pub use types::{LogReport, ReportOverview};
