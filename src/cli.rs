//! Command-line surface: argument parsing and the `-f/--formats` /
//! `-l/--limit` value parsing that sits behind it.

use crate::error::{MystikError, Result};
use crate::size::parse_size;
use clap::Parser;
use std::path::PathBuf;

/// A report format requested via `-f/--formats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Html,
    Json,
}

impl ReportFormat {
    fn parse_one(token: &str) -> Result<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "HTML" => Ok(Self::Html),
            "JSON" => Ok(Self::Json),
            other => Err(MystikError::ArgumentInvalid(format!(
                "unrecognized report format: '{other}'"
            ))),
        }
    }
}

/// Parses a comma-separated `-f/--formats` value into a format list.
///
/// # Errors
///
/// Returns `MystikError::ArgumentInvalid` if any token isn't `HTML` or `JSON`.
pub fn parse_formats(value: &str) -> Result<Vec<ReportFormat>> {
    value.split(',').map(ReportFormat::parse_one).collect()
}

/// Recursive secret-and-credential scanner.
#[derive(Parser, Debug)]
#[command(name = "mystik")]
#[command(about = "Recursive secret-and-credential scanner")]
#[command(version)]
pub struct Cli {
    /// Root path to scan
    pub path: PathBuf,

    /// Manifest name (default: leaf of the resolved path)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output directory (default: Mystik-<manifest uuid>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Max scannable file size, e.g. "500MB", "2GB" (binary multiples)
    #[arg(short = 'l', long = "limit", default_value = "500MB")]
    pub limit: String,

    /// Worker thread count (default: CPU count)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Desired context bytes on each side of a capture
    #[arg(short, long, default_value_t = 128)]
    pub context: usize,

    /// Comma-separated report formats: HTML, JSON
    #[arg(short, long, default_value = "HTML,JSON")]
    pub formats: String,

    /// Enable UTF-16 expansion scanning
    #[arg(short = 'u', long)]
    pub utf16: bool,

    /// Glob patterns (relative to path) to exclude from the scan
    #[arg(long = "exclude")]
    pub exclusions: Vec<String>,

    /// Glob patterns (relative to path) to restrict the scan to
    #[arg(long = "include")]
    pub inclusions: Vec<String>,
}

impl Cli {
    /// Resolves the configured `-l/--limit` value into a byte count.
    ///
    /// # Errors
    ///
    /// Returns `MystikError::ArgumentInvalid` if the value is malformed.
    pub fn max_file_size(&self) -> Result<u64> {
        parse_size(&self.limit)
    }

    /// Resolves the configured worker count, defaulting to the number of
    /// available CPUs (falling back to 4 if that can't be determined).
    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(4, std::num::NonZeroUsize::get)
        })
    }

    /// Resolves the configured `-f/--formats` value.
    ///
    /// # Errors
    ///
    /// Returns `MystikError::ArgumentInvalid` if any token is unrecognized.
    pub fn report_formats(&self) -> Result<Vec<ReportFormat>> {
        parse_formats(&self.formats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats_case_insensitively() {
        let formats = parse_formats("html,JSON").unwrap();
        assert_eq!(formats, vec![ReportFormat::Html, ReportFormat::Json]);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(parse_formats("html,xml").is_err());
    }

    #[test]
    fn cli_parses_minimal_invocation() {
        let cli = Cli::parse_from(["mystik", "/tmp/project"]);
        assert_eq!(cli.path, PathBuf::from("/tmp/project"));
        assert_eq!(cli.limit, "500MB");
        assert_eq!(cli.context, 128);
        assert_eq!(cli.formats, "HTML,JSON");
        assert!(!cli.utf16);
    }

    #[test]
    fn thread_count_defaults_when_unset() {
        let cli = Cli::parse_from(["mystik", "/tmp/project"]);
        assert!(cli.thread_count() >= 1);
    }
}
