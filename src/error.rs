//! Error types for mystik.
//!
//! Uses thiserror for ergonomic error handling with proper
//! error chain propagation.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level scanner error.
///
/// Only conditions that abort a scan before or during startup are
/// represented here. Per-file problems (unreadable files, oversize files)
/// are silently skipped by the walker and never become a `MystikError`;
/// per-match decode failures inside the scorer become negative indicators,
/// not errors (see the finding indicator pipeline in `crate::findings`).
#[derive(Error, Debug)]
pub enum MystikError {
    #[error("Argument invalid: {0}")]
    ArgumentInvalid(String),

    #[error("Path does not exist: {0}")]
    PathMissing(PathBuf),

    #[error("Failed to compile pattern for finding type '{tag}': {source}")]
    RegexCompileFailed {
        tag: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, MystikError>;

impl MystikError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArgumentInvalid(_) => "ARGUMENT_INVALID",
            Self::PathMissing(_) => "PATH_MISSING",
            Self::RegexCompileFailed { .. } => "REGEX_COMPILE_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}
