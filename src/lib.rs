//! mystik: a recursive secret-and-credential scanner.
//!
//! Given a root path on the local filesystem, discovers files, scans
//! their raw bytes for patterns that may indicate sensitive material
//! (cloud access keys, API tokens, high-entropy strings, UUIDs, JSON Web
//! Tokens, base64/hex blobs), scores each candidate match with a set of
//! content-aware heuristics, and emits a structured report (a
//! "manifest") containing surviving findings, their byte context,
//! per-finding indicator breakdown, a precomputed ranking, and scan
//! metadata.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────────────┐   ┌─────────────┐
//! │   Walker    │──▶│   Parallel Executor   │──▶│  Manifest   │
//! │ (ignore)    │   │ (rayon worker pool)   │   │  Builder    │
//! └─────────────┘   └──────────┬───────────┘   └──────┬──────┘
//!                               │                       │
//!                     per file: Matcher → Scorer    report::{json,html}
//!                      (regex::bytes)  (findings::*)
//! ```

pub mod cli;
pub mod error;
pub mod executor;
pub mod fmt;
pub mod findings;
pub mod manifest;
pub mod matcher;
pub mod report;
pub mod scan;
pub mod scorer;
pub mod size;
pub mod walker;

pub use error::{MystikError, Result};
pub use manifest::Manifest;
pub use scan::{scan, ScanConfig};
