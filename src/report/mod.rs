//! Report output: JSON manifest serialization and the static HTML viewer.

pub mod html;
pub mod json;

use crate::cli::ReportFormat;
use crate::error::Result;
use crate::manifest::Manifest;
use std::path::Path;

/// Writes every format in `formats` for `manifest` into `output_dir`.
///
/// # Errors
///
/// Returns an error if writing `report.json` fails (JSON serialization
/// or I/O). HTML asset copy failures are tolerated internally.
pub fn write_all(manifest: &Manifest, output_dir: &Path, formats: &[ReportFormat]) -> Result<()> {
    for format in formats {
        match format {
            ReportFormat::Json => {
                std::fs::create_dir_all(output_dir)?;
                let json = json::to_manifest_json(manifest);
                let pretty = serde_json::to_string_pretty(&json)?;
                std::fs::write(output_dir.join("report.json"), pretty)?;
            }
            ReportFormat::Html => {
                html::write_report(manifest, output_dir)?;
            }
        }
    }
    Ok(())
}
