//! Static HTML report asset tree, embedded at compile time and copied
//! into the output directory alongside a generated `scripts/data.js`.

use crate::manifest::Manifest;
use crate::report::json::to_manifest_json;
use include_dir::{include_dir, Dir};
use std::path::Path;

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/report/assets");

/// Copies the embedded asset tree into `output_dir` and writes
/// `scripts/data.js` with the manifest as a compact JSON assignment.
///
/// Asset-copy failures are tolerated file-by-file (best-effort per
/// spec.md §7); a failure to write `data.js` itself is propagated since
/// without it the report has nothing to display.
///
/// # Errors
///
/// Returns `MystikError::Io` if `output_dir` can't be created or
/// `data.js` can't be written. Returns `MystikError::Json` if the
/// manifest fails to serialize.
pub fn write_report(manifest: &Manifest, output_dir: &Path) -> crate::error::Result<()> {
    std::fs::create_dir_all(output_dir)?;
    copy_dir(&ASSETS, output_dir);

    let json = to_manifest_json(manifest);
    let compact = serde_json::to_string(&json)?;

    let scripts_dir = output_dir.join("scripts");
    std::fs::create_dir_all(&scripts_dir)?;
    std::fs::write(scripts_dir.join("data.js"), format!("window.manifest={compact};"))?;

    Ok(())
}

fn copy_dir(dir: &Dir<'_>, output_dir: &Path) {
    for file in dir.files() {
        let dest = output_dir.join(file.path());
        if let Some(parent) = dest.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(dest, file.contents());
    }

    for subdir in dir.dirs() {
        copy_dir(subdir, output_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestBuilder;
    use tempfile::TempDir;

    #[test]
    fn writes_index_html_and_data_js() {
        let dir = TempDir::new().unwrap();
        let builder = ManifestBuilder::new("test".to_string(), 0);
        let manifest = builder.build(0, 0);

        write_report(&manifest, dir.path()).unwrap();

        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("scripts/data.js").exists());
        assert!(dir.path().join("styles/report.css").exists());

        let data_js = std::fs::read_to_string(dir.path().join("scripts/data.js")).unwrap();
        assert!(data_js.starts_with("window.manifest="));
    }
}
