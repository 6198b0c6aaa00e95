//! mystik: recursive secret-and-credential scanner CLI.
//!
//! Usage:
//!   mystik <path> [-n name] [-o output] [-l limit] [-t threads]
//!                 [-c context] [-f formats] [-u]

use anyhow::{bail, Context};
use clap::Parser;
use mystik::cli::Cli;
use mystik::scan::ScanConfig;
use std::io;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mystik=info".parse().expect("static directive")))
        .with_writer(std::io::stderr)
        .init();

    let color = std::io::IsTerminal::is_terminal(&std::io::stdout());
    let cli = Cli::parse();

    match run(cli, color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = mystik::fmt::failure(&mut io::stdout(), &error.to_string(), color);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, color: bool) -> anyhow::Result<()> {
    if !cli.path.exists() {
        bail!("path does not exist: {}", cli.path.display());
    }

    let max_file_size = cli.max_file_size().context("invalid --limit")?;
    let formats = cli.report_formats().context("invalid --formats")?;
    let threads = cli.thread_count();

    let mut stdout = io::stdout();
    mystik::fmt::info(
        &mut stdout,
        &format!("scanning {} with {threads} worker(s)", cli.path.display()),
        color,
    )?;

    let config = ScanConfig {
        root: cli.path.clone(),
        name: cli.name.clone(),
        max_file_size,
        threads,
        desired_context: cli.context,
        include_utf16: cli.utf16,
        exclusions: cli.exclusions.clone(),
        inclusions: cli.inclusions.clone(),
    };

    tracing::info!("starting scan of {}", config.root.display());
    let cancelled = AtomicBool::new(false);
    let manifest = mystik::scan::scan(&config, &cancelled).context("scan failed")?;
    tracing::info!(
        "scan complete: {} finding(s) across {} file(s)",
        manifest.findings.len(),
        manifest.metadata.total_files_scanned,
    );

    let output_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| std::path::PathBuf::from(format!("Mystik-{}", manifest.metadata.uuid)));

    mystik::report::write_all(&manifest, &output_dir, &formats).context("failed to write report")?;

    mystik::fmt::success(
        &mut stdout,
        &format!(
            "scanned {} file(s) across {} director(y/ies); {} finding(s) in {} unique file(s)",
            manifest.metadata.total_files_scanned,
            manifest.metadata.total_directories_scanned,
            manifest.findings.len(),
            manifest.metadata.unique_files,
        ),
        color,
    )?;
    mystik::fmt::success(&mut stdout, &format!("report written to {}", output_dir.display()), color)?;

    Ok(())
}
