//! imgmirror CLI - one-shot batch image ingestion.
//!
//! Loads the JSON manifest, then drives the wave scheduler to completion.
//! Progress lines go to standard output; diagnostics go to standard error
//! so the two streams never interleave. The exit status is nonzero only for
//! a fatal startup error (unreadable manifest, runtime creation); per-item
//! download failures are logged and do not affect it.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use imgmirror::config::{DEFAULT_CHUNK_SIZE, DEFAULT_TIMEOUT_SECS};
use imgmirror::{load_manifest, JobConfig, StdoutProgress, WaveScheduler};

/// Bulk-download a manifest of remote images into a local directory tree.
#[derive(Debug, Parser)]
#[command(name = "imgmirror", version, about)]
struct Args {
    /// Path to the JSON manifest. Defaults to data.json next to the executable.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Number of items downloaded concurrently per wave.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Per-request HTTP timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

/// `data.json` in the directory the executable runs from.
fn default_manifest_path() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(match exe.parent() {
        Some(dir) => dir.join("data.json"),
        None => PathBuf::from("data.json"),
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let manifest_path = match args.manifest.map(Ok).unwrap_or_else(default_manifest_path) {
        Ok(path) => path,
        Err(e) => {
            error!(error = %e, "Could not resolve the executable directory");
            return ExitCode::FAILURE;
        }
    };

    // A manifest that cannot be loaded is fatal: nothing is downloaded.
    let manifest = match load_manifest(&manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            error!(error = %e, "Aborting, manifest could not be loaded");
            return ExitCode::FAILURE;
        }
    };

    let config = JobConfig::new()
        .with_chunk_size(args.chunk_size)
        .with_timeout(Duration::from_secs(args.timeout_secs));

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    let scheduler = WaveScheduler::new(config, Arc::new(StdoutProgress));
    runtime.block_on(scheduler.run(manifest));

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["imgmirror"]).unwrap();
        assert_eq!(args.manifest, None);
        assert_eq!(args.chunk_size, 50);
        assert_eq!(args.timeout_secs, 600);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "imgmirror",
            "--manifest",
            "/tmp/m.json",
            "--chunk-size",
            "10",
            "--timeout-secs",
            "30",
        ])
        .unwrap();

        assert_eq!(args.manifest, Some(PathBuf::from("/tmp/m.json")));
        assert_eq!(args.chunk_size, 10);
        assert_eq!(args.timeout_secs, 30);
    }

    #[test]
    fn test_default_manifest_path_is_beside_executable() {
        let path = default_manifest_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "data.json");
    }
}
