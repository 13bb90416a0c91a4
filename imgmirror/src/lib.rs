//! imgmirror - batch mirroring of remote images into a local directory tree.
//!
//! This library downloads a manifest of remote image files, resolving each
//! file's true format from its byte content rather than trusting the source
//! URL, and renames the saved file with the detected extension. It is built
//! for one-shot ingestion jobs (e.g. migrating a media library) run from a
//! single host with bounded concurrency.
//!
//! # Architecture
//!
//! ```text
//! manifest (JSON) ──► chunks (ordered) ──► WaveScheduler
//!                                              │  one task per item,
//!                                              │  barrier between waves
//!                                              ▼
//!                                         process_entry ──► Fetcher
//!                                                              │
//!                                           sniff ◄── first 512 bytes
//!                                              │
//!                                          finalize (close + rename)
//! ```
//!
//! Per-item failures are logged and never abort the run; only a manifest
//! that cannot be loaded is fatal.

pub mod config;
pub mod download;
pub mod manifest;
pub mod sniff;

pub use config::JobConfig;
pub use download::{DownloadOutcome, Fetcher, ProgressSink, StdoutProgress, WaveScheduler};
pub use manifest::{load_manifest, ManifestEntry, ManifestError};
