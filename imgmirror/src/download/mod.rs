//! Concurrent, wave-based download pipeline.
//!
//! This module contains the core of the tool:
//! - Wave scheduling with a full barrier between chunks (`scheduler`)
//! - Per-entry directory setup and URL variant iteration (`item`)
//! - Single-file fetch, sniff and finalize (`fetcher`, `finalize`)
//! - Per-attempt outcome classification (`outcome`)
//! - Progress notices (`progress`)
//!
//! # Architecture
//!
//! ```text
//! WaveScheduler
//!      │  one task per entry, join barrier per wave
//!      ▼
//! process_entry ──► Fetcher ──► sniff ──► finalize
//!      │
//!      └──► ProgressSink (item / wave / terminal notices)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use imgmirror::{load_manifest, JobConfig, StdoutProgress, WaveScheduler};
//!
//! let manifest = load_manifest(Path::new("data.json"))?;
//! let scheduler = WaveScheduler::new(JobConfig::new(), Arc::new(StdoutProgress));
//! scheduler.run(manifest).await;
//! ```

mod fetcher;
mod finalize;
mod item;
mod outcome;
mod progress;
mod scheduler;

pub use fetcher::Fetcher;
pub use finalize::finalize;
pub use item::process_entry;
pub use outcome::DownloadOutcome;
pub use progress::{ProgressSink, StdoutProgress};
pub use scheduler::{chunk, WaveScheduler};
