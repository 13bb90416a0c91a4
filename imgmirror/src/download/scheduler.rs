//! Wave-based download scheduling.
//!
//! The manifest is partitioned into order-preserving chunks of a configured
//! size. Each chunk becomes one wave: every item in the wave runs on its own
//! task, and a full barrier separates consecutive waves. No task of wave
//! N+1 starts before every task of wave N has completed. Completion, not
//! success, is what satisfies the barrier.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use super::fetcher::Fetcher;
use super::item::process_entry;
use super::progress::ProgressSink;
use crate::config::JobConfig;
use crate::manifest::ManifestEntry;

/// Partition `items` into order-preserving chunks of at most `chunk_size`.
///
/// Concatenating the returned chunks reproduces the input exactly. Every
/// chunk has `chunk_size` entries except possibly the last. A `chunk_size`
/// of zero is treated as one.
pub fn chunk<T>(items: Vec<T>, chunk_size: usize) -> Vec<Vec<T>> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::with_capacity(items.len().div_ceil(chunk_size));
    let mut items = items.into_iter();

    loop {
        let chunk: Vec<T> = items.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }

    chunks
}

/// Wave scheduler driving the download pipeline.
///
/// Parallelism within a wave equals the wave's length; there is no worker
/// pool. A single item's failure is logged inside its own task and never
/// aborts the wave or the run.
pub struct WaveScheduler {
    config: JobConfig,
    fetcher: Arc<Fetcher>,
    progress: Arc<dyn ProgressSink>,
}

impl WaveScheduler {
    /// Create a scheduler from a job config and a progress sink.
    pub fn new(config: JobConfig, progress: Arc<dyn ProgressSink>) -> Self {
        let fetcher = Arc::new(Fetcher::new(config.timeout));
        Self {
            config,
            fetcher,
            progress,
        }
    }

    /// Download every manifest entry, wave by wave.
    ///
    /// Emits a per-item notice with a global 1-based index as each item
    /// completes, a per-wave notice after each barrier, and a terminal
    /// notice once all waves are done.
    pub async fn run(&self, manifest: Vec<ManifestEntry>) {
        let total = manifest.len();
        let chunk_size = self.config.chunk_size.max(1);
        let chunks = chunk(manifest, chunk_size);
        let waves = chunks.len();

        info!(items = total, waves, chunk_size, "Starting download job");

        for (wave, entries) in chunks.into_iter().enumerate() {
            let handles: Vec<_> = entries
                .into_iter()
                .enumerate()
                .map(|(local, entry)| {
                    let fetcher = Arc::clone(&self.fetcher);
                    let progress = Arc::clone(&self.progress);
                    tokio::spawn(async move {
                        process_entry(&fetcher, &entry).await;
                        progress.item_done(1 + local + wave * chunk_size, total);
                    })
                })
                .collect();

            // Full barrier: every task of this wave terminates before the
            // next wave is spawned. A panicked task only loses its own item.
            for result in join_all(handles).await {
                if let Err(e) = result {
                    warn!(error = %e, "Download task panicked");
                }
            }

            self.progress.wave_done(wave + 1, waves);
        }

        self.progress.run_done();
    }
}
