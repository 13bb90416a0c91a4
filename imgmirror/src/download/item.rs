//! Per-entry processing.

use tracing::warn;

use super::fetcher::Fetcher;
use super::outcome::DownloadOutcome;
use crate::manifest::ManifestEntry;

/// Process one manifest entry: ensure its target directory exists, then
/// download each URL variant in order.
///
/// Returns one outcome per source URL. A directory-creation failure abandons
/// the entire entry (nothing is fetched, the returned list is empty); the
/// error is logged and never reaches the scheduler.
pub async fn process_entry(fetcher: &Fetcher, entry: &ManifestEntry) -> Vec<DownloadOutcome> {
    if let Err(e) = tokio::fs::create_dir_all(&entry.target_dir).await {
        warn!(
            dir = %entry.target_dir.display(),
            name = %entry.base_name,
            error = %e,
            "Failed to create target directory, abandoning entry"
        );
        return Vec::new();
    }

    let mut outcomes = Vec::with_capacity(entry.source_urls.len());
    for (index, url) in entry.source_urls.iter().enumerate() {
        outcomes.push(
            fetcher
                .fetch(&entry.target_dir, &entry.base_name, url, index)
                .await,
        );
    }
    outcomes
}
