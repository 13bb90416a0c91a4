//! Single-file HTTP fetch, sniff and finalize.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, warn};

use super::finalize::finalize;
use super::outcome::DownloadOutcome;
use crate::sniff::{self, SNIFF_LEN};

/// Downloads one URL to one file.
///
/// Holds the shared HTTP client; cheap to share across tasks behind an
/// `Arc`. The client-level timeout is the only cancellation mechanism in
/// the pipeline.
#[derive(Debug)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Create a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    /// Destination path before the extension is known.
    ///
    /// The first URL variant writes to `base_name`; variant `k` (zero-based)
    /// writes to `base_name{k+1}`, so the second variant becomes `name2`,
    /// the third `name3`, and so on.
    fn destination(dir: &Path, base_name: &str, index: usize) -> PathBuf {
        if index == 0 {
            dir.join(base_name)
        } else {
            dir.join(format!("{}{}", base_name, index + 1))
        }
    }

    /// Download one URL variant into `dir`, then sniff and finalize it.
    ///
    /// An empty URL is a skip, not an error. Transport failures are returned
    /// without retry. A mid-stream failure keeps the partially written file,
    /// which is still sniffed and renamed; the attempt is reported as a
    /// stream failure regardless.
    pub async fn fetch(
        &self,
        dir: &Path,
        base_name: &str,
        url: &str,
        index: usize,
    ) -> DownloadOutcome {
        if url.is_empty() {
            warn!(name = base_name, "URL is empty, skipping");
            return DownloadOutcome::Skipped;
        }

        let response = match self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "Request failed");
                return DownloadOutcome::NetworkFailure;
            }
        };

        let dest = Self::destination(dir, base_name, index);
        let mut file = match File::create(&dest).await {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %dest.display(), error = %e, "Failed to create file");
                return DownloadOutcome::WriteFailure;
            }
        };

        let streamed = Self::write_body(response, &mut file, url, &dest).await;

        if let Err(e) = file.flush().await {
            warn!(path = %dest.display(), error = %e, "Failed to flush file");
        }

        // Sniff what actually landed on disk, complete or not.
        let extension = match Self::read_prefix(&dest).await {
            Ok(prefix) => sniff::resolve_extension(&prefix),
            Err(e) => {
                debug!(path = %dest.display(), error = %e, "Sniff read failed, using default");
                sniff::DEFAULT_EXTENSION
            }
        };

        match finalize(file, &dest, extension).await {
            Ok(renamed) => {
                debug!(path = %renamed.display(), url, "Saved");
                if streamed {
                    DownloadOutcome::Success
                } else {
                    DownloadOutcome::StreamFailure
                }
            }
            Err(e) => {
                warn!(path = %dest.display(), error = %e, "Rename failed");
                DownloadOutcome::WriteFailure
            }
        }
    }

    /// Stream the response body into `file` chunk by chunk.
    ///
    /// Returns `false` if the copy failed partway; whatever was written
    /// stays in the file.
    async fn write_body(
        mut response: reqwest::Response,
        file: &mut File,
        url: &str,
        dest: &Path,
    ) -> bool {
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => {
                    if let Err(e) = file.write_all(&chunk).await {
                        warn!(path = %dest.display(), error = %e, "Stream copy failed, keeping partial file");
                        return false;
                    }
                }
                Ok(None) => return true,
                Err(e) => {
                    warn!(url, error = %e, "Stream copy failed, keeping partial file");
                    return false;
                }
            }
        }
    }

    /// Read up to [`SNIFF_LEN`] leading bytes of the written file.
    async fn read_prefix(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(path).await?;
        let mut buf = vec![0u8; SNIFF_LEN];
        let n = file.read(&mut buf).await?;
        buf.truncate(n);
        Ok(buf)
    }
}
