//! Job configuration.
//!
//! All tunables are gathered into [`JobConfig`], constructed at startup and
//! passed into the scheduler. Nothing is read from process-global state.

use std::time::Duration;

/// Default number of manifest entries downloaded concurrently per wave.
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Default client-level timeout for a single HTTP request in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600; // 10 minutes

/// Configuration for one batch download job.
#[derive(Clone, Debug)]
pub struct JobConfig {
    /// Wave size: how many entries run concurrently between barriers.
    pub chunk_size: usize,

    /// Timeout applied to each HTTP request. This is the only cancellation
    /// mechanism in the pipeline; an in-flight wave cannot be aborted.
    pub timeout: Duration,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl JobConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wave size (minimum 1).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_config_default() {
        let config = JobConfig::default();
        assert_eq!(config.chunk_size, 50);
        assert_eq!(config.timeout.as_secs(), 600);
    }

    #[test]
    fn test_job_config_builder() {
        let config = JobConfig::new()
            .with_chunk_size(8)
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.chunk_size, 8);
        assert_eq!(config.timeout.as_secs(), 30);
    }

    #[test]
    fn test_job_config_min_chunk_size() {
        let config = JobConfig::new().with_chunk_size(0);
        assert_eq!(config.chunk_size, 1);
    }
}
