//! Per-client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Batching and polling configuration for one client instance.
///
/// The defaults reproduce the service's documented behavior. Values are
/// fixed at client construction and never mutated afterwards; build a new
/// client to change them (a caller-side retry policy that wants smaller
/// requests after repeated timeouts does exactly that).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugurConfig {
    /// Batch size for small series uploads and other compound requests.
    /// The service bounds most compound methods at 100 items.
    pub slice_len: usize,
    /// Batch size for mid-size series uploads (1,001 to 10,000 values
    /// each). Series above that range are always uploaded one per request.
    pub mid_slice_len: usize,
    /// Batch size for series deletions.
    pub delete_slice_len: usize,
    /// Batch size for forecast fetches.
    pub fetch_slice_len: usize,
    /// Sleep between forecast readiness polls.
    pub poll_interval: Duration,
    /// Sleep between probes while waiting for a dataset deletion to
    /// complete.
    pub deletion_poll_interval: Duration,
    /// Optional deadline bounding the two blocking waits (forecast
    /// readiness and deletion completion). `None` waits indefinitely,
    /// which matches the service's own lack of an upper bound; dropping
    /// the future remains the ambient cancellation path either way.
    pub wait_timeout: Option<Duration>,
}

impl Default for AugurConfig {
    fn default() -> Self {
        Self {
            slice_len: 100,
            mid_slice_len: 10,
            delete_slice_len: 10,
            fetch_slice_len: 100,
            poll_interval: Duration::from_secs(10),
            deletion_poll_interval: Duration::from_secs(30),
            wait_timeout: None,
        }
    }
}
