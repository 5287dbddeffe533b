use std::sync::Arc;
use std::time::Duration;

use augur_core::{AugurConfig, AugurError, AugurTransport};

/// Client facade for the forecasting service.
///
/// Owns the opaque credential, the injected transport, and an immutable
/// batching/polling configuration. Instances are cheap to share behind an
/// `Arc` and hold no mutable state, so concurrent calls from independent
/// tasks need no locking.
pub struct Augur {
    pub(crate) identity: String,
    pub(crate) transport: Arc<dyn AugurTransport>,
    pub(crate) cfg: AugurConfig,
}

impl std::fmt::Debug for Augur {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Augur")
            .field("identity", &self.identity)
            .field("transport", &"<dyn AugurTransport>")
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing an [`Augur`] client with custom configuration.
pub struct AugurBuilder {
    identity: Option<String>,
    transport: Option<Arc<dyn AugurTransport>>,
    cfg: AugurConfig,
}

impl Default for AugurBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AugurBuilder {
    /// Create a new builder carrying the service's default batch sizes and
    /// poll intervals.
    #[must_use]
    pub fn new() -> Self {
        Self {
            identity: None,
            transport: None,
            cfg: AugurConfig::default(),
        }
    }

    /// Set the transport implementation the client talks through.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn AugurTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the pre-encoded credential presented on every request.
    ///
    /// Deriving the credential from an account key is the application's
    /// concern; the client treats it as an opaque string.
    #[must_use]
    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Replace the whole configuration in one step.
    #[must_use]
    pub fn config(mut self, cfg: AugurConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Batch size for small-series uploads and other compound requests.
    #[must_use]
    pub const fn slice_len(mut self, len: usize) -> Self {
        self.cfg.slice_len = len;
        self
    }

    /// Batch size for mid-size series uploads.
    #[must_use]
    pub const fn mid_slice_len(mut self, len: usize) -> Self {
        self.cfg.mid_slice_len = len;
        self
    }

    /// Batch size for series deletions.
    #[must_use]
    pub const fn delete_slice_len(mut self, len: usize) -> Self {
        self.cfg.delete_slice_len = len;
        self
    }

    /// Batch size for forecast fetches.
    #[must_use]
    pub const fn fetch_slice_len(mut self, len: usize) -> Self {
        self.cfg.fetch_slice_len = len;
        self
    }

    /// Sleep between forecast readiness polls.
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.cfg.poll_interval = interval;
        self
    }

    /// Sleep between probes while waiting for a dataset deletion.
    #[must_use]
    pub const fn deletion_poll_interval(mut self, interval: Duration) -> Self {
        self.cfg.deletion_poll_interval = interval;
        self
    }

    /// Bound the blocking waits with a deadline; an elapsed deadline
    /// surfaces [`AugurError::Cancelled`].
    #[must_use]
    pub const fn wait_timeout(mut self, limit: Duration) -> Self {
        self.cfg.wait_timeout = Some(limit);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no transport or identity was supplied, or
    /// if any configured batch size is zero.
    pub fn build(self) -> Result<Augur, AugurError> {
        let transport = self.transport.ok_or_else(|| {
            AugurError::invalid_arg("no transport configured; supply one via transport(...)")
        })?;
        let identity = match self.identity {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(AugurError::invalid_arg(
                    "no identity configured; supply the account credential via identity(...)",
                ));
            }
        };

        let sizes = [
            self.cfg.slice_len,
            self.cfg.mid_slice_len,
            self.cfg.delete_slice_len,
            self.cfg.fetch_slice_len,
        ];
        if sizes.contains(&0) {
            return Err(AugurError::invalid_arg("batch sizes must be non-zero"));
        }

        Ok(Augur {
            identity,
            transport,
            cfg: self.cfg,
        })
    }
}

impl Augur {
    /// Start building a new client.
    #[must_use]
    pub fn builder() -> AugurBuilder {
        AugurBuilder::new()
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &AugurConfig {
        &self.cfg
    }
}
