//! Fixed-interval polling for the service's asynchronous operations.

use std::future::Future;
use std::time::Duration;

use augur_core::{AugurError, check_code};

use crate::client::Augur;

/// Run `wait` under the optional deadline, mapping an elapsed deadline to
/// [`AugurError::Cancelled`]. With no deadline the wait is unbounded and
/// dropping the future is the only cancellation path.
pub(crate) async fn bounded<T, Fut>(limit: Option<Duration>, wait: Fut) -> Result<T, AugurError>
where
    Fut: Future<Output = Result<T, AugurError>>,
{
    match limit {
        None => wait.await,
        Some(limit) => (tokio::time::timeout(limit, wait).await)
            .unwrap_or_else(|_| Err(AugurError::Cancelled { waited: limit })),
    }
}

impl Augur {
    /// Poll the forecast status until the service reports readiness.
    ///
    /// Polls immediately, then sleeps `poll_interval` between attempts.
    /// Any non-empty status code aborts with the mapped failure.
    pub(crate) async fn poll_until_ready(&self, dataset_name: &str) -> Result<(), AugurError> {
        loop {
            let status = self
                .transport
                .forecast_status(&self.identity, dataset_name)
                .await?;
            check_code(status.error_code.as_deref())?;
            if status.ready {
                return Ok(());
            }
            tokio::time::sleep(self.cfg.poll_interval).await;
        }
    }

    /// Probe the series listing until the dataset is reported gone.
    ///
    /// `DatasetNotFound` is the terminal success signal here, not a
    /// failure; any other non-empty code aborts the wait. Items on the
    /// probed pages are ignored.
    pub(crate) async fn poll_until_deleted(&self, dataset_name: &str) -> Result<(), AugurError> {
        loop {
            let page = self
                .transport
                .list_time_series(&self.identity, dataset_name, None)
                .await?;
            match check_code(page.error_code.as_deref()) {
                Err(AugurError::DatasetNotFound) => return Ok(()),
                other => other?,
            }
            tokio::time::sleep(self.cfg.deletion_poll_interval).await;
        }
    }
}
