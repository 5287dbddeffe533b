//! The transport collaborator contract consumed by the client facade.

use async_trait::async_trait;

use crate::error::AugurError;
use crate::types::{Ack, Dataset, DatasetPage, ForecastPage, ForecastStatus, SeriesPage, TimeSeries};

/// Request/response contract of the remote forecasting service.
///
/// Implementations own the wire encoding and connection handling; the
/// client facade is injected with one at construction and never sees
/// anything below this boundary.
///
/// Error discipline: a method returns `Err` only for transport-level
/// failures (connection resets, timeouts), surfaced as
/// [`AugurError::Transport`]. Failures reported by the service itself
/// travel inside the `Ok` envelope's `error_code` field and are mapped by
/// the caller through [`crate::error::check_code`].
///
/// `identity` is the opaque pre-encoded credential supplied at client
/// construction; its derivation is outside this contract.
#[async_trait]
pub trait AugurTransport: Send + Sync {
    /// Insert a dataset into the account.
    async fn insert_dataset(&self, identity: &str, dataset: &Dataset) -> Result<Ack, AugurError>;

    /// List one page of the account's datasets, resuming at `cursor`.
    async fn list_datasets(
        &self,
        identity: &str,
        cursor: Option<&str>,
    ) -> Result<DatasetPage, AugurError>;

    /// Request deletion of a dataset. Deletion completes asynchronously.
    async fn delete_dataset(&self, identity: &str, dataset_name: &str) -> Result<Ack, AugurError>;

    /// Update or insert a batch of series in a dataset.
    ///
    /// With `enable_merge` set, existing series are merged with the inputs
    /// instead of being overwritten.
    async fn upsert_time_series(
        &self,
        identity: &str,
        dataset_name: &str,
        series: &[TimeSeries],
        enable_merge: bool,
    ) -> Result<Ack, AugurError>;

    /// List one page of a dataset's series, resuming at `cursor`.
    async fn list_time_series(
        &self,
        identity: &str,
        dataset_name: &str,
        cursor: Option<&str>,
    ) -> Result<SeriesPage, AugurError>;

    /// Delete a batch of series from a dataset. Unknown names are ignored
    /// by the service.
    async fn delete_time_series(
        &self,
        identity: &str,
        dataset_name: &str,
        series_names: &[String],
    ) -> Result<Ack, AugurError>;

    /// Report whether forecasts are ready for a dataset, triggering the
    /// computation if it is not already running.
    async fn forecast_status(
        &self,
        identity: &str,
        dataset_name: &str,
    ) -> Result<ForecastStatus, AugurError>;

    /// Fetch the forecasts of a batch of series. Names absent from the
    /// dataset are omitted from the result.
    async fn forecasts(
        &self,
        identity: &str,
        dataset_name: &str,
        series_names: &[String],
    ) -> Result<ForecastPage, AugurError>;
}
