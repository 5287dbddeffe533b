use augur_core::{AugurError, Dataset, check_code, validate};

use crate::client::Augur;
use crate::{paging, poll};

impl Augur {
    /// Insert a dataset into the account.
    ///
    /// Datasets are immutable once inserted; delete and re-insert to
    /// change the period or horizon.
    ///
    /// # Errors
    /// `InvalidArg` if the dataset fails validation, otherwise the mapped
    /// service failure, if any.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::datasets::insert",
            skip(self, dataset),
            fields(dataset = %dataset.name),
        )
    )]
    pub async fn insert_dataset(&self, dataset: &Dataset) -> Result<(), AugurError> {
        validate::validate_dataset(dataset)?;
        let ack = self
            .transport
            .insert_dataset(&self.identity, dataset)
            .await?;
        check_code(ack.error_code.as_deref())
    }

    /// List every dataset in the account.
    ///
    /// Follows continuation cursors until the enumeration is exhausted;
    /// order is preserved across pages. An empty account yields an empty
    /// collection, not an error.
    ///
    /// # Errors
    /// The mapped service failure of the first failing page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "augur::datasets::list", skip(self))
    )]
    pub async fn list_datasets(&self) -> Result<Vec<Dataset>, AugurError> {
        paging::drain(move |cursor| async move {
            let page = self
                .transport
                .list_datasets(&self.identity, cursor.as_deref())
                .await?;
            check_code(page.error_code.as_deref())?;
            Ok((page.datasets, page.continuation))
        })
        .await
    }

    /// Request deletion of a dataset.
    ///
    /// The service deletes in the background; the dataset remains visible
    /// (rejecting writes with `InvalidDatasetState`) until the deletion
    /// completes.
    ///
    /// # Errors
    /// `InvalidArg` for an invalid name, otherwise the mapped service
    /// failure, if any.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "augur::datasets::delete", skip(self))
    )]
    pub async fn delete_dataset(&self, dataset_name: &str) -> Result<(), AugurError> {
        if !validate::is_valid_api_name(dataset_name) {
            return Err(AugurError::invalid_arg(format!(
                "{dataset_name:?} is not a valid dataset name"
            )));
        }
        let ack = self
            .transport
            .delete_dataset(&self.identity, dataset_name)
            .await?;
        check_code(ack.error_code.as_deref())
    }

    /// Request deletion of a dataset and block until it takes effect.
    ///
    /// Probes the series listing every `deletion_poll_interval` until the
    /// service answers `DatasetNotFound`, the terminal success signal.
    /// Deletion latency is unbounded from the client's perspective; set
    /// [`crate::AugurBuilder::wait_timeout`] to bound the wait.
    ///
    /// # Errors
    /// Any mapped failure other than the terminal `DatasetNotFound`, or
    /// `Cancelled` when a configured deadline elapses first.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "augur::datasets::delete_and_wait", skip(self))
    )]
    pub async fn delete_dataset_and_wait(&self, dataset_name: &str) -> Result<(), AugurError> {
        self.delete_dataset(dataset_name).await?;
        poll::bounded(
            self.cfg.wait_timeout,
            self.poll_until_deleted(dataset_name),
        )
        .await
    }
}
