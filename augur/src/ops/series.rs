use augur_core::{AugurError, TimeSeries, check_code, validate};

use crate::client::Augur;
use crate::{paging, slice};

impl Augur {
    /// Update or insert time-series into a dataset.
    ///
    /// The input is partitioned by value count into three upload tiers so
    /// every request stays under the service's payload ceiling: series
    /// above 10,000 values ship one per request, series above 1,000
    /// values in windows of `mid_slice_len`, everything else in windows
    /// of `slice_len`. Batches dispatch sequentially, very-large tier
    /// first, then large, then small, preserving input order within each
    /// tier. An empty input makes no network call.
    ///
    /// With `enable_merge` set, existing series are merged with the
    /// inputs instead of overwritten.
    ///
    /// A failing batch aborts the remaining ones; batches the service
    /// already accepted are not rolled back, so a failed multi-batch
    /// upsert may leave a prefix of the input applied.
    ///
    /// # Errors
    /// `InvalidArg` if the dataset name, a series, or the (pairwise
    /// distinct) series names fail validation, otherwise the mapped
    /// failure of the first failing batch.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::series::upsert",
            skip(self, series),
            fields(dataset = dataset_name, count = series.len()),
        )
    )]
    pub async fn upsert_time_series(
        &self,
        dataset_name: &str,
        series: &[TimeSeries],
        enable_merge: bool,
    ) -> Result<(), AugurError> {
        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        validate::validate_series_names(dataset_name, &names)?;
        for serie in series {
            validate::validate_series(serie)?;
        }

        for batch in slice::upsert_batches(series, &self.cfg) {
            let payload: Vec<TimeSeries> = batch.into_iter().cloned().collect();
            let ack = self
                .transport
                .upsert_time_series(&self.identity, dataset_name, &payload, enable_merge)
                .await?;
            check_code(ack.error_code.as_deref())?;
        }
        Ok(())
    }

    /// List every time-series in a dataset.
    ///
    /// Follows continuation cursors until the enumeration is exhausted;
    /// order is preserved across pages.
    ///
    /// # Errors
    /// `InvalidArg` for an invalid dataset name, otherwise the mapped
    /// service failure of the first failing page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "augur::series::list", skip(self))
    )]
    pub async fn list_time_series(
        &self,
        dataset_name: &str,
    ) -> Result<Vec<TimeSeries>, AugurError> {
        if !validate::is_valid_api_name(dataset_name) {
            return Err(AugurError::invalid_arg(format!(
                "{dataset_name:?} is not a valid dataset name"
            )));
        }

        paging::drain(move |cursor| async move {
            let page = self
                .transport
                .list_time_series(&self.identity, dataset_name, cursor.as_deref())
                .await?;
            check_code(page.error_code.as_deref())?;
            Ok((page.series, page.continuation))
        })
        .await
    }

    /// Delete time-series from a dataset. Names unknown to the service
    /// are ignored by it.
    ///
    /// Names are validated and checked pairwise distinct before any
    /// network call, then deleted in windows of `delete_slice_len`. A
    /// failing batch aborts the remaining ones.
    ///
    /// # Errors
    /// `InvalidArg` if a name is invalid or duplicated, otherwise the
    /// mapped failure of the first failing batch.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::series::delete",
            skip(self, series_names),
            fields(dataset = dataset_name, count = series_names.len()),
        )
    )]
    pub async fn delete_time_series(
        &self,
        dataset_name: &str,
        series_names: &[String],
    ) -> Result<(), AugurError> {
        validate::validate_series_names(dataset_name, series_names)?;

        for chunk in series_names.chunks(self.cfg.delete_slice_len) {
            let ack = self
                .transport
                .delete_time_series(&self.identity, dataset_name, chunk)
                .await?;
            check_code(ack.error_code.as_deref())?;
        }
        Ok(())
    }
}
