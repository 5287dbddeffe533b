use std::collections::HashMap;

use augur_core::{AugurError, ForecastSeries, check_code, validate};

use crate::client::Augur;
use crate::poll;

impl Augur {
    /// Trigger the forecast computation for a dataset and report whether
    /// results are already available.
    ///
    /// The status request doubles as the trigger on the service side, so
    /// calling this ahead of time lets a later [`Augur::get_forecasts`]
    /// spend less time blocked. It can be called repeatedly until it
    /// returns `true`.
    ///
    /// # Errors
    /// `InvalidArg` for an invalid dataset name, otherwise the mapped
    /// service failure, if any.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "augur::forecasts::trigger", skip(self))
    )]
    pub async fn trigger_forecasts(&self, dataset_name: &str) -> Result<bool, AugurError> {
        if !validate::is_valid_api_name(dataset_name) {
            return Err(AugurError::invalid_arg(format!(
                "{dataset_name:?} is not a valid dataset name"
            )));
        }
        let status = self
            .transport
            .forecast_status(&self.identity, dataset_name)
            .await?;
        check_code(status.error_code.as_deref())?;
        Ok(status.ready)
    }

    /// Fetch forecasts for the named series, blocking until the service
    /// has computed them.
    ///
    /// Polls the forecast status (which also triggers the computation)
    /// with an immediate first poll and `poll_interval` sleeps between
    /// attempts, then fetches results in windows of `fetch_slice_len`.
    /// The result is ordered by the requested names; names the dataset
    /// does not contain are dropped, mirroring the service's behavior of
    /// ignoring them.
    ///
    /// Computation latency is unbounded from the client's perspective;
    /// set [`crate::AugurBuilder::wait_timeout`] to bound the wait.
    ///
    /// # Errors
    /// `InvalidArg` if the dataset name or the (pairwise distinct) series
    /// names fail validation; the mapped service failure of a status call
    /// or fetch batch; `Cancelled` when a configured deadline elapses
    /// while waiting. No partial result is ever returned.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::forecasts::get",
            skip(self, series_names),
            fields(dataset = dataset_name, count = series_names.len()),
        )
    )]
    pub async fn get_forecasts(
        &self,
        dataset_name: &str,
        series_names: &[String],
    ) -> Result<Vec<ForecastSeries>, AugurError> {
        validate::validate_series_names(dataset_name, series_names)?;

        poll::bounded(self.cfg.wait_timeout, self.poll_until_ready(dataset_name)).await?;

        // Forecasts can be large enough that fetch windows and the payload
        // ceiling interact; the configurable window is the escape valve.
        let mut fetched: HashMap<String, ForecastSeries> =
            HashMap::with_capacity(series_names.len());
        for chunk in series_names.chunks(self.cfg.fetch_slice_len) {
            let page = self
                .transport
                .forecasts(&self.identity, dataset_name, chunk)
                .await?;
            check_code(page.error_code.as_deref())?;
            for forecast in page.series {
                fetched.insert(forecast.name.clone(), forecast);
            }
        }

        // Reassembled in request order; not required by the service but it
        // keeps the result deterministic.
        Ok(series_names
            .iter()
            .filter_map(|name| fetched.remove(name))
            .collect())
    }
}
