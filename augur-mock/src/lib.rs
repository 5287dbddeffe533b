//! Scriptable mock transport for augur tests and examples.
//!
//! Endpoints are scripted per call with closures (or the `returns_*`
//! conveniences); unscripted endpoints answer with a transport failure so
//! a misconfigured test fails loudly instead of hanging. Every endpoint
//! counts its calls, which is how tests assert batching and polling
//! behavior without reaching into the client.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use augur_core::{
    Ack, AugurError, AugurTransport, Dataset, DatasetPage, ForecastPage, ForecastSeries,
    ForecastStatus, SeriesPage, TimeSeries,
};

type InsertDatasetFn = dyn Fn(&Dataset) -> Result<Ack, AugurError> + Send + Sync;
type ListDatasetsFn = dyn Fn(Option<&str>) -> Result<DatasetPage, AugurError> + Send + Sync;
type DeleteDatasetFn = dyn Fn(&str) -> Result<Ack, AugurError> + Send + Sync;
type UpsertFn = dyn Fn(&str, &[TimeSeries], bool) -> Result<Ack, AugurError> + Send + Sync;
type ListSeriesFn = dyn Fn(&str, Option<&str>) -> Result<SeriesPage, AugurError> + Send + Sync;
type DeleteSeriesFn = dyn Fn(&str, &[String]) -> Result<Ack, AugurError> + Send + Sync;
type StatusFn = dyn Fn(&str) -> Result<ForecastStatus, AugurError> + Send + Sync;
type ForecastsFn = dyn Fn(&str, &[String]) -> Result<ForecastPage, AugurError> + Send + Sync;

/// Per-endpoint call counters of a [`MockTransport`].
#[derive(Debug, Default)]
pub struct CallCounts {
    insert_dataset: AtomicUsize,
    list_datasets: AtomicUsize,
    delete_dataset: AtomicUsize,
    upsert_time_series: AtomicUsize,
    list_time_series: AtomicUsize,
    delete_time_series: AtomicUsize,
    forecast_status: AtomicUsize,
    forecasts: AtomicUsize,
}

impl CallCounts {
    /// Calls made to `insert_dataset`.
    pub fn insert_dataset(&self) -> usize {
        self.insert_dataset.load(Ordering::SeqCst)
    }
    /// Calls made to `list_datasets`.
    pub fn list_datasets(&self) -> usize {
        self.list_datasets.load(Ordering::SeqCst)
    }
    /// Calls made to `delete_dataset`.
    pub fn delete_dataset(&self) -> usize {
        self.delete_dataset.load(Ordering::SeqCst)
    }
    /// Calls made to `upsert_time_series`.
    pub fn upsert_time_series(&self) -> usize {
        self.upsert_time_series.load(Ordering::SeqCst)
    }
    /// Calls made to `list_time_series`.
    pub fn list_time_series(&self) -> usize {
        self.list_time_series.load(Ordering::SeqCst)
    }
    /// Calls made to `delete_time_series`.
    pub fn delete_time_series(&self) -> usize {
        self.delete_time_series.load(Ordering::SeqCst)
    }
    /// Calls made to `forecast_status`.
    pub fn forecast_status(&self) -> usize {
        self.forecast_status.load(Ordering::SeqCst)
    }
    /// Calls made to `forecasts`.
    pub fn forecasts(&self) -> usize {
        self.forecasts.load(Ordering::SeqCst)
    }
    /// Calls made across every endpoint.
    pub fn total(&self) -> usize {
        self.insert_dataset()
            + self.list_datasets()
            + self.delete_dataset()
            + self.upsert_time_series()
            + self.list_time_series()
            + self.delete_time_series()
            + self.forecast_status()
            + self.forecasts()
    }
}

/// In-memory transport scripted per endpoint.
pub struct MockTransport {
    insert_dataset_fn: Option<Arc<InsertDatasetFn>>,
    list_datasets_fn: Option<Arc<ListDatasetsFn>>,
    delete_dataset_fn: Option<Arc<DeleteDatasetFn>>,
    upsert_fn: Option<Arc<UpsertFn>>,
    list_series_fn: Option<Arc<ListSeriesFn>>,
    delete_series_fn: Option<Arc<DeleteSeriesFn>>,
    status_fn: Option<Arc<StatusFn>>,
    forecasts_fn: Option<Arc<ForecastsFn>>,
    counts: CallCounts,
}

impl MockTransport {
    /// Start scripting a mock transport.
    #[must_use]
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder::new()
    }

    /// The per-endpoint call counters.
    #[must_use]
    pub fn calls(&self) -> &CallCounts {
        &self.counts
    }

    fn not_scripted(endpoint: &str) -> AugurError {
        AugurError::transport(format!("mock endpoint not scripted: {endpoint}"))
    }
}

#[async_trait]
impl AugurTransport for MockTransport {
    async fn insert_dataset(&self, _identity: &str, dataset: &Dataset) -> Result<Ack, AugurError> {
        self.counts.insert_dataset.fetch_add(1, Ordering::SeqCst);
        match &self.insert_dataset_fn {
            Some(f) => f(dataset),
            None => Err(Self::not_scripted("insert_dataset")),
        }
    }

    async fn list_datasets(
        &self,
        _identity: &str,
        cursor: Option<&str>,
    ) -> Result<DatasetPage, AugurError> {
        self.counts.list_datasets.fetch_add(1, Ordering::SeqCst);
        match &self.list_datasets_fn {
            Some(f) => f(cursor),
            None => Err(Self::not_scripted("list_datasets")),
        }
    }

    async fn delete_dataset(
        &self,
        _identity: &str,
        dataset_name: &str,
    ) -> Result<Ack, AugurError> {
        self.counts.delete_dataset.fetch_add(1, Ordering::SeqCst);
        match &self.delete_dataset_fn {
            Some(f) => f(dataset_name),
            None => Err(Self::not_scripted("delete_dataset")),
        }
    }

    async fn upsert_time_series(
        &self,
        _identity: &str,
        dataset_name: &str,
        series: &[TimeSeries],
        enable_merge: bool,
    ) -> Result<Ack, AugurError> {
        self.counts.upsert_time_series.fetch_add(1, Ordering::SeqCst);
        match &self.upsert_fn {
            Some(f) => f(dataset_name, series, enable_merge),
            None => Err(Self::not_scripted("upsert_time_series")),
        }
    }

    async fn list_time_series(
        &self,
        _identity: &str,
        dataset_name: &str,
        cursor: Option<&str>,
    ) -> Result<SeriesPage, AugurError> {
        self.counts.list_time_series.fetch_add(1, Ordering::SeqCst);
        match &self.list_series_fn {
            Some(f) => f(dataset_name, cursor),
            None => Err(Self::not_scripted("list_time_series")),
        }
    }

    async fn delete_time_series(
        &self,
        _identity: &str,
        dataset_name: &str,
        series_names: &[String],
    ) -> Result<Ack, AugurError> {
        self.counts.delete_time_series.fetch_add(1, Ordering::SeqCst);
        match &self.delete_series_fn {
            Some(f) => f(dataset_name, series_names),
            None => Err(Self::not_scripted("delete_time_series")),
        }
    }

    async fn forecast_status(
        &self,
        _identity: &str,
        dataset_name: &str,
    ) -> Result<ForecastStatus, AugurError> {
        self.counts.forecast_status.fetch_add(1, Ordering::SeqCst);
        match &self.status_fn {
            Some(f) => f(dataset_name),
            None => Err(Self::not_scripted("forecast_status")),
        }
    }

    async fn forecasts(
        &self,
        _identity: &str,
        dataset_name: &str,
        series_names: &[String],
    ) -> Result<ForecastPage, AugurError> {
        self.counts.forecasts.fetch_add(1, Ordering::SeqCst);
        match &self.forecasts_fn {
            Some(f) => f(dataset_name, series_names),
            None => Err(Self::not_scripted("forecasts")),
        }
    }
}

/// Builder scripting a [`MockTransport`] endpoint by endpoint.
#[derive(Default)]
pub struct MockTransportBuilder {
    insert_dataset_fn: Option<Arc<InsertDatasetFn>>,
    list_datasets_fn: Option<Arc<ListDatasetsFn>>,
    delete_dataset_fn: Option<Arc<DeleteDatasetFn>>,
    upsert_fn: Option<Arc<UpsertFn>>,
    list_series_fn: Option<Arc<ListSeriesFn>>,
    delete_series_fn: Option<Arc<DeleteSeriesFn>>,
    status_fn: Option<Arc<StatusFn>>,
    forecasts_fn: Option<Arc<ForecastsFn>>,
}

impl MockTransportBuilder {
    /// A builder with nothing scripted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `insert_dataset` with a closure.
    #[must_use]
    pub fn with_insert_dataset_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Dataset) -> Result<Ack, AugurError> + Send + Sync + 'static,
    {
        self.insert_dataset_fn = Some(Arc::new(f));
        self
    }

    /// `insert_dataset` acknowledges every call.
    #[must_use]
    pub fn returns_insert_dataset_ok(self) -> Self {
        self.with_insert_dataset_fn(|_| Ok(Ack::success()))
    }

    /// Script `list_datasets` with a closure.
    #[must_use]
    pub fn with_list_datasets_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&str>) -> Result<DatasetPage, AugurError> + Send + Sync + 'static,
    {
        self.list_datasets_fn = Some(Arc::new(f));
        self
    }

    /// Serve a fixed chain of dataset pages keyed by continuation cursor.
    ///
    /// The first page answers the empty cursor; each page's own
    /// `continuation` is the key leading to the next. Responses are pure
    /// functions of the cursor, so re-presenting a cursor re-yields the
    /// same page. Unknown cursors fail as a transport error.
    #[must_use]
    pub fn dataset_pages(self, pages: Vec<DatasetPage>) -> Self {
        let by_cursor = page_index(pages, |p| p.continuation.clone());
        self.with_list_datasets_fn(move |cursor| {
            by_cursor
                .get(&cursor.map(str::to_owned))
                .cloned()
                .ok_or_else(|| AugurError::transport(format!("unknown cursor: {cursor:?}")))
        })
    }

    /// Script `delete_dataset` with a closure.
    #[must_use]
    pub fn with_delete_dataset_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<Ack, AugurError> + Send + Sync + 'static,
    {
        self.delete_dataset_fn = Some(Arc::new(f));
        self
    }

    /// `delete_dataset` acknowledges every call.
    #[must_use]
    pub fn returns_delete_dataset_ok(self) -> Self {
        self.with_delete_dataset_fn(|_| Ok(Ack::success()))
    }

    /// Script `upsert_time_series` with a closure.
    #[must_use]
    pub fn with_upsert_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &[TimeSeries], bool) -> Result<Ack, AugurError> + Send + Sync + 'static,
    {
        self.upsert_fn = Some(Arc::new(f));
        self
    }

    /// `upsert_time_series` acknowledges every call.
    #[must_use]
    pub fn returns_upsert_ok(self) -> Self {
        self.with_upsert_fn(|_, _, _| Ok(Ack::success()))
    }

    /// Script `list_time_series` with a closure.
    #[must_use]
    pub fn with_list_series_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<&str>) -> Result<SeriesPage, AugurError> + Send + Sync + 'static,
    {
        self.list_series_fn = Some(Arc::new(f));
        self
    }

    /// Serve a fixed chain of series pages keyed by continuation cursor,
    /// like [`Self::dataset_pages`].
    #[must_use]
    pub fn series_pages(self, pages: Vec<SeriesPage>) -> Self {
        let by_cursor = page_index(pages, |p| p.continuation.clone());
        self.with_list_series_fn(move |_dataset, cursor| {
            by_cursor
                .get(&cursor.map(str::to_owned))
                .cloned()
                .ok_or_else(|| AugurError::transport(format!("unknown cursor: {cursor:?}")))
        })
    }

    /// `list_time_series` answers with the given error codes in order,
    /// repeating the last one once the sequence is exhausted. Pages carry
    /// no items; this scripts the deletion probe loop.
    #[must_use]
    pub fn series_listing_codes(self, codes: Vec<Option<String>>) -> Self {
        let at = AtomicUsize::new(0);
        self.with_list_series_fn(move |_dataset, _cursor| {
            let i = at.fetch_add(1, Ordering::SeqCst);
            let code = codes.get(i).or(codes.last()).cloned().flatten();
            Ok(SeriesPage {
                series: vec![],
                continuation: None,
                error_code: code,
            })
        })
    }

    /// Script `delete_time_series` with a closure.
    #[must_use]
    pub fn with_delete_series_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &[String]) -> Result<Ack, AugurError> + Send + Sync + 'static,
    {
        self.delete_series_fn = Some(Arc::new(f));
        self
    }

    /// `delete_time_series` acknowledges every call.
    #[must_use]
    pub fn returns_delete_series_ok(self) -> Self {
        self.with_delete_series_fn(|_, _| Ok(Ack::success()))
    }

    /// Script `forecast_status` with a closure.
    #[must_use]
    pub fn with_status_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<ForecastStatus, AugurError> + Send + Sync + 'static,
    {
        self.status_fn = Some(Arc::new(f));
        self
    }

    /// `forecast_status` reports the given readiness flags in order,
    /// repeating the last one once the sequence is exhausted.
    #[must_use]
    pub fn status_sequence(self, readiness: Vec<bool>) -> Self {
        let at = AtomicUsize::new(0);
        self.with_status_fn(move |_dataset| {
            let i = at.fetch_add(1, Ordering::SeqCst);
            let ready = readiness.get(i).or(readiness.last()).copied().unwrap_or(true);
            Ok(ForecastStatus {
                ready,
                error_code: None,
            })
        })
    }

    /// `forecast_status` answers every call with the given error code.
    #[must_use]
    pub fn status_code(self, code: impl Into<String>) -> Self {
        let code = code.into();
        self.with_status_fn(move |_dataset| {
            Ok(ForecastStatus {
                ready: false,
                error_code: Some(code.clone()),
            })
        })
    }

    /// Script `forecasts` with a closure.
    #[must_use]
    pub fn with_forecasts_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &[String]) -> Result<ForecastPage, AugurError> + Send + Sync + 'static,
    {
        self.forecasts_fn = Some(Arc::new(f));
        self
    }

    /// `forecasts` serves from the given set, answering each request with
    /// the stored series whose names were asked for (unknown names are
    /// ignored, as the service does).
    #[must_use]
    pub fn returns_forecasts(self, available: Vec<ForecastSeries>) -> Self {
        self.with_forecasts_fn(move |_dataset, names| {
            let series = available
                .iter()
                .filter(|f| names.contains(&f.name))
                .cloned()
                .collect();
            Ok(ForecastPage {
                series,
                error_code: None,
            })
        })
    }

    /// Build the transport, ready to hand to the client as
    /// `Arc<dyn AugurTransport>`.
    #[must_use]
    pub fn build(self) -> Arc<MockTransport> {
        Arc::new(MockTransport {
            insert_dataset_fn: self.insert_dataset_fn,
            list_datasets_fn: self.list_datasets_fn,
            delete_dataset_fn: self.delete_dataset_fn,
            upsert_fn: self.upsert_fn,
            list_series_fn: self.list_series_fn,
            delete_series_fn: self.delete_series_fn,
            status_fn: self.status_fn,
            forecasts_fn: self.forecasts_fn,
            counts: CallCounts::default(),
        })
    }
}

/// Index a page chain by the cursor that leads to each page: the first
/// page is reached with no cursor, every later page through the previous
/// page's continuation.
fn page_index<P>(
    pages: Vec<P>,
    continuation_of: impl Fn(&P) -> Option<String>,
) -> HashMap<Option<String>, P> {
    let mut by_cursor = HashMap::with_capacity(pages.len());
    let mut key: Option<String> = None;
    for page in pages {
        let next = continuation_of(&page).filter(|c| !c.is_empty());
        by_cursor.insert(key, page);
        key = next;
    }
    by_cursor
}
