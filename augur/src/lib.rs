//! Augur talks to a remote time-series forecasting service on behalf of an
//! application: it stores series, triggers forecast computation, and
//! retrieves results.
//!
//! Overview
//! - Validates every input against the service's structural constraints
//!   before the first network call.
//! - Slices large collections into batches sized to the service's payload
//!   ceiling, with a three-tier policy for uploads.
//! - Follows continuation cursors so callers see complete listings instead
//!   of pages.
//! - Polls asynchronous operations (forecast computation, dataset
//!   deletion) until they complete, with optional deadlines.
//! - Maps the service's failure codes onto the [`AugurError`] taxonomy.
//!
//! Key behaviors and trade-offs
//! - Batches are dispatched sequentially, at most one request in flight
//!   per call. That forgoes throughput but stays clear of the service's
//!   per-account concurrency limits.
//! - A failing batch aborts the remaining ones; batches already accepted
//!   are not rolled back. Multi-batch writes are at-least-once, not
//!   transactional.
//! - This layer never retries. Transient failures are marked
//!   ([`AugurError::is_transient`]) and retry policy belongs to the
//!   caller.
//! - The blocking waits have no built-in upper bound unless
//!   [`AugurBuilder::wait_timeout`] sets one; the service does not bound
//!   deletion or computation latency, and the client does not pretend
//!   otherwise.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use augur::{Augur, Dataset, Period, TimeSeries};
//!
//! let client = Augur::builder()
//!     .transport(Arc::new(transport))
//!     .identity("base64-credential")
//!     .build()?;
//!
//! client.insert_dataset(&Dataset {
//!     name: "sales".into(),
//!     period: Period::Week,
//!     horizon: 8,
//! }).await?;
//!
//! client.upsert_time_series("sales", &series, true).await?;
//! let forecasts = client.get_forecasts("sales", &names).await?;
//! ```
//!
//! See `augur/examples/` for runnable end-to-end demonstrations against
//! the mock transport.
#![warn(missing_docs)]

mod client;
mod ops;
mod paging;
mod poll;
mod slice;

pub use client::{Augur, AugurBuilder};

// Re-export core types for convenience
pub use augur_core::{
    Ack, AugurConfig, AugurError, AugurTransport, Dataset, DatasetPage, ForecastPage,
    ForecastSeries, ForecastStatus, ForecastValue, Period, SeriesEvent, SeriesPage, TimeSeries,
    TimeValue, check_code,
};
