//! Domain objects of the forecasting service and the response envelopes
//! returned by the transport.
//!
//! Continuation cursors are opaque: the client presents them back to the
//! service verbatim and never inspects or mutates them. `None` and the
//! empty string both mean "no more pages".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::limits;

/// Aggregation period of a dataset.
///
/// Serializes to the service's lowercase code strings
/// (`"quarterhour"`, `"halfhour"`, `"hour"`, `"day"`, `"week"`, `"month"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Fifteen-minute aggregation.
    QuarterHour,
    /// Thirty-minute aggregation.
    HalfHour,
    /// Hourly aggregation.
    Hour,
    /// Daily aggregation.
    Day,
    /// Weekly aggregation.
    Week,
    /// Monthly aggregation.
    Month,
}

impl Period {
    /// The service's wire code for this period.
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::QuarterHour => "quarterhour",
            Self::HalfHour => "halfhour",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Whether this period belongs to the sub-daily, high-frequency class.
    #[must_use]
    pub const fn is_high_frequency(self) -> bool {
        matches!(self, Self::QuarterHour | Self::HalfHour | Self::Hour)
    }

    /// Largest forecast horizon the service accepts for this period.
    #[must_use]
    pub const fn max_horizon(self) -> u32 {
        if self.is_high_frequency() {
            limits::HIGH_FREQUENCY_MAX_HORIZON
        } else {
            limits::LOW_FREQUENCY_MAX_HORIZON
        }
    }
}

/// A named container of time-series plus its forecasting configuration.
///
/// Datasets are immutable once inserted: changing the period or horizon
/// requires deleting and re-inserting. Deletion completes asynchronously
/// on the service side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset name, unique within the account.
    pub name: String,
    /// Aggregation period of every series in the dataset.
    pub period: Period,
    /// Number of future periods to forecast.
    pub horizon: u32,
}

/// One timestamped observation within a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeValue {
    /// Observation time.
    pub time: DateTime<Utc>,
    /// Observed value.
    pub value: f64,
}

/// A tagged event attached to a series (promotions, outages, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEvent {
    /// Tags qualifying the event; 1 to 100, pairwise distinct.
    pub tags: Vec<String>,
    /// Starting time of the event.
    pub time: DateTime<Utc>,
    /// Time at which the event was first known.
    pub known_since: DateTime<Utc>,
}

/// A named sequence of timestamped values within a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Series name, unique within its dataset.
    pub name: String,
    /// Free-form tags; pairwise distinct.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Events attached to the series.
    #[serde(default)]
    pub events: Vec<SeriesEvent>,
    /// Observations in strictly increasing time order.
    #[serde(default)]
    pub values: Vec<TimeValue>,
}

impl TimeSeries {
    /// A series with the given name and values, no tags, no events.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<TimeValue>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            events: Vec::new(),
            values,
        }
    }
}

/// One forecasted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastValue {
    /// Forecasted period start.
    pub time: DateTime<Utc>,
    /// Forecasted value.
    pub value: f64,
    /// Expected accuracy, in `[0, 1]`.
    pub accuracy: f64,
}

/// Forecasts computed for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    /// Name of the forecasted series.
    pub name: String,
    /// Forecasted points, one per horizon period.
    pub values: Vec<ForecastValue>,
}

/// Bare acknowledgement of a write operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Service-reported failure code; absent or empty on success.
    pub error_code: Option<String>,
}

impl Ack {
    /// A successful acknowledgement.
    #[must_use]
    pub const fn success() -> Self {
        Self { error_code: None }
    }

    /// An acknowledgement carrying a failure code.
    #[must_use]
    pub fn failure(code: impl Into<String>) -> Self {
        Self {
            error_code: Some(code.into()),
        }
    }
}

/// One page of a dataset listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetPage {
    /// Datasets on this page.
    pub datasets: Vec<Dataset>,
    /// Cursor resuming the enumeration; absent or empty when exhausted.
    pub continuation: Option<String>,
    /// Service-reported failure code; absent or empty on success.
    pub error_code: Option<String>,
}

/// One page of a series listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesPage {
    /// Series on this page.
    pub series: Vec<TimeSeries>,
    /// Cursor resuming the enumeration; absent or empty when exhausted.
    pub continuation: Option<String>,
    /// Service-reported failure code; absent or empty on success.
    pub error_code: Option<String>,
}

/// Readiness report of the forecast computation for a dataset.
///
/// The first status request also triggers the computation when it is not
/// already running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastStatus {
    /// Whether forecasts are ready to be fetched.
    pub ready: bool,
    /// Service-reported failure code; absent or empty on success.
    pub error_code: Option<String>,
}

/// Forecasts returned for one batch of series names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPage {
    /// Forecasted series; names absent from the dataset are omitted.
    pub series: Vec<ForecastSeries>,
    /// Service-reported failure code; absent or empty on success.
    pub error_code: Option<String>,
}
