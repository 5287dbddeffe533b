//! Hard limits enforced by the forecasting service.
//!
//! These bounds are part of the service contract; the validation gate
//! rejects inputs that exceed them before any network call is made.

/// Maximum length of dataset, series, and tag names.
pub const MAX_NAME_LEN: usize = 32;

/// Maximum number of tags carried by one time-series.
pub const MAX_TAGS_PER_SERIES: usize = 100;

/// Maximum number of events carried by one time-series.
pub const MAX_EVENTS_PER_SERIES: usize = 100;

/// Maximum number of tags carried by one event (at least one is required).
pub const MAX_TAGS_PER_EVENT: usize = 100;

/// Maximum number of time-values carried by one time-series.
pub const MAX_VALUES_PER_SERIES: usize = 65_536;

/// Series with more values than this are grouped in the mid-size upload tier.
pub const LARGE_SERIES_VALUES: usize = 1_000;

/// Series with more values than this are uploaded one per request.
pub const VERY_LARGE_SERIES_VALUES: usize = 10_000;

/// Horizon ceiling for quarter-hour, half-hour, and hourly datasets.
pub const HIGH_FREQUENCY_MAX_HORIZON: u32 = 10_000;

/// Horizon ceiling for daily, weekly, and monthly datasets.
pub const LOW_FREQUENCY_MAX_HORIZON: u32 = 100;
