//! Client-side validation gate.
//!
//! Mirrors the structural constraints the service enforces so that
//! non-compliant inputs are rejected before any network call. All checks
//! are pure, fail fast on the first violation, and never mutate their
//! input. The distinctness scans are quadratic, which is fine under the
//! 100-item ceilings.

use crate::error::AugurError;
use crate::limits;
use crate::types::{Dataset, TimeSeries};

/// Whether `name` is a valid dataset, series, or tag name.
///
/// Valid names are non-empty, at most 32 characters, ASCII letters and
/// digits only.
#[must_use]
pub fn is_valid_api_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= limits::MAX_NAME_LEN
        && name.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Check a dataset against the service's constraints.
///
/// # Errors
/// Returns [`AugurError::InvalidArg`] if the name is not a valid API name
/// or the horizon falls outside the period's accepted range.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), AugurError> {
    if !is_valid_api_name(&dataset.name) {
        return Err(AugurError::invalid_arg(format!(
            "{:?} is not a valid dataset name",
            dataset.name
        )));
    }

    let max = dataset.period.max_horizon();
    if dataset.horizon == 0 || dataset.horizon > max {
        return Err(AugurError::invalid_arg(format!(
            "horizon should be comprised between 1 and {} for {} datasets",
            max,
            dataset.period.as_code()
        )));
    }

    Ok(())
}

/// Check a time-series against the service's constraints.
///
/// Checks, in order: name, tag count and validity and pairwise
/// distinctness, event count and each event's own tag set, value count,
/// strictly increasing timestamps.
///
/// # Errors
/// Returns [`AugurError::InvalidArg`] describing the first violation.
pub fn validate_series(series: &TimeSeries) -> Result<(), AugurError> {
    if !is_valid_api_name(&series.name) {
        return Err(AugurError::invalid_arg(format!(
            "{:?} is not a valid series name",
            series.name
        )));
    }

    if series.tags.len() > limits::MAX_TAGS_PER_SERIES {
        return Err(AugurError::invalid_arg(format!(
            "no more than {} tags per series",
            limits::MAX_TAGS_PER_SERIES
        )));
    }
    validate_tags(&series.tags, "series")?;

    if series.events.len() > limits::MAX_EVENTS_PER_SERIES {
        return Err(AugurError::invalid_arg(format!(
            "no more than {} events per series",
            limits::MAX_EVENTS_PER_SERIES
        )));
    }
    for event in &series.events {
        if event.tags.is_empty() || event.tags.len() > limits::MAX_TAGS_PER_EVENT {
            return Err(AugurError::invalid_arg(format!(
                "events carry 1 to {} tags",
                limits::MAX_TAGS_PER_EVENT
            )));
        }
        validate_tags(&event.tags, "event")?;
    }

    if series.values.len() > limits::MAX_VALUES_PER_SERIES {
        return Err(AugurError::invalid_arg(format!(
            "no more than {} time-values per series",
            limits::MAX_VALUES_PER_SERIES
        )));
    }
    for pair in series.values.windows(2) {
        if pair[1].time <= pair[0].time {
            return Err(AugurError::invalid_arg(
                "time-values are not in strictly increasing time order",
            ));
        }
    }

    Ok(())
}

/// Check a dataset name and a batch of series names targeted together.
///
/// Every name must be a valid API name and the series names must be
/// pairwise distinct within the batch.
///
/// # Errors
/// Returns [`AugurError::InvalidArg`] describing the first violation.
pub fn validate_series_names<S: AsRef<str>>(
    dataset_name: &str,
    series_names: &[S],
) -> Result<(), AugurError> {
    if !is_valid_api_name(dataset_name) {
        return Err(AugurError::invalid_arg(format!(
            "{dataset_name:?} is not a valid dataset name"
        )));
    }

    for name in series_names {
        if !is_valid_api_name(name.as_ref()) {
            return Err(AugurError::invalid_arg(format!(
                "{:?} is not a valid series name",
                name.as_ref()
            )));
        }
    }

    for (i, a) in series_names.iter().enumerate() {
        for b in &series_names[i + 1..] {
            if a.as_ref() == b.as_ref() {
                return Err(AugurError::invalid_arg(format!(
                    "series names are expected to be distinct, {:?} appears twice",
                    a.as_ref()
                )));
            }
        }
    }

    Ok(())
}

fn validate_tags(tags: &[String], scope: &str) -> Result<(), AugurError> {
    for tag in tags {
        if !is_valid_api_name(tag) {
            return Err(AugurError::invalid_arg(format!(
                "{tag:?} is not a valid tag"
            )));
        }
    }

    for (i, a) in tags.iter().enumerate() {
        if tags[i + 1..].contains(a) {
            return Err(AugurError::invalid_arg(format!(
                "all tags should be distinct within one {scope}, {a:?} appears twice"
            )));
        }
    }

    Ok(())
}
