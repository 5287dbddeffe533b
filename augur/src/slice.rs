//! Batch planning for size-limited service calls.
//!
//! The service caps request payloads at a fixed size that the client
//! approximates by value count rather than measured bytes. Rather
//! than reasoning about corner cases near the ceiling, uploads are split
//! into three tiers by series size and each tier is windowed with its own
//! batch length.

use augur_core::{AugurConfig, TimeSeries, limits};

/// Plan the upload batches for a collection of series.
///
/// Series above [`limits::VERY_LARGE_SERIES_VALUES`] values ship one per
/// request, series above [`limits::LARGE_SERIES_VALUES`] in windows of
/// `mid_slice_len`, the rest in windows of `slice_len`. Batches come back
/// in dispatch order (very-large, large, small), each tier windowed over
/// consecutive input positions so concatenating a tier's batches
/// reproduces that tier in input order. The ordering is not required by
/// the service but keeps dispatch deterministic.
pub(crate) fn upsert_batches<'a>(
    series: &'a [TimeSeries],
    cfg: &AugurConfig,
) -> Vec<Vec<&'a TimeSeries>> {
    let mut very_large: Vec<&TimeSeries> = Vec::new();
    let mut large: Vec<&TimeSeries> = Vec::new();
    let mut small: Vec<&TimeSeries> = Vec::new();

    for serie in series {
        if serie.values.len() > limits::VERY_LARGE_SERIES_VALUES {
            very_large.push(serie);
        } else if serie.values.len() > limits::LARGE_SERIES_VALUES {
            large.push(serie);
        } else {
            small.push(serie);
        }
    }

    let mut batches = Vec::new();
    batches.extend(very_large.chunks(1).map(<[_]>::to_vec));
    batches.extend(large.chunks(cfg.mid_slice_len).map(<[_]>::to_vec));
    batches.extend(small.chunks(cfg.slice_len).map(<[_]>::to_vec));
    batches
}
