use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

#[cfg(feature = "parallel-aggregation")]
use rayon::prelude::*;

use crate::core::{DataPoint, XYSource};
use crate::error::{PlotError, PlotResult};

/// Per-bucket lower and upper bounds of an aggregated trace.
///
/// `mins[i]` and `maxes[i]` always share the same `x` (the first sample of
/// bucket `i`) and `mins[i].y <= maxes[i].y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub mins: Vec<DataPoint>,
    pub maxes: Vec<DataPoint>,
}

impl Envelope {
    #[must_use]
    pub fn len(&self) -> usize {
        self.maxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maxes.is_empty()
    }

    /// Closed outline: upper bound left-to-right, then lower bound right-to-left.
    #[must_use]
    pub fn polygon_ring(&self) -> Vec<DataPoint> {
        let mut ring = Vec::with_capacity(self.maxes.len() + self.mins.len());
        ring.extend_from_slice(&self.maxes);
        ring.extend(self.mins.iter().rev().copied());
        ring
    }
}

/// Number of consecutive samples folded into one bucket: `ceil(len / bucket_target)`.
#[must_use]
pub fn bucket_len(source_len: usize, bucket_target: usize) -> usize {
    if bucket_target == 0 {
        return 0;
    }
    source_len.div_ceil(bucket_target)
}

/// Number of buckets produced for `source_len` samples; never exceeds `bucket_target`.
#[must_use]
pub fn bucket_count(source_len: usize, bucket_target: usize) -> usize {
    let run = bucket_len(source_len, bucket_target);
    if run == 0 {
        return 0;
    }
    source_len.div_ceil(run)
}

fn validate_aggregate_input<S: XYSource + ?Sized>(
    source: &S,
    bucket_target: usize,
) -> PlotResult<usize> {
    if bucket_target == 0 {
        return Err(PlotError::InvalidBucketCount);
    }
    if source.is_empty() {
        return Err(PlotError::EmptySource);
    }
    Ok(bucket_len(source.len(), bucket_target))
}

fn bucket_extrema<S: XYSource + ?Sized>(
    source: &S,
    start: usize,
    end: usize,
) -> (DataPoint, DataPoint) {
    let first = source.xy(start);
    let mut low = OrderedFloat(first.y);
    let mut high = low;
    for index in (start + 1)..end {
        let y = OrderedFloat(source.xy(index).y);
        low = low.min(y);
        high = high.max(y);
    }

    (
        DataPoint::new(first.x, low.into_inner()),
        DataPoint::new(first.x, high.into_inner()),
    )
}

/// Folds `source` into pixel-column buckets of `ceil(len / bucket_target)`
/// samples each and records every bucket's y extrema.
///
/// Buckets are contiguous index runs; only the last one may be shorter. The
/// x of each bucket is the x of its first sample.
///
/// An empty source or a zero `bucket_target` is rejected.
pub fn aggregate<S: XYSource + ?Sized>(source: &S, bucket_target: usize) -> PlotResult<Envelope> {
    let run = validate_aggregate_input(source, bucket_target)?;
    let len = source.len();
    let buckets = len.div_ceil(run);

    trace!(len, bucket_target, run, buckets, "aggregate trace");

    let mut mins = Vec::with_capacity(buckets);
    let mut maxes = Vec::with_capacity(buckets);
    let mut start = 0;
    while start < len {
        let end = (start + run).min(len);
        let (low, high) = bucket_extrema(source, start, end);
        mins.push(low);
        maxes.push(high);
        start = end;
    }

    Ok(Envelope { mins, maxes })
}

/// Same output as [`aggregate`], with buckets reduced on the rayon pool.
#[cfg(feature = "parallel-aggregation")]
pub fn aggregate_parallel<S: XYSource + Sync + ?Sized>(
    source: &S,
    bucket_target: usize,
) -> PlotResult<Envelope> {
    let run = validate_aggregate_input(source, bucket_target)?;
    let len = source.len();
    let buckets = len.div_ceil(run);

    trace!(len, bucket_target, run, buckets, "aggregate trace (parallel)");

    let (mins, maxes): (Vec<DataPoint>, Vec<DataPoint>) = (0..buckets)
        .into_par_iter()
        .map(|bucket| {
            let start = bucket * run;
            bucket_extrema(source, start, (start + run).min(len))
        })
        .unzip();

    Ok(Envelope { mins, maxes })
}
