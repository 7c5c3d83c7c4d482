//! Post-aggregation cleanup: merging negligible groups into synthetic
//! buckets, disambiguating colliding short names, and label utilities.

use crate::data::aggregate::{ModuleAggregation, ModuleStats};
use std::collections::HashMap;

/// A label/value pair, the common currency of the chart builders.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Merge slices at or below `threshold` into a trailing "Other" slice.
///
/// The "Other" slice is appended only when the merged sum is positive, so
/// re-running on an already bucketed series is a no-op.
pub fn merge_small_slices(points: Vec<SeriesPoint>, threshold: f64) -> Vec<SeriesPoint> {
    let mut kept = Vec::with_capacity(points.len());
    let mut other = 0.0;
    for point in points {
        if point.value <= threshold {
            other += point.value;
        } else {
            kept.push(point);
        }
    }
    if other > 0.0 {
        kept.push(SeriesPoint::new("Other", other));
    }
    kept
}

/// Merge items whose metric is exactly zero into a synthetic bucket placed
/// FIRST in the sequence. Zero is the worst case and gets visual priority;
/// grouping avoids a wall of empty bars.
pub fn bucket_zeros<T, F, M>(items: Vec<T>, metric: F, make_bucket: M) -> Vec<T>
where
    F: Fn(&T) -> f64,
    M: FnOnce(&[T]) -> T,
{
    let mut zeros = Vec::new();
    let mut rest = Vec::with_capacity(items.len());
    for item in items {
        if metric(&item) == 0.0 {
            zeros.push(item);
        } else {
            rest.push(item);
        }
    }
    if !zeros.is_empty() {
        rest.insert(0, make_bucket(&zeros));
    }
    rest
}

/// Zero-coverage module bucketing: modules whose lines% mean is 0 (or
/// unmeasurable) collapse into a leading "Others" entry with severity forced
/// High. A dataset without a lines% column is returned unchanged.
pub fn bucket_zero_coverage(aggregation: ModuleAggregation) -> Vec<ModuleStats> {
    if aggregation.lines_column.is_none() {
        return aggregation.stats;
    }
    bucket_zeros(
        aggregation.stats,
        |stats| stats.avg_lines.unwrap_or(0.0),
        |zeros| ModuleStats::others_bucket(zeros.iter().map(|z| z.count).sum()),
    )
}

/// Display labels with short-name collisions resolved.
///
/// Items whose short name is unique use it; every member of a colliding set
/// falls back to its full name. Computed in a single frequency-counting pass
/// before any label is emitted.
pub fn disambiguated_labels<T, F>(items: &[T], name: F) -> Vec<String>
where
    F: for<'a> Fn(&'a T) -> (&'a str, &'a str),
{
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for item in items {
        let (_, short) = name(item);
        *frequency.entry(short).or_insert(0) += 1;
    }
    items
        .iter()
        .map(|item| {
            let (full, short) = name(item);
            if frequency[short] > 1 { full } else { short }.to_string()
        })
        .collect()
}

/// Each value's share of the series total, in percent.
///
/// A zero (or negative) total yields all-zero contributions rather than a
/// division by zero; a positive total's contributions sum to 100.
pub fn percent_of_total(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total > 0.0 {
        values.iter().map(|v| 100.0 * v / total).collect()
    } else {
        vec![0.0; values.len()]
    }
}

/// Word-wrap a legend label into lines of at most `max_chars` characters.
/// A single word longer than the budget gets its own line.
pub fn wrap_label(label: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in label.split_whitespace() {
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if candidate_len > max_chars && !current.is_empty() {
            lines.push(current);
            current = word.to_string();
        } else if current.is_empty() {
            current = word.to_string();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
