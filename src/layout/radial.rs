//! Radial layout: pie/donut angle assignment and the two-level partition
//! used by the nested donut.
//!
//! Angles are in radians, measured clockwise from 12 o'clock over a full
//! `[0, 2π]` turn.

use crate::data::NestedCounts;
use std::f64::consts::PI;

/// Angular span of one slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub end: f64,
}

impl ArcSpan {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn is_zero(&self) -> bool {
        self.end <= self.start
    }
}

/// Proportional angular spans for a value series, in series order.
///
/// A non-positive total produces all-zero spans instead of NaN angles; zero
/// values within a positive series get zero-width spans at their running
/// position.
pub fn pie_spans(values: &[f64]) -> Vec<ArcSpan> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return values.iter().map(|_| ArcSpan::new(0.0, 0.0)).collect();
    }
    let mut angle = 0.0;
    values
        .iter()
        .map(|value| {
            let start = angle;
            angle += 2.0 * PI * value / total;
            ArcSpan::new(start, angle)
        })
        .collect()
}

/// Center point of an annular slice, for label anchoring.
///
/// The span's zero angle points up, so the mid angle is rotated back a
/// quarter turn before projecting onto the mid radius.
pub fn arc_centroid(span: ArcSpan, inner_radius: f64, outer_radius: f64) -> (f64, f64) {
    let radius = (inner_radius + outer_radius) / 2.0;
    let angle = span.mid() - PI / 2.0;
    (angle.cos() * radius, angle.sin() * radius)
}

/// One arc of the two-level partition.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionArc {
    pub label: String,
    /// 1 = primary ring, 2 = secondary ring.
    pub depth: usize,
    pub value: usize,
    /// Position within the ring, for palette cycling.
    pub index: usize,
    pub span: ArcSpan,
}

/// Lay out a two-level hierarchy over the full circle.
///
/// Primaries are sorted by total descending, secondaries within each primary
/// by count descending. Each secondary ring subdivides exactly its parent's
/// span. Arcs come out in pre-order (parent, then its children), so painting
/// in sequence layers correctly.
pub fn partition_two_level(nested: &NestedCounts) -> Vec<PartitionArc> {
    let total = nested.total();
    if total == 0 {
        return Vec::new();
    }

    let mut primary_order: Vec<usize> = (0..nested.primaries.len()).collect();
    primary_order.sort_by(|&a, &b| nested.primary_total(b).cmp(&nested.primary_total(a)));

    let mut arcs = Vec::new();
    let mut angle = 0.0;
    let mut leaf_index = 0;
    for (ring_index, &p) in primary_order.iter().enumerate() {
        let primary_total = nested.primary_total(p);
        let start = angle;
        angle += 2.0 * PI * primary_total as f64 / total as f64;
        arcs.push(PartitionArc {
            label: nested.primaries[p].clone(),
            depth: 1,
            value: primary_total,
            index: ring_index,
            span: ArcSpan::new(start, angle),
        });

        let mut secondary_order: Vec<usize> = (0..nested.secondaries.len()).collect();
        secondary_order.sort_by(|&a, &b| nested.count(p, b).cmp(&nested.count(p, a)));

        let mut inner = start;
        for &s in &secondary_order {
            let count = nested.count(p, s);
            let leaf_start = inner;
            if primary_total > 0 {
                inner += (angle - start) * count as f64 / primary_total as f64;
            }
            arcs.push(PartitionArc {
                label: nested.secondaries[s].clone(),
                depth: 2,
                value: count,
                index: leaf_index,
                span: ArcSpan::new(leaf_start, inner),
            });
            leaf_index += 1;
        }
    }
    arcs
}
