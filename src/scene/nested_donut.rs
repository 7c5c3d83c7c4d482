//! Nested donut builder: a category ring with its subcategory breakdown in
//! an outer ring, both partitioned over the same full circle.

use crate::constants::{DONUT_INNER_RATIO, DONUT_MIDDLE_RATIO, RADIAL_MARGIN};
use crate::layout::{FontTier, arc_centroid, partition_two_level};
use crate::palette::{ARC_STROKE, FOREGROUND, categorical};
use crate::scene::{Datum, Scene, Shape};
use crate::data::NestedCounts;
use crate::types::ContainerSize;
use std::f64::consts::PI;

pub fn build(nested: &NestedCounts, title: &str, size: ContainerSize) -> Scene {
    let width = size.width;
    let height = size.height;
    let fonts = FontTier::for_width(width);

    let mut scene = Scene::new(width, height);

    let radius = (width.min(height) / 2.0 - RADIAL_MARGIN).max(0.0);
    let cx = width / 2.0;
    let cy = height / 2.0;

    let arcs = partition_two_level(nested);
    for arc in &arcs {
        let (inner_radius, outer_radius) = match arc.depth {
            1 => (radius * DONUT_INNER_RATIO, radius * DONUT_MIDDLE_RATIO),
            _ => (radius * DONUT_MIDDLE_RATIO, radius),
        };
        let fill = categorical(arc.index);
        if arc.span.is_zero() {
            continue;
        }
        scene.push(Shape::Arc {
            cx,
            cy,
            inner_radius,
            outer_radius,
            start_angle: arc.span.start,
            end_angle: arc.span.end,
            fill: fill.to_string(),
            stroke: Some(ARC_STROKE.to_string()),
            datum: Some(Datum::new(&arc.label, arc.value as f64)),
        });

        // Ring labels rotate with the mid angle so text follows the arc.
        // Slices too thin to hold a label stay unlabeled.
        let sweep = arc.span.end - arc.span.start;
        if sweep * (inner_radius + outer_radius) / 2.0 > 40.0 {
            let (dx, dy) = arc_centroid(arc.span, inner_radius, outer_radius);
            let mid = arc.span.mid();
            // Keep text upright on the left half of the circle.
            let mut degrees = mid.to_degrees() - 90.0;
            if mid > PI / 2.0 && mid < 3.0 * PI / 2.0 {
                degrees += 180.0;
            }
            scene.push(
                Shape::text(
                    cx + dx,
                    cy + dy,
                    format!("{} ({})", arc.label, arc.value),
                    fonts.axis,
                    FOREGROUND,
                )
                .rotated(degrees),
            );
        }
    }

    // The title sits in the donut hole instead of the top edge.
    if !title.is_empty() {
        scene.title = Some(title.to_string());
        scene.push(Shape::text(cx, cy, title, fonts.title, FOREGROUND));
    }

    // Ring labels identify every arc; an open-ended category set carries
    // no keyed legend.
    scene
}
