//! Pie chart builder.

use crate::constants::{DONUT_INNER_RATIO, RADIAL_MARGIN};
use crate::data::SeriesPoint;
use crate::layout::{FontTier, arc_centroid, pie_spans};
use crate::palette::{ARC_STROKE, FOREGROUND, categorical};
use crate::scene::{Datum, Scene, Shape, TextAnchor, format_value, title_text};
use crate::types::ContainerSize;
use std::f64::consts::PI;

pub fn build(points: &[SeriesPoint], title: &str, size: ContainerSize) -> Scene {
    let width = size.width;
    let height = size.height;
    let fonts = FontTier::for_width(width);

    let mut scene = Scene::new(width, height);
    title_text(&mut scene, title, fonts.title);

    let radius = (width.min(height) / 2.0 - RADIAL_MARGIN).max(0.0);
    let cx = width / 2.0;
    let cy = height / 2.0 + RADIAL_MARGIN / 2.0;

    let total: f64 = points.iter().map(|p| p.value).sum();
    let spans = pie_spans(&points.iter().map(|p| p.value).collect::<Vec<_>>());

    for (i, (point, span)) in points.iter().zip(&spans).enumerate() {
        let fill = categorical(i);
        if span.is_zero() {
            continue;
        }
        scene.push(Shape::Arc {
            cx,
            cy,
            inner_radius: radius * DONUT_INNER_RATIO,
            outer_radius: radius,
            start_angle: span.start,
            end_angle: span.end,
            fill: fill.to_string(),
            stroke: Some(ARC_STROKE.to_string()),
            datum: Some(Datum::new(&point.label, point.value)),
        });

        // Labels sit just outside the rim, anchored toward the slice.
        let (dx, dy) = arc_centroid(*span, radius * 1.05, radius * 1.15);
        let anchor = if span.mid() < PI {
            TextAnchor::Start
        } else {
            TextAnchor::End
        };
        let pct = 100.0 * point.value / total;
        scene.push(
            Shape::text(
                cx + dx,
                cy + dy,
                format!("{} ({}%)", point.label, format_value(pct)),
                fonts.axis,
                FOREGROUND,
            )
            .anchored(anchor),
        );
    }

    // Slice identity lives in the rim labels; an open-ended category set
    // carries no keyed legend.
    scene
}
