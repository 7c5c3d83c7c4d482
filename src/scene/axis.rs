//! Shared axis rendering: band and linear axes as shape sequences.

use crate::layout::{BandScale, LinearScale};
use crate::palette::FOREGROUND;
use crate::scene::{Scene, Shape, TextAnchor, format_value};

const TICK_LENGTH: f64 = 6.0;

/// Categorical x-axis along the bottom of the plot area.
///
/// Labels are thinned to every `stride`-th and rotated 45° when `rotate`
/// (narrow containers or long label sets).
pub(crate) fn band_axis_bottom(
    scene: &mut Scene,
    scale: &BandScale,
    labels: &[String],
    left: f64,
    right: f64,
    baseline: f64,
    font_size: f64,
    stride: usize,
    rotate: bool,
) {
    scene.push(Shape::line(left, baseline, right, baseline, FOREGROUND));
    for (i, label) in labels.iter().enumerate() {
        if i % stride.max(1) != 0 {
            continue;
        }
        let x = left + scale.center(i);
        scene.push(Shape::line(x, baseline, x, baseline + TICK_LENGTH, FOREGROUND));
        let text = Shape::text(x, baseline + TICK_LENGTH + font_size + 2.0, label, font_size, FOREGROUND);
        if rotate {
            scene.push(text.anchored(TextAnchor::End).rotated(-45.0));
        } else {
            scene.push(text);
        }
    }
}

/// Numeric y-axis along the left of the plot area, ticks descending in
/// screen space.
pub(crate) fn linear_axis_left(
    scene: &mut Scene,
    scale: &LinearScale,
    left: f64,
    top: f64,
    bottom: f64,
    font_size: f64,
    tick_count: usize,
) {
    scene.push(Shape::line(left, top, left, bottom, FOREGROUND));
    for tick in scale.ticks(tick_count) {
        let y = scale.scale(tick);
        scene.push(Shape::line(left - TICK_LENGTH, y, left, y, FOREGROUND));
        scene.push(
            Shape::text(left - TICK_LENGTH - 2.0, y + font_size / 3.0, format_value(tick), font_size, FOREGROUND)
                .anchored(TextAnchor::End),
        );
    }
}

/// Categorical y-axis (horizontal charts: lollipop, heatmap rows).
pub(crate) fn band_axis_left(
    scene: &mut Scene,
    scale: &BandScale,
    labels: &[String],
    left: f64,
    top: f64,
    bottom: f64,
    font_size: f64,
) {
    scene.push(Shape::line(left, top, left, bottom, FOREGROUND));
    for (i, label) in labels.iter().enumerate() {
        let y = top + scale.center(i);
        scene.push(
            Shape::text(left - TICK_LENGTH - 2.0, y + font_size / 3.0, label, font_size, FOREGROUND)
                .anchored(TextAnchor::End),
        );
    }
}

/// Numeric x-axis along the bottom (horizontal charts).
pub(crate) fn linear_axis_bottom(
    scene: &mut Scene,
    scale: &LinearScale,
    left: f64,
    right: f64,
    baseline: f64,
    font_size: f64,
    tick_count: usize,
) {
    scene.push(Shape::line(left, baseline, right, baseline, FOREGROUND));
    for tick in scale.ticks(tick_count) {
        let x = scale.scale(tick);
        scene.push(Shape::line(x, baseline, x, baseline + TICK_LENGTH, FOREGROUND));
        scene.push(Shape::text(
            x,
            baseline + TICK_LENGTH + font_size + 2.0,
            format_value(tick),
            font_size,
            FOREGROUND,
        ));
    }
}
