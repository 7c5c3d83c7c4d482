//! Stacked bar chart builder: one stack per primary category, segments in
//! secondary insertion order from the baseline up, with a per-stack total
//! label and a wrapped side legend.

use crate::constants::{BAND_PADDING, LEGEND_WIDTH, Y_TICK_COUNT};
use crate::data::NestedCounts;
use crate::layout::{BandScale, FontTier, LinearScale, label_stride};
use crate::palette::{FOREGROUND, categorical};
use crate::scene::{Datum, LegendEntry, Scene, Shape, side_legend, title_text};
use crate::types::ContainerSize;

pub fn build(nested: &NestedCounts, title: &str, size: ContainerSize) -> Scene {
    let width = size.width;
    let height = size.height;
    let fonts = FontTier::for_width(width);

    let mut scene = Scene::new(width, height);
    title_text(&mut scene, title, fonts.title);

    let top = 50.0;
    let right = LEGEND_WIDTH + 80.0;
    let bottom = 100.0;
    let left = 60.0;
    let inner_width = (width - left - right).max(0.0);
    let plot_bottom = height - bottom;

    let x = BandScale::new(nested.primaries.len(), 0.0, inner_width, BAND_PADDING, BAND_PADDING / 2.0);
    let y_max = nested.max_primary_total().max(1) as f64;
    let y = LinearScale::new(0.0, y_max, plot_bottom, top).nice(Y_TICK_COUNT);

    for (p, primary) in nested.primaries.iter().enumerate() {
        let bar_x = left + x.position(p);
        let mut cumulative = 0usize;
        for (s, secondary) in nested.secondaries.iter().enumerate() {
            let count = nested.count(p, s);
            if count == 0 {
                continue;
            }
            let y0 = y.scale(cumulative as f64);
            let y1 = y.scale((cumulative + count) as f64);
            scene.push(
                Shape::rect(bar_x, y1, x.bandwidth(), y0 - y1, categorical(s))
                    .with_datum(Datum::new(format!("{primary} / {secondary}"), count as f64)),
            );
            cumulative += count;
        }

        let total = nested.primary_total(p);
        if total > 0 {
            scene.push(Shape::text(
                bar_x + x.bandwidth() / 2.0,
                y.scale(total as f64) - 5.0,
                total.to_string(),
                fonts.value,
                FOREGROUND,
            ));
        }
    }

    let stride = label_stride(nested.primaries.len(), inner_width);
    crate::scene::band_axis_bottom(
        &mut scene,
        &x,
        &nested.primaries,
        left,
        width - right,
        plot_bottom,
        fonts.axis,
        stride,
        nested.primaries.len() > 6,
    );
    crate::scene::linear_axis_left(&mut scene, &y, left, top, plot_bottom, fonts.axis, Y_TICK_COUNT);

    let entries: Vec<LegendEntry> = nested
        .secondaries
        .iter()
        .enumerate()
        .map(|(s, label)| LegendEntry::new(label, categorical(s)))
        .collect();
    side_legend(&mut scene, entries, width - LEGEND_WIDTH + 10.0, top, fonts.axis);

    scene
}
