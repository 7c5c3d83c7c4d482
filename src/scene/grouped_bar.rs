//! Grouped bar chart builder: side-by-side secondary bars within each
//! primary category band.

use crate::constants::{BAND_PADDING, GROUP_INNER_PADDING, LEGEND_WIDTH, Y_TICK_COUNT};
use crate::data::NestedCounts;
use crate::layout::{BandScale, FontTier, LinearScale, label_stride};
use crate::palette::categorical;
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

    let x0 = BandScale::new(nested.primaries.len(), 0.0, inner_width, BAND_PADDING, BAND_PADDING / 2.0);
    let x1 = BandScale::new(
        nested.secondaries.len(),
        0.0,
        x0.bandwidth(),
        GROUP_INNER_PADDING,
        0.0,
    );
    let y_max = nested.max_count().max(1) as f64;
    let y = LinearScale::new(0.0, y_max, plot_bottom, top).nice(Y_TICK_COUNT);

    for (p, primary) in nested.primaries.iter().enumerate() {
        let band_x = left + x0.position(p);
        for (s, secondary) in nested.secondaries.iter().enumerate() {
            let count = nested.count(p, s);
            if count == 0 {
                continue;
            }
            let bar_top = y.scale(count as f64);
            scene.push(
                Shape::rect(
                    band_x + x1.position(s),
                    bar_top,
                    x1.bandwidth(),
                    plot_bottom - bar_top,
                    categorical(s),
                )
                .with_datum(Datum::new(format!("{primary} / {secondary}"), count as f64)),
            );
        }
    }

    let stride = label_stride(nested.primaries.len(), inner_width);
    crate::scene::band_axis_bottom(
        &mut scene,
        &x0,
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
