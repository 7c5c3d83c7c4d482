//! Lollipop chart builder: each module's contribution to the total
//! coverage, drawn as a horizontal stem ending in a dot.

use crate::constants::{LOLLIPOP_BAND_PADDING, LOLLIPOP_DOT_RADIUS, Y_TICK_COUNT};
use crate::layout::{BandScale, FontTier, LinearScale};
use crate::palette::{FOREGROUND, LOLLIPOP_STEM, categorical};
use crate::scene::{Datum, Scene, Shape, TextAnchor, title_text};
use crate::types::ContainerSize;

/// One lollipop row, already sorted by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct LollipopEntry {
    pub module: String,
    pub label: String,
    /// Percent of the total coverage mass.
    pub contribution: f64,
}

/// Axis maximum for a contribution axis: the data maximum plus a 5% (at
/// least 2 point) headroom, rounded up to one decimal, capped at 100.
pub fn contribution_axis_max(max_contribution: f64) -> f64 {
    let padded = max_contribution + (max_contribution * 0.05).max(2.0);
    ((padded * 10.0).ceil() / 10.0).min(100.0)
}

pub fn build(entries: &[LollipopEntry], title: &str, size: ContainerSize) -> Scene {
    let width = size.width;
    let height = size.height;
    let fonts = FontTier::for_width(width);

    let mut scene = Scene::new(width, height);
    title_text(&mut scene, title, fonts.title);

    let top = 60.0;
    let right = 40.0;
    let bottom = 60.0;
    let left = 120.0;
    let inner_height = (height - top - bottom).max(0.0);
    let plot_bottom = height - bottom;

    let y = BandScale::new(entries.len(), 0.0, inner_height, LOLLIPOP_BAND_PADDING, 0.0);
    let max_contribution = entries.iter().map(|e| e.contribution).fold(0.0, f64::max);
    let x = LinearScale::new(0.0, contribution_axis_max(max_contribution), left, width - right);

    for (i, entry) in entries.iter().enumerate() {
        let cy = top + y.center(i);
        let dot_x = x.scale(entry.contribution);
        scene.push(Shape::line(x.scale(0.0), cy, dot_x, cy, LOLLIPOP_STEM));
        scene.push(
            Shape::circle(dot_x, cy, LOLLIPOP_DOT_RADIUS, categorical(i))
                .with_datum(Datum::new(&entry.module, entry.contribution)),
        );
        scene.push(
            Shape::text(
                dot_x + LOLLIPOP_DOT_RADIUS + 4.0,
                cy + fonts.value / 3.0,
                format!("{:.1}%", entry.contribution),
                fonts.value,
                FOREGROUND,
            )
            .anchored(TextAnchor::Start),
        );
    }

    let labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();
    crate::scene::band_axis_left(&mut scene, &y, &labels, left, top, plot_bottom, fonts.axis);
    crate::scene::linear_axis_bottom(
        &mut scene,
        &x,
        left,
        width - right,
        plot_bottom,
        fonts.axis,
        Y_TICK_COUNT,
    );

    scene
}
