//! Vertical bar chart builder.
//!
//! Serves all three bar modes: category counts, severity-colored module
//! coverage, and modules-per-severity. The caller supplies fully resolved
//! bars (label, value, fill); this module owns only geometry.

use crate::constants::{
    BAND_PADDING, NARROW_LABEL_LIMIT, SPARSE_BAND_PADDING, SPARSE_CATEGORY_LIMIT, Y_TICK_COUNT,
};
use crate::layout::{BandScale, Breakpoint, FontTier, LinearScale, bar_margins, label_stride, min_chart_height};
use crate::palette::FOREGROUND;
use crate::scene::{Datum, Legend, LegendEntry, Scene, Shape, TextAnchor, format_value, title_text};
use crate::types::{ContainerSize, Severity};

/// One resolved bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    pub fill: String,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64, fill: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            fill: fill.into(),
        }
    }
}

/// How bar value labels are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueFormat {
    #[default]
    Count,
    Percent,
}

impl ValueFormat {
    fn format(&self, value: f64) -> String {
        match self {
            Self::Count => format_value(value),
            Self::Percent => format!("{}%", format_value(value)),
        }
    }
}

/// Presentation knobs resolved by the engine from the bar mode.
#[derive(Clone, Debug, Default)]
pub struct BarStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub show_value_labels: bool,
    pub value_format: ValueFormat,
    /// Fixed y-axis maximum (percent axes pin to 100); data maximum
    /// otherwise.
    pub y_max: Option<f64>,
    /// Attach the High/Medium/Low severity legend.
    pub severity_legend: bool,
}

pub fn build(bars: &[BarDatum], style: &BarStyle, size: ContainerSize) -> Scene {
    let width = size.width;
    let height = min_chart_height(width, size.height);
    let narrow = Breakpoint::classify(width) == Breakpoint::Narrow;

    let mut margins = bar_margins(width);
    if narrow && bars.len() > NARROW_LABEL_LIMIT {
        margins.bottom += 30.0;
    }
    let fonts = FontTier::for_width(width);

    let mut scene = Scene::new(width, height);
    title_text(&mut scene, &style.title, fonts.title);

    let inner_width = margins.inner_width(width);
    let inner_height = margins.inner_height(height);
    let plot_bottom = height - margins.bottom;

    // Very few categories get wider padding so single bars don't fill the
    // plot edge to edge.
    let padding = if bars.len() <= SPARSE_CATEGORY_LIMIT {
        SPARSE_BAND_PADDING
    } else {
        BAND_PADDING
    };
    let x = BandScale::new(bars.len(), 0.0, inner_width, padding, padding / 2.0);

    let data_max = bars.iter().map(|b| b.value).fold(0.0, f64::max);
    let y_max = style.y_max.unwrap_or(data_max).max(1.0);
    let y = LinearScale::new(0.0, y_max, plot_bottom, margins.top).nice(Y_TICK_COUNT);

    for (i, bar) in bars.iter().enumerate() {
        let bar_x = margins.left + x.position(i);
        let bar_top = y.scale(bar.value);
        scene.push(
            Shape::rect(bar_x, bar_top, x.bandwidth(), plot_bottom - bar_top, &bar.fill)
                .with_datum(Datum::new(&bar.label, bar.value)),
        );
        // Zero bars get no value label; the empty column is the message.
        if style.show_value_labels && bar.value > 0.0 {
            scene.push(Shape::text(
                bar_x + x.bandwidth() / 2.0,
                bar_top - 5.0,
                style.value_format.format(bar.value),
                fonts.value,
                FOREGROUND,
            ));
        }
    }

    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
    let stride = label_stride(labels.len(), inner_width);
    let rotate = narrow || labels.len() > NARROW_LABEL_LIMIT;
    crate::scene::band_axis_bottom(
        &mut scene,
        &x,
        &labels,
        margins.left,
        width - margins.right,
        plot_bottom,
        fonts.axis,
        stride,
        rotate,
    );
    crate::scene::linear_axis_left(
        &mut scene,
        &y,
        margins.left,
        margins.top,
        plot_bottom,
        fonts.axis,
        Y_TICK_COUNT,
    );

    if !style.x_label.is_empty() {
        scene.x_label = Some(style.x_label.clone());
        scene.push(Shape::text(
            margins.left + inner_width / 2.0,
            height - 6.0,
            &style.x_label,
            fonts.axis,
            FOREGROUND,
        ));
    }
    if !style.y_label.is_empty() {
        scene.y_label = Some(style.y_label.clone());
        scene.push(
            Shape::text(
                14.0,
                margins.top + inner_height / 2.0,
                &style.y_label,
                fonts.axis,
                FOREGROUND,
            )
            .rotated(-90.0),
        );
    }

    if style.severity_legend {
        severity_legend(&mut scene, height, fonts.axis);
    }

    scene
}

// Inline severity swatches across the bottom edge, plus the structured
// legend for renderers that draw their own.
fn severity_legend(scene: &mut Scene, height: f64, font_size: f64) {
    let entries: Vec<LegendEntry> = Severity::all()
        .iter()
        .map(|s| LegendEntry::new(s.label(), s.color()))
        .collect();
    let y = height - 24.0;
    let mut x = 20.0;
    for entry in &entries {
        scene.push(Shape::rect(x, y, 12.0, 12.0, &entry.color));
        scene.push(
            Shape::text(x + 16.0, y + 10.0, &entry.label, font_size, FOREGROUND)
                .anchored(TextAnchor::Start),
        );
        x += 16.0 + entry.label.len() as f64 * font_size * 0.6 + 24.0;
    }
    scene.legend = Some(Legend { entries });
}
