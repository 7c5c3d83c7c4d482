//! Drawable scene model and the per-kind scene builders.
//!
//! A [`Scene`] is resolution-dependent, renderer-agnostic geometry: the
//! builders burn container size, scales and palette into absolute pixel
//! coordinates so a renderer only has to paint shapes in order.

mod axis;
pub mod bar;
pub mod grouped_bar;
pub mod heatmap;
pub mod lollipop;
pub mod nested_donut;
pub mod pie;
pub mod stacked_bar;

pub(crate) use axis::*;

use serde::Serialize;

/// Source datum attached to a hit-testable shape, for tooltips.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Horizontal anchoring of a text shape relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

/// One paintable primitive. Coordinates are absolute pixels in the scene's
/// width×height space; paint order is scene order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        datum: Option<Datum>,
    },
    /// Annular sector. Angles are radians clockwise from 12 o'clock.
    Arc {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        datum: Option<Datum>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        stroke_width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        datum: Option<Datum>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        fill: String,
        anchor: TextAnchor,
        /// Degrees, clockwise about (x, y).
        rotate: f64,
    },
}

impl Shape {
    pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>) -> Self {
        Self::Rect {
            x,
            y,
            width,
            height,
            fill: fill.into(),
            datum: None,
        }
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: impl Into<String>) -> Self {
        Self::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: stroke.into(),
            stroke_width: 1.0,
        }
    }

    pub fn circle(cx: f64, cy: f64, radius: f64, fill: impl Into<String>) -> Self {
        Self::Circle {
            cx,
            cy,
            radius,
            fill: fill.into(),
            datum: None,
        }
    }

    pub fn text(x: f64, y: f64, content: impl Into<String>, size: f64, fill: impl Into<String>) -> Self {
        Self::Text {
            x,
            y,
            content: content.into(),
            size,
            fill: fill.into(),
            anchor: TextAnchor::Middle,
            rotate: 0.0,
        }
    }

    pub fn anchored(mut self, new_anchor: TextAnchor) -> Self {
        if let Self::Text { ref mut anchor, .. } = self {
            *anchor = new_anchor;
        }
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        if let Self::Text { ref mut rotate, .. } = self {
            *rotate = degrees;
        }
        self
    }

    pub fn with_datum(mut self, new_datum: Datum) -> Self {
        match self {
            Self::Rect { ref mut datum, .. }
            | Self::Arc { ref mut datum, .. }
            | Self::Circle { ref mut datum, .. } => *datum = Some(new_datum),
            _ => {}
        }
        self
    }

    pub fn datum(&self) -> Option<&Datum> {
        match self {
            Self::Rect { datum, .. } | Self::Arc { datum, .. } | Self::Circle { datum, .. } => {
                datum.as_ref()
            }
            _ => None,
        }
    }
}

/// A keyed legend rendered outside the plot shapes.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// A fully laid out chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub shapes: Vec<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: None,
            x_label: None,
            y_label: None,
            shapes: Vec::new(),
            legend: None,
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Count shapes matching a predicate. Test and debugging aid.
    pub fn count_shapes(&self, predicate: impl Fn(&Shape) -> bool) -> usize {
        self.shapes.iter().filter(|s| predicate(s)).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Centered title at the top of the scene, when the title is non-empty.
pub(crate) fn title_text(scene: &mut Scene, title: &str, font_size: f64) {
    use crate::palette::FOREGROUND;
    if title.is_empty() {
        return;
    }
    scene.title = Some(title.to_string());
    let x = scene.width / 2.0;
    scene.push(Shape::text(x, 24.0, title, font_size, FOREGROUND));
}

/// Wrapped legend column drawn inside the scene at `(x, top)`, one row per
/// entry with an 18×18 swatch. Also records the structured legend.
pub(crate) fn side_legend(scene: &mut Scene, entries: Vec<LegendEntry>, x: f64, top: f64, font_size: f64) {
    use crate::constants::{LEGEND_ROW_HEIGHT, LEGEND_WRAP_CHARS};
    use crate::data::wrap_label;
    use crate::palette::FOREGROUND;

    let mut y = top;
    for entry in &entries {
        scene.push(Shape::rect(x, y, 18.0, 18.0, &entry.color));
        let lines = wrap_label(&entry.label, LEGEND_WRAP_CHARS);
        let line_count = lines.len();
        for (i, line) in lines.into_iter().enumerate() {
            scene.push(
                Shape::text(
                    x + 24.0,
                    y + 13.0 + i as f64 * (font_size + 2.0),
                    line,
                    font_size,
                    FOREGROUND,
                )
                .anchored(TextAnchor::Start),
            );
        }
        y += LEGEND_ROW_HEIGHT.max(line_count as f64 * (font_size + 2.0) + 8.0);
    }
    scene.legend = Some(Legend { entries });
}

/// Format an axis or value label: integral values lose the decimal point,
/// everything else keeps one decimal.
pub(crate) fn format_value(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
