//! Chart color palette.
//!
//! Colors are plain hex strings so the scene output stays renderer-agnostic.
//! Severity coloring always takes precedence over the positional palette
//! wherever a severity is defined.

/// Ordinal palette for positional color assignment (Tableau 10)
pub const CATEGORICAL: [&str; 10] = [
    "#4e79a7", // Blue
    "#f28e2c", // Orange
    "#e15759", // Red
    "#76b7b2", // Teal
    "#59a14f", // Green
    "#edc949", // Yellow
    "#af7aa1", // Purple
    "#ff9da7", // Pink
    "#9c755f", // Brown
    "#bab0ab", // Gray
];

/// Positional palette color for a group index, cycling past the palette end
pub fn categorical(index: usize) -> &'static str {
    CATEGORICAL[index % CATEGORICAL.len()]
}

/// High severity fill (red)
pub const SEVERITY_HIGH: &str = "#ef4444";

/// Medium severity fill (orange)
pub const SEVERITY_MEDIUM: &str = "#f59e42";

/// Low severity fill (green)
pub const SEVERITY_LOW: &str = "#22c55e";

/// Fill for groups with no severity classification (gray)
pub const SEVERITY_UNSET: &str = "#a1a1aa";

/// Foreground color for axis text, labels and titles
pub const FOREGROUND: &str = "#e5e7eb";

/// Stroke separating adjacent arcs in pie and donut charts
pub const ARC_STROKE: &str = "#222";

/// Stem color for lollipop charts
pub const LOLLIPOP_STEM: &str = "#888";

// Endpoints of the sequential red ramp used by the churn heatmap.
const REDS_LOW: (f64, f64, f64) = (255.0, 245.0, 240.0);
const REDS_HIGH: (f64, f64, f64) = (103.0, 0.0, 13.0);

/// Sequential white-to-dark-red ramp for heatmap cells.
///
/// `t` is clamped to `[0, 1]`; 0 maps to near-white, 1 to dark red.
pub fn interpolate_reds(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let lerp = |a: f64, b: f64| a + (b - a) * t;
    format!(
        "#{:02x}{:02x}{:02x}",
        lerp(REDS_LOW.0, REDS_HIGH.0).round() as u8,
        lerp(REDS_LOW.1, REDS_HIGH.1).round() as u8,
        lerp(REDS_LOW.2, REDS_HIGH.2).round() as u8,
    )
}
