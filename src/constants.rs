//! Crate-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Container Defaults
// ============================================================================

/// Fallback drawing width when the container reports no size
pub const DEFAULT_WIDTH: f64 = 650.0;

/// Fallback drawing height when the container reports no size
pub const DEFAULT_HEIGHT: f64 = 600.0;

// ============================================================================
// Aggregation & Bucketing
// ============================================================================

/// Pie slices at or below this absolute value are merged into "Other"
pub const SMALL_SLICE_THRESHOLD: f64 = 2.0;

/// Average lines% below this is High severity
pub const SEVERITY_HIGH_BELOW: f64 = 30.0;

/// Average lines% up to and including this is Medium severity
pub const SEVERITY_MEDIUM_UPTO: f64 = 70.0;

// ============================================================================
// Responsive Breakpoints
// ============================================================================

/// Widths below this are the narrow/mobile tier
pub const NARROW_BREAKPOINT: f64 = 500.0;

/// Widths below this (and at least narrow) are the medium tier
pub const MEDIUM_BREAKPOINT: f64 = 700.0;

/// Minimum chart height enforced on narrow containers
pub const NARROW_MIN_HEIGHT: f64 = 400.0;

/// Label count past which narrow containers get extra bottom margin
pub const NARROW_LABEL_LIMIT: usize = 12;

// ============================================================================
// Band & Plot Layout
// ============================================================================

/// Default inner padding fraction for categorical band scales
pub const BAND_PADDING: f64 = 0.18;

/// Wider padding used when very few categories would produce oversized bars
pub const SPARSE_BAND_PADDING: f64 = 0.4;

/// Category count at or below which the sparse padding applies
pub const SPARSE_CATEGORY_LIMIT: usize = 2;

/// Inner padding for sub-bands inside a grouped bar's category band
pub const GROUP_INNER_PADDING: f64 = 0.05;

/// Band padding for the lollipop module axis
pub const LOLLIPOP_BAND_PADDING: f64 = 0.3;

/// Lollipop dot radius in pixels
pub const LOLLIPOP_DOT_RADIUS: f64 = 9.0;

/// Default tick count on magnitude axes
pub const Y_TICK_COUNT: usize = 6;

// ============================================================================
// Radial Charts
// ============================================================================

/// Margin between the outer arc radius and the container edge
pub const RADIAL_MARGIN: f64 = 40.0;

/// Inner radius of pie/donut rings, as a fraction of the outer radius
pub const DONUT_INNER_RATIO: f64 = 0.45;

/// Boundary radius between the category and subcategory rings
pub const DONUT_MIDDLE_RATIO: f64 = 0.7;

// ============================================================================
// Legends
// ============================================================================

/// Horizontal space reserved for the stacked/grouped bar legend column
pub const LEGEND_WIDTH: f64 = 180.0;

/// Vertical distance between legend rows
pub const LEGEND_ROW_HEIGHT: f64 = 32.0;

/// Character budget per legend label line before wrapping
pub const LEGEND_WRAP_CHARS: usize = 18;
