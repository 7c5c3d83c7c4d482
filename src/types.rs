//! Core types: the input dataset model, severity classification, and the
//! per-chart-kind option structs with their defaults.
//!
//! Options are explicit so that every recognized knob and its default is
//! visible in one place rather than scattered across call sites.

use crate::constants::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, SEVERITY_HIGH_BELOW, SEVERITY_MEDIUM_UPTO,
    SMALL_SLICE_THRESHOLD,
};
use crate::palette;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

// ============================================================================
// Dataset
// ============================================================================

/// A single report row: raw string values keyed by column name.
///
/// Column names are kept exactly as the report generator produced them;
/// lookups that need to tolerate case/whitespace variants go through
/// [`crate::data::ColumnMap`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Row {
    pub fields: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(column, value)` pairs. Handy in tests and loaders.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Raw value for an exact (already resolved) column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// An ordered sequence of rows plus an identity used for cache keying.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Caller-assigned identity; renders of the same `id` with the same
    /// options and size may be served from [`crate::engine::SceneCache`].
    pub id: u64,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(id: u64, rows: Vec<Row>) -> Self {
        Self { id, rows }
    }

    /// Dataset without a meaningful identity (never cache-shared).
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { id: 0, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_row(&self) -> Option<&Row> {
        self.rows.first()
    }
}

/// Pixel dimensions of the target drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is absent, zero or negative.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Substitute the 650×600 defaults for a degenerate size.
    pub fn or_default(self) -> Self {
        if self.is_degenerate() {
            Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
        } else {
            self
        }
    }
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

// ============================================================================
// Severity
// ============================================================================

/// Three-level risk classification derived from a coverage-like metric.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
    /// No classifiable metric was available.
    #[default]
    Unset,
}

impl Severity {
    /// Classify an average lines% value.
    ///
    /// Below 30 is High, 30–70 inclusive is Medium, above 70 is Low.
    /// `None` (no column or no parseable values) stays unset.
    pub fn classify(avg_lines: Option<f64>) -> Self {
        match avg_lines {
            None => Self::Unset,
            Some(v) if v < SEVERITY_HIGH_BELOW => Self::High,
            Some(v) if v <= SEVERITY_MEDIUM_UPTO => Self::Medium,
            Some(_) => Self::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unset => "",
        }
    }

    /// Fill color; severity coloring overrides the positional palette.
    pub fn color(&self) -> &'static str {
        match self {
            Self::High => palette::SEVERITY_HIGH,
            Self::Medium => palette::SEVERITY_MEDIUM,
            Self::Low => palette::SEVERITY_LOW,
            Self::Unset => palette::SEVERITY_UNSET,
        }
    }

    /// The enumerable legend order (unset is never legended).
    pub fn all() -> &'static [Severity] {
        &[Self::High, Self::Medium, Self::Low]
    }
}

// ============================================================================
// Chart Kinds & Options
// ============================================================================

/// The seven supported chart kinds.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
    GroupedBar,
    StackedBar,
    NestedDonut,
    Lollipop,
    Heatmap,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Pie => "Pie",
            Self::GroupedBar => "Grouped Bar",
            Self::StackedBar => "Stacked Bar",
            Self::NestedDonut => "Nested Donut",
            Self::Lollipop => "Lollipop",
            Self::Heatmap => "Heatmap",
        }
    }

    pub fn all() -> &'static [ChartKind] {
        &[
            Self::Bar,
            Self::Pie,
            Self::GroupedBar,
            Self::StackedBar,
            Self::NestedDonut,
            Self::Lollipop,
            Self::Heatmap,
        ]
    }
}

/// What a bar chart plots.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarMode {
    /// One bar per distinct value of `column`, height = row count.
    CountByColumn { column: String, filter_empty: bool },
    /// Coverage (lines%) per module, severity-colored, zero-coverage
    /// modules bucketed into a leading "Others" bar.
    ModuleCoverage,
    /// Module counts over the fixed High/Medium/Low severity domain.
    ModulesPerSeverity,
}

impl Default for BarMode {
    fn default() -> Self {
        Self::CountByColumn {
            column: "Module".to_string(),
            filter_empty: false,
        }
    }
}

/// Bar chart options.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarOptions {
    pub mode: BarMode,
    /// Chart title; empty means a mode-appropriate default.
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub hide_value_labels: bool,
}

impl BarOptions {
    pub fn new(mode: BarMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn count_by(column: impl Into<String>) -> Self {
        Self::new(BarMode::CountByColumn {
            column: column.into(),
            filter_empty: false,
        })
    }

    pub fn with_filter_empty(mut self, filter_empty: bool) -> Self {
        if let BarMode::CountByColumn {
            filter_empty: ref mut f,
            ..
        } = self.mode
        {
            *f = filter_empty;
        }
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_axis_labels(
        mut self,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_hidden_value_labels(mut self) -> Self {
        self.hide_value_labels = true;
        self
    }
}

/// Pie chart options.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PieOptions {
    pub column: String,
    pub filter_empty: bool,
    /// Slices at or below this value merge into an appended "Other" slice.
    pub small_slice_threshold: f64,
    pub title: String,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            column: "Module".to_string(),
            filter_empty: false,
            small_slice_threshold: SMALL_SLICE_THRESHOLD,
            title: String::new(),
        }
    }
}

impl PieOptions {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ..Default::default()
        }
    }

    pub fn with_filter_empty(mut self, filter_empty: bool) -> Self {
        self.filter_empty = filter_empty;
        self
    }

    pub fn with_small_slice_threshold(mut self, threshold: f64) -> Self {
        self.small_slice_threshold = threshold;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

// The threshold is an f64, so Eq/Hash cannot be derived. Comparing and
// hashing its bit pattern keeps the three impls consistent and lets the
// options serve as a scene cache key.
impl PartialEq for PieOptions {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column
            && self.filter_empty == other.filter_empty
            && self.small_slice_threshold.to_bits() == other.small_slice_threshold.to_bits()
            && self.title == other.title
    }
}

impl Eq for PieOptions {}

impl Hash for PieOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.column.hash(state);
        self.filter_empty.hash(state);
        self.small_slice_threshold.to_bits().hash(state);
        self.title.hash(state);
    }
}

/// Options shared by the two-level categorical charts (grouped bar, stacked
/// bar, nested donut).
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoLevelOptions {
    pub primary_column: String,
    pub secondary_column: String,
    pub title: String,
}

impl Default for TwoLevelOptions {
    fn default() -> Self {
        Self {
            primary_column: "Category".to_string(),
            secondary_column: "Subcategory".to_string(),
            title: String::new(),
        }
    }
}

impl TwoLevelOptions {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary_column: primary.into(),
            secondary_column: secondary.into(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Lollipop (module contribution) options.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct LollipopOptions {
    pub module_column: String,
    pub title: String,
}

impl Default for LollipopOptions {
    fn default() -> Self {
        Self {
            module_column: "Module".to_string(),
            title: "Module Contribution to Total Coverage".to_string(),
        }
    }
}

impl LollipopOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Heatmap (module×month churn) options.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapOptions {
    pub row_column: String,
    pub column_column: String,
    pub value_column: String,
    pub title: String,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            row_column: "Module".to_string(),
            column_column: "Month".to_string(),
            value_column: "Churn".to_string(),
            title: String::new(),
        }
    }
}

impl HeatmapOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// A chart request: kind plus its kind-specific options.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartOptions {
    Bar(BarOptions),
    Pie(PieOptions),
    GroupedBar(TwoLevelOptions),
    StackedBar(TwoLevelOptions),
    NestedDonut(TwoLevelOptions),
    Lollipop(LollipopOptions),
    Heatmap(HeatmapOptions),
}

impl ChartOptions {
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Pie(_) => ChartKind::Pie,
            Self::GroupedBar(_) => ChartKind::GroupedBar,
            Self::StackedBar(_) => ChartKind::StackedBar,
            Self::NestedDonut(_) => ChartKind::NestedDonut,
            Self::Lollipop(_) => ChartKind::Lollipop,
            Self::Heatmap(_) => ChartKind::Heatmap,
        }
    }
}
