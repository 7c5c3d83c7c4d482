//! Column resolution and numeric parsing.
//!
//! Report generators disagree on header casing and whitespace ("Module" vs
//! "module", "Lines%" vs " lines% "), and on decimal separators ("20,5" vs
//! "20.5"). These two concerns are isolated here so the aggregators can work
//! with resolved names and clean floats.

use crate::data::error::{ChartError, ChartResult};
use crate::types::{Dataset, Row};
use std::collections::HashMap;

/// Case-insensitive, whitespace-tolerant column lookup.
///
/// Built once per dataset from the first row and cached in the call context,
/// so resolution cost is paid per column, not per row.
#[derive(Clone, Debug, Default)]
pub struct ColumnMap {
    // normalized name -> actual field name
    lookup: HashMap<String, String>,
}

impl ColumnMap {
    pub fn new(first_row: &Row) -> Self {
        let mut lookup = HashMap::new();
        for name in first_row.field_names() {
            lookup
                .entry(normalize(name))
                .or_insert_with(|| name.to_string());
        }
        Self { lookup }
    }

    /// Empty map when the dataset has no rows (nothing resolves).
    pub fn from_dataset(dataset: &Dataset) -> Self {
        dataset.first_row().map(Self::new).unwrap_or_default()
    }

    /// Actual field name for a logical column name, if present.
    ///
    /// Known limitation: when two headers normalize to the same name, which
    /// one wins is unspecified.
    pub fn resolve(&self, logical: &str) -> Option<&str> {
        self.lookup.get(&normalize(logical)).map(String::as_str)
    }

    /// Like [`resolve`](Self::resolve) but fails with
    /// [`ChartError::MissingColumn`] naming the logical column.
    pub fn require(&self, logical: &str) -> ChartResult<&str> {
        self.resolve(logical)
            .ok_or_else(|| ChartError::MissingColumn(logical.to_string()))
    }

    /// The coverage metric column, under either of its known names.
    pub fn resolve_lines_percent(&self) -> Option<&str> {
        self.resolve("lines%").or_else(|| self.resolve("linespercent"))
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Parse a locale-tolerant numeric cell.
///
/// Comma decimal separators are normalized to dots. Empty and non-numeric
/// values return `None` and are excluded from aggregation — they are not
/// errors and do not count as zero.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse::<f64>().ok()
}
