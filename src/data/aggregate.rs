//! Grouping and aggregation over raw report rows.
//!
//! All groupings preserve first-appearance order of their keys so repeated
//! renders of the same dataset are deterministic.

use crate::data::columns::{ColumnMap, parse_numeric};
use crate::data::error::{ChartError, ChartResult};
use crate::types::{Dataset, Row, Severity};
use std::collections::HashMap;

/// One group's derived summary, keyed by a category value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedGroup {
    pub key: String,
    pub count: usize,
}

/// Group rows by the resolved value of one column, counting rows per group.
///
/// With `filter_empty`, rows whose key is blank or whitespace are excluded
/// entirely — useful for issue counts where a blank Module is noise. Without
/// it, blank keys form a regular group under the empty string.
pub fn count_by_column(
    dataset: &Dataset,
    column: &str,
    filter_empty: bool,
) -> ChartResult<Vec<AggregatedGroup>> {
    if dataset.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let columns = ColumnMap::from_dataset(dataset);
    let actual = columns.require(column)?.to_string();

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in &dataset.rows {
        let value = row.get(&actual).unwrap_or("");
        if filter_empty && value.trim().is_empty() {
            continue;
        }
        if !counts.contains_key(value) {
            order.push(value.to_string());
        }
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }

    Ok(order
        .into_iter()
        .map(|key| {
            let count = counts[&key];
            AggregatedGroup { key, count }
        })
        .collect())
}

/// Two-level grouping: primary keys in first-appearance order, secondary
/// keys as the union across all primary groups (also first-appearance), with
/// a zero-filled count matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NestedCounts {
    pub primaries: Vec<String>,
    pub secondaries: Vec<String>,
    /// `counts[p][s]` = rows with primary `p` and secondary `s`.
    pub counts: Vec<Vec<usize>>,
}

impl NestedCounts {
    pub fn count(&self, primary: usize, secondary: usize) -> usize {
        self.counts[primary][secondary]
    }

    /// Total rows in one primary group (the stacked bar's stack height).
    pub fn primary_total(&self, primary: usize) -> usize {
        self.counts[primary].iter().sum()
    }

    pub fn max_primary_total(&self) -> usize {
        (0..self.primaries.len())
            .map(|p| self.primary_total(p))
            .max()
            .unwrap_or(0)
    }

    pub fn max_count(&self) -> usize {
        self.counts
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        (0..self.primaries.len())
            .map(|p| self.primary_total(p))
            .sum()
    }
}

/// Count rows per (primary, secondary) pair for stacked/grouped/nested
/// charts.
pub fn count_by_two_columns(
    dataset: &Dataset,
    primary_column: &str,
    secondary_column: &str,
) -> ChartResult<NestedCounts> {
    if dataset.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let columns = ColumnMap::from_dataset(dataset);
    let primary_actual = columns.require(primary_column)?.to_string();
    let secondary_actual = columns.require(secondary_column)?.to_string();

    let mut primaries: Vec<String> = Vec::new();
    let mut secondaries: Vec<String> = Vec::new();
    let mut cells: HashMap<(String, String), usize> = HashMap::new();
    for row in &dataset.rows {
        let primary = row.get(&primary_actual).unwrap_or("").to_string();
        let secondary = row.get(&secondary_actual).unwrap_or("").to_string();
        if !primaries.contains(&primary) {
            primaries.push(primary.clone());
        }
        if !secondaries.contains(&secondary) {
            secondaries.push(secondary.clone());
        }
        *cells.entry((primary, secondary)).or_insert(0) += 1;
    }

    let counts = primaries
        .iter()
        .map(|p| {
            secondaries
                .iter()
                .map(|s| {
                    cells
                        .get(&(p.clone(), s.clone()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();

    Ok(NestedCounts {
        primaries,
        secondaries,
        counts,
    })
}

/// Per-module aggregate: numeric column means, coverage severity, and the
/// display short name (module name truncated at its first parenthesis).
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleStats {
    pub module: String,
    pub short_name: String,
    pub count: usize,
    /// Mean per numeric column; `None` when no cell in the group parsed.
    pub averages: Vec<(String, Option<f64>)>,
    /// Mean of the lines% column, when the dataset has one.
    pub avg_lines: Option<f64>,
    pub severity: Severity,
}

impl ModuleStats {
    /// Synthetic bucket entry for merged zero-coverage modules. Severity is
    /// forced High: zero coverage is maximally at risk.
    pub fn others_bucket(count: usize) -> Self {
        Self {
            module: "Others".to_string(),
            short_name: "Others".to_string(),
            count,
            averages: Vec::new(),
            avg_lines: Some(0.0),
            severity: Severity::High,
        }
    }
}

/// Module aggregation output plus whether a lines% column existed at all —
/// consumers render differently when the metric is absent versus zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleAggregation {
    pub stats: Vec<ModuleStats>,
    pub lines_column: Option<String>,
}

/// Group rows by Module, averaging every numeric column and classifying
/// severity from the lines% mean.
pub fn aggregate_modules_with_severity(dataset: &Dataset) -> ChartResult<ModuleAggregation> {
    aggregate_modules_with_severity_by(dataset, "Module")
}

/// [`aggregate_modules_with_severity`] with a caller-chosen module column.
pub fn aggregate_modules_with_severity_by(
    dataset: &Dataset,
    module: &str,
) -> ChartResult<ModuleAggregation> {
    if dataset.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let columns = ColumnMap::from_dataset(dataset);
    let module_column = columns.require(module)?.to_string();
    let lines_column = columns.resolve_lines_percent().map(String::from);

    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<&Row>> = HashMap::new();
    for row in &dataset.rows {
        let module = row.get(&module_column).unwrap_or("").to_string();
        if !groups.contains_key(&module) {
            order.push(module.clone());
        }
        groups.entry(module).or_default().push(row);
    }

    let stats = order
        .into_iter()
        .map(|module| {
            let rows = &groups[&module];
            let numeric_columns = numeric_columns(rows[0], &module_column);
            let averages = numeric_columns
                .into_iter()
                .map(|column| {
                    let mean = column_mean(rows, &column);
                    (column, mean)
                })
                .collect();
            let avg_lines = lines_column
                .as_deref()
                .and_then(|column| column_mean(rows, column));
            let severity = Severity::classify(avg_lines);
            let short_name = short_module_name(&module);
            ModuleStats {
                count: rows.len(),
                module,
                short_name,
                averages,
                avg_lines,
                severity,
            }
        })
        .collect();

    Ok(ModuleAggregation {
        stats,
        lines_column,
    })
}

/// Display label for a module: everything before the first `(`, trimmed.
/// Collapses parenthesized qualifiers like file counts that vary per run.
pub fn short_module_name(module: &str) -> String {
    module.split('(').next().unwrap_or("").trim().to_string()
}

// Numeric columns are detected from the group's first row: every field
// (other than the module key and a Severity label) whose value parses.
// Sorted so the output is deterministic across HashMap iteration orders.
fn numeric_columns(row: &Row, module_column: &str) -> Vec<String> {
    let mut columns: Vec<String> = row
        .field_names()
        .filter(|name| {
            *name != module_column
                && name.trim().to_lowercase() != "severity"
                && row.get(name).and_then(parse_numeric).is_some()
        })
        .map(String::from)
        .collect();
    columns.sort();
    columns
}

fn column_mean(rows: &[&Row], column: &str) -> Option<f64> {
    let values: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.get(column).and_then(parse_numeric))
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Row-keys × column-keys value matrix for heatmaps.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixData {
    pub row_keys: Vec<String>,
    pub col_keys: Vec<String>,
    /// `values[r][c]`; cells with no matching row, or an unparseable value,
    /// are 0.
    pub values: Vec<Vec<f64>>,
}

impl MatrixData {
    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .flat_map(|row| row.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Pivot long-form rows (e.g. module, month, churn) into a matrix. The first
/// matching row wins when a (row, column) pair appears more than once.
pub fn numeric_matrix(
    dataset: &Dataset,
    row_column: &str,
    col_column: &str,
    value_column: &str,
) -> ChartResult<MatrixData> {
    if dataset.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let columns = ColumnMap::from_dataset(dataset);
    let row_actual = columns.require(row_column)?.to_string();
    let col_actual = columns.require(col_column)?.to_string();
    let value_actual = columns.require(value_column)?.to_string();

    let mut row_keys: Vec<String> = Vec::new();
    let mut col_keys: Vec<String> = Vec::new();
    let mut cells: HashMap<(String, String), f64> = HashMap::new();
    for row in &dataset.rows {
        let r = row.get(&row_actual).unwrap_or("").to_string();
        let c = row.get(&col_actual).unwrap_or("").to_string();
        if !row_keys.contains(&r) {
            row_keys.push(r.clone());
        }
        if !col_keys.contains(&c) {
            col_keys.push(c.clone());
        }
        let value = row.get(&value_actual).and_then(parse_numeric).unwrap_or(0.0);
        cells.entry((r, c)).or_insert(value);
    }

    let values = row_keys
        .iter()
        .map(|r| {
            col_keys
                .iter()
                .map(|c| cells.get(&(r.clone(), c.clone())).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();

    Ok(MatrixData {
        row_keys,
        col_keys,
        values,
    })
}
