//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDatasetBuilder` - Builder pattern for assembling report datasets
//! - Ready-made fixtures for the common report shapes (coverage, issues,
//!   category/subcategory, churn)

use auditviz::types::{Dataset, Row};

// ============================================================================
// TestDatasetBuilder - Builder pattern for creating test datasets
// ============================================================================

/// Builder for creating test datasets row by row.
///
/// # Example
/// ```ignore
/// let dataset = TestDatasetBuilder::new()
///     .with_row(&[("Module", "Core"), ("Lines%", "80")])
///     .with_row(&[("Module", "Util"), ("Lines%", "20")])
///     .build();
/// ```
pub struct TestDatasetBuilder {
    id: u64,
    rows: Vec<Row>,
}

impl Default for TestDatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDatasetBuilder {
    pub fn new() -> Self {
        Self { id: 1, rows: Vec::new() }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_row(mut self, pairs: &[(&str, &str)]) -> Self {
        self.rows.push(Row::from_pairs(pairs));
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::new(self.id, self.rows)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Coverage report: per-file rows with module and lines% columns.
pub fn coverage_dataset() -> Dataset {
    TestDatasetBuilder::new()
        .with_row(&[("Module", "Core (12 files)"), ("Lines%", "80,5")])
        .with_row(&[("Module", "Core (12 files)"), ("Lines%", "79,5")])
        .with_row(&[("Module", "Util"), ("Lines%", "25")])
        .with_row(&[("Module", "Legacy"), ("Lines%", "0")])
        .with_row(&[("Module", "Scripts"), ("Lines%", "0")])
        .build()
}

/// Issue report: one row per finding with a severity label column.
pub fn issues_dataset() -> Dataset {
    TestDatasetBuilder::new()
        .with_row(&[("Severity", "High"), ("Module", "Core")])
        .with_row(&[("Severity", "High"), ("Module", "Util")])
        .with_row(&[("Severity", "Low"), ("Module", "Core")])
        .with_row(&[("Severity", ""), ("Module", "Core")])
        .build()
}

/// Two-level report: category and subcategory per row.
pub fn category_dataset() -> Dataset {
    TestDatasetBuilder::new()
        .with_row(&[("Category", "Smells"), ("Subcategory", "Assertion Roulette")])
        .with_row(&[("Category", "Smells"), ("Subcategory", "Assertion Roulette")])
        .with_row(&[("Category", "Smells"), ("Subcategory", "Eager Test")])
        .with_row(&[("Category", "Bugs"), ("Subcategory", "Off By One")])
        .build()
}

/// Churn report in long form: module, month, churn value.
pub fn churn_dataset() -> Dataset {
    TestDatasetBuilder::new()
        .with_row(&[("Module", "core"), ("Month", "Jan"), ("Churn", "12")])
        .with_row(&[("Module", "core"), ("Month", "Feb"), ("Churn", "3")])
        .with_row(&[("Module", "util"), ("Month", "Jan"), ("Churn", "7")])
        .build()
}
