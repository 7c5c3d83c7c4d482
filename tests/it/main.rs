//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - unit: Per-component tests through the public API
//! - helpers: Dataset builders and fixtures

mod helpers;
mod unit;
