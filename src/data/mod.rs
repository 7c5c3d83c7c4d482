//! Data shaping: column resolution, numeric parsing, grouping and bucketing.
//!
//! Everything here is a pure transformation over [`crate::types::Dataset`];
//! no module in this tree knows anything about pixels or shapes.
//!
//! ## Error Handling
//!
//! Structural problems (a required column missing, an empty dataset) surface
//! as [`ChartError`] before any scene is built. Per-cell numeric parse
//! failures are excluded silently — they never error and never count as zero.

mod aggregate;
mod bucket;
mod columns;
mod error;

pub use aggregate::*;
pub use bucket::*;
pub use columns::*;
pub use error::*;
