//! Aggregation and chart-layout engine for audit report dashboards.
//!
//! This crate turns raw tabular audit-report rows (code coverage, test
//! smells, security posture, semantic bugs, regression risk) into renderable
//! chart scenes. It performs no I/O and owns no rendering: a CSV loader hands
//! in a [`types::Dataset`], the engine hands back a [`scene::Scene`] of
//! positioned shapes that an SVG/canvas painter draws.
//!
//! Pipeline:
//!
//! 1. Column resolution + numeric parsing ([`data`])
//! 2. Grouping and aggregation ([`data`])
//! 3. Bucketing and label cleanup ([`data`])
//! 4. Scales, angles, responsive sizing ([`layout`])
//! 5. Chart-specific scene building ([`scene`], dispatched by [`engine`])
//!
//! Every call recomputes the full scene from the current data and container
//! size; [`engine::SceneCache`] memoizes repeated renders of the same
//! dataset/options/size triple.

pub mod constants;
pub mod data;
pub mod engine;
pub mod layout;
pub mod palette;
pub mod scene;
pub mod types;

pub use data::{ChartError, ChartResult};
pub use engine::{SceneCache, build_scene};
pub use scene::{Legend, Scene, Shape};
pub use types::{ChartKind, ChartOptions, ContainerSize, Dataset, Row, Severity};
