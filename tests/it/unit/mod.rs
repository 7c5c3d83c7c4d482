//! Unit tests for the chart engine, through the public crate API.

mod engine_tests;
mod property_tests;
mod scene_tests;
