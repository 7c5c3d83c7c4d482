//! Geometry-level tests: scales, bucketing and per-kind scene structure.

use crate::helpers::{TestDatasetBuilder, category_dataset, coverage_dataset};
use auditviz::layout::BandScale;
use auditviz::types::{BarMode, BarOptions, ChartOptions, ContainerSize, LollipopOptions, PieOptions, TwoLevelOptions};
use auditviz::{Shape, build_scene};

#[test]
fn test_band_scale_bandwidth_formula() {
    // Five categories across 400px with 0.18 inner padding and no outer
    // padding divide into bands of 400 / (5 + 0.18 * 4).
    let scale = BandScale::new(5, 0.0, 400.0, 0.18, 0.0);
    let expected = 400.0 / (5.0 + 0.18 * 4.0);
    assert!((scale.bandwidth() - expected).abs() < 1e-9);
    for i in 0..5 {
        let expected_pos = i as f64 * expected * 1.18;
        assert!((scale.position(i) - expected_pos).abs() < 1e-9);
    }
}

#[test]
fn test_bar_rects_share_bandwidth_and_stay_in_plot() {
    let ds = TestDatasetBuilder::new()
        .with_row(&[("Severity", "High")])
        .with_row(&[("Severity", "Medium")])
        .with_row(&[("Severity", "Low")])
        .build();
    let scene = build_scene(
        &ds,
        &ChartOptions::Bar(BarOptions::count_by("Severity")),
        ContainerSize::new(650.0, 600.0),
    )
    .unwrap();
    let bars: Vec<(f64, f64)> = scene
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Rect { x, width, datum: Some(_), .. } => Some((*x, *width)),
            _ => None,
        })
        .collect();
    assert_eq!(bars.len(), 3);
    // Uniform width, monotone x, and all inside the container.
    for window in bars.windows(2) {
        assert!((window[0].1 - window[1].1).abs() < 1e-9);
        assert!(window[0].0 < window[1].0);
    }
    for (x, width) in bars {
        assert!(x >= 0.0 && x + width <= 650.0);
    }
}

#[test]
fn test_pie_small_slices_merge_into_other() {
    let mut builder = TestDatasetBuilder::new();
    for _ in 0..10 {
        builder = builder.with_row(&[("Module", "Core")]);
    }
    builder = builder
        .with_row(&[("Module", "Tiny")])
        .with_row(&[("Module", "Small")])
        .with_row(&[("Module", "Small")]);
    let scene = build_scene(
        &builder.build(),
        &ChartOptions::Pie(PieOptions::new("Module")),
        ContainerSize::default(),
    )
    .unwrap();
    let labels: Vec<&str> = scene
        .shapes
        .iter()
        .filter_map(|s| s.datum().map(|d| d.label.as_str()))
        .collect();
    // Tiny (1) and Small (2) both fall at or under the threshold of 2 and
    // merge into a trailing Other slice.
    assert_eq!(labels, vec!["Core", "Other"]);
    let other = scene
        .shapes
        .iter()
        .find_map(|s| s.datum().filter(|d| d.label == "Other"))
        .unwrap();
    assert_eq!(other.value, 3.0);
}

#[test]
fn test_stacked_bar_totals_match_category_counts() {
    let scene = build_scene(
        &category_dataset(),
        &ChartOptions::StackedBar(TwoLevelOptions::default()),
        ContainerSize::new(900.0, 600.0),
    )
    .unwrap();
    let smells_total: f64 = scene
        .shapes
        .iter()
        .filter_map(|s| s.datum())
        .filter(|d| d.label.starts_with("Smells / "))
        .map(|d| d.value)
        .sum();
    assert_eq!(smells_total, 3.0);
}

#[test]
fn test_nested_donut_outer_ring_subdivides_inner() {
    let scene = build_scene(
        &category_dataset(),
        &ChartOptions::NestedDonut(TwoLevelOptions::default()),
        ContainerSize::new(600.0, 600.0),
    )
    .unwrap();
    let arcs: Vec<(f64, f64, f64)> = scene
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Arc { inner_radius, start_angle, end_angle, .. } => {
                Some((*inner_radius, *start_angle, *end_angle))
            }
            _ => None,
        })
        .collect();
    let mut radii: Vec<f64> = arcs.iter().map(|a| a.0).collect();
    radii.sort_by(f64::total_cmp);
    radii.dedup();
    assert_eq!(radii.len(), 2);
    // Each ring's sweeps sum to the full circle.
    for ring in &radii {
        let sweep: f64 = arcs
            .iter()
            .filter(|a| a.0 == *ring)
            .map(|a| a.2 - a.1)
            .sum();
        assert!((sweep - std::f64::consts::TAU).abs() < 1e-9);
    }
}

#[test]
fn test_lollipop_zero_coverage_bucket_leads() {
    let scene = build_scene(
        &coverage_dataset(),
        &ChartOptions::Lollipop(LollipopOptions::default()),
        ContainerSize::default(),
    )
    .unwrap();
    let modules: Vec<&str> = scene
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Circle { datum: Some(d), .. } => Some(d.label.as_str()),
            _ => None,
        })
        .collect();
    // Legacy and Scripts (both 0%) merge into a leading Others bucket;
    // the rest sort by ascending contribution.
    assert_eq!(modules, vec!["Others", "Util", "Core (12 files)"]);
}

#[test]
fn test_coverage_bar_colors_follow_severity() {
    let scene = build_scene(
        &coverage_dataset(),
        &ChartOptions::Bar(BarOptions::new(BarMode::ModuleCoverage)),
        ContainerSize::default(),
    )
    .unwrap();
    let fills: Vec<(&str, &str)> = scene
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Rect { fill, datum: Some(d), .. } => Some((d.label.as_str(), fill.as_str())),
            _ => None,
        })
        .collect();
    // Others (0%) and Util (25%) are High (red); Core (80%) is Low (green).
    assert_eq!(
        fills,
        vec![
            ("Others", "#ef4444"),
            ("Util", "#ef4444"),
            ("Core", "#22c55e"),
        ]
    );
}

#[test]
fn test_short_name_collision_falls_back_to_full_names() {
    let ds = TestDatasetBuilder::new()
        .with_row(&[("Module", "Core (12 files)"), ("Lines%", "80")])
        .with_row(&[("Module", "Core (3 files)"), ("Lines%", "40")])
        .with_row(&[("Module", "Util"), ("Lines%", "60")])
        .build();
    let scene = build_scene(
        &ds,
        &ChartOptions::Bar(BarOptions::new(BarMode::ModuleCoverage)),
        ContainerSize::default(),
    )
    .unwrap();
    let labels: Vec<&str> = scene
        .shapes
        .iter()
        .filter_map(|s| s.datum().map(|d| d.label.as_str()))
        .collect();
    assert_eq!(labels, vec!["Core (3 files)", "Util", "Core (12 files)"]);
}
