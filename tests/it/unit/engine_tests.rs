//! End-to-end engine tests: options in, scene (or error) out.

use crate::helpers::{TestDatasetBuilder, category_dataset, churn_dataset, coverage_dataset, issues_dataset};
use auditviz::types::{
    BarMode, BarOptions, ChartKind, ChartOptions, ContainerSize, Dataset, HeatmapOptions,
    LollipopOptions, PieOptions, TwoLevelOptions,
};
use auditviz::{ChartError, SceneCache, build_scene};

fn all_chart_options() -> Vec<ChartOptions> {
    vec![
        ChartOptions::Bar(BarOptions::count_by("Severity")),
        ChartOptions::Pie(PieOptions::new("Severity")),
        ChartOptions::GroupedBar(TwoLevelOptions::default()),
        ChartOptions::StackedBar(TwoLevelOptions::default()),
        ChartOptions::NestedDonut(TwoLevelOptions::default()),
        ChartOptions::Lollipop(LollipopOptions::default()),
        ChartOptions::Heatmap(HeatmapOptions::default()),
    ]
}

#[test]
fn test_every_kind_rejects_empty_dataset() {
    let empty = Dataset::new(1, Vec::new());
    for options in all_chart_options() {
        assert_eq!(
            build_scene(&empty, &options, ContainerSize::default()),
            Err(ChartError::EmptyDataset),
            "kind {:?}",
            options.kind()
        );
    }
}

#[test]
fn test_every_kind_rejects_missing_columns() {
    // A dataset with only an unrelated column satisfies no chart's schema.
    let ds = TestDatasetBuilder::new().with_row(&[("Unrelated", "x")]).build();
    for options in all_chart_options() {
        let result = build_scene(&ds, &options, ContainerSize::default());
        assert!(
            matches!(result, Err(ChartError::MissingColumn(_))),
            "kind {:?} got {result:?}",
            options.kind()
        );
    }
}

#[test]
fn test_missing_column_error_names_the_logical_column() {
    let ds = TestDatasetBuilder::new().with_row(&[("Module", "core")]).build();
    let err = build_scene(
        &ds,
        &ChartOptions::Pie(PieOptions::new("Severity")),
        ContainerSize::default(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "CSV is missing the \"Severity\" column");
}

#[test]
fn test_zero_size_container_falls_back_to_defaults() {
    let scene = build_scene(
        &issues_dataset(),
        &ChartOptions::Bar(BarOptions::count_by("Severity")),
        ContainerSize::new(0.0, -5.0),
    )
    .unwrap();
    assert_eq!((scene.width, scene.height), (650.0, 600.0));
}

#[test]
fn test_column_resolution_is_case_insensitive() {
    let ds = TestDatasetBuilder::new()
        .with_row(&[(" severity ", "High")])
        .with_row(&[(" severity ", "Low")])
        .build();
    let scene = build_scene(
        &ds,
        &ChartOptions::Bar(BarOptions::count_by("Severity")),
        ContainerSize::default(),
    )
    .unwrap();
    let labels: Vec<&str> = scene
        .shapes
        .iter()
        .filter_map(|s| s.datum().map(|d| d.label.as_str()))
        .collect();
    assert_eq!(labels, vec!["High", "Low"]);
}

#[test]
fn test_filter_empty_drops_blank_categories() {
    let with_blank = build_scene(
        &issues_dataset(),
        &ChartOptions::Bar(BarOptions::count_by("Severity")),
        ContainerSize::default(),
    )
    .unwrap();
    let without_blank = build_scene(
        &issues_dataset(),
        &ChartOptions::Bar(BarOptions::count_by("Severity").with_filter_empty(true)),
        ContainerSize::default(),
    )
    .unwrap();
    let bars = |scene: &auditviz::Scene| {
        scene.shapes.iter().filter(|s| s.datum().is_some()).count()
    };
    assert_eq!(bars(&with_blank), 3);
    assert_eq!(bars(&without_blank), 2);
}

#[test]
fn test_kind_dispatch_matches_options() {
    for options in all_chart_options() {
        assert_eq!(options.kind(), match options {
            ChartOptions::Bar(_) => ChartKind::Bar,
            ChartOptions::Pie(_) => ChartKind::Pie,
            ChartOptions::GroupedBar(_) => ChartKind::GroupedBar,
            ChartOptions::StackedBar(_) => ChartKind::StackedBar,
            ChartOptions::NestedDonut(_) => ChartKind::NestedDonut,
            ChartOptions::Lollipop(_) => ChartKind::Lollipop,
            ChartOptions::Heatmap(_) => ChartKind::Heatmap,
        });
    }
}

#[test]
fn test_module_coverage_pins_axis_to_percent() {
    let scene = build_scene(
        &coverage_dataset(),
        &ChartOptions::Bar(BarOptions::new(BarMode::ModuleCoverage)),
        ContainerSize::default(),
    )
    .unwrap();
    // 100 shows up as an axis tick even though no module reaches it.
    let has_hundred = scene
        .shapes
        .iter()
        .any(|s| matches!(s, auditviz::Shape::Text { content, .. } if content == "100"));
    assert!(has_hundred);
}

#[test]
fn test_heatmap_renders_complete_grid() {
    let scene = build_scene(
        &churn_dataset(),
        &ChartOptions::Heatmap(HeatmapOptions::default()),
        ContainerSize::default(),
    )
    .unwrap();
    // 2 modules × 2 months, the absent util/Feb cell zero-filled.
    let cells = scene.shapes.iter().filter(|s| s.datum().is_some()).count();
    assert_eq!(cells, 4);
}

#[test]
fn test_lollipop_falls_back_to_counts_without_coverage_column() {
    // No lines% column: contributions come from per-module row counts, not
    // from a coverage metric that isn't there.
    let ds = TestDatasetBuilder::new()
        .with_row(&[("Module", "X")])
        .with_row(&[("Module", "X")])
        .with_row(&[("Module", "Y")])
        .build();
    let scene = build_scene(
        &ds,
        &ChartOptions::Lollipop(LollipopOptions::default()),
        ContainerSize::default(),
    )
    .unwrap();
    let contributions: Vec<(String, f64)> = scene
        .shapes
        .iter()
        .filter_map(|s| s.datum().map(|d| (d.label.clone(), d.value)))
        .collect();
    // Ascending: Y's 1 row of 3, then X's 2 rows of 3.
    assert_eq!(contributions.len(), 2);
    assert_eq!(contributions[0].0, "Y");
    assert!((contributions[0].1 - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(contributions[1].0, "X");
    assert!((contributions[1].1 - 200.0 / 3.0).abs() < 1e-9);
    let total: f64 = contributions.iter().map(|c| c.1).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_cache_hit_and_invalidation_by_identity() {
    let mut cache = SceneCache::new();
    let options = ChartOptions::NestedDonut(TwoLevelOptions::default());
    let ds = category_dataset();

    cache.get_or_build(&ds, &options, ContainerSize::default()).unwrap();
    cache.get_or_build(&ds, &options, ContainerSize::default()).unwrap();
    assert_eq!(cache.len(), 1);

    // Same rows under a new identity re-renders.
    let renamed = TestDatasetBuilder::new()
        .with_id(99)
        .with_row(&[("Category", "Smells"), ("Subcategory", "Eager Test")])
        .build();
    cache.get_or_build(&renamed, &options, ContainerSize::default()).unwrap();
    assert_eq!(cache.len(), 2);

    // Different options are a different entry even for the same dataset.
    let other_options = ChartOptions::StackedBar(TwoLevelOptions::default());
    cache.get_or_build(&ds, &other_options, ContainerSize::default()).unwrap();
    assert_eq!(cache.len(), 3);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_scene_serializes_to_json() {
    let scene = build_scene(
        &issues_dataset(),
        &ChartOptions::Pie(PieOptions::new("Severity").with_title("Issues")),
        ContainerSize::default(),
    )
    .unwrap();
    let json = scene.to_json().unwrap();
    assert!(json.contains("\"kind\":\"arc\""));
    assert!(json.contains("\"title\":\"Issues\""));
}
