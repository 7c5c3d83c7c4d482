//! Chart engine: the single entry point turning a dataset, chart options
//! and a container size into a drawable [`Scene`], plus a keyed scene cache
//! for repeated renders.

use crate::data::{
    ChartError, ChartResult, SeriesPoint, aggregate_modules_with_severity_by,
    bucket_zero_coverage, count_by_column, count_by_two_columns, disambiguated_labels,
    merge_small_slices, numeric_matrix, percent_of_total,
};
use crate::palette::categorical;
use crate::scene::bar::{BarDatum, BarStyle, ValueFormat};
use crate::scene::lollipop::LollipopEntry;
use crate::scene::{Scene, bar, grouped_bar, heatmap, lollipop, nested_donut, pie, stacked_bar};
use crate::types::{
    BarMode, BarOptions, ChartOptions, ContainerSize, Dataset, HeatmapOptions, LollipopOptions,
    PieOptions, Severity,
};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, warn};

/// Build the scene for one chart request.
///
/// Fails fast on an empty dataset or a missing required column; a degenerate
/// container size falls back to the 650×600 defaults rather than failing.
pub fn build_scene(
    dataset: &Dataset,
    options: &ChartOptions,
    size: ContainerSize,
) -> ChartResult<Scene> {
    if dataset.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let size = if size.is_degenerate() {
        warn!(width = size.width, height = size.height, "degenerate container size, using defaults");
        size.or_default()
    } else {
        size
    };
    debug!(
        kind = options.kind().label(),
        rows = dataset.row_count(),
        width = size.width,
        height = size.height,
        "building scene"
    );

    match options {
        ChartOptions::Bar(opts) => bar_scene(dataset, opts, size),
        ChartOptions::Pie(opts) => pie_scene(dataset, opts, size),
        ChartOptions::GroupedBar(opts) => {
            let nested = count_by_two_columns(dataset, &opts.primary_column, &opts.secondary_column)?;
            Ok(grouped_bar::build(&nested, &opts.title, size))
        }
        ChartOptions::StackedBar(opts) => {
            let nested = count_by_two_columns(dataset, &opts.primary_column, &opts.secondary_column)?;
            Ok(stacked_bar::build(&nested, &opts.title, size))
        }
        ChartOptions::NestedDonut(opts) => {
            let nested = count_by_two_columns(dataset, &opts.primary_column, &opts.secondary_column)?;
            Ok(nested_donut::build(&nested, &opts.title, size))
        }
        ChartOptions::Lollipop(opts) => lollipop_scene(dataset, opts, size),
        ChartOptions::Heatmap(opts) => heatmap_scene(dataset, opts, size),
    }
}

fn bar_scene(dataset: &Dataset, opts: &BarOptions, size: ContainerSize) -> ChartResult<Scene> {
    let (bars, value_format, y_max, severity_legend): (Vec<BarDatum>, _, _, _) = match &opts.mode {
        BarMode::CountByColumn {
            column,
            filter_empty,
        } => {
            let groups = count_by_column(dataset, column, *filter_empty)?;
            let bars = groups
                .iter()
                .enumerate()
                .map(|(i, g)| BarDatum::new(&g.key, g.count as f64, categorical(i)))
                .collect();
            (bars, ValueFormat::Count, None, false)
        }
        BarMode::ModuleCoverage => {
            let aggregation = aggregate_modules_with_severity_by(dataset, "Module")?;
            let mut stats = bucket_zero_coverage(aggregation);
            // Worst coverage first; the zero bucket already sits at 0.
            stats.sort_by(|a, b| {
                a.avg_lines
                    .unwrap_or(0.0)
                    .total_cmp(&b.avg_lines.unwrap_or(0.0))
            });
            let labels = disambiguated_labels(&stats, |s| (s.module.as_str(), s.short_name.as_str()));
            let bars = stats
                .iter()
                .zip(labels)
                .map(|(s, label)| {
                    BarDatum::new(label, s.avg_lines.unwrap_or(0.0), s.severity.color())
                })
                .collect();
            (bars, ValueFormat::Percent, Some(100.0), true)
        }
        BarMode::ModulesPerSeverity => {
            let aggregation = aggregate_modules_with_severity_by(dataset, "Module")?;
            // Fixed High/Medium/Low domain; empty classes keep a zero bar.
            let bars = Severity::all()
                .iter()
                .map(|severity| {
                    let count = aggregation
                        .stats
                        .iter()
                        .filter(|s| s.severity == *severity)
                        .count();
                    BarDatum::new(severity.label(), count as f64, severity.color())
                })
                .collect();
            (bars, ValueFormat::Count, None, true)
        }
    };

    let style = BarStyle {
        title: opts.title.clone(),
        x_label: opts.x_label.clone(),
        y_label: opts.y_label.clone(),
        show_value_labels: !opts.hide_value_labels,
        value_format,
        y_max,
        severity_legend,
    };
    Ok(bar::build(&bars, &style, size))
}

fn pie_scene(dataset: &Dataset, opts: &PieOptions, size: ContainerSize) -> ChartResult<Scene> {
    let groups = count_by_column(dataset, &opts.column, opts.filter_empty)?;
    let points: Vec<SeriesPoint> = groups
        .into_iter()
        .map(|g| SeriesPoint::new(g.key, g.count as f64))
        .collect();
    let points = merge_small_slices(points, opts.small_slice_threshold);
    Ok(pie::build(&points, &opts.title, size))
}

fn lollipop_scene(
    dataset: &Dataset,
    opts: &LollipopOptions,
    size: ContainerSize,
) -> ChartResult<Scene> {
    let aggregation = aggregate_modules_with_severity_by(dataset, &opts.module_column)?;
    let has_coverage = aggregation.lines_column.is_some();
    let stats = bucket_zero_coverage(aggregation);
    // Without a lines% column the contribution base falls back to row
    // counts, so the chart still shows each module's share of the report.
    let values: Vec<f64> = if has_coverage {
        stats.iter().map(|s| s.avg_lines.unwrap_or(0.0)).collect()
    } else {
        stats.iter().map(|s| s.count as f64).collect()
    };
    let contributions = percent_of_total(&values);
    let labels = disambiguated_labels(&stats, |s| (s.module.as_str(), s.short_name.as_str()));

    let mut entries: Vec<LollipopEntry> = stats
        .iter()
        .zip(labels)
        .zip(contributions)
        .map(|((s, label), contribution)| LollipopEntry {
            module: s.module.clone(),
            label,
            contribution,
        })
        .collect();
    // Smallest contributors first; stable, so the zero bucket stays ahead
    // of other zero-contribution rows.
    entries.sort_by(|a, b| a.contribution.total_cmp(&b.contribution));

    Ok(lollipop::build(&entries, &opts.title, size))
}

fn heatmap_scene(
    dataset: &Dataset,
    opts: &HeatmapOptions,
    size: ContainerSize,
) -> ChartResult<Scene> {
    let matrix = numeric_matrix(dataset, &opts.row_column, &opts.column_column, &opts.value_column)?;
    Ok(heatmap::build(
        &matrix,
        &opts.title,
        &opts.column_column,
        &opts.row_column,
        size,
    ))
}

/// Full request identity: the map key stores the actual request rather than
/// a digest, so distinct requests can never alias.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    dataset_id: u64,
    options: ChartOptions,
    width_bits: u64,
    height_bits: u64,
}

impl CacheKey {
    fn new(dataset_id: u64, options: &ChartOptions, size: ContainerSize) -> Self {
        Self {
            dataset_id,
            options: options.clone(),
            width_bits: size.width.to_bits(),
            height_bits: size.height.to_bits(),
        }
    }
}

/// Scene cache keyed by (dataset identity, options, container size).
///
/// Datasets are not hashed by content; the caller owns invalidation by
/// assigning a fresh [`Dataset::id`] when rows change, or by clearing.
#[derive(Debug, Default)]
pub struct SceneCache {
    scenes: HashMap<CacheKey, Scene>,
}

impl SceneCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached scene for this request, building it on a miss.
    pub fn get_or_build(
        &mut self,
        dataset: &Dataset,
        options: &ChartOptions,
        size: ContainerSize,
    ) -> ChartResult<&Scene> {
        match self.scenes.entry(CacheKey::new(dataset.id, options, size)) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                debug!(kind = options.kind().label(), "scene cache miss");
                Ok(entry.insert(build_scene(dataset, options, size)?))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn clear(&mut self) {
        self.scenes.clear();
    }
}
