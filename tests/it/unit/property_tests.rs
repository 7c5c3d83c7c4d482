//! Property tests for the aggregation and layout invariants.

use auditviz::data::{SeriesPoint, count_by_column, merge_small_slices, percent_of_total};
use auditviz::layout::BandScale;
use auditviz::types::{Dataset, Row, Severity};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Core".to_string(),
        "Util".to_string(),
        "Legacy".to_string(),
        "Scripts".to_string(),
        "".to_string(),
    ])
}

proptest! {
    #[test]
    fn prop_group_counts_conserve_rows(keys in prop::collection::vec(key_strategy(), 1..60)) {
        let rows: Vec<Row> = keys
            .iter()
            .map(|k| Row::from_pairs(&[("Module", k.as_str())]))
            .collect();
        let ds = Dataset::from_rows(rows);
        let groups = count_by_column(&ds, "Module", false).unwrap();
        let total: usize = groups.iter().map(|g| g.count).sum();
        prop_assert_eq!(total, keys.len());

        // With empty filtering, only blank-keyed rows go missing.
        let filtered = count_by_column(&ds, "Module", true).unwrap();
        let filtered_total: usize = filtered.iter().map(|g| g.count).sum();
        let blanks = keys.iter().filter(|k| k.trim().is_empty()).count();
        prop_assert_eq!(filtered_total, keys.len() - blanks);
    }

    #[test]
    fn prop_merge_small_slices_conserves_total(
        values in prop::collection::vec(0.0f64..1000.0, 0..20),
        threshold in 0.0f64..50.0,
    ) {
        let points: Vec<SeriesPoint> = values
            .iter()
            .enumerate()
            .map(|(i, v)| SeriesPoint::new(format!("s{i}"), *v))
            .collect();
        let before: f64 = values.iter().sum();
        let merged = merge_small_slices(points, threshold);
        let after: f64 = merged.iter().map(|p| p.value).sum();
        prop_assert!((before - after).abs() < 1e-6);

        // Bucketing is idempotent: the Other slice never re-merges.
        let again = merge_small_slices(merged.clone(), threshold);
        prop_assert_eq!(merged, again);
    }

    #[test]
    fn prop_percent_of_total_sums_to_hundred(
        values in prop::collection::vec(0.0f64..1000.0, 1..30),
    ) {
        let contributions = percent_of_total(&values);
        prop_assert_eq!(contributions.len(), values.len());
        let sum: f64 = contributions.iter().sum();
        if values.iter().sum::<f64>() > 0.0 {
            prop_assert!((sum - 100.0).abs() < 1e-6);
        } else {
            prop_assert_eq!(sum, 0.0);
        }
    }

    #[test]
    fn prop_severity_never_improves_as_coverage_drops(
        a in 0.0f64..100.0,
        b in 0.0f64..100.0,
    ) {
        fn rank(s: Severity) -> u8 {
            match s {
                Severity::High => 2,
                Severity::Medium => 1,
                Severity::Low => 0,
                Severity::Unset => 0,
            }
        }
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(Severity::classify(Some(lo))) >= rank(Severity::classify(Some(hi))));
    }

    #[test]
    fn prop_band_scale_stays_inside_span(
        len in 1usize..30,
        span in 50.0f64..2000.0,
    ) {
        let scale = BandScale::new(len, 0.0, span, 0.18, 0.09);
        prop_assert!(scale.bandwidth() > 0.0);
        for i in 0..len {
            prop_assert!(scale.position(i) >= -1e-9);
            prop_assert!(scale.position(i) + scale.bandwidth() <= span + 1e-9);
        }
    }
}
