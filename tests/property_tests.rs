#[cfg(test)]
mod property_tests {
    use curvecast::config::PlotConfig;
    use curvecast::history::HistoryRecord;
    use curvecast::plot::HistoryPlotter;
    use curvecast::render::{render_text, RecordingPresenter};
    use proptest::prelude::*;

    // Strategy for a metric's per-epoch values
    fn values_strategy(len: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1e3f64..1e3, len)
    }

    // Strategy for a record with `count` training metrics, half of them with a validation pair
    fn record_strategy() -> impl Strategy<Value = (HistoryRecord, usize, usize)> {
        (1usize..=20, 1usize..=4).prop_flat_map(|(len, count)| {
            (
                prop::collection::vec((values_strategy(len), values_strategy(len)), count),
                Just(len),
                Just(count),
            )
                .prop_map(|(metrics, len, count)| {
                    let mut record = HistoryRecord::new();
                    for (i, (train, val)) in metrics.into_iter().enumerate() {
                        record.insert(format!("metric{}", i), train);
                        if i % 2 == 0 {
                            record.insert(format!("val_metric{}", i), val);
                        }
                    }
                    (record, len, count)
                })
        })
    }

    proptest! {
        #[test]
        fn test_chart_count_matches_training_metrics(
            (record, len, count) in record_strategy(),
            fraction in 0.0f64..1.0,
        ) {
            let skip = ((fraction * len as f64) as usize).min(len - 1);

            let config = PlotConfig::default().with_skip(skip);
            let mut plotter = HistoryPlotter::new(config, RecordingPresenter::new());
            prop_assert_eq!(plotter.plot(&record).unwrap(), count);
        }

        #[test]
        fn test_axis_matches_plotted_values(
            (record, len, _count) in record_strategy(),
            fraction in 0.0f64..1.0,
        ) {
            let skip = ((fraction * len as f64) as usize).min(len - 1);

            let config = PlotConfig::default().with_skip(skip);
            let mut plotter = HistoryPlotter::new(config, RecordingPresenter::new());
            plotter.plot(&record).unwrap();

            for chart in plotter.presenter().charts() {
                for series in &chart.series {
                    prop_assert_eq!(series.epochs.len(), series.values.len());
                    prop_assert_eq!(series.epochs.clone(), (1..=len - skip).collect::<Vec<_>>());
                }
            }
        }

        #[test]
        fn test_skip_at_or_past_length_is_rejected(
            (record, len, _count) in record_strategy(),
            extra in 0usize..5,
        ) {
            let config = PlotConfig::default().with_skip(len + extra);
            let mut plotter = HistoryPlotter::new(config, RecordingPresenter::new());
            prop_assert!(plotter.plot(&record).is_err());
            prop_assert!(plotter.presenter().charts().is_empty());
        }

        #[test]
        fn test_text_render_never_panics(
            (record, len, _count) in record_strategy(),
            width in 10usize..80,
            height in 5usize..30,
        ) {
            let mut plotter = HistoryPlotter::new(PlotConfig::default(), RecordingPresenter::new());
            plotter.plot(&record).unwrap();

            for chart in plotter.presenter().charts() {
                let text = render_text(chart, width, height).unwrap();
                let expected_range = format!("1..{}", len);
                prop_assert!(text.contains(&expected_range));
            }
        }
    }
}
