use rrdcast_core::{Export, ExportMeta, ExportRow, FieldValue, RrdcastError, baseline_frames};

fn export(legend: &str, start: i64, step: i64, values: &[FieldValue]) -> Export {
    let rows = values
        .iter()
        .enumerate()
        .map(|(i, v)| ExportRow {
            ts: start + (i as i64 + 1) * step,
            value: v.clone(),
        })
        .collect();
    Export {
        meta: ExportMeta {
            start,
            step,
            end: start + (values.len() as i64) * step,
            legend: legend.to_string(),
        },
        rows,
    }
}

fn floats(values: &[f64]) -> Vec<FieldValue> {
    values.iter().map(|v| FieldValue::Float(*v)).collect()
}

#[test]
fn mean_and_sample_stddev_over_three_periods() {
    let periods = vec![
        export("LOAD", 1000, 10, &floats(&[10.0])),
        export("LOAD", 2000, 10, &floats(&[20.0])),
        export("LOAD", 3000, 10, &floats(&[30.0])),
    ];
    let (mean, stddev) = baseline_frames(&periods, "LOAD").unwrap();

    assert_eq!(mean.label, "LOAD_BASELINE_MEAN");
    assert_eq!(stddev.label, "LOAD_BASELINE_STDDEV");
    // Frames carry the first period's window.
    assert_eq!(mean.start, 1000);
    assert_eq!(mean.rows.len(), 1);
    assert_eq!(mean.rows[0].0, 1010);

    assert_eq!(
        mean.rows[0].1.get("load_baseline_mean"),
        Some(&FieldValue::Float(20.0))
    );
    // Variance with the N-1 correction: ((10^2 + 0 + 10^2) / 2) = 100.
    assert_eq!(
        stddev.rows[0].1.get("load_baseline_stddev"),
        Some(&FieldValue::Float(10.0))
    );
}

#[test]
fn positions_with_fewer_than_two_valid_values_yield_null() {
    let periods = vec![
        export(
            "LOAD",
            1000,
            10,
            &[
                FieldValue::Float(4.0),
                FieldValue::Null,
                FieldValue::Float(1.0),
            ],
        ),
        export(
            "LOAD",
            2000,
            10,
            &[
                FieldValue::Null,
                FieldValue::Null,
                FieldValue::Text("NaN".into()),
            ],
        ),
    ];
    let (mean, stddev) = baseline_frames(&periods, "LOAD").unwrap();

    // One valid value at position 0, zero at positions 1 and 2.
    for frame in [&mean, &stddev] {
        for (_, fields) in &frame.rows {
            assert!(fields.values().all(FieldValue::is_null), "{fields:?}");
        }
    }
}

#[test]
fn nan_markers_are_excluded_from_the_statistics() {
    let periods = vec![
        export("LOAD", 1000, 10, &floats(&[10.0])),
        export("LOAD", 2000, 10, &[FieldValue::Text("NaN".into())]),
        export("LOAD", 3000, 10, &floats(&[30.0])),
    ];
    let (mean, _) = baseline_frames(&periods, "LOAD").unwrap();
    assert_eq!(
        mean.rows[0].1.get("load_baseline_mean"),
        Some(&FieldValue::Float(20.0))
    );
}

#[test]
fn shorter_periods_contribute_missing_values_at_the_tail() {
    let periods = vec![
        export("LOAD", 1000, 10, &floats(&[1.0, 2.0, 3.0])),
        export("LOAD", 2000, 10, &floats(&[3.0, 4.0])),
    ];
    let (mean, _) = baseline_frames(&periods, "LOAD").unwrap();
    assert_eq!(mean.rows.len(), 3);
    assert_eq!(
        mean.rows[0].1.get("load_baseline_mean"),
        Some(&FieldValue::Float(2.0))
    );
    // Only period 0 has a value at position 2.
    assert_eq!(
        mean.rows[2].1.get("load_baseline_mean"),
        Some(&FieldValue::Null)
    );
}

#[test]
fn rejects_fewer_than_two_periods() {
    let periods = vec![export("LOAD", 1000, 10, &floats(&[1.0]))];
    let err = baseline_frames(&periods, "LOAD").unwrap_err();
    assert!(matches!(err, RrdcastError::Validation(_)));
}

#[test]
fn rejects_an_empty_first_period() {
    let periods = vec![
        export("LOAD", 1000, 10, &[]),
        export("LOAD", 2000, 10, &floats(&[1.0])),
    ];
    let err = baseline_frames(&periods, "LOAD").unwrap_err();
    assert!(matches!(err, RrdcastError::Validation(_)));
}

#[test]
fn welford_matches_two_pass_computation() {
    use rrdcast_core::RunningStats;

    let values = [3.5, -1.25, 7.0, 0.0, 2.5, 1e6, -1e6];
    let mut stats = RunningStats::new();
    for v in values {
        stats.push(v);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

    assert!((stats.mean().unwrap() - mean).abs() < 1e-9);
    assert!((stats.stddev().unwrap() - var.sqrt()).abs() < 1e-6);
}
