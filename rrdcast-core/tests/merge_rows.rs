use rrdcast_core::{FieldValue, MergedFrame, Row, SeriesFrame};

fn frame(label: &str, field: &str, samples: &[(i64, f64)]) -> SeriesFrame {
    let rows = samples
        .iter()
        .map(|(ts, v)| {
            let mut fields = Row::new();
            fields.insert(field.to_string(), FieldValue::Float(*v));
            (*ts, fields)
        })
        .collect();
    SeriesFrame {
        start: samples.first().map_or(0, |(ts, _)| *ts),
        step: 10,
        end: samples.last().map_or(0, |(ts, _)| *ts),
        label: label.to_string(),
        rows,
    }
}

#[test]
fn distinct_timestamps_union_and_shared_fields_collide_later_wins() {
    let a = frame("A", "load", &[(10, 1.0), (20, 2.0)]);
    let b = frame("B", "load", &[(20, 9.0), (30, 3.0)]);

    let mut ab = MergedFrame::new();
    ab.absorb(a.clone());
    ab.absorb(b.clone());
    assert_eq!(ab.len(), 3);

    let mut ba = MergedFrame::new();
    ba.absorb(b);
    ba.absorb(a);
    assert_eq!(ba.len(), 3);

    // Same field set either way, but the later-absorbed frame wins the
    // colliding (timestamp, field) pair.
    let row = |m: &MergedFrame, ts: i64| {
        rrdcast_core::compile_frame(m.clone(), rrdcast_core::TimeFormat::Epoch, 0)
            .data
            .into_iter()
            .find(|r| r.get("time") == Some(&FieldValue::Int(ts)))
            .unwrap()
    };
    assert_eq!(row(&ab, 20).get("load"), Some(&FieldValue::Float(9.0)));
    assert_eq!(row(&ba, 20).get("load"), Some(&FieldValue::Float(2.0)));
}

#[test]
fn rows_with_different_fields_union_at_shared_timestamps() {
    let a = frame("IN", "inoctets", &[(10, 1.0), (20, 2.0)]);
    let b = frame("OUT", "outoctets", &[(10, 5.0), (20, 6.0)]);

    let mut merged = MergedFrame::new();
    merged.absorb(a);
    merged.absorb(b);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.labels(), ["IN", "OUT"]);

    let result = rrdcast_core::compile_frame(merged, rrdcast_core::TimeFormat::Epoch, 0);
    for row in &result.data {
        assert!(row.contains_key("inoctets"));
        assert!(row.contains_key("outoctets"));
    }
}

#[test]
fn meta_fields_overwrite_while_labels_append() {
    let mut merged = MergedFrame::new();
    merged.absorb(frame("A", "a", &[(100, 1.0)]));
    merged.absorb(frame("B", "b", &[(200, 1.0)]));

    let result = rrdcast_core::compile_frame(merged, rrdcast_core::TimeFormat::Epoch, 0);
    // Last absorbed frame's window wins; labels accumulate.
    assert_eq!(result.meta.start, FieldValue::Int(200));
    assert_eq!(result.meta.end, FieldValue::Int(200));
    assert_eq!(result.meta.data_sources, vec!["A", "B"]);
    assert_eq!(result.meta.rows, 2);
}
