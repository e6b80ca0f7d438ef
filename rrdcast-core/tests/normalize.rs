use rrdcast_core::{
    FieldValue, MergedFrame, Row, SeriesFrame, TimeFormat, coerce_value, compile_frame,
    format_timestamp, normalize_result,
};

fn one_row_frame(fields: Row) -> MergedFrame {
    let mut merged = MergedFrame::new();
    merged.absorb(SeriesFrame {
        start: 1_600_000_000,
        step: 300,
        end: 1_600_000_300,
        label: "DS".to_string(),
        rows: vec![(1_600_000_300, fields)],
    });
    merged
}

#[test]
fn coercion_covers_integers_decimals_scientific_notation_and_nan() {
    assert_eq!(
        coerce_value(FieldValue::Text("300".into())),
        FieldValue::Int(300)
    );
    assert_eq!(
        coerce_value(FieldValue::Text("10.5".into())),
        FieldValue::Float(10.5)
    );
    assert_eq!(
        coerce_value(FieldValue::Text("1.0700000000e+01".into())),
        FieldValue::Float(10.7)
    );
    assert_eq!(
        coerce_value(FieldValue::Text("-2.5e-03".into())),
        FieldValue::Float(-0.0025)
    );
    assert_eq!(coerce_value(FieldValue::Text("NaN".into())), FieldValue::Null);
    assert_eq!(coerce_value(FieldValue::Float(f64::NAN)), FieldValue::Null);
    assert_eq!(
        coerce_value(FieldValue::Text("GAUGE".into())),
        FieldValue::Text("GAUGE".into())
    );
}

#[test]
fn epoch_format_emits_bare_integers() {
    assert_eq!(
        format_timestamp(1_600_000_000, TimeFormat::Epoch),
        FieldValue::Int(1_600_000_000)
    );
}

#[test]
fn utc_format_emits_calendar_text() {
    assert_eq!(
        format_timestamp(0, TimeFormat::Utc),
        FieldValue::Text("1970-01-01 00:00:00".into())
    );
    assert_eq!(
        format_timestamp(1_600_000_000, TimeFormat::Utc),
        FieldValue::Text("2020-09-13 12:26:40".into())
    );
}

#[test]
fn rows_gain_a_time_field_shifted_by_the_display_offset() {
    let mut fields = Row::new();
    fields.insert("load".into(), FieldValue::Text("1.5000000000e+00".into()));
    let result = compile_frame(one_row_frame(fields), TimeFormat::Epoch, 604_800);

    assert_eq!(result.meta.rows, 1);
    // Meta start/end stay unshifted.
    assert_eq!(result.meta.start, FieldValue::Int(1_600_000_000));
    let row = &result.data[0];
    assert_eq!(row.get("time"), Some(&FieldValue::Int(1_600_605_100)));
    assert_eq!(row.get("load"), Some(&FieldValue::Float(1.5)));
}

#[test]
fn normalization_is_idempotent() {
    let mut fields = Row::new();
    fields.insert("load".into(), FieldValue::Text("42".into()));
    fields.insert("label".into(), FieldValue::Text("uplink".into()));
    fields.insert("missing".into(), FieldValue::Text("NaN".into()));

    for format in [TimeFormat::Epoch, TimeFormat::Utc] {
        let compiled = compile_frame(one_row_frame(fields.clone()), format, 0);
        let mut again = compiled.clone();
        normalize_result(&mut again);
        assert_eq!(again, compiled);
        let mut third = again.clone();
        normalize_result(&mut third);
        assert_eq!(third, again);
    }
}

#[test]
fn genuine_strings_survive_normalization() {
    let mut fields = Row::new();
    fields.insert("state".into(), FieldValue::Text("degraded".into()));
    let result = compile_frame(one_row_frame(fields), TimeFormat::Utc, 0);
    assert_eq!(
        result.data[0].get("state"),
        Some(&FieldValue::Text("degraded".into()))
    );
}
