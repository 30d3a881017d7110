// Host-side tests for reading the gauge's two measures out of a query result.

#![allow(dead_code)]
mod common;

use common::approx;
use common::core::error::GaugeError;
use common::core::values::{percentage, GaugeValues, QueryFields, Row};
use serde_json::json;

fn fields(names: &[&str]) -> QueryFields {
    serde_json::from_value(json!({
        "measures": names.iter().map(|n| json!({"name": n, "label": n})).collect::<Vec<_>>(),
    }))
    .expect("fields deserialize")
}

fn rows(value: serde_json::Value) -> Vec<Row> {
    serde_json::from_value(value).expect("rows deserialize")
}

#[test]
fn percentage_of_two_measures() {
    let values = GaugeValues::from_query(
        &rows(json!([
            {"orders.done": {"value": 50}, "orders.total": {"value": 200}},
            {"orders.done": {"value": 1}, "orders.total": {"value": 1}},
        ])),
        &fields(&["orders.done", "orders.total"]),
    )
    .expect("valid query");
    assert_eq!(values.nominator, 50.0);
    assert_eq!(values.denominator, 200.0);
    assert!(approx(values.percentage, 25.0));
}

#[test]
fn zero_denominator_reads_as_zero_percent() {
    assert_eq!(percentage(10.0, 0.0), 0.0);
    assert_eq!(percentage(0.0, 0.0), 0.0);
    assert_eq!(GaugeValues::new(7.0, 0.0).percentage, 0.0);
}

#[test]
fn percentage_is_not_clamped() {
    assert!(approx(percentage(150.0, 100.0), 150.0));
    assert!(approx(percentage(-5.0, 10.0), -50.0));
}

#[test]
fn fewer_than_two_measures_is_refused_first() {
    // Checked before the rows, so an empty result still reports the measures.
    let err = GaugeValues::from_query(&[], &fields(&["orders.done"])).unwrap_err();
    assert_eq!(err, GaugeError::InsufficientMeasures { found: 1 });
    assert_eq!(err.title(), "Not enough measures");
    assert_eq!(err.message(), "This chart requires 2 measures.");

    let err = GaugeValues::from_query(&[], &QueryFields::default()).unwrap_err();
    assert_eq!(err, GaugeError::InsufficientMeasures { found: 0 });
}

#[test]
fn extra_measures_are_ignored() {
    let values = GaugeValues::from_query(
        &rows(json!([{"a": {"value": 1}, "b": {"value": 4}, "c": {"value": 99}}])),
        &fields(&["a", "b", "c"]),
    )
    .expect("valid query");
    assert!(approx(values.percentage, 25.0));
}

#[test]
fn empty_result_is_refused() {
    let err = GaugeValues::from_query(&[], &fields(&["a", "b"])).unwrap_err();
    assert_eq!(err, GaugeError::NoResults);
    assert_eq!(err.title(), "No results");
    assert_eq!(err.message(), "The query returned no rows.");
}

#[test]
fn missing_cell_names_the_field() {
    let err = GaugeValues::from_query(&rows(json!([{"a": {"value": 1}}])), &fields(&["a", "b"]))
        .unwrap_err();
    assert_eq!(
        err,
        GaugeError::MissingMeasure {
            field: "b".to_string()
        }
    );
    assert_eq!(err.message(), "Measure `b` is missing from the first row.");
}

#[test]
fn cell_shapes() {
    let values = GaugeValues::from_query(
        &rows(json!([{"a": {"value": null}, "b": "8"}])),
        &fields(&["a", "b"]),
    )
    .expect("null and numeric text are accepted");
    assert_eq!(values.nominator, 0.0);
    assert_eq!(values.denominator, 8.0);

    let values = GaugeValues::from_query(
        &rows(json!([{"a": {"rendered": "3"}, "b": 4.5}])),
        &fields(&["a", "b"]),
    )
    .expect("cell without value reads as empty");
    assert_eq!(values.nominator, 0.0);
    assert_eq!(values.denominator, 4.5);
}

#[test]
fn non_numeric_cell_is_refused() {
    let err = GaugeValues::from_query(
        &rows(json!([{"a": {"value": "n/a"}, "b": {"value": 2}}])),
        &fields(&["a", "b"]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        GaugeError::NonNumeric {
            field: "a".to_string()
        }
    );
    assert_eq!(err.title(), "Invalid measure value");

    let err = GaugeValues::from_query(
        &rows(json!([{"a": {"value": 1}, "b": {"value": [2]}}])),
        &fields(&["a", "b"]),
    )
    .unwrap_err();
    assert!(matches!(err, GaugeError::NonNumeric { .. }));
}

#[test]
fn non_finite_text_is_refused() {
    for text in ["inf", "-infinity", "NaN"] {
        let err = GaugeValues::from_query(
            &rows(json!([{"a": {"value": text}, "b": {"value": 2}}])),
            &fields(&["a", "b"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            GaugeError::NonNumeric {
                field: "a".to_string()
            },
            "cell {:?}",
            text
        );
    }
}

#[test]
fn query_fields_tolerate_missing_and_extra_keys() {
    let parsed: QueryFields = serde_json::from_value(json!({
        "measures": [{"name": "a", "label": "A", "type": "count"}],
        "dimensions": [{"name": "d"}],
    }))
    .expect("parses");
    assert_eq!(parsed.measures.len(), 1);
    assert_eq!(parsed.measures[0].name, "a");

    let empty: QueryFields = serde_json::from_value(json!({})).expect("parses");
    assert!(empty.measures.is_empty());
}
