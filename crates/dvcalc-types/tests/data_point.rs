//! DataPoint serialization tests

use dvcalc_types::{DataPoint, parse_timestamp};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_deserialize_minimal_record() {
    let point: DataPoint = serde_json::from_value(json!({
        "dataElement": "DE1",
        "period": "202101",
        "categoryOptionCombo": "COC1",
        "value": "12",
        "created": "2021-02-01T08:00:00.000"
    }))
    .unwrap();

    assert_eq!(point.data_element(), "DE1");
    assert_eq!(point.period(), "202101");
    assert_eq!(point.category_option_combo(), "COC1");
    assert_eq!(point.organisation_unit(), None);
    assert_eq!(point.attribute_option_combo(), None);
    assert_eq!(point.value(), "12");
    assert_eq!(point.created(), parse_timestamp("2021-02-01T08:00:00").unwrap());
}

#[test]
fn test_serialize_full_record() {
    let point = DataPoint::new("DE1", "202101", "COC1", "12", parse_timestamp("2021-02-01").unwrap())
        .with_organisation_unit("OU1")
        .with_attribute_option_combo("AOC1");

    assert_eq!(
        serde_json::to_value(&point).unwrap(),
        json!({
            "dataElement": "DE1",
            "period": "202101",
            "organisationUnit": "OU1",
            "categoryOptionCombo": "COC1",
            "attributeOptionCombo": "AOC1",
            "value": "12",
            "created": "2021-02-01T00:00:00.000"
        })
    );
}

#[test]
fn test_deserialize_rejects_bad_created() {
    let result: Result<DataPoint, _> = serde_json::from_value(json!({
        "dataElement": "DE1",
        "period": "202101",
        "categoryOptionCombo": "COC1",
        "value": "12",
        "created": "not a date"
    }));
    assert!(result.is_err());
}
