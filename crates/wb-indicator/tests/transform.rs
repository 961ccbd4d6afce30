// File: crates/wb-indicator/tests/transform.rs
// Purpose: JSON document -> tabular file projection, header, quoting and encoding.

use serde_json::json;
use wb_indicator::{
    project, read_tabular, transform_file, IndicatorDataset, TabularRow, TextCodec, TransformError, HEADER,
};

const EXAMPLE: &str = r#"[{"country":{"id":"WLD","value":"World"},"date":"2015","value":"78","decimal":"0"}, {"country":{"id":"WLD","value":"World"},"date":"2014","value":"77","decimal":"0"}]"#;

#[test]
fn example_document_becomes_expected_file() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("sanitation_facilities.json");
    let csv_path = dir.path().join("sanitation_facilities.csv");
    std::fs::write(&json_path, EXAMPLE).unwrap();

    let written = transform_file(&json_path, &csv_path, TextCodec::default()).expect("transform");
    assert_eq!(written, 2);
    assert_eq!(
        std::fs::read_to_string(&csv_path).unwrap(),
        "CountryId,Country,Year,Sanitation,Decimal\nWLD,World,2015,78,0\nWLD,World,2014,77,0\n"
    );
}

#[test]
fn n_records_make_n_plus_one_lines() {
    let records: Vec<_> = (0..25)
        .map(|i| json!({"country": {"id": "LIC", "value": "Low income"}, "date": 2017 - i, "value": null, "decimal": 1}))
        .collect();
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("in.json");
    let csv_path = dir.path().join("out.csv");
    IndicatorDataset::new(records).save(&json_path).unwrap();

    transform_file(&json_path, &csv_path, TextCodec::default()).expect("transform");
    let text = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], HEADER.join(","));
    // null value is kept as an empty field, integers stay integers
    assert_eq!(lines[1], "LIC,Low income,2017,,1");
}

#[test]
fn numbers_keep_their_json_form() {
    let ds = IndicatorDataset::new(vec![
        json!({"country": {"id": "HIC", "value": "High income"}, "date": "2015", "value": 96.5, "decimal": 0}),
    ]);
    let rows = project(&ds).unwrap();
    assert_eq!(
        rows[0],
        TabularRow {
            country_id: "HIC".into(),
            country: "High income".into(),
            year: "2015".into(),
            sanitation: "96.5".into(),
            decimal: "0".into(),
        }
    );
}

#[test]
fn missing_field_is_fatal_and_names_the_record() {
    let ds = IndicatorDataset::new(vec![
        json!({"country": {"id": "WLD", "value": "World"}, "date": "2015", "value": 1, "decimal": 0}),
        json!({"country": {"id": "WLD"}, "date": "2014", "value": 1, "decimal": 0}),
    ]);
    match project(&ds) {
        Err(TransformError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn failed_transform_leaves_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("in.json");
    let csv_path = dir.path().join("out.csv");
    std::fs::write(&json_path, r#"[{"date": "2015"}]"#).unwrap();
    std::fs::write(&csv_path, "previous").unwrap();

    assert!(transform_file(&json_path, &csv_path, TextCodec::default()).is_err());
    assert_eq!(std::fs::read_to_string(&csv_path).unwrap(), "previous");
}

#[test]
fn missing_json_document_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = transform_file(&dir.path().join("absent.json"), &dir.path().join("out.csv"), TextCodec::default())
        .unwrap_err();
    assert!(matches!(err, TransformError::Dataset(_)), "{err}");
}

#[test]
fn commas_are_quoted_and_western_names_survive() {
    let ds = IndicatorDataset::new(vec![
        json!({"country": {"id": "KOR", "value": "Korea, Rep."}, "date": "2015", "value": 100, "decimal": 0}),
        json!({"country": {"id": "CIV", "value": "Côte d'Ivoire"}, "date": "2015", "value": 22.5, "decimal": 0}),
        json!({"country": {"id": "CUW", "value": "Curaçao"}, "date": "2015", "value": null, "decimal": 0}),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("in.json");
    let csv_path = dir.path().join("out.csv");
    ds.save(&json_path).unwrap();

    transform_file(&json_path, &csv_path, TextCodec::windows_1252()).expect("transform");
    let bytes = std::fs::read(&csv_path).unwrap();
    // single-byte ô and ç, not UTF-8 pairs
    assert!(bytes.windows(2).any(|w| w == b"C\xf4"));
    assert!(bytes.windows(3).any(|w| w == b"a\xe7a"));
    assert!(std::str::from_utf8(&bytes).is_err());

    let rows = read_tabular(&csv_path, TextCodec::windows_1252()).expect("read back");
    let countries: Vec<&str> = rows.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(countries, vec!["Korea, Rep.", "Côte d'Ivoire", "Curaçao"]);

    let text = TextCodec::windows_1252().decode(&bytes).into_owned();
    assert!(text.contains("KOR,\"Korea, Rep.\",2015,100,0"));
}
