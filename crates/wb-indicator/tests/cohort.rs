// File: crates/wb-indicator/tests/cohort.rs
// Purpose: Cohort selection, ordering and null handling over tabular files.

use wb_indicator::{read_tabular, select_cohort, CohortError, TabularRow, TextCodec, WORLD};

fn row(id: &str, country: &str, year: &str, value: &str) -> TabularRow {
    TabularRow {
        country_id: id.into(),
        country: country.into(),
        year: year.into(),
        sanitation: value.into(),
        decimal: "0".into(),
    }
}

#[test]
fn world_series_is_ascending_and_excludes_other_countries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sanitation_facilities.csv");
    std::fs::write(
        &path,
        "CountryId,Country,Year,Sanitation,Decimal\n\
         WLD,World,2015,78,0\n\
         WLD,World,2014,77,0\n\
         LIC,Low income,2015,28,0\n\
         LIC,Low income,2014,27.5,0\n\
         FRA,France,2015,98.7,0\n",
    )
    .unwrap();
    let rows = read_tabular(&path, TextCodec::default()).expect("read");

    let world = select_cohort(&rows, WORLD).unwrap();
    assert_eq!(world.label, "World");
    assert_eq!(world.points, vec![(2014.0, 77.0), (2015.0, 78.0)]);

    let low = select_cohort(&rows, "Low income").unwrap();
    assert_eq!(low.points, vec![(2014.0, 27.5), (2015.0, 28.0)]);

    for label in ["Lower middle income", "Upper middle income", "High income"] {
        assert!(select_cohort(&rows, label).unwrap().is_empty());
    }
}

#[test]
fn empty_sanitation_is_kept_in_file_but_not_plotted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.csv");
    std::fs::write(
        &path,
        "CountryId,Country,Year,Sanitation,Decimal\nWLD,World,2017,,0\nWLD,World,2016,,0\nWLD,World,2015,78,0\n",
    )
    .unwrap();
    let rows = read_tabular(&path, TextCodec::default()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].sanitation, "");

    let world = select_cohort(&rows, WORLD).unwrap();
    assert_eq!(world.points, vec![(2015.0, 78.0)]);
}

#[test]
fn rows_missing_any_field_are_dropped() {
    let rows = vec![
        row("WLD", "World", "2015", "78"),
        row("", "World", "2014", "77"),
        TabularRow { decimal: String::new(), ..row("WLD", "World", "2013", "76") },
    ];
    assert_eq!(select_cohort(&rows, WORLD).unwrap().points, vec![(2015.0, 78.0)]);
}

#[test]
fn order_is_reversed_not_sorted() {
    // file order is newest first; the series is that order reversed
    let rows = vec![row("WLD", "World", "2016", "80"), row("WLD", "World", "2012", "70"), row("WLD", "World", "2014", "75")];
    let years: Vec<f64> = select_cohort(&rows, WORLD).unwrap().points.iter().map(|p| p.0).collect();
    assert_eq!(years, vec![2014.0, 2012.0, 2016.0]);
}

#[test]
fn non_numeric_value_in_a_selected_row_is_fatal() {
    let rows = vec![row("WLD", "World", "2015", "n/a"), row("XYZ", "Elsewhere", "2015", "n/a")];
    match select_cohort(&rows, WORLD) {
        Err(CohortError::InvalidNumber { field, value, .. }) => {
            assert_eq!(field, "Sanitation");
            assert_eq!(value, "n/a");
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
    // rows of other countries are never parsed
    assert!(select_cohort(&rows, "Low income").unwrap().is_empty());
}

#[test]
fn missing_file_and_bad_header_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_tabular(&dir.path().join("absent.csv"), TextCodec::default()).is_err());

    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "a,b,c,d,e\n1,2,3,4,5\n").unwrap();
    assert!(read_tabular(&path, TextCodec::default()).is_err());
}
