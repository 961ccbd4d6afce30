// File: crates/sanitation/tests/plot.rs
// Purpose: Cohort-to-series mapping and the fixed chart cosmetics.

use chart_core::{named_color, LegendPosition, Theme};
use sanitation::plot::{build_chart, load_cohorts, render_options, TITLE, Y_LABEL};
use wb_indicator::TabularRow;

fn row(country: &str, year: &str, value: &str) -> TabularRow {
    TabularRow {
        country_id: "X".into(),
        country: country.into(),
        year: year.into(),
        sanitation: value.into(),
        decimal: "0".into(),
    }
}

#[test]
fn series_follow_the_cohort_table() {
    let rows = vec![
        row("World", "2015", "78"),
        row("World", "2014", "77"),
        row("Lower middle income", "1990", "30"),
        row("Narnia", "2015", "12"),
    ];
    let cohorts = load_cohorts(&rows).unwrap();
    let chart = build_chart(&cohorts).unwrap();

    assert_eq!(chart.title.as_deref(), Some(TITLE));
    assert_eq!(chart.y_axis.label, Y_LABEL);
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (-2.0, 100.0));
    assert!(chart.x_axis.label.is_empty());
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (1990.0, 2015.0));

    let labels: Vec<_> = chart.series.iter().map(|s| s.label.as_deref().unwrap()).collect();
    assert_eq!(labels, ["World", "Low income", "Lower middle income", "Upper middle income", "High income"]);
    assert_eq!(chart.series[0].data_xy, vec![(2014.0, 77.0), (2015.0, 78.0)]);
    assert!(chart.series.iter().all(|s| s.data_xy.iter().all(|&(_, y)| y != 12.0)));

    let colors = ["black", "red", "lightcoral", "gray", "silver"];
    for (s, name) in chart.series.iter().zip(colors) {
        assert_eq!(Some(s.style.color), named_color(name), "{name}");
    }
    assert!(chart.series[0].style.is_dashed());
    assert!(chart.series[1..].iter().all(|s| !s.style.is_dashed()));
}

#[test]
fn non_numeric_value_in_selected_row_is_fatal() {
    let rows = vec![row("World", "2015", "n/a")];
    let err = load_cohorts(&rows).unwrap_err();
    assert!(format!("{err:#}").contains("World"), "{err:#}");
}

#[test]
fn unrelated_bad_rows_are_ignored() {
    let rows = vec![row("World", "2015", "78"), row("Narnia", "2015", "n/a")];
    assert!(load_cohorts(&rows).is_ok());
}

#[test]
fn cosmetics() {
    let opts = render_options(Theme::light()).unwrap();
    assert_eq!((opts.width, opts.height), (1500, 1000));
    assert!(!opts.show_spines);
    assert!(!opts.show_ticks);
    assert!(opts.grid.horizontal && !opts.grid.vertical);
    assert_eq!(Some(opts.grid.color), named_color("#DCDCDC"));
    let legend = opts.legend.expect("legend");
    assert_eq!(legend.position, LegendPosition::LowerRight);
    assert!(!legend.frame);
    assert!(opts.title_gap > 0.0);
}
