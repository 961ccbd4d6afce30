// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, Chart, LineStyle, RenderOptions, Series};

fn small_chart() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.title = Some("smoke".into());
    chart.add_series(
        Series::with_data(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
            .labeled("line")
            .styled(LineStyle::dashed(skia_safe::Color::BLACK)),
    );
    chart
}

#[test]
fn render_smoke_png() {
    let chart = small_chart();
    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
}

#[test]
fn render_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");
    std::fs::write(&out, b"not a png").unwrap();

    small_chart().render_to_png(&RenderOptions::default(), &out).expect("render");
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
