// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_ticks};
use crate::legend::{draw_legend, Legend};
use crate::series::{LineStyle, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

/// Which gridlines to draw at the tick positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLines {
    pub horizontal: bool,
    pub vertical: bool,
    pub color: skia::Color,
    pub width: f32,
}

impl GridLines {
    pub fn none() -> Self {
        Self { horizontal: false, vertical: false, ..Self::default() }
    }

    pub fn horizontal(color: skia::Color, width: f32) -> Self {
        Self { horizontal: true, vertical: false, color, width }
    }
}

impl Default for GridLines {
    fn default() -> Self {
        Self { horizontal: true, vertical: true, color: skia::Color::from_argb(255, 230, 230, 235), width: 1.0 }
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels, tick labels and legend text.
    pub draw_labels: bool,
    /// Draw the box around the plot area.
    pub show_spines: bool,
    /// Draw short tick marks outside the plot area.
    pub show_ticks: bool,
    pub grid: GridLines,
    pub legend: Option<Legend>,
    pub tick_font_size: f32,
    pub label_font_size: f32,
    pub title_font_size: f32,
    /// Distance between the title baseline and the top of the plot area.
    pub title_gap: f32,
    /// Approximate number of ticks per axis.
    pub tick_target: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            show_spines: true,
            show_ticks: true,
            grid: GridLines::default(),
            legend: None,
            tick_font_size: 14.0,
            label_font_size: 16.0,
            title_font_size: 20.0,
            title_gap: 40.0,
            tick_target: 6,
        }
    }
}

impl RenderOptions {
    pub fn plot_area(&self) -> RectI32 {
        RectI32::plot_area(self.width, self.height, &self.insets)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit the X axis to the data, keeping the Y axis as configured.
    pub fn autoscale_x(&mut self) {
        let v = ViewState::from_data(self);
        self.x_axis.min = v.x_min;
        self.x_axis.max = v.x_max;
    }

    /// Render to a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back rendered pixels");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = opts.plot_area();
        let map = PlotMap::new(plot, &self.x_axis, &self.y_axis);
        let x_ticks = nice_ticks(self.x_axis.min.min(self.x_axis.max), self.x_axis.max.max(self.x_axis.min), opts.tick_target);
        let y_ticks = nice_ticks(self.y_axis.min.min(self.y_axis.max), self.y_axis.max.max(self.y_axis.min), opts.tick_target);

        draw_grid(canvas, &map, &opts.grid, &x_ticks, &y_ticks);
        if opts.show_spines {
            draw_spines(canvas, plot, theme);
        }
        if opts.show_ticks {
            draw_tick_marks(canvas, &map, theme, &x_ticks, &y_ticks);
        }

        // Series are clipped to the plot area.
        canvas.save();
        canvas.clip_rect(map.rect(), Some(skia::ClipOp::Intersect), Some(true));
        for s in &self.series {
            draw_line_series(canvas, &map, s);
        }
        canvas.restore();

        let shaper = if opts.draw_labels || opts.legend.is_some() { Some(TextShaper::new()) } else { None };
        if let Some(shaper) = &shaper {
            if opts.draw_labels {
                draw_labels(canvas, shaper, &map, opts, self, &x_ticks, &y_ticks);
            }
            if let Some(legend) = &opts.legend {
                draw_legend(canvas, shaper, plot, legend, theme, &self.series, opts.draw_labels);
            }
        }
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

/// Maps data coordinates into the plot rectangle.
struct PlotMap {
    plot: RectI32,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl PlotMap {
    fn new(plot: RectI32, x: &Axis, y: &Axis) -> Self {
        Self { plot, x_min: x.min, x_span: x.max - x.min, y_min: y.min, y_span: y.max - y.min }
    }

    fn sx(&self, x: f64) -> f32 {
        let span = if self.x_span.abs() < 1e-9 { 1.0 } else { self.x_span };
        self.plot.left as f32 + ((x - self.x_min) / span) as f32 * self.plot.width() as f32
    }

    fn sy(&self, y: f64) -> f32 {
        let span = if self.y_span.abs() < 1e-9 { 1.0 } else { self.y_span };
        self.plot.bottom as f32 - ((y - self.y_min) / span) as f32 * self.plot.height() as f32
    }

    fn rect(&self) -> skia::Rect {
        skia::Rect::from_ltrb(
            self.plot.left as f32,
            self.plot.top as f32,
            self.plot.right as f32,
            self.plot.bottom as f32,
        )
    }
}

pub(crate) fn stroke_paint(style: &LineStyle) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(style.width);
    stroke.set_color(style.color);
    if let Some((on, off)) = style.dash {
        stroke.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    stroke
}

fn draw_grid(canvas: &skia::Canvas, map: &PlotMap, grid: &GridLines, x_ticks: &[f64], y_ticks: &[f64]) {
    let mut paint = skia::Paint::default();
    paint.set_color(grid.color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(grid.width);

    let (l, t, r, b) = (map.plot.left as f32, map.plot.top as f32, map.plot.right as f32, map.plot.bottom as f32);
    if grid.vertical {
        for &x in x_ticks {
            let px = map.sx(x);
            canvas.draw_line((px, t), (px, b), &paint);
        }
    }
    if grid.horizontal {
        for &y in y_ticks {
            let py = map.sy(y);
            canvas.draw_line((l, py), (r, py), &paint);
        }
    }
}

fn draw_spines(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    let rect = skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_rect(rect, &axis_paint);
}

fn draw_tick_marks(canvas: &skia::Canvas, map: &PlotMap, theme: &Theme, x_ticks: &[f64], y_ticks: &[f64]) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.tick);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    let (l, b) = (map.plot.left as f32, map.plot.bottom as f32);
    for &x in x_ticks {
        let px = map.sx(x);
        canvas.draw_line((px, b), (px, b + 5.0), &paint);
    }
    for &y in y_ticks {
        let py = map.sy(y);
        canvas.draw_line((l - 5.0, py), (l, py), &paint);
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    map: &PlotMap,
    opts: &RenderOptions,
    chart: &Chart,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let theme = &opts.theme;
    let plot = map.plot;
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let tick_size = opts.tick_font_size;

    for &x in x_ticks {
        shaper.draw_centered(canvas, &format_tick(x), map.sx(x), b + 10.0 + tick_size, tick_size, theme.tick);
    }
    let mut widest = 0.0f32;
    for &y in y_ticks {
        let label = format_tick(y);
        widest = widest.max(shaper.measure_width(&label, tick_size));
        shaper.draw_right(canvas, &label, l - 10.0, map.sy(y) + tick_size * 0.35, tick_size, theme.tick);
    }

    if !chart.x_axis.label.is_empty() {
        let y = b + 20.0 + tick_size + opts.label_font_size * 1.2;
        shaper.draw_centered(canvas, &chart.x_axis.label, (l + r) * 0.5, y, opts.label_font_size, theme.axis_label);
    }
    if !chart.y_axis.label.is_empty() {
        // Outside the tick labels, with a matching pad.
        let cx = l - 10.0 - widest - 20.0 - opts.label_font_size * 0.5;
        shaper.draw_vertical(canvas, &chart.y_axis.label, cx, (t + b) * 0.5, opts.label_font_size, theme.axis_label);
    }
    if let Some(title) = chart.title.as_deref().filter(|s| !s.is_empty()) {
        shaper.draw_centered(canvas, title, (l + r) * 0.5, t - opts.title_gap, opts.title_font_size, theme.title);
    }
}

fn draw_line_series(canvas: &skia::Canvas, map: &PlotMap, series: &Series) {
    let mut points = series
        .data_xy
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (map.sx(x), map.sy(y)));

    let Some(first) = points.next() else { return };
    let mut path = skia::Path::new();
    path.move_to(first);
    let mut segments = 0usize;
    for p in points {
        path.line_to(p);
        segments += 1;
    }
    if segments == 0 {
        // A lone point still shows up as a dot.
        let mut dot = stroke_paint(&series.style);
        dot.set_style(skia::paint::Style::Fill);
        canvas.draw_circle(first, series.style.width.max(1.0), &dot);
        return;
    }
    canvas.draw_path(&path, &stroke_paint(&series.style));
}
