// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod view;
pub mod theme;
pub mod text;
pub mod legend;

pub use chart::{Chart, GridLines, RenderOptions};
pub use series::{LineStyle, Series};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::{named_color, Theme};
pub use text::TextShaper;
pub use legend::{Legend, LegendPosition};
