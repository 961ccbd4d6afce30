// File: crates/chart-window/src/lib.rs
// Summary: Blocking chart viewer; renders chart-core to a window via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;

use chart_core::{Chart, RenderOptions, ViewState};
use thiserror::Error;
use tracing::{debug, info};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to open window: {0}")]
    Window(String),

    /// softbuffer's error is not `Send`, so only its message is kept.
    #[error("window surface: {0}")]
    Surface(String),

    #[error("rendering failed: {0}")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Open a window showing `chart` and block until the user closes it.
///
/// Mouse wheel zooms around the cursor, left-drag pans, `R`/`Home` restores
/// the initial view, `Esc`/`Q` closes.
pub fn show(chart: &Chart, opts: &RenderOptions, title: &str) -> Result<(), ViewerError> {
    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
        .build(&event_loop)
        .map_err(|e| ViewerError::Window(e.to_string()))?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(surface_err)?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(surface_err)?;

    let mut viewer = Viewer::new(chart.clone(), opts.clone());
    let mut failure: Option<ViewerError> = None;
    info!(title, "chart window open");

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                WindowEvent::CursorMoved { position, .. } => {
                    if viewer.cursor_moved(position.x, position.y) {
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    viewer.set_dragging(state == ElementState::Pressed);
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    viewer.zoom(scroll_amount(delta));
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape | VirtualKeyCode::Q => *control_flow = ControlFlow::Exit,
                    VirtualKeyCode::R | VirtualKeyCode::Home => {
                        viewer.reset();
                        window.request_redraw();
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                if let Err(e) = present(&mut surface, &mut viewer, size.width, size.height) {
                    failure = Some(e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    debug!("chart window closed");
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn present(surface: &mut softbuffer::Surface, viewer: &mut Viewer, w: u32, h: u32) -> Result<(), ViewerError> {
    // Minimized windows report a zero size.
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(surface_err)?;
    let pixels = viewer.frame(w, h)?;
    let mut buffer = surface.buffer_mut().map_err(surface_err)?;
    let n = buffer.len().min(pixels.len());
    buffer[..n].copy_from_slice(&pixels[..n]);
    buffer.present().map_err(surface_err)?;
    Ok(())
}

fn surface_err(e: softbuffer::SoftBufferError) -> ViewerError {
    ViewerError::Surface(e.to_string())
}

/// View state of the window: the chart, its initial view and the current pan/zoom.
struct Viewer {
    chart: Chart,
    opts: RenderOptions,
    home: ViewState,
    view: ViewState,
    cursor: Option<(f64, f64)>,
    dragging: bool,
}

impl Viewer {
    fn new(chart: Chart, opts: RenderOptions) -> Self {
        let home = ViewState::from_axes(&chart);
        Self { chart, opts, home, view: home, cursor: None, dragging: false }
    }

    fn frame(&mut self, w: u32, h: u32) -> Result<Vec<u32>, ViewerError> {
        self.opts.width = w as i32;
        self.opts.height = h as i32;
        self.view.apply_to_chart(&mut self.chart);
        let (rgba, _, _, _) = self
            .chart
            .render_to_rgba8(&self.opts)
            .map_err(|e| ViewerError::Render(e.into()))?;
        Ok(rgba_to_0rgb(&rgba))
    }

    /// Track the cursor; returns true when a drag moved the view.
    fn cursor_moved(&mut self, x: f64, y: f64) -> bool {
        let previous = self.cursor.replace((x, y));
        match previous {
            Some((px, py)) if self.dragging => {
                self.view.pan_by_pixels(x - px, y - py, self.opts.width, self.opts.height, &self.opts.insets);
                true
            }
            _ => false,
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    fn zoom(&mut self, scroll: f64) {
        let (cx, cy) = self.cursor.unwrap_or((self.opts.width as f64 * 0.5, self.opts.height as f64 * 0.5));
        self.view.zoom_at_pixel(scroll, cx, cy, self.opts.width, self.opts.height, &self.opts.insets);
    }

    fn reset(&mut self) {
        self.view = self.home;
    }
}

/// Wheel notches or trackpad pixels to a zoom step; positive zooms in.
fn scroll_amount(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
        MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
    }
}

/// Pack RGBA8 bytes into softbuffer's 0RGB words.
fn rgba_to_0rgb(rgba: &[u8]) -> Vec<u32> {
    rgba.chunks_exact(4)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}
