// ABOUTME: Chart adapter rendering plotters drawings to SVG for display
// ABOUTME: Owns the drawing backend so every chart ships as image/svg+xml

use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::prelude::SVGBackend;

use crate::constants::chart;
use crate::error::WcatError;
use crate::transport::{self, ContentType, Payload, Transport};

/// Result type the drawing closure returns; plotters errors convert with `?`.
pub type DrawResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Backend options passed through to the drawing area. The output format is
/// not among them: charts are always rendered as SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: chart::DEFAULT_WIDTH,
            height: chart::DEFAULT_HEIGHT,
        }
    }
}

impl ChartOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Draw a chart and send it to the default wcat server for display.
///
/// The closure receives a drawing area backed by an in-memory SVG document;
/// anything plotters can draw works here. Rendering errors propagate, a
/// missing display server does not.
pub fn show<F>(name: &str, options: ChartOptions, draw: F) -> Result<(), WcatError>
where
    F: FnOnce(DrawingArea<SVGBackend, Shift>) -> DrawResult,
{
    show_with(transport::default_client(), name, options, draw)
}

/// Same as [`show`] but delivering through an explicit transport.
pub fn show_with<T, F>(
    transport: &T,
    name: &str,
    options: ChartOptions,
    draw: F,
) -> Result<(), WcatError>
where
    T: Transport + ?Sized,
    F: FnOnce(DrawingArea<SVGBackend, Shift>) -> DrawResult,
{
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (options.width, options.height)).into_drawing_area();
        draw(root).map_err(WcatError::Render)?;
        // The backend flushes the document into `svg` when the last drawing
        // area handle is dropped.
    }
    transport.post_file(Payload::Text(svg), ContentType::Svg, name);
    Ok(())
}
