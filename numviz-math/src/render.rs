//! Output seams.
//!
//! The library never draws anything itself. Charts and LaTeX are handed to
//! whatever implements these traits; the command-line front end prints them,
//! tests record them.

use std::io;

use crate::plots::Chart;

/// Displays sampled series.
pub trait ChartRenderer {
    /// Draw one chart.
    fn render_chart(&mut self, chart: &Chart) -> io::Result<()>;
}

/// Displays LaTeX markup.
pub trait MarkupRenderer {
    /// Show one LaTeX fragment.
    fn render_markup(&mut self, latex: &str) -> io::Result<()>;
}

/// Keeps everything it is asked to render.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Charts in render order.
    pub charts: Vec<Chart>,
    /// Markup in render order.
    pub markup: Vec<String>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render_chart(&mut self, chart: &Chart) -> io::Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

impl MarkupRenderer for RecordingRenderer {
    fn render_markup(&mut self, latex: &str) -> io::Result<()> {
        self.markup.push(latex.to_string());
        Ok(())
    }
}

/// Render a chart and its caption, if any.
pub fn render_with_caption<R>(renderer: &mut R, chart: &Chart) -> io::Result<()>
where
    R: ChartRenderer + MarkupRenderer,
{
    renderer.render_chart(chart)?;
    if let Some(latex) = &chart.latex {
        renderer.render_markup(latex)?;
    }
    Ok(())
}
