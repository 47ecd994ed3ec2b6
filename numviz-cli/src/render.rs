//! Terminal renderers for charts and LaTeX

use std::io::{self, Write};

use numviz_math::plots::Chart;
use numviz_math::render::{ChartRenderer, MarkupRenderer};

use crate::format::format_cell;

/// Prints each series as a two-column table
pub(crate) struct TextChartRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextChartRenderer<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ChartRenderer for TextChartRenderer<W> {
    fn render_chart(&mut self, chart: &Chart) -> io::Result<()> {
        writeln!(self.out, "{}", chart.title)?;
        writeln!(self.out, "{}", "=".repeat(chart.title.chars().count()))?;
        for series in &chart.series {
            writeln!(self.out)?;
            writeln!(self.out, "{} ({} points)", series.label, series.len())?;
            writeln!(self.out, "{:>14} {:>14}", "x", "y")?;
            for &(x, y) in &series.points {
                writeln!(self.out, "{} {}", format_cell(x), format_cell(y))?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> MarkupRenderer for TextChartRenderer<W> {
    fn render_markup(&mut self, latex: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", latex)?;
        self.out.flush()
    }
}

/// Passes LaTeX through unchanged, one fragment per line
pub(crate) struct LatexRenderer<W: Write> {
    out: W,
}

impl<W: Write> LatexRenderer<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> MarkupRenderer for LatexRenderer<W> {
    fn render_markup(&mut self, latex: &str) -> io::Result<()> {
        writeln!(self.out, "{}", latex)?;
        self.out.flush()
    }
}
