//! Terminal output: headings, comfy-table tables, bar and scatter charts.

use std::io::{self, Write};
use std::path::Path;

use comfy_table::{Cell, CellAlignment, Table};

use projectk_model::{
    BarChart, Block, ColumnSummary, DataTable, DeckColor, Page, ScatterChart, View,
};

use super::style::{
    align_column, apply_table_style, deck_cell, dim_cell, format_value, header_cell,
};
use super::{DeckSummary, PageRenderer};

const DEFAULT_WIDTH: u16 = 100;
const BAR_WIDTH: usize = 40;
const PLOT_WIDTH: usize = 60;
const PLOT_HEIGHT: usize = 16;
const EMPTY_CHART: &str = "(sin datos)";

/// Scatter glyphs, handed out per series in order of appearance.
const GLYPHS: [char; 8] = ['o', 'x', '+', '*', '@', '%', '&', '$'];
const NO_SERIES_GLYPH: char = '.';
const OVERLAP_GLYPH: char = '#';

/// Renders pages as plain text.
pub struct TextRenderer<W: Write> {
    out: W,
    styled: bool,
    width: u16,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            styled: false,
            width: DEFAULT_WIDTH,
        }
    }

    /// Emit ANSI colours in tables even when the output is not a terminal.
    #[must_use]
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        apply_table_style(&mut table, self.width);
        if self.styled {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table
    }

    fn heading(&mut self, text: &str, underline: char) -> io::Result<()> {
        let rule: String = std::iter::repeat_n(underline, text.chars().count()).collect();
        writeln!(self.out)?;
        writeln!(self.out, "{text}")?;
        writeln!(self.out, "{rule}")
    }

    fn block(&mut self, block: &Block) -> io::Result<()> {
        match block {
            Block::Title { text } => self.heading(text, '='),
            Block::Subheader { text } => self.heading(text, '-'),
            Block::Text { text } => writeln!(self.out, "{text}"),
            Block::Image { path } => {
                let status = if Path::new(path).exists() {
                    "encontrada"
                } else {
                    "no encontrada"
                };
                writeln!(self.out, "Imagen: {path} ({status})")
            }
            Block::Table(table) => self.data_table(table),
            Block::Describe { summaries } => self.describe(summaries),
            Block::BarChart(chart) => self.bar_chart(chart),
            Block::ScatterChart(chart) => self.scatter_chart(chart),
            Block::Notice { message } => writeln!(self.out, "Aviso: {message}"),
        }
    }

    fn data_table(&mut self, data: &DataTable) -> io::Result<()> {
        let mut table = self.table();
        table.set_header(data.columns.iter().map(|name| header_cell(name)));
        for row in &data.rows {
            table.add_row(row.iter().map(|value| {
                if value.is_empty() {
                    dim_cell("-")
                } else {
                    Cell::new(value)
                }
            }));
        }
        writeln!(self.out, "{table}")?;
        if data.is_truncated() {
            writeln!(
                self.out,
                "Mostrando {} de {} filas",
                data.rows.len(),
                data.total_rows
            )?;
        }
        Ok(())
    }

    fn describe(&mut self, summaries: &[ColumnSummary]) -> io::Result<()> {
        let mut table = self.table();
        let mut header = vec![header_cell("")];
        header.extend(summaries.iter().map(|summary| header_cell(&summary.column)));
        table.set_header(header);
        for (index, label) in ColumnSummary::STATISTICS.iter().enumerate() {
            let mut row = vec![header_cell(label)];
            row.extend(
                summaries
                    .iter()
                    .map(|summary| Cell::new(format_value(summary.values()[index]))),
            );
            table.add_row(row);
        }
        for index in 1..=summaries.len() {
            align_column(&mut table, index, CellAlignment::Right);
        }
        writeln!(self.out, "{table}")
    }

    fn bar_chart(&mut self, chart: &BarChart) -> io::Result<()> {
        writeln!(self.out, "{}", chart.title)?;
        if chart.is_empty() {
            return writeln!(self.out, "{EMPTY_CHART}");
        }

        let with_series = chart.bars.iter().any(|bar| bar.series.is_some());
        let series_label = chart.color_field.as_deref().unwrap_or("Serie");
        let mut table = self.table();
        let mut header = vec![header_cell(&chart.x_field)];
        if with_series {
            header.push(header_cell(series_label));
        }
        header.push(header_cell(&chart.y_field));
        header.push(header_cell(""));
        table.set_header(header);

        let max = chart
            .bars
            .iter()
            .map(|bar| bar.y)
            .filter(|y| y.is_finite())
            .fold(0.0_f64, f64::max);
        for bar in &chart.bars {
            let mut row = vec![Cell::new(&bar.x)];
            if with_series {
                row.push(deck_cell(bar.series.as_deref().unwrap_or("-"), bar.color));
            }
            row.push(Cell::new(format_value(bar.y)));
            row.push(deck_cell(bar_glyphs(bar.y, max), bar.color));
            table.add_row(row);
        }
        let value_column = if with_series { 2 } else { 1 };
        align_column(&mut table, value_column, CellAlignment::Right);
        writeln!(self.out, "{table}")
    }

    fn scatter_chart(&mut self, chart: &ScatterChart) -> io::Result<()> {
        writeln!(self.out, "{}", chart.title)?;
        if chart.points.is_empty() {
            return writeln!(self.out, "{EMPTY_CHART}");
        }

        let legend = Legend::from_chart(chart);
        let plot = Plot::from_chart(chart, &legend);
        for line in plot.lines(&chart.x_field, &chart.y_field) {
            writeln!(self.out, "{line}")?;
        }

        let mut table = self.table();
        table.set_header(vec![
            header_cell(""),
            header_cell(chart.color_field.as_deref().unwrap_or("Serie")),
            header_cell("Color"),
        ]);
        for entry in &legend.entries {
            let color = entry.color.map_or("-", |color| color.as_str());
            table.add_row(vec![
                Cell::new(entry.glyph),
                deck_cell(&entry.series, entry.color),
                deck_cell(color, entry.color),
            ]);
        }
        writeln!(self.out, "{table}")
    }
}

impl<W: Write> PageRenderer for TextRenderer<W> {
    fn render_page(&mut self, page: &Page) -> io::Result<()> {
        for block in &page.blocks {
            self.block(block)?;
        }
        self.out.flush()
    }

    fn render_views(&mut self, views: &[View]) -> io::Result<()> {
        let mut table = self.table();
        table.set_header(vec![header_cell("Opción"), header_cell("Vista")]);
        for view in views {
            table.add_row(vec![Cell::new(view.slug()), Cell::new(view.label())]);
        }
        writeln!(self.out, "{table}")?;
        self.out.flush()
    }

    fn render_decks(&mut self, decks: &[DeckSummary]) -> io::Result<()> {
        let mut table = self.table();
        table.set_header(vec![
            header_cell("Mazo"),
            header_cell("Cartas"),
            header_cell("Color"),
        ]);
        for summary in decks {
            let color = summary.color.map_or("-", |color| color.as_str());
            table.add_row(vec![
                deck_cell(&summary.deck, summary.color),
                Cell::new(summary.cards),
                deck_cell(color, summary.color),
            ]);
        }
        align_column(&mut table, 1, CellAlignment::Right);
        writeln!(self.out, "{table}")?;
        self.out.flush()
    }
}

/// Bar of block glyphs proportional to `value / max`.
fn bar_glyphs(value: f64, max: f64) -> String {
    if !value.is_finite() || value <= 0.0 || max <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize;
    "█".repeat(len.min(BAR_WIDTH))
}

struct LegendEntry {
    glyph: char,
    series: String,
    color: Option<DeckColor>,
}

struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    fn from_chart(chart: &ScatterChart) -> Self {
        let mut entries: Vec<LegendEntry> = Vec::new();
        for point in &chart.points {
            let Some(series) = &point.series else {
                continue;
            };
            if entries.iter().any(|entry| &entry.series == series) {
                continue;
            }
            entries.push(LegendEntry {
                glyph: GLYPHS[entries.len() % GLYPHS.len()],
                series: series.clone(),
                color: point.color,
            });
        }
        if chart.points.iter().any(|point| point.series.is_none()) {
            entries.push(LegendEntry {
                glyph: NO_SERIES_GLYPH,
                series: "-".to_string(),
                color: None,
            });
        }
        Self { entries }
    }

    fn glyph(&self, series: Option<&str>) -> char {
        let Some(series) = series else {
            return NO_SERIES_GLYPH;
        };
        self.entries
            .iter()
            .find(|entry| entry.series == series)
            .map_or(NO_SERIES_GLYPH, |entry| entry.glyph)
    }
}

/// Character grid of a scatter chart.
struct Plot {
    grid: Vec<Vec<char>>,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Plot {
    fn from_chart(chart: &ScatterChart, legend: &Legend) -> Self {
        let x_range = range(chart.points.iter().map(|point| point.x));
        let y_range = range(chart.points.iter().map(|point| point.y));
        let mut grid = vec![vec![' '; PLOT_WIDTH]; PLOT_HEIGHT];
        for point in &chart.points {
            let column = scale(point.x, x_range, PLOT_WIDTH);
            let row = PLOT_HEIGHT - 1 - scale(point.y, y_range, PLOT_HEIGHT);
            let glyph = legend.glyph(point.series.as_deref());
            let cell = &mut grid[row][column];
            *cell = match *cell {
                ' ' => glyph,
                existing if existing == glyph => glyph,
                _ => OVERLAP_GLYPH,
            };
        }
        Self {
            grid,
            x_range,
            y_range,
        }
    }

    fn lines(&self, x_field: &str, y_field: &str) -> Vec<String> {
        let top = format_value(self.y_range.1);
        let bottom = format_value(self.y_range.0);
        let margin = top.chars().count().max(bottom.chars().count());

        let mut lines = vec![y_field.to_string()];
        for (index, row) in self.grid.iter().enumerate() {
            let label = if index == 0 {
                top.as_str()
            } else if index + 1 == self.grid.len() {
                bottom.as_str()
            } else {
                ""
            };
            let body: String = row.iter().collect();
            lines.push(format!("{label:>margin$} │{}", body.trim_end()));
        }
        lines.push(format!("{:>margin$} └{}", "", "─".repeat(PLOT_WIDTH)));

        let left = format_value(self.x_range.0);
        let right = format_value(self.x_range.1);
        let gap = PLOT_WIDTH.saturating_sub(left.chars().count() + right.chars().count());
        lines.push(format!(
            "{:>margin$}  {left}{}{right}",
            "",
            " ".repeat(gap)
        ));
        lines.push(format!("{:>margin$}  {x_field}", ""));
        lines
    }
}

/// Finite min and max, widened when all values are equal.
fn range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });
    if !min.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    (min, max)
}

fn scale(value: f64, (min, max): (f64, f64), cells: usize) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let position = ((value - min) / (max - min) * (cells - 1) as f64).round();
    (position.max(0.0) as usize).min(cells - 1)
}
