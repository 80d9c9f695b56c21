//! Render requests.
//!
//! A [`Page`] is what a view produces: an ordered list of [`Block`]s for a
//! renderer to draw. Charts carry their data and colours, never drawing code.

use serde::{Deserialize, Serialize};

use crate::deck::DeckColor;
use crate::tables::ColumnSummary;
use crate::view::View;

/// The output of one dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub view: View,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(view: View) -> Self {
        Self {
            view,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Bar charts on the page, in order.
    pub fn bar_charts(&self) -> impl Iterator<Item = &BarChart> {
        self.blocks.iter().filter_map(|block| match block {
            Block::BarChart(chart) => Some(chart),
            _ => None,
        })
    }

    /// Scatter charts on the page, in order.
    pub fn scatter_charts(&self) -> impl Iterator<Item = &ScatterChart> {
        self.blocks.iter().filter_map(|block| match block {
            Block::ScatterChart(chart) => Some(chart),
            _ => None,
        })
    }

    /// Notices on the page, in order.
    pub fn notices(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Notice { message } => Some(message.as_str()),
            _ => None,
        })
    }
}

/// A single render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Subheader { text: String },
    Text { text: String },
    Image { path: String },
    Table(DataTable),
    Describe { summaries: Vec<ColumnSummary> },
    BarChart(BarChart),
    ScatterChart(ScatterChart),
    /// A section that could not be built; the rest of the page is unaffected.
    Notice { message: String },
}

impl Block {
    pub fn title(text: impl Into<String>) -> Self {
        Block::Title { text: text.into() }
    }

    pub fn subheader(text: impl Into<String>) -> Self {
        Block::Subheader { text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Block::Text { text: text.into() }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Block::Notice {
            message: message.into(),
        }
    }
}

/// Rows of the raw dataset, stringified for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Rows in the source, which may exceed `rows.len()` when truncated.
    pub total_rows: usize,
}

impl DataTable {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_rows
    }
}

/// How bars of several series share an x position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    #[default]
    Single,
    Grouped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub x: String,
    pub y: f64,
    /// Series the bar belongs to when the chart is coloured by a field.
    pub series: Option<String>,
    /// `None` renders with the renderer's default style.
    pub color: Option<DeckColor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_field: String,
    pub y_field: String,
    /// Field the series are taken from, if any.
    pub color_field: Option<String>,
    pub mode: BarMode,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub series: Option<String>,
    pub color: Option<DeckColor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_field: String,
    pub y_field: String,
    pub color_field: Option<String>,
    pub points: Vec<ScatterPoint>,
}
