//! Page renderers.
//!
//! A renderer draws what the dispatcher produced. The text renderer targets a
//! terminal; the JSON renderer emits the page as data for other tools.

mod json;
mod style;
mod text;

use std::io;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use projectk_model::{DeckColor, Page, View};

pub use json::JsonRenderer;
pub use text::TextRenderer;

/// Output format of rendered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One row of the deck listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    pub deck: String,
    pub cards: usize,
    pub color: Option<DeckColor>,
}

/// A navigation option as listed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewEntry {
    pub slug: &'static str,
    pub label: &'static str,
}

impl From<View> for ViewEntry {
    fn from(view: View) -> Self {
        Self {
            slug: view.slug(),
            label: view.label(),
        }
    }
}

/// Draws pages and listings to some output.
pub trait PageRenderer {
    fn render_page(&mut self, page: &Page) -> io::Result<()>;

    fn render_views(&mut self, views: &[View]) -> io::Result<()>;

    fn render_decks(&mut self, decks: &[DeckSummary]) -> io::Result<()>;
}
