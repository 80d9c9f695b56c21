//! JSON output.

use std::io::{self, Write};

use serde::Serialize;

use projectk_model::{Page, View};

use super::{DeckSummary, PageRenderer, ViewEntry};

/// Writes each page or listing as one pretty-printed JSON document.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> PageRenderer for JsonRenderer<W> {
    fn render_page(&mut self, page: &Page) -> io::Result<()> {
        self.emit(page)
    }

    fn render_views(&mut self, views: &[View]) -> io::Result<()> {
        let entries: Vec<ViewEntry> = views.iter().copied().map(ViewEntry::from).collect();
        self.emit(&entries)
    }

    fn render_decks(&mut self, decks: &[DeckSummary]) -> io::Result<()> {
        self.emit(decks)
    }
}
