//! View dispatcher.
//!
//! Maps a [`Selection`] to the page it renders. Each call is a fresh,
//! stateless evaluation against the shared dataset. Sections that fail are
//! replaced by a notice so the rest of the page still renders.

use polars::prelude::DataFrame;
use tracing::{debug, info_span, warn};

use projectk_ingest::Dataset;
use projectk_model::columns::{CONTEO, COSTE_MANA, DECK, MIGHT, TIPO};
use projectk_model::{
    Bar, BarChart, BarMode, Block, ColorPolicy, Page, ScatterChart, ScatterPoint, Selection, View,
};

use crate::aggregate::{avg_cost_by_deck, avg_cost_by_type, type_count, type_count_by_deck};
use crate::correlation::correlation;
use crate::describe::describe;
use crate::error::Result;
use crate::filter::filter_by_deck;
use crate::frame::{numeric_values, string_values};
use crate::palette::Palette;
use crate::preview::data_table;

/// Image shown on the landing page.
pub const HOME_IMAGE: &str = "img/project-k-images_fgrq.600.webp";

/// Prefix of the correlation coefficient line.
pub const CORRELATION_LABEL: &str = "Coeficiente de correlación";

/// Knobs that change how pages are built, not which blocks they contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOptions {
    pub color_policy: ColorPolicy,
    /// Rows of the raw dataset shown on the Explore page.
    pub preview_rows: usize,
    pub image_path: String,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            color_policy: ColorPolicy::default(),
            preview_rows: 100,
            image_path: HOME_IMAGE.to_string(),
        }
    }
}

/// Builds the page for `selection`.
pub fn dispatch(dataset: &Dataset, selection: &Selection, options: &DispatchOptions) -> Page {
    let span = info_span!("dispatch", view = selection.view.slug());
    let _guard = span.enter();

    let mut page = Page::new(selection.view);
    let mut palette = Palette::new(options.color_policy);
    match selection.view {
        View::Home => home(&mut page, options),
        View::Explore => explore(&mut page, dataset, options),
        View::PerDeck => per_deck(&mut page, dataset, selection.deck.as_deref(), &mut palette),
        View::Compare => compare(&mut page, dataset, &mut palette),
        View::Correlate => correlate(&mut page, dataset, &mut palette),
    }
    debug!(blocks = page.blocks.len(), "page built");
    page
}

fn push_section(page: &mut Page, section: &str, built: Result<Block>) {
    match built {
        Ok(block) => page.push(block),
        Err(error) => {
            warn!(section, %error, "section degraded");
            page.push(Block::notice(format!("{section}: {error}")));
        }
    }
}

fn home(page: &mut Page, options: &DispatchOptions) {
    page.push(Block::title("EDA - Project K"));
    page.push(Block::subheader("AlexProton"));
    page.push(Block::text(
        "Esta aplicación permite explorar y analizar los datos de cartas del Proyecto K.",
    ));
    page.push(Block::Image {
        path: options.image_path.clone(),
    });
}

fn explore(page: &mut Page, dataset: &Dataset, options: &DispatchOptions) {
    page.push(Block::title("Exploración de Datos"));
    page.push(Block::text("A continuación se muestra el dataset:"));
    push_section(
        page,
        "Dataset",
        data_table(dataset.frame(), options.preview_rows).map(Block::Table),
    );
    page.push(Block::text("Descripción de las columnas numéricas:"));
    push_section(
        page,
        "Descripción",
        describe(dataset.frame()).map(|summaries| Block::Describe { summaries }),
    );
}

fn per_deck(page: &mut Page, dataset: &Dataset, deck: Option<&str>, palette: &mut Palette) {
    page.push(Block::title("Análisis por Mazo"));

    let deck = match deck {
        Some(deck) => deck.to_string(),
        None => match dataset.decks().into_iter().next() {
            Some(first) => first,
            None => {
                page.push(Block::notice("El dataset no contiene mazos"));
                return;
            }
        },
    };
    page.push(Block::text(format!("Mazo seleccionado: {deck}")));

    let subset = match filter_by_deck(dataset, &deck) {
        Ok(subset) => subset,
        Err(error) => {
            push_section(page, "Mazo", Err(error));
            return;
        }
    };
    if subset.height() == 0 {
        debug!(deck = %deck, "selected deck has no cards");
    }

    page.push(Block::subheader("Conteo de Tipos de Carta"));
    push_section(
        page,
        "Conteo de Tipos de Carta",
        deck_type_chart(&subset, &deck, palette),
    );

    page.push(Block::subheader("Coste Promedio de Maná por Tipo"));
    push_section(
        page,
        "Coste Promedio de Maná por Tipo",
        deck_cost_chart(&subset, &deck, palette),
    );
}

fn deck_type_chart(subset: &DataFrame, deck: &str, palette: &mut Palette) -> Result<Block> {
    let color = palette.color(deck)?;
    let bars = type_count(subset)?
        .into_iter()
        .map(|row| Bar {
            x: row.tipo,
            y: row.conteo as f64,
            series: None,
            color,
        })
        .collect();
    Ok(Block::BarChart(BarChart {
        title: format!("Distribución de Tipos - {deck}"),
        x_field: TIPO.to_string(),
        y_field: CONTEO.to_string(),
        color_field: None,
        mode: BarMode::Single,
        bars,
    }))
}

fn deck_cost_chart(subset: &DataFrame, deck: &str, palette: &mut Palette) -> Result<Block> {
    let color = palette.color(deck)?;
    let bars = avg_cost_by_type(subset)?
        .into_iter()
        .map(|row| Bar {
            x: row.tipo,
            y: row.coste_mana,
            series: None,
            color,
        })
        .collect();
    Ok(Block::BarChart(BarChart {
        title: "Coste Promedio de Maná por Tipo".to_string(),
        x_field: TIPO.to_string(),
        y_field: COSTE_MANA.to_string(),
        color_field: None,
        mode: BarMode::Single,
        bars,
    }))
}

fn compare(page: &mut Page, dataset: &Dataset, palette: &mut Palette) {
    page.push(Block::title("Comparaciones entre Mazos"));

    page.push(Block::subheader("Conteo por Tipo de Carta por Mazo"));
    push_section(
        page,
        "Conteo por Tipo de Carta por Mazo",
        grouped_type_chart(dataset.frame(), palette),
    );

    page.push(Block::subheader("Coste Promedio de Maná por Mazo"));
    push_section(
        page,
        "Coste Promedio de Maná por Mazo",
        deck_average_chart(dataset.frame(), palette),
    );
}

fn grouped_type_chart(frame: &DataFrame, palette: &mut Palette) -> Result<Block> {
    let rows = type_count_by_deck(frame)?;
    let mut bars = Vec::with_capacity(rows.len());
    for row in rows {
        let color = palette.color(&row.deck)?;
        bars.push(Bar {
            x: row.tipo,
            y: row.conteo as f64,
            series: Some(row.deck),
            color,
        });
    }
    Ok(Block::BarChart(BarChart {
        title: "Conteo por Tipo de Carta por Mazo (Barras Agrupadas)".to_string(),
        x_field: TIPO.to_string(),
        y_field: CONTEO.to_string(),
        color_field: Some(DECK.to_string()),
        mode: BarMode::Grouped,
        bars,
    }))
}

fn deck_average_chart(frame: &DataFrame, palette: &mut Palette) -> Result<Block> {
    let rows = avg_cost_by_deck(frame)?;
    let mut bars = Vec::with_capacity(rows.len());
    for row in rows {
        let color = palette.color(&row.deck)?;
        bars.push(Bar {
            x: row.deck.clone(),
            y: row.coste_mana,
            series: Some(row.deck),
            color,
        });
    }
    Ok(Block::BarChart(BarChart {
        title: "Coste Promedio de Maná por Mazo".to_string(),
        x_field: DECK.to_string(),
        y_field: COSTE_MANA.to_string(),
        color_field: Some(DECK.to_string()),
        mode: BarMode::Single,
        bars,
    }))
}

fn correlate(page: &mut Page, dataset: &Dataset, palette: &mut Palette) {
    page.push(Block::title("Correlaciones"));

    page.push(Block::subheader("Coste de Maná vs Might"));
    push_section(
        page,
        "Coste de Maná vs Might",
        scatter_chart(dataset.frame(), palette),
    );

    match correlation(dataset.frame(), COSTE_MANA, MIGHT) {
        Ok(result) => {
            page.push(Block::text(format!(
                "{CORRELATION_LABEL}: {}",
                result.display()
            )));
        }
        Err(error) if error.is_undefined_correlation() => {
            warn!(%error, "correlation undefined");
            page.push(Block::text(format!("{CORRELATION_LABEL}: indefinido")));
            page.push(Block::notice(error.to_string()));
        }
        Err(error) => push_section(page, CORRELATION_LABEL, Err(error)),
    }
}

fn scatter_chart(frame: &DataFrame, palette: &mut Palette) -> Result<Block> {
    let xs = numeric_values(frame, COSTE_MANA)?;
    let ys = numeric_values(frame, MIGHT)?;
    let decks = string_values(frame, DECK)?;

    let mut points = Vec::new();
    for ((x, y), deck) in xs.into_iter().zip(ys).zip(decks) {
        let (Some(x), Some(y)) = (x, y) else {
            continue;
        };
        let color = match deck.as_deref() {
            Some(name) => palette.color(name)?,
            None => None,
        };
        points.push(ScatterPoint {
            x,
            y,
            series: deck,
            color,
        });
    }
    Ok(Block::ScatterChart(ScatterChart {
        title: "Coste de Maná vs Might por Mazo".to_string(),
        x_field: COSTE_MANA.to_string(),
        y_field: MIGHT.to_string(),
        color_field: Some(DECK.to_string()),
        points,
    }))
}
