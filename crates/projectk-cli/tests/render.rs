//! Rendering dispatched pages to text and JSON.

use std::io::Write;

use tempfile::NamedTempFile;

use projectk_analysis::{DispatchOptions, dispatch};
use projectk_cli::render::{DeckSummary, JsonRenderer, PageRenderer, TextRenderer};
use projectk_ingest::{Dataset, load_dataset};
use projectk_model::{ColorPolicy, DeckColor, Selection, View};

const DECKS_CSV: &str = "\
Nombre,Deck,Tipo,Coste Maná,Might
Powder Monkeys,Jinx,Unit,1,2
Flame Chompers,Jinx,Unit,2,3
Super Mega Death Rocket,Jinx,Spell,5,
Hexcore,Viktor,Gear,3,1
Siphoning Strike,Viktor,Spell,2,4
Stormbringer,Volibear,Unit,6,7
";

fn dataset() -> (NamedTempFile, Dataset) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DECKS_CSV.as_bytes()).unwrap();
    let dataset = load_dataset(file.path()).unwrap();
    (file, dataset)
}

fn render_text(view: View, deck: Option<&str>, options: &DispatchOptions) -> String {
    let (_file, dataset) = dataset();
    let mut selection = Selection::new(view);
    if let Some(deck) = deck {
        selection = selection.with_deck(deck);
    }
    let page = dispatch(&dataset, &selection, options);
    let mut renderer = TextRenderer::new(Vec::new());
    renderer.render_page(&page).unwrap();
    String::from_utf8(renderer.into_inner()).unwrap()
}

#[test]
fn home_page_reports_missing_image() {
    let options = DispatchOptions {
        image_path: "no/such/portada.webp".to_string(),
        ..DispatchOptions::default()
    };
    let text = render_text(View::Home, None, &options);

    assert!(text.contains("EDA - Project K"));
    assert!(text.contains("AlexProton"));
    assert!(text.contains("Imagen: no/such/portada.webp (no encontrada)"));
}

#[test]
fn explore_page_truncates_preview() {
    let options = DispatchOptions {
        preview_rows: 2,
        ..DispatchOptions::default()
    };
    let text = render_text(View::Explore, None, &options);

    assert!(text.contains("Powder Monkeys"));
    assert!(!text.contains("Stormbringer"));
    assert!(text.contains("Mostrando 2 de 6 filas"));
    assert!(text.contains("count"));
    assert!(text.contains("Coste Maná"));
}

#[test]
fn per_deck_page_draws_bars() {
    let text = render_text(View::PerDeck, Some("Viktor"), &DispatchOptions::default());

    assert!(text.contains("Mazo seleccionado: Viktor"));
    assert!(text.contains("Distribución de Tipos - Viktor"));
    assert!(text.contains("Gear"));
    assert!(text.contains('█'));
    assert!(!text.contains("Aviso"));
}

#[test]
fn per_deck_page_for_absent_deck_has_empty_charts() {
    let text = render_text(View::PerDeck, Some("Yasuo"), &DispatchOptions::default());

    assert!(text.contains("Mazo seleccionado: Yasuo"));
    assert_eq!(text.matches("(sin datos)").count(), 2);
}

#[test]
fn correlate_page_plots_and_reports_coefficient() {
    let text = render_text(View::Correlate, None, &DispatchOptions::default());

    assert!(text.contains("Coste de Maná vs Might por Mazo"));
    assert!(text.contains("Coeficiente de correlación: "));
    assert!(text.contains('└'));
    assert!(text.contains("Volibear"));
    assert!(text.contains("orange"));
}

#[test]
fn strict_colours_render_notices() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Deck,Tipo,Coste Ma\xc3\xa1,Might\nTeemo,Unit,1,1\nJinx,Unit,2,2\n")
        .unwrap();
    let dataset = load_dataset(file.path()).unwrap();
    let options = DispatchOptions {
        color_policy: ColorPolicy::Strict,
        ..DispatchOptions::default()
    };
    let page = dispatch(&dataset, &Selection::new(View::Compare), &options);

    let mut renderer = TextRenderer::new(Vec::new());
    renderer.render_page(&page).unwrap();
    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(text.contains("Aviso: "));
    assert!(text.contains("Teemo"));
    assert!(text.contains("Comparaciones entre Mazos"));
}

#[test]
fn json_page_is_tagged_by_block_kind() {
    let (_file, dataset) = dataset();
    let page = dispatch(
        &dataset,
        &Selection::new(View::Compare),
        &DispatchOptions::default(),
    );
    let mut renderer = JsonRenderer::new(Vec::new());
    renderer.render_page(&page).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();

    assert_eq!(value["view"], "compare");
    let kinds: Vec<&str> = value["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|block| block["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds.iter().filter(|kind| **kind == "bar_chart").count(), 2);
    assert_eq!(kinds[0], "title");
}

#[test]
fn listings_render_in_both_formats() {
    let decks = vec![
        DeckSummary {
            deck: "Jinx".to_string(),
            cards: 3,
            color: Some(DeckColor::Purple),
        },
        DeckSummary {
            deck: "Teemo".to_string(),
            cards: 1,
            color: None,
        },
    ];

    let mut text = TextRenderer::new(Vec::new());
    text.render_decks(&decks).unwrap();
    text.render_views(&View::ALL).unwrap();
    let text = String::from_utf8(text.into_inner()).unwrap();
    assert!(text.contains("purple"));
    assert!(text.contains("Teemo"));
    assert!(text.contains("per-deck"));
    assert!(text.contains("Gráficas por Mazo"));

    let mut json = JsonRenderer::new(Vec::new());
    json.render_decks(&decks).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json.into_inner()).unwrap();
    assert_eq!(value[0]["cards"], 3);
    assert!(value[1]["color"].is_null());
}
