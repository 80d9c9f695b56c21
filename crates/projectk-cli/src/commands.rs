use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::ColorChoice;
use tracing::{info, info_span, warn};

use projectk_analysis::{DispatchOptions, dispatch, filter_by_deck};
use projectk_cli::render::{
    DeckSummary, JsonRenderer, OutputFormat, PageRenderer, TextRenderer,
};
use projectk_cli::settings::{Settings, load_settings, resolve_settings_path, save_settings};
use projectk_ingest::{Dataset, DatasetCache};
use projectk_model::{ColorPolicy, Selection, View, deck_color};

use crate::cli::{Cli, ConfigAction, ViewArgs};

/// Settings merged with the command-line overrides.
pub struct Session {
    pub settings: Settings,
    pub options: DispatchOptions,
    pub styled: bool,
    cache: DatasetCache,
}

impl Session {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = load_settings(cli.config.as_deref())?;
        if let Some(path) = &cli.data {
            settings.data.path = path.clone();
        }
        if let Some(rows) = cli.preview_rows {
            settings.display.preview_rows = rows;
        }
        if let Some(format) = cli.format {
            settings.display.format = format;
        }
        if cli.strict_colors {
            settings.colors.policy = ColorPolicy::Strict;
        }
        let styled = match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };
        Ok(Self {
            options: settings.dispatch_options(),
            settings,
            styled,
            cache: DatasetCache::new(),
        })
    }

    fn dataset(&self) -> Result<Dataset> {
        let path = &self.settings.data.path;
        self.cache
            .get_or_load(path)
            .with_context(|| format!("load dataset {}", path.display()))
    }

    fn renderer(&self) -> Box<dyn PageRenderer> {
        let out = io::stdout().lock();
        match self.settings.display.format {
            OutputFormat::Text => Box::new(
                TextRenderer::new(out)
                    .with_styling(self.styled)
                    .with_width(self.settings.display.width),
            ),
            OutputFormat::Json => Box::new(JsonRenderer::new(out)),
        }
    }
}

pub fn run_view(session: &Session, args: &ViewArgs) -> Result<()> {
    let dataset = session.dataset()?;
    let mut selection = Selection::new(args.view);
    match (&args.deck, args.view.needs_deck()) {
        (Some(deck), true) => {
            if !dataset.contains_deck(deck) {
                warn!(deck = %deck, "deck not present in dataset, charts will be empty");
            }
            selection = selection.with_deck(deck.clone());
        }
        (Some(deck), false) => {
            warn!(deck = %deck, view = args.view.slug(), "--deck only applies to per-deck");
        }
        (None, _) => {}
    }

    let span = info_span!("view", view = args.view.slug());
    let _guard = span.enter();
    let page = dispatch(&dataset, &selection, &session.options);
    let notices = page.notices().count();
    if notices > 0 {
        info!(notices, "page rendered with degraded sections");
    }
    session
        .renderer()
        .render_page(&page)
        .context("write page")
}

pub fn run_views(session: &Session) -> Result<()> {
    session
        .renderer()
        .render_views(&View::ALL)
        .context("write views")
}

pub fn run_decks(session: &Session) -> Result<()> {
    let dataset = session.dataset()?;
    let decks = deck_summaries(&dataset)?;
    session
        .renderer()
        .render_decks(&decks)
        .context("write decks")
}

fn deck_summaries(dataset: &Dataset) -> Result<Vec<DeckSummary>> {
    dataset
        .decks()
        .into_iter()
        .map(|deck| {
            let cards = filter_by_deck(dataset, &deck)
                .with_context(|| format!("filter deck {deck}"))?
                .height();
            let color = deck_color(&deck);
            Ok(DeckSummary { deck, cards, color })
        })
        .collect()
}

/// Settings commands. Only `show` reads settings, so `init` can target a
/// `--config` path that does not exist yet.
pub fn run_config(cli: &Cli, action: &ConfigAction) -> Result<()> {
    let config = cli.config.as_deref();
    match action {
        ConfigAction::Show => {
            let session = Session::from_cli(cli)?;
            let content =
                toml::to_string_pretty(&session.settings).context("serialize settings")?;
            print!("{content}");
        }
        ConfigAction::Path => {
            let path = resolve_settings_path(config)?;
            println!("{}", path.display());
        }
        ConfigAction::Init { force } => {
            let path = resolve_settings_path(config)?;
            save_settings(&Settings::default(), &path, *force)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
