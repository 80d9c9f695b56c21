//! Property tests for the aggregations.

use polars::prelude::{Column, DataFrame};
use proptest::prelude::*;
use proptest::test_runner::Config;

use projectk_analysis::{
    avg_cost_by_deck, correlation, filter_by_deck, type_count, type_count_by_deck,
};
use projectk_ingest::Dataset;
use projectk_model::columns::{COSTE_MANA, DECK, MIGHT, TIPO};

const DECKS: [&str; 5] = ["Jinx", "Viktor", "Volibear", "Yasuo", "Teemo"];
const TYPES: [&str; 4] = ["Unit", "Spell", "Gear", "Champion"];

type Row = (usize, usize, f64, f64);

fn dataset(rows: &[Row]) -> Dataset {
    let columns = vec![
        Column::new(
            DECK.into(),
            rows.iter().map(|r| DECKS[r.0]).collect::<Vec<_>>(),
        ),
        Column::new(
            TIPO.into(),
            rows.iter().map(|r| TYPES[r.1]).collect::<Vec<_>>(),
        ),
        Column::new(COSTE_MANA.into(), rows.iter().map(|r| r.2).collect::<Vec<_>>()),
        Column::new(MIGHT.into(), rows.iter().map(|r| r.3).collect::<Vec<_>>()),
    ];
    Dataset::from_frame(DataFrame::new(columns).unwrap()).unwrap()
}

/// Values in tenths, so most are not exactly representable.
fn tenths() -> impl Strategy<Value = f64> {
    (0u16..=120).prop_map(|v| f64::from(v) / 10.0)
}

fn rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((0..DECKS.len(), 0..TYPES.len(), tenths(), tenths()), 0..40)
}

proptest! {
    #![proptest_config(Config::with_cases(64))]

    #[test]
    fn grouped_counts_partition_the_rows(rows in rows()) {
        let data = dataset(&rows);
        let counts = type_count_by_deck(data.frame()).unwrap();
        let total: u64 = counts.iter().map(|row| row.conteo).sum();
        prop_assert_eq!(total as usize, rows.len());
        prop_assert!(counts.iter().all(|row| row.conteo > 0));
    }

    #[test]
    fn per_deck_counts_match_grouped_counts(rows in rows()) {
        let data = dataset(&rows);
        let grouped = type_count_by_deck(data.frame()).unwrap();
        for deck in DECKS {
            let subset = filter_by_deck(&data, deck).unwrap();
            let expected_rows = rows.iter().filter(|r| DECKS[r.0] == deck).count();
            prop_assert_eq!(subset.height(), expected_rows);

            let counts: Vec<(String, u64)> = type_count(&subset)
                .unwrap()
                .into_iter()
                .map(|row| (row.tipo, row.conteo))
                .collect();
            let from_grouped: Vec<(String, u64)> = grouped
                .iter()
                .filter(|row| row.deck == deck)
                .map(|row| (row.tipo.clone(), row.conteo))
                .collect();
            prop_assert_eq!(counts, from_grouped);
        }
    }

    #[test]
    fn deck_average_is_the_arithmetic_mean(rows in rows()) {
        let data = dataset(&rows);
        let averages = avg_cost_by_deck(data.frame()).unwrap();
        for row in averages {
            let costs: Vec<f64> = rows
                .iter()
                .filter(|r| DECKS[r.0] == row.deck)
                .map(|r| r.2)
                .collect();
            prop_assert!(!costs.is_empty());
            let mean = costs.iter().sum::<f64>() / costs.len() as f64;
            prop_assert!((row.coste_mana - mean).abs() < 1e-9);
        }
    }

    #[test]
    fn correlation_is_bounded_and_symmetric(rows in rows()) {
        let data = dataset(&rows);
        let ab = correlation(data.frame(), COSTE_MANA, MIGHT);
        let ba = correlation(data.frame(), MIGHT, COSTE_MANA);
        match (ab, ba) {
            (Ok(ab), Ok(ba)) => {
                prop_assert!((-1.0..=1.0).contains(&ab.coefficient));
                prop_assert!((ab.coefficient - ba.coefficient).abs() < 1e-12);
            }
            (Err(ab), Err(ba)) => {
                prop_assert!(ab.is_undefined_correlation());
                prop_assert!(ba.is_undefined_correlation());
            }
            (ab, ba) => prop_assert!(false, "asymmetric outcome: {:?} / {:?}", ab, ba),
        }
    }

    #[test]
    fn constant_cost_has_undefined_correlation(
        rows in prop::collection::vec((0..DECKS.len(), 0..TYPES.len(), tenths()), 2..40),
        cost in tenths(),
    ) {
        let rows: Vec<Row> = rows
            .into_iter()
            .map(|(deck, tipo, might)| (deck, tipo, cost, might))
            .collect();
        let data = dataset(&rows);
        let err = correlation(data.frame(), COSTE_MANA, MIGHT).unwrap_err();
        prop_assert!(err.is_undefined_correlation());
    }
}
