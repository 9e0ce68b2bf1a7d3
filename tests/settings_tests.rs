//! Run with: `cargo test --features settings --test settings_tests`

#![cfg(feature = "settings")]

use std::sync::{Arc, Mutex};

use fatoura::core::*;
use fatoura::settings::*;
use rust_decimal_macros::dec;

#[test]
fn defaults_are_tunisian() {
    let settings = Settings::default();
    assert_eq!(settings.currency.code, "TND");
    assert_eq!(settings.currency.decimals, 3);
    assert_eq!(settings.defaults, TotalsOptions::default());
}

#[test]
fn load_partial_json() {
    let store = SettingsStore::from_json(
        r#"{
            "company": { "name": "Alpha Distribution", "taxId": "0001234B/A/M/000" },
            "defaults": { "includeFodec": true, "includeStampDuty": true, "globalDiscountPercent": "2,5" }
        }"#,
    )
    .unwrap();

    let settings = store.current();
    assert_eq!(settings.company.name, "Alpha Distribution");
    assert_eq!(settings.company.tax_id.as_deref(), Some("0001234B/A/M/000"));
    assert_eq!(settings.currency.symbol, "DT");
    assert!(settings.defaults.include_fodec);
    assert_eq!(settings.defaults.global_discount_percent, dec!(2.5));
}

#[test]
fn malformed_json_is_a_settings_error() {
    let err = SettingsStore::from_json("{ not json").unwrap_err();
    assert!(matches!(err, FatouraError::Settings(_)));
}

#[test]
fn json_roundtrip_preserves_settings() {
    let store = SettingsStore::default();
    store.update(|s| {
        s.company.name = "Beta".into();
        s.defaults = TotalsOptions::new().stamp_duty(true).global_discount(dec!(5));
    });
    let reloaded = SettingsStore::from_json(&store.to_json().unwrap()).unwrap();
    assert_eq!(reloaded.current(), store.current());
}

#[test]
fn listeners_see_each_change_in_order() {
    let store = SettingsStore::default();
    let log = Arc::new(Mutex::new(Vec::new()));

    let sink = log.clone();
    store.subscribe(Box::new(move |s: &Settings| {
        sink.lock().unwrap().push(s.currency.code.clone());
    }));

    store.update(|s| s.currency.code = "EUR".into());
    store.replace(Settings::default());

    assert_eq!(*log.lock().unwrap(), vec!["EUR".to_string(), "TND".to_string()]);
    assert_eq!(store.listener_count(), 1);
}

#[test]
fn provider_drives_new_document_defaults() {
    fn new_quote_totals(provider: &dyn SettingsProvider, lines: &[LineItem]) -> DocumentTotals {
        compute_document_totals(lines, &provider.current().defaults)
    }

    let store = SettingsStore::default();
    let lines = [LineItemBuilder::new("Conseil", dec!(2), dec!(100)).vat(dec!(19)).build()];
    assert_eq!(new_quote_totals(&store, &lines).total_ttc, dec!(238));

    store.update(|s| s.defaults.include_stamp_duty = true);
    assert_eq!(new_quote_totals(&store, &lines).total_ttc, dec!(239));
}
