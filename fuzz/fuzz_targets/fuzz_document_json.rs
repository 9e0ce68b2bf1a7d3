#![no_main]

use fatoura::core::{LineItem, TotalsOptions, compute_document_totals, compute_vat_breakdown};
use fatoura::render::{AmountFormatter, TotalsSummary};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Decoding, computing and rendering must not panic for any stored record.
        if let Ok(lines) = serde_json::from_str::<Vec<LineItem>>(s) {
            let options = TotalsOptions::new().fodec(true).stamp_duty(true);
            let totals = compute_document_totals(&lines, &options);
            let breakdown = compute_vat_breakdown(&lines);
            let _ = TotalsSummary::new(
                fatoura::core::DocumentKind::Invoice,
                &totals,
                &breakdown,
                &options,
                &AmountFormatter::default(),
            )
            .to_string();
        }
    }
});
