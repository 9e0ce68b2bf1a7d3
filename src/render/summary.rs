use std::fmt;

use rust_decimal::Decimal;

use super::format::CurrencyFormatter;
use crate::core::{Document, DocumentKind, DocumentTotals, TotalsOptions, VatBreakdownEntry};
use crate::words::{WordsLocale, amount_to_words};

/// One labelled amount in the totals block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub amount: String,
}

/// One row of the TVA-by-rate table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VatRow {
    pub rate: String,
    pub base: String,
    pub amount: String,
}

/// Formatted totals block printed at the foot of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsSummary {
    pub rows: Vec<SummaryRow>,
    pub vat_rows: Vec<VatRow>,
    /// Closing sentence with the TTC total in words.
    pub in_words: String,
}

impl TotalsSummary {
    /// Rows for `totals` as computed with `options`.
    ///
    /// The discount, FODEC and timbre rows follow the options, so an included
    /// levy is printed even when it amounts to zero.
    pub fn new(
        kind: DocumentKind,
        totals: &DocumentTotals,
        breakdown: &[VatBreakdownEntry],
        options: &TotalsOptions,
        formatter: &dyn CurrencyFormatter,
    ) -> Self {
        Self::with_locale(
            kind,
            totals,
            breakdown,
            options,
            formatter,
            &WordsLocale::default(),
        )
    }

    pub fn with_locale(
        kind: DocumentKind,
        totals: &DocumentTotals,
        breakdown: &[VatBreakdownEntry],
        options: &TotalsOptions,
        formatter: &dyn CurrencyFormatter,
        locale: &WordsLocale,
    ) -> Self {
        let mut rows = Vec::new();
        let mut row = |label: String, amount: Decimal| {
            rows.push(SummaryRow {
                label,
                amount: formatter.format(amount),
            });
        };

        if !options.global_discount_percent.is_zero() {
            row("Total HT brut".into(), totals.subtotal_ht);
            row("Remise".into(), -totals.discount_amount);
        }
        row("Total HT".into(), totals.total_ht);
        row("TVA".into(), totals.total_vat);
        if options.include_fodec {
            row("FODEC 1 %".into(), totals.fodec_amount);
        }
        if options.include_stamp_duty {
            row("Timbre fiscal".into(), totals.stamp_duty_amount);
        }
        row("Total TTC".into(), totals.total_ttc);

        let vat_rows = breakdown
            .iter()
            .map(|entry| VatRow {
                rate: format!("{} %", entry.rate.normalize()),
                base: formatter.format(entry.base_ht),
                amount: formatter.format(entry.vat_amount),
            })
            .collect();

        let in_words = format!(
            "{} : {}.",
            kind.closing_sentence(),
            amount_to_words(totals.total_ttc, locale)
        );

        Self {
            rows,
            vat_rows,
            in_words,
        }
    }

    /// Summary of a committed document, from its totals snapshot.
    pub fn for_document(document: &Document, formatter: &dyn CurrencyFormatter) -> Self {
        Self::new(
            document.kind,
            &document.totals,
            &document.vat_breakdown,
            &document.options,
            formatter,
        )
    }
}

impl fmt::Display for TotalsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
        let amount_width = self
            .rows
            .iter()
            .map(|r| r.amount.chars().count())
            .max()
            .unwrap_or(0);

        if !self.vat_rows.is_empty() {
            writeln!(f, "Taux | Base HT | TVA")?;
            for vat in &self.vat_rows {
                writeln!(f, "{} | {} | {}", vat.rate, vat.base, vat.amount)?;
            }
            writeln!(f)?;
        }
        for row in &self.rows {
            writeln!(
                f,
                "{:<label_width$}  {:>amount_width$}",
                row.label, row.amount
            )?;
        }
        write!(f, "{}", self.in_words)
    }
}
