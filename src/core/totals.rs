//! The fiscal totals engine shared by every document type.
//!
//! All functions are pure: no rounding, no validation, no failure. Rounding
//! belongs to presentation ([`round_amount`](super::round_amount)); validation
//! is opt-in ([`validate_line_items`](super::validate_line_items)).
//!
//! Arithmetic is checked. A line whose amount does not fit in a `Decimal`
//! counts as zero, and a line that would push a running sum out of range is
//! left out of that sum. A document total that still overflows is zero.

use rust_decimal::Decimal;

use super::numeric::{mul_or_zero, percent_of, remaining_factor, unrepresentable};
use super::types::*;

/// `quantity * unit_price * (1 - discount_percent / 100)`, unrounded.
///
/// ```
/// use fatoura::core::*;
/// use rust_decimal_macros::dec;
///
/// let line = LineItemBuilder::new("Clavier", dec!(4), dec!(25.500))
///     .discount(dec!(10))
///     .build();
/// assert_eq!(compute_line_total(&line), dec!(91.8));
/// ```
pub fn compute_line_total(item: &LineItem) -> Decimal {
    let gross = mul_or_zero(item.quantity, item.unit_price);
    mul_or_zero(gross, remaining_factor(item.discount_percent))
}

/// TVA carried by one line, before any global discount.
pub fn compute_line_vat(item: &LineItem) -> Decimal {
    percent_of(compute_line_total(item), item.vat_rate)
}

/// Compute the HT/TVA/FODEC/timbre/TTC breakdown for a list of lines.
///
/// The global discount scales the summed TVA by the same factor as the HT
/// total instead of recomputing TVA per line. An empty list yields
/// [`DocumentTotals::ZERO`] whatever the options, stamp duty included.
///
/// ```
/// use fatoura::core::*;
/// use rust_decimal_macros::dec;
///
/// let lines = [LineItemBuilder::new("Service", dec!(10), dec!(100)).vat(dec!(19)).build()];
/// let totals = compute_document_totals(&lines, &TotalsOptions::new().global_discount(dec!(10)));
/// assert_eq!(totals.total_ht, dec!(900));
/// assert_eq!(totals.total_vat, dec!(171));
/// assert_eq!(totals.total_ttc, dec!(1071));
/// ```
pub fn compute_document_totals(items: &[LineItem], options: &TotalsOptions) -> DocumentTotals {
    if items.is_empty() {
        return DocumentTotals::ZERO;
    }

    let (raw_ht, raw_vat) = items
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(ht, vat), item| {
            let line = compute_line_total(item);
            let line_vat = percent_of(line, item.vat_rate);
            match (ht.checked_add(line), vat.checked_add(line_vat)) {
                (Some(ht), Some(vat)) => (ht, vat),
                _ => {
                    tracing::debug!(designation = %item.designation, "line left out of overflowing sum");
                    (ht, vat)
                }
            }
        });

    let factor = remaining_factor(options.global_discount_percent);
    let total_ht = mul_or_zero(raw_ht, factor);
    let total_vat = mul_or_zero(raw_vat, factor);

    let fodec_amount = if options.include_fodec {
        mul_or_zero(total_ht, FODEC_RATE)
    } else {
        Decimal::ZERO
    };
    let stamp_duty_amount = if options.include_stamp_duty {
        STAMP_DUTY_AMOUNT
    } else {
        Decimal::ZERO
    };

    let total_ttc = total_ht
        .checked_add(total_vat)
        .and_then(|t| t.checked_add(fodec_amount))
        .and_then(|t| t.checked_add(stamp_duty_amount))
        .unwrap_or_else(|| unrepresentable("total TTC"));

    tracing::trace!(
        lines = items.len(),
        %total_ht,
        %total_vat,
        %total_ttc,
        "computed document totals"
    );

    DocumentTotals {
        subtotal_ht: raw_ht,
        discount_amount: raw_ht
            .checked_sub(total_ht)
            .unwrap_or_else(|| unrepresentable("discount amount")),
        total_ht,
        total_vat,
        fodec_amount,
        stamp_duty_amount,
        total_ttc,
    }
}

/// Group line totals by TVA rate.
///
/// Rates compare by exact numeric value (`7` and `7.00` share a group).
/// Entries keep the order in which each rate first appears. The global
/// discount is not applied here.
pub fn compute_vat_breakdown(items: &[LineItem]) -> Vec<VatBreakdownEntry> {
    let mut entries: Vec<VatBreakdownEntry> = Vec::new();

    for item in items {
        let base = compute_line_total(item);
        match entries.iter_mut().find(|e| e.rate == item.vat_rate) {
            Some(entry) => match entry.base_ht.checked_add(base) {
                Some(sum) => entry.base_ht = sum,
                None => {
                    tracing::debug!(rate = %item.vat_rate, "line left out of overflowing TVA base");
                }
            },
            None => entries.push(VatBreakdownEntry {
                rate: item.vat_rate,
                base_ht: base,
                vat_amount: Decimal::ZERO,
            }),
        }
    }

    for entry in &mut entries {
        entry.vat_amount = percent_of(entry.base_ht, entry.rate);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::LineItemBuilder;
    use rust_decimal_macros::dec;

    fn line(qty: Decimal, price: Decimal, rate: Decimal) -> LineItem {
        LineItemBuilder::new("Article", qty, price).vat(rate).build()
    }

    #[test]
    fn line_total_without_discount() {
        assert_eq!(compute_line_total(&line(dec!(3), dec!(2.500), dec!(19))), dec!(7.5));
    }

    #[test]
    fn line_total_with_full_discount_is_zero() {
        let l = LineItemBuilder::new("Gratuit", dec!(2), dec!(10))
            .discount(dec!(100))
            .build();
        assert!(compute_line_total(&l).is_zero());
    }

    #[test]
    fn negative_quantity_propagates() {
        assert_eq!(compute_line_total(&line(dec!(-2), dec!(5), dec!(0))), dec!(-10));
    }

    #[test]
    fn empty_document_is_zero() {
        let options = TotalsOptions::new()
            .fodec(true)
            .stamp_duty(true)
            .global_discount(dec!(5));
        assert_eq!(compute_document_totals(&[], &options), DocumentTotals::ZERO);
    }

    #[test]
    fn fodec_and_stamp() {
        let lines = [line(dec!(2), dec!(50), dec!(19))];
        let totals = compute_document_totals(
            &lines,
            &TotalsOptions::new().fodec(true).stamp_duty(true),
        );
        assert_eq!(totals.total_ht, dec!(100));
        assert_eq!(totals.total_vat, dec!(19));
        assert_eq!(totals.fodec_amount, dec!(1));
        assert_eq!(totals.stamp_duty_amount, dec!(1));
        assert_eq!(totals.total_ttc, dec!(121));
    }

    #[test]
    fn discount_amount_is_reported() {
        let lines = [line(dec!(10), dec!(100), dec!(19))];
        let totals = compute_document_totals(&lines, &TotalsOptions::new().global_discount(dec!(10)));
        assert_eq!(totals.subtotal_ht, dec!(1000));
        assert_eq!(totals.discount_amount, dec!(100));
    }

    #[test]
    fn breakdown_keeps_first_occurrence_order() {
        let lines = [
            line(dec!(1), dec!(10), dec!(7)),
            line(dec!(1), dec!(10), dec!(19)),
            line(dec!(1), dec!(10), dec!(0)),
            line(dec!(1), dec!(5), dec!(7.00)),
        ];
        let rates: Vec<Decimal> = compute_vat_breakdown(&lines).iter().map(|e| e.rate).collect();
        assert_eq!(rates, vec![dec!(7), dec!(19), dec!(0)]);
        assert_eq!(compute_vat_breakdown(&lines)[0].base_ht, dec!(15));
    }

    #[test]
    fn overflowing_line_counts_as_zero() {
        let huge = Decimal::from(1_000_000_000_000_000_i64);
        let lines = [line(huge, huge, dec!(19)), line(dec!(2), dec!(10), dec!(19))];
        assert!(compute_line_total(&lines[0]).is_zero());

        let totals = compute_document_totals(&lines, &TotalsOptions::default());
        assert_eq!(totals.total_ht, dec!(20));
        assert_eq!(totals.total_vat, dec!(3.8));

        let breakdown = compute_vat_breakdown(&lines);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].base_ht, dec!(20));
    }

    #[test]
    fn line_vat() {
        assert_eq!(compute_line_vat(&line(dec!(1), dec!(200), dec!(7))), dec!(14));
    }
}
