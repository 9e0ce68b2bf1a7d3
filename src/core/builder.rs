use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::{FatouraError, join_errors};
use super::totals::{compute_document_totals, compute_vat_breakdown};
use super::types::*;
use super::validation;

const MAX_LINES: usize = 10_000;
const MAX_NUMBER_LEN: usize = 200;
const MAX_NOTES: usize = 100;

/// Builder for commercial documents.
///
/// `build()` attaches the totals snapshot. Numeric content is never rejected;
/// use [`build_checked`](Self::build_checked) to run the line validation too.
///
/// ```
/// use fatoura::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let doc = DocumentBuilder::new(DocumentKind::Invoice, "FAC-2024-0001", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .party(Party::new("Société Alpha").tax_id("1234567A/M/000"))
///     .add_line(LineItemBuilder::new("Ramette papier A4", dec!(10), dec!(12.500)).vat(dec!(19)).build())
///     .options(TotalsOptions::new().stamp_duty(true))
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.totals.total_ttc, dec!(149.750));
/// ```
pub struct DocumentBuilder {
    kind: DocumentKind,
    number: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    party: Option<Party>,
    lines: Vec<LineItem>,
    options: TotalsOptions,
    notes: Vec<String>,
}

impl DocumentBuilder {
    pub fn new(kind: DocumentKind, number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            kind,
            number: number.into(),
            issue_date,
            due_date: None,
            party: None,
            lines: Vec::new(),
            options: TotalsOptions::default(),
            notes: Vec::new(),
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Client (sales documents) or supplier (purchase orders).
    pub fn party(mut self, party: Party) -> Self {
        self.party = Some(party);
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = LineItem>) -> Self {
        self.lines.extend(lines);
        self
    }

    pub fn options(mut self, options: TotalsOptions) -> Self {
        self.options = options;
        self
    }

    pub fn global_discount(mut self, percent: Decimal) -> Self {
        self.options.global_discount_percent = percent;
        self
    }

    pub fn fodec(mut self, include: bool) -> Self {
        self.options.include_fodec = include;
        self
    }

    pub fn stamp_duty(mut self, include: bool) -> Self {
        self.options.include_stamp_duty = include;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the document and take its totals snapshot.
    pub fn build(self) -> Result<Document, FatouraError> {
        let party = self
            .party
            .ok_or_else(|| FatouraError::Builder("party (client or supplier) is required".into()))?;

        // Input limits to prevent abuse
        if self.lines.len() > MAX_LINES {
            return Err(FatouraError::Builder(format!(
                "document cannot have more than {MAX_LINES} line items"
            )));
        }
        if self.number.len() > MAX_NUMBER_LEN {
            return Err(FatouraError::Builder(format!(
                "document number cannot exceed {MAX_NUMBER_LEN} characters"
            )));
        }
        if self.notes.len() > MAX_NOTES {
            return Err(FatouraError::Builder(format!(
                "document cannot have more than {MAX_NOTES} notes"
            )));
        }

        let mut document = Document {
            kind: self.kind,
            number: self.number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            party,
            lines: self.lines,
            options: self.options,
            notes: self.notes,
            totals: DocumentTotals::ZERO,
            vat_breakdown: Vec::new(),
            amount_in_words: None,
        };
        document.recompute();

        tracing::debug!(
            kind = ?document.kind,
            number = %document.number,
            total_ttc = %document.totals.total_ttc,
            "built document"
        );

        Ok(document)
    }

    /// Build, then reject the document if any line or option fails validation.
    /// Returns all validation errors (not just the first).
    pub fn build_checked(self) -> Result<Document, FatouraError> {
        let document = self.build()?;

        let mut errors = validation::validate_line_items(&document.lines);
        errors.extend(validation::validate_options(&document.options));
        if !errors.is_empty() {
            return Err(join_errors(&errors));
        }

        Ok(document)
    }
}

impl Document {
    /// Refresh the totals snapshot after editing lines or options.
    pub fn recompute(&mut self) {
        self.totals = compute_document_totals(&self.lines, &self.options);
        self.vat_breakdown = compute_vat_breakdown(&self.lines);
        self.amount_in_words = amount_in_words(self.totals.total_ttc);
    }
}

#[cfg(feature = "words")]
fn amount_in_words(amount: Decimal) -> Option<String> {
    Some(crate::words::amount_to_words(
        amount,
        &crate::words::WordsLocale::default(),
    ))
}

#[cfg(not(feature = "words"))]
fn amount_in_words(_amount: Decimal) -> Option<String> {
    None
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    reference: Option<String>,
    designation: String,
    unit: Option<String>,
    quantity: Decimal,
    unit_price: Decimal,
    vat_rate: Decimal,
    discount_percent: Decimal,
}

impl LineItemBuilder {
    /// New line with 0% TVA and no discount.
    pub fn new(designation: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            reference: None,
            designation: designation.into(),
            unit: None,
            quantity,
            unit_price,
            vat_rate: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
        }
    }

    pub fn vat(mut self, rate: Decimal) -> Self {
        self.vat_rate = rate;
        self
    }

    pub fn discount(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            reference: self.reference,
            designation: self.designation,
            unit: self.unit,
            quantity: self.quantity,
            unit_price: self.unit_price,
            vat_rate: self.vat_rate,
            discount_percent: self.discount_percent,
        }
    }
}
