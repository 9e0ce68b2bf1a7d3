use chrono::{Datelike, NaiveDate};

use super::error::FatouraError;
use super::types::DocumentKind;

const DEFAULT_WIDTH: usize = 4;

/// Yearly counter producing `PREFIX-YEAR-NNNN` numbers, e.g. `FAC-2024-0007`.
///
/// Keep one sequence per [`DocumentKind`]; the counter restarts at 1 with
/// each new fiscal year.
///
/// ```
/// use fatoura::core::{DocumentKind, DocumentNumberSequence};
///
/// let mut invoices = DocumentNumberSequence::new(DocumentKind::Invoice, 2024);
/// assert_eq!(invoices.next_number(), "FAC-2024-0001");
/// assert_eq!(invoices.peek(), "FAC-2024-0002");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNumberSequence {
    prefix: String,
    year: i32,
    counter: u64,
    width: usize,
}

impl DocumentNumberSequence {
    pub fn new(kind: DocumentKind, year: i32) -> Self {
        Self::with_prefix(kind.prefix(), year)
    }

    /// Sequence for a prefix outside the four standard kinds (e.g. credit notes).
    pub fn with_prefix(prefix: impl Into<String>, year: i32) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            counter: 1,
            width: DEFAULT_WIDTH,
        }
    }

    /// Resume a sequence whose next free counter is `counter`,
    /// typically the last stored number plus one.
    pub fn starting_at(kind: DocumentKind, year: i32, counter: u64) -> Self {
        Self {
            counter,
            ..Self::new(kind, year)
        }
    }

    /// Minimum digits of the counter part.
    pub fn with_padding(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Consume and return the next number.
    pub fn next_number(&mut self) -> String {
        let number = self.render(self.counter);
        self.counter = self.counter.saturating_add(1);
        tracing::debug!(%number, "issued document number");
        number
    }

    /// Number for a document dated `date`, rolling over to its year first.
    pub fn next_for_date(&mut self, date: NaiveDate) -> String {
        self.auto_advance(date);
        self.next_number()
    }

    pub fn peek(&self) -> String {
        self.render(self.counter)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Counter value the next call to [`next_number`](Self::next_number) uses.
    pub fn next_raw(&self) -> u64 {
        self.counter
    }

    /// Switch to a later fiscal year and restart at 1.
    pub fn advance_year(&mut self, year: i32) -> Result<(), FatouraError> {
        if year <= self.year {
            return Err(FatouraError::Numbering(format!(
                "cannot move {} sequence from {} back to {year}",
                self.prefix, self.year
            )));
        }
        self.restart(year);
        Ok(())
    }

    /// Restart the counter if `date` falls in a later year.
    /// Returns whether the year changed.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let year = date.year();
        if year <= self.year {
            return false;
        }
        self.restart(year);
        true
    }

    fn restart(&mut self, year: i32) {
        tracing::debug!(prefix = %self.prefix, from = self.year, to = year, "new numbering year");
        self.year = year;
        self.counter = 1;
    }

    fn render(&self, counter: u64) -> String {
        let width = self.width;
        format!("{}-{}-{counter:0>width$}", self.prefix, self.year)
    }
}

/// Split a standard document number into kind, year and counter.
///
/// Custom prefixes are not recognised.
pub fn parse_document_number(number: &str) -> Option<(DocumentKind, i32, u64)> {
    let mut parts = number.splitn(3, '-');
    let kind = DocumentKind::from_prefix(parts.next()?)?;
    let year = parts.next()?.parse().ok()?;
    let counter = parts.next()?.parse().ok()?;
    Some((kind, year, counter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_up_from_one() {
        let mut seq = DocumentNumberSequence::new(DocumentKind::Invoice, 2024);
        let issued: Vec<_> = (0..3).map(|_| seq.next_number()).collect();
        assert_eq!(issued, ["FAC-2024-0001", "FAC-2024-0002", "FAC-2024-0003"]);
    }

    #[test]
    fn each_kind_uses_its_prefix() {
        let first: Vec<_> = DocumentKind::ALL
            .into_iter()
            .map(|k| DocumentNumberSequence::new(k, 2024).next_number())
            .collect();
        assert_eq!(
            first,
            ["FAC-2024-0001", "DEV-2024-0001", "BL-2024-0001", "BC-2024-0001"]
        );
    }

    #[test]
    fn peek_leaves_counter_alone() {
        let mut seq = DocumentNumberSequence::new(DocumentKind::Quote, 2024);
        assert_eq!(seq.peek(), seq.peek());
        assert_eq!(seq.next_number(), "DEV-2024-0001");
        assert_eq!(seq.peek(), "DEV-2024-0002");
    }

    #[test]
    fn resumes_from_stored_counter() {
        let mut seq = DocumentNumberSequence::starting_at(DocumentKind::DeliveryNote, 2024, 118);
        assert_eq!(seq.next_number(), "BL-2024-0118");
        assert_eq!(seq.next_raw(), 119);
    }

    #[test]
    fn padding_and_custom_prefix() {
        let mut seq = DocumentNumberSequence::with_prefix("AV", 2024).with_padding(2);
        assert_eq!(seq.next_number(), "AV-2024-01");
        assert_eq!(seq.prefix(), "AV");

        let mut wide = DocumentNumberSequence::starting_at(DocumentKind::Invoice, 2024, 12345);
        assert_eq!(wide.next_number(), "FAC-2024-12345");
    }

    #[test]
    fn explicit_year_change() {
        let mut seq = DocumentNumberSequence::starting_at(DocumentKind::Invoice, 2024, 57);
        seq.advance_year(2025).unwrap();
        assert_eq!(seq.next_number(), "FAC-2025-0001");

        let err = seq.advance_year(2025).unwrap_err();
        assert!(matches!(err, FatouraError::Numbering(_)));
        assert!(seq.advance_year(2019).is_err());
    }

    #[test]
    fn rolls_over_with_document_date() {
        let mut seq = DocumentNumberSequence::new(DocumentKind::PurchaseOrder, 2024);
        assert_eq!(seq.next_for_date(date(2024, 12, 31)), "BC-2024-0001");
        assert_eq!(seq.next_for_date(date(2025, 1, 2)), "BC-2025-0001");
        assert!(!seq.auto_advance(date(2025, 3, 1)));
        assert!(!seq.auto_advance(date(2024, 6, 1)));
        assert_eq!(seq.next_number(), "BC-2025-0002");
        assert_eq!(seq.year(), 2025);
    }

    #[test]
    fn parses_standard_numbers() {
        assert_eq!(
            parse_document_number("BL-2023-0017"),
            Some((DocumentKind::DeliveryNote, 2023, 17))
        );
        assert_eq!(parse_document_number("XX-2023-0017"), None);
        assert_eq!(parse_document_number("FAC-20x3-0017"), None);
        assert_eq!(parse_document_number("FAC-2023"), None);
    }
}
