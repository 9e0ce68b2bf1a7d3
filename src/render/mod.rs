//! Rendering support: amount formatting and the printable totals block.
//!
//! Layout (HTML, print windows) stays with the caller; this module turns a
//! totals snapshot into labelled, formatted rows and the amount in words.

mod format;
mod summary;

pub use format::{AmountFormatter, CurrencyFormatter};
pub use summary::{SummaryRow, TotalsSummary, VatRow};
