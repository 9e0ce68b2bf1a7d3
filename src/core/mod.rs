//! Core document types, the fiscal totals engine, validation, and numbering.
//!
//! The engine ([`compute_document_totals`], [`compute_vat_breakdown`]) is the
//! single implementation shared by invoices, quotes, delivery notes and
//! purchase orders.

mod builder;
mod error;
mod numbering;
mod numeric;
mod totals;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use numbering::*;
pub use numeric::*;
pub use totals::*;
pub use types::*;
pub use validation::*;
