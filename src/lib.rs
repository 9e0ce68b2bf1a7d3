//! # fatoura
//!
//! Fiscal totals for Tunisian commercial documents (factures, devis, bons de
//! livraison, bons de commande): HT, TVA, FODEC, timbre fiscal and TTC, the
//! TVA-by-rate table, and the total in words.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Loose input (floats, strings, `null`) is coerced to zero at the boundary by
//! [`core::to_safe_number`]; the engine itself never fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use fatoura::core::*;
//! use rust_decimal_macros::dec;
//!
//! let lines = vec![
//!     LineItemBuilder::new("Écran 24 pouces", dec!(2), dec!(450.000)).vat(dec!(19)).build(),
//!     LineItemBuilder::new("Livraison", dec!(1), dec!(20.000)).vat(dec!(7)).build(),
//! ];
//! let options = TotalsOptions::new().fodec(true).stamp_duty(true);
//!
//! let totals = compute_document_totals(&lines, &options);
//! assert_eq!(totals.total_ht, dec!(920));
//! assert_eq!(totals.total_vat, dec!(172.4));
//! assert_eq!(totals.fodec_amount, dec!(9.2));
//! assert_eq!(totals.total_ttc, dec!(1102.6));
//!
//! let breakdown = compute_vat_breakdown(&lines);
//! assert_eq!(breakdown.len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Line items, totals engine, documents, validation, numbering |
//! | `words` (default) | Amounts in French words (dinars and millimes) |
//! | `settings` | Observable settings provider, JSON load/save |
//! | `render` | Currency formatting and printable totals summary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "words")]
pub mod words;

#[cfg(feature = "settings")]
pub mod settings;

#[cfg(feature = "render")]
pub mod render;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
