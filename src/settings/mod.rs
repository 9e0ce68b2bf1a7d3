//! Application settings with explicit change notification.
//!
//! Callers receive a [`SettingsProvider`] and either read the current
//! [`Settings`] or subscribe to changes, instead of polling shared storage.
//!
//! ```
//! use fatoura::settings::*;
//! use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
//!
//! let store = SettingsStore::default();
//! let seen = Arc::new(AtomicBool::new(false));
//! let flag = seen.clone();
//! store.subscribe(Box::new(move |s: &Settings| {
//!     flag.store(s.defaults.include_stamp_duty, Ordering::SeqCst);
//! }));
//!
//! store.update(|s| s.defaults.include_stamp_duty = true);
//! assert!(seen.load(Ordering::SeqCst));
//! ```

mod store;

pub use store::{Listener, SettingsProvider, SettingsStore, SubscriptionId};

use serde::{Deserialize, Serialize};

use crate::core::TotalsOptions;

/// Organization printed in document headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    pub name: String,
    /// Matricule fiscal.
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub bank_account: Option<String>,
}

/// How amounts are displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencySettings {
    /// ISO 4217 code.
    pub code: String,
    pub symbol: String,
    pub decimals: u32,
    pub decimal_separator: char,
    pub thousands_separator: Option<char>,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            code: "TND".into(),
            symbol: "DT".into(),
            decimals: crate::core::CURRENCY_DECIMALS,
            decimal_separator: ',',
            thousands_separator: Some(' '),
        }
    }
}

/// Everything the document screens read from settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub company: CompanyProfile,
    pub currency: CurrencySettings,
    /// Options pre-filled on new documents.
    pub defaults: TotalsOptions,
}
