//! Amounts in words for the foot of printed documents.
//!
//! One grammar is used for every document type:
//!
//! ```
//! use fatoura::words::*;
//! use rust_decimal_macros::dec;
//!
//! let fr = WordsLocale::default();
//! assert_eq!(amount_to_words(dec!(0), &fr), "zéro");
//! assert_eq!(amount_to_words(dec!(1), &fr), "un dinar");
//! assert_eq!(amount_to_words(dec!(1071.250), &fr), "mille soixante et onze dinars et deux cent cinquante millimes");
//! assert_eq!(amount_to_words(dec!(0.500), &fr), "cinq cents millimes");
//! assert_eq!(amount_to_words(f64::NAN, &fr), "zéro");
//! ```

mod french;

pub use french::number_to_words;

use rust_decimal::prelude::*;

use crate::core::{CURRENCY_DECIMALS, SafeNumber, round_amount, to_safe_number};

/// Finest minor unit a `Decimal` can represent.
const MAX_MINOR_DIGITS: u32 = 28;

/// Currency unit names, singular and plural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyUnits {
    pub major_singular: String,
    pub major_plural: String,
    pub minor_singular: String,
    pub minor_plural: String,
    /// Number of minor units in one major unit, as a power of ten.
    /// Values above 28 are treated as 28.
    pub minor_digits: u32,
}

impl CurrencyUnits {
    /// Tunisian dinar: 1 dinar = 1000 millimes.
    pub fn dinar() -> Self {
        Self {
            major_singular: "dinar".into(),
            major_plural: "dinars".into(),
            minor_singular: "millime".into(),
            minor_plural: "millimes".into(),
            minor_digits: CURRENCY_DECIMALS,
        }
    }

    /// Euro: 1 euro = 100 centimes.
    pub fn euro() -> Self {
        Self {
            major_singular: "euro".into(),
            major_plural: "euros".into(),
            minor_singular: "centime".into(),
            minor_plural: "centimes".into(),
            minor_digits: 2,
        }
    }
}

/// Language and currency used to spell amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordsLocale {
    /// French cardinal words, traditional spelling.
    French(CurrencyUnits),
}

impl Default for WordsLocale {
    fn default() -> Self {
        Self::French(CurrencyUnits::dinar())
    }
}

impl WordsLocale {
    fn units(&self) -> &CurrencyUnits {
        match self {
            Self::French(units) => units,
        }
    }
}

/// Spell an amount in words, integer part in major units and the fraction
/// in minor units joined by "et".
///
/// Invalid input (NaN, `None`, unparsable strings) is treated as zero.
pub fn amount_to_words<T: SafeNumber>(amount: T, locale: &WordsLocale) -> String {
    let amount = to_safe_number(amount);
    let units = locale.units();
    let digits = units.minor_digits.min(MAX_MINOR_DIGITS);
    let rounded = round_amount(amount.abs(), digits);

    let integer = rounded.trunc();
    let fraction = Decimal::try_from_i128_with_scale(10_i128.pow(digits), 0)
        .ok()
        .and_then(|scale| (rounded - integer).checked_mul(scale));
    let (Some(major), Some(minor)) = (
        integer.to_u128(),
        fraction.and_then(|f| f.trunc().to_u128()),
    ) else {
        return french::ZERO.to_string();
    };

    if major == 0 && minor == 0 {
        return french::ZERO.to_string();
    }

    let mut clauses = Vec::with_capacity(2);
    if major > 0 {
        let noun = if major > 1 {
            &units.major_plural
        } else {
            &units.major_singular
        };
        // "deux millions de dinars", "un milliard de dinars"
        let joiner = if major % 1_000_000 == 0 { " de " } else { " " };
        clauses.push(format!("{}{joiner}{noun}", number_to_words(major)));
    }
    if minor > 0 {
        let noun = if minor > 1 {
            &units.minor_plural
        } else {
            &units.minor_singular
        };
        clauses.push(format!("{} {noun}", number_to_words(minor)));
    }

    let words = clauses.join(" et ");
    if amount.is_sign_negative() {
        format!("moins {words}")
    } else {
        words
    }
}
