use rust_decimal::Decimal;

use crate::core::{CURRENCY_DECIMALS, round_amount};

/// Turns a raw amount into display text.
///
/// Implemented for closures so callers can pass their own formatter.
pub trait CurrencyFormatter {
    fn format(&self, amount: Decimal) -> String;
}

impl<F> CurrencyFormatter for F
where
    F: Fn(Decimal) -> String,
{
    fn format(&self, amount: Decimal) -> String {
        self(amount)
    }
}

/// Fixed-decimals formatter with configurable separators and symbol.
///
/// ```
/// use fatoura::render::*;
/// use rust_decimal_macros::dec;
///
/// let tnd = AmountFormatter::default();
/// assert_eq!(tnd.format(dec!(1071)), "1 071,000 DT");
/// assert_eq!(AmountFormatter::plain(2).format(dec!(-1234.5)), "-1234.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormatter {
    pub decimals: u32,
    pub decimal_separator: char,
    pub thousands_separator: Option<char>,
    /// Appended after a space when present.
    pub symbol: Option<String>,
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self {
            decimals: CURRENCY_DECIMALS,
            decimal_separator: ',',
            thousands_separator: Some(' '),
            symbol: Some("DT".into()),
        }
    }
}

impl AmountFormatter {
    /// Dot decimal separator, no grouping, no symbol.
    pub fn plain(decimals: u32) -> Self {
        Self {
            decimals,
            decimal_separator: '.',
            thousands_separator: None,
            symbol: None,
        }
    }

    /// Formatter matching the configured currency.
    #[cfg(feature = "settings")]
    pub fn from_settings(currency: &crate::settings::CurrencySettings) -> Self {
        Self {
            decimals: currency.decimals,
            decimal_separator: currency.decimal_separator,
            thousands_separator: currency.thousands_separator,
            symbol: (!currency.symbol.is_empty()).then(|| currency.symbol.clone()),
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

impl CurrencyFormatter for AmountFormatter {
    fn format(&self, amount: Decimal) -> String {
        let rounded = round_amount(amount, self.decimals);
        let text = format!("{:.*}", self.decimals as usize, rounded.abs());
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let mut out = String::new();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        push_grouped(&mut out, int_part, self.thousands_separator);
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        if let Some(symbol) = &self.symbol {
            out.push(' ');
            out.push_str(symbol);
        }
        out
    }
}

fn push_grouped(out: &mut String, digits: &str, separator: Option<char>) {
    let Some(sep) = separator else {
        out.push_str(digits);
        return;
    };
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
}
