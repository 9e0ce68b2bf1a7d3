//! Safe numeric coercion at the boundary of the engine.
//!
//! Every monetary field enters the crate through [`to_safe_number`] (or the
//! [`lenient_decimal`] serde adapter, which uses the same rules). Missing or
//! unusable input becomes zero; it is never rejected.

use rust_decimal::prelude::*;

/// Number of fractional digits in the dinar (1 dinar = 1000 millimes).
pub const CURRENCY_DECIMALS: u32 = 3;

/// Values that can be coerced into a [`Decimal`], falling back to zero.
pub trait SafeNumber {
    /// Convert to a decimal. Invalid input yields `None`.
    fn try_to_decimal(&self) -> Option<Decimal>;
}

/// Coerce any supported value to a decimal, defaulting to zero.
///
/// ```
/// use fatoura::core::to_safe_number;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(to_safe_number(12.5_f64), dec!(12.5));
/// assert_eq!(to_safe_number(f64::NAN), dec!(0));
/// assert_eq!(to_safe_number("1 250,500"), dec!(1250.500));
/// assert_eq!(to_safe_number(None::<f64>), dec!(0));
/// ```
pub fn to_safe_number<T: SafeNumber>(value: T) -> Decimal {
    match value.try_to_decimal() {
        Some(d) => d,
        None => {
            tracing::debug!("coerced invalid numeric input to zero");
            Decimal::ZERO
        }
    }
}

/// Round half-up (midpoint away from zero) to `dp` decimal places.
///
/// The engine never rounds; this is for presentation and snapshots.
pub fn round_amount(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `1 - percent / 100`, the factor a percentage discount leaves behind.
pub(crate) fn remaining_factor(percent: Decimal) -> Decimal {
    percent
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|p| Decimal::ONE.checked_sub(p))
        .unwrap_or_else(|| unrepresentable("discount factor"))
}

/// `a * b`, or zero when the product exceeds the `Decimal` range.
pub(crate) fn mul_or_zero(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| unrepresentable("product"))
}

/// `value * percent / 100`, or zero when out of range.
pub(crate) fn percent_of(value: Decimal, percent: Decimal) -> Decimal {
    value
        .checked_mul(percent)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| unrepresentable("percentage"))
}

/// Amounts that do not fit in a `Decimal` are treated like any other
/// unusable input.
pub(crate) fn unrepresentable(what: &str) -> Decimal {
    tracing::debug!(what, "decimal overflow, using zero");
    Decimal::ZERO
}

impl SafeNumber for Decimal {
    fn try_to_decimal(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl SafeNumber for f64 {
    fn try_to_decimal(&self) -> Option<Decimal> {
        if !self.is_finite() {
            return None;
        }
        Decimal::from_f64(*self)
    }
}

impl SafeNumber for f32 {
    fn try_to_decimal(&self) -> Option<Decimal> {
        if !self.is_finite() {
            return None;
        }
        Decimal::from_f32(*self)
    }
}

macro_rules! safe_integer {
    ($($t:ty),*) => {
        $(impl SafeNumber for $t {
            fn try_to_decimal(&self) -> Option<Decimal> {
                Some(Decimal::from(*self))
            }
        })*
    };
}

safe_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl SafeNumber for &str {
    fn try_to_decimal(&self) -> Option<Decimal> {
        parse_lenient(self)
    }
}

impl SafeNumber for String {
    fn try_to_decimal(&self) -> Option<Decimal> {
        parse_lenient(self)
    }
}

impl<T: SafeNumber> SafeNumber for Option<T> {
    fn try_to_decimal(&self) -> Option<Decimal> {
        self.as_ref().and_then(SafeNumber::try_to_decimal)
    }
}

/// Parse user-typed numbers: surrounding whitespace, spaces as digit
/// grouping, and a comma as decimal separator are accepted.
fn parse_lenient(raw: &str) -> Option<Decimal> {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}' && *c != '\u{202f}')
        .collect();
    if compact.is_empty() {
        return None;
    }
    let normalized = if compact.contains(',') && !compact.contains('.') {
        compact.replace(',', ".")
    } else {
        compact.replace(',', "")
    };
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

/// Serde adapter decoding a decimal from a number, a numeric string, or
/// `null`, mapping anything unusable to zero.
///
/// Use with `#[serde(default, deserialize_with = "lenient_decimal::deserialize")]`.
pub mod lenient_decimal {
    use std::fmt;

    use rust_decimal::Decimal;
    use serde::de::{self, Deserializer, Visitor};

    use super::to_safe_number;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientVisitor)
    }

    struct LenientVisitor;

    impl<'de> Visitor<'de> for LenientVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, a numeric string, or null")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            Ok(to_safe_number(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            Ok(to_safe_number(v))
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_none<E: de::Error>(self) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Decimal, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(LenientVisitor)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Decimal, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}
            Ok(Decimal::ZERO)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Decimal, A::Error>
        where
            A: de::MapAccess<'de>,
        {
            while map
                .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
                .is_some()
            {}
            Ok(Decimal::ZERO)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn floats_and_specials() {
        assert_eq!(to_safe_number(0.5_f64), dec!(0.5));
        assert_eq!(to_safe_number(f64::NAN), Decimal::ZERO);
        assert_eq!(to_safe_number(f64::INFINITY), Decimal::ZERO);
        assert_eq!(to_safe_number(f32::NEG_INFINITY), Decimal::ZERO);
    }

    #[test]
    fn strings() {
        assert_eq!(to_safe_number("19"), dec!(19));
        assert_eq!(to_safe_number(" 12.345 "), dec!(12.345));
        assert_eq!(to_safe_number("12,345"), dec!(12.345));
        assert_eq!(to_safe_number("1 000,500"), dec!(1000.500));
        assert_eq!(to_safe_number("1,000.5"), dec!(1000.5));
        assert_eq!(to_safe_number("1e3"), dec!(1000));
        assert_eq!(to_safe_number("abc"), Decimal::ZERO);
        assert_eq!(to_safe_number(""), Decimal::ZERO);
        assert_eq!(to_safe_number(String::from("7")), dec!(7));
    }

    #[test]
    fn options_and_integers() {
        assert_eq!(to_safe_number(Some(3_i32)), dec!(3));
        assert_eq!(to_safe_number(None::<i32>), Decimal::ZERO);
        assert_eq!(to_safe_number(Some("2,5")), dec!(2.5));
        assert_eq!(to_safe_number(42_u64), dec!(42));
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_amount(dec!(1.0005), 3), dec!(1.001));
        assert_eq!(round_amount(dec!(1.0004), 3), dec!(1.000));
        assert_eq!(round_amount(dec!(-1.0005), 3), dec!(-1.001));
    }

    #[test]
    fn remaining_factor_of_percent() {
        assert_eq!(remaining_factor(dec!(10)), dec!(0.9));
        assert_eq!(remaining_factor(Decimal::ZERO), Decimal::ONE);
        assert_eq!(remaining_factor(dec!(100)), Decimal::ZERO);
        assert!(remaining_factor(Decimal::MIN) > Decimal::ONE);
    }

    #[test]
    fn overflowing_arithmetic_yields_zero() {
        assert_eq!(mul_or_zero(Decimal::MAX, dec!(2)), Decimal::ZERO);
        let big = Decimal::from(1_000_000_000_000_000_i64);
        assert_eq!(mul_or_zero(big, big), Decimal::ZERO);
        assert_eq!(mul_or_zero(dec!(1.5), dec!(2)), dec!(3));
        assert_eq!(percent_of(Decimal::MAX, dec!(19)), Decimal::ZERO);
        assert_eq!(percent_of(dec!(200), dec!(7)), dec!(14));
    }
}
