use fatoura::words::*;
use rust_decimal_macros::dec;

fn fr() -> WordsLocale {
    WordsLocale::default()
}

#[test]
fn zero_is_zero() {
    assert_eq!(amount_to_words(dec!(0), &fr()), "zéro");
    assert_eq!(amount_to_words(0_i32, &fr()), "zéro");
    assert_eq!(amount_to_words(0.0_f64, &fr()).to_lowercase(), "zéro");
}

#[test]
fn invalid_input_behaves_like_zero() {
    let zero = amount_to_words(dec!(0), &fr());
    assert_eq!(amount_to_words(f64::NAN, &fr()), zero);
    assert_eq!(amount_to_words(f64::INFINITY, &fr()), zero);
    assert_eq!(amount_to_words(None::<f64>, &fr()), zero);
    assert_eq!(amount_to_words("", &fr()), zero);
}

#[test]
fn typical_invoice_totals() {
    assert_eq!(
        amount_to_words(dec!(1071), &fr()),
        "mille soixante et onze dinars"
    );
    assert_eq!(
        amount_to_words(dec!(285.600), &fr()),
        "deux cent quatre-vingt-cinq dinars et six cents millimes"
    );
    assert_eq!(
        amount_to_words(dec!(121.001), &fr()),
        "cent vingt et un dinars et un millime"
    );
    assert_eq!(
        amount_to_words(dec!(180.080), &fr()),
        "cent quatre-vingts dinars et quatre-vingts millimes"
    );
}

#[test]
fn only_millimes() {
    assert_eq!(amount_to_words(dec!(0.250), &fr()), "deux cent cinquante millimes");
    assert_eq!(amount_to_words(dec!(0.001), &fr()), "un millime");
}

#[test]
fn accepts_loose_input() {
    assert_eq!(amount_to_words("12,500", &fr()), "douze dinars et cinq cents millimes");
    assert_eq!(amount_to_words(Some(3_u32), &fr()), "trois dinars");
    assert_eq!(amount_to_words(2.5_f64, &fr()), "deux dinars et cinq cents millimes");
}

#[test]
fn large_amounts() {
    assert_eq!(
        amount_to_words(dec!(1000000), &fr()),
        "un million de dinars"
    );
    assert_eq!(
        amount_to_words(dec!(3200000.5), &fr()),
        "trois millions deux cent mille dinars et cinq cents millimes"
    );
}

#[test]
fn cardinals() {
    let cases = [
        (11, "onze"),
        (31, "trente et un"),
        (45, "quarante-cinq"),
        (58, "cinquante-huit"),
        (72, "soixante-douze"),
        (96, "quatre-vingt-seize"),
        (180, "cent quatre-vingts"),
        (1999, "mille neuf cent quatre-vingt-dix-neuf"),
        (2024, "deux mille vingt-quatre"),
        (300_000, "trois cent mille"),
    ];
    for (n, expected) in cases {
        assert_eq!(number_to_words(n), expected, "{n}");
    }
}
