//! French cardinal numbers, traditional spelling (hyphens below one hundred).

pub(super) const ZERO: &str = "zéro";

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = ["", "", "vingt", "trente", "quarante", "cinquante", "soixante"];

const THOUSAND: u128 = 1_000;
const MILLION: u128 = 1_000_000;
const BILLION: u128 = 1_000_000_000;

/// Spell a non-negative integer in French.
///
/// ```
/// use fatoura::words::number_to_words;
///
/// assert_eq!(number_to_words(0), "zéro");
/// assert_eq!(number_to_words(71), "soixante et onze");
/// assert_eq!(number_to_words(80), "quatre-vingts");
/// assert_eq!(number_to_words(200_080), "deux cent mille quatre-vingts");
/// ```
pub fn number_to_words(n: u128) -> String {
    if n == 0 {
        return ZERO.to_string();
    }

    let mut parts: Vec<String> = Vec::new();

    let billions = n / BILLION;
    if billions > 0 {
        let noun = if billions > 1 { "milliards" } else { "milliard" };
        parts.push(format!("{} {noun}", number_to_words(billions)));
    }

    let millions = (n / MILLION % THOUSAND) as u32;
    if millions > 0 {
        let noun = if millions > 1 { "millions" } else { "million" };
        parts.push(format!("{} {noun}", below_thousand(millions, true)));
    }

    // "mille" is invariable and never preceded by "un"
    let thousands = (n / THOUSAND % THOUSAND) as u32;
    match thousands {
        0 => {}
        1 => parts.push("mille".to_string()),
        t => parts.push(format!("{} mille", below_thousand(t, false))),
    }

    let rest = (n % THOUSAND) as u32;
    if rest > 0 {
        parts.push(below_thousand(rest, true));
    }

    parts.join(" ")
}

/// `terminal` is false when the group is followed by "mille", which drops the
/// plural "s" of "cents" and "quatre-vingts".
fn below_thousand(n: u32, terminal: bool) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let mut out = match hundreds {
        0 => String::new(),
        1 => "cent".to_string(),
        h if rest == 0 && terminal => format!("{} cents", UNITS[h as usize]),
        h => format!("{} cent", UNITS[h as usize]),
    };

    if rest > 0 {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&below_hundred(rest, terminal));
    }
    out
}

fn below_hundred(n: u32, terminal: bool) -> String {
    match n {
        0..=16 => UNITS[n as usize].to_string(),
        17..=19 => format!("dix-{}", UNITS[(n - 10) as usize]),
        20..=69 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{tens} et un"),
                u => format!("{tens}-{}", UNITS[u as usize]),
            }
        }
        71 => "soixante et onze".to_string(),
        70..=79 => format!("soixante-{}", below_hundred(n - 60, terminal)),
        80 if terminal => "quatre-vingts".to_string(),
        80 => "quatre-vingt".to_string(),
        _ => format!("quatre-vingt-{}", below_hundred(n - 80, terminal)),
    }
}
