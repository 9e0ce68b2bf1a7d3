#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let locale = fatoura::words::WordsLocale::default();
    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary user-typed text must always spell something.
        let _ = fatoura::words::amount_to_words(s, &locale);
    }
    if data.len() >= 8 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[..8]);
        let _ = fatoura::words::amount_to_words(f64::from_le_bytes(bytes), &locale);
    }
});
