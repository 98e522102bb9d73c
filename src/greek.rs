//! Accent-insensitive canonicalization of polytonic Greek.
//!
//! Every lemma/surface comparison in the matching stages goes through
//! [`normalize`]; nothing else in the crate compares Greek strings directly.
//!
//! The transform is: NFD decomposition, drop combining diacritics (plus the
//! legacy spacing accent/breathing codepoints that survive decomposition),
//! lowercase. It is total and idempotent.

use unicode_normalization::UnicodeNormalization;

/// Spacing accent/breathing marks from the Greek and Greek Extended blocks.
///
/// These are standalone codepoints, not combining marks, so NFD leaves them
/// in place; they appear in older transcriptions as detached breathings and
/// accents and must be dropped explicitly.
const LEGACY_GREEK_MARKS: &[char] = &[
    '\u{0384}', // tonos
    '\u{0385}', // dialytika tonos
    '\u{1FBD}', // koronis
    '\u{1FBF}', // psili
    '\u{1FC0}', // perispomeni
    '\u{1FC1}', // dialytika + perispomeni
    '\u{1FCD}', // psili + varia
    '\u{1FCE}', // psili + oxia
    '\u{1FCF}', // psili + perispomeni
    '\u{1FDD}', // dasia + varia
    '\u{1FDE}', // dasia + oxia
    '\u{1FDF}', // dasia + perispomeni
    '\u{1FED}', // dialytika + varia
    '\u{1FEE}', // dialytika + oxia
    '\u{1FEF}', // varia
    '\u{1FFD}', // oxia
    '\u{1FFE}', // dasia
];

fn is_stripped_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c) || LEGACY_GREEK_MARKS.contains(&c)
}

/// Canonicalize `text` for accent-insensitive comparison.
///
/// # Example
/// ```
/// use diegesis::greek::normalize;
///
/// assert_eq!(normalize("Ἰησοῦς"), "ιησους");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.nfd().filter(|c| !is_stripped_mark(*c)).collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn strips_polytonic_diacritics() {
        let cases: Vec<(&str, &str)> = vec![
            ("Ἰησοῦς", "ιησους"),
            ("ἀρχὴ", "αρχη"),
            ("εὐαγγελίου", "ευαγγελιου"),
            ("Χριστοῦ", "χριστου"),
            ("υἱοῦ", "υιου"),
            ("θεοῦ", "θεου"),
            ("πνεῦμα", "πνευμα"),
            ("οὐ", "ου"),
            ("λέγω", "λεγω"),
            ("Ἠλίας", "ηλιας"),
            ("ῥαββί", "ραββι"),
            ("ἡ ὁδός", "η οδος"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize(input), expected, "normalize({input:?})");
        }
    }

    #[test]
    fn strips_legacy_spacing_marks() {
        // Detached breathings/accents as they appear in older transcriptions.
        assert_eq!(normalize("\u{1FBF}Ισους"), "ισους");
        assert_eq!(normalize("α\u{0384}β\u{1FFE}γ"), "αβγ");
    }

    #[test]
    fn idempotent_and_total() {
        let samples =
            ["", "Ἰησοῦς", "καὶ εὐθὺς", "ΙΗΣΟΥΣ", "already plain ascii", "πνεῦμα ἅγιον", "ςσ", "\u{1FEF}\u{0300}"];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {s:?}");
        }
    }

    #[test]
    fn lowercases_monotonic_input() {
        assert_eq!(normalize("ΚΑΙ"), "και");
        assert_eq!(normalize("Mark"), "mark");
    }
}
