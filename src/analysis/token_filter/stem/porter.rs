//! Porter stemming algorithm implementation.
//!
//! A simplified Porter stemmer for reducing English words to their stems.
//! The algorithm applies five suffix-rewriting steps in sequence, gated by
//! the "measure" of the remaining stem (the number of vowel-consonant
//! patterns it contains).
//!
//! # Examples
//!
//! ```
//! use quillon::analysis::token_filter::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

/// Check whether the character at `pos` is a vowel ('y' counts as a vowel
/// after a consonant).
fn is_vowel(word: &[u8], pos: usize) -> bool {
    match word[pos].to_ascii_lowercase() {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' => pos > 0 && !is_vowel(word, pos - 1),
        _ => false,
    }
}

/// The measure of a word: the number of vowel-consonant patterns.
fn measure(word: &str) -> usize {
    let bytes = word.as_bytes();
    let n = bytes.len();
    let mut m = 0;
    let mut i = 0;

    while i < n && !is_vowel(bytes, i) {
        i += 1;
    }
    while i < n {
        while i < n && is_vowel(bytes, i) {
            i += 1;
        }
        if i >= n {
            break;
        }
        m += 1;
        while i < n && !is_vowel(bytes, i) {
            i += 1;
        }
    }
    m
}

fn contains_vowel(word: &str) -> bool {
    let bytes = word.as_bytes();
    (0..bytes.len()).any(|i| is_vowel(bytes, i))
}

fn ends_double_consonant(word: &str) -> bool {
    let bytes = word.as_bytes();
    let len = bytes.len();
    len >= 2 && bytes[len - 1] == bytes[len - 2] && !is_vowel(bytes, len - 1)
}

/// Consonant-vowel-consonant ending, where the final consonant is not
/// 'w', 'x' or 'y'.
fn ends_cvc(word: &str) -> bool {
    let bytes = word.as_bytes();
    let len = bytes.len();
    len >= 3
        && !is_vowel(bytes, len - 3)
        && is_vowel(bytes, len - 2)
        && !is_vowel(bytes, len - 1)
        && !matches!(bytes[len - 1], b'w' | b'x' | b'y')
}

fn replace_suffix(word: &str, old_suffix: &str, new_suffix: &str, min_measure: usize) -> String {
    if let Some(stem) = word.strip_suffix(old_suffix)
        && measure(stem) >= min_measure
    {
        return format!("{stem}{new_suffix}");
    }
    word.to_string()
}

/// Step 1a: plurals.
fn step1a(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("sses") {
        format!("{stem}ss")
    } else if let Some(stem) = word.strip_suffix("ies") {
        format!("{stem}i")
    } else if word.ends_with("ss") {
        word.to_string()
    } else if word.len() > 1
        && let Some(stem) = word.strip_suffix('s')
    {
        stem.to_string()
    } else {
        word.to_string()
    }
}

/// Step 1b: -eed, -ed, -ing.
fn step1b(word: &str) -> String {
    let stripped = if word.ends_with("eed") {
        replace_suffix(word, "eed", "ee", 1)
    } else if let Some(stem) = word.strip_suffix("ed") {
        if contains_vowel(stem) {
            stem.to_string()
        } else {
            word.to_string()
        }
    } else if let Some(stem) = word.strip_suffix("ing") {
        if contains_vowel(stem) {
            stem.to_string()
        } else {
            word.to_string()
        }
    } else {
        word.to_string()
    };

    if stripped == word {
        return stripped;
    }

    if stripped.ends_with("at") || stripped.ends_with("bl") || stripped.ends_with("iz") {
        format!("{stripped}e")
    } else if ends_double_consonant(&stripped)
        && !stripped.ends_with('l')
        && !stripped.ends_with('s')
        && !stripped.ends_with('z')
    {
        stripped[..stripped.len() - 1].to_string()
    } else if measure(&stripped) == 1 && ends_cvc(&stripped) {
        format!("{stripped}e")
    } else {
        stripped
    }
}

/// Step 2: map double suffixes to single ones (-ational → -ate, ...).
fn step2(word: &str) -> String {
    const SUFFIXES: &[(&str, &str)] = &[
        ("ational", "ate"),
        ("tional", "tion"),
        ("enci", "ence"),
        ("anci", "ance"),
        ("izer", "ize"),
        ("abli", "able"),
        ("alli", "al"),
        ("entli", "ent"),
        ("eli", "e"),
        ("ousli", "ous"),
        ("ization", "ize"),
        ("ation", "ate"),
        ("ator", "ate"),
        ("alism", "al"),
        ("iveness", "ive"),
        ("fulness", "ful"),
        ("ousness", "ous"),
        ("aliti", "al"),
        ("iviti", "ive"),
        ("biliti", "ble"),
    ];

    for (old_suffix, new_suffix) in SUFFIXES {
        if word.ends_with(old_suffix) {
            return replace_suffix(word, old_suffix, new_suffix, 1);
        }
    }
    word.to_string()
}

/// Step 3: -icate → -ic, -ful → "", ...
fn step3(word: &str) -> String {
    const SUFFIXES: &[(&str, &str)] = &[
        ("icate", "ic"),
        ("ative", ""),
        ("alize", "al"),
        ("iciti", "ic"),
        ("ical", "ic"),
        ("ful", ""),
        ("ness", ""),
    ];

    for (old_suffix, new_suffix) in SUFFIXES {
        if word.ends_with(old_suffix) {
            return replace_suffix(word, old_suffix, new_suffix, 1);
        }
    }
    word.to_string()
}

/// Step 4: remove -al, -ance, -ence, ... when the measure allows.
fn step4(word: &str) -> String {
    const SUFFIXES: &[&str] = &[
        "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
        "ou", "ism", "ate", "iti", "ous", "ive", "ize",
    ];

    for suffix in SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix)
            && measure(stem) > 1
        {
            // "ion" only drops after 's' or 't'
            if *suffix != "ion" || stem.ends_with('s') || stem.ends_with('t') {
                return stem.to_string();
            }
        }
    }
    word.to_string()
}

/// Step 5: remove final -e and reduce -ll.
fn step5(word: &str) -> String {
    let word = if let Some(stem) = word.strip_suffix('e') {
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            stem.to_string()
        } else {
            word.to_string()
        }
    } else {
        word.to_string()
    };

    if word.ends_with("ll") && measure(&word) > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if word.chars().count() <= 2 {
            return word.to_lowercase();
        }
        // The rewrite rules are ASCII-only; leave other words untouched.
        if !word.is_ascii() {
            return word.to_lowercase();
        }

        let word = word.to_lowercase();
        let word = step1a(&word);
        let word = step1b(&word);
        let word = step2(&word);
        let word = step3(&word);
        let word = step4(&word);
        step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
