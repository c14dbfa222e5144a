//! CB-006: Free-text name normalization.
//!
//! `"Riz@z RISO00tto!"` → `"Rizz Risotto"`. Hyphens, underscores and
//! whitespace separate words; anything other than ASCII letters is dropped;
//! each word is title-cased.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_\s]+").expect("static regex"));
static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z ]+").expect("static regex"));

/// Canonical display name, or `None` if nothing printable remains.
pub fn normalize_name(text: &str) -> Option<String> {
    let spaced = SEPARATORS.replace_all(text, " ");
    let letters = NON_LETTERS.replace_all(&spaced, "");

    let words: Vec<String> = letters.split_whitespace().map(title_case).collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_ascii_uppercase()
            .to_string()
            + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}
