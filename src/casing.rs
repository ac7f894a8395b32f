//! Case transforms applied to the current selection.

use regex::Regex;
use std::sync::OnceLock;

pub fn to_upper_case(s: &str) -> String {
    s.to_uppercase()
}

/// Title-cases each maximal run of ASCII word characters: first character
/// uppercased, the rest of the run lowercased. Anything outside `[0-9A-Za-z_]`
/// passes through and breaks the run, so "mc-donald" becomes "Mc-Donald" and
/// the run after an apostrophe is capitalized on its own.
pub fn to_title_case(s: &str) -> String {
    static RE_WORD: OnceLock<Regex> = OnceLock::new();
    let re_word = RE_WORD.get_or_init(|| Regex::new(r"[0-9A-Za-z_]+").unwrap());

    re_word
        .replace_all(s, |caps: &regex::Captures| {
            let mut word = caps[0].to_ascii_lowercase();
            word[..1].make_ascii_uppercase();
            word
        })
        .into_owned()
}
