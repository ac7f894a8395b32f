//! Converts bracketed section markers into tagged section headers.
//!
//! A single forward pass over the whole document: every `[` ... `]` span is
//! classified, chords stay as written, section names are rewritten into the
//! two-line `{songPartName: ...}` header. Occurrence counts live in
//! [`SectionCounters`], which the editing session owns and carries across
//! conversions until the document is cleared. Repeat names get a numeric
//! suffix starting at the second occurrence.

use std::collections::HashMap;

use crate::casing::to_title_case;
use crate::chord::is_chord;

/// Session-scoped occurrence counts, keyed by the lowercased trimmed
/// section name. Deliberately not derived from the document: re-running the
/// converter over reintroduced bracket markers continues numbering where
/// the session left off.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionCounters {
    counts: HashMap<String, u32>,
}

impl SectionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all counts. Called when the editor is emptied.
    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(&name.to_lowercase()).copied().unwrap_or(0)
    }

    fn bump(&mut self, key: String) -> u32 {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }
}

/// Rewrites every non-chord `[name]` span into
/// `{songPartName: Name}\nNAME:\n`, numbering repeats via `counters`.
/// Spans are delimited by `[` and the nearest following `]`, so `[A][B]`
/// is two tokens; an unmatched `[` is left untouched. Chord spans are
/// preserved byte for byte, brackets included.
pub fn convert_sections(text: &str, counters: &mut SectionCounters) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open + 1..].find(']').map(|i| open + 1 + i) else {
            break;
        };
        out.push_str(&rest[..open]);

        let trimmed = rest[open + 1..close].trim();
        if is_chord(trimmed) {
            out.push_str(&rest[open..=close]);
        } else {
            let count = counters.bump(trimmed.to_lowercase());
            let mut title_name = to_title_case(trimmed);
            let mut upper_name = trimmed.to_uppercase();
            if count > 1 {
                title_name = format!("{title_name} {count}");
                upper_name = format!("{upper_name} {count}");
            }
            out.push_str(&format!("{{songPartName: {title_name}}}\n{upper_name}:\n"));
        }
        rest = &rest[close + 1..];
    }

    out.push_str(rest);
    out
}
