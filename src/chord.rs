//! Chord token classification. Inside bracketed markup a token is either a
//! chord symbol, which stays as written, or a section name, which gets
//! rewritten into a header block. The grammar is checked by hand so the
//! quality list is the literal alternation: "m" and "7" are qualities,
//! "m7" is not.

/// Allowed quality suffixes after the root (and optional accidental).
const QUALITIES: [&str; 8] = ["m", "5", "7", "maj7", "sus2", "sus4", "dim", "m7b5"];

/// True when `token` is a chord symbol:
/// `ROOT [#|b] [QUALITY]` optionally followed by `/` and a second chord of
/// the same shape (slash bass). Whole-token match, case-sensitive root,
/// no surrounding whitespace tolerated.
pub fn is_chord(token: &str) -> bool {
    match token.split_once('/') {
        Some((chord, bass)) => is_chord_atom(chord) && is_chord_atom(bass),
        None => is_chord_atom(token),
    }
}

fn is_chord_atom(token: &str) -> bool {
    let mut chars = token.chars();
    if !matches!(chars.next(), Some('A'..='G')) {
        return false;
    }
    let mut rest = chars.as_str();
    if let Some(stripped) = rest.strip_prefix(['#', 'b']) {
        rest = stripped;
    }
    rest.is_empty() || QUALITIES.contains(&rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_roots_and_accidentals() {
        for token in ["A", "B", "C", "D", "E", "F", "G", "F#", "Bb", "G#", "Ab"] {
            assert!(is_chord(token), "{token} should be a chord");
        }
    }

    #[test]
    fn qualities_from_the_fixed_list() {
        for token in ["Am", "C5", "G7", "Cmaj7", "Dsus2", "Asus4", "Bdim", "Cm7b5", "F#m", "Bbmaj7"]
        {
            assert!(is_chord(token), "{token} should be a chord");
        }
    }

    #[test]
    fn slash_bass() {
        assert!(is_chord("G/B"));
        assert!(is_chord("Am/G"));
        assert!(is_chord("D/F#"));
        assert!(is_chord("Cmaj7/Bb"));
    }

    #[test]
    fn quality_combinations_outside_the_list_are_rejected() {
        // "m" and "7" are each qualities, "m7" is not.
        assert!(!is_chord("Am7"));
        assert!(!is_chord("Csus"));
        assert!(!is_chord("Gmaj"));
        assert!(!is_chord("Cdim7"));
    }

    #[test]
    fn section_names_are_not_chords() {
        assert!(!is_chord("Chorus"));
        assert!(!is_chord("Verse 1"));
        assert!(!is_chord("Bridge"));
    }

    #[test]
    fn root_is_case_sensitive_and_bounded() {
        assert!(!is_chord("c"));
        assert!(!is_chord("H"));
        assert!(!is_chord("am"));
    }

    #[test]
    fn degenerate_tokens() {
        assert!(!is_chord(""));
        assert!(!is_chord("   "));
        assert!(!is_chord("/"));
        assert!(!is_chord("C/"));
        assert!(!is_chord("/G"));
        assert!(!is_chord("C/G/B"));
        assert!(!is_chord(" C"));
    }
}
