//! Builders for the markup snippets the editor inserts. Keeping these out
//! of `app.rs` keeps the button handlers down to "build string, splice,
//! restore caret".

/// Empty comment placeholder.
pub const COMMENT_TAG: &str = "{comment: }";

/// Preset section names behind the quick-insert buttons.
pub const QUICK_SECTIONS: [&str; 8] = [
    "Intro",
    "Verse 1",
    "Verse 2",
    "Chorus",
    "Bridge",
    "Interlude",
    "Solo",
    "End",
];

/// Choices for the key dropdown.
pub const KEY_OPTIONS: [&str; 34] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
    "Am", "A#m", "Bbm", "Bm", "Cm", "C#m", "Dbm", "Dm", "D#m", "Ebm", "Em", "Fm", "F#m", "Gbm",
    "Gm", "G#m", "Abm",
];

pub fn title_tag(title: &str) -> String {
    format!("{{title: {title}}}")
}

pub fn artist_tag(artist: &str) -> String {
    format!("{{artist: {artist}}}")
}

pub fn key_tag(key: &str) -> String {
    format!("{{key: {key}}}")
}

/// Two-line section header for the quick-insert buttons, no trailing
/// newline; quick insert appends one.
pub fn section_snippet(name: &str) -> String {
    format!("{{songPartName: {name}}}\n{}:", name.to_uppercase())
}

/// Image reference tag with the path escaped for shell safety.
pub fn image_tag(path: &str) -> String {
    format!("{{image: {}}}", escape_filename_for_shell(path))
}

/// Backslash-prefixes every character a shell would interpret: double and
/// single quotes, whitespace, backticks, `$` and backslash itself.
pub fn escape_filename_for_shell(filename: &str) -> String {
    let mut out = String::with_capacity(filename.len());
    for c in filename.chars() {
        if matches!(c, '"' | '\'' | '`' | '$' | '\\') || c.is_whitespace() {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Trims the pasted path and strips one surrounding quote character from
/// each end, the way paths arrive when copied out of a file manager.
pub fn normalize_image_path(input: &str) -> String {
    let mut path = input;
    path = path.strip_prefix(['\'', '"']).unwrap_or(path);
    path = path.strip_suffix(['\'', '"']).unwrap_or(path);
    path.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_options_cover_major_and_minor_keys() {
        assert_eq!(KEY_OPTIONS.len(), 34);
        assert_eq!(KEY_OPTIONS.iter().filter(|k| k.ends_with('m')).count(), 17);
        assert!(KEY_OPTIONS.contains(&"C"));
        assert!(KEY_OPTIONS.contains(&"Abm"));
    }

    #[test]
    fn metadata_tags() {
        assert_eq!(title_tag("My Song"), "{title: My Song}");
        assert_eq!(artist_tag("Someone"), "{artist: Someone}");
        assert_eq!(key_tag("Bbm"), "{key: Bbm}");
    }

    #[test]
    fn section_snippet_pairs_name_with_uppercase_label() {
        assert_eq!(section_snippet("Verse 1"), "{songPartName: Verse 1}\nVERSE 1:");
        assert_eq!(section_snippet("Intro"), "{songPartName: Intro}\nINTRO:");
    }

    #[test]
    fn escapes_shell_significant_characters() {
        assert_eq!(
            escape_filename_for_shell(r#"my chart "v2".png"#),
            r#"my\ chart\ \"v2\".png"#
        );
        assert_eq!(escape_filename_for_shell("a$b`c\\d'e"), "a\\$b\\`c\\\\d\\'e");
        assert_eq!(escape_filename_for_shell("plain.png"), "plain.png");
    }

    #[test]
    fn image_tag_round_trip() {
        let tag = image_tag("set list.png");
        assert_eq!(tag, "{image: set\\ list.png}");
        let doc = format!("intro\n{tag}\noutro");
        assert_eq!(doc.matches(&tag).count(), 1);
    }

    #[test]
    fn normalizes_quoted_paths() {
        assert_eq!(normalize_image_path("'chart.png'"), "chart.png");
        assert_eq!(normalize_image_path("\"chart.png\""), "chart.png");
        assert_eq!(normalize_image_path("  chart.png  "), "chart.png");
        assert_eq!(normalize_image_path("''chart.png''"), "'chart.png'");
    }
}
