//! Cursor-relative splicing and literal search/replace over the document
//! string. Everything here is a pure function of its inputs; the UI owns the
//! document signal and applies the returned text/selection.

/// A selection as byte offsets into the document. Browser text surfaces
/// report UTF-16 code units instead; convert at the boundary with
/// [`Selection::from_utf16`] / [`Selection::to_utf16`] so splicing never
/// lands inside a multi-byte character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn cursor(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_cursor(self) -> bool {
        self.start == self.end
    }

    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// Builds a selection from UTF-16 code-unit offsets, as reported by
    /// `selectionStart`/`selectionEnd`. Offsets past the end of `text`
    /// clamp to its length; an offset inside a surrogate pair snaps back
    /// to the start of that character.
    pub fn from_utf16(text: &str, start: usize, end: usize) -> Self {
        Self::new(
            byte_offset_from_utf16(text, start),
            byte_offset_from_utf16(text, end),
        )
    }

    /// Converts this byte-offset selection into UTF-16 code units for
    /// handing back to the text surface.
    pub fn to_utf16(self, text: &str) -> Self {
        let clamped = self.clamp(text.len());
        Self {
            start: text[..clamped.start].encode_utf16().count(),
            end: text[..clamped.end].encode_utf16().count(),
        }
    }
}

fn byte_offset_from_utf16(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (byte_idx, c) in text.char_indices() {
        if offset < units + c.len_utf16() {
            return byte_idx;
        }
        units += c.len_utf16();
    }
    text.len()
}

/// Result of a splice: the rewritten document plus the selection (or caret)
/// the editor should show afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpliceOutcome {
    pub text: String,
    pub selection: Selection,
}

/// Replaces the selected span with `f(selected)` and selects the
/// replacement. A caret selection is a no-op: the document and selection
/// come back unchanged.
pub fn transform_selection(
    text: &str,
    selection: Selection,
    f: impl FnOnce(&str) -> String,
) -> SpliceOutcome {
    let selection = selection.clamp(text.len());
    if selection.is_cursor() {
        return SpliceOutcome {
            text: text.to_string(),
            selection,
        };
    }

    let before = &text[..selection.start];
    let selected = &text[selection.start..selection.end];
    let after = &text[selection.end..];
    let replaced = f(selected);

    let mut out = String::with_capacity(before.len() + replaced.len() + after.len());
    out.push_str(before);
    out.push_str(&replaced);
    out.push_str(after);

    SpliceOutcome {
        selection: Selection::new(selection.start, selection.start + replaced.len()),
        text: out,
    }
}

/// Inserts `insert` at the selection, overwriting whatever was selected,
/// and places the caret right after the inserted text. Quick-insert snippets
/// pass `append_newline = true` to land the caret on a fresh line.
pub fn insert_at_cursor(
    text: &str,
    selection: Selection,
    insert: &str,
    append_newline: bool,
) -> SpliceOutcome {
    let selection = selection.clamp(text.len());
    let before = &text[..selection.start];
    let after = &text[selection.end..];

    let mut out = String::with_capacity(before.len() + insert.len() + 1 + after.len());
    out.push_str(before);
    out.push_str(insert);
    if append_newline {
        out.push('\n');
    }
    let caret = out.len();
    out.push_str(after);

    SpliceOutcome {
        text: out,
        selection: Selection::cursor(caret),
    }
}

/// Literal substring replacement, every non-overlapping occurrence, left to
/// right. Replacement output is never rescanned. An empty search string is a
/// no-op.
pub fn replace_all(text: &str, search: &str, replace: &str) -> String {
    if search.is_empty() {
        return text.to_string();
    }
    text.replace(search, replace)
}
