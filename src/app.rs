use leptos::task::spawn_local;

use leptos::html;
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlTextAreaElement;

use crate::casing::{to_title_case, to_upper_case};
use crate::editor_core::{insert_at_cursor, replace_all, transform_selection, Selection};
use crate::markup;
use crate::sections::{convert_sections, SectionCounters};

// The textarea reports UTF-16 code-unit offsets; the core works in byte
// offsets, so convert on the way in and again when restoring the caret.
fn textarea_selection(textarea: &HtmlTextAreaElement, text: &str) -> Selection {
    let end_units = text.encode_utf16().count();
    let start = textarea
        .selection_start()
        .ok()
        .flatten()
        .map_or(end_units, |v| v as usize);
    let end = textarea
        .selection_end()
        .ok()
        .flatten()
        .map_or(start, |v| v as usize);
    Selection::from_utf16(text, start, end)
}

// The textarea repaints before it will accept a caret move, so focus and
// selection are restored on a zero-delay timeout. `selection` is in UTF-16
// units, the textarea's native coordinates.
fn restore_selection(editor_ref: NodeRef<html::Textarea>, selection: Selection) {
    set_timeout(
        move || {
            if let Some(textarea) = editor_ref.get_untracked() {
                let _ = textarea.focus();
                let _ =
                    textarea.set_selection_range(selection.start as u32, selection.end as u32);
            }
        },
        Duration::ZERO,
    );
}

#[component]
pub fn App() -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (artist, set_artist) = signal(String::new());
    let (key, set_key) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (replace, set_replace) = signal(String::new());
    let (image_path, set_image_path) = signal(String::new());
    let editor_ref = NodeRef::<html::Textarea>::new();

    // Section numbering state lives with the session, not the document.
    let counters = StoredValue::new(SectionCounters::new());

    Effect::new(move |_| {
        if content.get().is_empty() {
            counters.update_value(|c| c.reset());
        }
    });

    let insert_snippet = move |snippet: String, append_newline: bool| {
        let Some(textarea) = editor_ref.get_untracked() else {
            return;
        };
        let text = content.get_untracked();
        let selection = textarea_selection(&textarea, &text);
        let outcome = insert_at_cursor(&text, selection, &snippet, append_newline);
        let caret = outcome.selection.to_utf16(&outcome.text);
        set_content.set(outcome.text);
        restore_selection(editor_ref, caret);
    };

    let quick_insert = move |snippet: String| insert_snippet(snippet, true);

    let apply_case = move |f: fn(&str) -> String| {
        let Some(textarea) = editor_ref.get_untracked() else {
            return;
        };
        let text = content.get_untracked();
        let selection = textarea_selection(&textarea, &text);
        if selection.is_cursor() {
            return;
        }
        let outcome = transform_selection(&text, selection, f);
        let restored = outcome.selection.to_utf16(&outcome.text);
        set_content.set(outcome.text);
        restore_selection(editor_ref, restored);
    };

    let run_replace_all = move |_| {
        let search_text = search.get_untracked();
        if search_text.is_empty() {
            return;
        }
        let replace_text = replace.get_untracked();
        set_content.update(|text| *text = replace_all(text, &search_text, &replace_text));
    };

    let insert_image = move |_| {
        let raw = image_path.get_untracked();
        if raw.trim().is_empty() {
            return;
        }
        let path = markup::normalize_image_path(&raw);
        insert_snippet(format!("{}\n", markup::image_tag(&path)), false);
        set_image_path.set(String::new());
    };

    let convert_bracket_sections = move |_| {
        let text = content.get_untracked();
        if let Some(converted) = counters.try_update_value(|c| convert_sections(&text, c)) {
            set_content.set(converted);
        }
    };

    let copy_to_clipboard = move |_| {
        let text = content.get_untracked();
        spawn_local(async move {
            let promise: js_sys::Promise = window().navigator().clipboard().write_text(&text);
            let _ = JsFuture::from(promise).await;
        });
    };

    view! {
        <main class="container">
            <h1>"ChordPro Markup Editor"</h1>

            <div class="top-controls">
                <input
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |e| set_title.set(event_target_value(&e))
                />
                <button on:click=move |_| quick_insert(markup::title_tag(&title.get_untracked()))>
                    "Insert {title} tag"
                </button>

                <input
                    placeholder="Artist"
                    prop:value=move || artist.get()
                    on:input=move |e| set_artist.set(event_target_value(&e))
                />
                <button on:click=move |_| quick_insert(markup::artist_tag(&artist.get_untracked()))>
                    "Insert {artist} tag"
                </button>

                <select
                    prop:value=move || key.get()
                    on:change=move |e| set_key.set(event_target_value(&e))
                >
                    <option value="">"Select Key"</option>
                    {markup::KEY_OPTIONS
                        .iter()
                        .copied()
                        .map(|k| view! { <option value=k>{k}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button on:click=move |_| quick_insert(markup::key_tag(&key.get_untracked()))>
                    "Insert {key} tag"
                </button>
            </div>

            <div class="search-replace">
                <input
                    placeholder="Search"
                    prop:value=move || search.get()
                    on:input=move |e| set_search.set(event_target_value(&e))
                />
                <input
                    placeholder="Replace"
                    prop:value=move || replace.get()
                    on:input=move |e| set_replace.set(event_target_value(&e))
                />
                <button on:click=run_replace_all>"Replace All"</button>
            </div>

            <textarea
                class="editor"
                node_ref=editor_ref
                prop:value=move || content.get()
                on:input=move |e| set_content.set(event_target_value(&e))
                placeholder="Enter ChordPro content here..."
                spellcheck="false"
            ></textarea>

            <div class="quick-buttons">
                <button on:click=move |_| quick_insert(markup::COMMENT_TAG.to_string())>
                    "{comment}"
                </button>
                {markup::QUICK_SECTIONS
                    .iter()
                    .copied()
                    .map(|name| {
                        view! {
                            <button on:click=move |_| quick_insert(markup::section_snippet(name))>
                                {name}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="image-insert">
                <input
                    type="text"
                    placeholder="Enter full image path"
                    prop:value=move || image_path.get()
                    on:input=move |e| set_image_path.set(event_target_value(&e))
                />
                <button on:click=insert_image>"Insert Image"</button>
            </div>

            <div class="actions">
                <button on:click=move |_| apply_case(to_upper_case)>
                    "Transform selection to UPPERCASE"
                </button>
                <button on:click=move |_| apply_case(to_title_case)>
                    "Transform selection to Title Case"
                </button>
                <button on:click=convert_bracket_sections>"Convert [section] markers"</button>
                <button on:click=copy_to_clipboard>"Copy all to Clipboard"</button>
            </div>
        </main>
    }
}
