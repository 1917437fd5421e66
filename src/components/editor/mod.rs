//! Rich-text editor component.
//!
//! A contenteditable surface producing the structured markup dialect.
//! The editor mutates the content blob on every input event and hands
//! the raw edit-time string to its owner; stripping for storage or
//! display is the owner's responsibility via the core pipeline.
//!
//! Media is inserted through the upload flow: the upload collaborator
//! reports a completed upload and the editor turns the descriptor into
//! the media container for the file's kind. In edit mode inserted
//! media carries no interaction affordance, so clicking media while
//! editing never opens the display modal.

mod toolbar;
mod upload;

pub use toolbar::{Toolbar, ToolbarAction};
pub use upload::{UploadButton, UploadStatsFooter};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use richpost_core::{UploadedFile, container_for};

use crate::config::{CURSOR_FIXUP_DELAY_MS, EDITOR_PLACEHOLDER};
use crate::utils::dom;

/// Placeholder and media sizing rules for the editable surface.
const EDITOR_CSS: &str = r#"
.rich-editor[data-empty="true"]:before {
  content: attr(data-placeholder);
  color: #9ca3af;
  pointer-events: none;
  position: absolute;
  font-style: italic;
}
.rich-editor {
  position: relative;
  white-space: pre-wrap;
  word-break: break-word;
  overflow-wrap: break-word;
}
.rich-editor img {
  max-width: 260px !important;
  width: 260px !important;
  height: auto !important;
}
.rich-editor video,
.rich-editor audio {
  max-width: 100% !important;
  height: auto !important;
}
.rich-editor div[contenteditable="false"] {
  position: relative;
  clear: both;
  margin: 16px 0;
}
"#;

/// Rich-text editor over a content blob signal.
///
/// # Props
/// - `value`: the content blob, replaced on every input
/// - `placeholder`: text shown while the surface is empty
/// - `edit_mode`: when true (the default), inserted media gains no
///   interaction affordances
#[component]
pub fn RichTextEditor(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = true)] edit_mode: bool,
) -> impl IntoView {
    let editor_ref = NodeRef::<leptos::html::Div>::new();
    let placeholder = placeholder.unwrap_or_else(|| EDITOR_PLACEHOLDER.to_string());
    // (is_error, message) notification from the upload flow.
    let notice = RwSignal::new(None::<(bool, String)>);

    let sync_from_dom = move || {
        if let Some(editor) = editor_ref.get_untracked() {
            update_placeholder_marker(&editor);
            value.set(editor.inner_html());
        }
    };

    // Keep the DOM in sync when the blob is replaced from outside.
    Effect::new(move |_| {
        let current = value.get();
        if let Some(editor) = editor_ref.get() {
            if editor.inner_html() != current {
                editor.set_inner_html(&current);
            }
            update_placeholder_marker(&editor);
        }
    });

    let run_action = Callback::new(move |action: ToolbarAction| {
        match action {
            ToolbarAction::Bold => exec_command("bold", None),
            ToolbarAction::Italic => exec_command("italic", None),
            ToolbarAction::Underline => exec_command("underline", None),
            ToolbarAction::Heading => exec_command("formatBlock", Some("H3")),
            ToolbarAction::Link => {
                if let Some(window) = dom::window()
                    && let Ok(Some(url)) = window.prompt_with_message("Digite a URL:")
                    && !url.is_empty()
                {
                    exec_command("createLink", Some(&url));
                }
            }
        }
        if let Some(editor) = editor_ref.get_untracked() {
            let _ = editor.focus();
        }
        sync_from_dom();
    });

    let on_upload_success = Callback::new(move |file: UploadedFile| {
        let markup = container_for(&file, edit_mode);
        if let Some(editor) = editor_ref.get_untracked() {
            insert_html_and_restore_cursor(&editor, &markup, sync_from_dom);
        }
        notice.set(Some((
            false,
            format!("🔒 Arquivo verificado e carregado: {}", file.original_name),
        )));
    });

    let on_upload_error = Callback::new(move |error: String| {
        web_sys::console::error_1(&format!("upload error: {error}").into());
        notice.set(Some((
            true,
            "❌ Falha na verificação de segurança. Tente outro arquivo.".to_string(),
        )));
    });

    view! {
        <div style="border: 1px solid #e5e7eb; border-radius: 8px; background: white;">
            <style>{EDITOR_CSS}</style>

            <Toolbar on_action=run_action>
                <UploadButton on_success=on_upload_success on_error=on_upload_error />
            </Toolbar>

            {move || {
                notice.get().map(|(is_error, message)| {
                    let color = if is_error { "#dc2626" } else { "#16a34a" };
                    view! {
                        <p style=format!(
                            "margin: 0; padding: 8px 12px; font-size: 13px; color: {color};",
                        )>{message}</p>
                    }
                })
            }}

            <div
                node_ref=editor_ref
                class="rich-editor"
                contenteditable="true"
                data-placeholder=placeholder
                style="width: 100%; padding: 16px; min-height: 200px; outline: none; line-height: 1.7; font-size: 15px;"
                on:input=move |_| sync_from_dom()
            />

            <div style="padding: 12px; border-top: 1px solid #e5e7eb; background: #f9fafb;">
                <p style="font-size: 12px; color: #6b7280; margin: 0;">
                    "Formatação rica e upload de mídia inserido direto no conteúdo. "
                    {if edit_mode {
                        "Expansão de mídia disponível após publicar."
                    } else {
                        "Clique na mídia para expandir."
                    }}
                </p>
                <UploadStatsFooter />
            </div>
        </div>
    }
}

// =============================================================================
// Editing Primitives
// =============================================================================

/// Run a `document.execCommand` formatting command.
fn exec_command(command: &str, argument: Option<&str>) {
    let Some(document) = dom::document() else {
        return;
    };
    let document: web_sys::HtmlDocument = wasm_bindgen::JsCast::unchecked_into(document);
    let result = match argument {
        Some(arg) => document.exec_command_with_show_ui_and_value(command, false, arg),
        None => document.exec_command(command),
    };
    if result.is_err() {
        web_sys::console::warn_1(&format!("execCommand failed: {command}").into());
    }
}

/// Insert HTML at the caret and make sure there is an editable line
/// after it, fixing the caret position once the DOM has settled.
fn insert_html_and_restore_cursor(
    editor: &web_sys::HtmlDivElement,
    html: &str,
    after: impl Fn() + Copy + 'static,
) {
    let current = editor.inner_html();
    let trimmed = current.trim();
    let is_empty = trimmed.is_empty() || trimmed == "<br>";

    if is_empty {
        // Empty surface: place the block between two editable lines and
        // put the caret on the first one.
        editor.set_inner_html(&format!("<div><br></div>{html}<div><br></div>"));
        place_caret_at_first_line(editor);
        after();
        return;
    }

    // Make sure a caret exists, then insert at it.
    if !has_selection() {
        let _ = editor.focus();
        place_caret_at_end(editor);
    }
    exec_command("insertHTML", Some(html));

    // The caret fix-up must wait for the browser to settle the mutated
    // tree before selection APIs are queried.
    let editor = editor.clone();
    spawn_local(async move {
        TimeoutFuture::new(CURSOR_FIXUP_DELAY_MS).await;
        insert_editable_line_after_caret();
        after();
        let _ = editor.focus();
    });
}

fn has_selection() -> bool {
    dom::window()
        .and_then(|w| w.get_selection().ok().flatten())
        .is_some_and(|selection| selection.range_count() > 0)
}

/// Collapse the selection to the start of the editor's first line.
fn place_caret_at_first_line(editor: &web_sys::HtmlDivElement) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(selection) = dom::window().and_then(|w| w.get_selection().ok().flatten()) else {
        return;
    };
    let Ok(Some(first_line)) = editor.query_selector("div") else {
        return;
    };
    let Ok(range) = document.create_range() else {
        return;
    };
    if range.set_start(&first_line, 0).is_ok() {
        range.collapse_with_to_start(true);
        let _ = selection.remove_all_ranges();
        let _ = selection.add_range(&range);
    }
}

/// Collapse the selection to the end of the editor's content.
fn place_caret_at_end(editor: &web_sys::HtmlDivElement) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(selection) = dom::window().and_then(|w| w.get_selection().ok().flatten()) else {
        return;
    };
    let Ok(range) = document.create_range() else {
        return;
    };
    if range.select_node_contents(editor).is_ok() {
        range.collapse_with_to_start(false);
        let _ = selection.remove_all_ranges();
        let _ = selection.add_range(&range);
    }
}

/// Insert a `<div><br></div>` line after the caret and move the caret
/// onto it, so typing can continue below freshly inserted media.
fn insert_editable_line_after_caret() {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(selection) = dom::window().and_then(|w| w.get_selection().ok().flatten()) else {
        return;
    };
    if selection.range_count() == 0 {
        return;
    }
    let Ok(range) = selection.get_range_at(0) else {
        return;
    };
    let Ok(line) = document.create_element("div") else {
        return;
    };
    line.set_inner_html("<br>");
    if range.insert_node(&line).is_ok() && range.set_start_after(&line).is_ok() {
        range.collapse_with_to_start(true);
        let _ = selection.remove_all_ranges();
        let _ = selection.add_range(&range);
    }
}

/// Toggle the `data-empty` marker driving the CSS placeholder.
fn update_placeholder_marker(editor: &web_sys::HtmlDivElement) {
    let content = editor.inner_html();
    let trimmed = content.trim();
    if trimmed.is_empty() || trimmed == "<br>" {
        let _ = editor.set_attribute("data-empty", "true");
    } else {
        let _ = editor.remove_attribute("data-empty");
    }
}
