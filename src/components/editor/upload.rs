//! Upload collaborator surface.
//!
//! The upload transport itself is external; this component owns the
//! contract — a success callback carrying the completed-upload
//! descriptor and an error callback carrying a message. Locally picked
//! files are served through an object URL, which keeps the whole
//! insertion flow live without a server. It also loads the best-effort
//! upload security statistics shown under the editor; a failed stats
//! fetch is logged and otherwise ignored.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use richpost_core::UploadedFile;

use crate::components::icons as ic;
use crate::config::UPLOAD_STATS_URL;
use crate::models::{UploadStats, UploadStatsResponse};
use crate::utils::fetch_json;

/// Upload button backed by a hidden file input.
///
/// # Props
/// - `on_success`: invoked with the completed-upload descriptor
/// - `on_error`: invoked with a user-facing error message
#[component]
pub fn UploadButton(
    on_success: Callback<UploadedFile>,
    on_error: Callback<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_change = move |_| {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                on_success.run(UploadedFile {
                    url,
                    original_name: file.name(),
                    size: Some(file.size() as u64),
                });
            }
            Err(_) => {
                on_error.run("Não foi possível ler o arquivo selecionado.".to_string());
            }
        }
        // Allow re-selecting the same file.
        input.set_value("");
    };

    view! {
        <input
            node_ref=input_ref
            type="file"
            accept="image/*,video/*,audio/*,.pdf,.zip"
            style="display: none;"
            on:change=on_change
        />
        <button
            type="button"
            title="Upload seguro"
            style="height: 32px; padding: 0 10px; border: 1px solid #e5e7eb; border-radius: 4px; background: white; cursor: pointer; display: flex; align-items: center; gap: 6px;"
            on:click=move |_| {
                if let Some(input) = input_ref.get_untracked() {
                    input.click();
                }
            }
        >
            <Icon icon=ic::UPLOAD />
            "Upload"
        </button>
    }
}

/// Footer line with upload security statistics.
#[component]
pub fn UploadStatsFooter() -> impl IntoView {
    let stats = RwSignal::new(None::<UploadStats>);

    // Best-effort telemetry: failures are logged, never surfaced.
    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_json::<UploadStatsResponse>(UPLOAD_STATS_URL).await {
                Ok(response) if response.success => {
                    if let Some(loaded) = response.stats {
                        stats.set(Some(loaded));
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("Could not load upload stats: {err}").into(),
                    );
                }
            }
        });
    });

    move || {
        stats.get().map(|s| {
            let quarantined = s.quarantined.total;
            view! {
                <p style="font-size: 12px; color: #16a34a; margin: 4px 0 0 0;">
                    {format!("🔒 Sistema de segurança: {} arquivos verificados", s.safe_files)}
                    <Show when=move || { quarantined > 0 }>
                        <span style="color: #ea580c;">
                            {format!(" | {quarantined} em quarentena")}
                        </span>
                    </Show>
                </p>
            }
        })
    }
}
