//! Media modal overlay.
//!
//! Expand/collapse overlay for clicked media. The pipeline's only
//! obligation toward it is supplying correct, up-to-date values and
//! honoring `on_close` semantics; the overlay itself owns no content
//! state and renders nothing while the modal is empty.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::ModalMedia;
use crate::utils::dom;

/// Modal overlay showing one expanded image or video.
#[component]
pub fn MediaModal(media: RwSignal<Option<ModalMedia>>, on_close: Callback<()>) -> impl IntoView {
    move || {
        media.get().map(|current| {
            let ModalMedia { src, alt, is_video } = current;
            let download_src = src.clone();
            let download_name = if alt.is_empty() { "video".to_string() } else { alt.clone() };
            let caption_icon = if is_video { "🎬" } else { "🖼️" };
            let caption = alt.clone();

            view! {
                <div
                    style="position: fixed; inset: 0; z-index: 50; background: rgba(0,0,0,0.75); display: flex; align-items: center; justify-content: center; padding: 16px;"
                    on:click=move |_| on_close.run(())
                >
                    <div
                        style="position: relative; max-width: 90vw; max-height: 90vh; background: white; border-radius: 8px; overflow: hidden;"
                        on:click=move |ev: ev::MouseEvent| ev.stop_propagation()
                    >
                        // Top buttons
                        <div style="position: absolute; top: 8px; right: 8px; z-index: 10; display: flex; gap: 8px;">
                            <Show when=move || is_video>
                                {
                                    let url = download_src.clone();
                                    let name = download_name.clone();
                                    view! {
                                        <button
                                            style="background: rgba(37,99,235,0.8); color: white; border: none; border-radius: 4px; padding: 6px 10px; cursor: pointer;"
                                            title="Download do vídeo"
                                            on:click=move |_| {
                                                dom::download_file(&url, &name);
                                            }
                                        >
                                            <Icon icon=ic::DOWNLOAD />
                                        </button>
                                    }
                                }
                            </Show>
                            <button
                                style="background: rgba(0,0,0,0.5); color: white; border: none; border-radius: 4px; padding: 6px 10px; cursor: pointer;"
                                title="Fechar"
                                on:click=move |_| on_close.run(())
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>

                        // Content
                        {if is_video {
                            view! {
                                <video
                                    controls
                                    style="display: block; max-width: 100%; max-height: 80vh; object-fit: contain; min-width: 400px; min-height: 300px;"
                                >
                                    <source src=src.clone() type="video/mp4" />
                                    <source src=src.clone() type="video/webm" />
                                    "Seu navegador não suporta vídeo HTML5."
                                </video>
                            }
                            .into_any()
                        } else {
                            view! {
                                <img
                                    src=src.clone()
                                    alt=alt.clone()
                                    style="display: block; max-width: 100%; max-height: 85vh; object-fit: contain;"
                                />
                            }
                            .into_any()
                        }}

                        // Caption
                        <Show when={
                            let caption = caption.clone();
                            move || !caption.is_empty()
                        }>
                            <div style="padding: 16px; background: #f9fafb; border-top: 1px solid #e5e7eb;">
                                <p style="font-size: 14px; color: #374151; text-align: center; margin: 0;">
                                    {format!("{caption_icon} {caption}")}
                                    <Show when=move || is_video>
                                        <span style="margin-left: 8px; font-size: 12px; color: #2563eb;">
                                            "• Clique no botão de download para salvar"
                                        </span>
                                    </Show>
                                </p>
                            </div>
                        </Show>
                    </div>
                </div>
            }
        })
    }
}
