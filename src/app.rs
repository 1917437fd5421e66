//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use richpost_core::prepare_for_storage;

use crate::components::{ContentView, RichTextEditor};
use crate::config::APP_NAME;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessible from any
/// child component via `use_context::<AppContext>()`.
///
/// Two blobs exist at any time:
/// - **draft**: the raw edit-time content, mutated on every input
/// - **published**: the storage form of the last published draft
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Edit-time content blob.
    pub draft: RwSignal<String>,
    /// Storage-form content blob of the last publish.
    pub published: RwSignal<String>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(String::new()),
            published: RwSignal::new(String::new()),
        }
    }

    /// Publishes the current draft: strips edit-time scaffolding and
    /// replaces the stored blob.
    pub fn publish(&self) {
        let stored = prepare_for_storage(&self.draft.get_untracked());
        self.published.set(stored);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the editor pane and the published-content view
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let has_published = Memo::new(move |_| !ctx.published.get().is_empty());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f9fafb;
                    color: #374151;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Algo deu errado"
                        </h1>
                        <p style="color: #6b7280; margin-bottom: 2rem;">
                            "Ocorreu um erro inesperado. Recarregue a página e tente novamente."
                        </p>
                        <details style="
                            text-align: left;
                            background: white;
                            border: 1px solid #e5e7eb;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6b7280;">
                                "Detalhes do erro"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #dc2626;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2563eb;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Recarregar"
                        </button>
                    </div>
                </div>
            }
        >
            <main style="max-width: 800px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column; gap: 24px;">
                <h1 style="font-size: 22px; margin: 0; color: #111827;">{APP_NAME}</h1>
                <section>
                    <h2 style="font-size: 18px; margin: 0 0 12px 0; color: #111827;">
                        "Editor"
                    </h2>
                    <RichTextEditor value=ctx.draft />
                    <button
                        style="margin-top: 12px; background: #2563eb; color: white; border: none; border-radius: 6px; padding: 10px 24px; cursor: pointer; font-size: 14px;"
                        on:click=move |_| ctx.publish()
                    >
                        "Publicar"
                    </button>
                </section>

                <Show when=move || has_published.get()>
                    <section>
                        <h2 style="font-size: 18px; margin: 0 0 12px 0; color: #111827;">
                            "Publicado"
                        </h2>
                        <div style="border: 1px solid #e5e7eb; border-radius: 8px; background: white; padding: 16px;">
                            <ContentView content=ctx.published />
                        </div>
                    </section>
                </Show>
            </main>
        </ErrorBoundary>
    }
}
