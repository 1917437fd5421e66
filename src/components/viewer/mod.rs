//! Content viewer: the display surface for published content.
//!
//! Runs the full display pipeline (classify, compile, rewrite, strip)
//! over a content blob, renders the result, and keeps the media
//! interaction bridge synchronized with the rendered tree:
//!
//! - after every content change a deferred scan binds fresh media
//!   elements (the tree is replaced wholesale, bindings never survive)
//! - a periodic fallback rescan catches elements inserted outside the
//!   normal update path
//! - everything the surface installed is torn down on cleanup

mod bridge;

pub use bridge::MediaBridge;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use richpost_core::render_for_display;

use crate::components::modal::MediaModal;
use crate::config::{INITIAL_BIND_DELAY_MS, RESCAN_INTERVAL_MS};
use crate::models::ModalMedia;

/// Display surface for a published content blob.
#[component]
pub fn ContentView(#[prop(into)] content: Signal<String>) -> impl IntoView {
    let modal = RwSignal::new(None::<ModalMedia>);
    let bridge = StoredValue::new_local(MediaBridge::new(modal));

    let html = Memo::new(move |_| render_for_display(&content.get()));

    // Re-bind after every content change, deferred so the freshly
    // inserted tree settles before it is scanned.
    Effect::new(move |_| {
        html.track();
        bridge.with_value(|b| b.reset_bindings());
        spawn_local(async move {
            TimeoutFuture::new(INITIAL_BIND_DELAY_MS).await;
            bridge.with_value(|b| b.scan_and_bind());
        });
    });

    // Fallback interval rescan.
    bridge.with_value(|b| b.install_rescan(RESCAN_INTERVAL_MS as i32));

    on_cleanup(move || bridge.with_value(|b| b.teardown()));

    let on_close = Callback::new(move |_: ()| bridge.with_value(|b| b.close()));

    view! {
        <div
            class="content-view"
            style="word-break: break-word; overflow-wrap: break-word; line-height: 1.7;"
            inner_html=move || html.get()
        />
        <MediaModal media=modal on_close=on_close />
    }
}
