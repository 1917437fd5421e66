//! Media interaction bridge.
//!
//! Binds rewritten media elements in the rendered tree to the modal
//! overlay. The bridge is constructed by the display surface and passed
//! down explicitly; there is no globally registered open handler, so
//! mounting a second surface cannot shadow the first and tearing one
//! down cannot leak handlers into unrelated surfaces.
//!
//! Binding is idempotent: elements already carrying the
//! `data-click-handled` marker (or recorded in the registry) are
//! skipped, and `scan_and_bind` is safe to run after every content
//! change plus on a periodic fallback interval.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use richpost_core::{BindRegistry, DebounceGate, ModalMachine, ModalPhase};

use crate::config::{MODAL_CLOSING_DELAY_MS, OPEN_DEBOUNCE_MS};
use crate::models::ModalMedia;
use crate::utils::dom;

/// Selector matching every element the bridge can bind: rewritten
/// media triggers, video-preview thumbnails and download buttons.
const BIND_SELECTOR: &str = ".media-trigger, .video-preview, [data-download-url]";

/// Marker attribute set on bound elements.
const CLICK_HANDLED_ATTR: &str = "data-click-handled";

// =============================================================================
// Bridge
// =============================================================================

struct BridgeInner {
    /// Modal state owned by the display surface.
    modal: RwSignal<Option<ModalMedia>>,
    machine: RefCell<ModalMachine>,
    gate: RefCell<DebounceGate>,
    registry: RefCell<BindRegistry>,
    /// Live click closures; dropping them detaches the handlers.
    click_closures: RefCell<Vec<Closure<dyn FnMut(web_sys::MouseEvent)>>>,
    /// Periodic rescan timer (closure + interval handle).
    rescan: RefCell<Option<(Closure<dyn FnMut()>, i32)>>,
}

/// Bridge between rendered media elements and the modal overlay.
///
/// Cheap to clone; all clones share one registry and one modal state.
#[derive(Clone)]
pub struct MediaBridge {
    inner: Rc<BridgeInner>,
}

impl MediaBridge {
    pub fn new(modal: RwSignal<Option<ModalMedia>>) -> Self {
        Self {
            inner: Rc::new(BridgeInner {
                modal,
                machine: RefCell::new(ModalMachine::new(MODAL_CLOSING_DELAY_MS)),
                gate: RefCell::new(DebounceGate::new(OPEN_DEBOUNCE_MS)),
                registry: RefCell::new(BindRegistry::new()),
                click_closures: RefCell::new(Vec::new()),
                rescan: RefCell::new(None),
            }),
        }
    }

    /// Open the modal for a piece of media, guarded by the modal
    /// lifecycle machine and the debounce window. The machine is
    /// consulted first: an intent dropped while the modal is open or
    /// closing must not arm the gate and block a legitimate retry.
    pub fn open(&self, src: String, alt: String, is_video: bool) {
        let now = dom::now_ms();
        let mut machine = self.inner.machine.borrow_mut();
        machine.settle(now);
        if machine.phase() != ModalPhase::Closed {
            return;
        }
        if !self.inner.gate.borrow_mut().try_pass(now) {
            return;
        }
        machine.request_open(now);
        self.inner.modal.set(Some(ModalMedia { src, alt, is_video }));
    }

    /// Close the modal. Immediate; the machine stays in its Closing
    /// phase for a fixed delay so a double-click during the close
    /// transition cannot reopen it.
    pub fn close(&self) {
        self.inner.machine.borrow_mut().close(dom::now_ms());
        self.inner.modal.set(None);
    }

    /// Forget all bindings from the previous rendered tree.
    ///
    /// The tree is replaced wholesale on every content change, so the
    /// old elements (and their handlers) are gone; the next scan starts
    /// from a clean slate.
    pub fn reset_bindings(&self) {
        self.inner.registry.borrow_mut().reset();
        self.inner.click_closures.borrow_mut().clear();
    }

    /// Walk the rendered media elements and attach a click handler to
    /// each one not already bound. Idempotent.
    pub fn scan_and_bind(&self) {
        let Some(document) = dom::document() else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(BIND_SELECTOR) else {
            return;
        };

        let mut seen = 0u32;
        let mut newly_bound = 0u32;
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            seen += 1;

            // Edit-mode media never gains interaction affordances.
            if element.get_attribute("data-edit-mode").as_deref() == Some("true") {
                continue;
            }
            if element.get_attribute(CLICK_HANDLED_ATTR).is_some() {
                continue;
            }

            let key = bind_key(&element, index);
            if self.inner.registry.borrow().is_bound(&key) {
                continue;
            }

            let attached = if element.get_attribute("data-download-url").is_some() {
                self.bind_download(&element)
            } else {
                self.bind_media_open(&element)
            };
            if !attached {
                continue;
            }

            let _ = element.set_attribute(CLICK_HANDLED_ATTR, "true");
            self.inner.registry.borrow_mut().mark_bound(&key);
            newly_bound += 1;
        }

        if newly_bound > 0 {
            web_sys::console::log_1(
                &format!("media scan: {seen} elements, {newly_bound} newly bound").into(),
            );
        }
    }

    /// Install the periodic fallback rescan, catching elements inserted
    /// outside the normal update path.
    pub fn install_rescan(&self, interval_ms: i32) {
        let Some(window) = dom::window() else {
            return;
        };
        let weak = Rc::downgrade(&self.inner);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                MediaBridge { inner }.scan_and_bind();
            }
        }) as Box<dyn FnMut()>);

        if let Ok(handle) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        ) {
            *self.inner.rescan.borrow_mut() = Some((closure, handle));
        }
    }

    /// Detach everything this surface installed: the rescan timer and
    /// every click handler.
    pub fn teardown(&self) {
        if let Some((_, handle)) = self.inner.rescan.borrow_mut().take()
            && let Some(window) = dom::window()
        {
            window.clear_interval_with_handle(handle);
        }
        self.inner.click_closures.borrow_mut().clear();
        self.inner.registry.borrow_mut().reset();
    }

    /// Attach an open-modal click handler. Returns false when no source
    /// can be resolved for the element.
    fn bind_media_open(&self, element: &web_sys::Element) -> bool {
        let Some((src, alt, is_video)) = resolve_media(element) else {
            return false;
        };

        let weak = Rc::downgrade(&self.inner);
        let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            event.prevent_default();
            event.stop_propagation();
            if let Some(inner) = weak.upgrade() {
                MediaBridge { inner }.open(src.clone(), alt.clone(), is_video);
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        self.attach_click(element, closure)
    }

    /// Attach a download click handler for elements carrying the
    /// download affordance attributes.
    fn bind_download(&self, element: &web_sys::Element) -> bool {
        let Some(url) = element.get_attribute("data-download-url") else {
            return false;
        };
        let name = element
            .get_attribute("data-download-name")
            .unwrap_or_else(|| "download".to_string());

        let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            event.prevent_default();
            event.stop_propagation();
            if !dom::download_file(&url, &name) {
                web_sys::console::warn_1(&"download failed: no document".into());
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        self.attach_click(element, closure)
    }

    fn attach_click(
        &self,
        element: &web_sys::Element,
        closure: Closure<dyn FnMut(web_sys::MouseEvent)>,
    ) -> bool {
        if element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_err()
        {
            return false;
        }
        // Keep the closure alive until teardown or the next reset.
        self.inner.click_closures.borrow_mut().push(closure);
        true
    }
}

// =============================================================================
// Element Resolution
// =============================================================================

/// Stable registry key for an element: its id when present, otherwise
/// its source plus position in the scan.
fn bind_key(element: &web_sys::Element, index: u32) -> String {
    if let Some(id) = element.get_attribute("id")
        && !id.is_empty()
    {
        return id;
    }
    let src = element
        .get_attribute("data-media-src")
        .or_else(|| element.get_attribute("data-download-url"))
        .unwrap_or_default();
    format!("{src}#{index}")
}

/// Resolve (source, label, is_video) for a bindable media element.
///
/// Rewritten triggers carry explicit `data-media-*` attributes; bare
/// video previews fall back to `data-video-src` and finally to the
/// nested native video element's resolved source.
fn resolve_media(element: &web_sys::Element) -> Option<(String, String, bool)> {
    if let Some(src) = element.get_attribute("data-media-src") {
        if src.is_empty() {
            return None;
        }
        let label = element.get_attribute("data-media-label").unwrap_or_default();
        let is_video = element.get_attribute("data-media-video").as_deref() == Some("true");
        return Some((src, label, is_video));
    }

    // Video preview without explicit media attributes.
    let src = element
        .get_attribute("data-video-src")
        .filter(|s| !s.is_empty())
        .or_else(|| nested_video_source(element))?;
    Some((src, "Vídeo".to_string(), true))
}

fn nested_video_source(element: &web_sys::Element) -> Option<String> {
    let video = element.query_selector("video").ok().flatten()?;
    let media: web_sys::HtmlMediaElement = video.dyn_into().ok()?;
    let resolved = media.current_src();
    if resolved.is_empty() {
        let raw = media.src();
        if raw.is_empty() { None } else { Some(raw) }
    } else {
        Some(resolved)
    }
}
