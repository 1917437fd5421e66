//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Current wall-clock time in milliseconds.
#[inline]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Trigger a browser download of a URL under a given file name.
///
/// Creates a transient anchor element with a `download` attribute and
/// clicks it. Returns `true` on success.
pub fn download_file(url: &str, filename: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Ok(element) = document.create_element("a") else {
        return false;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return false;
    };

    anchor.set_href(url);
    anchor.set_download(filename);

    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
        true
    } else {
        false
    }
}
