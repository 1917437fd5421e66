//! UI components built with Leptos.
//!
//! - [`editor`] - Rich-text editor (toolbar, upload flow)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`modal`] - Media modal overlay
//! - [`viewer`] - Published-content view and its media bridge

pub mod editor;
pub mod icons;
pub mod modal;
pub mod viewer;

pub use editor::RichTextEditor;
pub use modal::MediaModal;
pub use viewer::ContentView;
