//! Content transformation pipeline for user-authored rich content.
//!
//! A content blob is an opaque string: either constrained HTML produced
//! by the rich-text editor ("structured markup") or legacy
//! markdown/plain text. This crate owns every transformation applied to
//! such a blob on its way to storage or to a rendering surface:
//!
//! - [`dialect`] - decides which dialect a blob is in
//! - [`markdown`] - compiles the legacy markdown subset into markup
//! - [`rewrite`] - rewrites edit-time markup into display-time markup
//! - [`strip`] - removes session/edit-only attributes and controls
//! - [`media`] - media classification and edit-time container markup
//! - [`interaction`] - modal/bind state machines for display surfaces
//! - [`pipeline`] - the composed display and storage entry points
//!
//! All transformation functions are total over strings: unmatched
//! patterns produce no substitution, malformed micro-syntax stays as
//! literal text. The worst outcome of a missed rule is plain text
//! rendering, never an error.

pub mod dialect;
pub mod interaction;
pub mod markdown;
pub mod media;
pub mod pipeline;
pub mod rewrite;
pub mod strip;

pub use dialect::{Dialect, classify};
pub use interaction::{BindRegistry, DebounceGate, ModalMachine, ModalPhase};
pub use markdown::compile_markdown;
pub use media::{MediaKind, UploadedFile, container_for, format_file_size};
pub use pipeline::{prepare_for_storage, render_for_display};
pub use rewrite::rewrite_for_display;
pub use strip::{StripMode, strip};
