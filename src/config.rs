//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the
//! application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "richpost";

// =============================================================================
// Media Interaction Timing
// =============================================================================

/// Debounce window for media open-intents (collapses double clicks).
pub const OPEN_DEBOUNCE_MS: u64 = 500;

/// How long the modal stays in its Closing phase before an open intent
/// is accepted again.
pub const MODAL_CLOSING_DELAY_MS: u64 = 300;

/// Delay before the first scan-and-bind after a content change, giving
/// the browser time to settle the freshly inserted tree.
pub const INITIAL_BIND_DELAY_MS: u32 = 200;

/// Fallback interval re-scan, catching media inserted outside the
/// normal update path.
pub const RESCAN_INTERVAL_MS: u32 = 2_000;

/// Delay before the post-insertion cursor fix-up in the editor; DOM
/// mutation must settle before selection APIs are queried.
pub const CURSOR_FIXUP_DELAY_MS: u32 = 50;

// =============================================================================
// Editor
// =============================================================================

/// Default editor placeholder.
pub const EDITOR_PLACEHOLDER: &str = "Escreva algo...";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10_000;

/// Best-effort upload statistics endpoint.
pub const UPLOAD_STATS_URL: &str = "/api/upload-stats";
