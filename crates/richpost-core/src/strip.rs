//! Attribute stripping for storage and display.
//!
//! The editor decorates markup with session-only state: edit-mode flags
//! on media containers, click-handled markers left by the display
//! surface, and per-item delete controls. None of that belongs in the
//! persisted blob or in rendered output; this module removes it.

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Patterns
// =============================================================================

/// `data-edit-mode="true|false"` in both quote forms (display path).
static EDIT_MODE_FLAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-edit-mode="(?:true|false)"|data-edit-mode='(?:true|false)'"#).unwrap()
});

/// Any-valued `data-edit-mode` attribute in both quote forms (storage path).
static EDIT_MODE_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-edit-mode="[^"]*"|data-edit-mode='[^']*'"#).unwrap());

/// Any-valued `data-click-handled` marker in both quote forms.
static CLICK_HANDLED_ANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-click-handled="[^"]*"|data-click-handled='[^']*'"#).unwrap()
});

/// Delete-control button recognized by its "Remover ..." title.
static DELETE_BUTTON_TITLED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<button[^>]*title="Remover [^"]*"[^>]*>🗑️</button>"#).unwrap());

/// Leftover delete-control button recognized by its sole trash glyph.
static DELETE_BUTTON_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<button[^>]*>🗑️</button>").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static WHITESPACE_BEFORE_GT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+>").unwrap());

/// A whole `<code>` element; its body is verbatim content and must
/// survive whitespace normalization.
static CODE_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<code[^>]*>.*?</code>").unwrap());

/// Placeholder for a held-aside code element. Private-use codepoint, so
/// it never collides with authored content or matches `\s`.
fn code_placeholder(index: usize) -> String {
    format!("\u{e000}{index}\u{e000}")
}

// =============================================================================
// Stripping
// =============================================================================

/// Which surface the stripped content is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    /// Final transformation before handing the blob to storage.
    /// Removes edit-mode flags and click-handled markers; delete
    /// controls are presentation-only and stay in the saved form.
    ForStorage,
    /// Final transformation before handing the blob to a rendering
    /// surface. Removes edit-mode flags and leftover delete controls.
    ForDisplay,
}

/// Strip session/edit-only decoration from a content blob.
///
/// Pure and idempotent; an empty input is returned unchanged.
pub fn strip(content: &str, mode: StripMode) -> String {
    if content.is_empty() {
        return content.to_string();
    }

    match mode {
        StripMode::ForDisplay => {
            let cleaned = EDIT_MODE_FLAG.replace_all(content, "");
            let cleaned = DELETE_BUTTON_TITLED.replace_all(&cleaned, "");
            let cleaned = DELETE_BUTTON_BARE.replace_all(&cleaned, "");

            // Hold code elements aside; whitespace inside them is
            // content, not markup formatting.
            let mut code_segments: Vec<String> = Vec::new();
            let cleaned = CODE_ELEMENT.replace_all(&cleaned, |caps: &regex::Captures<'_>| {
                code_segments.push(caps[0].to_string());
                code_placeholder(code_segments.len() - 1)
            });

            let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
            let cleaned = WHITESPACE_BEFORE_GT.replace_all(&cleaned, ">");
            let mut restored = cleaned.trim().to_string();
            for (index, segment) in code_segments.iter().enumerate() {
                restored = restored.replace(&code_placeholder(index), segment);
            }
            restored
        }
        StripMode::ForStorage => {
            let cleaned = EDIT_MODE_ANY.replace_all(content, "");
            let cleaned = CLICK_HANDLED_ANY.replace_all(&cleaned, "");
            let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
            WHITESPACE_BEFORE_GT.replace_all(&cleaned, ">").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strips_edit_flags_and_delete_controls() {
        let input = "<div data-edit-mode=\"true\">x<button title=\"Remover item\">🗑️</button></div>";
        assert_eq!(strip(input, StripMode::ForDisplay), "<div>x</div>");
    }

    #[test]
    fn test_display_strips_bare_trash_button() {
        let input = "<div>x<button class=\"rm\">🗑️</button></div>";
        assert_eq!(strip(input, StripMode::ForDisplay), "<div>x</div>");
    }

    #[test]
    fn test_display_keeps_single_quoted_flags_out() {
        let input = "<video data-edit-mode='false' controls></video>";
        assert_eq!(
            strip(input, StripMode::ForDisplay),
            "<video controls></video>"
        );
    }

    #[test]
    fn test_storage_strips_any_valued_markers() {
        let input = "<div data-edit-mode=\"whatever\" data-click-handled=\"true\">x</div>";
        assert_eq!(strip(input, StripMode::ForStorage), "<div>x</div>");
    }

    #[test]
    fn test_storage_keeps_delete_controls() {
        // Delete controls are presentation-only; saving must not touch them.
        let input = "<div>x<button title=\"Remover item\">🗑️</button></div>";
        assert_eq!(strip(input, StripMode::ForStorage), input);
    }

    #[test]
    fn test_storage_is_idempotent() {
        let input = "<div data-edit-mode=\"true\">a   b <video data-click-handled='true' ></video></div>";
        let once = strip(input, StripMode::ForStorage);
        let twice = strip(&once, StripMode::ForStorage);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input_is_noop() {
        assert_eq!(strip("", StripMode::ForDisplay), "");
        assert_eq!(strip("", StripMode::ForStorage), "");
    }

    #[test]
    fn test_whitespace_normalization() {
        let input = "<div  \n  >a\t\tb</div>";
        assert_eq!(strip(input, StripMode::ForDisplay), "<div>a b</div>");
    }

    #[test]
    fn test_display_keeps_code_whitespace_verbatim() {
        let input = "<div   class=\"x\"><code>let x =  1;\n    indented</code></div>";
        assert_eq!(
            strip(input, StripMode::ForDisplay),
            "<div class=\"x\"><code>let x =  1;\n    indented</code></div>"
        );
    }

    #[test]
    fn test_display_normalizes_around_multiple_code_spans() {
        let input = "a   <code>1  2</code>   b   <code>3\t4</code>   c";
        assert_eq!(
            strip(input, StripMode::ForDisplay),
            "a <code>1  2</code> b <code>3\t4</code> c"
        );
    }
}
