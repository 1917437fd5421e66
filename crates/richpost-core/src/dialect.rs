//! Dialect classification for content blobs.
//!
//! The editor produces a constrained HTML dialect; older records are
//! plain text with a small markdown subset. Classification is a
//! presence test over a fixed list of tag/attribute signatures, not a
//! parse: absence of every signature classifies as legacy markdown.

// =============================================================================
// Signatures
// =============================================================================

/// Tag/attribute openings that identify editor-produced markup.
const MARKUP_SIGNATURES: &[&str] = &[
    "<div", "<img", "<video", "<audio", "<pre", "<code", "<strong", "<em", "<span", "<p>", "<br>",
    "<a", "<h1", "<h2", "<h3", "style=", "onclick=", "class=",
];

/// Emoji glyphs historically used to mark "has media" in finalized
/// legacy records. Content carrying one is treated as structured markup
/// so it flows through the display path unmodified instead of being fed
/// to the markdown compiler.
const MEDIA_MARKERS: &[&str] = &["🖼️", "🎬", "🎵", "📎"];

// =============================================================================
// Classification
// =============================================================================

/// Which dialect a content blob is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Constrained HTML produced by the editor (or already compiled).
    StructuredMarkup,
    /// Plain text with the legacy markdown subset.
    LegacyMarkdown,
}

/// Classify a content blob.
///
/// Structured markup wins if any tag/attribute signature or legacy
/// media marker is present anywhere in the string.
pub fn classify(content: &str) -> Dialect {
    let structured = MARKUP_SIGNATURES.iter().any(|sig| content.contains(sig))
        || MEDIA_MARKERS.iter().any(|m| content.contains(m));

    if structured {
        Dialect::StructuredMarkup
    } else {
        Dialect::LegacyMarkdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_editor_markup() {
        assert_eq!(
            classify("<div contenteditable=\"false\">x</div>"),
            Dialect::StructuredMarkup
        );
        assert_eq!(classify("<strong>bold</strong>"), Dialect::StructuredMarkup);
        assert_eq!(classify("plain style=\"x\" text"), Dialect::StructuredMarkup);
    }

    #[test]
    fn test_classify_legacy_markdown() {
        assert_eq!(classify("**bold** and *italic*"), Dialect::LegacyMarkdown);
        assert_eq!(classify(""), Dialect::LegacyMarkdown);
        assert_eq!(classify("just some text"), Dialect::LegacyMarkdown);
    }

    #[test]
    fn test_classify_media_markers() {
        // Finalized legacy records denote media with bare emoji markers.
        assert_eq!(classify("🎬 demo.mp4"), Dialect::StructuredMarkup);
        assert_eq!(classify("🖼️ photo"), Dialect::StructuredMarkup);
        assert_eq!(classify("📎 notes.pdf"), Dialect::StructuredMarkup);
    }

    #[test]
    fn test_p_and_br_require_closed_bracket() {
        // "<p" alone is not a signature; "<p>" is.
        assert_eq!(classify("a <p incomplete"), Dialect::LegacyMarkdown);
        assert_eq!(classify("a <p>para</p>"), Dialect::StructuredMarkup);
    }
}
