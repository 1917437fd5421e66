//! Legacy markdown compiler.
//!
//! Older records store plain text with a small inline-token subset:
//! `**bold**`, `*italic*`, `` `code` ``, fenced code blocks, image
//! syntax `![alt](url)` and the custom video-link syntax
//! `[Vídeo: name](url)`. This module compiles that subset into the
//! structured markup dialect with ordered, non-backtracking
//! substitution passes.
//!
//! Pass order matters: italic must run after bold so `**` is not
//! consumed as two single `*`, and later passes never re-match text
//! produced by earlier ones. Unmatched micro-syntax (a stray `**`)
//! stays as literal text.

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Token Patterns
// =============================================================================

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

static VIDEO_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[Vídeo: (.*?)\]\((.*?)\)").unwrap());

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

// =============================================================================
// Replacement Markup
// =============================================================================

/// Centered media container for `![alt](url)`: fixed 260px display
/// width, rounded border, interaction attributes for the bridge, and a
/// caption line with the alt text.
const IMAGE_MARKUP: &str = concat!(
    r#"<div style="margin: 16px 0; text-align: center;">"#,
    r#"<img src="${2}" alt="${1}" class="media-trigger media-zoom" "#,
    r#"data-media-src="${2}" data-media-label="${1}" data-media-video="false" loading="lazy" "#,
    r#"style="max-width: 260px; width: 260px; height: auto; border-radius: 16px; "#,
    r#"border: 2px solid #e5e7eb; cursor: pointer; transition: all 0.2s ease; "#,
    r#"box-shadow: 0 4px 12px rgba(0,0,0,0.15);" />"#,
    r#"<p style="font-size: 14px; color: #6b7280; margin-top: 8px; text-align: center;">${1}</p>"#,
    r#"</div>"#,
);

/// Bordered container for `[Vídeo: name](url)`: native video control
/// wired to the bridge, icon caption with the name.
const VIDEO_MARKUP: &str = concat!(
    r#"<div style="margin: 16px 0; text-align: center;">"#,
    r#"<div style="position: relative; border-radius: 8px; overflow: hidden; "#,
    r#"border: 1px solid #e5e7eb; display: inline-block; max-width: 300px;">"#,
    r#"<video controls class="media-trigger" data-media-src="${2}" data-media-label="${1}" "#,
    r#"data-media-video="true" style="width: 100%; height: auto; cursor: pointer;" preload="metadata">"#,
    r#"<source src="${2}" type="video/mp4">"#,
    r#"<source src="${2}" type="video/webm">"#,
    r#"<source src="${2}" type="video/mov">"#,
    "Seu navegador não suporta vídeo HTML5.</video></div>",
    r#"<p style="font-size: 14px; color: #6b7280; margin-top: 8px; display: flex; "#,
    r#"align-items: center; gap: 4px; justify-content: center;">"#,
    r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor" style="color: #2563eb;">"#,
    r#"<path d="M17 10.5V7c0-.55-.45-1-1-1H4c-.55 0-1 .45-1 1v10c0 .55.45 1 1 1h12c.55 0 1-.45 1-1v-3.5l4 4v-11l-4 4z"/>"#,
    r#"</svg>${1}</p></div>"#,
);

/// Styled block for fenced code, preserving internal whitespace.
const CODE_BLOCK_MARKUP: &str = concat!(
    r#"<div style="margin: 16px 0; padding: 16px; background-color: #f3f4f6; "#,
    r#"border-radius: 8px; border: 1px solid #e5e7eb;">"#,
    r#"<code style="font-size: 14px; font-family: monospace; color: #374151; "#,
    r#"white-space: pre-wrap;">${1}</code></div>"#,
);

/// Styled inline span for single-backtick code.
const INLINE_CODE_MARKUP: &str = concat!(
    r#"<code style="padding: 2px 6px; background-color: #f3f4f6; color: #374151; "#,
    r#"border-radius: 4px; font-size: 14px; font-family: monospace;">${1}</code>"#,
);

// =============================================================================
// Compiler
// =============================================================================

/// Compile a legacy markdown blob into the structured markup dialect.
///
/// Apply only to content classified as legacy markdown. All
/// substitutions are global and run in a fixed order; content with no
/// tokens passes through unchanged except for the line-break pass.
pub fn compile_markdown(content: &str) -> String {
    let compiled = BOLD.replace_all(content, "<strong>${1}</strong>");
    let compiled = ITALIC.replace_all(&compiled, "<em>${1}</em>");
    let compiled = IMAGE.replace_all(&compiled, IMAGE_MARKUP);
    let compiled = VIDEO_LINK.replace_all(&compiled, VIDEO_MARKUP);
    let compiled = CODE_BLOCK.replace_all(&compiled, CODE_BLOCK_MARKUP);
    let compiled = INLINE_CODE.replace_all(&compiled, INLINE_CODE_MARKUP);
    compiled.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Dialect, classify};

    #[test]
    fn test_bold_then_italic() {
        let out = compile_markdown("**hi** *there*");
        assert_eq!(out, "<strong>hi</strong> <em>there</em>");
        assert!(!out.contains('*'));
    }

    #[test]
    fn test_image_token() {
        let out = compile_markdown("![cat](http://x/cat.png)");
        assert!(out.contains(r#"<img src="http://x/cat.png" alt="cat""#));
        assert!(out.contains(r#"data-media-src="http://x/cat.png""#));
        assert!(out.contains(r#"data-media-label="cat""#));
        assert!(out.contains(r#"data-media-video="false""#));
        assert!(out.contains(r#"text-align: center;">cat</p>"#));
        assert!(out.contains("margin: 16px 0; text-align: center;"));
    }

    #[test]
    fn test_video_link_token() {
        let out = compile_markdown("[Vídeo: demo](http://x/demo.mp4)");
        assert!(out.contains(r#"<source src="http://x/demo.mp4" type="video/mp4">"#));
        assert!(out.contains(r#"data-media-src="http://x/demo.mp4""#));
        assert!(out.contains(r#"data-media-label="demo""#));
        assert!(out.contains(r#"data-media-video="true""#));
        assert!(out.contains("Seu navegador não suporta vídeo HTML5."));
    }

    #[test]
    fn test_code_block_spans_lines() {
        let out = compile_markdown("```let x = 1;\nlet y = 2;```");
        assert!(out.contains("white-space: pre-wrap;"));
        assert!(out.contains("let x = 1;<br>let y = 2;"));
        assert!(!out.contains("```"));
    }

    #[test]
    fn test_inline_code() {
        let out = compile_markdown("use `cargo build` here");
        assert!(out.contains(">cargo build</code>"));
        assert!(!out.contains('`'));
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(compile_markdown("a\nb\nc"), "a<br>b<br>c");
    }

    #[test]
    fn test_tokenless_content_only_gains_breaks() {
        assert_eq!(compile_markdown("hello world"), "hello world");
    }

    #[test]
    fn test_unmatched_syntax_stays_literal() {
        // A lone asterisk is not an error, just literal text.
        assert_eq!(compile_markdown("a * b"), "a * b");
        assert_eq!(compile_markdown("2 ` 3"), "2 ` 3");
    }

    #[test]
    fn test_output_classifies_as_structured_markup() {
        let samples = [
            "**hi** *there*",
            "![cat](http://x/cat.png)",
            "[Vídeo: demo](http://x/demo.mp4)",
            "line\nbreaks",
            "`code`",
        ];
        for sample in samples {
            assert_eq!(classify(sample), Dialect::LegacyMarkdown);
            assert_eq!(classify(&compile_markdown(sample)), Dialect::StructuredMarkup);
        }
    }
}
