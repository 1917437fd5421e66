//! Display-time rewriting of structured markup.
//!
//! The editor stores media in its edit-time form: plain images and
//! `video-preview` containers with no interactivity. At display time
//! every media element is re-emitted with display sizing, a hover
//! affordance and the interaction attributes the media bridge binds
//! against. Text-flow markup passes through unmodified.
//!
//! Rewriting is idempotent: elements already carrying interaction
//! attributes (or the preview-ready marker) are skipped, so feeding
//! display output back through the rewriter changes nothing.

use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};

// =============================================================================
// Patterns
// =============================================================================

static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<img\s[^>]*>").unwrap());

static SRC_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"src="([^"]*)""#).unwrap());

static ALT_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"alt="([^"]*)""#).unwrap());

static DATA_VIDEO_SRC_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-video-src="([^"]*)""#).unwrap());

/// Opening tag of an edit-time (or already rewritten) video preview.
static VIDEO_PREVIEW_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<div class="video-preview[^"]*"[^>]*>"#).unwrap());

/// Marker attribute emitted on rewritten previews.
const PREVIEW_READY_MARKER: &str = "data-media-ready";

// =============================================================================
// Rewriter
// =============================================================================

/// Rewrite structured markup from its edit-time form into its
/// display-time form. Safe to apply to already rewritten markup.
pub fn rewrite_for_display(content: &str) -> String {
    let rewritten = rewrite_images(content);
    rewrite_video_previews(&rewritten)
}

/// Re-emit every image with display sizing and interaction attributes.
///
/// Images that already carry `data-media-src` (rewritten previously, or
/// produced by the markdown compiler) are left untouched. Images
/// without a `src` attribute are passed through.
fn rewrite_images(content: &str) -> String {
    IMG_TAG
        .replace_all(content, |caps: &regex::Captures<'_>| {
            let tag = &caps[0];
            if tag.contains("data-media-src") {
                return tag.to_string();
            }
            let Some(src) = SRC_ATTR.captures(tag).map(|c| c[1].to_string()) else {
                return tag.to_string();
            };
            let alt = ALT_ATTR
                .captures(tag)
                .map(|c| c[1].to_string())
                .unwrap_or_default();
            display_image_markup(&src, &alt)
        })
        .into_owned()
}

fn display_image_markup(src: &str, alt: &str) -> String {
    format!(
        concat!(
            r#"<img src="{src}" alt="{alt}" class="media-trigger media-zoom" "#,
            r#"data-media-src="{src}" data-media-label="{alt}" data-media-video="false" "#,
            r#"loading="lazy" style="max-width: 120px; width: 120px; height: auto; "#,
            r#"border-radius: 8px; border: 1px solid #e5e7eb; cursor: pointer; "#,
            r#"transition: all 0.2s ease; box-shadow: 0 2px 8px rgba(0,0,0,0.1); "#,
            r#"margin: 0 4px 4px 0; display: inline-block; vertical-align: top;" />"#,
        ),
        src = src,
        alt = alt,
    )
}

/// Convert every edit-time video preview into a clickable thumbnail.
///
/// The element extent is found with a small open/close tag scan instead
/// of a non-greedy match so nested divs inside the preview are handled.
/// Previews already carrying the ready marker are copied verbatim.
fn rewrite_video_previews(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    let mut occurrence = 0usize;

    while let Some(m) = VIDEO_PREVIEW_OPEN.find(&content[cursor..]) {
        let open_start = cursor + m.start();
        let open_end = cursor + m.end();
        out.push_str(&content[cursor..open_start]);

        let Some(element_end) = find_div_end(content, open_end) else {
            // Unterminated element: emit the rest verbatim.
            out.push_str(&content[open_start..]);
            return out;
        };

        let open_tag = &content[open_start..open_end];
        let element = &content[open_start..element_end];

        if open_tag.contains(PREVIEW_READY_MARKER) {
            out.push_str(element);
        } else if let Some(src) = preview_source(open_tag, element) {
            out.push_str(&preview_thumbnail_markup(&src, occurrence));
            occurrence += 1;
        } else {
            // No resolvable source: leave the element as authored.
            out.push_str(element);
        }

        cursor = element_end;
    }

    out.push_str(&content[cursor..]);
    out
}

/// Walk forward from just past an opening `<div ...>` tag to the byte
/// offset past its matching `</div>`.
fn find_div_end(content: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut pos = from;
    while depth > 0 {
        let close = content[pos..].find("</div>")?;
        match content[pos..].find("<div") {
            Some(open) if open < close => {
                depth += 1;
                pos += open + 4;
            }
            _ => {
                depth -= 1;
                pos += close + 6;
            }
        }
    }
    Some(pos)
}

/// Resolve the preview's source, preferring the explicit data attribute
/// on the container over the nested video element's own source.
fn preview_source(open_tag: &str, element: &str) -> Option<String> {
    if let Some(caps) = DATA_VIDEO_SRC_ATTR.captures(open_tag) {
        return Some(caps[1].to_string());
    }
    SRC_ATTR.captures(element).map(|c| c[1].to_string())
}

/// Stable identifier for a rewritten preview, derived from the source
/// and its occurrence index so repeated rewrites agree.
fn preview_id(src: &str, occurrence: usize) -> String {
    let digest = Sha256::digest(format!("{src}#{occurrence}"));
    format!("video_{}", &hex::encode(digest)[..9])
}

fn preview_thumbnail_markup(src: &str, occurrence: usize) -> String {
    let id = preview_id(src, occurrence);
    format!(
        concat!(
            r#"<div class="video-preview media-zoom" id="{id}" data-media-ready="true" "#,
            r#"data-video-src="{src}" style="position: relative; max-width: 240px; width: 240px; "#,
            r#"height: 180px; border-radius: 8px; border: 1px solid #e5e7eb; "#,
            r#"box-shadow: 0 2px 8px rgba(0,0,0,0.1); margin: 0 4px 4px 0; display: inline-block; "#,
            r#"vertical-align: top; background: #000; cursor: pointer; overflow: hidden; "#,
            r#"transition: all 0.2s ease;">"#,
            r#"<video style="width: 100%; height: 100%; object-fit: cover; pointer-events: none;" "#,
            r#"muted preload="metadata"><source src="{src}" type="video/mp4"></video>"#,
            r#"<div style="position: absolute; top: 0; left: 0; right: 0; bottom: 0; "#,
            r#"display: flex; align-items: center; justify-content: center; pointer-events: none;">"#,
            r#"<svg width="48" height="48" viewBox="0 0 24 24" "#,
            r#"style="filter: drop-shadow(0 4px 8px rgba(0,0,0,0.4));">"#,
            r#"<path d="M8 5v14l11-7z" fill="rgba(255,255,255,0.9)"/></svg></div></div>"#,
        ),
        id = id,
        src = src,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_gains_interaction_attributes() {
        let input = r#"<p>pic</p><img src="http://x/a.png" alt="a photo">"#;
        let out = rewrite_for_display(input);
        assert!(out.contains(r#"data-media-src="http://x/a.png""#));
        assert!(out.contains(r#"data-media-label="a photo""#));
        assert!(out.contains(r#"data-media-video="false""#));
        assert!(out.contains(r#"loading="lazy""#));
        assert!(out.contains("width: 120px"));
        // Text flow untouched.
        assert!(out.starts_with("<p>pic</p>"));
    }

    #[test]
    fn test_image_without_alt() {
        let out = rewrite_for_display(r#"<img src="http://x/a.png">"#);
        assert!(out.contains(r#"alt="""#));
        assert!(out.contains(r#"data-media-label="""#));
    }

    #[test]
    fn test_image_rewrite_is_idempotent() {
        let once = rewrite_for_display(r#"<img src="http://x/a.png" alt="a">"#);
        let twice = rewrite_for_display(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_video_preview_becomes_thumbnail() {
        let input = concat!(
            r#"<div class="video-preview" data-edit-mode="false">"#,
            r#"<video controls><source src="http://x/v.mp4" type="video/mp4"></video></div>"#,
        );
        let out = rewrite_for_display(input);
        assert!(out.contains(r#"data-video-src="http://x/v.mp4""#));
        assert!(out.contains(r#"id="video_"#));
        assert!(out.contains(r#"data-media-ready="true""#));
        assert!(out.contains("pointer-events: none;"));
        assert!(out.contains(r#"<path d="M8 5v14l11-7z""#));
    }

    #[test]
    fn test_preview_prefers_data_attribute_source() {
        let input = concat!(
            r#"<div class="video-preview" data-video-src="http://x/real.mp4">"#,
            r#"<video><source src="http://x/stale.mp4"></video></div>"#,
        );
        let out = rewrite_for_display(input);
        assert!(out.contains(r#"data-video-src="http://x/real.mp4""#));
        assert!(out.contains(r#"<source src="http://x/real.mp4""#));
    }

    #[test]
    fn test_preview_rewrite_is_idempotent() {
        let input = concat!(
            r#"before <div class="video-preview" data-video-src="http://x/v.mp4">"#,
            r#"<video><source src="http://x/v.mp4"></video></div> after"#,
        );
        let once = rewrite_for_display(input);
        let twice = rewrite_for_display(&once);
        assert_eq!(once, twice);
        // Exactly one preview in the output.
        assert_eq!(once.matches("data-media-ready").count(), 1);
    }

    #[test]
    fn test_two_previews_get_distinct_ids() {
        let preview = concat!(
            r#"<div class="video-preview" data-video-src="http://x/v.mp4">"#,
            r#"<video><source src="http://x/v.mp4"></video></div>"#,
        );
        let out = rewrite_for_display(&format!("{preview}{preview}"));
        let ids: Vec<&str> = out.match_indices(r#"id="video_"#).map(|(_, s)| s).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(preview_id("http://x/v.mp4", 0), preview_id("http://x/v.mp4", 1));
    }

    #[test]
    fn test_sourceless_preview_passes_through() {
        let input = r#"<div class="video-preview"><span>pending upload</span></div>"#;
        assert_eq!(rewrite_for_display(input), input);
    }

    #[test]
    fn test_text_flow_passes_through() {
        let input = "<div><strong>hello</strong><br>world</div>";
        assert_eq!(rewrite_for_display(input), input);
    }
}
