//! Media classification and edit-time container markup.
//!
//! When the upload collaborator reports a completed upload, the editor
//! turns the descriptor into the media-container markup for the file's
//! kind: image/gif into an image container, video into a video-preview
//! container, audio into an audio block with a download affordance, and
//! anything else into a generic file-link row.
//!
//! Containers are emitted in their edit-time form: non-editable blocks
//! that store the interaction *capability* (classes and data
//! attributes) which the display rewriter later activates. In edit mode
//! media gains no interaction attributes at all, so clicking media
//! while editing never opens the display modal.

use serde::Deserialize;

// =============================================================================
// Classification
// =============================================================================

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "avi", "mkv"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "m4a", "aac", "flac"];

/// Kind of an uploaded file, derived from its original name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Gif,
    Video,
    Audio,
    /// Anything that is not displayable media.
    File,
}

impl MediaKind {
    /// Classify a file by the extension of its original name.
    pub fn from_name(name: &str) -> Self {
        let ext = name.rsplit('.').next().unwrap_or_default().to_lowercase();
        if ext == "gif" {
            Self::Gif
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Self::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Self::Video
        } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            Self::Audio
        } else {
            Self::File
        }
    }
}

/// Completed-upload descriptor supplied by the upload collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    /// Public URL of the stored file.
    pub url: String,
    /// File name as chosen by the user.
    #[serde(rename = "originalName")]
    pub original_name: String,
    /// Byte size, when the collaborator reports one.
    #[serde(default)]
    pub size: Option<u64>,
}

impl UploadedFile {
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_name(&self.original_name)
    }
}

/// Human-readable file size: `0 Bytes`, `1 KB`, `1.5 MB`, ...
///
/// Two decimals with trailing zeros trimmed, matching how sizes were
/// historically rendered in saved content.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = (bytes.ilog(1024) as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    // Trim "x.00" to "x" and "x.50" to "x.5".
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", text, UNITS[exponent])
}

// =============================================================================
// Container Builders
// =============================================================================

/// Build the media-container markup for a completed upload.
pub fn container_for(file: &UploadedFile, edit_mode: bool) -> String {
    match file.kind() {
        MediaKind::Image | MediaKind::Gif => image_container(&file.url, &file.original_name),
        MediaKind::Video => video_container(&file.url, &file.original_name, edit_mode),
        MediaKind::Audio => audio_container(&file.url, &file.original_name, file.size),
        MediaKind::File => file_link_container(&file.url, &file.original_name, file.size),
    }
}

/// Non-editable centered image block, followed by an editable line so
/// the caret always has somewhere to land after insertion.
pub fn image_container(src: &str, alt: &str) -> String {
    format!(
        concat!(
            r#"<div contenteditable="false" style="margin: 16px 0; text-align: center; "#,
            r#"user-select: none; clear: both;">"#,
            r#"<img src="{src}" alt="{alt}" style="max-width: 260px !important; width: 260px; "#,
            r#"height: auto; border-radius: 12px; border: 1px solid #e5e7eb; "#,
            r#"box-shadow: 0 2px 8px rgba(0,0,0,0.1); display: block; margin: 0 auto;" />"#,
            r#"</div><div><br></div>"#,
        ),
        src = src,
        alt = alt,
    )
}

/// Non-editable video-preview container. In edit mode the container is
/// flagged and carries no interaction attributes; in display mode it
/// stores the capability the rewriter and bridge activate.
pub fn video_container(src: &str, name: &str, edit_mode: bool) -> String {
    let interaction = if edit_mode {
        r#"data-edit-mode="true""#.to_string()
    } else {
        format!(
            concat!(
                r#"data-video-src="{src}" data-media-label="{name}" "#,
                r#"data-media-video="true""#,
            ),
            src = src,
            name = name,
        )
    };
    let cursor = if edit_mode { "default" } else { "pointer" };
    format!(
        concat!(
            r#"<div class="video-preview" contenteditable="false" {interaction} "#,
            r#"style="margin: 16px 0; text-align: center; user-select: none; clear: both;">"#,
            r#"<video controls style="max-width: 325px; height: auto; border-radius: 8px; "#,
            r#"border: 1px solid #e5e7eb; box-shadow: 0 2px 8px rgba(0,0,0,0.1); "#,
            r#"display: block; margin: 0 auto; cursor: {cursor};">"#,
            r#"<source src="{src}" type="video/mp4">"#,
            r#"<source src="{src}" type="video/webm">"#,
            r#"<source src="{src}" type="video/mov">"#,
            "Seu navegador não suporta vídeo HTML5.</video></div>",
        ),
        interaction = interaction,
        cursor = cursor,
        src = src,
    )
}

/// Bordered audio block with name, formatted size and a download
/// affordance the bridge binds at display time.
pub fn audio_container(src: &str, name: &str, size: Option<u64>) -> String {
    let size_text = size_suffix(size);
    format!(
        concat!(
            r#"<div contenteditable="false" style="margin: 16px 0; padding: 12px; "#,
            r#"border: 1px solid #e5e7eb; border-radius: 8px; background: white; "#,
            r#"max-width: 260px; margin-left: auto; margin-right: auto; "#,
            r#"box-shadow: 0 1px 3px rgba(0,0,0,0.1); user-select: none; clear: both;">"#,
            r#"<audio controls style="width: 100%; height: 32px; margin-bottom: 8px;">"#,
            r#"<source src="{src}" type="audio/mpeg">"#,
            r#"<source src="{src}" type="audio/wav">"#,
            r#"<source src="{src}" type="audio/ogg">"#,
            "Seu navegador não suporta áudio HTML5.</audio>",
            r#"<div style="display: flex; justify-content: space-between; align-items: center;">"#,
            r#"<span style="font-size: 13px; color: #374151; font-weight: 500;">{name}{size_text}</span>"#,
            r#"{button}</div></div>"#,
        ),
        src = src,
        name = name,
        size_text = size_text,
        button = download_button(src, name, "Download do áudio"),
    )
}

/// Generic file-link row for anything that is not displayable media.
pub fn file_link_container(url: &str, name: &str, size: Option<u64>) -> String {
    let size_text = size_suffix(size);
    format!(
        concat!(
            r#"<div contenteditable="false" style="margin: 16px 0; padding: 12px; "#,
            r#"border: 1px solid #e5e7eb; border-radius: 8px; background: white; "#,
            r#"box-shadow: 0 1px 3px rgba(0,0,0,0.1); user-select: none; clear: both;">"#,
            r#"<div style="display: flex; align-items: center; justify-content: space-between;">"#,
            r#"<div style="display: flex; align-items: center; gap: 8px;">"#,
            r#"<span style="font-size: 14px; color: #6b7280;">📎</span>"#,
            r#"<span style="font-size: 14px; color: #374151; font-weight: 500;">{name}{size_text}</span>"#,
            r#"</div>{button}</div></div>"#,
        ),
        name = name,
        size_text = size_text,
        button = download_button(url, name, "Download do arquivo"),
    )
}

fn size_suffix(size: Option<u64>) -> String {
    size.map(|s| format!(" ({})", format_file_size(s)))
        .unwrap_or_default()
}

fn download_button(url: &str, name: &str, title: &str) -> String {
    format!(
        concat!(
            r#"<button data-download-url="{url}" data-download-name="{name}" "#,
            r#"style="background: #3b82f6; color: white; border: none; padding: 6px 12px; "#,
            r#"border-radius: 4px; font-size: 11px; cursor: pointer; "#,
            r#"transition: background 0.2s;" title="{title}">Download</button>"#,
        ),
        url = url,
        name = name,
        title = title,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name() {
        assert_eq!(MediaKind::from_name("a.PNG"), MediaKind::Image);
        assert_eq!(MediaKind::from_name("b.gif"), MediaKind::Gif);
        assert_eq!(MediaKind::from_name("c.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_name("d.mp3"), MediaKind::Audio);
        assert_eq!(MediaKind::from_name("e.pdf"), MediaKind::File);
        assert_eq!(MediaKind::from_name("noextension"), MediaKind::File);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_upload_descriptor_parses() {
        let file: UploadedFile = serde_json::from_str(
            r#"{"url": "http://x/clip.mp4", "originalName": "clip.mp4", "size": 2048}"#,
        )
        .unwrap();
        assert_eq!(file.kind(), MediaKind::Video);
        assert_eq!(file.size, Some(2048));
    }

    #[test]
    fn test_video_container_edit_mode_has_no_interaction() {
        let markup = video_container("http://x/v.mp4", "v.mp4", true);
        assert!(markup.contains(r#"data-edit-mode="true""#));
        assert!(!markup.contains("data-media-video"));
        assert!(markup.contains("cursor: default;"));
    }

    #[test]
    fn test_video_container_display_mode_stores_capability() {
        let markup = video_container("http://x/v.mp4", "v.mp4", false);
        assert!(markup.starts_with(r#"<div class="video-preview""#));
        assert!(markup.contains(r#"data-video-src="http://x/v.mp4""#));
        assert!(markup.contains("cursor: pointer;"));
        assert!(!markup.contains("data-edit-mode"));
    }

    #[test]
    fn test_container_dispatch() {
        let gif = UploadedFile {
            url: "http://x/f.gif".into(),
            original_name: "f.gif".into(),
            size: None,
        };
        assert!(container_for(&gif, true).contains("<img"));

        let doc = UploadedFile {
            url: "http://x/d.zip".into(),
            original_name: "d.zip".into(),
            size: Some(1024),
        };
        let markup = container_for(&doc, true);
        assert!(markup.contains("📎"));
        assert!(markup.contains("d.zip (1 KB)"));
        assert!(markup.contains(r#"data-download-url="http://x/d.zip""#));
    }

    #[test]
    fn test_audio_container_has_download_affordance() {
        let markup = audio_container("http://x/s.mp3", "s.mp3", Some(3 * 1024 * 1024));
        assert!(markup.contains("<audio controls"));
        assert!(markup.contains("s.mp3 (3 MB)"));
        assert!(markup.contains(r#"data-download-name="s.mp3""#));
        assert!(markup.contains("Seu navegador não suporta áudio HTML5."));
    }
}
