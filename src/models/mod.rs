//! Data models and types for the application.
//!
//! - [`ModalMedia`] - transient state of the expand/collapse overlay
//! - [`UploadStats`] - upload security telemetry shown in the editor

use serde::Deserialize;

/// Media currently shown in the modal overlay.
///
/// Owned by the display surface, never persisted: it is re-derived from
/// the rendered content on every interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalMedia {
    /// Source URL of the expanded media.
    pub src: String,
    /// Display label (alt text or file name).
    pub alt: String,
    /// Whether the media is a video (enables the download affordance).
    pub is_video: bool,
}

/// Upload security statistics (best-effort telemetry).
#[derive(Debug, Clone, Deserialize)]
pub struct UploadStats {
    /// Files that passed verification.
    #[serde(rename = "safeFiles")]
    pub safe_files: u64,
    /// Quarantine counters.
    pub quarantined: QuarantineStats,
}

/// Quarantined-file counters.
#[derive(Debug, Clone, Deserialize)]
pub struct QuarantineStats {
    pub total: u64,
    pub recent: u64,
}

/// Envelope of the upload-stats endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadStatsResponse {
    pub success: bool,
    #[serde(default)]
    pub stats: Option<UploadStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_stats_envelope_parses() {
        let body = r#"{"success": true, "stats": {"safeFiles": 7, "quarantined": {"total": 1, "recent": 0}}}"#;
        let parsed: UploadStatsResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.stats.unwrap().safe_files, 7);
    }

    #[test]
    fn test_upload_stats_envelope_without_stats() {
        let parsed: UploadStatsResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(parsed.stats.is_none());
    }
}
