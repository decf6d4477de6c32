//! Editor configuration.
//!
//! Every field has a default, so a host may pass a partial object (or
//! nothing at all) and get a working configuration.

use serde::{Deserialize, Serialize};

/// Quality used when a destination asks for compressed imagery.
pub const DEFAULT_LOSSY_QUALITY: f32 = 0.8;

/// Title shown on the host's share sheet.
pub const DEFAULT_SHARE_TITLE: &str = "Photo editor";

/// Top-level editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub export: ExportSettings,
}

/// Settings that shape exports for share destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportSettings {
    /// Quality factor in `(0, 1]` for lossy exports.
    pub lossy_quality: f32,
    pub share_title: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            lossy_quality: DEFAULT_LOSSY_QUALITY,
            share_title: DEFAULT_SHARE_TITLE.to_string(),
        }
    }
}
