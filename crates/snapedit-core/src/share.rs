//! Share destinations and the export format each one wants.
//!
//! A destination only declares a preference. Anything without one receives
//! lossless output.

use serde::{Deserialize, Serialize};

use crate::config::ExportSettings;
use crate::encode::{ExportFormat, ExportTarget};

/// Where the user is sending the edited photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShareDestination {
    Facebook,
    Twitter,
    /// Any other share target, identified by the host's activity name.
    Other(String),
}

impl ShareDestination {
    /// Parse a host-supplied destination name. Unknown names map to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "facebook" => ShareDestination::Facebook,
            "twitter" => ShareDestination::Twitter,
            _ => ShareDestination::Other(name.to_string()),
        }
    }

    pub fn capability(&self) -> DestinationCapability {
        let preferred = match self {
            ShareDestination::Facebook => Some(ExportFormat::Jpeg),
            ShareDestination::Twitter => Some(ExportFormat::Png),
            ShareDestination::Other(_) => None,
        };
        DestinationCapability { preferred }
    }
}

/// What a destination declares about the imagery it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DestinationCapability {
    pub preferred: Option<ExportFormat>,
}

impl ExportTarget {
    /// Pick the export target for a destination.
    ///
    /// Compressed output only when the destination asks for JPEG, using the
    /// configured quality. Everything else gets `Lossless`.
    pub fn for_destination(capability: &DestinationCapability, settings: &ExportSettings) -> Self {
        match capability.preferred {
            Some(ExportFormat::Jpeg) => ExportTarget::Lossy {
                quality: settings.lossy_quality,
            },
            Some(ExportFormat::Png) | None => ExportTarget::Lossless,
        }
    }
}
