//! SnapEdit Core - photo editing library
//!
//! This crate provides the editing core behind SnapEdit: a catalog of named
//! color filters, a crop/rotate adapter, the edit session that holds the
//! original and edited photo, and the export encoder used when sharing.
//!
//! Nothing here touches the UI or the platform share sheet. Hosts (see the
//! `snapedit-wasm` crate) drive an [`EditSession`] and hand exported bytes to
//! whatever destination the user picked.
//!
//! Diagnostics go through `tracing`. The library never installs a subscriber.

pub mod bitmap;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod filter;
pub mod session;
pub mod share;
pub mod transform;

pub use bitmap::Bitmap;
pub use config::{EditorConfig, ExportSettings};
pub use encode::{encode, ExportFormat, ExportPayload, ExportTarget};
pub use error::EditError;
pub use filter::{apply_filter, list_available_filters, FilterDescriptor, FilterInfo};
pub use session::{CompletedEdit, EditSession, PreparedEdit, SessionState};
pub use share::{DestinationCapability, ShareDestination};
pub use transform::{apply_crop, CropRect, CropSpec};
