//! The fixed registry of named color filters.
//!
//! The catalog is built once on first access and never mutated afterwards, so
//! any number of threads may read it concurrently.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::EditError;

/// Pixel transform algorithm selected by a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernelName {
    /// Pass-through. Backs the "Original" entry.
    Identity,
    Sepia,
    Monochrome,
    /// The only spatially varying kernel: darkens radially from the center.
    Vignette,
    Chrome,
    Noir,
}

/// A catalog entry: filter id, kernel and the parameters handed to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterDescriptor {
    id: String,
    kernel: KernelName,
    parameters: BTreeMap<String, f32>,
}

impl FilterDescriptor {
    pub fn new(id: impl Into<String>, kernel: KernelName) -> Self {
        Self {
            id: id.into(),
            kernel,
            parameters: BTreeMap::new(),
        }
    }

    /// Return a copy of this descriptor with `name` set to `value`.
    #[must_use]
    pub fn with_parameter(mut self, name: &str, value: f32) -> Self {
        self.parameters.insert(name.to_string(), value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kernel(&self) -> KernelName {
        self.kernel
    }

    pub fn parameters(&self) -> &BTreeMap<String, f32> {
        &self.parameters
    }

    /// Look up a single parameter.
    pub fn parameter(&self, name: &str) -> Option<f32> {
        self.parameters.get(name).copied()
    }
}

/// Entry in the filter menu: what to show and what id to send back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterInfo {
    pub display_name: &'static str,
    pub id: &'static str,
}

/// Id of the pass-through entry.
pub const ORIGINAL: &str = "Original";

/// Published filter ids, in menu order.
pub const FILTER_IDS: [&str; 6] = [ORIGINAL, "Sepia", "Monochrome", "Vignette", "Chrome", "Noir"];

fn catalog() -> &'static [FilterDescriptor] {
    static CATALOG: OnceLock<Vec<FilterDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            FilterDescriptor::new(ORIGINAL, KernelName::Identity),
            FilterDescriptor::new("Sepia", KernelName::Sepia).with_parameter("intensity", 1.0),
            FilterDescriptor::new("Monochrome", KernelName::Monochrome)
                .with_parameter("intensity", 1.0)
                .with_parameter("tint_r", 0.5)
                .with_parameter("tint_g", 0.5)
                .with_parameter("tint_b", 0.5),
            FilterDescriptor::new("Vignette", KernelName::Vignette)
                .with_parameter("intensity", 2.0)
                .with_parameter("radius", 30.0),
            FilterDescriptor::new("Chrome", KernelName::Chrome)
                .with_parameter("contrast", 15.0)
                .with_parameter("saturation", 25.0),
            FilterDescriptor::new("Noir", KernelName::Noir).with_parameter("contrast", 35.0),
        ]
    })
}

/// Find a filter by id. Matching is exact and case-sensitive.
///
/// # Errors
///
/// Returns `EditError::UnknownFilter` when `id` is not registered.
pub fn lookup(id: &str) -> Result<&'static FilterDescriptor, EditError> {
    catalog()
        .iter()
        .find(|d| d.id == id)
        .ok_or_else(|| EditError::UnknownFilter(id.to_string()))
}

/// All filters in fixed menu order.
pub fn list_available_filters() -> Vec<FilterInfo> {
    FILTER_IDS
        .iter()
        .map(|&id| FilterInfo {
            display_name: id,
            id,
        })
        .collect()
}
