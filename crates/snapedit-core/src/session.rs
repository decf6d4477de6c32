//! The edit session: one photo's original and currently edited form.
//!
//! ## States
//!
//! ```text
//!            load                 apply_filter / crop
//!  Empty ──────────▶ Loaded ─────────────────────────▶ Edited
//!                      ▲                                  │
//!                      └────────────── reset ─────────────┘
//! ```
//!
//! `load` is accepted from every state and discards whatever was there.
//! Operations always read and replace the single `current` slot; there is no
//! undo stack, only reset to the loaded original.
//!
//! ## Atomicity
//!
//! Every operation either fully applies or leaves the session untouched. The
//! transform runs against a borrowed copy of `current` and the slot is only
//! replaced after it succeeds.
//!
//! ## Off-thread transforms
//!
//! The session itself is not shared. To run a transform elsewhere, call
//! [`EditSession::prepare_filter`] or [`EditSession::prepare_crop`], send the
//! resulting [`PreparedEdit`] to a worker, and hand the [`CompletedEdit`] back
//! to [`EditSession::commit`]. Dropping a completed edit instead of committing
//! it is how a caller abandons it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::encode::{encode, ExportPayload, ExportTarget};
use crate::filter::{self, FilterDescriptor};
use crate::transform::{self, CropSpec};
use crate::{Bitmap, EditError};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// No image loaded yet.
    Empty,
    /// Image loaded, current equals original.
    Loaded,
    /// At least one operation applied since the last load or reset.
    Edited,
}

#[derive(Debug, Clone)]
struct Slots {
    original: Arc<Bitmap>,
    current: Arc<Bitmap>,
    edited: bool,
}

/// Holds the loaded photo and the result of every edit applied to it.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    slots: Option<Slots>,
    /// Bumped on every change to `current`; used to reject stale background edits.
    generation: u64,
}

impl EditSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        match &self.slots {
            None => SessionState::Empty,
            Some(slots) if slots.edited => SessionState::Edited,
            Some(_) => SessionState::Loaded,
        }
    }

    /// True once an image has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.slots.is_some()
    }

    /// Load a new photo, discarding any previous original and edits.
    ///
    /// # Errors
    ///
    /// Returns `EditError::EmptyImage` if either dimension is zero. The
    /// session is unchanged in that case.
    pub fn load(&mut self, image: Bitmap) -> Result<(), EditError> {
        if image.is_empty() {
            tracing::debug!(
                width = image.width(),
                height = image.height(),
                "rejected empty image"
            );
            return Err(EditError::EmptyImage);
        }

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            previous = ?self.state(),
            "loading image"
        );

        let original = Arc::new(image);
        self.slots = Some(Slots {
            current: Arc::clone(&original),
            original,
            edited: false,
        });
        self.generation += 1;
        Ok(())
    }

    /// Apply the catalog filter `id` to the current image.
    ///
    /// # Errors
    ///
    /// - `EditError::NoImageLoaded` before `load`
    /// - `EditError::UnknownFilter` if `id` is not in the catalog
    /// - `EditError::FilterApplicationFailed` if the kernel fails
    pub fn apply_filter(&mut self, id: &str) -> Result<(), EditError> {
        let completed = self.prepare_filter(id)?.run()?;
        self.commit(completed)
    }

    /// Crop and rotate the current image.
    ///
    /// # Errors
    ///
    /// - `EditError::NoImageLoaded` before `load`
    /// - `EditError::InvalidCropRegion` / `EditError::InvalidRotation` for a bad crop
    pub fn crop(&mut self, spec: &CropSpec) -> Result<(), EditError> {
        let completed = self.prepare_crop(spec)?.run()?;
        self.commit(completed)
    }

    /// Restore the loaded original. A no-op when nothing has been edited.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NoImageLoaded` before `load`.
    pub fn reset(&mut self) -> Result<(), EditError> {
        let slots = self.slots.as_mut().ok_or(EditError::NoImageLoaded)?;
        if !slots.edited {
            return Ok(());
        }

        slots.current = Arc::clone(&slots.original);
        slots.edited = false;
        self.generation += 1;
        tracing::debug!("session reset to original");
        Ok(())
    }

    /// The image to show the user.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NoImageLoaded` before `load`.
    pub fn current_preview(&self) -> Result<&Bitmap, EditError> {
        self.slots
            .as_ref()
            .map(|s| s.current.as_ref())
            .ok_or(EditError::NoImageLoaded)
    }

    /// A shared handle to the current image, for handing to another thread.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NoImageLoaded` before `load`.
    pub fn current_shared(&self) -> Result<Arc<Bitmap>, EditError> {
        self.slots
            .as_ref()
            .map(|s| Arc::clone(&s.current))
            .ok_or(EditError::NoImageLoaded)
    }

    /// The photo as it was loaded.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NoImageLoaded` before `load`.
    pub fn original(&self) -> Result<&Bitmap, EditError> {
        self.slots
            .as_ref()
            .map(|s| s.original.as_ref())
            .ok_or(EditError::NoImageLoaded)
    }

    /// Encode the current image for export.
    ///
    /// # Errors
    ///
    /// `EditError::NoImageLoaded` before `load`, otherwise as [`encode`].
    pub fn export(&self, target: ExportTarget) -> Result<ExportPayload, EditError> {
        encode(self.current_preview()?, target)
    }

    /// Capture what is needed to run filter `id` away from the session.
    ///
    /// # Errors
    ///
    /// `EditError::NoImageLoaded` before `load`, `EditError::UnknownFilter`
    /// for an unregistered id.
    pub fn prepare_filter(&self, id: &str) -> Result<PreparedEdit, EditError> {
        let input = self.current_shared()?;
        let descriptor = filter::lookup(id).inspect_err(|e| {
            tracing::debug!(error = %e, "filter rejected");
        })?;
        Ok(PreparedEdit {
            input,
            generation: self.generation,
            operation: Operation::Filter(descriptor.clone()),
        })
    }

    /// Capture what is needed to run a crop away from the session.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NoImageLoaded` before `load`. The crop itself is
    /// validated when the edit runs.
    pub fn prepare_crop(&self, spec: &CropSpec) -> Result<PreparedEdit, EditError> {
        Ok(PreparedEdit {
            input: self.current_shared()?,
            generation: self.generation,
            operation: Operation::Crop(*spec),
        })
    }

    /// Install the result of a prepared edit as the new current image.
    ///
    /// # Errors
    ///
    /// - `EditError::NoImageLoaded` if the session has no image
    /// - `EditError::StaleEdit` if `load`, `reset` or another edit changed
    ///   the session after the edit was prepared, or if the edit was
    ///   prepared on a different session
    pub fn commit(&mut self, completed: CompletedEdit) -> Result<(), EditError> {
        let slots = self.slots.as_mut().ok_or(EditError::NoImageLoaded)?;
        // Generations are per session, so the input handle is what ties an
        // edit to this session's current image.
        if completed.generation != self.generation
            || !Arc::ptr_eq(&completed.input, &slots.current)
        {
            tracing::debug!(
                prepared = completed.generation,
                current = self.generation,
                "discarding stale edit"
            );
            return Err(EditError::StaleEdit);
        }

        tracing::debug!(
            operation = completed.label.as_str(),
            width = completed.output.width(),
            height = completed.output.height(),
            "edit applied"
        );

        slots.current = Arc::new(completed.output);
        slots.edited = true;
        self.generation += 1;
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Operation {
    Filter(FilterDescriptor),
    Crop(CropSpec),
}

/// A transform captured from a session, ready to run on any thread.
#[derive(Debug, Clone)]
pub struct PreparedEdit {
    input: Arc<Bitmap>,
    generation: u64,
    operation: Operation,
}

impl PreparedEdit {
    /// Run the transform. Pure: touches nothing but its own input.
    ///
    /// # Errors
    ///
    /// Whatever the filter engine or crop adapter returns.
    pub fn run(self) -> Result<CompletedEdit, EditError> {
        let (output, label) = match &self.operation {
            Operation::Filter(descriptor) => (
                filter::apply_filter(&self.input, descriptor),
                format!("filter:{}", descriptor.id()),
            ),
            Operation::Crop(spec) => (
                transform::apply_crop(&self.input, spec),
                format!("crop:{}deg", spec.rotation_degrees),
            ),
        };

        let output = output.inspect_err(|e| {
            tracing::debug!(operation = label.as_str(), error = %e, "edit failed");
        })?;

        Ok(CompletedEdit {
            output,
            input: self.input,
            generation: self.generation,
            label,
        })
    }
}

/// The output of a [`PreparedEdit`], waiting to be committed.
#[derive(Debug, Clone)]
pub struct CompletedEdit {
    output: Bitmap,
    /// The image the edit was computed from.
    input: Arc<Bitmap>,
    generation: u64,
    label: String,
}

impl CompletedEdit {
    /// Look at the result before deciding whether to commit it.
    pub fn output(&self) -> &Bitmap {
        &self.output
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
