//! Domain models - the six record kinds managed by the suite
//!
//! Every kind follows the same shape: a struct with a stable unique `id`, a
//! serde-serializable payload, and a companion all-`Option` patch type giving
//! shallow-merge update semantics.

mod cookie;
mod image;
mod prompt;
mod script;
mod story;
mod video;

pub use cookie::{UserCookie, UserCookiePatch};
pub use image::{GeneratedImage, GeneratedImagePatch};
pub use prompt::{VideoPrompt, VideoPromptPatch};
pub use script::{YouTubeScript, YouTubeScriptPatch};
pub use story::{Story, StoryPatch};
pub use video::{GeneratedVideo, GeneratedVideoPatch, VideoStatus};

use crate::errors::Result;

/// A uniquely identified data item within a collection
///
/// The collection store is generic over this trait: it only needs the stable
/// identifier, the shallow-merge patch semantics, and the input preconditions.
pub trait Record: Clone {
    /// Partial-update type: every field optional, absent fields left untouched
    type Patch;

    /// Stable unique identifier within the collection
    fn id(&self) -> &str;

    /// Shallow-merge `patch` into this record (field overwrite, not replacement)
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Check input preconditions before the record enters a collection
    ///
    /// # Errors
    ///
    /// Returns `Validation` if a required field is empty or whitespace-only.
    fn validate(&self) -> Result<()>;
}

/// Reject a required text field that is empty or whitespace-only
pub(crate) fn require_nonempty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(crate::errors::SuiteError::validation(
            field,
            "cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Generate a fresh record identifier (UUID v7, time-ordered)
pub(crate) fn new_record_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
