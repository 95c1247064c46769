use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, require_nonempty, Record};
use crate::errors::Result;

/// A video-generation prompt, usually produced in a batch from one story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPrompt {
    /// Unique identifier for this prompt (UUID v7)
    pub id: String,

    /// ID of the story this prompt was derived from, if any
    ///
    /// Informational only - collections are siloed and no cross-collection
    /// integrity is enforced.
    pub story_id: Option<String>,

    /// The prompt text handed to the video generator
    pub prompt: String,

    /// Timestamp when this prompt was created
    pub created_at: DateTime<Utc>,
}

/// Partial update for a VideoPrompt; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoPromptPatch {
    pub prompt: Option<String>,
}

impl VideoPrompt {
    /// Create a new VideoPrompt with a generated ID and current timestamp
    pub fn new(prompt: impl Into<String>, story_id: Option<String>) -> Self {
        Self {
            id: new_record_id(),
            story_id,
            prompt: prompt.into(),
            created_at: Utc::now(),
        }
    }
}

impl Record for VideoPrompt {
    type Patch = VideoPromptPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, patch: VideoPromptPatch) {
        if let Some(prompt) = patch.prompt {
            self.prompt = prompt;
        }
    }

    fn validate(&self) -> Result<()> {
        require_nonempty("prompt", &self.prompt)
    }
}
