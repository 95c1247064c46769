use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, require_nonempty, Record};
use crate::errors::Result;

/// A YouTube narration script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YouTubeScript {
    /// Unique identifier for this script (UUID v7)
    pub id: String,

    /// Video title the script belongs to
    pub title: String,

    /// Full script text
    pub script: String,

    /// Timestamp when this script was created
    pub created_at: DateTime<Utc>,
}

/// Partial update for a YouTubeScript; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YouTubeScriptPatch {
    pub title: Option<String>,
    pub script: Option<String>,
}

impl YouTubeScript {
    /// Create a new YouTubeScript with a generated ID and current timestamp
    pub fn new(title: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            title: title.into(),
            script: script.into(),
            created_at: Utc::now(),
        }
    }
}

impl Record for YouTubeScript {
    type Patch = YouTubeScriptPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, patch: YouTubeScriptPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(script) = patch.script {
            self.script = script;
        }
    }

    fn validate(&self) -> Result<()> {
        require_nonempty("title", &self.title)?;
        require_nonempty("script", &self.script)?;
        Ok(())
    }
}
