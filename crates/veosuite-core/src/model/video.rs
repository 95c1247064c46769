use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, require_nonempty, Record};
use crate::errors::{Result, SuiteError};

/// Generation state of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    /// Generation requested, result not yet available
    Pending,
    /// Generation finished, `video_url` points at the result
    Completed,
    /// Generation failed
    Failed,
}

impl std::fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VideoStatus::Pending => "pending",
            VideoStatus::Completed => "completed",
            VideoStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for VideoStatus {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(VideoStatus::Pending),
            "completed" => Ok(VideoStatus::Completed),
            "failed" => Ok(VideoStatus::Failed),
            other => Err(SuiteError::validation(
                "status",
                format!("unknown status '{}' (pending|completed|failed)", other),
            )),
        }
    }
}

/// A generated video
///
/// Videos enter the collection as `Pending` and are updated in place once the
/// generator reports a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedVideo {
    /// Unique identifier for this video (UUID v7)
    pub id: String,

    /// The prompt the video was generated from
    pub prompt: String,

    /// Current generation state
    pub status: VideoStatus,

    /// URL of the generated video, set once status is `Completed`
    pub video_url: Option<String>,

    /// Timestamp when this video was created
    pub created_at: DateTime<Utc>,
}

/// Partial update for a GeneratedVideo; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedVideoPatch {
    pub prompt: Option<String>,
    pub status: Option<VideoStatus>,
    pub video_url: Option<Option<String>>,
}

impl GeneratedVideo {
    /// Create a new Pending video with a generated ID and current timestamp
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            prompt: prompt.into(),
            status: VideoStatus::Pending,
            video_url: None,
            created_at: Utc::now(),
        }
    }
}

impl Record for GeneratedVideo {
    type Patch = GeneratedVideoPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, patch: GeneratedVideoPatch) {
        if let Some(prompt) = patch.prompt {
            self.prompt = prompt;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(video_url) = patch.video_url {
            self.video_url = video_url;
        }
    }

    fn validate(&self) -> Result<()> {
        require_nonempty("prompt", &self.prompt)
    }
}
