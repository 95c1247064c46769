use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, require_nonempty, Record};
use crate::errors::Result;

/// A generated thumbnail image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Unique identifier for this image (UUID v7)
    pub id: String,

    /// The prompt the image was generated from
    pub prompt: String,

    /// Image content as a data URL (`data:image/...;base64,...`)
    pub data_url: String,

    /// Timestamp when this image was created
    pub created_at: DateTime<Utc>,
}

/// Partial update for a GeneratedImage; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedImagePatch {
    pub prompt: Option<String>,
    pub data_url: Option<String>,
}

impl GeneratedImage {
    /// Create a new GeneratedImage with a generated ID and current timestamp
    pub fn new(prompt: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            prompt: prompt.into(),
            data_url: data_url.into(),
            created_at: Utc::now(),
        }
    }
}

impl Record for GeneratedImage {
    type Patch = GeneratedImagePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, patch: GeneratedImagePatch) {
        if let Some(prompt) = patch.prompt {
            self.prompt = prompt;
        }
        if let Some(data_url) = patch.data_url {
            self.data_url = data_url;
        }
    }

    fn validate(&self) -> Result<()> {
        require_nonempty("prompt", &self.prompt)?;
        require_nonempty("data_url", &self.data_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image() {
        let image = GeneratedImage::new("thumbnail: lighthouse", "data:image/png;base64,AAAA");
        assert!(image.validate().is_ok());
    }

    #[test]
    fn test_missing_data_url_rejected() {
        let image = GeneratedImage::new("thumbnail: lighthouse", "");
        assert!(image.validate().is_err());
    }
}
