use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, require_nonempty, Record};
use crate::errors::Result;

/// A generated story - the source material for prompts, thumbnails and scripts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identifier for this story (UUID v7)
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Full story text
    pub content: String,

    /// Timestamp when this story was created
    pub created_at: DateTime<Utc>,
}

/// Partial update for a Story; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Story {
    /// Create a new Story with a generated ID and current timestamp
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            title: title.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

impl Record for Story {
    type Patch = StoryPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, patch: StoryPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }

    fn validate(&self) -> Result<()> {
        require_nonempty("title", &self.title)?;
        require_nonempty("content", &self.content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_story() {
        let story = Story::new("The Lighthouse", "Once upon a time...");
        assert!(!story.id.is_empty());
        assert_eq!(story.title, "The Lighthouse");
        assert!(story.validate().is_ok());
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut story = Story::new("Title", "Content");
        let before = story.clone();
        story.apply_patch(StoryPatch::default());
        assert_eq!(story, before);
    }

    #[test]
    fn test_patch_overwrites_only_present_fields() {
        let mut story = Story::new("Title", "Content");
        story.apply_patch(StoryPatch {
            title: Some("Revised".to_string()),
            content: None,
        });
        assert_eq!(story.title, "Revised");
        assert_eq!(story.content, "Content");
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let mut story = Story::new("Title", "Content");
        story.title = "   ".to_string();
        assert!(story.validate().is_err());
    }
}
