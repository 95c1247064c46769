//! Suite aggregate - the six collections behind the content-management UI
//!
//! One [`Suite`] owns six independently-keyed collections over one shared
//! persistence medium. Collections are siloed: no cross-collection referential
//! integrity is enforced or required.

use std::rc::Rc;

use crate::collection::Collection;
use crate::model::{
    GeneratedImage, GeneratedVideo, Story, UserCookie, VideoPrompt, YouTubeScript,
};
use crate::port::StoragePort;

/// Persistence key for the story collection
pub const STORIES_KEY: &str = "veo-suite-stories";
/// Persistence key for the video-prompt collection
pub const PROMPTS_KEY: &str = "veo-suite-prompts";
/// Persistence key for the thumbnail collection
pub const THUMBNAILS_KEY: &str = "veo-suite-thumbnails";
/// Persistence key for the generated-video collection
pub const VIDEOS_KEY: &str = "veo-suite-videos";
/// Persistence key for the YouTube-script collection
pub const YOUTUBE_SCRIPTS_KEY: &str = "veo-suite-youtube-scripts";
/// Persistence key for the cookie collection
pub const COOKIES_KEY: &str = "veo-suite-cookies";

/// The six collections, hydrated from one persistence medium
#[derive(Debug)]
pub struct Suite {
    stories: Collection<Story>,
    prompts: Collection<VideoPrompt>,
    thumbnails: Collection<GeneratedImage>,
    videos: Collection<GeneratedVideo>,
    youtube_scripts: Collection<YouTubeScript>,
    cookies: Collection<UserCookie>,
}

impl Suite {
    /// Hydrate all six collections from the given port
    ///
    /// Each collection loads under its own key with an empty default; corrupt
    /// or absent values degrade to empty collections without failing.
    pub fn load(port: Rc<dyn StoragePort>) -> Self {
        Self {
            stories: Collection::load(port.clone(), STORIES_KEY, Vec::new()),
            prompts: Collection::load(port.clone(), PROMPTS_KEY, Vec::new()),
            thumbnails: Collection::load(port.clone(), THUMBNAILS_KEY, Vec::new()),
            videos: Collection::load(port.clone(), VIDEOS_KEY, Vec::new()),
            youtube_scripts: Collection::load(port.clone(), YOUTUBE_SCRIPTS_KEY, Vec::new()),
            cookies: Collection::load(port, COOKIES_KEY, Vec::new()),
        }
    }

    /// Story collection
    pub fn stories(&self) -> &Collection<Story> {
        &self.stories
    }

    /// Story collection, mutable
    pub fn stories_mut(&mut self) -> &mut Collection<Story> {
        &mut self.stories
    }

    /// Video-prompt collection
    pub fn prompts(&self) -> &Collection<VideoPrompt> {
        &self.prompts
    }

    /// Video-prompt collection, mutable
    pub fn prompts_mut(&mut self) -> &mut Collection<VideoPrompt> {
        &mut self.prompts
    }

    /// Thumbnail collection
    pub fn thumbnails(&self) -> &Collection<GeneratedImage> {
        &self.thumbnails
    }

    /// Thumbnail collection, mutable
    pub fn thumbnails_mut(&mut self) -> &mut Collection<GeneratedImage> {
        &mut self.thumbnails
    }

    /// Generated-video collection
    pub fn videos(&self) -> &Collection<GeneratedVideo> {
        &self.videos
    }

    /// Generated-video collection, mutable
    pub fn videos_mut(&mut self) -> &mut Collection<GeneratedVideo> {
        &mut self.videos
    }

    /// YouTube-script collection
    pub fn youtube_scripts(&self) -> &Collection<YouTubeScript> {
        &self.youtube_scripts
    }

    /// YouTube-script collection, mutable
    pub fn youtube_scripts_mut(&mut self) -> &mut Collection<YouTubeScript> {
        &mut self.youtube_scripts
    }

    /// Cookie collection
    pub fn cookies(&self) -> &Collection<UserCookie> {
        &self.cookies
    }

    /// Cookie collection, mutable
    pub fn cookies_mut(&mut self) -> &mut Collection<UserCookie> {
        &mut self.cookies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StoryPatch, VideoStatus};
    use crate::port::MemoryStorage;

    #[test]
    fn test_fresh_suite_is_empty() {
        let suite = Suite::load(Rc::new(MemoryStorage::new()));
        assert!(suite.stories().is_empty());
        assert!(suite.prompts().is_empty());
        assert!(suite.thumbnails().is_empty());
        assert!(suite.videos().is_empty());
        assert!(suite.youtube_scripts().is_empty());
        assert!(suite.cookies().is_empty());
    }

    #[test]
    fn test_collections_are_siloed() {
        let storage = Rc::new(MemoryStorage::new());
        let mut suite = Suite::load(storage.clone());

        suite
            .stories_mut()
            .add(Story::new("Title", "Content"))
            .unwrap();

        assert!(storage.raw(STORIES_KEY).is_some());
        assert!(storage.raw(PROMPTS_KEY).is_none());
        assert!(storage.raw(COOKIES_KEY).is_none());
    }

    #[test]
    fn test_suite_round_trips_through_shared_port() {
        let storage = Rc::new(MemoryStorage::new());
        {
            let mut suite = Suite::load(storage.clone());
            suite
                .stories_mut()
                .add(Story::new("Title", "Content"))
                .unwrap();
            let mut video = GeneratedVideo::new("A lighthouse at dusk");
            video.status = VideoStatus::Completed;
            suite.videos_mut().add(video).unwrap();
        }

        let suite = Suite::load(storage);
        assert_eq!(suite.stories().len(), 1);
        assert_eq!(suite.videos().len(), 1);
        assert_eq!(suite.videos().records()[0].status, VideoStatus::Completed);
    }

    #[test]
    fn test_update_through_suite_accessor() {
        let mut suite = Suite::load(Rc::new(MemoryStorage::new()));
        suite
            .stories_mut()
            .add(Story::new("Title", "Content"))
            .unwrap();
        let id = suite.stories().records()[0].id.clone();

        suite
            .stories_mut()
            .update(
                &id,
                StoryPatch {
                    title: Some("Revised".to_string()),
                    content: None,
                },
            )
            .unwrap();
        assert_eq!(suite.stories().get(&id).unwrap().title, "Revised");
    }
}
