//! VeoSuite Core - persisted-collection state management
//!
//! This crate provides the domain models and the collection store behind the
//! VeoSuite content manager:
//! - Six record kinds (stories, prompts, thumbnails, videos, scripts, cookies)
//!   with shallow-merge patch types
//! - A generic `Collection` store: load-on-init, prepend-on-add,
//!   persist-the-whole-sequence-on-every-mutation
//! - The `StoragePort` persistence seam with an in-memory fake
//! - The `Suite` aggregate bundling the six collections
//! - Error taxonomy and logging facility
//!
//! All state is single-threaded and synchronous; the persistence medium is a
//! local key-value call.

pub mod collection;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod port;
pub mod suite;

// Re-export commonly used types
pub use collection::{Collection, SubscriberId};
pub use errors::{Result, SuiteError};
pub use model::{
    GeneratedImage, GeneratedImagePatch, GeneratedVideo, GeneratedVideoPatch, Record, Story,
    StoryPatch, UserCookie, UserCookiePatch, VideoPrompt, VideoPromptPatch, VideoStatus,
    YouTubeScript, YouTubeScriptPatch,
};
pub use port::{MemoryStorage, StoragePort};
pub use suite::Suite;
