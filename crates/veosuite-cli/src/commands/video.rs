//! Generated video commands
//!
//! Videos enter the collection as pending; `update` records the generator's
//! result by setting --status and --url in place.

use clap::{Args, Subcommand};
use std::path::Path;

use veosuite_core::{GeneratedVideo, GeneratedVideoPatch, VideoStatus};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct VideoArgs {
    #[command(subcommand)]
    pub command: VideoCommand,
}

#[derive(Debug, Subcommand)]
pub enum VideoCommand {
    /// Add a new (pending) video
    Add {
        /// Prompt the video is generated from
        #[arg(long)]
        prompt: String,
    },
    /// List videos, most recent first
    List,
    /// Update an existing video's prompt, status, or result URL
    Update {
        /// ID of the video to update
        id: String,
        #[arg(long)]
        prompt: Option<String>,
        /// New status: pending, completed, or failed
        #[arg(long)]
        status: Option<String>,
        /// URL of the generated video
        #[arg(long)]
        url: Option<String>,
    },
    /// Delete a video
    Delete {
        /// ID of the video to delete
        id: String,
    },
}

/// Execute video command
pub fn execute(args: VideoArgs, data_dir: &Path) -> CommandResult {
    let mut suite = super::open_suite(data_dir);
    match args.command {
        VideoCommand::Add { prompt } => {
            let video = GeneratedVideo::new(prompt);
            let id = video.id.clone();
            suite.videos_mut().add(video)?;
            println!("✓ Added video {} (pending)", id);
        }
        VideoCommand::List => {
            for video in suite.videos().records() {
                println!(
                    "{}  {}  {}  {}",
                    video.id,
                    video.status,
                    video.video_url.as_deref().unwrap_or("-"),
                    video.prompt
                );
            }
        }
        VideoCommand::Update {
            id,
            prompt,
            status,
            url,
        } => {
            if suite.videos().get(&id).is_none() {
                println!("No video with id {}; nothing to do", id);
                return Ok(());
            }
            let status = status.map(|s| s.parse::<VideoStatus>()).transpose()?;
            suite.videos_mut().update(
                &id,
                GeneratedVideoPatch {
                    prompt,
                    status,
                    video_url: url.map(Some),
                },
            )?;
            println!("✓ Updated video {}", id);
        }
        VideoCommand::Delete { id } => {
            if suite.videos().get(&id).is_none() {
                println!("No video with id {}; nothing to do", id);
                return Ok(());
            }
            suite.videos_mut().delete(&id)?;
            println!("✓ Deleted video {}", id);
        }
    }
    Ok(())
}
