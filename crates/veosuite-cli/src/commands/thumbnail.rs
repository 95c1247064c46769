//! Thumbnail commands

use clap::{Args, Subcommand};
use std::path::Path;

use veosuite_core::{GeneratedImage, GeneratedImagePatch};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct ThumbnailArgs {
    #[command(subcommand)]
    pub command: ThumbnailCommand,
}

#[derive(Debug, Subcommand)]
pub enum ThumbnailCommand {
    /// Add a new thumbnail
    Add {
        /// Prompt the image was generated from
        #[arg(long)]
        prompt: String,
        /// Image content as a data URL
        #[arg(long)]
        data_url: String,
    },
    /// List thumbnails, most recent first
    List,
    /// Update fields of an existing thumbnail
    Update {
        /// ID of the thumbnail to update
        id: String,
        #[arg(long)]
        prompt: Option<String>,
        #[arg(long)]
        data_url: Option<String>,
    },
    /// Delete a thumbnail
    Delete {
        /// ID of the thumbnail to delete
        id: String,
    },
}

/// Execute thumbnail command
pub fn execute(args: ThumbnailArgs, data_dir: &Path) -> CommandResult {
    let mut suite = super::open_suite(data_dir);
    match args.command {
        ThumbnailCommand::Add { prompt, data_url } => {
            let image = GeneratedImage::new(prompt, data_url);
            let id = image.id.clone();
            suite.thumbnails_mut().add(image)?;
            println!("✓ Added thumbnail {}", id);
        }
        ThumbnailCommand::List => {
            for image in suite.thumbnails().records() {
                println!("{}  {}  ({} bytes)", image.id, image.prompt, image.data_url.len());
            }
        }
        ThumbnailCommand::Update {
            id,
            prompt,
            data_url,
        } => {
            if suite.thumbnails().get(&id).is_none() {
                println!("No thumbnail with id {}; nothing to do", id);
                return Ok(());
            }
            suite
                .thumbnails_mut()
                .update(&id, GeneratedImagePatch { prompt, data_url })?;
            println!("✓ Updated thumbnail {}", id);
        }
        ThumbnailCommand::Delete { id } => {
            if suite.thumbnails().get(&id).is_none() {
                println!("No thumbnail with id {}; nothing to do", id);
                return Ok(());
            }
            suite.thumbnails_mut().delete(&id)?;
            println!("✓ Deleted thumbnail {}", id);
        }
    }
    Ok(())
}
