//! Story commands
//!
//! Usage: veosuite story <add|list|update|delete>

use clap::{Args, Subcommand};
use std::path::Path;

use veosuite_core::{Story, StoryPatch};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct StoryArgs {
    #[command(subcommand)]
    pub command: StoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum StoryCommand {
    /// Add a new story
    Add {
        /// Story title
        #[arg(long)]
        title: String,
        /// Full story text
        #[arg(long)]
        content: String,
    },
    /// List stories, most recent first
    List,
    /// Update fields of an existing story
    Update {
        /// ID of the story to update
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a story
    Delete {
        /// ID of the story to delete
        id: String,
    },
}

/// Execute story command
pub fn execute(args: StoryArgs, data_dir: &Path) -> CommandResult {
    let mut suite = super::open_suite(data_dir);
    match args.command {
        StoryCommand::Add { title, content } => {
            let story = Story::new(title, content);
            let id = story.id.clone();
            suite.stories_mut().add(story)?;
            println!("✓ Added story {}", id);
        }
        StoryCommand::List => {
            for story in suite.stories().records() {
                println!(
                    "{}  {}  {}",
                    story.id,
                    story.created_at.format("%Y-%m-%d %H:%M"),
                    story.title
                );
            }
        }
        StoryCommand::Update { id, title, content } => {
            if suite.stories().get(&id).is_none() {
                println!("No story with id {}; nothing to do", id);
                return Ok(());
            }
            suite.stories_mut().update(&id, StoryPatch { title, content })?;
            println!("✓ Updated story {}", id);
        }
        StoryCommand::Delete { id } => {
            if suite.stories().get(&id).is_none() {
                println!("No story with id {}; nothing to do", id);
                return Ok(());
            }
            suite.stories_mut().delete(&id)?;
            println!("✓ Deleted story {}", id);
        }
    }
    Ok(())
}
