//! Video prompt commands
//!
//! Prompts are usually generated in batches from one story, so `add` accepts
//! `--prompt` multiple times and stores the whole batch ahead of existing
//! records, preserving the batch's order.

use clap::{Args, Subcommand};
use std::path::Path;

use veosuite_core::{VideoPrompt, VideoPromptPatch};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct PromptArgs {
    #[command(subcommand)]
    pub command: PromptCommand,
}

#[derive(Debug, Subcommand)]
pub enum PromptCommand {
    /// Add one or more prompts (repeat --prompt for a batch)
    Add {
        /// Prompt text; may be given multiple times
        #[arg(long = "prompt", required = true)]
        prompts: Vec<String>,
        /// Story the prompts were derived from
        #[arg(long)]
        story_id: Option<String>,
    },
    /// List prompts, most recent first
    List,
    /// Update the text of an existing prompt
    Update {
        /// ID of the prompt to update
        id: String,
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Delete a prompt
    Delete {
        /// ID of the prompt to delete
        id: String,
    },
}

/// Execute prompt command
pub fn execute(args: PromptArgs, data_dir: &Path) -> CommandResult {
    let mut suite = super::open_suite(data_dir);
    match args.command {
        PromptCommand::Add { prompts, story_id } => {
            let batch: Vec<VideoPrompt> = prompts
                .into_iter()
                .map(|p| VideoPrompt::new(p, story_id.clone()))
                .collect();
            let count = batch.len();
            suite.prompts_mut().add_many(batch)?;
            println!("✓ Added {} prompt(s)", count);
        }
        PromptCommand::List => {
            for prompt in suite.prompts().records() {
                println!("{}  {}", prompt.id, prompt.prompt);
            }
        }
        PromptCommand::Update { id, prompt } => {
            if suite.prompts().get(&id).is_none() {
                println!("No prompt with id {}; nothing to do", id);
                return Ok(());
            }
            suite.prompts_mut().update(&id, VideoPromptPatch { prompt })?;
            println!("✓ Updated prompt {}", id);
        }
        PromptCommand::Delete { id } => {
            if suite.prompts().get(&id).is_none() {
                println!("No prompt with id {}; nothing to do", id);
                return Ok(());
            }
            suite.prompts_mut().delete(&id)?;
            println!("✓ Deleted prompt {}", id);
        }
    }
    Ok(())
}
