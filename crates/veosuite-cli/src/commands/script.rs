//! YouTube script commands

use clap::{Args, Subcommand};
use std::path::Path;

use veosuite_core::{YouTubeScript, YouTubeScriptPatch};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct ScriptArgs {
    #[command(subcommand)]
    pub command: ScriptCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScriptCommand {
    /// Add a new script
    Add {
        /// Video title the script belongs to
        #[arg(long)]
        title: String,
        /// Full script text
        #[arg(long)]
        script: String,
    },
    /// List scripts, most recent first
    List,
    /// Update fields of an existing script
    Update {
        /// ID of the script to update
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        script: Option<String>,
    },
    /// Delete a script
    Delete {
        /// ID of the script to delete
        id: String,
    },
}

/// Execute script command
pub fn execute(args: ScriptArgs, data_dir: &Path) -> CommandResult {
    let mut suite = super::open_suite(data_dir);
    match args.command {
        ScriptCommand::Add { title, script } => {
            let record = YouTubeScript::new(title, script);
            let id = record.id.clone();
            suite.youtube_scripts_mut().add(record)?;
            println!("✓ Added script {}", id);
        }
        ScriptCommand::List => {
            for script in suite.youtube_scripts().records() {
                println!(
                    "{}  {}  {}",
                    script.id,
                    script.created_at.format("%Y-%m-%d %H:%M"),
                    script.title
                );
            }
        }
        ScriptCommand::Update { id, title, script } => {
            if suite.youtube_scripts().get(&id).is_none() {
                println!("No script with id {}; nothing to do", id);
                return Ok(());
            }
            suite
                .youtube_scripts_mut()
                .update(&id, YouTubeScriptPatch { title, script })?;
            println!("✓ Updated script {}", id);
        }
        ScriptCommand::Delete { id } => {
            if suite.youtube_scripts().get(&id).is_none() {
                println!("No script with id {}; nothing to do", id);
                return Ok(());
            }
            suite.youtube_scripts_mut().delete(&id)?;
            println!("✓ Deleted script {}", id);
        }
    }
    Ok(())
}
