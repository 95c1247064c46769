//! VeoSuite CLI
//!
//! Command-line interface for managing AI-generation artifacts

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use veosuite_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "veosuite")]
#[command(about = "VeoSuite - AI-generation artifact manager", long_about = None)]
struct Cli {
    /// Directory holding the persisted collections
    #[arg(long, global = true, default_value = ".veosuite")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage stories
    Story(commands::story::StoryArgs),
    /// Manage video prompts
    Prompt(commands::prompt::PromptArgs),
    /// Manage thumbnails
    Thumbnail(commands::thumbnail::ThumbnailArgs),
    /// Manage generated videos
    Video(commands::video::VideoArgs),
    /// Manage YouTube scripts
    Script(commands::script::ScriptArgs),
    /// Manage personal cookies
    Cookie(commands::cookie::CookieArgs),
}

fn main() {
    logging_facility::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Story(args) => commands::story::execute(args, &cli.data_dir),
        Commands::Prompt(args) => commands::prompt::execute(args, &cli.data_dir),
        Commands::Thumbnail(args) => commands::thumbnail::execute(args, &cli.data_dir),
        Commands::Video(args) => commands::video::execute(args, &cli.data_dir),
        Commands::Script(args) => commands::script::execute(args, &cli.data_dir),
        Commands::Cookie(args) => commands::cookie::execute(args, &cli.data_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
