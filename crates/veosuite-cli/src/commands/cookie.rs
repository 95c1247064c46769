//! Personal cookie commands
//!
//! Cookie values are long opaque strings; `list` truncates them for display.

use clap::{Args, Subcommand};
use std::path::Path;

use veosuite_core::{UserCookie, UserCookiePatch};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct CookieArgs {
    #[command(subcommand)]
    pub command: CookieCommand,
}

#[derive(Debug, Subcommand)]
pub enum CookieCommand {
    /// Add a new cookie
    Add {
        /// Mnemonic label (e.g. which account the cookie belongs to)
        #[arg(long)]
        name: String,
        /// Raw cookie value
        #[arg(long)]
        value: String,
    },
    /// List cookies, most recent first
    List,
    /// Update fields of an existing cookie
    Update {
        /// ID of the cookie to update
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        value: Option<String>,
    },
    /// Delete a cookie
    Delete {
        /// ID of the cookie to delete
        id: String,
    },
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let head: String = value.chars().take(max).collect();
        format!("{}…", head)
    }
}

/// Execute cookie command
pub fn execute(args: CookieArgs, data_dir: &Path) -> CommandResult {
    let mut suite = super::open_suite(data_dir);
    match args.command {
        CookieCommand::Add { name, value } => {
            let cookie = UserCookie::new(name, value);
            let id = cookie.id.clone();
            suite.cookies_mut().add(cookie)?;
            println!("✓ Added cookie {}", id);
        }
        CookieCommand::List => {
            for cookie in suite.cookies().records() {
                println!(
                    "{}  {}  {}",
                    cookie.id,
                    cookie.name,
                    truncate(&cookie.value, 40)
                );
            }
        }
        CookieCommand::Update { id, name, value } => {
            if suite.cookies().get(&id).is_none() {
                println!("No cookie with id {}; nothing to do", id);
                return Ok(());
            }
            suite
                .cookies_mut()
                .update(&id, UserCookiePatch { name, value })?;
            println!("✓ Updated cookie {}", id);
        }
        CookieCommand::Delete { id } => {
            if suite.cookies().get(&id).is_none() {
                println!("No cookie with id {}; nothing to do", id);
                return Ok(());
            }
            suite.cookies_mut().delete(&id)?;
            println!("✓ Deleted cookie {}", id);
        }
    }
    Ok(())
}
