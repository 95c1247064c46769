//! CLI command modules, one per collection

pub mod cookie;
pub mod prompt;
pub mod script;
pub mod story;
pub mod thumbnail;
pub mod video;

use std::path::Path;
use std::rc::Rc;

use veosuite_core::Suite;
use veosuite_store::FsKvStore;

/// Command result type
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Hydrate the suite from the filesystem store under `data_dir`
pub fn open_suite(data_dir: &Path) -> Suite {
    Suite::load(Rc::new(FsKvStore::new(data_dir)))
}
