pub mod config;
pub mod copy;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod reason;
pub mod record;
pub mod session;
pub mod watch;

use crate::config::Config;
use crate::core::BreakController;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Open the configured store and load the break collection.
pub(crate) fn open_controller(cfg: &Config) -> AppResult<BreakController<SqliteStore>> {
    let store = SqliteStore::open(&cfg.store)?;
    BreakController::open(store)
}

/// Ask a yes/no confirmation, reading the answer from `input`.
pub(crate) fn ask_confirmation<R: BufRead>(input: &mut R, prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if input.read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub(crate) fn join_words(words: &[String]) -> String {
    words.join(" ")
}
