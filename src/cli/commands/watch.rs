use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Clock;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::store::BreakRepository;
use crate::ui::view::render_dashboard;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Redraw the dashboard once per second.
///
/// The store is re-read on every tick so changes made from another
/// terminal show up; nothing is written.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let Commands::Watch { ticks } = cmd else {
        return Ok(());
    };

    let repo = BreakRepository::new(SqliteStore::open(&cfg.store)?);
    let mut stdout = io::stdout();
    let mut done: u64 = 0;

    loop {
        let state = repo.load()?;
        write!(
            stdout,
            "{}{}",
            CLEAR_SCREEN,
            render_dashboard(&state, clock.now(), &cfg.separator_char)
        )?;
        stdout.flush()?;

        done += 1;
        if ticks.is_some_and(|max| done >= max) {
            break;
        }
        thread::sleep(TICK);
    }

    Ok(())
}
