use super::{join_words, open_controller};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{BreakEvent, Clock};
use crate::errors::AppResult;
use crate::ui::messages::notify;

/// Handle `record`, `start` and `end`.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let event = match cmd {
        Commands::Record { name } => BreakEvent::Record {
            name: join_words(name),
        },
        Commands::Start { name } => BreakEvent::Start {
            name: join_words(name),
        },
        Commands::End { name } => BreakEvent::End {
            name: join_words(name),
        },
        _ => return Ok(()),
    };

    let mut ctl = open_controller(cfg)?;
    let notice = ctl.dispatch(event, clock.now())?;
    notify(&notice);

    Ok(())
}
