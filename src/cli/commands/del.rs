use super::{ask_confirmation, open_controller};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{BreakEvent, Clock};
use crate::errors::AppResult;
use crate::ui::messages::{info, notify};
use crate::utils::time::format_clock;
use std::io;

/// Handle `del` and `clear`.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let mut ctl = open_controller(cfg)?;

    let (event, prompt, yes) = match cmd {
        Commands::Del { id, yes } => {
            let id = ctl.state().resolve_id(id)?;
            let prompt = match ctl.state().find(&id) {
                Some(r) => format!(
                    "Delete the break of {} started at {}? This action is irreversible.",
                    r.name,
                    format_clock(r.start_time)
                ),
                None => format!("Delete break record {id}? This action is irreversible."),
            };
            (BreakEvent::Delete { id }, prompt, *yes)
        }
        Commands::Clear { yes } => (
            BreakEvent::Clear,
            format!(
                "Delete ALL {} break records? This action is irreversible.",
                ctl.state().len()
            ),
            *yes,
        ),
        _ => return Ok(()),
    };

    //
    // Confirmation prompt
    //
    if cfg.confirm_deletes && !yes && !ask_confirmation(&mut io::stdin().lock(), &prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    let notice = ctl.dispatch(event, clock.now())?;
    notify(&notice);

    Ok(())
}
