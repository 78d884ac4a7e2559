use super::{join_words, open_controller};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{BreakEvent, Clock};
use crate::errors::AppResult;
use crate::ui::messages::notify;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Reason { id, text } = cmd {
        let mut ctl = open_controller(cfg)?;
        let id = ctl.state().resolve_id(id)?;

        let notice = ctl.dispatch(
            BreakEvent::UpdateReason {
                id,
                text: join_words(text),
            },
            clock.now(),
        )?;
        notify(&notice);
    }

    Ok(())
}
