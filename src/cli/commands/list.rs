use super::open_controller;
use crate::config::Config;
use crate::core::Clock;
use crate::errors::AppResult;
use crate::ui::view::render_dashboard;

pub fn handle(cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let ctl = open_controller(cfg)?;
    print!(
        "{}",
        render_dashboard(ctl.state(), clock.now(), &cfg.separator_char)
    );
    Ok(())
}
