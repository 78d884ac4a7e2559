use super::open_controller;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Clock;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Copy { stdout } = cmd {
        let ctl = open_controller(cfg)?;
        let now = clock.now();

        if *stdout {
            print!("{}", ExportLogic::table_tsv(ctl.state(), now));
            return Ok(());
        }

        let n = ExportLogic::copy_table(ctl.state(), now)?;
        success(format!("Copied {n} break record(s) to the clipboard"));
    }

    Ok(())
}
