use super::open_controller;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Clock;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let ctl = open_controller(cfg)?;
        let now = clock.now();
        let path = ExportLogic::resolve_path(format, file.as_deref(), &cfg.export_dir, now);

        ExportLogic::export(ctl.state(), now, format, &path, *force)?;
    }
    Ok(())
}
