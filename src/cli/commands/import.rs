use super::open_controller;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Clock;
use crate::errors::AppResult;
use crate::store::repository::decode_records;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let raw = fs::read_to_string(&path)?;
        let records = decode_records(&raw)?;
        let total = records.len();

        let mut ctl = open_controller(cfg)?;
        let report = ctl.import(records, clock.now())?;

        for e in &report.rejected {
            warning(format!("Skipped: {e}"));
        }

        success(format!(
            "Imported {} of {total} break record(s) from {}",
            report.added,
            path.display()
        ));
        if report.duplicates > 0 {
            info(format!("{} record(s) were already present", report.duplicates));
        }
    }
    Ok(())
}
