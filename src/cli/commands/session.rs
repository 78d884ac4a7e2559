//! Interactive mode: every line is a form submission unless it starts with `:`.

use super::{ask_confirmation, open_controller};
use crate::config::Config;
use crate::core::{BreakController, BreakEvent, Clock, Notice};
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::store::KeyValueStore;
use crate::ui::messages::{header, info, notify, success};
use crate::ui::view::render_dashboard;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Type an associate name and press Enter to start or end their break.
Commands:
  :list                 show the break table
  :reason <id> <text>   set the reason of a record
  :del <id>             delete a record
  :clear                delete every record
  :copy                 copy the table to the clipboard
  :export               write break_times_<date>.xlsx
  :help                 show this help
  :quit                 leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Submit(String),
    List,
    Reason { id: String, text: String },
    Delete(String),
    Clear,
    Copy,
    Export,
    Help,
    Quit,
    Unknown(String),
}

impl SessionInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(cmd) = line.trim_start().strip_prefix(':') else {
            return SessionInput::Submit(line.to_string());
        };

        let (verb, rest) = match cmd.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim()),
            None => (cmd, ""),
        };

        match verb.to_lowercase().as_str() {
            "list" | "ls" => SessionInput::List,
            "reason" => {
                let (id, text) = match rest.split_once(char::is_whitespace) {
                    Some((id, text)) => (id, text.trim()),
                    None => (rest, ""),
                };
                SessionInput::Reason {
                    id: id.to_string(),
                    text: text.to_string(),
                }
            }
            "del" | "delete" => SessionInput::Delete(rest.to_string()),
            "clear" => SessionInput::Clear,
            "copy" => SessionInput::Copy,
            "export" => SessionInput::Export,
            "help" | "h" | "?" => SessionInput::Help,
            "quit" | "q" | "exit" => SessionInput::Quit,
            other => SessionInput::Unknown(other.to_string()),
        }
    }
}

pub fn handle(cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let mut ctl = open_controller(cfg)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_session(&mut ctl, cfg, clock, &mut input)
}

/// Event loop of the interactive mode. Failures are shown and the loop goes on.
pub fn run_session<S: KeyValueStore, R: BufRead>(
    ctl: &mut BreakController<S>,
    cfg: &Config,
    clock: &dyn Clock,
    input: &mut R,
) -> AppResult<()> {
    header("Break Tracker");
    println!("{HELP}\n");

    loop {
        print!("Associate name > ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let now = clock.now();

        let outcome: AppResult<Option<Notice>> = match SessionInput::parse(&line) {
            SessionInput::Quit => break,
            SessionInput::Help => {
                println!("{HELP}");
                Ok(None)
            }
            SessionInput::Unknown(verb) => Ok(Some(Notice::warning(format!(
                "Unknown command ':{verb}' (type :help)"
            )))),
            SessionInput::List => {
                print!("{}", render_dashboard(ctl.state(), now, &cfg.separator_char));
                Ok(None)
            }
            SessionInput::Submit(name) => ctl.dispatch(BreakEvent::Record { name }, now).map(Some),
            SessionInput::Reason { id, text } => ctl
                .state()
                .resolve_id(&id)
                .and_then(|id| ctl.dispatch(BreakEvent::UpdateReason { id, text }, now))
                .map(Some),
            SessionInput::Delete(key) => match ctl.state().resolve_id(&key) {
                Ok(id) => {
                    if !cfg.confirm_deletes
                        || ask_confirmation(input, "Delete this break record? This action is irreversible.")
                    {
                        ctl.dispatch(BreakEvent::Delete { id }, now).map(Some)
                    } else {
                        Ok(Some(Notice::info("Operation cancelled.")))
                    }
                }
                Err(e) => Err(e),
            },
            SessionInput::Clear => {
                if !cfg.confirm_deletes
                    || ask_confirmation(input, "Delete ALL break records? This action is irreversible.")
                {
                    ctl.dispatch(BreakEvent::Clear, now).map(Some)
                } else {
                    Ok(Some(Notice::info("Operation cancelled.")))
                }
            }
            SessionInput::Copy => ExportLogic::copy_table(ctl.state(), now).map(|n| {
                Some(Notice::success(format!(
                    "Copied {n} break record(s) to the clipboard"
                )))
            }),
            SessionInput::Export => {
                let format = ExportFormat::Xlsx;
                let path = ExportLogic::resolve_path(&format, None, &cfg.export_dir, now);
                ExportLogic::export(ctl.state(), now, &format, &path, true).map(|_| None)
            }
        };

        match outcome {
            Ok(Some(notice)) => notify(&notice),
            Ok(None) => {}
            Err(e) => notify(&Notice::from(&e)),
        }
    }

    info("Session closed.");
    if !ctl.state().is_empty() {
        success(format!("{} break record(s) saved", ctl.state().len()));
    }
    Ok(())
}
