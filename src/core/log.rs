use crate::db::kv::SqliteStore;
use crate::db::log::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// Return the ANSI colour for an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" | "record" => Colour::Green,
        "end" => Colour::Blue,
        "del" | "clear" => Colour::Red,
        "reason" => Colour::Yellow,
        "import" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Cut `s` to `max` visible characters, ending with `...`.
fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    /// Render the internal log, one line per entry.
    pub fn render_log(store: &SqliteStore) -> AppResult<Vec<String>> {
        let entries = load_log(store.conn())?;

        let op_w = entries
            .iter()
            .map(|e| op_target(&e.operation, &e.target).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(entries.len());

        for e in &entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| e.date.clone());

            let visible = truncate_visible(&op_target(&e.operation, &e.target), MAX_OP_WIDTH);

            // only the operation word is coloured
            let color = color_for_operation(&e.operation);
            let recolored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&recolored).chars().count()));

            lines.push(format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                date,
                recolored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(lines)
    }

    pub fn print_log(store: &SqliteStore) -> AppResult<()> {
        println!("📜 Internal log:\n");
        for line in Self::render_log(store)? {
            println!("{line}");
        }
        Ok(())
    }
}

fn op_target(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    }
}
