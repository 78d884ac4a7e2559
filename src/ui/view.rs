//! Terminal rendering of the break table and its statistics.

use crate::core::duration::{classify_color, format_duration};
use crate::core::stats::TrackerStats;
use crate::core::tracker::TrackerState;
use crate::models::BreakRecord;
use crate::utils::colors::{GREY, RED, RESET, YELLOW, color_for_band};
use crate::utils::formatting::{bold, truncate};
use crate::utils::table::Table;
use crate::utils::time::{format_clock, format_optional_clock};
use chrono::{DateTime, Local};

const HEADERS: [&str; 7] = ["ID", "Associate", "Start", "End", "Duration", "Reason", "Status"];
const REASON_WIDTH: usize = 32;

fn record_cells(r: &BreakRecord, now: DateTime<Local>) -> Vec<String> {
    vec![
        r.short_id().to_string(),
        r.name.clone(),
        format_clock(r.start_time),
        format_optional_clock(r.end_time),
        format_duration(r.duration_ms(now)),
        truncate(&r.reason, REASON_WIDTH),
        r.status.to_string(),
    ]
}

/// Break table with durations of open breaks computed at `now`.
pub fn render_table(state: &TrackerState, now: DateTime<Local>, separator_char: &str) -> String {
    if state.is_empty() {
        return format!("{GREY}No breaks recorded yet.{RESET}\n");
    }

    let mut table = Table::new(&HEADERS, separator_char);
    for r in state.records() {
        let band = classify_color(r.duration_ms(now), r.status);
        table.add_row(record_cells(r, now), color_for_band(band));
    }
    table.render()
}

pub fn render_stats(stats: &TrackerStats) -> String {
    let overtime = if stats.overtime > 0 {
        format!("{RED}{}{RESET}", stats.overtime)
    } else {
        stats.overtime.to_string()
    };
    let active = if stats.active > 0 {
        format!("{YELLOW}{}{RESET}", stats.active)
    } else {
        stats.active.to_string()
    };

    format!(
        "Active: {} | Overtime: {} | Today's total: {}",
        active, overtime, stats.today_total
    )
}

/// Whole screen: clock line, statistics and table.
pub fn render_dashboard(state: &TrackerState, now: DateTime<Local>, separator_char: &str) -> String {
    let s = state.stats(now);

    let active = state.active_breaks();
    let on_break = if active.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = active.keys().copied().collect();
        format!("On break: {}\n", names.join(", "))
    };

    format!(
        "{}\n{}\n{}\n{}",
        bold(&format!("🕒 {}", format_clock(now))),
        render_stats(&s),
        on_break,
        render_table(state, now, separator_char)
    )
}
