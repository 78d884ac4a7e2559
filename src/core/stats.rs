use crate::core::duration::{BreakClass, classify_minutes, duration_minutes};
use crate::core::tracker::TrackerState;
use chrono::{DateTime, Local};

/// Figures shown above the break table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerStats {
    pub active: usize,
    /// Overtime breaks, including open ones already past the limit.
    pub overtime: usize,
    /// Breaks started on the local date of `now`.
    pub today_total: usize,
}

pub fn compute(state: &TrackerState, now: DateTime<Local>) -> TrackerStats {
    let today = now.date_naive();

    state
        .records()
        .iter()
        .fold(TrackerStats::default(), |mut acc, r| {
            if r.is_active() {
                acc.active += 1;
            }

            let over = if r.is_active() {
                classify_minutes(duration_minutes(r.duration_ms(now))) == BreakClass::Critical
            } else {
                r.status.is_overtime()
            };
            if over {
                acc.overtime += 1;
            }

            if r.start_time.date_naive() == today {
                acc.today_total += 1;
            }

            acc
        })
}

impl TrackerState {
    pub fn stats(&self, now: DateTime<Local>) -> TrackerStats {
        compute(self, now)
    }
}
