use super::break_status::BreakStatus;
use crate::core::duration::{BreakClass, classify_minutes, duration_minutes};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One break taken by one associate.
///
/// Field names follow the persisted JSON layout (`startTime`, `endTime`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakRecord {
    pub id: String,
    pub name: String,
    pub start_time: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Local>>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: BreakStatus,
}

impl BreakRecord {
    /// New active break starting at `now`.
    pub fn start(name: &str, now: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            start_time: now,
            end_time: None,
            reason: String::new(),
            status: BreakStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed milliseconds: up to `end_time` when closed, up to `now` while active.
    pub fn duration_ms(&self, now: DateTime<Local>) -> i64 {
        let until = self.end_time.unwrap_or(now);
        (until - self.start_time).num_milliseconds().max(0)
    }

    /// Close the break at `now` and return how long it lasted.
    pub fn close(&mut self, now: DateTime<Local>) -> BreakClass {
        self.end_time = Some(now);
        self.sync_status()
    }

    /// Recompute `status` from the timestamps and return the duration class.
    ///
    /// Records read from disk or imported may carry a status that disagrees
    /// with `end_time`; the timestamps win.
    pub fn sync_status(&mut self) -> BreakClass {
        let Some(end) = self.end_time else {
            self.status = BreakStatus::Active;
            return BreakClass::Normal;
        };

        let class = classify_minutes(duration_minutes(self.duration_ms(end)));
        self.status = match class {
            BreakClass::Critical => BreakStatus::Overtime,
            BreakClass::Normal | BreakClass::Warning => BreakStatus::Completed,
        };
        class
    }

    /// Short form of the id shown in tables.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap()
    }

    #[test]
    fn sync_status_follows_end_time() {
        let mut r = BreakRecord::start("Ann", t0());
        r.end_time = Some(t0() + Duration::minutes(50));
        assert_eq!(r.status, BreakStatus::Active);

        assert_eq!(r.sync_status(), BreakClass::Critical);
        assert_eq!(r.status, BreakStatus::Overtime);

        r.end_time = Some(t0() + Duration::minutes(31));
        r.sync_status();
        assert_eq!(r.status, BreakStatus::Completed);
    }

    #[test]
    fn sync_status_reopens_record_without_end_time() {
        let mut r = BreakRecord::start("Ann", t0());
        r.status = BreakStatus::Overtime;
        r.sync_status();
        assert_eq!(r.status, BreakStatus::Active);
    }
}
