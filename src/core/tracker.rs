//! Break tracker state and its transitions.
//!
//! `TrackerState::apply` never mutates the receiver: it returns the next
//! state together with the notice to show, or an error and no new state.

use crate::core::duration::{BreakClass, format_duration};
use crate::core::notice::Notice;
use crate::errors::{AppError, AppResult};
use crate::models::BreakRecord;
use crate::utils::time::format_clock;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

/// Hard limit of breaks per associate (name compared case-insensitively).
pub const MAX_BREAKS_PER_NAME: usize = 2;

/// Input events of the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakEvent {
    /// Form submission: ends the open break for the name, or starts one.
    Record { name: String },
    Start { name: String },
    End { name: String },
    UpdateReason { id: String, text: String },
    Delete { id: String },
    Clear,
}

impl BreakEvent {
    /// Operation name written to the audit log.
    pub fn operation(&self) -> &'static str {
        match self {
            BreakEvent::Record { .. } => "record",
            BreakEvent::Start { .. } => "start",
            BreakEvent::End { .. } => "end",
            BreakEvent::UpdateReason { .. } => "reason",
            BreakEvent::Delete { .. } => "del",
            BreakEvent::Clear => "clear",
        }
    }

    pub fn target(&self) -> &str {
        match self {
            BreakEvent::Record { name } | BreakEvent::Start { name } | BreakEvent::End { name } => {
                name.trim()
            }
            BreakEvent::UpdateReason { id, .. } | BreakEvent::Delete { id } => id,
            BreakEvent::Clear => "",
        }
    }
}

/// Outcome of a successful transition.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: TrackerState,
    pub notice: Notice,
}

/// Outcome of merging records from another source.
#[derive(Debug)]
pub struct Merge {
    pub state: TrackerState,
    pub added: usize,
    /// Records already present, matched by id.
    pub duplicates: usize,
    /// Records refused because they would break a tracker rule.
    pub rejected: Vec<AppError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    records: Vec<BreakRecord>,
}

impl TrackerState {
    pub fn new(records: Vec<BreakRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BreakRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Open breaks keyed by associate name.
    pub fn active_breaks(&self) -> BTreeMap<&str, &BreakRecord> {
        self.records
            .iter()
            .filter(|r| r.is_active())
            .map(|r| (r.name.as_str(), r))
            .collect()
    }

    /// Open break for exactly `name` (case-sensitive).
    pub fn active_for(&self, name: &str) -> Option<&BreakRecord> {
        self.records
            .iter()
            .find(|r| r.is_active() && r.name == name)
    }

    /// Number of records for `name`, ignoring case.
    pub fn count_for(&self, name: &str) -> usize {
        let wanted = name.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase() == wanted)
            .count()
    }

    pub fn find(&self, id: &str) -> Option<&BreakRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Resolve a full id or an unambiguous id prefix to the full id.
    pub fn resolve_id(&self, key: &str) -> AppResult<String> {
        let key = key.trim();
        if let Some(r) = self.find(key) {
            return Ok(r.id.clone());
        }

        if key.is_empty() {
            return Err(AppError::RecordNotFound(key.to_string()));
        }

        let mut matches = self.records.iter().filter(|r| r.id.starts_with(key));
        match (matches.next(), matches.next()) {
            (Some(r), None) => Ok(r.id.clone()),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(key.to_string())),
            (None, _) => Err(AppError::RecordNotFound(key.to_string())),
        }
    }

    pub fn apply(&self, event: BreakEvent, now: DateTime<Local>) -> AppResult<Transition> {
        let mut next = self.clone();

        let notice = match event {
            BreakEvent::Record { name } => next.record_time(&name, now)?,
            BreakEvent::Start { name } => next.start_break(&name, now)?,
            BreakEvent::End { name } => next.end_break(&name, now)?,
            BreakEvent::UpdateReason { id, text } => next.update_reason(&id, text)?,
            BreakEvent::Delete { id } => next.delete_record(&id)?,
            BreakEvent::Clear => next.clear_all(),
        };

        Ok(Transition {
            state: next,
            notice,
        })
    }

    /// Append foreign records under the same rules as a new break.
    ///
    /// Known ids are skipped. A record that would exceed the per-name limit
    /// or open a second break for the same name is rejected. Statuses are
    /// recomputed from the timestamps.
    pub fn merge(&self, incoming: Vec<BreakRecord>) -> Merge {
        let mut next = self.clone();
        let mut added = 0;
        let mut duplicates = 0;
        let mut rejected = Vec::new();

        for record in incoming {
            match next.admit(record) {
                Ok(true) => added += 1,
                Ok(false) => duplicates += 1,
                Err(e) => rejected.push(e),
            }
        }

        Merge {
            state: next,
            added,
            duplicates,
            rejected,
        }
    }

    fn admit(&mut self, mut record: BreakRecord) -> AppResult<bool> {
        if self.find(&record.id).is_some() {
            return Ok(false);
        }

        record.name = record.name.trim().to_string();
        if record.name.is_empty() {
            return Err(AppError::EmptyName);
        }

        if self.count_for(&record.name) >= MAX_BREAKS_PER_NAME {
            return Err(AppError::BreakLimit(record.name));
        }

        record.sync_status();
        if record.is_active() && self.active_for(&record.name).is_some() {
            return Err(AppError::AlreadyActive(record.name));
        }

        self.records.push(record);
        Ok(true)
    }

    fn record_time(&mut self, name: &str, now: DateTime<Local>) -> AppResult<Notice> {
        if self.active_for(name.trim()).is_some() {
            self.end_break(name, now)
        } else {
            self.start_break(name, now)
        }
    }

    fn start_break(&mut self, name: &str, now: DateTime<Local>) -> AppResult<Notice> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        if self.count_for(name) >= MAX_BREAKS_PER_NAME {
            return Err(AppError::BreakLimit(name.to_string()));
        }

        if self.active_for(name).is_some() {
            return Err(AppError::AlreadyActive(name.to_string()));
        }

        self.records.push(BreakRecord::start(name, now));

        Ok(Notice::success(format!(
            "Break started for {} at {}",
            name,
            format_clock(now)
        )))
    }

    fn end_break(&mut self, name: &str, now: DateTime<Local>) -> AppResult<Notice> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        let record = self
            .records
            .iter_mut()
            .find(|r| r.is_active() && r.name == name)
            .ok_or_else(|| AppError::NoActiveBreak(name.to_string()))?;

        let class = record.close(now);
        let took = format_duration(record.duration_ms(now));

        Ok(match class {
            BreakClass::Critical => {
                Notice::error(format!("{name} exceeded the break limit! Duration: {took}"))
            }
            BreakClass::Warning => {
                Notice::warning(format!("{name}'s break is close to the limit. Duration: {took}"))
            }
            BreakClass::Normal => Notice::success(format!("Break ended for {name}. Duration: {took}")),
        })
    }

    fn update_reason(&mut self, id: &str, text: String) -> AppResult<Notice> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::RecordNotFound(id.to_string()))?;

        record.reason = text;
        Ok(Notice::info(format!("Reason updated for {}", record.name)))
    }

    fn delete_record(&mut self, id: &str) -> AppResult<Notice> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::RecordNotFound(id.to_string()))?;

        let removed = self.records.remove(idx);
        Ok(Notice::success(format!(
            "Deleted break record for {}",
            removed.name
        )))
    }

    fn clear_all(&mut self) -> Notice {
        self.records.clear();
        Notice::success("All break records cleared")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notice::Severity;
    use crate::models::BreakStatus;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 17, h, m, 0).unwrap()
    }

    fn record(name: &str) -> BreakEvent {
        BreakEvent::Record {
            name: name.to_string(),
        }
    }

    fn run(state: &TrackerState, event: BreakEvent, now: DateTime<Local>) -> Transition {
        state.apply(event, now).expect("transition should succeed")
    }

    #[test]
    fn alice_scenario() {
        let s0 = TrackerState::default();

        let t1 = run(&s0, record("Alice"), at(10, 0));
        assert_eq!(t1.state.len(), 1);
        assert_eq!(t1.state.records()[0].status, BreakStatus::Active);
        assert!(t1.notice.message.contains("10:00:00 AM"));

        let t2 = run(&t1.state, record("Alice"), at(10, 29));
        let first = &t2.state.records()[0];
        assert_eq!(first.status, BreakStatus::Completed);
        assert_eq!(format_duration(first.duration_ms(at(12, 0))), "29m 0s");
        assert_eq!(t2.notice.severity, Severity::Success);

        let t3 = run(&t2.state, record("Alice"), at(10, 30));
        assert_eq!(t3.state.len(), 2);

        let t4 = run(&t3.state, record("Alice"), at(11, 5));
        let second = &t4.state.records()[1];
        assert_eq!(second.status, BreakStatus::Overtime);
        assert_eq!(t4.notice.severity, Severity::Error);
        assert!(t4.notice.message.contains("35m 0s"));

        let err = t4.state.apply(record("Alice"), at(11, 10)).unwrap_err();
        assert!(matches!(err, AppError::BreakLimit(_)));
    }

    #[test]
    fn third_start_is_rejected_case_insensitively() {
        let s = TrackerState::default();
        let s = run(&s, record("bob"), at(9, 0)).state;
        let s = run(&s, record("bob"), at(9, 10)).state;
        let s = run(&s, record("BOB"), at(9, 20)).state;
        let s = run(&s, record("BOB"), at(9, 30)).state;
        assert_eq!(s.count_for("Bob"), 2);

        let before = s.clone();
        let err = s
            .apply(
                BreakEvent::Start {
                    name: "Bob".into(),
                },
                at(10, 0),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::BreakLimit(_)));
        assert_eq!(s, before);
    }

    #[test]
    fn record_toggles_exactly_one_way() {
        let s = TrackerState::default();
        let started = run(&s, record("Carol"), at(14, 0)).state;
        assert!(started.active_for("Carol").is_some());

        // a second submission closes the break whatever the elapsed time
        let ended = run(&started, record("Carol"), at(14, 0)).state;
        assert!(ended.active_for("Carol").is_none());
        assert_eq!(ended.len(), 1);
    }

    #[test]
    fn exact_match_is_case_sensitive_for_toggle() {
        let s = TrackerState::default();
        let s = run(&s, record("Dan"), at(8, 0)).state;

        // "dan" has no open break of its own, so this starts a second record
        let s = run(&s, record("dan"), at(8, 5)).state;
        assert_eq!(s.len(), 2);
        assert_eq!(s.active_breaks().len(), 2);
    }

    #[test]
    fn names_are_trimmed_and_empty_rejected() {
        let s = TrackerState::default();
        let err = s.apply(record("   "), at(9, 0)).unwrap_err();
        assert!(matches!(err, AppError::EmptyName));

        let s = run(&s, record("  Eve  "), at(9, 0)).state;
        assert_eq!(s.records()[0].name, "Eve");
        assert!(s.active_for("Eve").is_some());
    }

    #[test]
    fn end_thresholds_drive_status_and_severity() {
        let cases = [
            (30, BreakStatus::Completed, Severity::Success),
            (31, BreakStatus::Completed, Severity::Warning),
            (32, BreakStatus::Completed, Severity::Warning),
            (33, BreakStatus::Overtime, Severity::Error),
        ];

        for (minutes, status, severity) in cases {
            let start = at(10, 0);
            let s = run(&TrackerState::default(), record("Finn"), start).state;
            let t = run(&s, record("Finn"), start + Duration::minutes(minutes));
            assert_eq!(t.state.records()[0].status, status, "{minutes} minutes");
            assert_eq!(t.notice.severity, severity, "{minutes} minutes");
        }
    }

    #[test]
    fn direct_start_while_active_is_rejected() {
        let s = run(&TrackerState::default(), record("Gus"), at(9, 0)).state;
        let err = s
            .apply(
                BreakEvent::Start {
                    name: "Gus".into(),
                },
                at(9, 1),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyActive(_)));
    }

    #[test]
    fn end_without_active_break_fails() {
        let err = TrackerState::default()
            .apply(
                BreakEvent::End {
                    name: "Hal".into(),
                },
                at(9, 0),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::NoActiveBreak(_)));
    }

    #[test]
    fn reason_delete_and_clear() {
        let s = run(&TrackerState::default(), record("Ivy"), at(9, 0)).state;
        let s = run(&s, record("Jon"), at(9, 1)).state;
        let ivy = s.records()[0].id.clone();

        let s = run(
            &s,
            BreakEvent::UpdateReason {
                id: ivy.clone(),
                text: "doctor call".into(),
            },
            at(9, 2),
        )
        .state;
        assert_eq!(s.find(&ivy).unwrap().reason, "doctor call");

        let s = run(&s, BreakEvent::Delete { id: ivy.clone() }, at(9, 3)).state;
        assert!(s.find(&ivy).is_none());
        assert!(s.active_for("Jon").is_some());

        let s = run(&s, BreakEvent::Clear, at(9, 4)).state;
        assert!(s.is_empty());
    }

    #[test]
    fn merge_enforces_limit_and_single_active_break() {
        let s = run(&TrackerState::default(), record("Zed"), at(9, 0)).state;

        let m = s.merge(vec![
            BreakRecord::start("Zed", at(9, 5)),
            BreakRecord::start("zed", at(9, 6)),
            BreakRecord::start("ZED", at(9, 7)),
        ]);

        // "Zed" is already on break, "zed" fits, "ZED" would be a third record
        assert_eq!(m.added, 1);
        assert_eq!(m.rejected.len(), 2);
        assert!(matches!(m.rejected[0], AppError::AlreadyActive(_)));
        assert!(matches!(m.rejected[1], AppError::BreakLimit(_)));
        assert_eq!(m.state.count_for("zed"), 2);
        assert_eq!(
            m.state
                .records()
                .iter()
                .filter(|r| r.is_active() && r.name == "Zed")
                .count(),
            1
        );
    }

    #[test]
    fn merge_skips_known_ids_and_fixes_status() {
        let s = run(&TrackerState::default(), record("Ann"), at(8, 0)).state;
        let known = s.records()[0].clone();

        let mut ended = BreakRecord::start("Bea", at(9, 0));
        ended.end_time = Some(at(9, 50));

        let m = s.merge(vec![known, ended]);
        assert_eq!(m.added, 1);
        assert_eq!(m.duplicates, 1);
        assert!(m.rejected.is_empty());

        let bea = &m.state.records()[1];
        assert!(!bea.is_active());
        assert_eq!(bea.status, BreakStatus::Overtime);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let s = TrackerState::default();
        let err = s
            .apply(BreakEvent::Delete { id: "nope".into() }, at(9, 0))
            .unwrap_err();
        assert!(matches!(err, AppError::RecordNotFound(_)));
    }

    #[test]
    fn resolves_id_prefixes() {
        let s = run(&TrackerState::default(), record("Kim"), at(9, 0)).state;
        let id = s.records()[0].id.clone();
        assert_eq!(s.resolve_id(&id[..6]).unwrap(), id);
        assert!(matches!(
            s.resolve_id("zzzzzzzz"),
            Err(AppError::RecordNotFound(_))
        ));
    }
}
