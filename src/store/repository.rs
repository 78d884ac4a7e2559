use super::KeyValueStore;
use crate::core::tracker::TrackerState;
use crate::errors::AppResult;
use crate::models::BreakRecord;
use crate::ui::messages::warning;
use chrono::{DateTime, Local};

/// Key holding the JSON array of break records.
pub const RECORDS_KEY: &str = "breakRecords";

/// Loads and saves the whole break collection under [`RECORDS_KEY`].
pub struct BreakRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> BreakRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the collection. Unreadable data is reported and treated as empty.
    ///
    /// Statuses are recomputed from the timestamps, so a hand-edited value
    /// cannot report a closed break as active.
    pub fn load(&self) -> AppResult<TrackerState> {
        let Some(raw) = self.store.get(RECORDS_KEY)? else {
            return Ok(TrackerState::default());
        };

        match decode_records(&raw) {
            Ok(mut records) => {
                for r in &mut records {
                    r.sync_status();
                }
                Ok(TrackerState::new(records))
            }
            Err(e) => {
                warning(format!("Error loading saved break records: {e}"));
                Ok(TrackerState::default())
            }
        }
    }

    pub fn save(&mut self, state: &TrackerState, at: DateTime<Local>) -> AppResult<()> {
        let json = encode_records(state.records())?;
        self.store.set(RECORDS_KEY, &json, at)
    }

    /// Drop the persisted collection entirely.
    pub fn purge(&mut self) -> AppResult<()> {
        self.store.remove(RECORDS_KEY)
    }
}

pub fn encode_records(records: &[BreakRecord]) -> AppResult<String> {
    Ok(serde_json::to_string(records)?)
}

pub fn decode_records(raw: &str) -> AppResult<Vec<BreakRecord>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tracker::BreakEvent;
    use crate::models::BreakStatus;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn t0() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 17, 10, 0, 0).unwrap()
    }

    fn sample_state() -> TrackerState {
        let t0 = Local.with_ymd_and_hms(2026, 10, 17, 10, 0, 0).unwrap();
        let s = TrackerState::default();
        let s = s
            .apply(BreakEvent::Record { name: "Alice".into() }, t0)
            .unwrap()
            .state;
        let s = s
            .apply(
                BreakEvent::Record { name: "Alice".into() },
                t0 + chrono::Duration::minutes(29),
            )
            .unwrap()
            .state;
        let id = s.records()[0].id.clone();
        let s = s
            .apply(
                BreakEvent::UpdateReason {
                    id,
                    text: "coffee".into(),
                },
                t0,
            )
            .unwrap()
            .state;
        s.apply(BreakEvent::Record { name: "Bob".into() }, t0)
            .unwrap()
            .state
    }

    #[test]
    fn round_trip_preserves_records() {
        let state = sample_state();
        let mut repo = BreakRepository::new(MemoryStore::new());
        repo.save(&state, t0()).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.records()[0].status, BreakStatus::Completed);
        assert_eq!(loaded.records()[0].reason, "coffee");
        assert_eq!(
            loaded.records()[0].end_time,
            state.records()[0].end_time
        );
        assert!(loaded.records()[1].end_time.is_none());
    }

    #[test]
    fn persisted_form_uses_iso_timestamps_and_camel_case() {
        let json = encode_records(sample_state().records()).unwrap();
        assert!(json.contains("\"startTime\":\"2026-10-17T10:00:00"));
        assert!(json.contains("\"endTime\""));
        assert!(json.contains("\"status\":\"active\""));
    }

    #[test]
    fn reads_utc_timestamps_written_elsewhere() {
        let raw = r#"[{"id":"1","name":"Zoe","startTime":"2026-10-17T08:00:00.000Z","reason":"","status":"active"}]"#;
        let records = decode_records(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_active());
        assert_eq!(
            records[0].start_time.timestamp(),
            chrono::Utc
                .with_ymd_and_hms(2026, 10, 17, 8, 0, 0)
                .unwrap()
                .timestamp()
        );
    }

    #[test]
    fn corrupt_data_loads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(RECORDS_KEY, "{not json", t0()).unwrap();
        let repo = BreakRepository::new(store);
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn load_recomputes_status_from_end_time() {
        // closed 50 minutes after start, yet stored as active
        let raw = r#"[{"id":"a1","name":"Ann","startTime":"2026-10-17T09:00:00+00:00","endTime":"2026-10-17T09:50:00+00:00","status":"active"}]"#;
        let mut store = MemoryStore::new();
        store.set(RECORDS_KEY, raw, t0()).unwrap();

        let state = BreakRepository::new(store).load().unwrap();
        let ann = &state.records()[0];
        assert!(!ann.is_active());
        assert_eq!(ann.status, BreakStatus::Overtime);
    }

    #[test]
    fn purge_removes_the_key() {
        let mut repo = BreakRepository::new(MemoryStore::new());
        repo.save(&sample_state(), t0()).unwrap();
        repo.purge().unwrap();
        assert!(!repo.store().contains(RECORDS_KEY));
    }
}
