//! Glue between the pure tracker and its persisted form.

use crate::core::notice::Notice;
use crate::core::tracker::{BreakEvent, Merge, TrackerState, Transition};
use crate::errors::{AppError, AppResult};
use crate::models::BreakRecord;
use crate::store::{BreakRepository, KeyValueStore};
use chrono::{DateTime, Local};

/// What an import did to the collection.
#[derive(Debug)]
pub struct ImportReport {
    pub added: usize,
    pub duplicates: usize,
    pub rejected: Vec<AppError>,
}

/// Owns the current state and mirrors every change to the store.
pub struct BreakController<S: KeyValueStore> {
    repo: BreakRepository<S>,
    state: TrackerState,
}

impl<S: KeyValueStore> BreakController<S> {
    /// Load the persisted collection from `store`.
    pub fn open(store: S) -> AppResult<Self> {
        let repo = BreakRepository::new(store);
        let state = repo.load()?;
        Ok(Self { repo, state })
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn store(&self) -> &S {
        self.repo.store()
    }

    /// Apply `event`, persist the new state and return the notice to show.
    ///
    /// On error nothing is written and the in-memory state is untouched.
    pub fn dispatch(&mut self, event: BreakEvent, now: DateTime<Local>) -> AppResult<Notice> {
        let operation = event.operation();
        let target = event.target().to_string();
        let clears = matches!(event, BreakEvent::Clear);

        let Transition { state, notice } = self.state.apply(event, now)?;

        if clears {
            self.repo.purge()?;
        } else {
            self.repo.save(&state, now)?;
        }
        self.state = state;

        // audit trail is best effort
        if let Err(e) = self
            .repo
            .store()
            .audit(now, operation, &target, &notice.message)
        {
            crate::ui::messages::warning(format!("Failed to write internal log: {e}"));
        }

        Ok(notice)
    }

    /// Append records loaded from elsewhere under the usual break rules.
    ///
    /// Known ids are skipped and rule violations are reported per record;
    /// the accepted records are saved in one write.
    pub fn import(
        &mut self,
        incoming: Vec<BreakRecord>,
        now: DateTime<Local>,
    ) -> AppResult<ImportReport> {
        let Merge {
            state,
            added,
            duplicates,
            rejected,
        } = self.state.merge(incoming);

        self.repo.save(&state, now)?;
        self.state = state;

        if let Err(e) = self.repo.store().audit(
            now,
            "import",
            "",
            &format!("Imported {added} break record(s), rejected {}", rejected.len()),
        ) {
            crate::ui::messages::warning(format!("Failed to write internal log: {e}"));
        }

        Ok(ImportReport {
            added,
            duplicates,
            rejected,
        })
    }
}
