use std::collections::BTreeMap;
use std::path::Path;

use tracing::{error, info};

use crate::error::Result;
use crate::model::counters::{CounterKind, Counters};
use crate::model::day::Day;
use crate::model::report::{self, AttendanceRow};
use crate::model::schedule::Schedule;
use crate::model::AttendanceState;
use crate::repository::AttendanceRepository;
use crate::usecase::export;

/// In-memory tracker state kept in lockstep with its repository.
///
/// Mutations build the next state on a copy, write it through, and only
/// then swap it in. A failed write leaves the previous state untouched.
pub struct AttendanceStore<R: AttendanceRepository> {
    repo: R,
    state: AttendanceState,
}

impl<R: AttendanceRepository> AttendanceStore<R> {
    /// Builds a store from whatever the repository holds.
    pub fn load(repo: R) -> Result<Self> {
        let state = repo.load().inspect_err(|e| {
            error!("Error occurred while loading data: {}", e);
        })?;
        info!(
            "Data loaded successfully: {} scheduled classes.",
            state.schedule.occurrence_count()
        );
        Ok(Self { repo, state })
    }

    /// Throws away the in-memory state and reads it back from storage.
    pub fn reload(&mut self) -> Result<()> {
        self.state = self.repo.load().inspect_err(|e| {
            error!("Error occurred while loading data: {}", e);
        })?;
        Ok(())
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    pub fn state(&self) -> &AttendanceState {
        &self.state
    }

    pub fn schedule(&self) -> &Schedule {
        &self.state.schedule
    }

    pub fn absences(&self) -> &Counters {
        &self.state.absences
    }

    pub fn cancellations(&self) -> &Counters {
        &self.state.cancellations
    }

    pub fn classes_on(&self, day: Day) -> &[String] {
        self.state.schedule.classes_on(day)
    }

    pub fn add_class(&mut self, day: Day, class_name: &str) -> Result<()> {
        self.add_classes(&[(day, class_name.to_string())])
    }

    /// Appends every (day, class) pair in one transaction.
    pub fn add_classes(&mut self, entries: &[(Day, String)]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut next = self.state.clone();
        for (day, class_name) in entries {
            next.schedule.add(*day, class_name.clone());
            next.absences.ensure(class_name);
        }

        self.repo.insert_classes(entries).inspect_err(|e| {
            error!("Error occurred while adding class: {}", e);
        })?;
        self.state = next;

        for (day, class_name) in entries {
            info!("Class added successfully: {} on {}.", class_name, day);
        }
        Ok(())
    }

    pub fn record_absences<S: AsRef<str>>(&mut self, class_names: &[S]) -> Result<Vec<(String, u32)>> {
        self.record(CounterKind::Absences, class_names)
    }

    pub fn record_cancellations<S: AsRef<str>>(
        &mut self,
        class_names: &[S],
    ) -> Result<Vec<(String, u32)>> {
        self.record(CounterKind::Cancellations, class_names)
    }

    fn record<S: AsRef<str>>(
        &mut self,
        kind: CounterKind,
        class_names: &[S],
    ) -> Result<Vec<(String, u32)>> {
        if class_names.is_empty() {
            return Ok(Vec::new());
        }

        let mut next = self.state.counters(kind).clone();
        let mut updated: BTreeMap<String, u32> = BTreeMap::new();
        for name in class_names {
            let name = name.as_ref();
            let value = next.increment(name);
            updated.insert(name.to_string(), value);
        }
        let updated: Vec<(String, u32)> = updated.into_iter().collect();

        self.repo.store_counters(kind, &updated).inspect_err(|e| {
            error!("Error occurred while storing {}: {}", kind.label(), e);
        })?;
        *self.state.counters_mut(kind) = next;

        info!("Recorded {} for {} classes.", kind.label(), updated.len());
        Ok(updated)
    }

    pub fn compute_attendance(&self) -> BTreeMap<String, f64> {
        report::compute_attendance(
            &self.state.schedule,
            &self.state.absences,
            &self.state.cancellations,
        )
    }

    pub fn attendance_rows(&self) -> Vec<AttendanceRow> {
        report::attendance_rows(
            &self.state.schedule,
            &self.state.absences,
            &self.state.cancellations,
        )
    }

    pub fn reset_all(&mut self) -> Result<()> {
        self.repo.clear_all().inspect_err(|e| {
            error!("Error occurred while resetting data: {}", e);
        })?;
        self.state.clear();
        info!("All data has been reset.");
        Ok(())
    }

    /// Writes one CSV row per (day, class) occurrence; returns the row count.
    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        let rows = self.attendance_rows();
        export::export_attendance_csv(path, &rows).inspect_err(|e| {
            error!("Error occurred while generating updated attendance CSV: {}", e);
        })?;
        info!("Updated attendance data saved to {}.", path.display());
        Ok(rows.len())
    }
}
