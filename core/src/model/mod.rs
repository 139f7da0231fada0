pub mod counters;
pub mod day;
pub mod report;
pub mod schedule;

use counters::{CounterKind, Counters};
use schedule::Schedule;

/// Everything the tracker remembers: the weekly plan and both tallies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceState {
    pub schedule: Schedule,
    pub absences: Counters,
    pub cancellations: Counters,
}

impl AttendanceState {
    pub fn counters(&self, kind: CounterKind) -> &Counters {
        match kind {
            CounterKind::Absences => &self.absences,
            CounterKind::Cancellations => &self.cancellations,
        }
    }

    pub fn counters_mut(&mut self, kind: CounterKind) -> &mut Counters {
        match kind {
            CounterKind::Absences => &mut self.absences,
            CounterKind::Cancellations => &mut self.cancellations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty() && self.absences.is_empty() && self.cancellations.is_empty()
    }

    pub fn clear(&mut self) {
        self.schedule.clear();
        self.absences.clear();
        self.cancellations.clear();
    }
}
