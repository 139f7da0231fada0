use crate::error::Result;
use crate::model::counters::CounterKind;
use crate::model::day::Day;
use crate::model::AttendanceState;

/// Durable mirror of the tracker state.
///
/// Every mutating call is all-or-nothing: either every row it touches is
/// written, or none is.
pub trait AttendanceRepository {
    fn load(&self) -> Result<AttendanceState>;
    /// Also records a zero absence count for classes that have none yet.
    fn insert_classes(&mut self, entries: &[(Day, String)]) -> Result<()>;
    /// Replaces the stored value of each listed counter.
    fn store_counters(&mut self, kind: CounterKind, values: &[(String, u32)]) -> Result<()>;
    fn clear_all(&mut self) -> Result<()>;
}
