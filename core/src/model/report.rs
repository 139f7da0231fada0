use std::collections::BTreeMap;

use crate::model::counters::Counters;
use crate::model::day::Day;
use crate::model::schedule::Schedule;

/// Attendance of one (day, class) occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRow {
    pub day: Day,
    pub class_name: String,
    pub percentage: f64,
}

/// `(total - absences - cancellations) / total * 100`, rounded to 2 places.
///
/// `total` is the number of classes on the day, not the number of sessions
/// the class has had. The result is not clamped and goes negative once the
/// marks outnumber the day's classes.
pub fn attendance_percentage(total: usize, absences: u32, cancellations: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let attended = total - f64::from(absences) - f64::from(cancellations);
    round2(attended / total * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One row per (day, class) occurrence, in schedule order.
pub fn attendance_rows(
    schedule: &Schedule,
    absences: &Counters,
    cancellations: &Counters,
) -> Vec<AttendanceRow> {
    let mut rows = Vec::with_capacity(schedule.occurrence_count());
    for (day, classes) in schedule.iter() {
        let total = classes.len();
        for class_name in classes {
            rows.push(AttendanceRow {
                day,
                class_name: class_name.clone(),
                percentage: attendance_percentage(
                    total,
                    absences.get(class_name),
                    cancellations.get(class_name),
                ),
            });
        }
    }
    rows
}

/// Percentage per class name. A class held on several days keeps the value
/// of the last day in week order.
pub fn compute_attendance(
    schedule: &Schedule,
    absences: &Counters,
    cancellations: &Counters,
) -> BTreeMap<String, f64> {
    attendance_rows(schedule, absences, cancellations)
        .into_iter()
        .map(|row| (row.class_name, row.percentage))
        .collect()
}
