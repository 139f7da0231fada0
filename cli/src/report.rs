use attendance_core::{AttendanceRepository, AttendanceStore};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Class")]
    class_name: String,
    #[tabled(rename = "Absences")]
    absences: u32,
    #[tabled(rename = "Cancelled")]
    cancelled: u32,
    #[tabled(rename = "Attendance %")]
    percentage: String,
}

/// Percentage per class as a table, or `None` when nothing is scheduled.
pub fn attendance_table<R: AttendanceRepository>(store: &AttendanceStore<R>) -> Option<String> {
    let report = store.compute_attendance();
    if report.is_empty() {
        return None;
    }

    let rows: Vec<ReportRow> = report
        .into_iter()
        .map(|(class_name, percentage)| ReportRow {
            absences: store.absences().get(&class_name),
            cancelled: store.cancellations().get(&class_name),
            percentage: format!("{:.2}%", percentage),
            class_name,
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    Some(table.to_string())
}

pub fn attendance_json<R: AttendanceRepository>(store: &AttendanceStore<R>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&store.compute_attendance())
}
