use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{AttendanceError, Result};
use crate::model::report::AttendanceRow;

pub const EXPORT_HEADER: [&str; 3] = ["Day", "Class", "Attendance Percentage"];

pub fn write_attendance_csv<W: Write>(writer: W, rows: &[AttendanceRow]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(EXPORT_HEADER)?;
    for row in rows {
        let percentage = format!("{:.2}", row.percentage);
        writer.write_record([row.day.as_str(), row.class_name.as_str(), percentage.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_attendance_csv(path: &Path, rows: &[AttendanceRow]) -> Result<()> {
    let file = File::create(path).map_err(|e| AttendanceError::file_access(path, e))?;
    write_attendance_csv(file, rows).map_err(|e| AttendanceError::sheet(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::day::Day;

    #[test]
    fn test_header_and_two_decimals() {
        let rows = vec![
            AttendanceRow { day: Day::Monday, class_name: "Math".into(), percentage: 50.0 },
            AttendanceRow { day: Day::Monday, class_name: "Data, Structures".into(), percentage: 66.67 },
        ];
        let mut out = Vec::new();
        write_attendance_csv(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Day,Class,Attendance Percentage");
        assert_eq!(lines[1], "Monday,Math,50.00");
        assert_eq!(lines[2], "Monday,\"Data, Structures\",66.67");
    }

    #[test]
    fn test_export_to_missing_directory_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = export_attendance_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, AttendanceError::FileAccess { .. }));
    }
}
