use std::fs::{self, File};
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::error::{AttendanceError, Result};
use crate::model::day::Day;
use crate::repository::AttendanceRepository;
use crate::service::store::AttendanceStore;

pub const CLASS_COLUMNS: usize = 6;

// Header names are the sheet contract; empty cells come through as None.
#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Day", default)]
    day: Option<String>,
    #[serde(rename = "Class1", default)]
    class1: Option<String>,
    #[serde(rename = "Class2", default)]
    class2: Option<String>,
    #[serde(rename = "Class3", default)]
    class3: Option<String>,
    #[serde(rename = "Class4", default)]
    class4: Option<String>,
    #[serde(rename = "Class5", default)]
    class5: Option<String>,
    #[serde(rename = "Class6", default)]
    class6: Option<String>,
}

impl SheetRow {
    fn classes(self) -> impl Iterator<Item = String> {
        [
            self.class1,
            self.class2,
            self.class3,
            self.class4,
            self.class5,
            self.class6,
        ]
        .into_iter()
        .flatten()
        .filter(|c| !c.is_empty())
    }
}

pub fn template_header() -> Vec<String> {
    let mut header = vec!["Day".to_string()];
    header.extend((1..=CLASS_COLUMNS).map(|i| format!("Class{}", i)));
    header
}

/// Writes an empty sheet: the header plus one row per weekday.
pub fn generate_template(path: &Path) -> Result<()> {
    write_template(path).inspect_err(|e| {
        error!("Error occurred while generating the schedule template: {}", e);
    })?;
    info!("Schedule template generated successfully at {}.", path.display());
    Ok(())
}

fn write_template(path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| AttendanceError::file_access(path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    let write = |writer: &mut csv::Writer<File>| -> csv::Result<()> {
        writer.write_record(template_header())?;
        for day in Day::ALL {
            let mut record = vec![day.as_str()];
            record.extend(std::iter::repeat("").take(CLASS_COLUMNS));
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    };
    write(&mut writer).map_err(|e| AttendanceError::sheet(path, e))
}

/// Parses every (day, class) pair out of a schedule sheet.
///
/// The whole file is read before anything is returned, so a bad row late in
/// the sheet rejects the import as a whole.
pub fn read_schedule_sheet(path: &Path) -> Result<Vec<(Day, String)>> {
    let file = File::open(path).map_err(|e| AttendanceError::file_access(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut entries = Vec::new();
    for result in reader.deserialize::<SheetRow>() {
        let mut row = result.map_err(|e| AttendanceError::sheet(path, e))?;
        let day = row.day.take().filter(|d| !d.is_empty());
        let classes: Vec<String> = row.classes().collect();

        let day = match day {
            Some(day) => day.parse::<Day>()?,
            None if classes.is_empty() => continue,
            None => return Err(AttendanceError::InvalidDay(String::new())),
        };
        entries.extend(classes.into_iter().map(|c| (day, c)));
    }
    Ok(entries)
}

/// Imports a schedule sheet into the store and keeps a copy of it at
/// `archive`. Returns how many classes were added, possibly zero.
pub fn register_schedule<R: AttendanceRepository>(
    store: &mut AttendanceStore<R>,
    path: &Path,
    archive: Option<&Path>,
) -> Result<usize> {
    let entries = read_schedule_sheet(path).inspect_err(|e| {
        error!("Error occurred while reading the class schedule: {}", e);
    })?;
    store.add_classes(&entries)?;

    if let Some(archive) = archive {
        if archive != path {
            if let Err(e) = fs::copy(path, archive) {
                warn!("Could not keep a copy of the schedule at {}: {}", archive.display(), e);
            }
        }
    }

    info!("New user registration successful: {} classes added.", entries.len());
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_sheet(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("schedule.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_template_has_header_and_seven_days() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.csv");
        generate_template(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Day,Class1,Class2,Class3,Class4,Class5,Class6");
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "Monday,,,,,,");

        // An untouched template imports cleanly with nothing in it.
        assert!(read_schedule_sheet(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_skips_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sheet(
            dir.path(),
            "Day,Class1,Class2,Class3,Class4,Class5,Class6\n\
             Monday,Math,,Science,,,\n\
             tuesday, Physics ,,,,,\n\
             Wednesday,,,,,,\n",
        );

        let entries = read_schedule_sheet(&path).unwrap();
        assert_eq!(
            entries,
            vec![
                (Day::Monday, "Math".to_string()),
                (Day::Monday, "Science".to_string()),
                (Day::Tuesday, "Physics".to_string()),
            ]
        );
    }

    #[test]
    fn test_read_accepts_fewer_class_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sheet(dir.path(), "Day,Class1,Class2\nFriday,Art,Music\n");
        assert_eq!(read_schedule_sheet(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_read_rejects_unknown_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sheet(dir.path(), "Day,Class1\nFunday,Art\n");
        assert!(matches!(
            read_schedule_sheet(&path),
            Err(AttendanceError::InvalidDay(d)) if d == "Funday"
        ));
    }

    #[test]
    fn test_read_missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_schedule_sheet(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, AttendanceError::FileAccess { .. }));
    }
}
