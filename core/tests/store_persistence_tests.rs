use std::path::Path;

use attendance_core::{
    register_schedule, AttendanceStore, Day, SqliteAttendanceRepository,
};
use tempfile::TempDir;

fn open_store(path: &Path) -> AttendanceStore<SqliteAttendanceRepository> {
    let repo = SqliteAttendanceRepository::open(path).expect("open database");
    AttendanceStore::load(repo).expect("load store")
}

#[test]
fn schedule_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("attendance.db");

    let schedule = {
        let mut store = open_store(&db);
        store.add_class(Day::Monday, "Math").unwrap();
        store.add_class(Day::Monday, "Science").unwrap();
        store.add_class(Day::Monday, "Math").unwrap();
        store.add_class(Day::Thursday, "History").unwrap();
        store.schedule().clone()
    };

    let reopened = open_store(&db);
    assert_eq!(reopened.schedule(), &schedule);
}

#[test]
fn counters_survive_reopen_with_latest_value() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("attendance.db");

    {
        let mut store = open_store(&db);
        store.add_class(Day::Monday, "Math").unwrap();
        store.add_class(Day::Monday, "Science").unwrap();
        store.record_absences(&["Math"]).unwrap();
        store.record_absences(&["Math"]).unwrap();
        store.record_cancellations(&["Science"]).unwrap();
    }

    let store = open_store(&db);
    assert_eq!(store.absences().get("Math"), 2);
    assert_eq!(store.cancellations().get("Science"), 1);
    assert_eq!(store.compute_attendance()["Math"], 0.0);
    assert_eq!(store.compute_attendance()["Science"], 50.0);
}

#[test]
fn new_class_counter_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("attendance.db");

    {
        let mut store = open_store(&db);
        store.add_class(Day::Tuesday, "Biology").unwrap();
        assert!(store.absences().contains("Biology"));
    }

    let store = open_store(&db);
    assert!(store.absences().contains("Biology"));
    assert_eq!(store.absences().get("Biology"), 0);
}

#[test]
fn reset_is_durable() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("attendance.db");

    {
        let mut store = open_store(&db);
        store.add_class(Day::Friday, "Art").unwrap();
        store.record_absences(&["Art"]).unwrap();
        store.reset_all().unwrap();
        assert!(store.compute_attendance().is_empty());
    }

    let store = open_store(&db);
    assert!(store.state().is_empty());
    assert!(store.compute_attendance().is_empty());
}

#[test]
fn export_writes_one_row_per_occurrence() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir.path().join("attendance.db"));
    store.add_class(Day::Monday, "Math").unwrap();
    store.add_class(Day::Monday, "Science").unwrap();
    store.add_class(Day::Wednesday, "Math").unwrap();
    store.record_absences(&["Math"]).unwrap();

    let out = dir.path().join("updated_attendance.csv");
    let written = store.export_csv(&out).unwrap();
    assert_eq!(written, store.schedule().occurrence_count());

    let mut reader = csv::Reader::from_path(&out).unwrap();
    let header = reader.headers().unwrap().clone();
    assert_eq!(header, vec!["Day", "Class", "Attendance Percentage"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["Monday", "Math", "50.00"]);
    assert_eq!(rows[1], vec!["Monday", "Science", "100.00"]);
    // Same absence counter, different day length.
    assert_eq!(rows[2], vec!["Wednesday", "Math", "0.00"]);
}

#[test]
fn register_imports_sheet_and_keeps_copy() {
    let dir = TempDir::new().unwrap();
    let sheet = dir.path().join("my_schedule.csv");
    std::fs::write(
        &sheet,
        "Day,Class1,Class2,Class3,Class4,Class5,Class6\n\
         Monday,Math,Science,,,,\n\
         Tuesday,,,,,,\n\
         Friday,Art,,,,,\n",
    )
    .unwrap();
    let copy = dir.path().join("class_schedule_data.csv");

    let db = dir.path().join("attendance.db");
    let mut store = open_store(&db);
    let added = register_schedule(&mut store, &sheet, Some(&copy)).unwrap();

    assert_eq!(added, 3);
    assert!(copy.exists());
    assert_eq!(store.classes_on(Day::Monday), ["Math", "Science"]);
    assert_eq!(store.absences().get("Art"), 0);

    drop(store);
    assert_eq!(open_store(&db).schedule().occurrence_count(), 3);
}

#[test]
fn bad_sheet_adds_nothing() {
    let dir = TempDir::new().unwrap();
    let sheet = dir.path().join("bad.csv");
    std::fs::write(&sheet, "Day,Class1\nMonday,Math\nNoday,Art\n").unwrap();

    let mut store = open_store(&dir.path().join("attendance.db"));
    assert!(register_schedule(&mut store, &sheet, None).is_err());
    assert!(store.schedule().is_empty());
}
