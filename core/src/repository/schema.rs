//! Database schema definitions
//!
//! Column layout matches databases written by earlier releases, which
//! appended one counter row per marking instead of updating in place.

pub const SCHEDULE_TABLE: &str = "schedule";
pub const ABSENCES_TABLE: &str = "absences";
pub const CANCELLED_TABLE: &str = "cancelled_classes";

pub const CREATE_SCHEDULE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schedule (
    day TEXT,
    class_name TEXT
)
"#;

pub const CREATE_ABSENCES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS absences (
    class_name TEXT,
    absences INTEGER
)
"#;

pub const CREATE_CANCELLED_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cancelled_classes (
    class_name TEXT,
    cancelled INTEGER
)
"#;

pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_absences_class ON absences(class_name)",
    "CREATE INDEX IF NOT EXISTS idx_cancelled_class ON cancelled_classes(class_name)",
];

pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_SCHEDULE_TABLE,
        CREATE_ABSENCES_TABLE,
        CREATE_CANCELLED_TABLE,
    ];
    stmts.extend_from_slice(CREATE_INDEXES);
    stmts
}
