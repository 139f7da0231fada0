pub mod schema;
pub mod sqlite;
pub mod traits;

// Re-export
pub use sqlite::SqliteAttendanceRepository;
pub use traits::AttendanceRepository;
