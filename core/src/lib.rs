pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{load_config, AppConfig};
pub use context::AppContext;
pub use error::{AttendanceError, Result};
pub use input::{expand_key, parse_answer};
pub use model::counters::{CounterKind, Counters};
pub use model::day::Day;
pub use model::report::{attendance_percentage, AttendanceRow};
pub use model::schedule::Schedule;
pub use model::AttendanceState;
pub use repository::{AttendanceRepository, SqliteAttendanceRepository};
pub use service::store::AttendanceStore;
pub use time::{parse_human_day, resolve_day};
pub use usecase::export::write_attendance_csv;
pub use usecase::registration::{generate_template, read_schedule_sheet, register_schedule};
