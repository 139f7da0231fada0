use tracing::info;

use crate::config::AppConfig;
use crate::error::Result;
use crate::repository::SqliteAttendanceRepository;
use crate::service::store::AttendanceStore;

/// Built once at startup and handed to whatever drives the tracker.
pub struct AppContext {
    pub config: AppConfig,
    pub store: AttendanceStore<SqliteAttendanceRepository>,
}

impl AppContext {
    pub fn open(config: AppConfig) -> Result<Self> {
        let db_path = config.database_path();
        let repo = SqliteAttendanceRepository::open(&db_path)?;
        let store = AttendanceStore::load(repo)?;
        info!("Attendance tracker ready ({}).", db_path.display());
        Ok(Self { config, store })
    }
}
