use std::path::PathBuf;

use crate::model::day::Day;

pub type Result<T> = std::result::Result<T, AttendanceError>;

/// Error types for attendance operations
#[derive(Debug, thiserror::Error)]
pub enum AttendanceError {
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unreadable schedule sheet {}: {source}", path.display())]
    Sheet {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no file selected")]
    NoSelection,

    #[error("storage error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("unknown weekday '{0}'")]
    InvalidDay(String),

    #[error("'{class_name}' is not scheduled on {day}")]
    UnknownClass { day: Day, class_name: String },
}

impl AttendanceError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn sheet(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Sheet {
            path: path.into(),
            source,
        }
    }

    /// The user backed out of a file choice. Not a failure.
    pub fn is_no_selection(&self) -> bool {
        matches!(self, Self::NoSelection)
    }
}
