use std::sync::Arc;

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::DirectoryError;
pub use models::{Doctor, DoctorIdentifiers, RawVisitSlot, VisitSlot, SLOT_TIME_FORMAT};
pub use services::directory::DoctorDirectory;

/// Shared state for the doctor routes: the process-wide directory plus the
/// export target path.
pub struct DoctorCellState {
    pub directory: Arc<DoctorDirectory>,
    pub csv_export_path: String,
}
