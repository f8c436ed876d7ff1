use thiserror::Error;

use shared_scheduling::SchedulingError;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("doctor {0} not found in roster")]
    DoctorNotFound(i32),

    #[error("scheduling service call failed: {0}")]
    Remote(#[from] SchedulingError),

    #[error("slot timestamp {value:?} does not match the fixed UTC format")]
    SlotFormat { value: String },

    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("CSV export I/O failed: {0}")]
    ExportIo(#[from] std::io::Error),
}
