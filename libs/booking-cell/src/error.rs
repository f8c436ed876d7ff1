use thiserror::Error;

use doctor_cell::DirectoryError;
use shared_scheduling::SchedulingError;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("booking date {value:?} is not in dd/MM/yyyy format")]
    DateFormat { value: String },

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("booking service call failed: {0}")]
    Remote(#[from] SchedulingError),
}
