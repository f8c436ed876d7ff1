use std::sync::Arc;

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod validation;

pub use error::BookingError;
pub use models::{
    BookingOutcome, BookingRequest, BookingResponse, CancellationRequest, CancellationResponse,
};
pub use services::booking::BookingService;

/// Shared state for the booking routes.
pub struct BookingCellState {
    pub booking: Arc<BookingService>,
}
