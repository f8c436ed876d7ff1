use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers;
use crate::BookingCellState;

pub fn booking_routes(state: Arc<BookingCellState>) -> Router {
    Router::new()
        .route("/book", post(handlers::book_visit))
        .route("/cancel", post(handlers::cancel_visit))
        .with_state(state)
}
