use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use doctor_cell::DirectoryError;
use shared_models::error::AppError;

use crate::error::BookingError;
use crate::models::{BookingOutcome, BookingRequest, CancellationRequest};
use crate::validation;
use crate::BookingCellState;

#[axum::debug_handler]
pub async fn book_visit(
    State(state): State<Arc<BookingCellState>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<Value>, AppError> {
    validation::validate_booking_request(&request).map_err(AppError::Validation)?;

    match state.booking.book_visit(&request).await {
        Ok(BookingOutcome::Booked(response)) => Ok(Json(json!(response))),
        Ok(BookingOutcome::NoSlot) => Err(AppError::BadRequest("NO_SLOT_FOUND".to_string())),
        Err(err) => Err(map_booking_error(err)),
    }
}

#[axum::debug_handler]
pub async fn cancel_visit(
    State(state): State<Arc<BookingCellState>>,
    Json(request): Json<CancellationRequest>,
) -> Result<Json<Value>, AppError> {
    // Zero is the "nothing to cancel" sentinel, answered without touching
    // the remote service.
    if request.booking_id == 0 {
        return Ok(Json(json!({ "status": false })));
    }

    validation::validate_cancellation_request(&request).map_err(AppError::Validation)?;

    let response = state
        .booking
        .cancel_visit(&request)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!(response)))
}

fn map_booking_error(err: BookingError) -> AppError {
    match err {
        // Format errors mean the request slipped past validation or the
        // remote data is malformed; both are server-side faults.
        BookingError::DateFormat { .. } => AppError::Internal(err.to_string()),
        BookingError::Directory(DirectoryError::SlotFormat { .. }) => {
            AppError::Internal(err.to_string())
        }
        other => AppError::BadRequest(other.to_string()),
    }
}
