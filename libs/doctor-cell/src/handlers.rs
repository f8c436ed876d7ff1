use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::error;

use shared_models::error::AppError;

use crate::error::DirectoryError;
use crate::models::{Doctor, VisitSlot};
use crate::services::export;
use crate::DoctorCellState;

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<DoctorCellState>>,
) -> Result<Json<Vec<Doctor>>, AppError> {
    let doctors = state
        .directory
        .list_doctors()
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(doctors))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<i32>,
) -> Result<Json<Vec<VisitSlot>>, AppError> {
    let slots = state
        .directory
        .list_slots(doctor_id)
        .await
        .map_err(|err| match err {
            DirectoryError::DoctorNotFound(_) => AppError::NotFound("NO_DOCTOR_FOUND".to_string()),
            DirectoryError::SlotFormat { .. } => AppError::Internal(err.to_string()),
            other => AppError::ExternalService(other.to_string()),
        })?;

    if slots.is_empty() {
        return Err(AppError::NotFound("NO_SLOT_FOUND".to_string()));
    }

    Ok(Json(slots))
}

#[axum::debug_handler]
pub async fn export_to_csv(State(state): State<Arc<DoctorCellState>>) -> Result<String, AppError> {
    export::export_turkish_doctors(&state.directory, &state.csv_export_path)
        .await
        .map_err(|err| {
            error!("CSV export failed: {}", err);
            AppError::Internal("An error occurred while exporting data to CSV.".to_string())
        })?;

    Ok("Data exported to CSV successfully".to_string())
}
