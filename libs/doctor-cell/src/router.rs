use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::DoctorCellState;

pub fn doctor_routes(state: Arc<DoctorCellState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/doctors/{doctor_id}", get(handlers::get_available_slots))
        .route("/export-to-csv", get(handlers::export_to_csv))
        .with_state(state)
}
