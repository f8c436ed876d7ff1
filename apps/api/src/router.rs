use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use booking_cell::{BookingCellState, BookingService};
use doctor_cell::router::doctor_routes;
use doctor_cell::{DoctorCellState, DoctorDirectory};
use shared_config::AppConfig;

pub fn create_router(config: &AppConfig) -> Router {
    // One directory instance for the whole process, so the roster cache is
    // shared by both cells.
    let directory = Arc::new(DoctorDirectory::new(config));

    let doctor_state = Arc::new(DoctorCellState {
        directory: Arc::clone(&directory),
        csv_export_path: config.csv_export_path.clone(),
    });
    let booking_state = Arc::new(BookingCellState {
        booking: Arc::new(BookingService::new(config, directory)),
    });

    Router::new()
        .route("/", get(|| async { "Appointment System API is running!" }))
        .nest("/api/doctors", doctor_routes(doctor_state))
        .nest("/api/bookings", booking_routes(booking_state))
}
