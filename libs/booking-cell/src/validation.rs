use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use shared_models::error::FieldViolation;

use crate::models::{BookingRequest, CancellationRequest, REQUEST_DATE_FORMAT};

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0[0-9]|1[0-9]|2[0-3]):[0-5][0-9]$").expect("valid time pattern")
    })
}

pub fn validate_booking_request(request: &BookingRequest) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if request.date.is_empty() {
        violations.push(FieldViolation::new("date", "Date is required"));
    } else if NaiveDate::parse_from_str(&request.date, REQUEST_DATE_FORMAT).is_err() {
        violations.push(FieldViolation::new("date", "Invalid date format or value"));
    }

    if request.start_time.is_empty() {
        violations.push(FieldViolation::new("startTime", "Start Time is required"));
    } else if !time_pattern().is_match(&request.start_time) {
        violations.push(FieldViolation::new(
            "startTime",
            "Start Time must be in HH:mm format",
        ));
    }

    if request.end_time.is_empty() {
        violations.push(FieldViolation::new("endTime", "End Time is required"));
    } else if !time_pattern().is_match(&request.end_time) {
        violations.push(FieldViolation::new(
            "endTime",
            "End Time must be in HH:mm format",
        ));
    }

    if request.doctor_name.is_empty() {
        violations.push(FieldViolation::new("doctorName", "Doctor Name is required"));
    }

    if request.patient_name.is_empty() {
        violations.push(FieldViolation::new("patientName", "Patient Name is required"));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

pub fn validate_cancellation_request(
    request: &CancellationRequest,
) -> Result<(), Vec<FieldViolation>> {
    if request.booking_id <= 0 {
        return Err(vec![FieldViolation::new(
            "bookingId",
            "BookingId must be greater than 0.",
        )]);
    }

    Ok(())
}
