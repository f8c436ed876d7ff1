use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info};

use doctor_cell::DoctorDirectory;
use shared_config::AppConfig;
use shared_scheduling::SchedulingClient;

use crate::error::BookingError;
use crate::models::{
    BookingOutcome, BookingRequest, BookingResponse, CancellationRequest, CancellationResponse,
    REQUEST_DATE_FORMAT,
};
use crate::services::matching::find_matching_slot;

/// Resolves a booking request against the doctor directory and relays it to
/// the remote booking service. The remote owns the appointment ledger; this
/// service never stores booking state.
pub struct BookingService {
    client: SchedulingClient,
    directory: Arc<DoctorDirectory>,
}

impl BookingService {
    pub fn new(config: &AppConfig, directory: Arc<DoctorDirectory>) -> Self {
        Self {
            client: SchedulingClient::new(&config.booking_api_url),
            directory,
        }
    }

    pub async fn book_visit(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingOutcome, BookingError> {
        let Some(doctor_id) = self
            .directory
            .find_doctor_id_by_name(&request.doctor_name)
            .await?
        else {
            info!("no doctor named {:?} in roster", request.doctor_name);
            return Ok(BookingOutcome::NoSlot);
        };

        let Some(identifiers) = self.directory.doctor_identifiers(doctor_id).await? else {
            return Ok(BookingOutcome::NoSlot);
        };

        let start_time_utc = canonical_slot_time(&request.date, &request.start_time)?;
        let end_time_utc = canonical_slot_time(&request.date, &request.end_time)?;

        let slots = self.directory.list_slots(doctor_id).await?;
        let Some(slot) = find_matching_slot(&slots, doctor_id, &start_time_utc, &end_time_utc)
        else {
            info!(
                "no slot for doctor {} between {} and {}",
                doctor_id, start_time_utc, end_time_utc
            );
            return Ok(BookingOutcome::NoSlot);
        };

        let (patient_name, patient_surname) = split_patient_name(&request.patient_name);

        // Times and date go out exactly as the caller supplied them; only
        // the visit and identifier fields come from the resolved slot.
        let query = [
            ("VisitId", slot.visit_id.to_string()),
            ("startTime", request.start_time.clone()),
            ("endTime", request.end_time.clone()),
            ("date", request.date.clone()),
            ("PatientName", patient_name.to_string()),
            ("PatientSurname", patient_surname.to_string()),
            ("hospitalId", identifiers.hospital_id.to_string()),
            ("doctorId", doctor_id.to_string()),
            ("branchId", identifiers.branch_id.to_string()),
        ];

        match self
            .client
            .post_query::<BookingResponse>("/BookVisit", &query)
            .await
        {
            Ok(response) => {
                info!("booking request processed successfully");
                Ok(BookingOutcome::Booked(response))
            }
            Err(err) => {
                error!("an error occurred while processing booking request: {}", err);
                Err(err.into())
            }
        }
    }

    pub async fn cancel_visit(
        &self,
        request: &CancellationRequest,
    ) -> Result<CancellationResponse, BookingError> {
        let query = [("BookingID", request.booking_id.to_string())];

        match self
            .client
            .post_query::<CancellationResponse>("/bookVisit", &query)
            .await
        {
            Ok(response) => {
                info!("cancellation request processed successfully");
                Ok(response)
            }
            Err(err) => {
                error!(
                    "an error occurred while processing cancellation request: {}",
                    err
                );
                Err(err.into())
            }
        }
    }
}

/// `dd/MM/yyyy` + `HH:mm` -> `yyyy-MM-ddTHH:mm:00.000Z`, the schedule's
/// fixed slot format. A malformed date here is fatal; the validator should
/// have rejected it upstream.
fn canonical_slot_time(date: &str, time: &str) -> Result<String, BookingError> {
    let date =
        NaiveDate::parse_from_str(date, REQUEST_DATE_FORMAT).map_err(|_| BookingError::DateFormat {
            value: date.to_string(),
        })?;

    Ok(format!("{}T{}:00.000Z", date.format("%Y-%m-%d"), time))
}

/// First space splits given name from surname; the surname is empty when the
/// caller sent a single token.
fn split_patient_name(full_name: &str) -> (&str, &str) {
    match full_name.split_once(' ') {
        Some((first, rest)) => (first, rest),
        None => (full_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_slot_time_reformats_date_and_pads_seconds() {
        assert_eq!(
            canonical_slot_time("31/05/2022", "10:30").unwrap(),
            "2022-05-31T10:30:00.000Z"
        );
    }

    #[test]
    fn canonical_slot_time_rejects_malformed_date() {
        let err = canonical_slot_time("2022-05-31", "10:30").unwrap_err();
        assert!(matches!(err, BookingError::DateFormat { .. }));
    }

    #[test]
    fn patient_name_splits_on_first_space() {
        assert_eq!(split_patient_name("John Doe"), ("John", "Doe"));
        assert_eq!(
            split_patient_name("John van der Berg"),
            ("John", "van der Berg")
        );
        assert_eq!(split_patient_name("Prince"), ("Prince", ""));
    }
}
