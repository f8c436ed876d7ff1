use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// Fixed wire format for slot timestamps, e.g. `2022-05-31T10:30:00.000Z`.
pub const SLOT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// One doctor as published by the remote roster endpoint. Immutable once
/// fetched; the roster is only refreshed by re-querying the remote service.
///
/// The mock service is loose about optional fields, so everything except the
/// identifiers defaults when absent. `branch_id` is fractional on the wire
/// and treated as a decimal identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(alias = "DoctorId")]
    pub doctor_id: i32,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Gender")]
    pub gender: String,
    #[serde(default, alias = "HospitalName")]
    pub hospital_name: String,
    #[serde(alias = "HospitalId")]
    pub hospital_id: i32,
    #[serde(default, alias = "SpecialtyId")]
    pub specialty_id: i32,
    #[serde(alias = "BranchId")]
    pub branch_id: f64,
    #[serde(default, alias = "Nationality")]
    pub nationality: String,
    #[serde(default, alias = "CreatedAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The `(hospitalId, branchId)` pair the outbound booking call needs. The
/// branch identifier is truncated from the roster's fractional value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoctorIdentifiers {
    pub hospital_id: i32,
    pub branch_id: i32,
}

/// Roster payload: the remote wraps the doctor array under a `data` key.
#[derive(Debug, Deserialize)]
pub(crate) struct DoctorRoster {
    #[serde(alias = "Data")]
    pub data: Vec<Doctor>,
}

/// Schedules payload: this endpoint wraps its array under `Data`.
#[derive(Debug, Deserialize)]
pub(crate) struct SlotSchedule {
    #[serde(rename = "Data", alias = "data")]
    pub data: Vec<RawVisitSlot>,
}

/// A slot exactly as the schedules endpoint serializes it, timestamps still
/// raw strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVisitSlot {
    #[serde(alias = "DoctorId")]
    pub doctor_id: i32,
    #[serde(alias = "VisitId")]
    pub visit_id: i32,
    #[serde(alias = "Id")]
    pub id: i32,
    #[serde(alias = "StartTime")]
    pub start_time: String,
    #[serde(alias = "EndTime")]
    pub end_time: String,
}

/// A bookable time window for one doctor. Keeps both the raw UTC strings
/// (slot matching compares these verbatim) and the parsed instants.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitSlot {
    pub doctor_id: i32,
    pub visit_id: i32,
    pub id: i32,
    pub start_time_utc: String,
    pub end_time_utc: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl VisitSlot {
    /// A timestamp outside the fixed format is a fatal format error, never a
    /// silent default.
    pub fn from_raw(raw: RawVisitSlot) -> Result<Self, DirectoryError> {
        let start_time = parse_slot_time(&raw.start_time)?;
        let end_time = parse_slot_time(&raw.end_time)?;

        Ok(Self {
            doctor_id: raw.doctor_id,
            visit_id: raw.visit_id,
            id: raw.id,
            start_time_utc: raw.start_time,
            end_time_utc: raw.end_time,
            start_time,
            end_time,
        })
    }
}

pub fn parse_slot_time(value: &str) -> Result<DateTime<Utc>, DirectoryError> {
    let parsed = NaiveDateTime::parse_from_str(value, SLOT_TIME_FORMAT).map_err(|_| {
        DirectoryError::SlotFormat {
            value: value.to_string(),
        }
    })?;

    // chrono leaves the fractional part optional; the remote contract is
    // exactly three digits, so the canonical rendering must round-trip.
    if parsed.format(SLOT_TIME_FORMAT).to_string() != value {
        return Err(DirectoryError::SlotFormat {
            value: value.to_string(),
        });
    }

    Ok(parsed.and_utc())
}
