use serde::{Deserialize, Serialize};

/// Wire format of the inbound booking date, e.g. `31/05/2022`.
pub const REQUEST_DATE_FORMAT: &str = "%d/%m/%Y";

/// One booking attempt as submitted by the client. Lives only for the
/// duration of the call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub patient_name: String,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    pub doctor_name: String,
}

/// The remote booking service's answer, relayed verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CancellationRequest {
    pub booking_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationResponse {
    pub status: bool,
}

/// What the orchestrator resolved a booking request to. `NoSlot` covers
/// every business "not found" outcome: unknown doctor, missing identifiers,
/// or no slot matching the requested window.
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    Booked(BookingResponse),
    NoSlot,
}
