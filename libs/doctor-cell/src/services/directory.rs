use tokio::sync::OnceCell;
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_scheduling::SchedulingClient;

use crate::error::DirectoryError;
use crate::models::{Doctor, DoctorIdentifiers, DoctorRoster, SlotSchedule, VisitSlot};

/// In-process view of the remote doctor roster and per-doctor slot lists.
///
/// The roster is fetched once, cached for the lifetime of the directory and
/// never invalidated until process restart. A failed fetch leaves the cache
/// empty so the next caller retries.
pub struct DoctorDirectory {
    client: SchedulingClient,
    roster: OnceCell<Vec<Doctor>>,
}

impl DoctorDirectory {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: SchedulingClient::new(&config.scheduling_api_url),
            roster: OnceCell::new(),
        }
    }

    async fn roster(&self) -> Result<&[Doctor], DirectoryError> {
        let doctors = self
            .roster
            .get_or_try_init(|| async {
                let roster: DoctorRoster = self.client.get_json("/fetchDoctors", &[]).await?;
                debug!("cached roster of {} doctors", roster.data.len());
                Ok::<_, DirectoryError>(roster.data)
            })
            .await?;

        Ok(doctors.as_slice())
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, DirectoryError> {
        Ok(self.roster().await?.to_vec())
    }

    /// Exact case-sensitive name match; first match wins when names repeat.
    pub async fn find_doctor_id_by_name(
        &self,
        doctor_name: &str,
    ) -> Result<Option<i32>, DirectoryError> {
        Ok(self
            .roster()
            .await?
            .iter()
            .find(|doctor| doctor.name == doctor_name)
            .map(|doctor| doctor.doctor_id))
    }

    pub async fn doctor_identifiers(
        &self,
        doctor_id: i32,
    ) -> Result<Option<DoctorIdentifiers>, DirectoryError> {
        Ok(self
            .roster()
            .await?
            .iter()
            .find(|doctor| doctor.doctor_id == doctor_id)
            .map(|doctor| DoctorIdentifiers {
                hospital_id: doctor.hospital_id,
                // The roster carries a fractional branch identifier; the
                // booking contract wants it truncated.
                branch_id: doctor.branch_id as i32,
            }))
    }

    /// Slot list for one doctor. A remote 404 means an empty schedule, not a
    /// failure; any other remote error is surfaced as such.
    pub async fn list_slots(&self, doctor_id: i32) -> Result<Vec<VisitSlot>, DirectoryError> {
        let known = self
            .roster()
            .await?
            .iter()
            .any(|doctor| doctor.doctor_id == doctor_id);
        if !known {
            return Err(DirectoryError::DoctorNotFound(doctor_id));
        }

        let schedule: SlotSchedule = match self
            .client
            .get_json("/fetchSchedules", &[("doctorId", doctor_id.to_string())])
            .await
        {
            Ok(schedule) => schedule,
            Err(err) if err.is_not_found() => return Ok(Vec::new()),
            Err(err) => {
                warn!("failed to fetch schedules for doctor {}: {}", doctor_id, err);
                return Err(err.into());
            }
        };

        schedule.data.into_iter().map(VisitSlot::from_raw).collect()
    }
}
