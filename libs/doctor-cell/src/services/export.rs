use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::DirectoryError;
use crate::services::directory::DoctorDirectory;

/// Nationality code the roster export is filtered to.
const EXPORT_NATIONALITY: &str = "TUR";

/// Maps a roster gender code to its Turkish display value. Matching is
/// case-insensitive; unknown codes pass through unchanged.
pub fn to_turkish_gender(gender: &str) -> String {
    match gender.to_lowercase().as_str() {
        "male" => "Erkek".to_string(),
        "female" => "Kadın".to_string(),
        _ => gender.to_string(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DoctorExportRow<'a> {
    name: &'a str,
    gender: String,
    hospital_name: &'a str,
    hospital_id: i32,
    specialty_id: i32,
    branch_id: f64,
    nationality: &'a str,
    doctor_id: i32,
    created_at: Option<DateTime<Utc>>,
}

/// Writes the Turkish subset of the roster to `path` as flat CSV records,
/// genders remapped to display values.
pub async fn export_turkish_doctors(
    directory: &DoctorDirectory,
    path: &str,
) -> Result<(), DirectoryError> {
    let doctors = directory.list_doctors().await?;

    let mut writer = csv::Writer::from_path(path)?;
    let mut exported = 0usize;

    for doctor in doctors.iter().filter(|d| d.nationality == EXPORT_NATIONALITY) {
        writer.serialize(DoctorExportRow {
            name: &doctor.name,
            gender: to_turkish_gender(&doctor.gender),
            hospital_name: &doctor.hospital_name,
            hospital_id: doctor.hospital_id,
            specialty_id: doctor.specialty_id,
            branch_id: doctor.branch_id,
            nationality: &doctor.nationality,
            doctor_id: doctor.doctor_id,
            created_at: doctor.created_at,
        })?;
        exported += 1;
    }

    writer.flush()?;
    info!("exported {} Turkish doctors to {}", exported, path);

    Ok(())
}
