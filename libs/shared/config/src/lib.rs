use std::env;
use tracing::warn;

pub const DEFAULT_SCHEDULING_API_URL: &str =
    "https://3aff8cc7-91f8-4577-bef3-e566d6c41d74.mock.pstmn.io";
pub const DEFAULT_BOOKING_API_URL: &str =
    "https://fe8f4f5e-f5c2-48b6-974c-097f4cec3de0.mock.pstmn.io";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scheduling_api_url: String,
    pub booking_api_url: String,
    pub csv_export_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            scheduling_api_url: env::var("SCHEDULING_API_URL")
                .unwrap_or_else(|_| {
                    warn!("SCHEDULING_API_URL not set, using default mock endpoint");
                    DEFAULT_SCHEDULING_API_URL.to_string()
                }),
            booking_api_url: env::var("BOOKING_API_URL")
                .unwrap_or_else(|_| {
                    warn!("BOOKING_API_URL not set, using default mock endpoint");
                    DEFAULT_BOOKING_API_URL.to_string()
                }),
            csv_export_path: env::var("CSV_EXPORT_PATH")
                .unwrap_or_else(|_| {
                    warn!("CSV_EXPORT_PATH not set, using default");
                    "DoctorsExport.csv".to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.scheduling_api_url.is_empty()
            && !self.booking_api_url.is_empty()
            && !self.csv_export_path.is_empty()
    }
}
