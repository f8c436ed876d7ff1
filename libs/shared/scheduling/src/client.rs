use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("transport error calling remote service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode remote service response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl SchedulingError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SchedulingError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Thin HTTP client over one of the remote mock services. The query string
/// is assembled in caller-supplied key order with a single encoding step so
/// the outbound wire format stays deterministic.
pub struct SchedulingClient {
    client: Client,
    base_url: String,
}

impl SchedulingClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str, query: &[(&str, String)]) -> String {
        if query.is_empty() {
            return format!("{}{}", self.base_url, path);
        }

        let query_string = query
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}{}?{}", self.base_url, path, query_string)
    }

    pub async fn get_json<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SchedulingError>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, query);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        self.read_response(response).await
    }

    /// POST with all parameters on the query string and an empty body,
    /// which is what the remote booking endpoints expect.
    pub async fn post_query<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SchedulingError>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, query);
        debug!("POST {}", url);

        let response = self.client.post(&url).send().await?;
        self.read_response(response).await
    }

    async fn read_response<T>(&self, response: reqwest::Response) -> Result<T, SchedulingError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("remote service error ({}): {}", status, body);
            return Err(SchedulingError::Status { status, body });
        }

        response.json::<T>().await.map_err(SchedulingError::Decode)
    }
}
