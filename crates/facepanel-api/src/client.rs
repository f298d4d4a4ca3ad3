//! HTTP client for the face service admin endpoints.

use crate::types::{
    AttendanceEntry, DeleteOutcome, FaceRecord, ListFacesResponse, ReloadSummary, ResetSummary,
};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0} from {1}")]
    Status(u16, String),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("API base URL cannot carry path segments: {0}")]
    OpaqueBase(String),
    #[error("face name must not be empty")]
    EmptyName,
}

/// Operations the admin panel performs against the face service.
///
/// [`FacesClient`] is the HTTP implementation; controller tests
/// substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait FaceApi {
    /// Trigger a full index rebuild and report the resulting count.
    async fn reload_db(&self) -> Result<ReloadSummary, ApiError>;
    /// Fetch all registered faces, in server order.
    async fn list_faces(&self) -> Result<Vec<FaceRecord>, ApiError>;
    /// Delete a face by name. HTTP success still carries a logical
    /// status flag; see [`DeleteOutcome`].
    async fn delete_face(&self, name: &str) -> Result<DeleteOutcome, ApiError>;
    /// Fetch today's attendance log.
    async fn attendance_today(&self) -> Result<Vec<AttendanceEntry>, ApiError>;
    /// Clear today's attendance log.
    async fn reset_attendance(&self) -> Result<ResetSummary, ApiError>;
}

/// reqwest-backed [`FaceApi`] implementation.
///
/// Requests are unauthenticated; any gateway auth sits in front of the
/// service. Non-2xx responses are reported uniformly as
/// [`ApiError::Status`] without inspecting the body.
pub struct FacesClient {
    http: reqwest::Client,
    base: Url,
}

impl FacesClient {
    /// Build a client for the given base URL (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(ApiError::OpaqueBase(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("facepanel/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base })
    }

    /// Join path segments onto the base URL. Each segment is
    /// percent-encoded as a whole, so a face name containing `/` or
    /// spaces stays a single segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::OpaqueBase(self.base.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }
}

fn check_status(endpoint: &str, res: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if res.status().is_success() {
        Ok(res)
    } else {
        Err(ApiError::Status(res.status().as_u16(), endpoint.to_string()))
    }
}

impl FaceApi for FacesClient {
    async fn reload_db(&self) -> Result<ReloadSummary, ApiError> {
        let url = self.endpoint(&["reload_db"])?;
        tracing::debug!(%url, "requesting index resync");
        let res = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let res = check_status("/reload_db", res)?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn list_faces(&self) -> Result<Vec<FaceRecord>, ApiError> {
        let url = self.endpoint(&["list_faces"])?;
        tracing::debug!(%url, "fetching registered faces");
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let res = check_status("/list_faces", res)?;
        let body: ListFacesResponse =
            res.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.faces)
    }

    async fn delete_face(&self, name: &str) -> Result<DeleteOutcome, ApiError> {
        if name.is_empty() {
            return Err(ApiError::EmptyName);
        }
        let url = self.endpoint(&["delete_face", name])?;
        tracing::debug!(%url, name, "deleting face");
        let res = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let res = check_status("/delete_face", res)?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn attendance_today(&self) -> Result<Vec<AttendanceEntry>, ApiError> {
        let url = self.endpoint(&["attendance", "today"])?;
        tracing::debug!(%url, "fetching today's attendance");
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let res = check_status("/attendance/today", res)?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn reset_attendance(&self) -> Result<ResetSummary, ApiError> {
        let url = self.endpoint(&["reset_absensi"])?;
        tracing::debug!(%url, "resetting today's attendance log");
        let res = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let res = check_status("/reset_absensi", res)?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}
