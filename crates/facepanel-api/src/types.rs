use serde::{Deserialize, Serialize};

/// A registered face identity with its dataset image count.
///
/// Snapshots are never cached client-side; the panel re-fetches the
/// list after every mutating call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRecord {
    /// Unique identity name, as stored by the service.
    pub name: String,
    /// Number of dataset images held for this identity.
    pub count: u32,
}

/// Wire shape of `GET /list_faces`. Ordering is server-determined.
#[derive(Debug, Clone, Deserialize)]
pub struct ListFacesResponse {
    pub faces: Vec<FaceRecord>,
}

/// Wire shape of `POST /reload_db`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReloadSummary {
    /// Unique faces indexed after the rebuild.
    pub total_faces: u32,
}

/// Wire shape of `DELETE /delete_face/{name}`.
///
/// An HTTP 200 does not imply the delete took effect; the service
/// reports logical failure through the `status` flag while the
/// `message` carries operator-facing text either way.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteOutcome {
    pub status: String,
    pub message: String,
}

impl DeleteOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == "success"
    }
}

/// Wire shape of `POST /reset_absensi`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetSummary {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub deleted_count: u64,
}

impl ResetSummary {
    pub fn succeeded(&self) -> bool {
        self.status == "success"
    }
}

/// One row of `GET /attendance/today` (a bare JSON array).
///
/// The service predates this client and speaks Indonesian field names
/// on the wire; they are renamed here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub name: String,
    #[serde(rename = "instansi", default)]
    pub organization: String,
    #[serde(rename = "kategori", default)]
    pub category: String,
    /// Display status, e.g. "MASUK (Tepat Waktu)".
    pub status: String,
    /// Clock time of the latest log entry, HH:MM:SS.
    pub timestamp: String,
    #[serde(default)]
    pub image_path: Option<String>,
}
