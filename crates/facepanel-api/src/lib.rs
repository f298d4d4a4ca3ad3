//! facepanel-api — Typed HTTP bindings for the face recognition service.
//!
//! Covers the admin surface of the service: index resync, face listing
//! and deletion, plus the attendance log endpoints.

pub mod client;
pub mod types;

pub use client::{ApiError, FaceApi, FacesClient};
pub use types::{AttendanceEntry, DeleteOutcome, FaceRecord, ReloadSummary, ResetSummary};
