//! Render surfaces the controller writes into.
//!
//! Both regions are overwritten wholesale on every update; there is
//! no incremental patching, so interleaved async completions can at
//! worst reorder whole writes, never corrupt state.

use crate::severity::Severity;
use facepanel_api::{AttendanceEntry, FaceRecord};

/// The status banner region.
pub trait StatusSink: Send + Sync {
    /// Replace the banner with `message` styled for `severity`.
    fn update(&self, message: &str, severity: Severity);
}

/// The table body region.
pub trait TableSink: Send + Sync {
    /// Replace the table contents with `view`.
    fn replace(&self, view: &TableView);
}

/// Yes/no gate shown before destructive operations.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Everything the table region can display.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// Placeholder shown while a fetch is in flight.
    Loading,
    /// Registered faces, in server order.
    Faces(Vec<FaceRecord>),
    /// Today's attendance log, in server order.
    Attendance(Vec<AttendanceEntry>),
    /// Placeholder shown when a fetch failed.
    Unavailable,
}
