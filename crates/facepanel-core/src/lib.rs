//! facepanel-core — Admin panel controller and rendering.
//!
//! Orchestrates the resync / list / delete operations against the face
//! service and renders results into pluggable status and table sinks.
//! The controller never touches a concrete UI; front ends inject their
//! own sinks and confirmation prompt.

pub mod panel;
pub mod render;
pub mod severity;
pub mod sink;

pub use panel::{AdminPanel, PanelOutcome};
pub use render::HtmlPage;
pub use severity::Severity;
pub use sink::{ConfirmPrompt, StatusSink, TableSink, TableView};
