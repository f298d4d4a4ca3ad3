//! The admin panel controller.
//!
//! Sequences each operation exactly as the panel contract requires:
//! status writes happen synchronously before their network call, and a
//! mutating call refreshes the face table only after its own response
//! is fully parsed. Nothing here guards against overlapping
//! invocations: both sinks are overwritten wholesale, so concurrent
//! completions are last-writer-wins by construction.

use crate::severity::Severity;
use crate::sink::{ConfirmPrompt, StatusSink, TableSink, TableView};
use facepanel_api::FaceApi;
use std::sync::Arc;

/// How an operation ended, for the caller's exit code. All
/// user-visible reporting flows through the sinks instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOutcome {
    Completed,
    /// The operator declined the confirmation prompt; nothing was sent.
    Declined,
    Failed,
}

pub struct AdminPanel<A> {
    api: A,
    status: Arc<dyn StatusSink>,
    table: Arc<dyn TableSink>,
    confirm: Arc<dyn ConfirmPrompt>,
}

impl<A: FaceApi> AdminPanel<A> {
    pub fn new(
        api: A,
        status: Arc<dyn StatusSink>,
        table: Arc<dyn TableSink>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self { api, status, table, confirm }
    }

    /// Fetch the registered face list and re-render the table.
    pub async fn refresh(&self) -> PanelOutcome {
        self.status.update("Loading face list...", Severity::Info);
        self.table.replace(&TableView::Loading);

        match self.api.list_faces().await {
            Ok(faces) => {
                let total = faces.len();
                self.table.replace(&TableView::Faces(faces));
                self.status
                    .update(&format!("{total} registered faces."), Severity::Info);
                PanelOutcome::Completed
            }
            Err(err) => {
                tracing::error!(error = %err, "face list fetch failed");
                self.status.update(
                    &format!("Could not reach the face service: {err}"),
                    Severity::Error,
                );
                self.table.replace(&TableView::Unavailable);
                PanelOutcome::Failed
            }
        }
    }

    /// Trigger a full index rebuild, then refresh the table.
    pub async fn resync(&self) -> PanelOutcome {
        self.status.update("Syncing face database...", Severity::Info);

        match self.api.reload_db().await {
            Ok(summary) => {
                self.status.update(
                    &format!("Sync complete. {} unique faces indexed.", summary.total_faces),
                    Severity::Success,
                );
                // Freshen the table; the sync itself already succeeded.
                let _ = self.refresh().await;
                PanelOutcome::Completed
            }
            Err(err) => {
                self.status
                    .update(&format!("Database sync failed: {err}"), Severity::Error);
                PanelOutcome::Failed
            }
        }
    }

    /// Delete a face after interactive confirmation.
    ///
    /// The table refreshes whenever the DELETE itself got through,
    /// even if the service reports a logical failure; the list may
    /// have changed either way.
    pub async fn delete(&self, name: &str) -> PanelOutcome {
        let prompt = format!(
            "Permanently delete face data for {name}? All dataset images and stored embeddings will be removed."
        );
        if !self.confirm.confirm(&prompt) {
            return PanelOutcome::Declined;
        }

        self.status
            .update(&format!("Deleting face data for {name}..."), Severity::Warning);

        match self.api.delete_face(name).await {
            Ok(outcome) => {
                let severity = if outcome.succeeded() {
                    Severity::Success
                } else {
                    Severity::Error
                };
                self.status.update(&outcome.message, severity);
                let _ = self.refresh().await;
                if severity == Severity::Error {
                    PanelOutcome::Failed
                } else {
                    PanelOutcome::Completed
                }
            }
            Err(err) => {
                self.status
                    .update(&format!("Could not delete face: {err}"), Severity::Error);
                PanelOutcome::Failed
            }
        }
    }

    /// Fetch today's attendance log into the table.
    pub async fn attendance(&self) -> PanelOutcome {
        self.status.update("Loading today's attendance...", Severity::Info);
        self.table.replace(&TableView::Loading);

        match self.api.attendance_today().await {
            Ok(entries) => {
                let total = entries.len();
                self.table.replace(&TableView::Attendance(entries));
                self.status
                    .update(&format!("{total} attendance entries today."), Severity::Info);
                PanelOutcome::Completed
            }
            Err(err) => {
                tracing::error!(error = %err, "attendance fetch failed");
                self.status.update(
                    &format!("Could not reach the face service: {err}"),
                    Severity::Error,
                );
                self.table.replace(&TableView::Unavailable);
                PanelOutcome::Failed
            }
        }
    }

    /// Clear today's attendance log after interactive confirmation.
    /// Does not touch the faces table.
    pub async fn reset_attendance(&self) -> PanelOutcome {
        let prompt =
            "Reset today's attendance logs? Every record logged today will be removed.".to_string();
        if !self.confirm.confirm(&prompt) {
            return PanelOutcome::Declined;
        }

        self.status
            .update("Resetting today's attendance logs...", Severity::Warning);

        match self.api.reset_attendance().await {
            Ok(summary) => {
                let severity = if summary.succeeded() {
                    Severity::Success
                } else {
                    Severity::Error
                };
                self.status.update(&summary.message, severity);
                if severity == Severity::Error {
                    PanelOutcome::Failed
                } else {
                    PanelOutcome::Completed
                }
            }
            Err(err) => {
                self.status.update(
                    &format!("Could not reset attendance logs: {err}"),
                    Severity::Error,
                );
                PanelOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facepanel_api::{
        ApiError, AttendanceEntry, DeleteOutcome, FaceRecord, ReloadSummary, ResetSummary,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Configurable in-memory FaceApi. A `fail_*` message makes that
    /// call return `ApiError::Network(message)`.
    #[derive(Default)]
    struct MockApi {
        faces: Vec<FaceRecord>,
        fail_list: Option<String>,
        total_faces: u32,
        fail_reload: Option<String>,
        delete: Option<DeleteOutcome>,
        fail_delete: Option<String>,
        list_calls: AtomicUsize,
        delete_calls: AtomicUsize,
    }

    impl FaceApi for MockApi {
        async fn reload_db(&self) -> Result<ReloadSummary, ApiError> {
            match &self.fail_reload {
                Some(msg) => Err(ApiError::Network(msg.clone())),
                None => Ok(ReloadSummary { total_faces: self.total_faces }),
            }
        }

        async fn list_faces(&self) -> Result<Vec<FaceRecord>, ApiError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_list {
                Some(msg) => Err(ApiError::Network(msg.clone())),
                None => Ok(self.faces.clone()),
            }
        }

        async fn delete_face(&self, _name: &str) -> Result<DeleteOutcome, ApiError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_delete {
                Some(msg) => Err(ApiError::Network(msg.clone())),
                None => Ok(self.delete.clone().expect("mock delete outcome not set")),
            }
        }

        async fn attendance_today(&self) -> Result<Vec<AttendanceEntry>, ApiError> {
            Ok(Vec::new())
        }

        async fn reset_attendance(&self) -> Result<ResetSummary, ApiError> {
            Ok(ResetSummary {
                status: "success".into(),
                message: "cleared".into(),
                deleted_count: 0,
            })
        }
    }

    /// Records every sink write so tests can assert on ordering.
    #[derive(Default)]
    struct Recorder {
        statuses: Mutex<Vec<(String, Severity)>>,
        views: Mutex<Vec<TableView>>,
    }

    impl StatusSink for Recorder {
        fn update(&self, message: &str, severity: Severity) {
            self.statuses.lock().unwrap().push((message.to_string(), severity));
        }
    }

    impl TableSink for Recorder {
        fn replace(&self, view: &TableView) {
            self.views.lock().unwrap().push(view.clone());
        }
    }

    struct Accept;
    impl ConfirmPrompt for Accept {
        fn confirm(&self, _prompt: &str) -> bool {
            true
        }
    }

    struct Decline;
    impl ConfirmPrompt for Decline {
        fn confirm(&self, _prompt: &str) -> bool {
            false
        }
    }

    fn panel_with(
        api: MockApi,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> (AdminPanel<MockApi>, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let panel = AdminPanel::new(api, recorder.clone(), recorder.clone(), confirm);
        (panel, recorder)
    }

    fn face(name: &str, count: u32) -> FaceRecord {
        FaceRecord { name: name.into(), count }
    }

    #[tokio::test]
    async fn refresh_shows_loading_then_rows_then_summary() {
        let api = MockApi { faces: vec![face("alice", 12), face("bob", 3)], ..Default::default() };
        let (panel, rec) = panel_with(api, Arc::new(Accept));

        assert_eq!(panel.refresh().await, PanelOutcome::Completed);

        let views = rec.views.lock().unwrap();
        assert_eq!(views[0], TableView::Loading);
        assert_eq!(views[1], TableView::Faces(vec![face("alice", 12), face("bob", 3)]));

        let statuses = rec.statuses.lock().unwrap();
        assert_eq!(statuses[0], ("Loading face list...".into(), Severity::Info));
        assert_eq!(statuses[1], ("2 registered faces.".into(), Severity::Info));
    }

    #[tokio::test]
    async fn refresh_failure_shows_error_placeholder() {
        let api = MockApi { fail_list: Some("timeout".into()), ..Default::default() };
        let (panel, rec) = panel_with(api, Arc::new(Accept));

        assert_eq!(panel.refresh().await, PanelOutcome::Failed);

        let statuses = rec.statuses.lock().unwrap();
        let (message, severity) = statuses.last().unwrap();
        assert_eq!(*severity, Severity::Error);
        assert!(message.contains("timeout"), "message: {message}");

        let views = rec.views.lock().unwrap();
        assert_eq!(*views, vec![TableView::Loading, TableView::Unavailable]);
    }

    #[tokio::test]
    async fn resync_reports_count_and_refreshes_once() {
        let api = MockApi { total_faces: 7, faces: vec![face("alice", 1)], ..Default::default() };
        let (panel, rec) = panel_with(api, Arc::new(Accept));

        let outcome = panel.resync().await;
        assert_eq!(outcome, PanelOutcome::Completed);
        assert_eq!(panel.api.list_calls.load(Ordering::SeqCst), 1);

        let statuses = rec.statuses.lock().unwrap();
        assert_eq!(statuses[0], ("Syncing face database...".into(), Severity::Info));
        let sync_done = &statuses[1];
        assert_eq!(sync_done.1, Severity::Success);
        assert!(sync_done.0.contains('7'), "message: {}", sync_done.0);
    }

    #[tokio::test]
    async fn resync_failure_leaves_table_untouched() {
        let api = MockApi { fail_reload: Some("connection refused".into()), ..Default::default() };
        let (panel, rec) = panel_with(api, Arc::new(Accept));

        assert_eq!(panel.resync().await, PanelOutcome::Failed);
        assert_eq!(panel.api.list_calls.load(Ordering::SeqCst), 0);
        assert!(rec.views.lock().unwrap().is_empty());

        let statuses = rec.statuses.lock().unwrap();
        let (message, severity) = statuses.last().unwrap();
        assert_eq!(*severity, Severity::Error);
        assert!(message.contains("connection refused"));
    }

    #[tokio::test]
    async fn declined_delete_is_a_silent_no_op() {
        let api = MockApi::default();
        let (panel, rec) = panel_with(api, Arc::new(Decline));

        assert_eq!(panel.delete("alice").await, PanelOutcome::Declined);
        assert_eq!(panel.api.delete_calls.load(Ordering::SeqCst), 0);
        assert!(rec.statuses.lock().unwrap().is_empty());
        assert!(rec.views.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_success_shows_server_message_verbatim() {
        let api = MockApi {
            delete: Some(DeleteOutcome { status: "success".into(), message: "Deleted bob".into() }),
            ..Default::default()
        };
        let (panel, rec) = panel_with(api, Arc::new(Accept));

        assert_eq!(panel.delete("bob").await, PanelOutcome::Completed);
        assert_eq!(panel.api.list_calls.load(Ordering::SeqCst), 1);

        let statuses = rec.statuses.lock().unwrap();
        assert_eq!(statuses[0], ("Deleting face data for bob...".into(), Severity::Warning));
        assert_eq!(statuses[1], ("Deleted bob".into(), Severity::Success));
    }

    #[tokio::test]
    async fn delete_logical_failure_still_refreshes() {
        let api = MockApi {
            delete: Some(DeleteOutcome { status: "error".into(), message: "Not found".into() }),
            ..Default::default()
        };
        let (panel, rec) = panel_with(api, Arc::new(Accept));

        assert_eq!(panel.delete("carol").await, PanelOutcome::Failed);
        assert_eq!(panel.api.list_calls.load(Ordering::SeqCst), 1);

        let statuses = rec.statuses.lock().unwrap();
        assert_eq!(statuses[1], ("Not found".into(), Severity::Error));
    }

    #[tokio::test]
    async fn delete_transport_failure_skips_refresh() {
        let api = MockApi { fail_delete: Some("broken pipe".into()), ..Default::default() };
        let (panel, rec) = panel_with(api, Arc::new(Accept));

        assert_eq!(panel.delete("dave").await, PanelOutcome::Failed);
        assert_eq!(panel.api.list_calls.load(Ordering::SeqCst), 0);

        let statuses = rec.statuses.lock().unwrap();
        let (message, severity) = statuses.last().unwrap();
        assert_eq!(*severity, Severity::Error);
        assert!(message.contains("broken pipe"));
        // No refresh means no table writes at all on this path.
        assert!(rec.views.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn declined_reset_sends_nothing() {
        let api = MockApi::default();
        let (panel, rec) = panel_with(api, Arc::new(Decline));

        assert_eq!(panel.reset_attendance().await, PanelOutcome::Declined);
        assert!(rec.statuses.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn reset_shows_server_message() {
        let api = MockApi::default();
        let (panel, rec) = panel_with(api, Arc::new(Accept));

        assert_eq!(panel.reset_attendance().await, PanelOutcome::Completed);
        let statuses = rec.statuses.lock().unwrap();
        assert_eq!(statuses.last().unwrap(), &("cleared".into(), Severity::Success));
    }

    #[tokio::test]
    async fn attendance_shows_loading_then_entries() {
        let api = MockApi::default();
        let (panel, rec) = panel_with(api, Arc::new(Accept));

        assert_eq!(panel.attendance().await, PanelOutcome::Completed);
        let views = rec.views.lock().unwrap();
        assert_eq!(views[0], TableView::Loading);
        assert_eq!(views[1], TableView::Attendance(Vec::new()));
    }
}
