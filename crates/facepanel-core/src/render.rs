//! HTML rendering — pure functions from panel state to markup.
//!
//! Every server-provided string (face names, attendance fields, status
//! messages) is treated as untrusted text and escaped before insertion.

use crate::sink::{StatusSink, TableSink, TableView};
use crate::severity::Severity;
use facepanel_api::{AttendanceEntry, FaceRecord};
use std::sync::Mutex;

/// Placeholder row shown while the list fetch is in flight.
pub const LOADING_ROW: &str = "<tr><td colspan=\"4\">Loading...</td></tr>";

/// Placeholder row shown when the list fetch failed.
pub const UNAVAILABLE_ROW: &str =
    "<tr><td colspan=\"4\" class=\"load-error\">Could not load face data.</td></tr>";

/// Map a severity label to its styling class.
///
/// Unknown labels fall back to the bare neutral class.
pub fn status_class(label: &str) -> &'static str {
    match label {
        "success" => "status-area bg-green-100 text-green-700",
        "error" => "status-area bg-red-100 text-red-700",
        "warning" => "status-area bg-yellow-100 text-yellow-700",
        "info" => "status-area bg-gray-100 text-gray-700",
        _ => "status-area",
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the status banner as a single element.
pub fn status_banner(message: &str, severity_label: &str) -> String {
    format!(
        "<div class=\"{}\">{}</div>",
        status_class(severity_label),
        escape_html(message)
    )
}

/// Render face records as table rows: rank, name, image count, and a
/// delete control bound to the row's name. An empty slice renders an
/// empty body.
pub fn table_body(faces: &[FaceRecord]) -> String {
    let mut out = String::new();
    for (i, face) in faces.iter().enumerate() {
        let name = escape_html(&face.name);
        out.push_str(&format!(
            "<tr><td>{rank}</td><td>{name}</td><td>{count} images</td>\
             <td><button class=\"delete-face\" data-name=\"{name}\">Delete</button></td></tr>\n",
            rank = i + 1,
            count = face.count,
        ));
    }
    out
}

/// Render attendance entries: rank, name, organization, status, time.
pub fn attendance_body(entries: &[AttendanceEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            i + 1,
            escape_html(&entry.name),
            escape_html(&entry.organization),
            escape_html(&entry.status),
            escape_html(&entry.timestamp),
        ));
    }
    out
}

/// Total mapping of a table view to its body markup.
pub fn view_body(view: &TableView) -> String {
    match view {
        TableView::Loading => LOADING_ROW.to_string(),
        TableView::Unavailable => UNAVAILABLE_ROW.to_string(),
        TableView::Faces(faces) => table_body(faces),
        TableView::Attendance(entries) => attendance_body(entries),
    }
}

/// The two DOM-visible regions as overwrite-wholesale slots.
///
/// Acts as both sinks; `snapshot` returns whatever the last writes
/// left behind, which is exactly the last-writer-wins contract the
/// panel operates under.
#[derive(Default)]
pub struct HtmlPage {
    status: Mutex<String>,
    table: Mutex<String>,
}

impl HtmlPage {
    /// The final banner + table body fragment.
    pub fn snapshot(&self) -> String {
        let status = self.status.lock().unwrap();
        let table = self.table.lock().unwrap();
        format!("{status}\n{table}")
    }
}

impl StatusSink for HtmlPage {
    fn update(&self, message: &str, severity: Severity) {
        *self.status.lock().unwrap() = status_banner(message, severity.label());
    }
}

impl TableSink for HtmlPage {
    fn replace(&self, view: &TableView) {
        *self.table.lock().unwrap() = view_body(view);
    }
}
