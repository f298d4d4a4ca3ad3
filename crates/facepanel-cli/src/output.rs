//! Terminal sinks: status lines on stderr, tables on stdout.

use facepanel_api::{AttendanceEntry, FaceRecord};
use facepanel_core::{ConfirmPrompt, Severity, StatusSink, TableSink, TableView};
use std::io::{self, Write};

/// Status banner as a stream of stderr lines. A terminal cannot
/// overwrite a region, so each update prints on its own line and the
/// last one read is the current state.
pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn update(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => eprintln!("error: {message}"),
            Severity::Warning => eprintln!("warning: {message}"),
            _ => eprintln!("{message}"),
        }
    }
}

/// Table region as aligned text on stdout. Transient placeholder views
/// print nothing; the status line already narrates them.
pub struct ConsoleTable;

impl TableSink for ConsoleTable {
    fn replace(&self, view: &TableView) {
        match view {
            TableView::Loading | TableView::Unavailable => {}
            TableView::Faces(faces) => print_faces(faces),
            TableView::Attendance(entries) => print_attendance(entries),
        }
    }
}

fn print_faces(faces: &[FaceRecord]) {
    if faces.is_empty() {
        println!("no faces registered");
        return;
    }
    let width = faces
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    println!("{:>4}  {:<width$}  {:>6}", "#", "NAME", "IMAGES");
    for (i, face) in faces.iter().enumerate() {
        println!("{:>4}  {:<width$}  {:>6}", i + 1, face.name, face.count);
    }
}

fn print_attendance(entries: &[AttendanceEntry]) {
    if entries.is_empty() {
        println!("no attendance recorded today");
        return;
    }
    let name_w = column_width(entries.iter().map(|e| e.name.as_str()), "NAME");
    let org_w = column_width(entries.iter().map(|e| e.organization.as_str()), "ORGANIZATION");
    let status_w = column_width(entries.iter().map(|e| e.status.as_str()), "STATUS");
    println!(
        "{:>4}  {:<name_w$}  {:<org_w$}  {:<status_w$}  {}",
        "#", "NAME", "ORGANIZATION", "STATUS", "TIME"
    );
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>4}  {:<name_w$}  {:<org_w$}  {:<status_w$}  {}",
            i + 1,
            entry.name,
            entry.organization,
            entry.status,
            entry.timestamp,
        );
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

/// `[y/N]` prompt on the controlling terminal. Anything but an
/// explicit `y` declines, including a read failure.
pub struct TermConfirm;

impl ConfirmPrompt for TermConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N]: ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        input.trim().eq_ignore_ascii_case("y")
    }
}

/// Non-interactive confirmation for `--yes` runs.
pub struct AssumeYes;

impl ConfirmPrompt for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
