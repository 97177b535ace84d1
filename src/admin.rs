//! Admin dashboard panels rendered from endpoint payloads.
//!
//! Values are inserted without escaping, like the chat tables. Missing
//! numeric columns render as empty cells.

use std::borrow::Cow;
use std::fmt::Write;

use crate::api::{ChatLogEntry, Student};
use crate::config::RenderOptions;

const STUDENT_HEADERS: [&str; 7] = [
    "Serial No",
    "Roll No",
    "Name",
    "Major",
    "GPA",
    "Attendance",
    "Actions",
];

const CHAT_LOG_HEADERS: [&str; 5] = ["Time", "User Type", "User ID", "Query", "Response"];

/// The two data panels on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Students,
    ChatLogs,
}

impl Panel {
    /// Paragraph shown when the payload is an empty list.
    #[must_use]
    pub const fn empty_html(self) -> &'static str {
        match self {
            Self::Students => "<p>No students found.</p>",
            Self::ChatLogs => "<p>No chat logs found.</p>",
        }
    }

    /// Alert shown when loading the panel failed.
    #[must_use]
    pub const fn error_html(self) -> &'static str {
        match self {
            Self::Students => "<div class=\"alert alert-danger\">Error loading student data.</div>",
            Self::ChatLogs => "<div class=\"alert alert-danger\">Error loading chat logs.</div>",
        }
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `...`.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

fn opt_display<T: std::fmt::Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Builds the dashboard panel fragments.
#[derive(Debug, Clone, Default)]
pub struct AdminRenderer {
    options: RenderOptions,
}

impl AdminRenderer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn open_table(&self, out: &mut String, headers: &[&str]) {
        out.push_str(&self.options.table_open_tag());
        out.push_str("<thead><tr>");
        for header in headers {
            let _ = write!(out, "<th>{header}</th>");
        }
        out.push_str("</tr></thead><tbody>");
    }

    /// The student table, or the empty-list paragraph.
    #[must_use]
    pub fn student_list(&self, students: &[Student]) -> String {
        if students.is_empty() {
            return Panel::Students.empty_html().to_string();
        }

        let mut out = String::new();
        self.open_table(&mut out, &STUDENT_HEADERS);
        for student in students {
            let major = student.major.as_deref().unwrap_or_default();
            let gpa = opt_display(student.current_gpa.as_ref());
            let attendance = opt_display(student.attendance_percentage.as_ref());
            let _ = write!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{major}</td><td>{gpa}</td>\
                 <td>{attendance}%</td><td><button class=\"btn btn-sm btn-danger delete-student\" \
                 data-id=\"{}\">Delete</button></td></tr>",
                student.serial_no, student.roll_no, student.name, student.id,
            );
        }
        out.push_str("</tbody></table>");
        out
    }

    /// The chat-log table, or the empty-list paragraph.
    #[must_use]
    pub fn chat_logs(&self, logs: &[ChatLogEntry]) -> String {
        if logs.is_empty() {
            return Panel::ChatLogs.empty_html().to_string();
        }

        let mut out = String::new();
        self.open_table(&mut out, &CHAT_LOG_HEADERS);
        for log in logs {
            let user_type = log.user_type.as_deref().unwrap_or_default();
            let user_id = opt_display(log.user_id.as_ref());
            let response = preview(&log.response, self.options.preview_len());
            let _ = write!(
                out,
                "<tr><td>{}</td><td>{user_type}</td><td>{user_id}</td><td>{}</td>\
                 <td>{response}</td></tr>",
                log.timestamp, log.query,
            );
        }
        out.push_str("</tbody></table>");
        out
    }
}
