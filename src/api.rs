//! Endpoint descriptions and JSON payloads.
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | `POST /api/chat` | [`ChatRequest`] | [`ChatReply`] |
//! | `GET /admin/students` | – | `[Student]` |
//! | `DELETE /admin/students/:id` | – | [`DeleteOutcome`] |
//! | `GET /admin/chatlogs` | – | `[ChatLogEntry]` |

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The server routes this crate talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Chat,
    Students,
    DeleteStudent(i64),
    ChatLogs,
}

impl Endpoint {
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::Chat => Method::Post,
            Self::Students | Self::ChatLogs => Method::Get,
            Self::DeleteStudent(_) => Method::Delete,
        }
    }

    #[must_use]
    pub fn path(self) -> Cow<'static, str> {
        match self {
            Self::Chat => Cow::Borrowed("/api/chat"),
            Self::Students => Cow::Borrowed("/admin/students"),
            Self::DeleteStudent(id) => Cow::Owned(format!("/admin/students/{id}")),
            Self::ChatLogs => Cow::Borrowed("/admin/chatlogs"),
        }
    }
}

/// Raw status and body returned by a [`Transport`](crate::client::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
}

/// Reply from `POST /api/chat`.
///
/// An `error` key takes precedence over `response` when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChatReply {
    Error { error: String },
    Response { response: String },
}

/// One row of `GET /admin/students`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Student {
    pub id: i64,
    pub serial_no: i64,
    pub roll_no: String,
    pub name: String,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub current_gpa: Option<f64>,
    #[serde(default)]
    pub attendance_percentage: Option<f64>,
}

/// Result of `DELETE /admin/students/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
}

/// One row of `GET /admin/chatlogs`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatLogEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub timestamp: String,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub query: String,
    pub response: String,
}
