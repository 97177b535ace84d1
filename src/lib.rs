//! # chatmark
//!
//! HTML fragments for a campus chatbot widget and its admin dashboard.
//!
//! Chatbot replies arrive as plain text with light markdown: pipe tables,
//! `**bold**`, `*italic*`. This crate turns them into the HTML the chat window
//! shows, renders the admin panels from the server's JSON, and drives the
//! request/response flows behind both.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatmark::prelude::*;
//!
//! let html = convert_tables("| Sem | GPA |\n|-----|-----|\n| 5 | 8.4 |");
//! assert!(html.starts_with("<table"));
//! assert!(html.contains("<tr><td>5</td><td>8.4</td></tr>"));
//! ```
//!
//! ## Modules
//!
//! - [`table`]: pipe-table detection and conversion
//! - [`inline`]: bold, italic and line breaks
//! - [`message`]: chat bubbles
//! - [`admin`]: student and chat-log panels
//! - [`api`], [`client`]: endpoint payloads and the request client
//! - [`chat`], [`dashboard`]: the widget flows over explicit state
//! - [`logging`]: a `log` backend for binaries

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod admin;
pub mod api;
pub mod chat;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod inline;
pub mod logging;
pub mod message;
pub mod sync;
pub mod table;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::admin::{AdminRenderer, Panel};
    pub use crate::api::{ChatLogEntry, ChatReply, DeleteOutcome, Endpoint, Method, Student};
    pub use crate::chat::{ChatOutcome, ChatSession, PendingReply};
    pub use crate::client::{Client, Transport};
    pub use crate::config::{ClientConfig, RenderOptions};
    pub use crate::dashboard::Dashboard;
    pub use crate::error::ClientError;
    pub use crate::message::{MessageRenderer, Sender, render_message};
    pub use crate::table::{Block, TableConverter, TableRun, convert_tables, scan};

    #[cfg(feature = "http")]
    pub use crate::http::HttpTransport;
}

pub use error::ClientError;
pub use table::convert_tables;
