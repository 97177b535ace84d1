//! The chat widget's submit flow over an explicit transcript.

use crate::api::ChatReply;
use crate::client::{Client, Transport};
use crate::config::RenderOptions;
use crate::error::ClientError;
use crate::message::{
    GENERIC_FAILURE, MessageRenderer, Sender, TYPING_INDICATOR, server_error_text,
};

/// What the bot bubble ended up saying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The server answered the query.
    Reply(String),
    /// The server answered with an `error` field.
    ServerError(String),
    /// No usable answer: transport failure, bad status, or unreadable body.
    Failed,
}

impl ChatOutcome {
    /// Classify the result of a chat request.
    #[must_use]
    pub fn from_reply(reply: Result<ChatReply, ClientError>) -> Self {
        match reply {
            Ok(ChatReply::Response { response }) => Self::Reply(response),
            Ok(ChatReply::Error { error }) => {
                log::debug!("chat reply carried an error: {error}");
                Self::ServerError(error)
            }
            Err(err) => {
                log::warn!("chat request failed: {err}");
                Self::Failed
            }
        }
    }

    /// Raw bot text for this outcome, before rendering.
    #[must_use]
    pub fn bot_text(&self) -> String {
        match self {
            Self::Reply(text) => text.clone(),
            Self::ServerError(error) => server_error_text(error),
            Self::Failed => GENERIC_FAILURE.to_string(),
        }
    }
}

/// Rendered messages of one chat window, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    renderer: MessageRenderer,
    transcript: Vec<String>,
}

impl ChatSession {
    #[must_use]
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            renderer: MessageRenderer::new(options),
            transcript: Vec::new(),
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// All message fragments concatenated.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.transcript.concat()
    }

    /// Append a rendered message.
    pub fn push(&mut self, sender: Sender, text: &str) {
        let html = self.renderer.render(sender, text);
        self.transcript.push(html);
    }

    /// Start a turn: append the user's message and the typing indicator.
    ///
    /// Input is trimmed; blank input changes nothing and returns `None`.
    /// The indicator stays in the transcript until [`finish`](Self::finish)
    /// is called with the returned handle.
    #[must_use = "the typing indicator stays until the turn is finished"]
    pub fn begin(&mut self, input: &str) -> Option<PendingReply> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }

        self.push(Sender::User, query);
        let slot = self.transcript.len();
        self.transcript.push(TYPING_INDICATOR.to_string());
        Some(PendingReply {
            query: query.to_string(),
            slot,
        })
    }

    /// Replace the turn's typing indicator with the bot's answer.
    pub fn finish(
        &mut self,
        pending: PendingReply,
        reply: Result<ChatReply, ClientError>,
    ) -> ChatOutcome {
        let outcome = ChatOutcome::from_reply(reply);
        let html = self.renderer.render(Sender::Bot, &outcome.bot_text());

        match self.transcript.get_mut(pending.slot) {
            Some(slot) if *slot == TYPING_INDICATOR => *slot = html,
            _ => {
                log::debug!("typing indicator for {:?} already gone", pending.query);
                self.transcript.push(html);
            }
        }
        outcome
    }

    /// Whether any turn is still showing the typing indicator.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.transcript.iter().any(|html| html == TYPING_INDICATOR)
    }

    /// Run a whole turn: [`begin`](Self::begin), send, [`finish`](Self::finish).
    pub fn submit<T: Transport>(
        &mut self,
        client: &Client<T>,
        input: &str,
    ) -> Option<ChatOutcome> {
        let pending = self.begin(input)?;
        let reply = client.chat(pending.query());
        Some(self.finish(pending, reply))
    }
}

/// A turn whose reply has not arrived yet.
///
/// Returned by [`ChatSession::begin`]; hand it back to
/// [`ChatSession::finish`] with the request's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    query: String,
    slot: usize,
}

impl PendingReply {
    /// The trimmed query to send.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}
