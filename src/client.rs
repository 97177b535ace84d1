//! Request/response client for the chat and admin endpoints.
//!
//! Each call is one synchronous round-trip with no retry and no timeout.
//! The network side sits behind [`Transport`] so the flows in
//! [`chat`](crate::chat) and [`dashboard`](crate::dashboard) can be driven by
//! anything that can answer a request: the `http` feature's
//! [`HttpTransport`](crate::http::HttpTransport), or a canned stub in tests.

use serde::de::DeserializeOwned;

use crate::api::{
    ChatLogEntry, ChatReply, ChatRequest, DeleteOutcome, Endpoint, HttpReply, Method, Student,
};
use crate::error::ClientError;

/// Sends one request and returns the raw reply.
pub trait Transport {
    /// `path` starts with `/`. `body`, when present, is JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when no reply was received. A reply
    /// with any status code is `Ok`.
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<HttpReply, ClientError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<HttpReply, ClientError> {
        (**self).send(method, path, body)
    }
}

/// Typed wrapper over a [`Transport`].
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, endpoint: Endpoint, body: Option<&[u8]>) -> Result<HttpReply, ClientError> {
        let method = endpoint.method();
        let path = endpoint.path();
        log::debug!("{method} {path}");
        let reply = self.transport.send(method, &path, body)?;
        log::debug!("{method} {path} -> {}", reply.status);
        Ok(reply)
    }

    /// Send a chat query.
    ///
    /// A non-2xx status is an error even if the body carries an `error`
    /// message.
    ///
    /// # Errors
    ///
    /// [`ClientError::Status`] on a non-success status, otherwise transport
    /// and JSON failures.
    pub fn chat(&self, query: &str) -> Result<ChatReply, ClientError> {
        let body = serde_json::to_vec(&ChatRequest { query }).map_err(ClientError::Encode)?;
        let reply = self.request(Endpoint::Chat, Some(&body))?;
        if !reply.is_success() {
            return Err(ClientError::Status(reply.status));
        }
        decode(&reply)
    }

    /// Fetch the student list. The status code is not inspected.
    ///
    /// # Errors
    ///
    /// Transport failures, or a body that is not a student array.
    pub fn students(&self) -> Result<Vec<Student>, ClientError> {
        decode(&self.request(Endpoint::Students, None)?)
    }

    /// Delete one student by database id. The status code is not inspected;
    /// a failed delete still answers with `success: false` and a message.
    ///
    /// # Errors
    ///
    /// Transport failures, or a body that is not a delete outcome.
    pub fn delete_student(&self, id: i64) -> Result<DeleteOutcome, ClientError> {
        decode(&self.request(Endpoint::DeleteStudent(id), None)?)
    }

    /// Fetch the chat log. The status code is not inspected.
    ///
    /// # Errors
    ///
    /// Transport failures, or a body that is not a chat-log array.
    pub fn chat_logs(&self) -> Result<Vec<ChatLogEntry>, ClientError> {
        decode(&self.request(Endpoint::ChatLogs, None)?)
    }
}

fn decode<D: DeserializeOwned>(reply: &HttpReply) -> Result<D, ClientError> {
    serde_json::from_slice(&reply.body).map_err(ClientError::Decode)
}
