//! In-memory transport for driving the chat and dashboard flows.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use chatmark::api::{HttpReply, Method};
use chatmark::client::Transport;
use chatmark::error::ClientError;

/// Answers by `(method, path)`; unknown routes fail at the transport level.
#[derive(Default)]
pub struct StubServer {
    routes: HashMap<(Method, String), HttpReply>,
    requests: RefCell<Vec<(Method, String, Option<String>)>>,
}

impl StubServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert((method, path.to_string()), HttpReply::new(status, body));
        self
    }

    /// Requests seen so far, with bodies decoded as UTF-8.
    pub fn requests(&self) -> Vec<(Method, String, Option<String>)> {
        self.requests.borrow().clone()
    }
}

impl Transport for StubServer {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<HttpReply, ClientError> {
        self.requests.borrow_mut().push((
            method,
            path.to_string(),
            body.map(|b| String::from_utf8_lossy(b).into_owned()),
        ));
        self.routes
            .get(&(method, path.to_string()))
            .cloned()
            .ok_or_else(|| ClientError::Transport(format!("no route for {method} {path}")))
    }
}
