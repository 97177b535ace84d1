//! Blocking HTTP transport backed by `ehttp`.
//!
//! Requires the `http` feature.

use crate::api::{HttpReply, Method};
use crate::client::Transport;
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Sends requests to a server at [`ClientConfig::base_url`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    config: ClientConfig,
}

impl HttpTransport {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn build_request(&self, method: Method, path: &str, body: Option<&[u8]>) -> ehttp::Request {
        let url = self.config.url_for(path);
        match (method, body) {
            (Method::Post, body) => {
                let body = body.map(<[u8]>::to_vec).unwrap_or_default();
                let mut request = ehttp::Request::post(url, body);
                request.headers = ehttp::Headers::new(&[
                    ("Accept", "application/json"),
                    ("Content-Type", "application/json"),
                ]);
                request
            }
            (Method::Get, _) => ehttp::Request::get(url),
            (Method::Delete, _) => ehttp::Request {
                method: "DELETE".to_owned(),
                ..ehttp::Request::get(url)
            },
        }
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<HttpReply, ClientError> {
        let request = self.build_request(method, path, body);
        let response = ehttp::fetch_blocking(&request).map_err(ClientError::Transport)?;
        Ok(HttpReply::new(response.status, response.bytes))
    }
}
