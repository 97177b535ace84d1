//! Error types for endpoint calls.

/// Failure of a single request/response round-trip.
#[derive(Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, ...).
    Transport(String),
    /// The server answered with a non-success status where one was required.
    Status(u16),
    /// The request body could not be serialized.
    Encode(serde_json::Error),
    /// The response body was not the expected JSON.
    Decode(serde_json::Error),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Status(code) => write!(f, "unexpected HTTP status {code}"),
            Self::Encode(e) => write!(f, "JSON encode error: {e}"),
            Self::Decode(e) => write!(f, "JSON decode error: {e}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(e) | Self::Decode(e) => Some(e),
            Self::Transport(_) | Self::Status(_) => None,
        }
    }
}
