//! Rendering and client configuration.
//!
//! Both types are plain builders: construct with [`Default`] and override the
//! fields you care about.
//!
//! ```rust
//! use chatmark::config::RenderOptions;
//!
//! let options = RenderOptions::default()
//!     .table_class("table")
//!     .response_preview_len(40);
//! assert_eq!(options.table_class_str(), "table");
//! ```

/// Class attribute placed on every generated `<table>`.
pub const DEFAULT_TABLE_CLASS: &str = "table table-dark table-striped";

/// Number of characters of a logged response shown in the chat-log table.
pub const DEFAULT_RESPONSE_PREVIEW_LEN: usize = 100;

/// Options controlling how text and admin payloads are turned into HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Class attribute for generated tables. Empty means no attribute.
    table_class: String,
    /// Maximum characters of a chat-log response before it is cut.
    response_preview_len: usize,
    /// Whether bot replies get `**bold**`, `*italic*` and line-break handling.
    inline_markup: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            table_class: DEFAULT_TABLE_CLASS.to_string(),
            response_preview_len: DEFAULT_RESPONSE_PREVIEW_LEN,
            inline_markup: true,
        }
    }
}

impl RenderOptions {
    /// Create options with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class attribute used on generated tables.
    #[must_use]
    pub fn table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }

    /// Set the chat-log response preview length.
    #[must_use]
    pub fn response_preview_len(mut self, len: usize) -> Self {
        self.response_preview_len = len;
        self
    }

    /// Enable or disable inline markup on bot replies.
    #[must_use]
    pub fn inline_markup(mut self, enabled: bool) -> Self {
        self.inline_markup = enabled;
        self
    }

    #[must_use]
    pub fn table_class_str(&self) -> &str {
        &self.table_class
    }

    #[must_use]
    pub fn preview_len(&self) -> usize {
        self.response_preview_len
    }

    #[must_use]
    pub fn inline_markup_enabled(&self) -> bool {
        self.inline_markup
    }

    /// The opening `<table>` tag for these options.
    #[must_use]
    pub fn table_open_tag(&self) -> String {
        if self.table_class.is_empty() {
            "<table>".to_string()
        } else {
            format!("<table class=\"{}\">", self.table_class)
        }
    }
}

/// Where the [`Client`](crate::client::Client) sends requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Join an endpoint path (starting with `/`) onto the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_tag() {
        let options = RenderOptions::default();
        assert_eq!(
            options.table_open_tag(),
            "<table class=\"table table-dark table-striped\">"
        );
    }

    #[test]
    fn test_empty_class_gives_bare_tag() {
        let options = RenderOptions::new().table_class("");
        assert_eq!(options.table_open_tag(), "<table>");
    }

    #[test]
    fn test_builder_overrides() {
        let options = RenderOptions::new()
            .response_preview_len(10)
            .inline_markup(false);
        assert_eq!(options.preview_len(), 10);
        assert!(!options.inline_markup_enabled());
    }

    #[test]
    fn test_url_for_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8080/");
        assert_eq!(
            config.url_for("/api/chat"),
            "http://localhost:8080/api/chat"
        );
    }
}
