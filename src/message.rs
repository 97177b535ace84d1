//! Chat bubble fragments.
//!
//! User text is inserted as typed. Bot text has its pipe tables converted
//! first, then inline emphasis and line breaks:
//!
//! ```rust
//! use chatmark::message::{MessageRenderer, Sender};
//!
//! let renderer = MessageRenderer::default();
//! assert_eq!(
//!     renderer.render(Sender::Bot, "**Hi**\nthere"),
//!     "<div class=\"message bot-message\"><strong>Hi</strong><br>there</div>"
//! );
//! ```

use std::borrow::Cow;

use crate::config::RenderOptions;
use crate::inline;
use crate::table::TableConverter;

/// Shown when the request failed or the reply could not be read.
pub const GENERIC_FAILURE: &str = "Sorry, an error occurred while processing your request.";

/// Placeholder bubble shown while a reply is pending.
pub const TYPING_INDICATOR: &str = "<div class=\"message bot-message typing-indicator\">Thinking\
     <span class=\"dot\">.</span><span class=\"dot\">.</span><span class=\"dot\">.</span></div>";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS classes for the message bubble.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::User => "message user-message",
            Self::Bot => "message bot-message",
        }
    }
}

/// Text for a reply whose body carried an `error` field.
#[must_use]
pub fn server_error_text(error: &str) -> String {
    format!("Sorry, an error occurred: {error}")
}

/// Renders chat messages with a fixed set of options.
#[derive(Debug, Clone)]
pub struct MessageRenderer {
    tables: TableConverter,
    inline_markup: bool,
}

impl Default for MessageRenderer {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}

impl MessageRenderer {
    #[must_use]
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            tables: TableConverter::new(options),
            inline_markup: options.inline_markup_enabled(),
        }
    }

    /// The inner HTML of a message, without the bubble.
    #[must_use]
    pub fn body<'a>(&self, sender: Sender, text: &'a str) -> Cow<'a, str> {
        match sender {
            Sender::User => Cow::Borrowed(text),
            Sender::Bot => {
                let converted = self.tables.convert(text);
                if self.inline_markup {
                    Cow::Owned(inline::render_inline(&converted))
                } else {
                    converted
                }
            }
        }
    }

    /// The complete message bubble.
    #[must_use]
    pub fn render(&self, sender: Sender, text: &str) -> String {
        format!(
            "<div class=\"{}\">{}</div>",
            sender.classes(),
            self.body(sender, text)
        )
    }
}

/// Render one message with the default options.
#[must_use]
pub fn render_message(sender: Sender, text: &str) -> String {
    MessageRenderer::default().render(sender, text)
}
