//! Inline emphasis and line breaks for bot replies.
//!
//! Runs after table conversion. Bold is replaced before italic so that
//! `**x**` is not read as two empty italics.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));

static EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));

/// Replace `**text**` with `<strong>text</strong>`.
#[must_use]
pub fn strong(text: &str) -> Cow<'_, str> {
    STRONG_RE.replace_all(text, "<strong>$1</strong>")
}

/// Replace `*text*` with `<em>text</em>`.
#[must_use]
pub fn emphasis(text: &str) -> Cow<'_, str> {
    EMPHASIS_RE.replace_all(text, "<em>$1</em>")
}

/// Replace every `\n` with `<br>`.
#[must_use]
pub fn line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\n') {
        Cow::Owned(text.replace('\n', "<br>"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Apply bold, italic and line-break conversion in that order.
///
/// Neither emphasis pattern crosses a line boundary.
#[must_use]
pub fn render_inline(text: &str) -> String {
    let text = strong(text);
    let text = emphasis(&text);
    line_breaks(&text).into_owned()
}
