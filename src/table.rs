//! Pipe-table to HTML conversion.
//!
//! Chatbot replies often contain markdown-style tables:
//!
//! ```text
//! | Subject | Grade |
//! |---------|-------|
//! | Maths   | A     |
//! ```
//!
//! [`TableConverter`] scans a text block line by line. Every maximal run of
//! lines that start *and* end with `|` (after trimming) becomes one `<table>`,
//! with one `<tr>` per line and one `<td>` per non-empty cell. Dash-only lines
//! mark the header boundary and produce no row. All other lines pass through
//! untouched.
//!
//! # Example
//!
//! ```rust
//! use chatmark::table::convert_tables;
//!
//! let html = convert_tables("Grades:\n| Maths | A |\n| --- | --- |\n| Physics | B |");
//! assert_eq!(
//!     html,
//!     "Grades:\n<table class=\"table table-dark table-striped\">\
//!      <tr><td>Maths</td><td>A</td></tr>\
//!      <tr><td>Physics</td><td>B</td></tr></table>"
//! );
//! ```
//!
//! # Known Limitations
//!
//! - Cell text is not HTML-escaped; markup inside a cell is emitted verbatim.
//! - Rows are not checked for consistent column counts.
//! - A line such as `a | b` without outer pipes is not a table line.

use std::borrow::Cow;
use std::fmt::Write;

use smallvec::SmallVec;

use crate::config::RenderOptions;

/// Cells of one table line, borrowed from the input.
pub type Cells<'a> = SmallVec<[&'a str; 8]>;

/// A run of consecutive table lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRun<'a> {
    rows: Vec<Cells<'a>>,
    source_lines: usize,
    separator_lines: usize,
}

impl<'a> TableRun<'a> {
    /// Rows that will be rendered, in input order.
    #[must_use]
    pub fn rows(&self) -> &[Cells<'a>] {
        &self.rows
    }

    /// Number of input lines absorbed into this run, separators included.
    #[must_use]
    pub fn source_lines(&self) -> usize {
        self.source_lines
    }

    /// Number of absorbed separator lines.
    #[must_use]
    pub fn separator_lines(&self) -> usize {
        self.separator_lines
    }

    fn push_line(&mut self, line: &'a str) {
        self.source_lines += 1;
        let cells = split_cells(line);
        if is_separator(&cells) {
            self.separator_lines += 1;
        } else {
            self.rows.push(cells);
        }
    }
}

/// One unit of scanner output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// A line that is not part of any table, kept verbatim.
    Line(&'a str),
    /// A closed table run.
    Table(TableRun<'a>),
}

/// Whether `line` belongs to a table run.
#[must_use]
pub fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Split a table line into trimmed, non-empty cells.
#[must_use]
pub fn split_cells(line: &str) -> Cells<'_> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// A separator row is one where every cell is made only of dashes.
///
/// A line with no cells at all (`|  |`) also counts.
#[must_use]
pub fn is_separator(cells: &[&str]) -> bool {
    cells
        .iter()
        .all(|cell| cell.chars().all(|c| c == '-' || c.is_whitespace()))
}

/// Scan `text` into verbatim lines and table runs.
///
/// Lines are split on `\n` only, so `\r` and trailing empty lines survive.
#[must_use]
pub fn scan(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<TableRun<'_>> = None;

    for line in text.split('\n') {
        if is_table_line(line) {
            current.get_or_insert_with(TableRun::default).push_line(line);
        } else {
            if let Some(run) = current.take() {
                blocks.push(Block::Table(run));
            }
            blocks.push(Block::Line(line));
        }
    }

    if let Some(run) = current.take() {
        blocks.push(Block::Table(run));
    }

    blocks
}

/// Converts pipe tables inside a text block to HTML.
#[derive(Debug, Clone)]
pub struct TableConverter {
    open_tag: String,
}

impl Default for TableConverter {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}

impl TableConverter {
    /// Create a converter using the table class from `options`.
    #[must_use]
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            open_tag: options.table_open_tag(),
        }
    }

    /// Convert every table run in `text`.
    ///
    /// Input without any `|` is returned borrowed and unchanged.
    #[must_use]
    pub fn convert<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.contains('|') {
            return Cow::Borrowed(text);
        }

        let blocks = scan(text);
        let mut out = String::with_capacity(text.len() + 64);
        let mut tables = 0usize;

        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match block {
                Block::Line(line) => out.push_str(line),
                Block::Table(run) => {
                    tables += 1;
                    self.render_run(run, &mut out);
                }
            }
        }

        log::trace!("converted {tables} table run(s) in {} byte(s)", text.len());
        Cow::Owned(out)
    }

    /// Append the HTML for a single run to `out`.
    pub fn render_run(&self, run: &TableRun<'_>, out: &mut String) {
        out.push_str(&self.open_tag);
        for row in run.rows() {
            out.push_str("<tr>");
            for cell in row {
                let _ = write!(out, "<td>{cell}</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");
    }
}

/// Convert tables with the default options.
#[must_use]
pub fn convert_tables(text: &str) -> Cow<'_, str> {
    TableConverter::default().convert(text)
}
