//! End-to-end tests for pipe-table conversion and bot message rendering.

mod common;

use common::assertions::{assert_contains_logged, assert_eq_logged, count};
use common::{init_test_logging, log_test_context};

use chatmark::prelude::*;
use chatmark::table::{is_separator, split_cells};

const OPEN: &str = "<table class=\"table table-dark table-striped\">";

// =============================================================================
// Pass-through
// =============================================================================

#[test]
fn e2e_text_without_pipes_is_untouched() {
    init_test_logging();
    let input = "Your attendance is 92%.\n\nKeep it up!\n";
    assert_eq_logged("no pipes", &*convert_tables(input), input);
}

#[test]
fn e2e_inner_pipes_only_pass_through() {
    init_test_logging();
    log_test_context(
        "e2e_inner_pipes_only_pass_through",
        "lines without outer pipes never qualify, even with a dash row",
    );

    let input = "a|b\n---|---\n1|2";
    let out = convert_tables(input);
    assert_eq_logged("unchanged", &*out, input);
    assert_eq!(count(&out, "<table"), 0);
}

// =============================================================================
// Single runs
// =============================================================================

#[test]
fn e2e_header_separator_body() {
    init_test_logging();

    let input = "| Semester | GPA |\n|----------|-----|\n| 1 | 7.9 |\n| 2 | 8.3 |";
    let out = convert_tables(input);

    insta::assert_snapshot!(
        out,
        @r#"<table class="table table-dark table-striped"><tr><td>Semester</td><td>GPA</td></tr><tr><td>1</td><td>7.9</td></tr><tr><td>2</td><td>8.3</td></tr></table>"#
    );
}

#[test]
fn e2e_row_count_excludes_separators() {
    init_test_logging();

    let lines = [
        "| Course | Credits |",
        "| --- | --- |",
        "| DBMS | 4 |",
        "| OS | 3 |",
        "| - | - |",
        "| CN | 3 |",
    ];
    let separators = lines
        .iter()
        .filter(|l| is_separator(&split_cells(l)))
        .count();
    assert_eq!(separators, 2);

    let joined = lines.join("\n");
    let out = convert_tables(&joined);
    assert_eq!(count(&out, "<table"), 1);
    assert_eq!(count(&out, "<tr>"), lines.len() - separators);
}

#[test]
fn e2e_lone_separator_gives_empty_table() {
    init_test_logging();
    assert_eq_logged(
        "separator only",
        convert_tables("| --- | --- |").into_owned(),
        format!("{OPEN}</table>"),
    );
}

#[test]
fn e2e_alignment_colons_are_not_separators() {
    init_test_logging();
    let out = convert_tables("| a |\n| :-: |");
    assert_contains_logged("colon row kept", &out, "<td>:-:</td>");
}

// =============================================================================
// Multiple runs and surrounding text
// =============================================================================

#[test]
fn e2e_two_tables_split_by_text() {
    init_test_logging();

    let input = "Semester 1\n| a | b |\nSemester 2\n| c | d |\nDone";
    let out = convert_tables(input);

    assert_eq!(
        out,
        format!(
            "Semester 1\n{OPEN}<tr><td>a</td><td>b</td></tr></table>\n\
             Semester 2\n{OPEN}<tr><td>c</td><td>d</td></tr></table>\nDone"
        )
    );
}

#[test]
fn e2e_every_line_accounted_for() {
    init_test_logging();

    let input = "intro\n| x |\n| y |\n\n| z |\noutro\n";
    let blocks = scan(input);

    let absorbed: usize = blocks
        .iter()
        .map(|b| match b {
            Block::Line(_) => 1,
            Block::Table(run) => run.source_lines(),
        })
        .sum();
    assert_eq!(absorbed, input.split('\n').count());
}

#[test]
fn e2e_converting_twice_is_stable() {
    init_test_logging();

    let once = convert_tables("| a | b |\n|---|---|\n| 1 | 2 |").into_owned();
    let twice = convert_tables(&once);
    assert_eq!(twice, once);
}

// =============================================================================
// Bot messages
// =============================================================================

#[test]
fn e2e_bot_reply_with_table_and_emphasis() {
    init_test_logging();

    let reply = "Here are your **results**:\n\
                 | Subject | Grade |\n\
                 |---------|-------|\n\
                 | Maths | *A* |\n\
                 Keep going!";
    let html = render_message(Sender::Bot, reply);

    insta::assert_snapshot!(
        html,
        @r#"<div class="message bot-message">Here are your <strong>results</strong>:<br><table class="table table-dark table-striped"><tr><td>Subject</td><td>Grade</td></tr><tr><td>Maths</td><td><em>A</em></td></tr></table><br>Keep going!</div>"#
    );
}

#[test]
fn e2e_custom_options_flow_through() {
    init_test_logging();

    let options = RenderOptions::new().table_class("grades").inline_markup(false);
    let html = MessageRenderer::new(&options).render(Sender::Bot, "**x**\n| 1 |");
    assert_eq!(
        html,
        "<div class=\"message bot-message\">**x**\n<table class=\"grades\"><tr><td>1</td></tr></table></div>"
    );
}

#[test_log::test]
fn e2e_converter_value_reusable() {
    let converter = TableConverter::default();
    for input in ["| a |", "plain", "| b |\n| c |"] {
        let out = converter.convert(input);
        if input.contains('|') {
            assert!(out.starts_with(OPEN));
        } else {
            assert_eq!(out, input);
        }
    }
}
