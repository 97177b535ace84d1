//! Property-based tests for table conversion and inline markup.

use proptest::prelude::*;

use chatmark::inline::render_inline;
use chatmark::table::{Block, convert_tables, is_separator, scan, split_cells};

// ============================================================================
// Custom Strategies
// ============================================================================

/// Free text that never contains a pipe.
fn pipe_free_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:*\\-\n]{0,200}"
}

/// A cell body: no pipes, no newlines, at least one visible character.
fn cell() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 .]{0,12}"
}

/// One table line with 1..6 cells, or a dash separator.
fn table_line() -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        prop::collection::vec(cell(), 1..6)
            .prop_map(|cells| (format!("| {} |", cells.join(" | ")), false)),
        (1usize..5, 1usize..6).prop_map(|(cols, width)| {
            let dashes = vec!["-".repeat(width); cols];
            (format!("|{}|", dashes.join("|")), true)
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_no_pipe_is_identity(text in pipe_free_text()) {
        prop_assert_eq!(convert_tables(&text), text.as_str());
    }

    #[test]
    fn prop_single_run_row_count(lines in prop::collection::vec(table_line(), 1..12)) {
        let separators = lines.iter().filter(|(_, sep)| *sep).count();
        let input = lines
            .iter()
            .map(|(line, _)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let out = convert_tables(&input);
        prop_assert_eq!(out.matches("<table").count(), 1);
        prop_assert_eq!(out.matches("<tr>").count(), lines.len() - separators);
        prop_assert!(!out.contains('\n'));
    }

    #[test]
    fn prop_generated_lines_classified(line in table_line()) {
        let (text, is_sep) = line;
        prop_assert_eq!(is_separator(&split_cells(&text)), is_sep);
    }

    #[test]
    fn prop_every_line_accounted_for(
        parts in prop::collection::vec(
            prop_oneof![table_line().prop_map(|(l, _)| l), pipe_free_text()],
            0..10,
        )
    ) {
        let input = parts.join("\n");
        let absorbed: usize = scan(&input)
            .iter()
            .map(|block| match block {
                Block::Line(_) => 1,
                Block::Table(run) => run.source_lines(),
            })
            .sum();
        prop_assert_eq!(absorbed, input.split('\n').count());
    }

    #[test]
    fn prop_output_has_no_pipes_when_all_lines_are_tables(
        lines in prop::collection::vec(table_line(), 1..8)
    ) {
        let input = lines.iter().map(|(l, _)| l.as_str()).collect::<Vec<_>>().join("\n");
        let once = convert_tables(&input).into_owned();
        prop_assert!(!once.contains('|'));
        prop_assert_eq!(convert_tables(&once), once.as_str());
    }

    #[test]
    fn prop_inline_removes_all_newlines(text in pipe_free_text()) {
        prop_assert!(!render_inline(&text).contains('\n'));
    }
}
