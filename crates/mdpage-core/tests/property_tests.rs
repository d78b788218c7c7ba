//! Property tests for conversion totality and the inline round-trip law

use mdpage_core::{convert, outline_entries, parse_inlines, runs_to_markdown, OutlineEntry};
use proptest::prelude::*;

/// Lines biased towards the characters the tokenizer cares about.
fn inline_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("*".to_string()),
            Just("**".to_string()),
            Just("`".to_string()),
            Just(" ".to_string()),
            "[a-zа-я0-9]{1,4}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

/// Lines drawn from every syntactic class.
fn markdown_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        inline_text().prop_map(|t| format!("# {t}")),
        inline_text().prop_map(|t| format!("## {t}")),
        inline_text().prop_map(|t| format!("### {t}")),
        inline_text().prop_map(|t| format!("| {t} | x |")),
        Just("|---|---|".to_string()),
        (0usize..10, inline_text()).prop_map(|(n, t)| format!("{}- {t}", " ".repeat(n))),
        (1u32..99, inline_text()).prop_map(|(n, t)| format!("{n}. {t}")),
        inline_text(),
    ]
}

fn count_table_runs(lines: &[String]) -> usize {
    let mut runs = 0;
    let mut has_row = false;
    let mut in_run = false;
    for line in lines {
        if line.starts_with('|') {
            in_run = true;
            has_row |= line != "|---|---|";
        } else {
            if in_run && has_row {
                runs += 1;
            }
            in_run = false;
            has_row = false;
        }
    }
    if in_run && has_row {
        runs += 1;
    }
    runs
}

proptest! {
    #[test]
    fn prop_inline_round_trip(line in inline_text()) {
        let runs = parse_inlines(&line);
        prop_assert!(!runs.is_empty());
        prop_assert_eq!(runs_to_markdown(&runs), line.as_str());
    }

    #[test]
    fn prop_runs_never_empty(lines in proptest::collection::vec(markdown_line(), 0..30)) {
        let input = lines.join("\n");
        for element in convert(&input) {
            if let Some(runs) = element.runs() {
                prop_assert!(!runs.is_empty());
            }
        }
    }

    #[test]
    fn prop_one_table_per_run(lines in proptest::collection::vec(markdown_line(), 0..30)) {
        let input = lines.join("\n");
        let expected = count_table_runs(&lines);

        let tables = convert(&input).iter().filter(|e| e.is_table()).count();
        prop_assert_eq!(tables, expected);

        let outlined = outline_entries(&input)
            .iter()
            .filter(|e| matches!(e, OutlineEntry::Table))
            .count();
        prop_assert_eq!(outlined, expected);
    }

    #[test]
    fn prop_convert_is_total(input in "\\PC{0,200}") {
        let _ = convert(&input);
        let _ = outline_entries(&input);
    }
}
