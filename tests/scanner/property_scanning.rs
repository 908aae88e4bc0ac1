use proptest::prelude::*;
use sqlscan::{Dialect, Scanner, ScannerOptions};

const MAX_INPUT_BYTES: usize = 256;

const DIALECTS: [Dialect; 5] = [
    Dialect::Standard,
    Dialect::Postgres,
    Dialect::MySql,
    Dialect::Sqlite,
    Dialect::SqlServer,
];

fn dialect() -> impl Strategy<Value = Dialect> {
    proptest::sample::select(DIALECTS.to_vec())
}

/// Words that start with `x` can never be keywords or `GO`/`DELIMITER`.
fn plain_statement() -> impl Strategy<Value = String> {
    proptest::collection::vec("x[a-z0-9_]{0,8}", 1..6).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn scan_handles_lossy_utf8_inputs_without_panicking(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES),
        dialect in dialect(),
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let _ = Scanner::for_dialect(dialect).scan(&input);
    }

    #[test]
    fn scan_is_deterministic(
        input in "[a-zA-Z0-9 ;'\"()$\\-#/*\n\u{0B}\u{A0}]{0,120}",
        dialect in dialect(),
    ) {
        let scanner = Scanner::for_dialect(dialect);
        prop_assert_eq!(scanner.scan(&input), scanner.scan(&input));
    }

    #[test]
    fn statements_are_ordered_slices_of_the_input(
        input in "[a-zA-Z0-9 ;'\"()$\\-#/*\n\u{0B}\u{A0}]{0,120}",
        dialect in dialect(),
    ) {
        if let Ok(statements) = Scanner::for_dialect(dialect).scan(&input) {
            let mut previous_end = 0;
            for statement in &statements {
                prop_assert!(statement.pos >= previous_end);
                prop_assert!(!statement.text.is_empty());
                prop_assert!(!statement.text.starts_with(char::is_whitespace));
                prop_assert!(!statement.text.ends_with(char::is_whitespace));
                prop_assert_eq!(statement.span().slice(&input), Some(statement.text.as_str()));
                previous_end = statement.span().end.as_usize();
            }
        }
    }

    #[test]
    fn plain_statements_split_one_per_semicolon(
        bodies in proptest::collection::vec(plain_statement(), 0..8),
        separator in "[ \n\t]{0,3}",
    ) {
        let input: String = bodies
            .iter()
            .map(|body| format!("{body};{separator}"))
            .collect();
        let statements = Scanner::new(ScannerOptions::standard())
            .scan(&input)
            .expect("plain statements should scan");
        prop_assert_eq!(statements.len(), bodies.len());
        for (statement, body) in statements.iter().zip(&bodies) {
            prop_assert_eq!(statement.text.clone(), format!("{body};"));
        }
    }
}
