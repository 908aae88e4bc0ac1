use pretty_assertions::assert_eq;
use sqlscan::{LexErrorKind, stmts};

#[test]
fn errors_render_position_and_reason() {
    let cases = [
        (
            "'this quote is unclosed at 1:1",
            "1:1: unclosed quote '\\''",
        ),
        ("12345'this quote is unclosed at 1:6", "1:6: unclosed quote '\\''"),
        ("unclosed '", "1:10: unclosed quote '\\''"),
        ("\"unclosed double at 1:1", "1:1: unclosed quote '\"'"),
        ("unclosed double at 2:2\n \"", "2:2: unclosed quote '\"'"),
        (
            "unclosed double at 5:5\n\n\n\n1234\"",
            "5:5: unclosed quote '\"'",
        ),
        ("(unclosed parentheses at 1:1", "1:1: unclosed '('"),
        ("()(unclosed parentheses at 1:3", "1:3: unclosed '('"),
        ("1234)6789", "1:5: unexpected ')'"),
    ];
    for (input, expected) in cases {
        let error = stmts(input).expect_err(input);
        assert_eq!(error.to_string(), expected, "input: {input:?}");
    }
}

#[test]
fn unclosed_paren_points_at_innermost_open_paren() {
    let error = stmts("SELECT (1, (2,\n  (3)").expect_err("parens stay open");
    assert_eq!(error.kind, LexErrorKind::UnclosedParen);
    assert_eq!((error.line(), error.column()), (1, 12));
}

#[test]
fn unclosed_paren_is_reported_at_end_of_input_not_at_semicolon() {
    let error = stmts("SELECT (1;\nSELECT 2;").expect_err("paren stays open");
    assert_eq!(error.to_string(), "1:8: unclosed '('");
}

#[test]
fn first_error_aborts_the_scan() {
    let error = stmts("SELECT 1;\nSELECT 'open;\nSELECT 2)").expect_err("quote stays open");
    assert_eq!(error.to_string(), "2:8: unclosed quote '\\''");
}

#[test]
fn columns_count_characters_not_bytes() {
    let error = stmts("SELECT 'é', ü)").expect_err("stray paren");
    assert_eq!(error.kind, LexErrorKind::UnexpectedParen);
    assert_eq!((error.line(), error.column()), (1, 14));
}

#[test]
fn quotes_inside_comments_are_ignored() {
    assert!(stmts("-- don't\nSELECT 1; /* it's */").is_ok());
}
