use pretty_assertions::assert_eq;
use sqlscan::{Scanner, ScannerOptions, Statement, stmts};

fn comments(statement: &Statement) -> Vec<&str> {
    statement.comments.iter().map(String::as_str).collect()
}

fn scan_with_hash(input: &str) -> Vec<Statement> {
    Scanner::new(ScannerOptions {
        hash_comments: true,
        ..ScannerOptions::standard()
    })
    .scan(input)
    .expect("scan should succeed")
}

#[test]
fn contiguous_comments_attach_verbatim() {
    let statements = stmts("-- first\n-- second\nSELECT 1;").expect("scan should succeed");
    assert_eq!(comments(&statements[0]), vec!["-- first\n", "-- second\n"]);
}

#[test]
fn blank_line_detaches_comments_above_it() {
    let statements =
        stmts("-- detached\n\n-- attached\nSELECT 1;").expect("scan should succeed");
    assert_eq!(comments(&statements[0]), vec!["-- attached\n"]);
}

#[test]
fn blank_line_after_block_comment_detaches_it() {
    let statements =
        stmts("/* header */\n\n/* one */\n/* two */\nSELECT 1;").expect("scan should succeed");
    assert_eq!(comments(&statements[0]), vec!["/* one */", "/* two */"]);
}

#[test]
fn comments_between_statements_attach_to_the_next_one() {
    let statements = stmts("SELECT 1;\n-- for two\nSELECT 2;").expect("scan should succeed");
    assert!(statements[0].comments.is_empty());
    assert_eq!(comments(&statements[1]), vec!["-- for two\n"]);
}

#[test]
fn blank_line_right_after_a_statement_is_not_a_separator_of_its_own() {
    let statements =
        stmts("SELECT 1;\n\n-- for two\nSELECT 2;").expect("scan should succeed");
    assert_eq!(comments(&statements[1]), vec!["-- for two\n"]);
}

#[test]
fn trailing_comment_on_the_statement_line_attaches_forward() {
    let statements =
        stmts("SELECT 1; -- about one\nSELECT 2;").expect("scan should succeed");
    assert_eq!(comments(&statements[1]), vec!["-- about one\n"]);
}

#[test]
fn comments_before_an_empty_statement_are_dropped() {
    let statements = stmts("-- lost\n;\nSELECT 1;").expect("scan should succeed");
    assert_eq!(statements.len(), 1);
    assert!(statements[0].comments.is_empty());
}

#[test]
fn trailing_comments_at_end_of_input_are_discarded() {
    let statements = stmts("SELECT 1;\n-- dangling\n").expect("scan should succeed");
    assert_eq!(statements.len(), 1);
    assert!(statements[0].comments.is_empty());
}

#[test]
fn hash_and_block_comments_mix_with_dash_comments() {
    let statements = scan_with_hash("# hash\n/* block */\n-- dash\nSELECT 1;");
    assert_eq!(
        comments(&statements[0]),
        vec!["# hash\n", "/* block */", "-- dash\n"]
    );
}

#[test]
fn comment_at_end_of_input_without_newline_is_kept_whole() {
    let statements = stmts("SELECT 1;\n-- no newline").expect("scan should succeed");
    assert_eq!(statements.len(), 1);
    let statements = stmts("-- no newline").expect("scan should succeed");
    assert!(statements.is_empty());
}

#[test]
fn unterminated_block_comment_runs_to_end_of_input() {
    let statements = stmts("SELECT 1;\n/* never closed; SELECT 2;").expect("scan should succeed");
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].text, "SELECT 1;");

    let statements = stmts("SELECT 1 /* never closed; SELECT 2;").expect("scan should succeed");
    assert_eq!(statements[0].text, "SELECT 1 /* never closed; SELECT 2;");
}
