use pretty_assertions::assert_eq;
use sqlscan::{Scanner, ScannerOptions, Statement, stmts};

fn texts(statements: &[Statement]) -> Vec<&str> {
    statements.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn semicolons_split_statements_in_order() {
    let input = "CREATE TABLE a (id int);\nCREATE TABLE b (id int);\n\nDROP TABLE c;\n";
    let statements = stmts(input).expect("scan should succeed");
    assert_eq!(
        texts(&statements),
        vec![
            "CREATE TABLE a (id int);",
            "CREATE TABLE b (id int);",
            "DROP TABLE c;",
        ]
    );
    assert_eq!(statements[0].pos, 0);
    assert_eq!(statements[1].pos, input.find("CREATE TABLE b").unwrap());
    assert_eq!(statements[2].pos, input.find("DROP").unwrap());
}

#[test]
fn statement_text_keeps_internal_whitespace() {
    let statements = stmts("  SELECT\n\t1,\n\t2  ;  ").expect("scan should succeed");
    assert_eq!(texts(&statements), vec!["SELECT\n\t1,\n\t2  ;"]);
    assert_eq!(statements[0].pos, 2);
}

#[test]
fn trailing_statement_without_terminator_is_emitted() {
    let statements = stmts("SELECT 1;\nSELECT 2\n\n").expect("scan should succeed");
    assert_eq!(texts(&statements), vec!["SELECT 1;", "SELECT 2"]);
}

#[test]
fn empty_and_comment_only_inputs_yield_nothing() {
    assert!(stmts("").expect("scan").is_empty());
    assert!(stmts(" \n\t\n").expect("scan").is_empty());
    assert!(stmts("-- only a comment\n/* and a block */").expect("scan").is_empty());
}

#[test]
fn empty_statements_are_skipped() {
    let statements = stmts(";\n;; SELECT 1;;").expect("scan should succeed");
    assert_eq!(texts(&statements), vec!["SELECT 1;"]);
}

#[test]
fn separators_inside_literals_parens_and_comments_do_not_split() {
    let input = "INSERT INTO t VALUES ('a;b', \"c;d\", (1;2)); -- x;y\nSELECT /* ; */ 1;";
    let statements = stmts(input).expect("scan should succeed");
    assert_eq!(
        texts(&statements),
        vec![
            "INSERT INTO t VALUES ('a;b', \"c;d\", (1;2));",
            "SELECT /* ; */ 1;",
        ]
    );
    assert_eq!(statements[1].comments, vec!["-- x;y\n".to_string()]);
}

#[test]
fn comments_after_first_token_stay_in_text() {
    let statements = stmts("SELECT 1 -- one\n  + 2; -- trailing").expect("scan should succeed");
    assert_eq!(texts(&statements), vec!["SELECT 1 -- one\n  + 2;"]);
    assert!(statements[0].comments.is_empty());
}

#[test]
fn hash_is_plain_text_unless_enabled() {
    let input = "SELECT a # b;\nSELECT 2;";
    let plain = Scanner::new(ScannerOptions::default())
        .scan(input)
        .expect("scan should succeed");
    assert_eq!(texts(&plain), vec!["SELECT a # b;", "SELECT 2;"]);

    let hashed = Scanner::new(ScannerOptions {
        hash_comments: true,
        ..Default::default()
    })
    .scan(input)
    .expect("scan should succeed");
    assert_eq!(texts(&hashed), vec!["SELECT a # b;\nSELECT 2;"]);
}

#[test]
fn positions_are_byte_offsets_and_spans_slice_the_source() {
    let input = "-- é\nSELECT 'é';\n  SELECT 2;";
    let statements = stmts(input).expect("scan should succeed");
    for statement in &statements {
        assert_eq!(statement.span().slice(input), Some(statement.text.as_str()));
    }
    let second = statements[1].position(input);
    assert_eq!((second.line, second.column), (3, 3));
}

#[test]
fn scanning_is_idempotent() {
    let input = "-- c\nCREATE TABLE t (a int);\nBEGIN SELECT 1; END;\nSELECT 'x''y';";
    let scanner = Scanner::new(ScannerOptions::standard());
    let first = scanner.scan(input).expect("scan should succeed");
    let second = scanner.scan(input).expect("scan should succeed");
    assert_eq!(first, second);
}

#[test]
fn scanner_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Scanner>();
    assert_send_sync::<Statement>();
}

#[test]
fn unicode_whitespace_never_starts_a_statement() {
    for input in ["SELECT 1;\u{0B}", "SELECT 1;\u{A0}", "SELECT 1;\u{A0}\u{2003}\n"] {
        let statements = stmts(input).expect("scan should succeed");
        assert_eq!(texts(&statements), vec!["SELECT 1;"], "input: {input:?}");
    }

    let input = "SELECT 1;\u{0B} SELECT 2;\u{A0}\nSELECT\u{A0}3;";
    let statements = stmts(input).expect("scan should succeed");
    assert_eq!(
        texts(&statements),
        vec!["SELECT 1;", "SELECT 2;", "SELECT\u{A0}3;"]
    );
    assert_eq!(statements[1].pos, input.find("SELECT 2").unwrap());
}

#[test]
fn keywords_are_delimited_by_unicode_whitespace() {
    let scanner = Scanner::new(ScannerOptions::standard());
    let statements = scanner
        .scan("CREATE TRIGGER t\u{A0}BEGIN\u{A0}SELECT 1; END;\nSELECT 2;")
        .expect("scan should succeed");
    assert_eq!(statements.len(), 2);
}
