#![allow(dead_code)]

use lox_rs::{Expr, ParseError, Token, parse, print, scan};

/// Helper: scan input that must contain no lexical errors.
pub fn scan_ok(input: &str) -> Vec<Token> {
    let result = scan(input);
    assert!(
        !result.had_error(),
        "unexpected scan errors for {input:?}: {:?}",
        result.errors
    );
    result.tokens
}

/// Helper: scan then parse, asserting the scan is clean.
pub fn parse_input(input: &str) -> Result<Expr, ParseError> {
    parse(&scan_ok(input))
}

/// Helper: run the full pipeline and compare the canonical form.
pub fn assert_prints(input: &str, expected: &str) {
    let expr = parse_input(input).unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"));
    let output = print(&expr);
    assert_eq!(
        output, expected,
        "canonical form mismatch for {input:?}:\n--- expected ---\n{expected}\n--- got ---\n{output}"
    );
}
