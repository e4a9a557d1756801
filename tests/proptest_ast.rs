//! Property-based tests with proptest.
//!
//! Three angles: the scanner is total over arbitrary input, generated
//! well-formed expression sources survive the whole pipeline, and
//! printing hand-built trees is structurally sound and idempotent.

use lox_rs::{Expr, Token, TokenKind, parse, print, scan};
use proptest::prelude::*;

// -- Leaf strategies --

/// Literal source text that parses as a primary expression.
fn literal_source() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100_000).prop_map(|n| n.to_string()),
        (0u32..1000, 1u32..1000).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
        "[a-z ]{0,8}".prop_map(|s| format!("\"{s}\"")),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("nil".to_string()),
    ]
}

const BINARY_OPS: &[&str] = &["==", "!=", ">", ">=", "<", "<=", "+", "-", "*", "/"];

/// Well-formed expression source at a given depth.
fn expr_source(depth: u32) -> impl Strategy<Value = String> {
    let leaf = literal_source();

    if depth == 0 {
        leaf.boxed()
    } else {
        let unary = (
            prop_oneof![Just("-"), Just("!")],
            expr_source(depth - 1),
        )
            .prop_map(|(op, operand)| format!("{op}{operand}"));

        let binary = (
            expr_source(depth - 1),
            prop::sample::select(BINARY_OPS),
            expr_source(depth - 1),
        )
            .prop_map(|(left, op, right)| format!("{left} {op} {right}"));

        let grouped = expr_source(depth - 1).prop_map(|inner| format!("({inner})"));

        prop_oneof![
            3 => leaf,
            1 => unary,
            2 => binary,
            1 => grouped,
        ]
        .boxed()
    }
}

// -- Tree strategies --

fn literal_expr() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (0u32..100_000).prop_map(|n| Expr::number(f64::from(n))),
        "[a-z0-9]{0,10}".prop_map(|s| Expr::string(&s)),
        any::<bool>().prop_map(Expr::boolean),
        Just(Expr::nil()),
    ]
}

fn expr_tree(depth: u32) -> impl Strategy<Value = Expr> {
    let leaf = literal_expr();

    if depth == 0 {
        leaf.boxed()
    } else {
        let unary = (
            prop_oneof![
                Just((TokenKind::Minus, "-")),
                Just((TokenKind::Bang, "!")),
            ],
            expr_tree(depth - 1),
        )
            .prop_map(|((kind, lexeme), operand)| {
                Expr::unary(Token::operator(kind, lexeme), operand)
            });

        let binary = (
            expr_tree(depth - 1),
            prop_oneof![
                Just((TokenKind::Plus, "+")),
                Just((TokenKind::Minus, "-")),
                Just((TokenKind::Star, "*")),
                Just((TokenKind::Slash, "/")),
                Just((TokenKind::EqualEqual, "==")),
                Just((TokenKind::LessEqual, "<=")),
            ],
            expr_tree(depth - 1),
        )
            .prop_map(|(left, (kind, lexeme), right)| {
                Expr::binary(left, Token::operator(kind, lexeme), right)
            });

        let grouped = expr_tree(depth - 1).prop_map(Expr::grouping);

        prop_oneof![
            3 => leaf,
            1 => unary,
            2 => binary,
            1 => grouped,
        ]
        .boxed()
    }
}

fn paren_depth_balanced(text: &str) -> bool {
    let mut depth = 0i64;
    for ch in text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

// -- Property tests --

proptest! {
    /// Scanning never panics and always terminates the stream with EOF.
    #[test]
    fn scan_is_total(input in ".{0,200}") {
        let result = scan(&input);
        let last = result.tokens.last().expect("stream never empty");
        prop_assert_eq!(last.kind, TokenKind::Eof);
    }

    /// Every token a scan produces carries a 1-based location.
    #[test]
    fn scan_locations_are_one_based(input in ".{0,200}") {
        let result = scan(&input);
        for token in &result.tokens {
            prop_assert!(token.span.line >= 1);
            prop_assert!(token.span.column >= 1);
        }
    }

    /// Well-formed expression sources scan cleanly and parse.
    #[test]
    fn generated_sources_survive_the_pipeline(source in expr_source(3)) {
        let result = scan(&source);
        prop_assert!(
            !result.had_error(),
            "scan errors for {}: {:?}", source, result.errors
        );
        let expr = parse(&result.tokens).map_err(|e| {
            TestCaseError::fail(std::format!("parse error: {e}\n--- source ---\n{source}"))
        })?;
        let first = print(&expr);
        let second = print(&expr);
        prop_assert_eq!(first, second);
    }

    /// The canonical form of a generated source is parenthesized
    /// in a balanced way (string literals stay alphabetic).
    #[test]
    fn generated_sources_print_balanced(source in expr_source(3)) {
        let result = scan(&source);
        let expr = parse(&result.tokens).expect("generated source parses");
        prop_assert!(paren_depth_balanced(&print(&expr)));
    }

    /// Printing a hand-built tree is idempotent.
    #[test]
    fn tree_print_idempotent(expr in expr_tree(4)) {
        prop_assert_eq!(print(&expr), print(&expr));
    }

    /// A printed tree balances its parentheses.
    #[test]
    fn tree_print_balanced(expr in expr_tree(4)) {
        prop_assert!(paren_depth_balanced(&print(&expr)));
    }

    /// Scanning the canonical number form of any small integral
    /// value yields exactly one NUMBER token.
    #[test]
    fn canonical_numbers_rescan_to_one_token(n in 0u32..1_000_000) {
        let source = lox_rs::format_number(f64::from(n));
        let tokens = scan(&source).tokens;
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
    }
}
