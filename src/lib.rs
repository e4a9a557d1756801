//! Lox scanner, expression parser, and AST printer.
//!
//! The front end of the Lox expression language: scan raw source
//! text into a stream of located tokens, parse the stream into an
//! expression tree, and render the tree back as fully-parenthesized
//! canonical text.
//!
//! # Quick start
//!
//! ## Scan, parse, and print an expression
//!
//! ```
//! use lox_rs::{scan, parse, print};
//!
//! let result = scan("1 + 2 * 3");
//! assert!(!result.had_error());
//!
//! let expr = parse(&result.tokens).unwrap();
//! assert_eq!(print(&expr), "(+ 1.0 (* 2.0 3.0))");
//! ```
//!
//! ## Build an expression tree programmatically
//!
//! ```
//! use lox_rs::{Expr, Token, TokenKind, print};
//!
//! let expr = Expr::binary(
//!     Expr::grouping(Expr::number(1.5)),
//!     Token::operator(TokenKind::Star, "*"),
//!     Expr::unary(Token::operator(TokenKind::Minus, "-"), Expr::number(2.0)),
//! );
//! assert_eq!(print(&expr), "(* (group 1.5) (- 2.0))");
//! ```
//!
//! Lexical errors are accumulated: a scan always yields a complete
//! `EOF`-terminated token stream with every problem recorded
//! alongside it. Syntax errors are terminal: `parse` returns a typed
//! error and no partial tree.

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod parser;
pub mod printer;
pub mod scanner;
pub mod token;

pub use ast::{Expr, ExprVisitor, LiteralValue};
pub use parser::{ParseError, ParseErrorKind, parse};
pub use printer::print;
pub use scanner::{ScanError, ScanErrorKind, ScanResult, scan};
pub use token::{Span, Token, TokenKind, format_number};

/// Unified error type covering both scanning and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A scanner error.
    #[error("{0}")]
    Scan(#[from] ScanError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Scan and parse a source string in one step.
///
/// Lexical errors abort before parsing; the first recorded scan
/// error is returned (the full set is available via [`scan`]).
pub fn parse_str(input: &str) -> Result<Expr, Error> {
    let result = scan(input);
    if let Some(err) = result.errors.first() {
        return Err(Error::Scan(*err));
    }
    Ok(parse(&result.tokens)?)
}
