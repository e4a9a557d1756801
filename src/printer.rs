//! Tree-walking printer that renders an expression tree into its
//! fully-parenthesized canonical text form.
//!
//! Operators render in prefix position, sub-expressions space-separated:
//! `1 + 2 * 3` becomes `(+ 1.0 (* 2.0 3.0))`.

use crate::ast::{Expr, ExprVisitor, LiteralValue};
use crate::token::Token;

/// Render an expression tree as canonical parenthesized text.
///
/// The printer holds no state, so printing the same tree twice
/// yields identical text.
#[must_use]
pub fn print(expr: &Expr) -> String {
    expr.accept(&mut AstPrinter)
}

/// Visitor producing the canonical text form, one handler per
/// [`Expr`] variant.
struct AstPrinter;

impl AstPrinter {
    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::new();
        out.push('(');
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        value.canonical_text()
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.parenthesize("group", &[inner])
    }

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[operand])
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }
}
