//! # redline-sql-core
//!
//! A lossless parser for `SELECT` statements in the Redshift/Postgres
//! dialect.
//!
//! This crate provides:
//! - A lexer that keeps whitespace and comments as trivia
//! - A recursive descent parser with Pratt expression parsing, driven by
//!   separate precedence tables for column and table expressions
//! - An immutable AST whose nodes render either canonically or back to the
//!   exact source text
//! - Copy-on-write edits that share every untouched subtree
//!
//! ## Rendering
//!
//! ```rust
//! use redline_sql_core::ast::Node;
//!
//! let sql = "select  a,b -- ids\nfrom t";
//! let statement = redline_sql_core::parse(sql).unwrap();
//!
//! assert_eq!(statement.original(), sql);
//! assert_eq!(statement.to_string(), "SELECT a, b FROM t");
//! ```
//!
//! ## Editing
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use redline_sql_core::ast::{replace_path, Child, ChildKey};
//!
//! let statement = redline_sql_core::parse("SELECT a FROM t WHERE x = 1").unwrap();
//! let condition = redline_sql_core::parse_column_expression("x = 2").unwrap();
//!
//! let path = [ChildKey::from("where"), ChildKey::from("expression")];
//! let edited = replace_path(&statement, &path, Child::Column(Arc::new(condition))).unwrap();
//!
//! assert_eq!(edited.to_string(), "SELECT a FROM t WHERE x = 2");
//! assert!(Arc::ptr_eq(
//!     &statement.as_select().results,
//!     &edited.as_select().results,
//! ));
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

use tracing::debug;

pub use ast::{ColumnExpression, Node, Statement, TableExpression};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, ParseErrorKind, Parser, ParserOptions};

/// Parses a complete `SELECT` statement.
///
/// # Errors
///
/// Returns the first `ParseError` encountered.
pub fn parse(sql: &str) -> Result<Statement, ParseError> {
    Parser::new(sql).parse_statement()
}

/// Parses a complete `SELECT` statement with explicit options.
///
/// # Errors
///
/// Returns the first `ParseError` encountered.
pub fn parse_with_options(sql: &str, options: ParserOptions) -> Result<Statement, ParseError> {
    Parser::with_options(sql, options).parse_statement()
}

/// Parses a standalone column expression such as `a.b + 1 AS c`.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not exactly one column expression.
pub fn parse_column_expression(sql: &str) -> Result<ColumnExpression, ParseError> {
    let mut parser = Parser::new(sql);
    let expression = parser.parse_column_expression()?;
    parser.expect_end()?;
    debug!(expression = %expression, "Parsed column expression");
    Ok(expression)
}

/// Parses a standalone table expression such as `a JOIN b ON a.id = b.id`.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not exactly one table expression.
pub fn parse_table_expression(sql: &str) -> Result<TableExpression, ParseError> {
    let mut parser = Parser::new(sql);
    let expression = parser.parse_table_expression()?;
    parser.expect_end()?;
    debug!(expression = %expression, "Parsed table expression");
    Ok(expression)
}
