//! SQL Parser
//!
//! A hand-written recursive descent parser for statements and clauses, with
//! Pratt parsing for column and table expressions.

mod error;
mod options;
mod parser;
mod pratt;
mod precedence;

pub use error::{ParseError, ParseErrorKind};
pub use options::ParserOptions;
pub use parser::Parser;
pub use precedence::{column_precedence, table_precedence, ColumnPrecedence, TablePrecedence};
