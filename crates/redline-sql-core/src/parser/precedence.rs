//! Precedence tables for column and table expressions.
//!
//! Levels are ordered from loosest to tightest binding. A token that does
//! not appear in a table has the lowest level, which always stops climbing.

use serde::Serialize;

use crate::lexer::{Keyword, TokenKind};

/// Binding levels inside column expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ColumnPrecedence {
    Lowest,
    /// `ASC`, `DESC`
    AscDesc,
    /// `AS` and shorthand aliases
    Alias,
    Or,
    And,
    Not,
    Is,
    /// `=`, `!=`, `<>`, `<`, `<=`, `>`, `>=`
    Comparison,
    /// `BETWEEN`, `IN`, `LIKE`, `ILIKE`
    BetweenInLike,
    /// `||`
    Concat,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Unary operators
    Prefix,
    /// `::`
    Cast,
    /// `(` after a function name
    Call,
}

/// Binding levels inside table expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TablePrecedence {
    Lowest,
    /// `JOIN`, join qualifiers and `,`
    Join,
    /// `AS` and shorthand aliases
    Alias,
}

/// Returns the level of a token in column context.
#[must_use]
pub const fn column_precedence(kind: &TokenKind) -> ColumnPrecedence {
    match kind {
        TokenKind::Keyword(Keyword::Asc | Keyword::Desc) => ColumnPrecedence::AscDesc,
        TokenKind::Keyword(Keyword::As) | TokenKind::Identifier => ColumnPrecedence::Alias,
        TokenKind::Keyword(Keyword::Or) => ColumnPrecedence::Or,
        TokenKind::Keyword(Keyword::And) => ColumnPrecedence::And,
        TokenKind::Keyword(Keyword::Not) => ColumnPrecedence::Not,
        TokenKind::Keyword(Keyword::Is) => ColumnPrecedence::Is,
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::LtGt
        | TokenKind::Gt
        | TokenKind::Lt
        | TokenKind::GtEq
        | TokenKind::LtEq => ColumnPrecedence::Comparison,
        TokenKind::Keyword(Keyword::Between | Keyword::In | Keyword::Like | Keyword::Ilike) => {
            ColumnPrecedence::BetweenInLike
        }
        TokenKind::Concat => ColumnPrecedence::Concat,
        TokenKind::Plus | TokenKind::Minus => ColumnPrecedence::Sum,
        TokenKind::Star | TokenKind::Slash => ColumnPrecedence::Product,
        TokenKind::DoubleColon => ColumnPrecedence::Cast,
        TokenKind::LeftParen => ColumnPrecedence::Call,
        _ => ColumnPrecedence::Lowest,
    }
}

/// Returns the level of a token in table context.
#[must_use]
pub const fn table_precedence(kind: &TokenKind) -> TablePrecedence {
    match kind {
        TokenKind::Keyword(
            Keyword::Join | Keyword::Inner | Keyword::Left | Keyword::Right | Keyword::Full,
        )
        | TokenKind::Comma => TablePrecedence::Join,
        TokenKind::Keyword(Keyword::As) | TokenKind::Identifier => TablePrecedence::Alias,
        _ => TablePrecedence::Lowest,
    }
}
