//! Parser error types.

use serde::Serialize;
use thiserror::Error;

use crate::lexer::{Span, Token, TokenKind};

/// The category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParseErrorKind {
    /// No expression can start with the current token.
    NoPrefixHandler,
    /// A required token is missing or a different token was found.
    UnexpectedToken,
    /// A dotted name has too many or empty segments.
    InvalidIdentifier,
    /// Expressions are nested deeper than the configured limit.
    NestingTooDeep,
}

/// A parse error.
///
/// Parsing stops at the first error; there is no partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message} at position {}..{}", .span.start, .span.end)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The error message.
    pub message: String,
    /// The kind of the offending token. `Eof` for premature end of input.
    pub found: TokenKind,
    /// The source text of the offending token.
    pub literal: String,
    /// What was expected instead, if known.
    pub expected: Option<String>,
    /// The location of the error.
    pub span: Span,
}

impl ParseError {
    /// Creates a "no prefix handler" error for the given token.
    #[must_use]
    pub fn no_prefix_handler(token: &Token<'_>) -> Self {
        Self {
            kind: ParseErrorKind::NoPrefixHandler,
            message: format!("no prefix parse function for {}", token.kind),
            found: token.kind,
            literal: token.literal.to_owned(),
            expected: Some("expression".to_owned()),
            span: token.span,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, token: &Token<'_>) -> Self {
        let expected: String = expected.into();
        let message = if token.is_eof() {
            format!("unexpected end of input: expected {expected}")
        } else {
            format!("unexpected {}: expected {expected}", token.kind)
        };
        Self {
            kind: ParseErrorKind::UnexpectedToken,
            message,
            found: token.kind,
            literal: token.literal.to_owned(),
            expected: Some(expected),
            span: token.span,
        }
    }

    /// Creates an "invalid identifier" error.
    #[must_use]
    pub fn invalid_identifier(expected: impl Into<String>, token: &Token<'_>) -> Self {
        let expected: String = expected.into();
        Self {
            kind: ParseErrorKind::InvalidIdentifier,
            message: format!("invalid identifier `{}`: expected {expected}", token.literal),
            found: token.kind,
            literal: token.literal.to_owned(),
            expected: Some(expected),
            span: token.span,
        }
    }

    /// Creates a "nesting too deep" error at the token that would open one
    /// level more than `limit`.
    #[must_use]
    pub fn nesting_too_deep(limit: usize, token: &Token<'_>) -> Self {
        Self {
            kind: ParseErrorKind::NestingTooDeep,
            message: format!("expression nesting exceeds {limit} levels"),
            found: token.kind,
            literal: token.literal.to_owned(),
            expected: None,
            span: token.span,
        }
    }
}
