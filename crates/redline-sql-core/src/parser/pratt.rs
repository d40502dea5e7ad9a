//! Pratt expression parser for operator precedence.
//!
//! The climbing loop is written once and instantiated per expression kind
//! through [`Grammar`]: each grammar supplies a precedence table and the
//! prefix and infix handlers registered for each token kind.

use super::error::ParseError;
use super::parser::Parser;
use super::precedence::{column_precedence, table_precedence, ColumnPrecedence, TablePrecedence};
use crate::ast::{ColumnExpression, TableExpression};
use crate::lexer::{Keyword, TokenKind};

/// Handler for a token that starts an expression.
pub(super) type PrefixFn<'a, E> = fn(&mut Parser<'a>) -> Result<E, ParseError>;

/// Handler for a token that continues an expression.
pub(super) type InfixFn<'a, E> = fn(&mut Parser<'a>, E) -> Result<E, ParseError>;

/// One expression language: its precedence table and handler tables.
pub(super) trait Grammar<'a> {
    type Expr;
    type Precedence: Copy + Ord;

    fn precedence(kind: &TokenKind) -> Self::Precedence;

    fn prefix(kind: &TokenKind) -> Option<PrefixFn<'a, Self::Expr>>;

    fn infix(kind: &TokenKind) -> Option<InfixFn<'a, Self::Expr>>;
}

/// Column expressions.
pub(super) struct ColumnGrammar;

impl<'a> Grammar<'a> for ColumnGrammar {
    type Expr = ColumnExpression;
    type Precedence = ColumnPrecedence;

    fn precedence(kind: &TokenKind) -> ColumnPrecedence {
        column_precedence(kind)
    }

    fn prefix(kind: &TokenKind) -> Option<PrefixFn<'a, ColumnExpression>> {
        let handler: PrefixFn<'a, ColumnExpression> = match kind {
            TokenKind::Integer | TokenKind::String => Parser::parse_column_literal,
            TokenKind::Keyword(Keyword::Null | Keyword::True | Keyword::False)
            | TokenKind::Star => Parser::parse_column_keyword,
            TokenKind::Identifier => Parser::parse_column_identifier,
            TokenKind::Keyword(Keyword::Not) | TokenKind::Minus => Parser::parse_column_prefix,
            TokenKind::LeftParen => Parser::parse_column_group,
            _ => return None,
        };
        Some(handler)
    }

    fn infix(kind: &TokenKind) -> Option<InfixFn<'a, ColumnExpression>> {
        let handler: InfixFn<'a, ColumnExpression> = match kind {
            TokenKind::Keyword(Keyword::As) | TokenKind::Identifier => Parser::parse_column_alias,
            TokenKind::Keyword(Keyword::Asc | Keyword::Desc) => Parser::parse_column_order,
            TokenKind::Keyword(
                Keyword::And | Keyword::Or | Keyword::Is | Keyword::Like | Keyword::Ilike,
            )
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::LtGt
            | TokenKind::Gt
            | TokenKind::Lt
            | TokenKind::GtEq
            | TokenKind::LtEq
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Concat => Parser::parse_column_infix,
            TokenKind::Keyword(Keyword::Between) => Parser::parse_column_between,
            TokenKind::DoubleColon => Parser::parse_column_cast,
            TokenKind::LeftParen => Parser::parse_column_call,
            _ => return None,
        };
        Some(handler)
    }
}

/// Table expressions.
pub(super) struct TableGrammar;

impl<'a> Grammar<'a> for TableGrammar {
    type Expr = TableExpression;
    type Precedence = TablePrecedence;

    fn precedence(kind: &TokenKind) -> TablePrecedence {
        table_precedence(kind)
    }

    fn prefix(kind: &TokenKind) -> Option<PrefixFn<'a, TableExpression>> {
        let handler: PrefixFn<'a, TableExpression> = match kind {
            TokenKind::Identifier => Parser::parse_table_identifier,
            TokenKind::Keyword(Keyword::Only) => Parser::parse_table_prefix,
            _ => return None,
        };
        Some(handler)
    }

    fn infix(kind: &TokenKind) -> Option<InfixFn<'a, TableExpression>> {
        let handler: InfixFn<'a, TableExpression> = match kind {
            TokenKind::Keyword(
                Keyword::Join | Keyword::Inner | Keyword::Left | Keyword::Right | Keyword::Full,
            ) => Parser::parse_table_join,
            TokenKind::Comma => Parser::parse_table_infix,
            TokenKind::Keyword(Keyword::As) | TokenKind::Identifier => Parser::parse_table_alias,
            _ => return None,
        };
        Some(handler)
    }
}

impl<'a> Parser<'a> {
    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// A token with a registered precedence but no infix handler ends the
    /// expression without error. Every call counts one level against
    /// `ParserOptions::max_depth`.
    pub(super) fn parse_expression<G: Grammar<'a>>(
        &mut self,
        precedence: G::Precedence,
    ) -> Result<G::Expr, ParseError> {
        self.enter_nesting()?;
        let result = self.parse_nested::<G>(precedence);
        self.leave_nesting();
        result
    }

    fn parse_nested<G: Grammar<'a>>(
        &mut self,
        precedence: G::Precedence,
    ) -> Result<G::Expr, ParseError> {
        let Some(prefix) = G::prefix(&self.current_token().kind) else {
            return Err(ParseError::no_prefix_handler(self.current_token()));
        };
        let mut left = prefix(self)?;

        while !self.current_token().is_eof()
            && precedence < G::precedence(&self.current_token().kind)
        {
            let Some(infix) = G::infix(&self.current_token().kind) else {
                return Ok(left);
            };
            left = infix(self, left)?;
        }

        Ok(left)
    }
}
