//! SQL Parser implementation.

use std::mem;
use std::sync::Arc;

use tracing::{debug, trace};

use super::error::ParseError;
use super::options::ParserOptions;
use super::pratt::{ColumnGrammar, TableGrammar};
use super::precedence::{column_precedence, table_precedence, ColumnPrecedence, TablePrecedence};
use crate::ast::{
    ColumnAlias, ColumnBetween, ColumnCall, ColumnExpression, ColumnGroup, ColumnIdentifier,
    ColumnInfix, ColumnLiteral, ColumnOrder, ColumnPrefix, FromClause, GroupByClause,
    HavingClause, Keyword as KeywordNode, LimitClause, Name, OrderByClause, ResultsClause, Select,
    Statement, TableAlias, TableExpression, TableIdentifier, TableInfix, TableJoin, TablePrefix,
    Trivia, WhereClause,
};
use crate::lexer::{split_qualified, Keyword, Lexer, Token, TokenKind};

/// SQL Parser.
///
/// Keeps two tokens of lookahead, each with the trivia that preceded it.
/// Every consumed token hands its trivia to exactly one node.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    current_trivia: Trivia,
    peek: Token<'a>,
    peek_trivia: Trivia,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a new parser with explicit options.
    #[must_use]
    pub fn with_options(input: &'a str, options: ParserOptions) -> Self {
        let mut lexer = Lexer::with_options(input, options);
        let (current_trivia, current) = lexer.next_whitespace_and_token();
        let (peek_trivia, peek) = lexer.next_whitespace_and_token();
        Self {
            lexer,
            current,
            current_trivia,
            peek,
            peek_trivia,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// The token the parser is looking at.
    #[must_use]
    pub const fn current_token(&self) -> &Token<'a> {
        &self.current
    }

    /// The token after the current one.
    #[must_use]
    pub const fn peek_token(&self) -> &Token<'a> {
        &self.peek
    }

    /// Parses a single SELECT statement spanning the whole input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid statement or if
    /// anything follows it.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        debug!(sql = %self.lexer.input(), "Parsing statement");
        let result = self
            .parse_select()
            .and_then(|select| self.expect_end().map(|()| Statement::Select(select)));
        match &result {
            Ok(_) => debug!("Parsed statement"),
            Err(err) => debug!(
                kind = ?err.kind,
                found = %err.found,
                span = %err.span,
                "Parse failed"
            ),
        }
        result
    }

    /// Parses a column expression at the current position.
    ///
    /// Trivia pending before the next token becomes the expression's
    /// trailing trivia.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if no column expression starts here.
    pub fn parse_column_expression(&mut self) -> Result<ColumnExpression, ParseError> {
        let mut expression = self.parse_column(ColumnPrecedence::Lowest)?;
        expression.push_trailing(self.take_trivia());
        Ok(expression)
    }

    /// Parses a table expression at the current position.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if no table expression starts here.
    pub fn parse_table_expression(&mut self) -> Result<TableExpression, ParseError> {
        let mut expression = self.parse_table(TablePrecedence::Lowest)?;
        expression.push_trailing(self.take_trivia());
        Ok(expression)
    }

    /// Fails unless all input has been consumed.
    ///
    /// # Errors
    ///
    /// Returns an `UnexpectedToken` error naming the first leftover token.
    pub fn expect_end(&self) -> Result<(), ParseError> {
        if self.current.is_eof() {
            Ok(())
        } else {
            Err(ParseError::unexpected("end of input", &self.current))
        }
    }

    // Statement and clauses

    fn parse_select(&mut self) -> Result<Select, ParseError> {
        let preceding = self.take_trivia();
        let select = Arc::new(self.expect_keyword(Keyword::Select)?);
        let results = Arc::new(self.parse_results_clause()?);

        let from = if self.check_keyword(Keyword::From) {
            Some(Arc::new(self.parse_from_clause()?))
        } else {
            None
        };
        let where_clause = if self.check_keyword(Keyword::Where) {
            Some(Arc::new(self.parse_where_clause()?))
        } else {
            None
        };
        let group_by = if self.check_keyword(Keyword::Group) {
            Some(Arc::new(self.parse_group_by_clause()?))
        } else {
            None
        };
        let having = if self.check_keyword(Keyword::Having) {
            Some(Arc::new(self.parse_having_clause()?))
        } else {
            None
        };
        let order_by = if self.check_keyword(Keyword::Order) {
            Some(Arc::new(self.parse_order_by_clause()?))
        } else {
            None
        };
        let limit = if self.check_keyword(Keyword::Limit) {
            Some(Arc::new(self.parse_limit_clause()?))
        } else {
            None
        };

        Ok(Select {
            preceding,
            select,
            results,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
            trailing: self.take_trivia(),
        })
    }

    fn parse_results_clause(&mut self) -> Result<ResultsClause, ParseError> {
        trace!("Parsing result list");
        let preceding = self.take_trivia();
        let quantifier = if self.check_keyword(Keyword::Distinct) || self.check_keyword(Keyword::All)
        {
            Some(Arc::new(self.parse_keyword()))
        } else {
            None
        };
        Ok(ResultsClause {
            preceding,
            quantifier,
            expressions: self.parse_column_list()?,
            trailing: Trivia::new(),
        })
    }

    fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        trace!("Parsing FROM clause");
        let preceding = self.take_trivia();
        let keyword = Arc::new(self.parse_keyword());
        Ok(FromClause {
            preceding,
            keyword,
            expression: Arc::new(self.parse_table(TablePrecedence::Lowest)?),
            trailing: Trivia::new(),
        })
    }

    fn parse_where_clause(&mut self) -> Result<WhereClause, ParseError> {
        trace!("Parsing WHERE clause");
        let preceding = self.take_trivia();
        let keyword = Arc::new(self.parse_keyword());
        Ok(WhereClause {
            preceding,
            keyword,
            expression: Arc::new(self.parse_column(ColumnPrecedence::Lowest)?),
            trailing: Trivia::new(),
        })
    }

    fn parse_group_by_clause(&mut self) -> Result<GroupByClause, ParseError> {
        trace!("Parsing GROUP BY clause");
        let preceding = self.take_trivia();
        let group = Arc::new(self.parse_keyword());
        let by = Arc::new(self.expect_keyword(Keyword::By)?);
        Ok(GroupByClause {
            preceding,
            group,
            by,
            expressions: self.parse_column_list()?,
            trailing: Trivia::new(),
        })
    }

    fn parse_having_clause(&mut self) -> Result<HavingClause, ParseError> {
        trace!("Parsing HAVING clause");
        let preceding = self.take_trivia();
        let keyword = Arc::new(self.parse_keyword());
        Ok(HavingClause {
            preceding,
            keyword,
            expression: Arc::new(self.parse_column(ColumnPrecedence::Lowest)?),
            trailing: Trivia::new(),
        })
    }

    fn parse_order_by_clause(&mut self) -> Result<OrderByClause, ParseError> {
        trace!("Parsing ORDER BY clause");
        let preceding = self.take_trivia();
        let order = Arc::new(self.parse_keyword());
        let by = Arc::new(self.expect_keyword(Keyword::By)?);
        Ok(OrderByClause {
            preceding,
            order,
            by,
            expressions: self.parse_column_list()?,
            trailing: Trivia::new(),
        })
    }

    fn parse_limit_clause(&mut self) -> Result<LimitClause, ParseError> {
        trace!("Parsing LIMIT clause");
        let preceding = self.take_trivia();
        let keyword = Arc::new(self.parse_keyword());
        Ok(LimitClause {
            preceding,
            keyword,
            expression: Arc::new(self.parse_column(ColumnPrecedence::Lowest)?),
            trailing: Trivia::new(),
        })
    }

    /// Parses a comma-separated, non-empty list of column expressions.
    ///
    /// Trivia before each comma becomes the trailing trivia of the item it
    /// follows.
    fn parse_column_list(&mut self) -> Result<Vec<Arc<ColumnExpression>>, ParseError> {
        let mut expressions = Vec::new();
        loop {
            let mut expression = self.parse_column(ColumnPrecedence::Lowest)?;
            if self.check(TokenKind::Comma) {
                let (trivia, _) = self.advance();
                expression.push_trailing(trivia);
                expressions.push(Arc::new(expression));
            } else {
                expressions.push(Arc::new(expression));
                return Ok(expressions);
            }
        }
    }

    // Column expressions

    /// Opens one level of expression nesting.
    pub(super) fn enter_nesting(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::nesting_too_deep(self.max_depth, &self.current));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn parse_column(&mut self, precedence: ColumnPrecedence) -> Result<ColumnExpression, ParseError> {
        self.parse_expression::<ColumnGrammar>(precedence)
    }

    pub(super) fn parse_column_literal(&mut self) -> Result<ColumnExpression, ParseError> {
        let (preceding, token) = self.advance();
        Ok(ColumnExpression::Literal(ColumnLiteral {
            preceding,
            kind: token.kind,
            literal: token.literal.to_owned(),
            trailing: Trivia::new(),
        }))
    }

    pub(super) fn parse_column_keyword(&mut self) -> Result<ColumnExpression, ParseError> {
        Ok(ColumnExpression::Keyword(self.parse_keyword()))
    }

    pub(super) fn parse_column_identifier(&mut self) -> Result<ColumnExpression, ParseError> {
        let segments = split_qualified(self.current.literal);
        let Some(identifier) = ColumnIdentifier::from_segments(&segments) else {
            return Err(ParseError::invalid_identifier(
                "one to three non-empty name segments",
                &self.current,
            ));
        };
        let (preceding, _) = self.advance();
        Ok(ColumnExpression::Identifier(ColumnIdentifier {
            preceding,
            ..identifier
        }))
    }

    /// Unary `NOT` and `-`. Both bind tighter than any binary operator, so
    /// `NOT a = b` is `(NOT a) = b`.
    pub(super) fn parse_column_prefix(&mut self) -> Result<ColumnExpression, ParseError> {
        let operator = Arc::new(self.parse_keyword());
        Ok(ColumnExpression::Prefix(ColumnPrefix {
            preceding: Trivia::new(),
            operator,
            right: Arc::new(self.parse_column(ColumnPrecedence::Prefix)?),
            trailing: Trivia::new(),
        }))
    }

    pub(super) fn parse_column_group(&mut self) -> Result<ColumnExpression, ParseError> {
        let (preceding, _) = self.advance();
        let mut expression = self.parse_column(ColumnPrecedence::Lowest)?;
        let (trivia, _) = self.expect(TokenKind::RightParen)?;
        expression.push_trailing(trivia);
        Ok(ColumnExpression::Group(ColumnGroup {
            preceding,
            expression: Arc::new(expression),
            trailing: Trivia::new(),
        }))
    }

    pub(super) fn parse_column_alias(
        &mut self,
        left: ColumnExpression,
    ) -> Result<ColumnExpression, ParseError> {
        let as_keyword = self.parse_optional_as();
        Ok(ColumnExpression::Alias(ColumnAlias {
            preceding: Trivia::new(),
            value: Arc::new(left),
            as_keyword,
            alias: Arc::new(self.parse_alias_name()?),
            trailing: Trivia::new(),
        }))
    }

    pub(super) fn parse_column_order(
        &mut self,
        left: ColumnExpression,
    ) -> Result<ColumnExpression, ParseError> {
        Ok(ColumnExpression::Order(ColumnOrder {
            preceding: Trivia::new(),
            value: Arc::new(left),
            order: Arc::new(self.parse_keyword()),
            trailing: Trivia::new(),
        }))
    }

    /// Left-associative binary operator at the operator's own level.
    pub(super) fn parse_column_infix(
        &mut self,
        left: ColumnExpression,
    ) -> Result<ColumnExpression, ParseError> {
        let precedence = column_precedence(&self.current.kind);
        let operator = Arc::new(self.parse_keyword());
        Ok(ColumnExpression::Infix(ColumnInfix {
            preceding: Trivia::new(),
            left: Arc::new(left),
            operator,
            right: Arc::new(self.parse_column(precedence)?),
            trailing: Trivia::new(),
        }))
    }

    /// `x :: type`. A reserved word such as `timestamp` is accepted as the
    /// type name.
    pub(super) fn parse_column_cast(
        &mut self,
        left: ColumnExpression,
    ) -> Result<ColumnExpression, ParseError> {
        let operator = Arc::new(self.parse_keyword());
        let right = if matches!(self.current.kind, TokenKind::Keyword(_)) {
            ColumnExpression::Keyword(self.parse_keyword())
        } else {
            self.parse_column(ColumnPrecedence::Cast)?
        };
        Ok(ColumnExpression::Infix(ColumnInfix {
            preceding: Trivia::new(),
            left: Arc::new(left),
            operator,
            right: Arc::new(right),
            trailing: Trivia::new(),
        }))
    }

    pub(super) fn parse_column_between(
        &mut self,
        left: ColumnExpression,
    ) -> Result<ColumnExpression, ParseError> {
        let between = Arc::new(self.parse_keyword());
        let start = Arc::new(self.parse_column(ColumnPrecedence::BetweenInLike)?);
        let and = Arc::new(self.expect_keyword(Keyword::And)?);
        let end = Arc::new(self.parse_column(ColumnPrecedence::BetweenInLike)?);
        Ok(ColumnExpression::Between(ColumnBetween {
            preceding: Trivia::new(),
            left: Arc::new(left),
            between,
            start,
            and,
            end,
            trailing: Trivia::new(),
        }))
    }

    /// `(` after a function name: a comma-separated, possibly empty,
    /// argument list.
    pub(super) fn parse_column_call(
        &mut self,
        left: ColumnExpression,
    ) -> Result<ColumnExpression, ParseError> {
        let ColumnExpression::Identifier(mut function) = left else {
            return Err(ParseError::unexpected("operator", &self.current));
        };
        let (trivia, _) = self.advance();
        function.trailing.extend(trivia);

        let mut inner = Trivia::new();
        let mut arguments = Vec::new();
        if self.check(TokenKind::RightParen) {
            (inner, _) = self.advance();
        } else {
            loop {
                let mut argument = self.parse_column(ColumnPrecedence::Lowest)?;
                if !self.check(TokenKind::Comma) && !self.check(TokenKind::RightParen) {
                    return Err(ParseError::unexpected("',' or ')'", &self.current));
                }
                let (trivia, token) = self.advance();
                argument.push_trailing(trivia);
                arguments.push(Arc::new(argument));
                if token.kind == TokenKind::RightParen {
                    break;
                }
            }
        }

        Ok(ColumnExpression::Call(ColumnCall {
            preceding: Trivia::new(),
            function: Arc::new(function),
            inner,
            arguments,
            trailing: Trivia::new(),
        }))
    }

    // Table expressions

    fn parse_table(&mut self, precedence: TablePrecedence) -> Result<TableExpression, ParseError> {
        self.parse_expression::<TableGrammar>(precedence)
    }

    pub(super) fn parse_table_identifier(&mut self) -> Result<TableExpression, ParseError> {
        let segments = split_qualified(self.current.literal);
        let Some(identifier) = TableIdentifier::from_segments(&segments) else {
            return Err(ParseError::invalid_identifier(
                "one or two non-empty name segments",
                &self.current,
            ));
        };
        let (preceding, _) = self.advance();
        Ok(TableExpression::Identifier(TableIdentifier {
            preceding,
            ..identifier
        }))
    }

    /// `ONLY t`; the operand may not be a join.
    pub(super) fn parse_table_prefix(&mut self) -> Result<TableExpression, ParseError> {
        let operator = Arc::new(self.parse_keyword());
        Ok(TableExpression::Prefix(TablePrefix {
            preceding: Trivia::new(),
            operator,
            right: Arc::new(self.parse_table(TablePrecedence::Alias)?),
            trailing: Trivia::new(),
        }))
    }

    /// Comma join.
    pub(super) fn parse_table_infix(
        &mut self,
        left: TableExpression,
    ) -> Result<TableExpression, ParseError> {
        let precedence = table_precedence(&self.current.kind);
        let operator = Arc::new(self.parse_keyword());
        Ok(TableExpression::Infix(TableInfix {
            preceding: Trivia::new(),
            left: Arc::new(left),
            operator,
            right: Arc::new(self.parse_table(precedence)?),
            trailing: Trivia::new(),
        }))
    }

    pub(super) fn parse_table_alias(
        &mut self,
        left: TableExpression,
    ) -> Result<TableExpression, ParseError> {
        let as_keyword = self.parse_optional_as();
        Ok(TableExpression::Alias(TableAlias {
            preceding: Trivia::new(),
            value: Arc::new(left),
            as_keyword,
            alias: Arc::new(self.parse_alias_name()?),
            trailing: Trivia::new(),
        }))
    }

    pub(super) fn parse_table_join(
        &mut self,
        left: TableExpression,
    ) -> Result<TableExpression, ParseError> {
        let kind = if self.check_keyword(Keyword::Join) {
            None
        } else {
            Some(Arc::new(self.parse_keyword()))
        };
        let outer = match &kind {
            Some(kind) if !kind.is(Keyword::Inner) && self.check_keyword(Keyword::Outer) => {
                Some(Arc::new(self.parse_keyword()))
            }
            _ => None,
        };
        let join = Arc::new(self.expect_keyword(Keyword::Join)?);
        let right = Arc::new(self.parse_table(TablePrecedence::Join)?);
        let on = Arc::new(self.expect_keyword(Keyword::On)?);
        let condition = Arc::new(self.parse_column(ColumnPrecedence::Lowest)?);
        Ok(TableExpression::Join(TableJoin {
            preceding: Trivia::new(),
            left: Arc::new(left),
            kind,
            outer,
            join,
            right,
            on,
            condition,
            trailing: Trivia::new(),
        }))
    }

    // Shared pieces

    fn parse_optional_as(&mut self) -> Option<Arc<KeywordNode>> {
        self.check_keyword(Keyword::As)
            .then(|| Arc::new(self.parse_keyword()))
    }

    fn parse_alias_name(&mut self) -> Result<Name, ParseError> {
        if !self.check(TokenKind::Identifier) {
            return Err(ParseError::unexpected("alias name", &self.current));
        }
        if split_qualified(self.current.literal).len() != 1 {
            return Err(ParseError::invalid_identifier(
                "an unqualified alias name",
                &self.current,
            ));
        }
        let (preceding, token) = self.advance();
        Ok(Name {
            preceding,
            value: token.literal.to_owned(),
            trailing: Trivia::new(),
        })
    }

    /// Consumes the current token as a keyword leaf, trivia included.
    fn parse_keyword(&mut self) -> KeywordNode {
        let (preceding, token) = self.advance();
        KeywordNode {
            preceding,
            kind: token.kind,
            literal: token.literal.to_owned(),
            trailing: Trivia::new(),
        }
    }

    // Token helpers

    /// Consumes the current token and returns it with its preceding trivia.
    fn advance(&mut self) -> (Trivia, Token<'a>) {
        let (trivia, token) = self.lexer.next_whitespace_and_token();
        let peek_trivia = mem::replace(&mut self.peek_trivia, trivia);
        let peek = mem::replace(&mut self.peek, token);
        let trivia = mem::replace(&mut self.current_trivia, peek_trivia);
        (trivia, mem::replace(&mut self.current, peek))
    }

    /// Takes the trivia in front of the current token.
    fn take_trivia(&mut self) -> Trivia {
        mem::take(&mut self.current_trivia)
    }

    /// Checks if the current token is of the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.kind.is_keyword(keyword)
    }

    /// Expects the current token to be the given kind and consumes it.
    fn expect(&mut self, kind: TokenKind) -> Result<(Trivia, Token<'a>), ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(kind.to_string(), &self.current))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<KeywordNode, ParseError> {
        if self.check_keyword(keyword) {
            Ok(self.parse_keyword())
        } else {
            Err(ParseError::unexpected(
                TokenKind::Keyword(keyword).to_string(),
                &self.current,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;
    use crate::parser::ParseErrorKind;

    fn parse(sql: &str) -> Result<Statement, ParseError> {
        Parser::new(sql).parse_statement()
    }

    fn column(sql: &str) -> ColumnExpression {
        Parser::new(sql).parse_column_expression().unwrap()
    }

    #[test]
    fn test_simple_select() {
        let stmt = parse("SELECT id, name FROM users").unwrap();
        let select = stmt.as_select();
        assert_eq!(select.results.expressions.len(), 2);
        assert!(select.from.is_some());
        assert!(select.where_clause.is_none());
    }

    #[test]
    fn test_lookahead_buffers_two_tokens() {
        let parser = Parser::new("SELECT  a");
        assert!(parser.current_token().kind.is_keyword(Keyword::Select));
        assert_eq!(parser.peek_token().literal, "a");
    }

    #[test]
    fn test_leading_and_trailing_trivia() {
        let err = parse("  SELECT 1 ;").unwrap_err();
        assert_eq!(err.found, TokenKind::Illegal);

        let stmt = parse("\n SELECT 1 \n").unwrap();
        let select = stmt.as_select();
        assert_eq!(select.preceding, vec!["\n "]);
        assert_eq!(select.trailing, vec![" \n"]);
        assert_eq!(stmt.original(), "\n SELECT 1 \n");
    }

    #[test]
    fn test_infix_is_left_associative() {
        let expression = column("1 - 2 - 3");
        let ColumnExpression::Infix(infix) = expression else {
            panic!("expected infix");
        };
        assert_eq!(infix.left.to_string(), "1 - 2");
        assert_eq!(infix.right.to_string(), "3");
    }

    #[test]
    fn test_unary_operators_bind_tightest() {
        let ColumnExpression::Infix(infix) = column("NOT a = b") else {
            panic!("expected infix");
        };
        assert_eq!(infix.left.node_type(), "PrefixExpression");
        assert_eq!(infix.left.to_string(), "NOT a");
        assert_eq!(infix.right.to_string(), "b");

        let ColumnExpression::Infix(infix) = column("- a * b") else {
            panic!("expected infix");
        };
        assert_eq!(infix.left.to_string(), "- a");
    }

    #[test]
    fn test_call_trivia() {
        let expression = column("f (a , b )");
        assert_eq!(expression.to_string(), "f(a, b)");
        assert_eq!(expression.original(), "f (a , b )");
        let ColumnExpression::Call(call) = expression else {
            panic!("expected call");
        };
        assert_eq!(call.function.trailing, vec![" "]);
        assert_eq!(call.arguments[0].trailing(), [" "]);
        assert_eq!(call.arguments[1].trailing(), [" "]);
    }

    #[test]
    fn test_empty_call() {
        let expression = column("now( )");
        assert_eq!(expression.to_string(), "now()");
        assert_eq!(expression.original(), "now( )");
    }

    #[test]
    fn test_call_on_non_identifier() {
        let err = Parser::new("1(2)").parse_column_expression().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
        assert_eq!(err.found, TokenKind::LeftParen);
    }

    #[test]
    fn test_cast_to_keyword_type() {
        let expression = column("created_at::timestamp");
        assert_eq!(expression.to_string(), "created_at :: TIMESTAMP");
        assert_eq!(expression.original(), "created_at::timestamp");
    }

    #[test]
    fn test_table_expression_entry_point() {
        let table = Parser::new("a JOIN b ON a.id = b.id ")
            .parse_table_expression()
            .unwrap();
        assert_eq!(table.node_type(), "JoinExpression");
        assert_eq!(table.trailing(), [" "]);
    }

    #[test]
    fn test_expect_end() {
        let mut parser = Parser::new("a 1");
        let expression = parser.parse_column_expression().unwrap();
        assert_eq!(expression.node_type(), "Identifier");
        let err = parser.expect_end().unwrap_err();
        assert_eq!(err.found, TokenKind::Integer);
        assert_eq!(err.expected.as_deref(), Some("end of input"));
    }

    #[test]
    fn test_nesting_depth_unwinds() {
        let options = ParserOptions::new().max_depth(2);
        let mut parser = Parser::with_options("(a)", options);
        parser.parse_column_expression().unwrap();
        assert_eq!(parser.depth, 0);

        let mut parser = Parser::with_options("((a))", options);
        let err = parser.parse_column_expression().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep);
        assert_eq!(err.span.start, 2);
        assert_eq!(parser.depth, 0);
    }
}
