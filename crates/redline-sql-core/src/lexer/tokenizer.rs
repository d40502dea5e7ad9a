//! SQL Tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind};
use crate::parser::ParserOptions;

/// A lexer that tokenizes SQL input one token at a time.
///
/// Unlike a skipping lexer, whitespace and comments come back as
/// [`TokenKind::Whitespace`] and [`TokenKind::Comment`] tokens. The lexer
/// never fails: anything it cannot classify becomes [`TokenKind::Illegal`].
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    options: ParserOptions,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a new lexer with explicit options.
    #[must_use]
    pub const fn with_options(input: &'a str, options: ParserOptions) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            options,
        }
    }

    /// Returns the full input being scanned.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances past `next` if it is the current character.
    fn advance_if(&mut self, next: char) -> bool {
        if self.peek() == Some(next) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Creates a token covering `start..pos`.
    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            &self.input[self.start..self.pos],
            Span::new(self.start, self.pos),
        )
    }

    /// Creates the token for a quote or comment that ran into end of input.
    fn unterminated(&self, kind: TokenKind) -> Token<'a> {
        if self.options.lenient_quotes {
            self.make_token(kind)
        } else {
            self.make_token(TokenKind::Illegal)
        }
    }

    /// Scans the next token, trivia included.
    #[must_use]
    pub fn next_token(&mut self) -> Token<'a> {
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            c if c.is_ascii_whitespace() => {
                while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
                    self.advance();
                }
                self.make_token(TokenKind::Whitespace)
            }

            // Comments
            '-' if self.peek() == Some('-') => self.scan_line_comment(),
            '/' if self.peek() == Some('*') => self.scan_block_comment(),

            // Single-character tokens
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '=' => self.make_token(TokenKind::Eq),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),

            // Potentially multi-character tokens
            '|' => {
                if self.advance_if('|') {
                    self.make_token(TokenKind::Concat)
                } else {
                    self.make_token(TokenKind::Pipe)
                }
            }
            '!' => {
                if self.advance_if('=') {
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Bang)
                }
            }
            '<' => {
                if self.advance_if('=') {
                    self.make_token(TokenKind::LtEq)
                } else if self.advance_if('>') {
                    self.make_token(TokenKind::LtGt)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                if self.advance_if('=') {
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            ':' => {
                if self.advance_if(':') {
                    self.make_token(TokenKind::DoubleColon)
                } else {
                    self.make_token(TokenKind::Colon)
                }
            }

            // String literals
            '\'' => self.scan_string(),

            // Numbers
            c if c.is_ascii_digit() => {
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
                self.make_token(TokenKind::Integer)
            }

            // Identifiers and keywords, quoted or not
            c if c == '"' || is_identifier_start(c) => {
                self.pos = self.start;
                self.scan_identifier()
            }

            _ => self.make_token(TokenKind::Illegal),
        }
    }

    /// Collects consecutive whitespace and comment tokens, then returns them
    /// together with the next significant token.
    pub fn next_whitespace_and_token(&mut self) -> (Vec<String>, Token<'a>) {
        let mut trivia = Vec::new();
        loop {
            let token = self.next_token();
            if token.kind.is_trivia() {
                trivia.push(token.literal.to_owned());
            } else {
                return (trivia, token);
            }
        }
    }

    /// Tokenizes the entire input, trivia included, and returns all tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Scans `-- ...` up to, but not including, the end of the line.
    fn scan_line_comment(&mut self) -> Token<'a> {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
        self.make_token(TokenKind::Comment)
    }

    /// Scans `/* ... */`. The opening `/` is already consumed.
    fn scan_block_comment(&mut self) -> Token<'a> {
        self.advance(); // *
        loop {
            match self.advance() {
                Some('*') if self.advance_if('/') => return self.make_token(TokenKind::Comment),
                Some(_) => {}
                None => return self.unterminated(TokenKind::Comment),
            }
        }
    }

    /// Scans a single-quoted string. The opening quote is already consumed.
    ///
    /// A doubled quote is an escaped quote. The text is kept verbatim.
    fn scan_string(&mut self) -> Token<'a> {
        loop {
            match self.advance() {
                Some('\'') => {
                    if !self.advance_if('\'') {
                        return self.make_token(TokenKind::String);
                    }
                }
                Some(_) => {}
                None => return self.unterminated(TokenKind::String),
            }
        }
    }

    /// Scans a quoted identifier segment starting at the opening quote.
    ///
    /// Returns false if the input ends before the closing quote.
    fn scan_quoted_segment(&mut self) -> bool {
        self.advance(); // opening quote
        loop {
            match self.advance() {
                Some('"') => {
                    if !self.advance_if('"') {
                        return true;
                    }
                }
                Some(_) => {}
                None => return false,
            }
        }
    }

    /// Scans a possibly dotted identifier such as `schema."table".column`,
    /// or a keyword.
    fn scan_identifier(&mut self) -> Token<'a> {
        loop {
            if self.peek() == Some('"') {
                if !self.scan_quoted_segment() {
                    return self.unterminated(TokenKind::Identifier);
                }
            } else {
                while self.peek().is_some_and(is_identifier_char) {
                    self.advance();
                }
            }

            if !self.advance_if('.') {
                break;
            }
            // Qualified wildcard ends the name: t.*
            if self.advance_if('*') {
                break;
            }
        }

        let text = &self.input[self.start..self.pos];

        // A keyword directly followed by `(` is a function name.
        match Keyword::from_str(text) {
            Some(keyword) if self.peek() != Some('(') => {
                self.make_token(TokenKind::Keyword(keyword))
            }
            _ => self.make_token(TokenKind::Identifier),
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Splits a dotted identifier into its segments.
///
/// Dots inside a double-quoted segment do not split, and quotes are kept:
/// `s."a.b".c` yields `["s", "\"a.b\"", "c"]`.
#[must_use]
pub fn split_qualified(literal: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut quoted = false;
    let mut start = 0;
    for (index, c) in literal.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '.' if !quoted => {
                segments.push(&literal[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    segments.push(&literal[start..]);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|t| (t.kind, t.literal))
            .collect()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokens(input).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokens(""), vec![(TokenKind::Eof, "")]);
    }

    #[test]
    fn test_simple() {
        assert_eq!(
            tokens("+()"),
            vec![
                (TokenKind::Plus, "+"),
                (TokenKind::LeftParen, "("),
                (TokenKind::RightParen, ")"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_words() {
        assert_eq!(
            tokens(r#"select 'hello' AS world, "select""#),
            vec![
                (TokenKind::Keyword(Keyword::Select), "select"),
                (TokenKind::Whitespace, " "),
                (TokenKind::String, "'hello'"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Keyword(Keyword::As), "AS"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "world"),
                (TokenKind::Comma, ","),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "\"select\""),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_is_not_null() {
        assert_eq!(
            kinds("x IS NOT NULL"),
            vec![
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Keyword(Keyword::Is),
                TokenKind::Whitespace,
                TokenKind::Keyword(Keyword::Not),
                TokenKind::Whitespace,
                TokenKind::Keyword(Keyword::Null),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_qualified_identifier() {
        assert_eq!(
            tokens(r#"some_schema."some_table".some_field"#),
            vec![
                (TokenKind::Identifier, r#"some_schema."some_table".some_field"#),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_qualified_wildcard() {
        assert_eq!(
            tokens("u.* FROM"),
            vec![
                (TokenKind::Identifier, "u.*"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Keyword(Keyword::From), "FROM"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_keyword_vs_function_identifier() {
        assert_eq!(
            tokens("LEFT JOIN"),
            vec![
                (TokenKind::Keyword(Keyword::Left), "LEFT"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Keyword(Keyword::Join), "JOIN"),
                (TokenKind::Eof, ""),
            ]
        );
        assert_eq!(
            tokens("LEFT()"),
            vec![
                (TokenKind::Identifier, "LEFT"),
                (TokenKind::LeftParen, "("),
                (TokenKind::RightParen, ")"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("|| | != ! <= <> < >= > :: : = + - * / , ."),
            vec![
                TokenKind::Concat,
                TokenKind::Whitespace,
                TokenKind::Pipe,
                TokenKind::Whitespace,
                TokenKind::NotEq,
                TokenKind::Whitespace,
                TokenKind::Bang,
                TokenKind::Whitespace,
                TokenKind::LtEq,
                TokenKind::Whitespace,
                TokenKind::LtGt,
                TokenKind::Whitespace,
                TokenKind::Lt,
                TokenKind::Whitespace,
                TokenKind::GtEq,
                TokenKind::Whitespace,
                TokenKind::Gt,
                TokenKind::Whitespace,
                TokenKind::DoubleColon,
                TokenKind::Whitespace,
                TokenKind::Colon,
                TokenKind::Whitespace,
                TokenKind::Eq,
                TokenKind::Whitespace,
                TokenKind::Plus,
                TokenKind::Whitespace,
                TokenKind::Minus,
                TokenKind::Whitespace,
                TokenKind::Star,
                TokenKind::Whitespace,
                TokenKind::Slash,
                TokenKind::Whitespace,
                TokenKind::Comma,
                TokenKind::Whitespace,
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_query() {
        let query = "\nSELECT u.id, u.first_name || ' ' || u.last_name AS user_name\nFROM users u\n";
        assert_eq!(
            tokens(query),
            vec![
                (TokenKind::Whitespace, "\n"),
                (TokenKind::Keyword(Keyword::Select), "SELECT"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "u.id"),
                (TokenKind::Comma, ","),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "u.first_name"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Concat, "||"),
                (TokenKind::Whitespace, " "),
                (TokenKind::String, "' '"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Concat, "||"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "u.last_name"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Keyword(Keyword::As), "AS"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "user_name"),
                (TokenKind::Whitespace, "\n"),
                (TokenKind::Keyword(Keyword::From), "FROM"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "users"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "u"),
                (TokenKind::Whitespace, "\n"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            tokens("a -- note\n/* block */b"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Comment, "-- note"),
                (TokenKind::Whitespace, "\n"),
                (TokenKind::Comment, "/* block */"),
                (TokenKind::Identifier, "b"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_escaped_quotes_are_kept_verbatim() {
        assert_eq!(
            tokens(r#"'it''s' "a""b""#),
            vec![
                (TokenKind::String, "'it''s'"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, r#""a""b""#),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_unterminated_quotes_are_illegal() {
        assert_eq!(
            tokens("'abc"),
            vec![(TokenKind::Illegal, "'abc"), (TokenKind::Eof, "")]
        );
        assert_eq!(
            tokens("s.\"tab"),
            vec![(TokenKind::Illegal, "s.\"tab"), (TokenKind::Eof, "")]
        );
        assert_eq!(
            tokens("/* open"),
            vec![(TokenKind::Illegal, "/* open"), (TokenKind::Eof, "")]
        );
    }

    #[test]
    fn test_lenient_quotes_run_to_end_of_input() {
        let options = ParserOptions::default().lenient_quotes(true);
        let tokens: Vec<_> = Lexer::with_options("'abc", options)
            .tokenize()
            .into_iter()
            .map(|t| (t.kind, t.literal))
            .collect();
        assert_eq!(tokens, vec![(TokenKind::String, "'abc"), (TokenKind::Eof, "")]);
    }

    #[test]
    fn test_illegal_character() {
        assert_eq!(
            tokens("a ; b"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Illegal, ";"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "b"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = Lexer::new("SELECT id").tokenize();
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[2].span, Span::new(7, 9));
        assert_eq!(tokens[3].span, Span::new(9, 9));
    }

    #[test]
    fn test_next_whitespace_and_token() {
        let mut lexer = Lexer::new("  -- c\n x ");
        let (trivia, token) = lexer.next_whitespace_and_token();
        assert_eq!(trivia, vec!["  ", "-- c", "\n "]);
        assert_eq!(token.literal, "x");
        let (trivia, token) = lexer.next_whitespace_and_token();
        assert_eq!(trivia, vec![" "]);
        assert!(token.is_eof());
    }

    #[test]
    fn test_split_qualified() {
        assert_eq!(split_qualified("a"), vec!["a"]);
        assert_eq!(split_qualified("s.t.c"), vec!["s", "t", "c"]);
        assert_eq!(split_qualified(r#"s."a.b".c"#), vec!["s", r#""a.b""#, "c"]);
        assert_eq!(split_qualified("t."), vec!["t", ""]);
    }
}
