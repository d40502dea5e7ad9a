//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Default bound on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options shared by the lexer and the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Accept unterminated quoted identifiers, strings and block comments.
    ///
    /// When false (the default) the unterminated text is lexed as a single
    /// [`TokenKind::Illegal`](crate::lexer::TokenKind::Illegal) token and the
    /// parse fails. When true the token silently runs to end of input.
    pub lenient_quotes: bool,
    /// Deepest expression nesting the parser accepts. Every group, call
    /// argument, operand and BETWEEN bound counts one level.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserOptions {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lenient_quotes: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets whether unterminated quotes are accepted.
    #[must_use]
    pub const fn lenient_quotes(mut self, lenient: bool) -> Self {
        self.lenient_quotes = lenient;
        self
    }

    /// Sets the deepest expression nesting the parser accepts.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
