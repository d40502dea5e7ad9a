//! SQL Lexer
//!
//! A hand-written, pull-based lexer. Whitespace and comments are emitted as
//! ordinary tokens so the parser can keep them as trivia.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::{split_qualified, Lexer};
