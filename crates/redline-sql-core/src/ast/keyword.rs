//! Leaf nodes: keywords, operators and alias names.

use std::fmt;

use serde::Serialize;

use super::edit::{Child, Edit, EditError};
use super::node::{snapshot_of, write_trivia, ChildKey, Node, Trivia};
use crate::lexer::{self, TokenKind};

/// A keyword or operator token as typed in the source.
///
/// Renders canonically upper-cased; the original render keeps the exact
/// spelling, so `select` stays `select`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub preceding: Trivia,
    /// The token kind, e.g. `Keyword(Select)` or `Plus`.
    pub kind: TokenKind,
    /// The exact source text.
    pub literal: String,
    pub trailing: Trivia,
}

impl Keyword {
    /// Creates a keyword leaf without trivia.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            preceding: Trivia::new(),
            kind,
            literal: literal.into(),
            trailing: Trivia::new(),
        }
    }

    /// Creates a reserved-word leaf spelled as [`lexer::Keyword::as_str`].
    #[must_use]
    pub fn reserved(keyword: lexer::Keyword) -> Self {
        Self::new(TokenKind::Keyword(keyword), keyword.as_str())
    }

    /// Returns true if this leaf is the given reserved word.
    #[must_use]
    pub fn is(&self, keyword: lexer::Keyword) -> bool {
        self.kind.is_keyword(keyword)
    }

    /// Sets the preceding trivia.
    #[must_use]
    pub fn with_preceding(mut self, preceding: Trivia) -> Self {
        self.preceding = preceding;
        self
    }

    /// Sets the trailing trivia.
    #[must_use]
    pub fn with_trailing(mut self, trailing: Trivia) -> Self {
        self.trailing = trailing;
        self
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal.to_uppercase())
    }
}

impl Node for Keyword {
    fn node_type(&self) -> &'static str {
        "Keyword"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        out.push_str(&self.literal);
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        Vec::new()
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Edit for Keyword {
    fn child(&self, _key: &ChildKey) -> Option<Child> {
        None
    }

    fn replace_child(&self, key: &ChildKey, _child: Child) -> Result<Self, EditError> {
        Err(EditError::UnknownChild(key.clone()))
    }
}

/// An alias name introduced by `AS` or by juxtaposition.
///
/// Names are identifiers and keep their spelling in both renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    pub preceding: Trivia,
    pub value: String,
    pub trailing: Trivia,
}

impl Name {
    /// Creates a name leaf without trivia.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            preceding: Trivia::new(),
            value: value.into(),
            trailing: Trivia::new(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Node for Name {
    fn node_type(&self) -> &'static str {
        "Name"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        out.push_str(&self.value);
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        Vec::new()
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Edit for Name {
    fn child(&self, _key: &ChildKey) -> Option<Child> {
        None
    }

    fn replace_child(&self, key: &ChildKey, _child: Child) -> Result<Self, EditError> {
        Err(EditError::UnknownChild(key.clone()))
    }
}
